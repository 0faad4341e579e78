//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only enters as explicit clock readings
//! - No rendering or platform dependencies
//! - One `Session` owns all mutable state

pub mod actions;
pub mod catalog;
pub mod evaluate;
pub mod notice;
pub mod scene;
pub mod state;
pub mod test_run;

pub use actions::{Command, Outcome, TestStep, advance_test, apply};
pub use catalog::{LAST_VEHICLE, MATERIALS, Material, MaterialKind, VEHICLES, Vehicle};
pub use evaluate::{Evaluation, evaluate};
pub use notice::{Notice, NoticeKind, Rejection};
pub use scene::{Beam, CONNECTION_POINTS, Point, deck_y_at, total_strength};
pub use state::{GamePhase, Session};
pub use test_run::{TestFrame, TestRun};
