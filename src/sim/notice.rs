//! Player-facing outcomes of game actions
//!
//! All text is in the game's single fixed locale.

use std::fmt;

use thiserror::Error;

/// Why an action did not change the session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("بودجه کافی نیست!")]
    InsufficientBudget { cost: u32, budget: u32 },
    #[error("ابتدا پل را بسازید!")]
    NoBeams,
    #[error("در حال تست...")]
    Busy,
    #[error("مصالح نامعتبر: {0}")]
    UnknownMaterial(usize),
}

impl Rejection {
    /// Whether the rejection is reported in the result banner.
    ///
    /// Clicks during a test and stale material buttons are dropped quietly.
    pub fn is_reported(&self) -> bool {
        matches!(self, Rejection::InsufficientBudget { .. } | Rejection::NoBeams)
    }
}

/// Something the result banner can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Vehicle made it across
    Crossed { vehicle: &'static str, earned: u64 },
    /// Bridge gave way under the vehicle
    Collapsed { required: u32, actual: u32 },
    /// An action was refused
    Rejected(Rejection),
}

/// Banner styling bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

impl Notice {
    pub fn kind(&self) -> NoticeKind {
        match self {
            Notice::Crossed { .. } => NoticeKind::Success,
            Notice::Collapsed { .. } | Notice::Rejected(_) => NoticeKind::Failure,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Crossed { vehicle, earned } => write!(
                f,
                "موفق! {vehicle} با موفقیت از پل عبور کرد. امتیاز: +{earned}"
            ),
            Notice::Collapsed { required, actual } => write!(
                f,
                "ناموفق! پل فروریخت. قدرت مورد نیاز: {required} | قدرت پل: {actual}"
            ),
            Notice::Rejected(r) => write!(f, "{r}"),
        }
    }
}

impl From<Rejection> for Notice {
    fn from(r: Rejection) -> Self {
        Notice::Rejected(r)
    }
}
