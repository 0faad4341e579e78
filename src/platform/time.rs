//! Time sources
//!
//! The game never reads the wall clock directly; the frame loop passes a
//! `Clock` reading into every time-dependent call.

use std::cell::Cell;

/// Millisecond clock
pub trait Clock {
    fn now(&self) -> f64;
}

/// Manually advanced clock for tests and the headless demo
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// `Date.now()` in the browser
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClock;

#[cfg(target_arch = "wasm32")]
impl Clock for BrowserClock {
    fn now(&self) -> f64 {
        js_sys::Date::now()
    }
}
