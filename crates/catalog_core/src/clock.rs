//! Calendar-year sources for time-dependent validation.
//!
//! # Responsibility
//! - Provide the "current year" used by year-range checks and age math.
//! - Allow callers and tests to inject a fixed year instead of the wall clock.
//!
//! # Invariants
//! - `SystemClock` is read at call time; results change as real time passes.
//! - `FixedYear` never changes for its lifetime.

use chrono::{Datelike, Local};

/// Source of the calendar year considered "now".
pub trait YearSource {
    fn current_year(&self) -> i32;
}

/// Reads the local calendar year from the system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl YearSource for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Constant year, used for deterministic runs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearSource for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

impl<T: YearSource + ?Sized> YearSource for &T {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}

/// Current year according to the system clock.
pub fn system_year() -> i32 {
    SystemClock.current_year()
}

#[cfg(test)]
mod tests {
    use super::{FixedYear, SystemClock, YearSource};

    #[test]
    fn fixed_year_is_constant() {
        let clock = FixedYear(2024);
        assert_eq!(clock.current_year(), 2024);
        assert_eq!((&clock).current_year(), 2024);
    }

    #[test]
    fn system_clock_reports_a_plausible_year() {
        assert!(SystemClock.current_year() >= 2024);
    }
}
