use chrono::{Datelike, Local};

/// Source of the ISO week number used to pick this week's menu link.
pub trait WeekClock {
    fn current_week(&self) -> u32;
}

/// Reads the week from the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl WeekClock for LocalClock {
    fn current_week(&self) -> u32 {
        Local::now().date_naive().iso_week().week()
    }
}

/// Always reports the same week. Backs `--week` and the discovery tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedWeek(pub u32);

impl WeekClock for FixedWeek {
    fn current_week(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_clock_reports_a_valid_iso_week() {
        let week = LocalClock.current_week();
        assert!((1..=53).contains(&week));
    }

    #[test]
    fn fixed_week_is_stable() {
        assert_eq!(FixedWeek(7).current_week(), 7);
    }
}
