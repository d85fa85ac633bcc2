//! Time until the next scheduled server restart

use std::fmt;

/// Hours, minutes and seconds remaining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Countdown from local time `hour:minute:second` to the next restart.
///
/// The next restart is the first configured hour later than the current hour,
/// wrapping to the first one tomorrow. Exactly on the hour the result jumps
/// to a whole number of hours (`06:00:00` rather than `05:59:59`); the page
/// has always shown it that way. Returns `None` when no hours are configured.
pub fn next_restart(hour: u32, minute: u32, second: u32, restart_hours: &[u32]) -> Option<Countdown> {
    let next = restart_hours
        .iter()
        .copied()
        .find(|&h| h > hour)
        .or_else(|| restart_hours.first().copied())?;

    let hours_ahead = if next > hour {
        next - hour
    } else {
        (24 + next).saturating_sub(hour)
    };

    if minute == 0 && second == 0 {
        return Some(Countdown {
            hours: hours_ahead,
            minutes: 0,
            seconds: 0,
        });
    }
    Some(Countdown {
        hours: hours_ahead.saturating_sub(1),
        minutes: 59u32.saturating_sub(minute),
        seconds: 59u32.saturating_sub(second),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOURS: [u32; 4] = [0, 6, 12, 18];

    fn text(h: u32, m: u32, s: u32) -> String {
        next_restart(h, m, s, &HOURS).unwrap().to_string()
    }

    #[test]
    fn test_later_today() {
        assert_eq!(text(4, 30, 15), "01:29:44");
        assert_eq!(text(12, 0, 1), "05:59:58");
    }

    #[test]
    fn test_wraps_to_tomorrow() {
        assert_eq!(text(20, 10, 0), "03:49:59");
        assert_eq!(text(23, 59, 59), "00:00:00");
    }

    #[test]
    fn test_on_the_hour_jump() {
        assert_eq!(text(6, 0, 0), "06:00:00");
        assert_eq!(text(18, 0, 0), "06:00:00");
        // One second later the count is a whole second short of the hour mark
        assert_eq!(text(6, 0, 1), "05:59:58");
        assert_eq!(text(5, 59, 59), "00:00:00");
    }

    #[test]
    fn test_out_of_range_clock_does_not_underflow() {
        assert_eq!(text(4, 75, 90), "01:00:00");
        assert_eq!(text(4, 30, 61), "01:29:00");
    }

    #[test]
    fn test_single_and_empty_schedule() {
        assert_eq!(next_restart(10, 0, 30, &[3]).unwrap().to_string(), "16:59:29");
        assert!(next_restart(10, 0, 0, &[]).is_none());
    }
}
