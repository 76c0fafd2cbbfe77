//! Deadline proximity classification
//!
//! Deadlines are stored as date strings and compared against "today" as whole
//! calendar days. The string is taken apart as year-month-day components
//! rather than parsed as a timestamp, so the result never shifts across
//! timezones.

use chrono::NaiveDate;
use std::fmt;

/// How close a deadline is, in calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    /// No deadline set (empty string), or one that could not be read
    NoDeadline,
    /// Deadline passed this many days ago
    Overdue(i64),
    DueToday,
    DueTomorrow,
    /// More than one day away
    DaysLeft(i64),
}

impl fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDeadline => write!(f, "No deadline"),
            Self::Overdue(days) => write!(f, "{} days overdue", days),
            Self::DueToday => write!(f, "Due today"),
            Self::DueTomorrow => write!(f, "Due tomorrow"),
            Self::DaysLeft(days) => write!(f, "{} days left", days),
        }
    }
}

/// Read a deadline string as plain year-month-day components
///
/// Accepts unpadded components ("2024-1-5"). Anything that is not three
/// integer components forming a real date gives None.
pub fn parse_deadline_date(deadline: &str) -> Option<NaiveDate> {
    let mut parts = deadline.trim().splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Classify a deadline against today
pub fn classify_deadline(deadline: &str, today: NaiveDate) -> DeadlineStatus {
    if deadline.trim().is_empty() {
        return DeadlineStatus::NoDeadline;
    }

    let Some(date) = parse_deadline_date(deadline) else {
        return DeadlineStatus::NoDeadline;
    };

    let diff_days = (date - today).num_days();
    match diff_days {
        d if d < 0 => DeadlineStatus::Overdue(-d),
        0 => DeadlineStatus::DueToday,
        1 => DeadlineStatus::DueTomorrow,
        d => DeadlineStatus::DaysLeft(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_due_today() {
        assert_eq!(classify_deadline("2024-01-10", today()), DeadlineStatus::DueToday);
    }

    #[test]
    fn test_one_day_overdue() {
        assert_eq!(
            classify_deadline("2024-01-09", today()),
            DeadlineStatus::Overdue(1)
        );
    }

    #[test]
    fn test_due_tomorrow() {
        assert_eq!(
            classify_deadline("2024-01-11", today()),
            DeadlineStatus::DueTomorrow
        );
    }

    #[test]
    fn test_days_left() {
        assert_eq!(
            classify_deadline("2024-01-20", today()),
            DeadlineStatus::DaysLeft(10)
        );
    }

    #[test]
    fn test_empty_is_no_deadline() {
        assert_eq!(classify_deadline("", today()), DeadlineStatus::NoDeadline);
        assert_eq!(classify_deadline("   ", today()), DeadlineStatus::NoDeadline);
    }

    #[test]
    fn test_unreadable_is_no_deadline() {
        assert_eq!(classify_deadline("soon", today()), DeadlineStatus::NoDeadline);
        assert_eq!(
            classify_deadline("2024-01-10T00:00:00Z", today()),
            DeadlineStatus::NoDeadline
        );
        // Component values that do not form a real date
        assert_eq!(
            classify_deadline("2024-13-40", today()),
            DeadlineStatus::NoDeadline
        );
    }

    #[test]
    fn test_unpadded_components() {
        assert_eq!(classify_deadline("2024-1-10", today()), DeadlineStatus::DueToday);
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(DeadlineStatus::NoDeadline.to_string(), "No deadline");
        assert_eq!(DeadlineStatus::Overdue(3).to_string(), "3 days overdue");
        assert_eq!(DeadlineStatus::DueToday.to_string(), "Due today");
        assert_eq!(DeadlineStatus::DueTomorrow.to_string(), "Due tomorrow");
        assert_eq!(DeadlineStatus::DaysLeft(12).to_string(), "12 days left");
    }
}
