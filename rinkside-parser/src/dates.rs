use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::Schedule;

/// Interpret a stored date string as a calendar date.
///
/// Dot-separated values are read as `day.month.year`; anything else is tried
/// against the normalized `MM/DD/YYYY` form and then ISO `YYYY-MM-DD`.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.contains('.') {
        let mut parts = s.split('.');
        let day = parts.next()?.trim().parse().ok()?;
        let month = parts.next()?.trim().parse().ok()?;
        let year = parts.next()?.trim().parse().ok()?;

        return NaiveDate::from_ymd_opt(year, month, day);
    }

    NaiveDate::parse_from_str(s, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

/// Format a stored date string for display, e.g.
/// `"Wednesday, December 10, 2025"`.
///
/// Total: any input that does not resolve to a real calendar date is
/// returned unchanged, never an error.
pub fn display_date(s: &str) -> String {
    match parse_date(s) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => s.to_string(),
    }
}

/// Chronological comparison of two stored date strings.
///
/// This is a total order: unparsable values sort ahead of real dates and
/// lexically among themselves, so it is safe to hand to `sort_by`.
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

impl Schedule {
    /// Distinct date keys in chronological order.
    pub fn unique_dates(&self) -> Vec<String> {
        let mut dates: Vec<String> = Vec::new();
        for session in &self.sessions {
            if !dates.contains(&session.date) {
                dates.push(session.date.clone());
            }
        }

        dates.sort_by(|a, b| compare_dates(a, b));
        dates
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{compare_dates, display_date};
    use crate::parse_schedule;

    #[test]
    fn displays_both_encodings_in_long_form() {
        assert_eq!(display_date("10.12.2025"), "Wednesday, December 10, 2025");
        assert_eq!(display_date("12/10/2025"), "Wednesday, December 10, 2025");
        assert_eq!(display_date("2025-12-10"), "Wednesday, December 10, 2025");
        assert_eq!(display_date("1/9/2026"), "Friday, January 9, 2026");
    }

    #[test]
    fn unparsable_input_is_returned_unchanged() {
        assert_eq!(display_date(""), "");
        assert_eq!(display_date("TBD"), "TBD");
        assert_eq!(display_date("32.13.2025"), "32.13.2025");
        assert_eq!(display_date("99/99/9999"), "99/99/9999");
        assert_eq!(display_date("10.12"), "10.12");
    }

    #[test]
    fn compares_across_encodings_chronologically() {
        assert_eq!(compare_dates("9.12.2025", "12/10/2025"), Ordering::Less);
        assert_eq!(compare_dates("12/10/2025", "11.12.2025"), Ordering::Less);
        assert_eq!(compare_dates("10.12.2025", "12/10/2025"), Ordering::Equal);
    }

    #[test]
    fn garbage_sorts_lexically_and_ahead_of_real_dates() {
        assert_eq!(compare_dates("apple", "banana"), Ordering::Less);
        assert_eq!(compare_dates("TBD", "12/10/2025"), Ordering::Less);
        assert_eq!(compare_dates("12/10/2025", "TBD"), Ordering::Greater);
    }

    #[test]
    fn comparator_is_transitive_across_mixed_values() {
        // A lexical-only fallback would order "5abc" between these two dates
        // and break transitivity.
        assert_eq!(compare_dates("9.12.2025", "12/10/2025"), Ordering::Less);
        assert_eq!(compare_dates("5abc", "9.12.2025"), Ordering::Less);
        assert_eq!(compare_dates("5abc", "12/10/2025"), Ordering::Less);
    }

    #[test]
    fn unique_dates_are_sorted_and_deduplicated() {
        let csv = "12/12/2025,09:00,Kris,Mobile Yoga,\n\
                   10.12.2025,09:00,Si,Skate Cross,\n\
                   1/2/2026,09:00,Tomasz,Edges Training,\n\
                   12/12/2025,10:00,Mike,Fundamentals,\n\
                   11/30/2025,09:00,Tomy,Speed Skating,";

        let dates = parse_schedule(csv).unique_dates();
        assert_eq!(dates, ["11/30/2025", "12/10/2025", "12/12/2025", "1/2/2026"]);
    }

    #[test]
    fn unique_dates_sorts_large_feeds_mixing_encodings_and_garbage() {
        let mut csv = String::new();
        for i in 0..300usize {
            let date = match i % 3 {
                0 => format!("{}.{}.2025", i % 27 + 1, i % 12 + 1),
                1 => format!("{}/{}/2026", i % 12 + 1, i % 27 + 1),
                _ => format!("N{i}z"),
            };
            csv.push_str(&date);
            csv.push_str(",09:00,Kris,Mobile Yoga,\n");
        }

        let dates = parse_schedule(&csv).unique_dates();
        assert!(!dates.is_empty());

        for pair in dates.windows(2) {
            assert_ne!(compare_dates(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn unique_dates_is_idempotent_and_empty_on_empty_input() {
        let schedule = parse_schedule("10.12.2025,09:00,Kris,,\n09.12.2025,09:00,Si,,");
        assert_eq!(schedule.unique_dates(), schedule.unique_dates());
        assert!(parse_schedule("").unique_dates().is_empty());
    }
}
