use crate::{Schedule, Session};

const HEADER: &str = "Date,Time,Instructor,Session,Location";

/// Parse a published CSV export into a [`Schedule`].
///
/// Lines are trimmed; blank lines and the header row are skipped. Fields are
/// split on plain commas; quoted fields are not handled. A row becomes a
/// session only when both date and time are present and at least one of
/// instructor/session is; anything else is dropped without an error.
pub fn parse_schedule<S: AsRef<str>>(s: S) -> Schedule {
    let sessions = s.as_ref().lines().filter_map(parse_row).collect();

    Schedule { sessions }
}

fn parse_row(line: &str) -> Option<Session> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(HEADER) {
        return None;
    }

    let mut fields = line.split(',').map(str::trim);

    let date = fields.next().unwrap_or_default();
    let time = fields.next().unwrap_or_default();
    let instructor = fields.next().unwrap_or_default();
    let session = fields.next().unwrap_or_default();
    let location = fields.next().unwrap_or_default();

    if date.is_empty() || time.is_empty() || (instructor.is_empty() && session.is_empty()) {
        return None;
    }

    Some(Session {
        date: normalize_date(date),
        time: time.to_string(),
        instructor: instructor.to_string(),
        session: session.to_string(),
        location: location.to_string(),
    })
}

/// Rewrite a dot-separated `DD.MM.YYYY` value to `MM/DD/YYYY`, keeping the
/// components textually intact. Anything else passes through unchanged.
fn normalize_date(date: &str) -> String {
    if !date.contains('.') {
        return date.to_string();
    }

    match date.split('.').collect::<Vec<_>>().as_slice() {
        [day, month, year] => format!("{month}/{day}/{year}"),
        _ => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_date, parse_schedule};

    #[test]
    fn parses_well_formed_rows() {
        let csv = "Date,Time,Instructor,Session,Location\n\
                   10.12.2025,09:00,Kris,Mobile Yoga,Rink A\n\
                   ,,,,\n\
                   10.12.2025,10:00,,Urban Obstacles,Rink B";

        let schedule = parse_schedule(csv);
        assert_eq!(schedule.sessions.len(), 2);

        let first = &schedule.sessions[0];
        assert_eq!(first.date, "12/10/2025");
        assert_eq!(first.time, "09:00");
        assert_eq!(first.instructor, "Kris");
        assert_eq!(first.session, "Mobile Yoga");
        assert_eq!(first.location, "Rink A");

        let second = &schedule.sessions[1];
        assert_eq!(second.instructor, "");
        assert_eq!(second.session, "Urban Obstacles");
    }

    #[test]
    fn trims_lines_and_fields() {
        let schedule = parse_schedule("  11.12.2025 , 14:00 , Si ,  Skate Cross , Rink A  \n");
        let session = &schedule.sessions[0];
        assert_eq!(session.date, "12/11/2025");
        assert_eq!(session.time, "14:00");
        assert_eq!(session.instructor, "Si");
        assert_eq!(session.session, "Skate Cross");
        assert_eq!(session.location, "Rink A");
    }

    #[test]
    fn drops_rows_missing_date_or_time_or_both_labels() {
        let csv = ",09:00,Kris,Mobile Yoga,Rink A\n\
                   10.12.2025,,Kris,Mobile Yoga,Rink A\n\
                   10.12.2025,09:00,,,Rink A";

        assert!(parse_schedule(csv).sessions.is_empty());
    }

    #[test]
    fn keeps_rows_with_only_instructor_or_only_session() {
        let csv = "10.12.2025,09:00,Kris,,\n\
                   10.12.2025,10:00,,Urban Obstacles,";

        assert_eq!(parse_schedule(csv).sessions.len(), 2);
    }

    #[test]
    fn missing_trailing_fields_become_empty() {
        let schedule = parse_schedule("10.12.2025,09:00,Kris,Mobile Yoga");
        assert_eq!(schedule.sessions[0].location, "");
    }

    #[test]
    fn slash_dates_pass_through() {
        let schedule = parse_schedule("12/10/2025,09:00,Kris,Mobile Yoga,Rink A");
        assert_eq!(schedule.sessions[0].date, "12/10/2025");
    }

    #[test]
    fn quoted_commas_mis_split_by_design() {
        // A quoted field containing a comma shifts the remaining columns.
        let schedule = parse_schedule("10.12.2025,09:00,\"Kris, Si\",Mobile Yoga,Rink A");
        let session = &schedule.sessions[0];
        assert_eq!(session.instructor, "\"Kris");
        assert_eq!(session.session, "Si\"");
        assert_eq!(session.location, "Mobile Yoga");
    }

    #[test]
    fn parses_a_full_published_export() {
        let schedule = parse_schedule(include_str!("../fixtures/schedule.csv"));

        // Header and the all-empty row are gone, everything else survives.
        assert_eq!(schedule.sessions.len(), 10);
        assert_eq!(
            schedule.unique_dates(),
            ["12/08/2025", "12/09/2025", "12/10/2025", "12/12/2025"]
        );
        assert_eq!(schedule.by_date().len(), 4);
    }

    #[test]
    fn normalizes_only_three_part_dot_dates() {
        assert_eq!(normalize_date("10.12.2025"), "12/10/2025");
        assert_eq!(normalize_date("09.07.2025"), "07/09/2025");
        assert_eq!(normalize_date("10.12"), "10.12");
        assert_eq!(normalize_date("12/10/2025"), "12/10/2025");
    }
}
