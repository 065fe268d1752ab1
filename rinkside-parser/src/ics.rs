use chrono::{Duration, NaiveTime};
use ics::{
    properties::{DtEnd, DtStart, Location, Organizer, RRule, Summary, TzName},
    Daylight, Standard, TimeZone,
};

use crate::dates::parse_date;
use crate::{Schedule, Session};

impl Schedule {
    /// Export the schedule as an iCalendar. Only sessions with a
    /// machine-readable date and start time become events; everything else
    /// is skipped.
    #[must_use]
    pub fn to_ics<'a>(&'a self, name: &'a str) -> ics::ICalendar<'a> {
        let mut cet_standard = Standard::new("19701025T030000", "+0200", "+0100");
        cet_standard.push(TzName::new("CET"));
        cet_standard.push(RRule::new("FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU"));

        let mut cest_daylight = Daylight::new("19700329T020000", "+0100", "+0200");
        cest_daylight.push(TzName::new("CEST"));
        cest_daylight.push(RRule::new("FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU"));

        let mut timezone = TimeZone::daylight("Europe/Berlin", cest_daylight);
        timezone.add_standard(cet_standard);

        let mut icalendar = ics::ICalendar::new("2.0", name);
        icalendar.add_timezone(timezone);

        for session in &self.sessions {
            if let Some(event) = session.to_ics() {
                icalendar.add_event(event);
            }
        }

        icalendar
    }
}

impl Session {
    /// `None` when the date or start time is not machine-readable. A missing
    /// end time defaults to one hour after the start.
    #[must_use]
    pub fn to_ics(&self) -> Option<ics::Event<'_>> {
        let date = parse_date(&self.date)?;
        let (start, end) = parse_times(&self.time)?;
        let end = end.unwrap_or(start + Duration::try_hours(1)?);

        let summary = if self.session.is_empty() {
            self.instructor.as_str()
        } else {
            self.session.as_str()
        };

        let start_stamp = format!("{}T{}00", date.format("%Y%m%d"), start.format("%H%M"));
        let end_stamp = format!("{}T{}00", date.format("%Y%m%d"), end.format("%H%M"));

        let id = format!("{}_{}", start_stamp, summary.replace(' ', "-"));

        let mut ics_event = ics::Event::new(id, start_stamp.clone());

        ics_event.push(DtStart::new(start_stamp));
        ics_event.push(DtEnd::new(end_stamp));
        ics_event.push(Summary::new(summary));

        if !self.location.is_empty() {
            ics_event.push(Location::new(self.location.as_str()));
        }

        if !self.instructor.is_empty() {
            ics_event.push(Organizer::new(self.instructor.as_str()));
        }

        Some(ics_event)
    }
}

/// Pull a start and optional end time out of the free-text time field.
/// Accepts `HH:MM` and `HH:MM - HH:MM` shapes.
fn parse_times(time: &str) -> Option<(NaiveTime, Option<NaiveTime>)> {
    let mut parts = time.splitn(2, '-');

    let start = NaiveTime::parse_from_str(parts.next()?.trim(), "%H:%M").ok()?;
    let end = parts
        .next()
        .and_then(|raw| NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok());

    Some((start, end))
}
