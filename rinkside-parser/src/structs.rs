#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One scheduled activity entry, as published in the spreadsheet exports.
///
/// `date` holds the normalized `MM/DD/YYYY`-style key; dot-separated source
/// dates are rewritten by the parser before a session is constructed. The
/// remaining fields are free text. `instructor`, `session` and `location`
/// may be empty, subject to the row inclusion rule in
/// [`parse_schedule`](crate::parse_schedule).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Session {
    pub date: String,
    pub time: String,
    pub instructor: String,
    pub session: String,
    pub location: String,
}

/// The ordered sessions of a single feed, in source row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    pub sessions: Vec<Session>,
}

/// The sessions sharing one date key, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DateGroup {
    pub date: String,
    pub sessions: Vec<Session>,
}
