mod category;
mod dates;
mod groups;
mod parser;
mod structs;

#[cfg(feature = "ics")]
mod ics;

pub use category::Category;
pub use dates::{compare_dates, display_date};
pub use parser::parse_schedule;
pub use structs::{DateGroup, Schedule, Session};
