#[cfg(feature = "serde")]
use serde::Serialize;

/// Presentation category of a session label, used to pick a badge color.
/// Not involved in any filtering logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum Category {
    Yoga,
    Obstacles,
    Skating,
    Edges,
    Fundamentals,
    Lunch,
    Other,
}

impl Category {
    /// Case-insensitive keyword match against the label, in fixed priority
    /// order; the first keyword that matches wins.
    pub fn of(label: &str) -> Self {
        let label = label.to_lowercase();

        if label.contains("yoga") {
            Self::Yoga
        } else if label.contains("obstacles") {
            Self::Obstacles
        } else if label.contains("skate") || label.contains("skating") {
            Self::Skating
        } else if label.contains("edge") {
            Self::Edges
        } else if label.contains("fundamental") {
            Self::Fundamentals
        } else if label.contains("lunch") {
            Self::Lunch
        } else {
            Self::Other
        }
    }
}
