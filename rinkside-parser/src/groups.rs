use crate::{DateGroup, Schedule};

impl Schedule {
    /// Bucket sessions by their date key, one pass over the collection.
    /// Groups appear in first-occurrence order of the key, not
    /// chronologically; callers wanting chronological group order re-sort
    /// with [`compare_dates`](crate::compare_dates).
    pub fn by_date(&self) -> Vec<DateGroup> {
        let mut groups: Vec<DateGroup> = Vec::new();

        for session in &self.sessions {
            match groups.iter_mut().find(|group| group.date == session.date) {
                Some(group) => group.sessions.push(session.clone()),
                None => groups.push(DateGroup {
                    date: session.date.clone(),
                    sessions: vec![session.clone()],
                }),
            }
        }

        groups
    }

    /// Distinct non-empty session labels in first-occurrence order.
    pub fn session_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();

        for session in &self.sessions {
            if !session.session.is_empty() && !labels.contains(&session.session) {
                labels.push(session.session.clone());
            }
        }

        labels
    }
}
