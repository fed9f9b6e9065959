use serde::{Deserialize, Serialize};
use crate::models::domain::MatchedPerson;

/// Output of a full court-matching run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub total_people: usize,
    pub people: Vec<MatchedPerson>,
}

impl MatchReport {
    pub fn new(people: Vec<MatchedPerson>) -> Self {
        Self {
            generated_at: chrono::Utc::now(),
            total_people: people.len(),
            people,
        }
    }
}
