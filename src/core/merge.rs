use crate::models::{CourtRecord, MatchedPerson, PersonRecord};

/// Combine a person with their selected court
///
/// The DX number is only carried over when the court has one; otherwise the
/// field is left out of the serialized record entirely.
pub fn combine_person_with_court(person: PersonRecord, court: &CourtRecord) -> MatchedPerson {
    MatchedPerson {
        person,
        nearest_court_of_right_type: court.name.clone(),
        dx_number: court.dx_number.clone(),
        distance_to_court: court.distance,
    }
}
