use serde::{Deserialize, Serialize};
use validator::Validate;

/// One person read from the people table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PersonRecord {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "home_postcode must not be empty"))]
    pub home_postcode: String,
    #[validate(length(min = 1, message = "looking_for_court_type must not be empty"))]
    pub looking_for_court_type: String,
}

/// Court as returned by the Courts and Tribunals Finder search endpoint
///
/// Only the fields the matcher needs are kept; everything else in the API
/// payload (`lat`, `lon`, `slug`, `address`, `areas_of_law`, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtRecord {
    pub name: String,
    #[serde(default)]
    pub dx_number: Option<String>,
    pub distance: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub types: Vec<String>,
}

impl CourtRecord {
    /// Exact, case-sensitive membership test on the court's type labels
    pub fn has_type(&self, court_type: &str) -> bool {
        self.types.iter().any(|t| t == court_type)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A person enriched with their nearest court of the desired type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPerson {
    #[serde(flatten)]
    pub person: PersonRecord,
    pub nearest_court_of_right_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dx_number: Option<String>,
    pub distance_to_court: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_ignores_unknown_fields() {
        let json = r#"{
            "name": "Central London Employment Tribunal",
            "lat": 51.5158158439741,
            "lon": -0.118745425821452,
            "slug": "central-london-employment-tribunal",
            "types": ["Tribunal"],
            "address": {"postcode": "WC2B 6EX", "town": "London"},
            "dx_number": "141420 Bloomsbury 7",
            "distance": 1.29
        }"#;

        let court: CourtRecord = serde_json::from_str(json).unwrap();
        assert_eq!(court.name, "Central London Employment Tribunal");
        assert_eq!(court.dx_number.as_deref(), Some("141420 Bloomsbury 7"));
        assert_eq!(court.distance, 1.29);
        assert!(court.has_type("Tribunal"));
    }

    #[test]
    fn test_court_missing_optional_fields() {
        let json = r#"{"name": "Some Court", "dx_number": null, "distance": 3.0, "types": null}"#;
        let court: CourtRecord = serde_json::from_str(json).unwrap();
        assert!(court.dx_number.is_none());
        assert!(court.types.is_empty());

        let json = r#"{"name": "Other Court", "distance": 0.4}"#;
        let court: CourtRecord = serde_json::from_str(json).unwrap();
        assert!(court.dx_number.is_none());
        assert!(court.types.is_empty());
    }

    #[test]
    fn test_has_type_is_case_sensitive() {
        let court = CourtRecord {
            name: "Court".to_string(),
            dx_number: None,
            distance: 1.0,
            types: vec!["County Court".to_string()],
        };

        assert!(court.has_type("County Court"));
        assert!(!court.has_type("county court"));
        assert!(!court.has_type("County"));
    }
}
