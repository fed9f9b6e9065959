//! Court Finder - nearest-court lookup for a list of people
//!
//! Joins people (name, postcode, desired court type) with the nearest court of
//! that type from the Courts and Tribunals Finder API. Also ships a small
//! `HH:MM:SS` digit-summing utility.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CourtMatcher, PipelineError, nearest_court_of_type, combine_person_with_court, sum_current_time, TimeError};
pub use crate::models::{PersonRecord, CourtRecord, MatchedPerson, MatchReport};
pub use crate::services::{CourtFinderClient, CourtFinderError, load_people, PeopleError};
