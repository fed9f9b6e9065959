// Service exports
pub mod court_finder;
pub mod people;

pub use court_finder::{CourtFinderClient, CourtFinderError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use people::{load_people, parse_people, PeopleError};
