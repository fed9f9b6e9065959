// Model exports
pub mod domain;
pub mod responses;

pub use domain::{PersonRecord, CourtRecord, MatchedPerson};
pub use responses::MatchReport;
