// Core algorithm exports
pub mod merge;
pub mod pipeline;
pub mod selector;
pub mod time_sum;

pub use merge::combine_person_with_court;
pub use pipeline::{CourtMatcher, PipelineError};
pub use selector::{courts_of_type, nearest_court_of_type, SelectionError};
pub use time_sum::{current_time_string, sum_current_time, TimeError};
