use crate::core::{merge::combine_person_with_court, selector::{nearest_court_of_type, SelectionError}};
use crate::models::{MatchedPerson, PersonRecord};
use crate::services::{CourtFinderClient, CourtFinderError};
use thiserror::Error;

/// Failure for a single person; aborts the whole run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("court lookup failed for {person}: {source}")]
    Lookup {
        person: String,
        #[source]
        source: CourtFinderError,
    },

    #[error("court selection failed for {person}: {source}")]
    Selection {
        person: String,
        #[source]
        source: SelectionError,
    },
}

/// Court-matching orchestrator
///
/// # Pipeline Stages
/// 1. Look up the courts nearest the person's postcode
/// 2. Keep courts of the desired type and pick the nearest
/// 3. Merge the court into the person's record
///
/// People are processed one at a time, in input order.
pub struct CourtMatcher {
    client: CourtFinderClient,
}

impl CourtMatcher {
    pub fn new(client: CourtFinderClient) -> Self {
        Self { client }
    }

    /// Find the nearest court of the desired type for one person
    pub async fn match_person(&self, person: PersonRecord) -> Result<MatchedPerson, PipelineError> {
        let courts = self
            .client
            .get_courts(&person.home_postcode)
            .await
            .map_err(|source| PipelineError::Lookup {
                person: person.name.clone(),
                source,
            })?;

        let court = nearest_court_of_type(&courts, &person.looking_for_court_type).map_err(|source| {
            PipelineError::Selection {
                person: person.name.clone(),
                source,
            }
        })?;

        tracing::info!(
            "{} -> {} ({} miles)",
            person.name,
            court.name,
            court.distance
        );

        Ok(combine_person_with_court(person, court))
    }

    /// Match every person in order
    ///
    /// The first failure is returned immediately; no partial results are kept.
    pub async fn find_courts_for_people(
        &self,
        people: Vec<PersonRecord>,
    ) -> Result<Vec<MatchedPerson>, PipelineError> {
        let total = people.len();
        let mut courts_found = Vec::with_capacity(total);

        for person in people {
            match self.match_person(person).await {
                Ok(matched) => courts_found.push(matched),
                Err(e) => {
                    tracing::error!("Aborting run after {}/{} people: {}", courts_found.len(), total, e);
                    return Err(e);
                }
            }
        }

        Ok(courts_found)
    }
}
