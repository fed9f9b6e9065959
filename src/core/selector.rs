use crate::models::CourtRecord;
use thiserror::Error;

/// Errors that can occur while picking a court
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("No courts found with desired type '{court_type}'")]
    NoMatchingCourtType { court_type: String },
}

/// Courts whose type labels contain `court_type` exactly
#[inline]
pub fn courts_of_type<'a, 'b>(
    courts: &'a [CourtRecord],
    court_type: &'b str,
) -> impl Iterator<Item = &'a CourtRecord> + 'b
where
    'a: 'b,
{
    courts.iter().filter(move |court| court.has_type(court_type))
}

/// Select the nearest court carrying `court_type`
///
/// Linear scan over the filtered courts keeping the strictly smallest
/// distance, so on ties the earliest court in API order wins.
pub fn nearest_court_of_type<'a>(
    courts: &'a [CourtRecord],
    court_type: &str,
) -> Result<&'a CourtRecord, SelectionError> {
    let mut candidates = courts_of_type(courts, court_type);

    let mut nearest = candidates.next().ok_or_else(|| SelectionError::NoMatchingCourtType {
        court_type: court_type.to_string(),
    })?;

    for court in candidates {
        if court.distance < nearest.distance {
            nearest = court;
        }
    }

    Ok(nearest)
}
