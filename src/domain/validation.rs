//! Pure input validation.
//!
//! Each function accepts raw user text and either returns the typed value or the
//! `AppError` that explains what is wrong. Re-prompting is the caller's concern.

use super::AppError;

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// Parse a rating, accepting any finite number in `0..=10`.
pub fn parse_rating(input: &str) -> Result<f64, AppError> {
    let trimmed = input.trim();
    let rating: f64 =
        trimmed.parse().map_err(|_| AppError::InvalidRating(trimmed.to_string()))?;
    validate_rating(rating)
}

/// Check an already-numeric rating against the accepted range.
pub fn validate_rating(rating: f64) -> Result<f64, AppError> {
    if rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(AppError::InvalidRating(rating.to_string()))
    }
}

/// Parse a release year. Any integer is accepted.
pub fn parse_year(input: &str) -> Result<i32, AppError> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| AppError::InvalidYear(trimmed.to_string()))
}

/// Reject blank names. The name itself is kept exactly as typed.
pub fn validate_name(name: &str) -> Result<&str, AppError> {
    if name.trim().is_empty() { Err(AppError::InvalidName) } else { Ok(name) }
}
