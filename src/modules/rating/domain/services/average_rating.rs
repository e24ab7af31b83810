use crate::modules::rating::domain::entities::Rating;
use crate::shared::utils::validation::{MAX_RATING, MIN_RATING};

/// Average rating of an item.
///
/// The mean of all rating values, or exactly `0.0` when there are none. The
/// result is always inside [0, 5], even for store contents that bypassed
/// validation.
pub fn average_rating(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let sum: f64 = ratings.iter().map(|r| r.value).sum();
    let mean = sum / ratings.len() as f64;

    if mean.is_nan() {
        return MIN_RATING;
    }
    mean.clamp(MIN_RATING, MAX_RATING)
}

/// Average expressed in tenths, i.e. rounded to one decimal place.
///
/// Used wherever averages are compared for equality.
pub fn average_in_tenths(ratings: &[Rating]) -> i64 {
    to_tenths(average_rating(ratings))
}

/// Round a value to one decimal place and return it as a whole number of tenths
pub fn to_tenths(value: f64) -> i64 {
    (value * 10.0).round() as i64
}
