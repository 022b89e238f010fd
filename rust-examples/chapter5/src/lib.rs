//! Chapter 5: Higher-Order Functions
//!
//! Functions that take or return functions, applied to a small genealogy:
//! - Filtering and mapping over records (`filter`, `map`)
//! - Summarizing with folds (`average`, grouping)
//! - Predicates over whole collections (`every`, `some`)

pub mod exercise_5_2; // Mother-child age difference
pub mod exercise_5_3; // Historical life expectancy
pub mod exercise_5_4; // Every and then some

/// Arithmetic mean of `values`, or `None` when there are none.
///
/// # Example
/// ```
/// use eloquent_chapter5::average;
/// assert_eq!(average(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(average(&[]), None);
/// ```
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
