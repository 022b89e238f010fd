//! Exercise 5.4: Every and Then Some
//!
//! `every` holds when a predicate is true for all elements, `some` when it is
//! true for at least one. Both stop at the first element that settles the
//! answer. They mirror `Iterator::all` and `Iterator::any`.

/// True if `test` holds for every element. Vacuously true for an empty slice.
///
/// # Example
/// ```
/// use eloquent_chapter5::exercise_5_4::every;
/// assert!(every(&[f64::NAN, f64::NAN], |x| x.is_nan()));
/// assert!(!every(&[f64::NAN, 4.0], |x| x.is_nan()));
/// ```
pub fn every<T, F>(items: &[T], test: F) -> bool
where
    F: Fn(&T) -> bool,
{
    for item in items {
        if !test(item) {
            return false;
        }
    }
    true
}

/// True if `test` holds for at least one element. False for an empty slice.
///
/// # Example
/// ```
/// use eloquent_chapter5::exercise_5_4::some;
/// assert!(some(&[f64::NAN, 3.0, 4.0], |x| x.is_nan()));
/// assert!(!some(&[2.0, 3.0, 4.0], |x: &f64| x.is_nan()));
/// ```
pub fn some<T, F>(items: &[T], test: F) -> bool
where
    F: Fn(&T) -> bool,
{
    for item in items {
        if test(item) {
            return true;
        }
    }
    false
}
