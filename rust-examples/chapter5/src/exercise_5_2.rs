//! Exercise 5.2: Mother-Child Age Difference
//!
//! Using the genealogy, compute the average age difference between mothers
//! and their children (the mother's age at the child's birth). Only children
//! whose mother has a record of her own count.

use std::collections::HashMap;

use eloquent_common::Person;

use crate::average;

/// Index of people by name, borrowing from the loaded records.
pub type ByName<'a> = HashMap<&'a str, &'a Person>;

/// Builds the by-name index.
pub fn by_name(people: &[Person]) -> ByName<'_> {
    people.iter().map(|p| (p.name.as_str(), p)).collect()
}

/// The record of `person`'s mother, if she is in the index.
pub fn known_mother<'a>(person: &Person, index: &ByName<'a>) -> Option<&'a Person> {
    let mother = person.mother.as_deref()?;
    index.get(mother).copied()
}

/// True when `person`'s mother has a record in the index.
pub fn has_known_mother(person: &Person, index: &ByName<'_>) -> bool {
    known_mother(person, index).is_some()
}

/// Mother's age at `person`'s birth, if the mother is known.
pub fn age_difference(person: &Person, index: &ByName<'_>) -> Option<i32> {
    known_mother(person, index).map(|mother| person.born - mother.born)
}

/// Average mother's age at birth over everyone with a known mother.
pub fn average_mother_age_difference(people: &[Person]) -> Option<f64> {
    let index = by_name(people);
    let differences: Vec<f64> = people
        .iter()
        .filter_map(|p| age_difference(p, &index))
        .map(f64::from)
        .collect();
    tracing::debug!(pairs = differences.len(), "mother-child pairs");
    average(&differences)
}
