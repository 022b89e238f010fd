//! Exercise 5.3: Historical Life Expectancy
//!
//! Group the people in the genealogy by the century they died in, then
//! average the ages at death per group. A person is assigned to century
//! `ceil(died / 100)`, so someone who died in 1905 belongs to the 20th.
//!
//! The grouping step is a general [`group_by`] over any slice and key
//! function; the statistics are built on top of it.

use std::collections::BTreeMap;
use std::fmt::Write;

use eloquent_common::Person;

use crate::average;

/// Century a person died in.
pub fn century(person: &Person) -> i32 {
    (f64::from(person.died) / 100.0).ceil() as i32
}

/// Groups borrowed items by the key `key_fn` computes for each.
///
/// Groups come back ordered by key; items keep their input order within a
/// group.
///
/// # Example
/// ```
/// use eloquent_chapter5::exercise_5_3::group_by;
/// let words = ["apple", "avocado", "banana"];
/// let groups = group_by(&words, |w| w.chars().next().unwrap());
/// assert_eq!(groups[&'a'], vec![&"apple", &"avocado"]);
/// assert_eq!(groups[&'b'], vec![&"banana"]);
/// ```
pub fn group_by<T, K, F>(items: &[T], key_fn: F) -> BTreeMap<K, Vec<&T>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.iter().fold(BTreeMap::new(), |mut groups, item| {
        groups.entry(key_fn(item)).or_insert_with(Vec::new).push(item);
        groups
    })
}

/// Average age at death per century of death.
pub fn average_age_by_century(people: &[Person]) -> BTreeMap<i32, f64> {
    group_by(people, century)
        .into_iter()
        .filter_map(|(century, group)| {
            let ages: Vec<f64> = group.iter().map(|p| f64::from(p.age())).collect();
            average(&ages).map(|avg| (century, avg))
        })
        .collect()
}

/// Formats per-century averages one per line, e.g. `16: 43.5`.
pub fn format_century_averages(averages: &BTreeMap<i32, f64>) -> String {
    averages
        .iter()
        .fold(String::new(), |mut out, (century, avg)| {
            if !out.is_empty() {
                out.push('\n');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{century}: {avg:.1}");
            out
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eloquent_common::{Sex, dataset::ancestry};

    fn person(born: i32, died: i32) -> Person {
        Person {
            name: format!("p{born}"),
            sex: Sex::Male,
            born,
            died,
            father: None,
            mother: None,
        }
    }

    #[test]
    fn test_century_boundaries() {
        assert_eq!(century(&person(1800, 1900)), 19);
        assert_eq!(century(&person(1800, 1901)), 20);
        assert_eq!(century(&person(1500, 1582)), 16);
    }

    #[test]
    fn test_group_by_preserves_order_within_group() {
        let numbers = [5, 2, 8, 3, 6];
        let groups = group_by(&numbers, |n| n % 2 == 0);
        assert_eq!(groups[&true], vec![&2, &8, &6]);
        assert_eq!(groups[&false], vec![&5, &3]);
    }

    #[test]
    fn test_group_by_empty() {
        let empty: [i32; 0] = [];
        assert!(group_by(&empty, |n| *n).is_empty());
    }

    #[test]
    fn test_average_age_by_century_small() {
        let people = vec![person(1850, 1910), person(1870, 1950), person(1790, 1850)];
        let averages = average_age_by_century(&people);
        assert_eq!(averages[&19], 60.0);
        assert_eq!(averages[&20], 70.0);
    }

    #[test]
    fn test_embedded_dataset_life_expectancy() {
        let people = ancestry().unwrap();
        let averages = average_age_by_century(&people);
        assert_eq!(
            format_century_averages(&averages),
            "16: 43.5\n17: 51.2\n18: 52.8\n19: 54.8\n20: 84.7\n21: 94.0"
        );
    }
}
