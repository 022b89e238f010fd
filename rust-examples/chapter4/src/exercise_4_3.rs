//! Exercise 4.3: A List
//!
//! A list is a nested set of nodes, each holding a value and the rest of the
//! list. The empty list is `None`.
//!
//! ```text
//! array_to_list(&[1, 2, 3])
//!
//!   Some ──▶ Node { value: 1, rest: Some ──▶ Node { value: 2, rest: Some ──▶ Node { value: 3, rest: None } } }
//! ```
//!
//! Each node exclusively owns the rest of the list through a `Box`, so a list
//! is freed front to back when dropped and no reference counting is needed.
//!
//! ## Example
//!
//! ```
//! use eloquent_chapter4::exercise_4_3::*;
//!
//! let list = array_to_list(&[10, 20, 30]);
//! assert_eq!(list_to_array(&list), vec![10, 20, 30]);
//! assert_eq!(nth(&list, 1), Some(&20));
//!
//! let list = prepend(0, list);
//! assert_eq!(display(&list), "{value: 0, rest: {value: 10, rest: {value: 20, rest: {value: 30, rest: null}}}}");
//! ```

use std::fmt;

/// A possibly empty linked list.
pub type List<T> = Option<Box<Node<T>>>;

/// One link of a [`List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub rest: List<T>,
}

// ============================================================================
// Construction
// ============================================================================

/// Builds a list holding the elements of `array` in order.
///
/// The list is built back to front, so each element is prepended exactly once.
pub fn array_to_list<T: Clone>(array: &[T]) -> List<T> {
    array
        .iter()
        .rev()
        .fold(None, |rest, value| prepend(value.clone(), rest))
}

/// Returns a new list with `value` in front of `list`.
#[inline]
pub fn prepend<T>(value: T, list: List<T>) -> List<T> {
    Some(Box::new(Node { value, rest: list }))
}

// ============================================================================
// Access
// ============================================================================

/// Borrowing iterator over the values of a list.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.rest.as_deref();
            &node.value
        })
    }
}

/// Iterates over the values of `list` from front to back.
pub fn iter<T>(list: &List<T>) -> Iter<'_, T> {
    Iter {
        next: list.as_deref(),
    }
}

/// Collects the values of `list` into a vector.
pub fn list_to_array<T: Clone>(list: &List<T>) -> Vec<T> {
    iter(list).cloned().collect()
}

/// Returns the element at position `n`, or `None` past the end.
pub fn nth<T>(list: &List<T>, n: usize) -> Option<&T> {
    iter(list).nth(n)
}

/// Recursive version of [`nth`]: walk one node per call.
pub fn nth_recursive<T>(list: &List<T>, n: usize) -> Option<&T> {
    let node = list.as_deref()?;
    if n == 0 {
        Some(&node.value)
    } else {
        nth_recursive(&node.rest, n - 1)
    }
}

/// Number of nodes in `list`.
pub fn length<T>(list: &List<T>) -> usize {
    iter(list).count()
}

// ============================================================================
// Display
// ============================================================================

/// Wrapper that formats a list as nested `{value: .., rest: ..}` records.
pub struct ListDisplay<'a, T>(pub &'a List<T>);

impl<T: fmt::Display> fmt::Display for ListDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0;
        for value in iter(self.0) {
            write!(f, "{{value: {value}, rest: ")?;
            depth += 1;
        }
        f.write_str("null")?;
        for _ in 0..depth {
            f.write_str("}")?;
        }
        Ok(())
    }
}

/// Renders `list` as nested records, e.g. `{value: 10, rest: null}`.
pub fn display<T: fmt::Display>(list: &List<T>) -> String {
    ListDisplay(list).to_string()
}
