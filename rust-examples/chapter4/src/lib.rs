//! Chapter 4: Data Structures: Objects and Arrays
//!
//! This chapter builds compound values out of simpler ones:
//! - Objects as bundles of named properties (structs)
//! - Arrays as ordered sequences (slices, `Vec`)
//! - Recursive data: a singly linked list built from nested nodes

pub mod exercise_4_3; // A List

// Re-export commonly used items.
pub use exercise_4_3::{List, Node, array_to_list, list_to_array, nth, prepend};
