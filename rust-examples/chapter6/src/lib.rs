//! Chapter 6: The Secret Life of Objects
//!
//! This chapter is about interfaces: values that expose a small set of
//! operations and hide how they are stored.
//! - Methods and operator overloading (`impl`, `Add`, `Sub`)
//! - Polymorphism through a shared interface (traits, `Box<dyn Trait>`)
//! - Decorators that wrap another value and own it
//! - Iteration protocols (custom traits, `Iterator`)

pub mod exercise_6_1; // A Vector Type
pub mod exercise_6_2; // Laying Out a Table / Another Cell
pub mod exercise_6_3; // Sequence Interface

// Re-export commonly used items.
pub use exercise_6_1::Vector;
pub use exercise_6_2::{
    Cell, Grid, RTextCell, StretchCell, TableError, TableStyle, TextCell, UnderlinedCell,
    data_table, render,
};
pub use exercise_6_3::{ArraySeq, RangeSeq, Sequence};
