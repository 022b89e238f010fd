//! Chapter 6: Objects Demonstration
//!
//! Walks through the three exercises of the chapter: a vector type, table
//! cells behind a shared interface, and two takes on a sequence interface.
//!
//! Run with: cargo run --example objects_demo

use eloquent_chapter6::exercise_6_1::Vector;
use eloquent_chapter6::exercise_6_2::{
    Cell, Grid, StretchCell, TextCell, data_table, mountains, render,
};
use eloquent_chapter6::exercise_6_3::{ArraySeq, PersistentSeq, RangeSeq, log_five};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Chapter 6: The Secret Life of Objects ===\n");

    // =========================================================================
    // Exercise 6.1: A Vector Type
    // =========================================================================
    println!("Exercise 6.1: A Vector Type");
    println!("{}", "=".repeat(60));

    let a = Vector::new(1.0, 2.0);
    let b = Vector::new(2.0, 3.0);
    println!("  {a:?} + {b:?} = {:?}", a + b);
    println!("  {a:?} - {b:?} = {:?}", a - b);
    println!("  length of (3, 4) = {}", Vector::new(3.0, 4.0).length());

    // =========================================================================
    // Exercise 6.2: Laying Out a Table
    // =========================================================================
    println!("\n\nExercise 6.2: Laying Out a Table");
    println!("{}", "=".repeat(60));

    let grid = data_table(&mountains()?)?;
    println!("{}", render(&grid)?);

    println!("\nAnother cell: StretchCell(TextCell(\"abc\"), 1, 2)");
    let cell = StretchCell::new(TextCell::new("abc"), 1, 2);
    println!("  min_width  = {}", cell.min_width());
    println!("  min_height = {}", cell.min_height());
    println!("  draw(3, 2) = {:?}", cell.draw(3, 2));

    println!("\nStretch cells as a checkerboard:");
    let board: Grid = (0..3)
        .map(|r| {
            (0..4)
                .map(|c| {
                    let text = if (r + c) % 2 == 0 { "##" } else { "  " };
                    Box::new(StretchCell::new(TextCell::new(text), 2, 1)) as Box<dyn Cell>
                })
                .collect()
        })
        .collect();
    println!("{}", render(&board)?);

    // =========================================================================
    // Exercise 6.3: Sequence Interface
    // =========================================================================
    println!("\n\nExercise 6.3: Sequence Interface");
    println!("{}", "=".repeat(60));

    let mut stdout = std::io::stdout();
    println!("log_five(ArraySeq [1, 2]):");
    log_five(&mut ArraySeq::new(&[1, 2]), &mut stdout)?;
    println!("log_five(RangeSeq 100..=1000):");
    log_five(&mut RangeSeq::new(100, 1000), &mut stdout)?;

    let seq = PersistentSeq::new(["a", "b", "c"]);
    let rest = seq.rest().unwrap_or_else(|| seq.clone());
    println!("\nPersistent sequence:");
    println!("  head = {:?}, rest.head = {:?}", seq.head(), rest.head());
    println!("  still whole: {:?}", seq.values().collect::<Vec<_>>());

    Ok(())
}
