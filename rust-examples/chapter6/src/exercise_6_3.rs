//! Exercise 6.3: Sequence Interface
//!
//! An interface that abstracts iteration over a collection. Two designs are
//! shown:
//!
//! 1. A stateful cursor ([`Sequence`]): `advance` moves forward and reports
//!    whether an element exists, `current` reads it. Keeping "is there more?"
//!    separate from "what is it?" means a sequence may hold any value,
//!    including one that looks like an end marker.
//! 2. A persistent sequence ([`PersistentSeq`]): `head` reads the first
//!    element and `rest` returns a new sequence for the remaining ones. A
//!    sequence value never changes, so it can be shared freely. Backed by
//!    `im::Vector`, taking the rest shares structure instead of copying.
//!
//! ## Key mappings
//!
//! - cursor `advance`/`current` → adapts to `Iterator` via [`SeqIter`]
//! - persistent `head`/`rest` → `im::Vector::front` / `im::Vector::skip`

use std::fmt::Display;
use std::io::{self, Write};

use im::Vector as ImVector;

// =============================================================================
// Stateful cursor
// =============================================================================

/// A forward-only cursor over a sequence of values.
pub trait Sequence {
    type Item;

    /// Moves to the next element. Returns `false` once the end is reached;
    /// the cursor then stays put.
    fn advance(&mut self) -> bool;

    /// The element under the cursor, or `None` before the first `advance`.
    fn current(&self) -> Option<Self::Item>;

    /// Turns the cursor into a standard iterator.
    fn into_values(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter(self)
    }
}

/// Adapts a [`Sequence`] into an [`Iterator`].
pub struct SeqIter<S>(S);

impl<S: Sequence> Iterator for SeqIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.advance() {
            self.0.current()
        } else {
            None
        }
    }
}

/// Cursor over a borrowed slice.
pub struct ArraySeq<'a, T> {
    items: &'a [T],
    pos: Option<usize>,
}

impl<'a, T> ArraySeq<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        ArraySeq { items, pos: None }
    }
}

impl<'a, T> Sequence for ArraySeq<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) -> bool {
        let next = self.pos.map_or(0, |p| p + 1);
        if next >= self.items.len() {
            return false;
        }
        self.pos = Some(next);
        true
    }

    fn current(&self) -> Option<&'a T> {
        self.pos.and_then(|p| self.items.get(p))
    }
}

/// Cursor over the integers `from..=to`.
pub struct RangeSeq {
    from: i64,
    to: i64,
    current: Option<i64>,
}

impl RangeSeq {
    pub fn new(from: i64, to: i64) -> Self {
        RangeSeq {
            from,
            to,
            current: None,
        }
    }
}

impl Sequence for RangeSeq {
    type Item = i64;

    fn advance(&mut self) -> bool {
        let next = match self.current {
            None => Some(self.from),
            Some(n) => n.checked_add(1),
        };
        match next {
            Some(n) if n <= self.to => {
                self.current = Some(n);
                true
            }
            _ => false,
        }
    }

    fn current(&self) -> Option<i64> {
        self.current
    }
}

/// Collects up to the first five elements of `seq`.
pub fn take_five<S: Sequence>(seq: &mut S) -> Vec<S::Item> {
    let mut taken = Vec::with_capacity(5);
    while taken.len() < 5 && seq.advance() {
        if let Some(item) = seq.current() {
            taken.push(item);
        }
    }
    taken
}

/// Writes up to the first five elements of `seq`, one per line.
///
/// # Example
/// ```
/// use eloquent_chapter6::exercise_6_3::{ArraySeq, log_five};
///
/// let mut out = Vec::new();
/// log_five(&mut ArraySeq::new(&[1, 2]), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n");
/// ```
pub fn log_five<S, W>(seq: &mut S, out: &mut W) -> io::Result<()>
where
    S: Sequence,
    S::Item: Display,
    W: Write,
{
    for item in take_five(seq) {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

// =============================================================================
// Persistent sequence
// =============================================================================

/// An immutable sequence: reading never changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistentSeq<T: Clone> {
    items: ImVector<T>,
}

impl<T: Clone> PersistentSeq<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        PersistentSeq {
            items: items.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first element, if any.
    pub fn head(&self) -> Option<&T> {
        self.items.front()
    }

    /// The sequence after the head, or `None` at the end.
    pub fn rest(&self) -> Option<Self> {
        if self.items.is_empty() {
            None
        } else {
            Some(PersistentSeq {
                items: self.items.skip(1),
            })
        }
    }

    /// Walks the sequence through repeated `rest` calls.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        std::iter::successors(Some(self.clone()), PersistentSeq::rest)
            .map_while(|seq| seq.head().cloned())
    }
}
