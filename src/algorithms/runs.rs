//! Natural run detection
//!
//! A run is a maximal weakly increasing or strictly decreasing subslice. Runs of equal
//! elements always count as increasing, so reversing a decreasing run never reorders
//! equal elements.

use std::ops::Range;

/// The order of the elements of a detected [`Run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Weakly increasing, i.e. `slice[i] <= slice[i + 1]`
    Ascending,
    /// Strictly decreasing, i.e. `slice[i] > slice[i + 1]`
    Descending,
}

/// A run `start..end` as found in the slice, before any reversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub end: usize,
    pub direction: Direction,
}

impl Run {
    /// The number of elements in this run
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the run contains no elements
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The indices covered by this run
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// A cursor yielding the positions of this run in ascending element order
    pub fn cursor(&self) -> RunCursor {
        RunCursor {
            position: match self.direction {
                Direction::Ascending => self.start,
                Direction::Descending => self.end.wrapping_sub(1),
            },
            remaining: self.len(),
            direction: self.direction,
        }
    }
}

/// Walks over the positions of a [`Run`], smallest element first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunCursor {
    position: usize,
    remaining: usize,
    direction: Direction,
}

impl RunCursor {
    /// The position of the current head, `None` once the run is exhausted
    pub fn head(&self) -> Option<usize> {
        (self.remaining != 0).then_some(self.position)
    }

    /// Move past the current head
    pub fn advance(&mut self) {
        assert!(self.remaining != 0, "Cannot advance an exhausted run");

        self.remaining -= 1;
        if self.remaining != 0 {
            match self.direction {
                Direction::Ascending => self.position += 1,
                Direction::Descending => self.position -= 1,
            }
        }
    }

    /// The number of positions left
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// Iterates through `iter` and returns the first element `current` with the proceeding element
/// `next`, such that `f(current, next) == true` and returns `Some(current)`
///
/// If `f(current, next)` is never true, returns `Ok(None)`.
///
/// # Errors
///
/// Returns `Err` if `iter` returns `None` at the start
fn find_first_sequentially<T>(
    mut iter: impl Iterator<Item = T>,
    mut f: impl FnMut(&T, &T) -> bool,
) -> Result<Option<T>, ()> {
    let mut current = iter.next().ok_or(())?;

    for next in iter {
        if f(&current, &next) {
            return Ok(Some(current));
        } else {
            current = next;
        }
    }

    Ok(None)
}

/// Returns the largest `index`, such that `slice[..index]` is weakly increasing
pub fn weakly_increasing_prefix_index<T: Ord>(slice: &[T]) -> usize {
    let iter = slice.iter().enumerate();

    match find_first_sequentially(iter, |(_, current), (_, next)| current > next) {
        Ok(Some((index, _))) => index + 1,
        Ok(None) => slice.len(),
        Err(()) => 0,
    }
}

/// Returns the largest `index`, such that `slice[..index]` is strictly decreasing
pub fn strictly_decreasing_prefix_index<T: Ord>(slice: &[T]) -> usize {
    let iter = slice.iter().enumerate();

    match find_first_sequentially(iter, |(_, current), (_, next)| current <= next) {
        Ok(Some((index, _))) => index + 1,
        Ok(None) => slice.len(),
        Err(()) => 0,
    }
}

/// Find the run starting at `start` without modifying `slice`
pub fn scan_run<T: Ord>(slice: &[T], start: usize) -> Run {
    assert!(start <= slice.len(), "Run start needs to be in bounds");

    let rest = &slice[start..];
    if rest.len() < 2 {
        return Run {
            start,
            end: slice.len(),
            direction: Direction::Ascending,
        };
    }

    let (length, direction) = if rest[0] > rest[1] {
        (strictly_decreasing_prefix_index(rest), Direction::Descending)
    } else {
        (weakly_increasing_prefix_index(rest), Direction::Ascending)
    };

    Run {
        start,
        end: start + length,
        direction,
    }
}

/// Find the run starting at `start` and reverse it if it is decreasing, so that
/// `slice[result]` is weakly increasing afterwards
pub fn next_run<T: Ord>(slice: &mut [T], start: usize) -> Range<usize> {
    let run = scan_run(slice, start);

    if run.direction == Direction::Descending {
        slice[run.range()].reverse();
    }

    run.range()
}

/// Detect all runs of `slice` from left to right, making each of them ascending
pub fn detect_runs<T: Ord>(slice: &mut [T]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = 0;

    while start < slice.len() {
        let run = next_run(slice, start);
        start = run.end;
        runs.push(run);
    }

    runs
}

/// An [`Iterator`] over the runs of a slice as returned by [`scan_run`]
#[derive(Debug, Clone)]
pub struct RunScanner<'a, T> {
    slice: &'a [T],
    start: usize,
}

impl<'a, T: Ord> RunScanner<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, start: 0 }
    }
}

impl<T: Ord> Iterator for RunScanner<'_, T> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        if self.start >= self.slice.len() {
            return None;
        }

        let run = scan_run(self.slice, self.start);
        self.start = run.end;

        Some(run)
    }
}
