//! The k-way heap merging sort

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::runs::{RunCursor, RunScanner};

/// A natural mergesort merging all runs at once.
///
/// The runs are found without being reversed. A min-heap holds the current head of every
/// run, decreasing runs are walked from their end. Popping the heap `n` times yields the
/// position each element has to move to, which is then applied to the slice in place.
///
/// Equal heads of different runs leave the heap in an unspecified order, so this sort is
/// not stable.
#[derive(Debug, Clone, Copy)]
pub struct HeapKWaySort;

impl super::Sort for HeapKWaySort {
    const IS_STABLE: bool = false;

    fn display() -> String {
        "heap-k-way".to_string()
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        let order = merge_order(slice);

        // A single run in the right order leaves nothing to move
        if order.iter().enumerate().all(|(index, &source)| index == source) {
            return;
        }

        apply_permutation(slice, order);
    }
}

/// The head of a run inside the heap
struct Head<'a, T> {
    value: &'a T,
    cursor: RunCursor,
}

impl<T: Ord> PartialEq for Head<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Ord> Eq for Head<'_, T> {}

impl<T: Ord> PartialOrd for Head<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Head<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(other.value)
    }
}

/// Returns `order`, such that `slice[order[0]], slice[order[1]], ...` is sorted
pub fn merge_order<T: Ord>(slice: &[T]) -> Vec<usize> {
    let mut heap: BinaryHeap<Reverse<Head<'_, T>>> = RunScanner::new(slice)
        .filter_map(|run| {
            let cursor = run.cursor();
            let position = cursor.head()?;

            Some(Reverse(Head {
                value: &slice[position],
                cursor,
            }))
        })
        .collect();

    let mut order = Vec::with_capacity(slice.len());

    while let Some(Reverse(Head { value: _, mut cursor })) = heap.pop() {
        let Some(position) = cursor.head() else {
            continue;
        };
        order.push(position);

        cursor.advance();
        if let Some(next) = cursor.head() {
            heap.push(Reverse(Head {
                value: &slice[next],
                cursor,
            }));
        }
    }

    debug_assert_eq!(order.len(), slice.len());

    order
}

/// Rearrange `slice` such that the element previously at `order[i]` ends up at `i`.
///
/// Each cycle of the permutation is followed once, marking finished positions in `order`.
fn apply_permutation<T>(slice: &mut [T], mut order: Vec<usize>) {
    assert_eq!(slice.len(), order.len(), "Order has to cover the slice");

    for start in 0..order.len() {
        let mut current = start;

        loop {
            let source = std::mem::replace(&mut order[current], current);
            if source == current || source == start {
                break;
            }

            slice.swap(current, source);
            current = source;
        }
    }
}
