//! contains structs implementing [`two_way::MergingMethod`], which implement various strategies
//! for merging adjacent runs in a slice.

pub mod hybrid;
pub mod symmerge;
pub mod two_way;

pub mod util {
    /// Returns the smallest `index`, such that `slice[index] >= value`, or `slice.len()` if
    /// there is none. `slice` has to be sorted.
    pub fn lower_bound<T: Ord>(slice: &[T], value: &T) -> usize {
        let mut first = 0;
        let mut len = slice.len();

        while len > 0 {
            let half = len / 2;
            let middle = first + half;

            if slice[middle] < *value {
                first = middle + 1;
                len -= half + 1;
            } else {
                len = half;
            }
        }

        first
    }

    /// Returns the smallest `index`, such that `slice[index] > value`, or `slice.len()` if
    /// there is none. `slice` has to be sorted.
    pub fn upper_bound<T: Ord>(slice: &[T], value: &T) -> usize {
        let mut first = 0;
        let mut len = slice.len();

        while len > 0 {
            let half = len / 2;
            let middle = first + half;

            if slice[middle] <= *value {
                first = middle + 1;
                len -= half + 1;
            } else {
                len = half;
            }
        }

        first
    }

    /// Turns `slice[..pivot] ++ slice[pivot..]` into `slice[pivot..] ++ slice[..pivot]` by
    /// reversing both halves and then the whole slice.
    pub fn rotate<T>(slice: &mut [T], pivot: usize) {
        if pivot == 0 || pivot >= slice.len() {
            return;
        }

        #[cfg(feature = "counters")]
        super::ROTATION_COUNTER.increase(slice.len() as u64);

        slice[..pivot].reverse();
        slice[pivot..].reverse();
        slice.reverse();
    }

}

/// Copied from [`std::slice::sort::stable::BufGuard<T>`]
pub trait BufGuard<T> {
    /// Creates new buffer that holds at least `capacity` memory.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns mutable access to uninitialized memory owned by the buffer.
    fn as_uninit_slice_mut(&mut self) -> &mut [std::mem::MaybeUninit<T>];
}

#[allow(dead_code)]
pub static ALLOC_COUNTER: crate::data::GlobalCounter = crate::data::GlobalCounter::new();

impl<T> BufGuard<T> for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        #[cfg(feature = "counters")]
        ALLOC_COUNTER.increase(capacity as u64);

        Vec::with_capacity(capacity)
    }

    fn as_uninit_slice_mut(&mut self) -> &mut [std::mem::MaybeUninit<T>] {
        self.spare_capacity_mut()
    }
}

/// Counts the total length of all slices handed to a merge
#[allow(dead_code)]
pub static MERGE_SLICE_COUNTER: crate::data::GlobalCounter = crate::data::GlobalCounter::new();
/// Counts the elements moved through a merge buffer
#[allow(dead_code)]
pub static MERGE_BUFFER_COUNTER: crate::data::GlobalCounter = crate::data::GlobalCounter::new();
/// Counts the elements moved by rotations
#[allow(dead_code)]
pub static ROTATION_COUNTER: crate::data::GlobalCounter = crate::data::GlobalCounter::new();
