use std::mem::MaybeUninit;
use std::ptr;

/// Specifies ways to merge two adjacent runs in a slice, given a buffer
pub trait MergingMethod {
    /// Whether the merging method is stable
    const IS_STABLE: bool;

    /// String representation of this merging method
    fn display() -> String;

    /// Merge the two sorted runs `0..run_length` and `run_length..slice.len()`, potentially
    /// using `buffer`.
    fn merge<T: Ord>(slice: &mut [T], run_length: usize, buffer: &mut [MaybeUninit<T>]);

    /// The required capacity of the buffer, needed for merging slices with length less than
    /// or equal to `size`.
    fn required_capacity(size: usize) -> usize {
        size
    }
}

/// A [`MergingMethod`] implementation via a simple linear merging procedure, copying the
/// shorter run into the buffer.
///
/// The `buffer` given in [`Self::merge`] has to hold at least the shorter run.
#[derive(Debug, Clone, Copy)]
pub struct Linear;

impl MergingMethod for Linear {
    const IS_STABLE: bool = true;

    fn display() -> String {
        "linear".to_string()
    }

    fn merge<T: Ord>(slice: &mut [T], run_length: usize, buffer: &mut [MaybeUninit<T>]) {
        assert!(
            run_length <= slice.len(),
            "Split points needs to be in bounds"
        );

        if run_length == 0 || run_length == slice.len() {
            return;
        }

        #[cfg(feature = "counters")]
        super::MERGE_SLICE_COUNTER.increase(slice.len() as u64);

        if run_length <= slice.len() - run_length {
            merge_with_buffer_left(slice, run_length, buffer);
        } else {
            merge_with_buffer_right(slice, run_length, buffer);
        }
    }
}

/// Owns the elements `start..end` of a merge buffer and moves them to `dest` when dropped.
///
/// While merging, the number of buffered elements always equals the size of the gap
/// starting at `dest`, so dropping the guard (also during unwinding, if a comparison
/// panicked) fills the gap and leaves the slice a permutation of its input.
struct BufferDrain<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for BufferDrain<T> {
    fn drop(&mut self) {
        // SAFETY: `start..end` is a range of initialized elements inside one buffer allocation,
        // and the gap at `dest` is exactly as long and lies in the (disjoint) slice. Each
        // buffered element is moved back exactly once.
        unsafe {
            let count = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, count);
        }
    }
}

/// Merge `slice[..mid]` and `slice[mid..]` front to back, after moving `slice[..mid]` into
/// `buffer`. Equal elements are taken from the left run first.
///
/// # Panics
///
/// Panics if `mid > slice.len()` or `buffer` is shorter than `mid`.
pub fn merge_with_buffer_left<T: Ord>(
    slice: &mut [T],
    mid: usize,
    buffer: &mut [MaybeUninit<T>],
) {
    let len = slice.len();
    assert!(mid <= len, "Split point has to be within slice bounds");
    assert!(buffer.len() >= mid, "We need at least mid buffer size");

    if mid == 0 || mid == len || std::mem::size_of::<T>() == 0 {
        return;
    }

    #[cfg(feature = "counters")]
    super::MERGE_BUFFER_COUNTER.increase(mid as u64);

    // SAFETY: The left run is moved into the buffer, leaving a gap of `mid` elements at the
    // start of the slice. Each step moves exactly one element into the front of the gap,
    // either from the buffer or from the right run, so the gap shifts right but keeps its
    // size equal to the number of buffered elements. `drain` puts the remaining buffered
    // elements into the gap once the loop is done or a comparison panics.
    unsafe {
        let slice_ptr = slice.as_mut_ptr();
        let buffer_ptr = buffer.as_mut_ptr() as *mut T;

        ptr::copy_nonoverlapping(slice_ptr, buffer_ptr, mid);

        let mut drain = BufferDrain {
            start: buffer_ptr,
            end: buffer_ptr.add(mid),
            dest: slice_ptr,
        };

        let mut right = slice_ptr.add(mid);
        let right_end = slice_ptr.add(len);

        while drain.start < drain.end && right < right_end {
            let take_right = *right < *drain.start;

            let source = if take_right {
                let source = right;
                right = right.add(1);
                source
            } else {
                let source = drain.start;
                drain.start = drain.start.add(1);
                source
            };

            ptr::copy_nonoverlapping(source, drain.dest, 1);
            drain.dest = drain.dest.add(1);
        }
    }
}

/// Merge `slice[..mid]` and `slice[mid..]` back to front, after moving `slice[mid..]` into
/// `buffer`. Equal elements are taken from the left run first.
///
/// # Panics
///
/// Panics if `mid > slice.len()` or `buffer` is shorter than `slice.len() - mid`.
pub fn merge_with_buffer_right<T: Ord>(
    slice: &mut [T],
    mid: usize,
    buffer: &mut [MaybeUninit<T>],
) {
    let len = slice.len();
    assert!(mid <= len, "Split point has to be within slice bounds");
    assert!(
        buffer.len() >= len - mid,
        "We need at least slice.len() - mid buffer size"
    );

    if mid == 0 || mid == len || std::mem::size_of::<T>() == 0 {
        return;
    }

    #[cfg(feature = "counters")]
    super::MERGE_BUFFER_COUNTER.increase((len - mid) as u64);

    // SAFETY: Mirrors `merge_with_buffer_left`. The right run is moved into the buffer,
    // leaving a gap of `len - mid` elements between the end of the left run (`drain.dest`)
    // and `output`. Each step moves the largest remaining element to the back of the gap,
    // so the gap keeps its size equal to the number of buffered elements.
    unsafe {
        let slice_ptr = slice.as_mut_ptr();
        let buffer_ptr = buffer.as_mut_ptr() as *mut T;

        ptr::copy_nonoverlapping(slice_ptr.add(mid), buffer_ptr, len - mid);

        let mut drain = BufferDrain {
            start: buffer_ptr,
            end: buffer_ptr.add(len - mid),
            dest: slice_ptr.add(mid),
        };

        let mut output = slice_ptr.add(len);

        while slice_ptr < drain.dest && drain.start < drain.end {
            let left = drain.dest.sub(1);
            let right = drain.end.sub(1);
            let take_left = *right < *left;

            output = output.sub(1);
            if take_left {
                ptr::copy_nonoverlapping(left, output, 1);
                drain.dest = left;
            } else {
                ptr::copy_nonoverlapping(right, output, 1);
                drain.end = right;
            }
        }
    }
}
