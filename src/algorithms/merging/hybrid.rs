//! The hybrid bounded buffer merging method

use super::two_way::{merge_with_buffer_left, merge_with_buffer_right};
use super::util::{lower_bound, rotate, upper_bound};

/// The default lower bound on the buffer capacity
pub const DEFAULT_MIN_BUFFER: usize = 256;

/// The default upper bound on the buffer capacity
pub const DEFAULT_MAX_BUFFER: usize = 4096;

/// A [`super::two_way::MergingMethod`] merging through a buffer of about `√n` elements,
/// clamped to `MIN_BUFFER..=MAX_BUFFER`. Setting both bounds to the same value gives a
/// fixed size buffer.
///
/// If one of the runs fits into the buffer they are merged linearly. Otherwise the larger
/// run is bisected like in [`super::symmerge::SymMerge`] and both halves are merged
/// recursively, until one side fits.
#[derive(Debug, Clone, Copy)]
pub struct HybridBuffered<
    const MIN_BUFFER: usize = DEFAULT_MIN_BUFFER,
    const MAX_BUFFER: usize = DEFAULT_MAX_BUFFER,
>;

impl<const MIN_BUFFER: usize, const MAX_BUFFER: usize> super::two_way::MergingMethod
    for HybridBuffered<MIN_BUFFER, MAX_BUFFER>
{
    const IS_STABLE: bool = true;

    fn display() -> String {
        if MIN_BUFFER == MAX_BUFFER {
            format!("hybrid-buffered (BUFFER = {MIN_BUFFER})")
        } else {
            format!("hybrid-buffered (BUFFER = sqrt(n) in {MIN_BUFFER}..={MAX_BUFFER})")
        }
    }

    fn merge<T: Ord>(slice: &mut [T], run_length: usize, buffer: &mut [std::mem::MaybeUninit<T>]) {
        assert!(
            run_length <= slice.len(),
            "Split points needs to be in bounds"
        );

        #[cfg(feature = "counters")]
        super::MERGE_SLICE_COUNTER.increase(slice.len() as u64);

        hybrid_merge(slice, run_length, buffer);
    }

    fn required_capacity(size: usize) -> usize {
        size.isqrt().clamp(MIN_BUFFER, MAX_BUFFER)
    }
}

/// Merge the sorted runs `slice[..mid]` and `slice[mid..]`, using `buffer` whenever one of
/// them fits into it.
pub fn hybrid_merge<T: Ord>(slice: &mut [T], mid: usize, buffer: &mut [std::mem::MaybeUninit<T>]) {
    let len1 = mid;
    let len2 = slice.len() - mid;

    if len1 == 0 || len2 == 0 || slice[mid - 1] <= slice[mid] {
        return;
    }

    if len1 <= buffer.len() {
        merge_with_buffer_left(slice, mid, buffer);
        return;
    }

    if len2 <= buffer.len() {
        merge_with_buffer_right(slice, mid, buffer);
        return;
    }

    if len1 >= len2 {
        // Bisect the left run, slice[mid1] ends up at new_mid
        let mid1 = len1 / 2;
        let mid2 = mid + lower_bound(&slice[mid..], &slice[mid1]);
        let new_mid = mid1 + (mid2 - mid);

        rotate(&mut slice[mid1..mid2], mid - mid1);

        hybrid_merge(&mut slice[..new_mid], mid1, buffer);
        hybrid_merge(&mut slice[new_mid + 1..], mid2 - new_mid - 1, buffer);
    } else {
        // Bisect the right run, slice[mid2] ends up at new_mid. Left elements equal to it
        // stay in front of it.
        let mid2 = mid + len2 / 2;
        let mid1 = upper_bound(&slice[..mid], &slice[mid2]);
        let new_mid = mid1 + (mid2 - mid);

        rotate(&mut slice[mid1..mid2 + 1], mid - mid1);

        hybrid_merge(&mut slice[..new_mid], mid1, buffer);
        hybrid_merge(&mut slice[new_mid + 1..], mid2 - new_mid, buffer);
    }
}
