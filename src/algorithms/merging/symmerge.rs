//! The symmerge in place merging method

use super::util::{lower_bound, rotate};

/// A [`super::two_way::MergingMethod`] merging in place through rotations, needing no buffer
/// at all.
///
/// The left run is bisected, the position of its middle element in the right run is found
/// by binary search and the elements in between are rotated, after which both halves are
/// merged recursively. The recursion depth is at most `log2(run_length) + 1`.
#[derive(Debug, Clone, Copy)]
pub struct SymMerge;

impl super::two_way::MergingMethod for SymMerge {
    const IS_STABLE: bool = true;

    fn display() -> String {
        "symmerge".to_string()
    }

    fn merge<T: Ord>(
        slice: &mut [T],
        run_length: usize,
        _buffer: &mut [std::mem::MaybeUninit<T>],
    ) {
        assert!(
            run_length <= slice.len(),
            "Split points needs to be in bounds"
        );

        #[cfg(feature = "counters")]
        super::MERGE_SLICE_COUNTER.increase(slice.len() as u64);

        symmerge(slice, run_length);
    }

    fn required_capacity(_size: usize) -> usize {
        0
    }
}

/// Merge the sorted runs `slice[..mid]` and `slice[mid..]` in place
pub fn symmerge<T: Ord>(slice: &mut [T], mid: usize) {
    let len1 = mid;
    let len2 = slice.len() - mid;

    if len1 == 0 || len2 == 0 {
        return;
    }

    if len1 + len2 == 2 {
        if slice[1] < slice[0] {
            slice.swap(0, 1);
        }
        return;
    }

    let mid1 = len1 / 2;
    let mid2 = mid + lower_bound(&slice[mid..], &slice[mid1]);
    let new_mid = mid1 + (mid2 - mid);

    // Move the right elements smaller than slice[mid1] in front of it
    rotate(&mut slice[mid1..mid2], mid - mid1);

    symmerge(&mut slice[..new_mid], mid1);
    symmerge(&mut slice[new_mid + 1..], mid2 - new_mid - 1);
}
