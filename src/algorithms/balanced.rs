//! The balanced run stack sort

use std::ops::Range;

use super::merging::BufGuard as _;

/// The default [`super::merging::two_way::MergingMethod`] to use
pub type DefaultMergingMethod = super::merging::two_way::Linear;

/// The default BufGuardFactory to use
pub type DefaultBufGuardFactory = super::DefaultBufGuardFactory;

/// A natural mergesort keeping its pending runs on a stack.
///
/// Runs are detected left to right. Before a run is pushed, it is merged with the top of the
/// stack for as long as it is at least as long as that top, so the stack stays ordered by
/// decreasing run length. Once the slice is exhausted the remaining runs are merged from the
/// top down.
///
/// Since only strictly shorter runs are pushed, the stack holds at most about `√(2n)` runs.
/// Inputs made of runs with decreasing lengths reach that bound, making the final collapse
/// cost `O(n√n)`.
pub struct StackMergeSort<
    M: super::merging::two_way::MergingMethod = DefaultMergingMethod,
    B: super::BufGuardFactory = DefaultBufGuardFactory,
>(std::marker::PhantomData<M>, std::marker::PhantomData<B>);

impl<M: super::merging::two_way::MergingMethod, B: super::BufGuardFactory> super::Sort
    for StackMergeSort<M, B>
{
    const IS_STABLE: bool = M::IS_STABLE;

    fn display() -> String {
        format!("balanced-stack ({})", M::display())
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        if slice.len() < 2 {
            return;
        }

        // The buffer is owned by this call and reused by every merge
        let mut buffer = <B::Guard<T>>::with_capacity(M::required_capacity(slice.len()));

        Self::stack_merge_sort(slice, buffer.as_uninit_slice_mut());
    }
}

impl<M: super::merging::two_way::MergingMethod, B: super::BufGuardFactory> StackMergeSort<M, B> {
    fn stack_merge_sort<T: Ord>(slice: &mut [T], buffer: &mut [std::mem::MaybeUninit<T>]) {
        // Pushed run lengths strictly decrease, so k runs cover at least k(k + 1) / 2 elements
        let mut stack: Vec<Range<usize>> =
            Vec::with_capacity(slice.len().saturating_mul(2).isqrt() + 1);
        let mut start = 0;

        while start < slice.len() {
            let mut current = super::runs::next_run(slice, start);
            start = current.end;

            while let Some(top) = stack.pop() {
                if current.len() < top.len() {
                    stack.push(top);
                    break;
                }

                M::merge(&mut slice[top.start..current.end], top.len(), buffer);
                debug_assert!(slice[top.start..current.end].is_sorted());

                current.start = top.start;
            }

            stack.push(current);
        }

        debug_assert_eq!(start, slice.len());

        // Collapse the remaining runs, each popped run is the left operand
        let Some(mut merged) = stack.pop() else {
            return;
        };

        while let Some(left) = stack.pop() {
            M::merge(&mut slice[left.start..merged.end], left.len(), buffer);
            merged.start = left.start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::merging::{hybrid::HybridBuffered, symmerge::SymMerge, two_way::Linear};
    use super::*;

    const RUNS: usize = 20;
    const TEST_SIZE: usize = 10_000;

    type StackLinear = StackMergeSort<Linear>;
    type StackSymMerge = StackMergeSort<SymMerge>;
    type StackHybrid = StackMergeSort<HybridBuffered>;
    type StackHybridFixed = StackMergeSort<HybridBuffered<16, 16>>;

    #[test]
    fn empty() {
        crate::test::test_empty::<StackLinear>();
        crate::test::test_empty::<StackSymMerge>();
        crate::test::test_empty::<StackHybrid>();
        crate::test::test_empty::<StackHybridFixed>();
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, StackLinear>();
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, StackSymMerge>();
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, StackHybrid>();
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, StackHybridFixed>();
    }

    #[test]
    fn random_stable() {
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, StackLinear>();
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, StackSymMerge>();
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, StackHybrid>();
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, StackHybridFixed>();
    }

    #[test]
    fn presorted_patterns() {
        crate::test::test_patterns_sorted::<StackLinear>();
        crate::test::test_patterns_sorted::<StackSymMerge>();
        crate::test::test_patterns_sorted::<StackHybrid>();
        crate::test::test_patterns_sorted::<StackHybridFixed>();
    }

    #[test]
    fn shrinking_runs() {
        // Ascending runs of length 60, 59, ..., 1, each starting below the previous one
        let values: Vec<u32> = (1..=60u32)
            .rev()
            .flat_map(|length| (0..length).map(move |offset| 100 * length + offset))
            .collect();
        let mut expected = values.clone();
        expected.sort();

        assert_eq!(
            super::super::runs::detect_runs(&mut values.clone()).len(),
            60
        );

        let sorters: [fn(&mut [u32]); 4] = [
            <StackLinear as super::super::Sort>::sort,
            <StackSymMerge as super::super::Sort>::sort,
            <StackHybrid as super::super::Sort>::sort,
            <StackHybridFixed as super::super::Sort>::sort,
        ];

        for sorter in sorters {
            let mut sorted = values.clone();
            sorter(&mut sorted);
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn soundness() {
        crate::test::test_soundness::<StackLinear>();
        crate::test::test_soundness::<StackSymMerge>();
        crate::test::test_soundness::<StackHybrid>();
        crate::test::test_soundness::<StackHybridFixed>();
    }
}
