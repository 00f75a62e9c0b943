//! The run based sorting algorithms and the traits tying them together

pub mod balanced;
pub mod heap_merge;
pub mod merging;
pub mod runs;

/// A sorting algorithm
pub trait Sort {
    /// Whether the sort is stable
    const IS_STABLE: bool;

    /// String representation of this sort
    fn display() -> String;

    /// Sort `slice` in non-decreasing order
    fn sort<T: Ord>(slice: &mut [T]);
}

/// Creates the buffers used by the merging sorts
pub trait BufGuardFactory {
    /// The buffer type handed out
    type Guard<T>: merging::BufGuard<T>;
}

/// The default [`BufGuardFactory`], allocating a [`Vec`] for each sort call
#[derive(Debug, Clone, Copy)]
pub struct DefaultBufGuardFactory;

impl BufGuardFactory for DefaultBufGuardFactory {
    type Guard<T> = Vec<T>;
}

/// The default sorts in [`std`], used as baseline
#[derive(Debug, Clone, Copy)]
pub struct StdSort<const STABLE: bool = true>;

impl<const STABLE: bool> Sort for StdSort<STABLE> {
    const IS_STABLE: bool = STABLE;

    fn display() -> String {
        if STABLE {
            "std-stable".to_string()
        } else {
            "std-unstable".to_string()
        }
    }

    fn sort<T: Ord>(slice: &mut [T]) {
        if STABLE {
            slice.sort();
        } else {
            slice.sort_unstable();
        }
    }
}

/// The stack sort merging linearly through a full size buffer
pub type BalancedStackSort = balanced::StackMergeSort<merging::two_way::Linear>;

/// The stack sort merging in place through rotations
pub type SymmetricInPlaceSort = balanced::StackMergeSort<merging::symmerge::SymMerge>;

/// The stack sort merging through a bounded buffer
pub type HybridBufferedSort = balanced::StackMergeSort<merging::hybrid::HybridBuffered>;

/// The merge strategies available through [`sort`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Merge all runs at once using a priority queue, see [`heap_merge::HeapKWaySort`]
    HeapKWay,
    /// Merge runs pairwise on a balanced stack using a full size buffer
    #[default]
    BalancedStack,
    /// Merge runs pairwise on a balanced stack, in place via rotations
    SymmetricInPlace,
    /// Merge runs pairwise on a balanced stack using a bounded buffer
    HybridBuffered,
}

impl Strategy {
    /// All available strategies
    pub const ALL: [Strategy; 4] = [
        Strategy::HeapKWay,
        Strategy::BalancedStack,
        Strategy::SymmetricInPlace,
        Strategy::HybridBuffered,
    ];

    /// Returns the sorting function
    pub fn sorter<T: Ord>(self) -> fn(&mut [T]) {
        match self {
            Strategy::HeapKWay => <heap_merge::HeapKWaySort as Sort>::sort,
            Strategy::BalancedStack => <BalancedStackSort as Sort>::sort,
            Strategy::SymmetricInPlace => <SymmetricInPlaceSort as Sort>::sort,
            Strategy::HybridBuffered => <HybridBufferedSort as Sort>::sort,
        }
    }

    /// Returns whether equal elements keep their relative order
    pub fn is_stable(self) -> bool {
        match self {
            Strategy::HeapKWay => <heap_merge::HeapKWaySort as Sort>::IS_STABLE,
            Strategy::BalancedStack => <BalancedStackSort as Sort>::IS_STABLE,
            Strategy::SymmetricInPlace => <SymmetricInPlaceSort as Sort>::IS_STABLE,
            Strategy::HybridBuffered => <HybridBufferedSort as Sort>::IS_STABLE,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Strategy::HeapKWay => "heap-k-way",
            Strategy::BalancedStack => "balanced-stack",
            Strategy::SymmetricInPlace => "symmetric-in-place",
            Strategy::HybridBuffered => "hybrid-buffered",
        })
    }
}

/// Sort `slice` in non-decreasing order, merging its natural runs with `strategy`
pub fn sort<T: Ord>(slice: &mut [T], strategy: Strategy) {
    strategy.sorter::<T>()(slice)
}
