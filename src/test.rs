//! Contains various structs intended for testing purposes

use rand::{Rng as _, RngCore as _, SeedableRng as _, seq::SliceRandom as _};

/// The seed shared by all tests
pub const TEST_SEED: u64 = 0xa8bf17eb656f828d;
/// The rng used by each test
pub type Rng = rand::rngs::SmallRng;

/// Generate the `Rng` for a test
pub fn test_rng() -> Rng {
    Rng::seed_from_u64(TEST_SEED)
}

/// A unit struct that returns a random ordering when compared
#[derive(Debug, Clone)]
pub struct RandomOrdered(std::rc::Rc<std::cell::RefCell<rand::rngs::SmallRng>>);

impl RandomOrdered {
    /// Create a new [`Iterator`] of RandomOrdered, created with a shared [`rand::rngs::SmallRng`]
    pub fn new_iter(seed: u64) -> impl Iterator<Item = Self> {
        let rng = std::rc::Rc::new(std::cell::RefCell::new(
            rand::rngs::SmallRng::seed_from_u64(seed),
        ));

        std::iter::repeat_with(move || RandomOrdered(rng.clone()))
    }
}

impl PartialEq for RandomOrdered {
    fn eq(&self, _other: &Self) -> bool {
        self.0.borrow_mut().random()
    }
}

impl Eq for RandomOrdered {}

impl PartialOrd for RandomOrdered {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RandomOrdered {
    fn cmp(&self, _other: &Self) -> std::cmp::Ordering {
        match rand::random_range(0..3) {
            0 => std::cmp::Ordering::Less,
            1 => std::cmp::Ordering::Equal,
            2 => std::cmp::Ordering::Greater,
            _ => unreachable!(),
        }
    }
}

/// A struct that panicks with the likelihood of `1 / LIKELIHOOD` when compared.
#[derive(Debug, Clone)]
pub struct MaybePanickingOrdered<const LIKELIHOOD: usize, T: Ord>(
    std::rc::Rc<std::cell::RefCell<rand::rngs::SmallRng>>,
    T,
);

impl<const LIKELIHOOD: usize, T: Ord> MaybePanickingOrdered<LIKELIHOOD, T> {
    /// The wrapped element
    pub fn value(&self) -> &T {
        &self.1
    }

    /// Map an [`Iterator`] of `T` to `Self` with a shared [`rand::rngs::SmallRng`]
    pub fn map_iter(iter: impl Iterator<Item = T>, seed: u64) -> impl Iterator<Item = Self> {
        let rng = std::rc::Rc::new(std::cell::RefCell::new(
            rand::rngs::SmallRng::seed_from_u64(seed),
        ));

        iter.map(move |element| Self(rng.clone(), element))
    }
}

impl<const LIKELIHOOD: usize, T: Ord> PartialEq for MaybePanickingOrdered<LIKELIHOOD, T> {
    fn eq(&self, other: &Self) -> bool {
        match self.0.borrow_mut().random_range(0..LIKELIHOOD) {
            0 => panic!("MaybePanickingOrdered panicked during comparison"),
            _ => self.1.eq(&other.1),
        }
    }
}

impl<const LIKELIHOOD: usize, T: Ord> Eq for MaybePanickingOrdered<LIKELIHOOD, T> {}

impl<const LIKELIHOOD: usize, T: Ord> PartialOrd for MaybePanickingOrdered<LIKELIHOOD, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<const LIKELIHOOD: usize, T: Ord> Ord for MaybePanickingOrdered<LIKELIHOOD, T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.0.borrow_mut().random_range(0..LIKELIHOOD) {
            0 => panic!("MaybePanickingOrdered panicked during comparison"),
            _ => self.1.cmp(&other.1),
        }
    }
}

/// A Wrapper struct that tracks an original index with an ordered element,
/// used to test sort results for stability
#[derive(Debug, Clone)]
pub struct IndexedOrdered<T: Ord>(usize, T);

impl<T: Ord> IndexedOrdered<T> {
    /// Create a new iterator of `IndexedOrdered`, tracking the position of each element in `iter`
    pub fn map_iter(iter: impl Iterator<Item = T>) -> impl Iterator<Item = Self> {
        iter.enumerate()
            .map(|(index, element)| Self(index, element))
    }

    /// Check `slice` is sorted and check for stability, e.g. equal elements keeping initial ordering.
    pub fn is_stable_sorted(slice: &[Self]) -> bool {
        if slice.len() < 2 {
            return true;
        }

        let mut previous = &slice[0];
        for current in slice[1..].iter() {
            match current.cmp(previous) {
                // Slice is not sorted
                std::cmp::Ordering::Less => return false,
                // Elements are not stable
                std::cmp::Ordering::Equal if current.0 < previous.0 => return false,
                _ => {}
            }

            previous = current;
        }

        true
    }
}

impl<T: Ord> PartialEq for IndexedOrdered<T> {
    fn eq(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

impl<T: Ord> Eq for IndexedOrdered<T> {}

impl<T: Ord> PartialOrd for IndexedOrdered<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for IndexedOrdered<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.1.cmp(&other.1)
    }
}

/// Test the sort on an empty slice
pub fn test_empty<S: crate::algorithms::Sort>() {
    S::sort::<usize>(&mut []);
}

/// Test the sort on some random ordered slices and check they are sorted afterwords
pub fn test_random_sorted<const RUNS: usize, const TEST_SIZE: usize, S: crate::algorithms::Sort>() {
    let mut rng = test_rng();

    let mut values: Box<[usize]> = (0..TEST_SIZE).collect();

    for run in 0..RUNS {
        values.shuffle(&mut rng);
        S::sort(&mut values);
        assert!(values.is_sorted(), "Run {run} was not sorted");
    }

    let mut values: Box<[usize]> = std::iter::repeat_n(0..TEST_SIZE / 4, 4).flatten().collect();
    for run in 0..RUNS {
        values.shuffle(&mut rng);
        S::sort(&mut values);
        assert!(values.is_sorted(), "Run {run} was not sorted");
    }
}

/// Like [`test_random_sorted`] but additionally checks that the sort was stable
pub fn test_random_stable_sorted<
    const RUNS: usize,
    const TEST_SIZE: usize,
    S: crate::algorithms::Sort,
>() {
    assert!(S::IS_STABLE);

    let mut rng = test_rng();
    let mut values: Box<[usize]> = std::iter::repeat_n(0..TEST_SIZE / 4, 4).flatten().collect();
    let mut ordered_values: Box<[IndexedOrdered<usize>]>;

    for run in 0..RUNS {
        values.shuffle(&mut rng);
        ordered_values = IndexedOrdered::map_iter(values.iter().copied()).collect();
        S::sort(&mut ordered_values);
        assert!(
            IndexedOrdered::is_stable_sorted(&ordered_values),
            "Run {run} was not stable sorted"
        );
    }
}

/// Test the sort on presorted inputs: sorted, reversed, k-sorted, nearly sorted, plateaus
/// and sawtooth runs, each compared against the std sort
pub fn test_patterns_sorted<S: crate::algorithms::Sort>() {
    use crate::data::{
        Data as _, DuplicatesData, KSortedData, NearlySortedData, PlateauData, RandomRunsSqrtData,
        ReverseData, SortedData,
    };

    const SIZE: usize = 5_000;

    let mut rng = rand::rngs::StdRng::seed_from_u64(TEST_SEED);

    let inputs: [Vec<u32>; 7] = [
        SortedData::initialize(SIZE, &mut rng),
        ReverseData::initialize(SIZE, &mut rng),
        KSortedData::initialize(SIZE, &mut rng),
        NearlySortedData::initialize(SIZE, &mut rng),
        DuplicatesData::initialize(SIZE, &mut rng),
        PlateauData::initialize(SIZE, &mut rng),
        RandomRunsSqrtData::initialize(SIZE, &mut rng),
    ];

    for (index, input) in inputs.into_iter().enumerate() {
        let mut values = input.clone();
        let mut expected = input;
        S::sort(&mut values);
        expected.sort();

        assert_eq!(values, expected, "Pattern {index} was not sorted");
    }

    // Sawtooth of alternating ascending and descending runs
    let mut values: Box<[usize]> = (0..SIZE)
        .map(|index| if (index / 100) % 2 == 0 { index % 100 } else { 100 - index % 100 })
        .collect();
    S::sort(&mut values);
    assert!(values.is_sorted(), "Sawtooth was not sorted");
}

/// Run the sort with [`RandomOrdered`] and [`MaybePanickingOrdered`] elements, which must
/// neither cause UB nor lose elements, mostly useful for running under miri
pub fn test_soundness<S: crate::algorithms::Sort>() {
    const SIZE: usize = 1_000;
    const RUNS: usize = 20;

    let mut rng = test_rng();

    for _ in 0..RUNS {
        let mut elements: Box<[RandomOrdered]> =
            RandomOrdered::new_iter(rng.next_u64()).take(SIZE).collect();

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            S::sort(&mut elements);
        }));

        drop(elements);

        let values: Box<[u32]> = std::iter::repeat_with(|| rng.random_range(0..100))
            .take(SIZE)
            .collect();
        let mut expected = values.clone();
        expected.sort();

        let mut elements: Box<[MaybePanickingOrdered<SIZE, u32>]> =
            MaybePanickingOrdered::map_iter(values.into_iter(), rng.next_u64()).collect();

        // The types are not actually unwind safe but must not trigger UB anyway
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            S::sort(&mut elements);
        }));

        let mut remaining: Box<[u32]> = elements.iter().map(|element| *element.value()).collect();
        remaining.sort();
        assert_eq!(remaining, expected, "Sort lost or duplicated elements");
    }
}
