//! Command line input handling

use runsort::algorithms::*;

/// Command line arguments
#[derive(clap::Parser)]
#[command(author, version, about)]
pub struct Args {
    /// The sorting algorithm to run
    #[arg()]
    pub algorithm: Algorithm,
    /// The data type to use for sorting
    #[arg()]
    pub data: DataType,
    /// The algorithm variant, use `-v=-1` to print available options
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub variant: isize,
    /// The number of runs to do
    #[arg(short, long, default_value_t = 1_000)]
    pub runs: usize,
    /// The size of the slices to sort
    #[arg(short, long, default_value_t = 1_000_000)]
    pub size: usize,
    /// Seed for the rng
    #[arg(long)]
    pub seed: Option<u64>,
    /// The output file to write the samples to
    pub output: Option<std::path::PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// The default sort in [`std`]
    Std,
    /// Merge all runs at once through a priority queue
    HeapKway,
    /// Merge runs on a balanced stack through a full size buffer
    BalancedStack,
    /// Merge runs on a balanced stack in place
    Symmerge,
    /// Merge runs on a balanced stack through a bounded buffer
    Hybrid,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match clap::ValueEnum::to_possible_value(self) {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

fn display<S: Sort>() -> String {
    S::display()
}

macro_rules! declare_variants {
    (
        $name:ident {
            $(
                $top_algorithm:pat => [
                    $(
                        $variant:ty
                    ),*
                    $(,)?
                ]
            ),*
            $(,)?
        }
    ) => {
        pub struct $name;

        impl $name {
            pub fn variants(algorithm: Algorithm) -> impl Iterator<Item = String> {
                let mut variants = Vec::new();
                declare_variants! { @match_algorithm
                    algorithm => Variant
                    ($(
                        $top_algorithm => [
                            $($variant),*
                        ]
                    ),*)
                    {
                        variants.push(display::<Variant>())
                    }
                }
                variants.into_iter()
            }

            pub fn sorter<T: Ord>(algorithm: Algorithm, variant: usize) -> Option<fn(&mut [T])> {
                let mut index = 0;

                declare_variants! { @match_algorithm
                    algorithm => Variant
                    ($(
                        $top_algorithm => [
                            $($variant),*
                        ]
                    ),*)
                    {
                        if variant == index {
                            return Some(<Variant as Sort>::sort);
                        } else {
                            index += 1;
                        }
                    }
                }

                None
            }

            pub fn is_stable(algorithm: Algorithm, variant: usize) -> Option<bool> {
                let mut index = 0;

                declare_variants! { @match_algorithm
                    algorithm => Variant
                    ($(
                        $top_algorithm => [
                            $($variant),*
                        ]
                    ),*)
                    {
                        if variant == index {
                            return Some(<Variant as Sort>::IS_STABLE);
                        } else {
                            index += 1;
                        }
                    }
                }

                None
            }
        }
    };
    (@match_algorithm
        $alg:expr => $variant_name:ident
        ($(
            $top_algorithm:pat => [
                $($variant:ty),*
            ]
        ),*)
        $code:block
    ) => {
        match $alg {
            $(
                $top_algorithm => {
                    $(
                        {
                            type $variant_name = $variant;

                            $code
                        }
                    )*
                }
            )*
        }
    };
}

declare_variants! {
    AlgorithmVariants {
        Algorithm::Std => [
            StdSort,
            StdSort<false>,
        ],
        Algorithm::HeapKway => [
            heap_merge::HeapKWaySort,
        ],
        Algorithm::BalancedStack => [
            BalancedStackSort,
        ],
        Algorithm::Symmerge => [
            SymmetricInPlaceSort,
        ],
        Algorithm::Hybrid => [
            HybridBufferedSort,
            balanced::StackMergeSort<merging::hybrid::HybridBuffered<512, 512>>,
            balanced::StackMergeSort<merging::hybrid::HybridBuffered<65536, 65536>>,
        ],
    }
}

impl AlgorithmVariants {
    pub fn validate(algorithm: Algorithm, variant: isize) -> Option<usize> {
        match variant.try_into() {
            Err(_) => None,
            Ok(result) => {
                if result < Self::variants(algorithm).count() {
                    Some(result)
                } else {
                    None
                }
            }
        }
    }
}

macro_rules! declare_data_types {
    (
        $(
            $name:ident : $d_type:ty
        ),*
        $(,)?
    ) => {
        /// Available data types for sorting
        #[derive(Debug, Clone, Copy, clap::ValueEnum)]
        pub enum DataType {
            $(
                $name
            ),*
        }

        impl DataType {
            /// Generate a new input of `size` elements
            pub fn initialize(self, size: usize, rng: &mut rand::rngs::StdRng) -> Vec<u32> {
                match self {
                    $(
                        DataType::$name => {
                            <$d_type as runsort::data::Data<u32>>::initialize(size, rng)
                        }
                    ),*
                }
            }
        }
    };
}

declare_data_types! {
    Random: runsort::data::RandomData,
    Uniform: runsort::data::UniformData<u32>,
    Sorted: runsort::data::SortedData,
    Reverse: runsort::data::ReverseData,
    KSorted: runsort::data::KSortedData,
    NearlySorted: runsort::data::NearlySortedData,
    Duplicates: runsort::data::DuplicatesData,
    Plateau: runsort::data::PlateauData,
    Permutation: runsort::data::PermutationData,
    RandomRunsSqrt: runsort::data::RandomRunsSqrtData,
    RandomRuns3: runsort::data::RandomRunsConstData<3>,
    RandomRuns30: runsort::data::RandomRunsConstData<30>,
    RandomRuns300: runsort::data::RandomRunsConstData<300>,
    RandomRuns3000: runsort::data::RandomRunsConstData<3000>,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match clap::ValueEnum::to_possible_value(self) {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}
