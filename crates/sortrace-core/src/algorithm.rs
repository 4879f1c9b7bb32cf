#![forbid(unsafe_code)]

//! The closed catalogue of supported sorting algorithms.
//!
//! Name-keyed lookup happens exactly once, at the boundary, through
//! [`FromStr`]. Everything downstream dispatches on [`Algorithm`] with an
//! exhaustive `match`.

use std::fmt;
use std::str::FromStr;

use crate::error::GenerateError;

/// One of the nine instrumented sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Shell,
    Radix,
    Counting,
}

impl Algorithm {
    /// Every algorithm, in canonical order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::Radix,
        Algorithm::Counting,
    ];

    /// Canonical display name, e.g. `"Bubble Sort"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
            Self::Shell => "Shell Sort",
            Self::Radix => "Radix Sort",
            Self::Counting => "Counting Sort",
        }
    }

    /// Short lowercase identifier, e.g. `"bubble"`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Shell => "shell",
            Self::Radix => "radix",
            Self::Counting => "counting",
        }
    }

    /// Whether the algorithm decides order by comparing elements.
    #[must_use]
    pub const fn is_comparison_based(self) -> bool {
        !matches!(self, Self::Radix | Self::Counting)
    }

    /// Complexity and stability summary for display next to metrics.
    #[must_use]
    pub const fn info(self) -> AlgorithmInfo {
        match self {
            Self::Bubble => AlgorithmInfo {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: true,
                description: "Repeatedly swaps adjacent out-of-order pairs; stops early on a pass with no swaps.",
            },
            Self::Selection => AlgorithmInfo {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: false,
                description: "Selects the left-most minimum of the unsorted suffix and swaps it into place.",
            },
            Self::Insertion => AlgorithmInfo {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: true,
                description: "Shifts larger elements right and inserts each key into the sorted prefix.",
            },
            Self::Merge => AlgorithmInfo {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
                stable: true,
                description: "Splits at the midpoint, sorts both halves, and merges them left-biased.",
            },
            Self::Quick => AlgorithmInfo {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
                stable: false,
                description: "Lomuto partition around the last element, then recurses on both sides. \
                              Swaps of an element with itself are skipped, so swap counts run below \
                              the textbook count.",
            },
            Self::Heap => AlgorithmInfo {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(1)",
                stable: false,
                description: "Builds a max-heap bottom-up and repeatedly moves the root to the boundary.",
            },
            Self::Shell => AlgorithmInfo {
                best: "O(n log n)",
                average: "O(n^1.5)",
                worst: "O(n²)",
                space: "O(1)",
                stable: false,
                description: "Gapped insertion sort over the halving sequence n/2, n/4, ..., 1.",
            },
            Self::Radix => AlgorithmInfo {
                best: "O(d·n)",
                average: "O(d·n)",
                worst: "O(d·n)",
                space: "O(n + 10)",
                stable: true,
                description: "Least-significant-digit base-10 counting passes, one per digit.",
            },
            Self::Counting => AlgorithmInfo {
                best: "O(n + k)",
                average: "O(n + k)",
                worst: "O(n + k)",
                space: "O(n + k)",
                stable: true,
                description: "Counts keys over max-min+1 buckets and places them by a reverse scan.",
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GenerateError;

    /// Case-insensitive. Accepts `"Bubble Sort"`, `"bubble"`, `"bubble-sort"`
    /// and `"bubble_sort"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let key = normalized
            .strip_suffix(" sort")
            .unwrap_or(&normalized)
            .trim();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.slug() == key)
            .ok_or_else(|| GenerateError::unknown(s))
    }
}

/// Static description of an algorithm's cost profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmInfo {
    /// Best-case time complexity.
    pub best: &'static str,
    /// Average-case time complexity.
    pub average: &'static str,
    /// Worst-case time complexity.
    pub worst: &'static str,
    /// Auxiliary space.
    pub space: &'static str,
    /// Whether equal keys keep their input order.
    pub stable: bool,
    /// One-line summary.
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_round_trip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn short_and_separator_forms_parse() {
        assert_eq!("bubble".parse::<Algorithm>(), Ok(Algorithm::Bubble));
        assert_eq!("QUICK".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!("merge-sort".parse::<Algorithm>(), Ok(Algorithm::Merge));
        assert_eq!("counting_sort".parse::<Algorithm>(), Ok(Algorithm::Counting));
        assert_eq!("  Heap Sort ".parse::<Algorithm>(), Ok(Algorithm::Heap));
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["NotARealSort", "", "sort", "bogo", "bubble sorts"] {
            assert_eq!(
                name.parse::<Algorithm>(),
                Err(GenerateError::unknown(name)),
                "{name:?} should not parse"
            );
        }
    }

    #[test]
    fn linear_sorts_are_not_comparison_based() {
        let comparison_free: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| !a.is_comparison_based())
            .collect();
        assert_eq!(comparison_free, vec![Algorithm::Radix, Algorithm::Counting]);
    }

    #[test]
    fn stable_algorithms_match_textbook() {
        let stable: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.info().stable)
            .collect();
        assert_eq!(
            stable,
            vec![
                Algorithm::Bubble,
                Algorithm::Insertion,
                Algorithm::Merge,
                Algorithm::Radix,
                Algorithm::Counting
            ]
        );
    }

    #[test]
    fn quick_sort_info_notes_skipped_self_swaps() {
        let info = Algorithm::Quick.info();
        assert!(info.description.contains("itself are skipped"));
    }
}
