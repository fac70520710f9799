//! # Introduction
//!
//! Comparison sorts over any element type, driven by a caller supplied "less-than" predicate and
//! a direction flag, plus a reward puzzle that is solved by sorting.
//!
//! - [`orst`]: selection, bubble, insertion, hybrid merge and quick sort behind one
//!   [`orst::Sorter`] trait, and a benchmark that counts comparisons.
//! - [`rewards`]: splits a list of prices into pairs with one uniform sum.

pub mod orst;
pub mod rewards;

use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use orst::{
    BubbleSorter, HybridMergeSorter, InsertionSorter, QuickSorter, SelectionSorter, Sorter,
};
use prettytable::{row, Table};

/// Sort numbers or solve the reward puzzle on the commandline. Install the `orst` crate and run
/// `orst --help` to see what options are available
#[derive(Debug, Args)]
#[command(flatten_help = true, subcommand_required = true)]
pub struct OrstArgs {
    #[command(subcommand)]
    command: OrstCommands,
}

#[derive(Clone, Subcommand, Debug)]
#[command(arg_required_else_help = true)]
enum OrstCommands {
    /// Sort a list of integers and print the result.
    Sort {
        /// The sorting algorithm to use.
        #[arg(short, long, value_enum, default_value_t = Algorithm::HybridMerge)]
        algorithm: Algorithm,

        /// Sort from largest to smallest.
        #[arg(short, long)]
        descending: bool,

        /// Partitions of at most this many elements are insertion sorted by hybrid merge sort.
        #[arg(short, long, default_value_t = HybridMergeSorter::DEFAULT_THRESHOLD)]
        threshold: usize,

        /// The integers to sort.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Pair up item prices so that every pair has the same sum, and total the reward points.
    Rewards {
        /// The price of each item.
        #[arg(allow_negative_numbers = true)]
        prices: Vec<i64>,
    },

    /// Count the comparisons and time taken by every sorter on random input.
    Bench {
        /// Input sizes to measure.
        #[arg(short, long, num_args = 1.., default_values_t = orst::benchmark::DEFAULT_SIZES)]
        sizes: Vec<usize>,

        /// Skip the O(n^2) sorters on inputs larger than this.
        #[arg(short, long, default_value_t = orst::benchmark::DEFAULT_QUADRATIC_LIMIT)]
        quadratic_limit: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Algorithm {
    /// Selection sort
    Selection,

    /// Bubble sort
    Bubble,

    /// Insertion sort, shifting one neighbour at a time
    Insertion,

    /// Insertion sort with a binary search for the insertion point
    SmartInsertion,

    /// Merge sort that insertion sorts small partitions
    HybridMerge,

    /// Quick sort with a median-of-three pivot
    Quick,
}

fn sort_with<S: Sorter<i64>>(sorter: S, values: &mut [i64], descending: bool) {
    sorter.sort_by(values, |a, b| a < b, descending)
}

impl Algorithm {
    fn sort(self, values: &mut [i64], descending: bool, threshold: usize) {
        match self {
            Algorithm::Selection => sort_with(SelectionSorter, values, descending),
            Algorithm::Bubble => sort_with(BubbleSorter, values, descending),
            Algorithm::Insertion => sort_with(InsertionSorter { smart: false }, values, descending),
            Algorithm::SmartInsertion => {
                sort_with(InsertionSorter { smart: true }, values, descending)
            }
            Algorithm::HybridMerge => {
                sort_with(HybridMergeSorter { threshold }, values, descending)
            }
            Algorithm::Quick => sort_with(QuickSorter, values, descending),
        }
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl OrstArgs {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            OrstCommands::Sort {
                algorithm,
                descending,
                threshold,
                mut values,
            } => {
                algorithm.sort(&mut values, descending, threshold);
                println!("{}", join(&values));
            }

            OrstCommands::Rewards { prices } => match rewards::pair_orders(&prices) {
                Ok(paired) => {
                    let mut table = Table::new();
                    table.add_row(row!["Low".bold(), "High".bold(), "Points".bold()]);
                    for (low, high) in &paired.pairs {
                        table.add_row(row![low, high, low * high]);
                    }
                    table.printstd();

                    println!(
                        "{} {}",
                        "Total Reward ->".bold().underline().blue(),
                        paired.reward.to_string().bold()
                    );
                }
                Err(e) => {
                    println!(
                        "{} {} ({})",
                        "No Valid Pairing ->".bold().red(),
                        rewards::Rewards::NO_REWARD,
                        e
                    );
                }
            },

            OrstCommands::Bench {
                sizes,
                quadratic_limit,
            } => orst::benchmark::run_orst(&sizes, quadratic_limit)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn every_algorithm_sorts_both_ways() {
        let input = vec![5, -2, 9, 0, -2, 7, 3];
        for algorithm in Algorithm::value_variants() {
            let mut values = input.clone();
            algorithm.sort(&mut values, false, 2);
            assert_eq!(values, [-2, -2, 0, 3, 5, 7, 9], "{algorithm:?}");

            algorithm.sort(&mut values, true, 2);
            assert_eq!(values, [9, 7, 5, 3, 0, -2, -2], "{algorithm:?}");
        }
    }

    #[test]
    fn joins_with_spaces() {
        assert_eq!(join(&[3, -1, 2]), "3 -1 2");
        assert_eq!(join(&[]), "");
    }
}
