use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{row, Table};
use rand::{self, Rng};
use std::{cell::Cell, rc::Rc, time::Instant};

use super::{
    BubbleSorter, HybridMergeSorter, InsertionSorter, QuickSorter, SelectionSorter, Sorter,
};

/// Input sizes measured when none are given on the command line.
pub const DEFAULT_SIZES: [usize; 5] = [0, 1, 100, 1_000, 10_000];

/// Largest input the quadratic sorters are run on by default.
pub const DEFAULT_QUADRATIC_LIMIT: usize = 10_000;

// In this the `elem` will be compared and the `comparison_counter` will be ignored.
#[derive(Clone)]
struct SortEvaluator<T> {
    elem: T,
    // Bumped on every comparison, shared by all elements of one input.
    comparison_counter: Rc<Cell<usize>>,
}

impl<T> SortEvaluator<T> {
    fn new(elem: T, comparison_counter: Rc<Cell<usize>>) -> Self {
        Self {
            elem,
            comparison_counter,
        }
    }

    fn count(&self) {
        self.comparison_counter
            .set(self.comparison_counter.get() + 1);
    }
}

impl<T: Eq> Eq for SortEvaluator<T> {}

impl<T: PartialEq> PartialEq for SortEvaluator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count();
        self.elem == other.elem
    }
}

impl<T: PartialOrd> PartialOrd for SortEvaluator<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.count();
        self.elem.partial_cmp(&other.elem)
    }
}

impl<T: Ord> Ord for SortEvaluator<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count();
        self.elem.cmp(&other.elem)
    }
}

/// What one sorter did to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub sorter: &'static str,
    /// `None` when the input was too large for the sorter to be worth running.
    pub comparisons: Option<usize>,
    pub elapsed: Option<std::time::Duration>,
}

fn run_bench<T, S>(
    name: &'static str,
    sorter: S,
    values: &[SortEvaluator<T>],
    comparisons: &Rc<Cell<usize>>,
) -> Measurement
where
    T: Ord + Clone,
    S: Sorter<SortEvaluator<T>>,
{
    let mut values = values.to_vec();
    comparisons.set(0);

    let now = Instant::now();
    sorter.sort(&mut values);
    let elapsed = now.elapsed();

    debug_assert!(values.windows(2).all(|w| w[0].elem <= w[1].elem));

    Measurement {
        sorter: name,
        comparisons: Some(comparisons.get()),
        elapsed: Some(elapsed),
    }
}

fn skipped(name: &'static str) -> Measurement {
    Measurement {
        sorter: name,
        comparisons: None,
        elapsed: None,
    }
}

/// Sorts the same random input of `n` elements with every sorter.
pub fn measure(n: usize, quadratic_limit: usize) -> Vec<Measurement> {
    let mut random = rand::thread_rng();
    let counter = Rc::new(Cell::new(0));

    let values = (0..n)
        .map(|_| SortEvaluator::new(random.gen::<i32>(), counter.clone()))
        .collect::<Vec<_>>();

    let mut measurements = Vec::with_capacity(6);

    if n <= quadratic_limit {
        measurements.push(run_bench("Bubble Sort", BubbleSorter, &values, &counter));
        measurements.push(run_bench(
            "Insertion Sort",
            InsertionSorter { smart: true },
            &values,
            &counter,
        ));
        measurements.push(run_bench(
            "Insertion Sort (not smart)",
            InsertionSorter { smart: false },
            &values,
            &counter,
        ));
        measurements.push(run_bench(
            "Selection Sort",
            SelectionSorter,
            &values,
            &counter,
        ));
    } else {
        measurements.push(skipped("Bubble Sort"));
        measurements.push(skipped("Insertion Sort"));
        measurements.push(skipped("Insertion Sort (not smart)"));
        measurements.push(skipped("Selection Sort"));
    }

    measurements.push(run_bench(
        "Hybrid Merge Sort",
        HybridMergeSorter::default(),
        &values,
        &counter,
    ));
    measurements.push(run_bench("Quick Sort", QuickSorter, &values, &counter));

    measurements
}

fn table_for(measurements: &[Measurement]) -> Table {
    let mut table = Table::new();
    table.add_row(row![
        "Sorter".bold(),
        "Comparisons Made".bold(),
        "Time Taken".bold()
    ]);

    for measurement in measurements {
        match (measurement.comparisons, measurement.elapsed) {
            (Some(comparisons), Some(elapsed)) => table.add_row(row![
                measurement.sorter,
                comparisons.to_string(),
                format!("{elapsed:?}")
            ]),
            _ => table.add_row(row![measurement.sorter, "Not Doing It".red(), "It is Stupid"]),
        };
    }

    table
}

/// Prints a comparison and timing table for each size in `sizes`.
pub fn run_orst(sizes: &[usize], quadratic_limit: usize) -> anyhow::Result<()> {
    let pb = ProgressBar::new(sizes.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "Benchmark -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] Sizes: ({pos}/{len}, ETA: {eta})",
    )?);

    for &n in sizes {
        let table = table_for(&measure(n, quadratic_limit));

        pb.suspend(|| {
            println!(
                "{} {}",
                "List Size -> ".bold().underline().blue(),
                n.to_string().bold()
            );
            table.printstd();
            println!();
        });
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn counts_every_comparison() {
        let counter = Rc::new(Cell::new(0));
        let a = SortEvaluator::new(1, counter.clone());
        let b = SortEvaluator::new(2, counter.clone());

        assert!(a < b);
        assert!(a != b);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Less);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn skips_quadratic_sorters_above_limit() {
        let measurements = measure(50, 10);
        assert_eq!(measurements.len(), 6);

        for measurement in &measurements[..4] {
            assert_eq!(measurement.comparisons, None);
        }
        for measurement in &measurements[4..] {
            assert!(measurement.comparisons.unwrap() > 0);
        }
    }

    #[test]
    fn single_element_needs_no_comparisons() {
        let measurements = measure(1, DEFAULT_QUADRATIC_LIMIT);
        assert!(measurements
            .iter()
            .all(|measurement| measurement.comparisons == Some(0)));
    }
}
