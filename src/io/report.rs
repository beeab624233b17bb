//! prints each reported iteration : number, groups of points, cost.

use num_traits::float::Float;

use std::fmt::Debug;
use std::io::Write;

use crate::lloyd::{IterationObserver, IterationRecord};

/// Writes iterations to any writer, stdout for the binary.
///
/// Format of one iteration :
/// ```text
/// Iteration 1:
/// Groups:
///   Group 1: [[0.0, 0.0], [0.0, 1.0]]
///   Group 2: [[10.0, 10.0], [10.0, 11.0]]
/// Sum of squared distances within clusters: 1.0
///
/// ```
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        ConsoleReport { out }
    }

    /// recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReport<std::io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleReport::new(std::io::stdout())
    }
}

impl<T, W> IterationObserver<T> for ConsoleReport<W>
where
    T: Float + Debug,
    W: Write,
{
    fn on_iteration(&mut self, record: &IterationRecord<'_, T>) -> std::io::Result<()> {
        writeln!(self.out, "Iteration {}:", record.get_iteration())?;
        writeln!(self.out, "Groups:")?;
        for (i, group) in record.get_groups().iter().enumerate() {
            let members: Vec<&[T]> = group.iter().map(|p| p.get_position()).collect();
            writeln!(self.out, "  Group {}: {:?}", i + 1, members)?;
        }
        writeln!(
            self.out,
            "Sum of squared distances within clusters: {:?}\n",
            record.get_sum_of_squares()
        )?;
        self.out.flush()
    }
} // end of impl IterationObserver for ConsoleReport

//======================================

#[cfg(test)]
mod tests {

    use super::*;

    use crate::lloyd::{Dataset, Kmeans};

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn reports_iterations_but_not_convergence() {
        log_init_test();
        let data = Dataset::<f64>::from_vectors(vec![
            vec![0., 0.],
            vec![0., 1.],
            vec![10., 10.],
            vec![10., 11.],
        ])
        .unwrap();
        let mut report = ConsoleReport::new(Vec::<u8>::new());
        Kmeans::new(2)
            .cluster_from_assignment(&data, vec![0, 1, 0, 1], &mut report)
            .unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        let expected = "Iteration 1:\n\
                        Groups:\n  \
                        Group 1: [[0.0, 0.0], [0.0, 1.0]]\n  \
                        Group 2: [[10.0, 10.0], [10.0, 11.0]]\n\
                        Sum of squared distances within clusters: 1.0\n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn nothing_printed_when_start_is_fixed_point() {
        log_init_test();
        let data = Dataset::<f64>::from_vectors(vec![vec![1., 1.], vec![5., 5.]]).unwrap();
        let mut report = ConsoleReport::new(Vec::<u8>::new());
        Kmeans::new(2)
            .cluster_from_assignment(&data, vec![0, 1], &mut report)
            .unwrap();
        assert!(report.into_inner().is_empty());
    }
} // end of mod tests
