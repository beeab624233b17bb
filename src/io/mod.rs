//! io at the boundary of the clustering : csv input and console report of iterations.

pub mod csvread;
pub mod report;

pub use csvread::{read_csv, read_points};
pub use report::ConsoleReport;
