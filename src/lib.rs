//! Partition of points read from a csv file in k clusters by Lloyd iterations (k-means).
//!
//! - [lloyd] holds the algorithm : distance, centroids, assignment, cost and the iteration loop.
//! - [io] reads the csv input and reports iterations.
//! - [run] is the entry point used by the binary, parameterized by a [run::RunConfig].

pub mod error;
pub mod io;
pub mod lloyd;
pub mod run;

pub use error::KmeansError;
