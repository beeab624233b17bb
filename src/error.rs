//! errors returned by the loader and the Lloyd iterations

use thiserror::Error;

/// Errors of the crate.
/// All of them are terminal for a run, nothing is retried.
#[derive(Debug, Error)]
pub enum KmeansError {
    /// no point to cluster
    #[error("empty input")]
    EmptyInput,

    /// points have no coordinate (records with only a label field)
    #[error("points have dimension 0")]
    ZeroDimension,

    /// requested number of clusters cannot be used
    #[error("invalid cluster count: requested {requested}, dataset has {nb_points} points")]
    InvalidClusterCount { requested: usize, nb_points: usize },

    /// a point does not have the dimension of the first point
    #[error("dimension mismatch at point {point}: expected {expected}, found {found}")]
    DimensionMismatch {
        point: usize,
        expected: usize,
        found: usize,
    },

    /// a coordinate field could not be decoded as a real
    #[error("record {record}, field {field}: cannot parse {value:?} as a real")]
    Parse {
        record: usize,
        field: usize,
        value: String,
    },

    /// a coordinate decoded to NaN or infinity
    #[error("record {record}, field {field}: coordinate is not finite")]
    NonFinite { record: usize, field: usize },

    /// a cluster has no member, its centroid is undefined.
    #[error("cluster {cluster} has no member, its centroid is undefined")]
    EmptyCluster { cluster: usize },

    /// an initial assignment does not cover the dataset
    #[error("assignment has length {found}, dataset has {expected} points")]
    AssignmentLength { expected: usize, found: usize },

    /// an initial assignment refers to a cluster out of range
    #[error("point {point} assigned to cluster {cluster}, only {nb_cluster} clusters")]
    AssignmentIndex {
        point: usize,
        cluster: usize,
        nb_cluster: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// an observer failed to report an iteration
    #[error("could not report iteration: {0}")]
    Report(std::io::Error),
}

impl KmeansError {
    /// true if the error is the degenerate (empty) cluster condition
    pub fn is_empty_cluster(&self) -> bool {
        matches!(self, KmeansError::EmptyCluster { .. })
    }
}
