//! This module implements the k-means clustering with Lloyd iterations.
//!
//! The objective is to minimize the within cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! Points are first assigned uniformly at random to one of the k clusters, then we alternate:
//! - assignment of each point to its nearest centroid (euclidean distance, lowest rank wins ties)
//! - recomputation of centroids as the mean of their points.
//!
//! Stopping conditions use exact equality of centroids and of costs, see [kmeans].

pub mod assign;
pub mod centroid;
pub mod cost;
pub mod dataset;
pub mod distance;
pub mod kmeans;
pub mod point;

pub use assign::{assign, random_assignment};
pub use centroid::{Centroids, compute_centroids};
pub use cost::{STAGNATION_PATIENCE, StagnationTracker, sum_of_squares};
pub use dataset::Dataset;
pub use distance::{distance, squared_distance};
pub use kmeans::{
    CostHistory, IterationObserver, IterationRecord, Kmeans, Outcome, Termination, group_members,
};
pub use point::{Point, PointId};
