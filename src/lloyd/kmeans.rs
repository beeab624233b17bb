//! Lloyd iterations.
//!
//! Starting from a random (or given) assignment, we alternate nearest centroid assignment
//! and centroid recomputation. Iterations stop when:
//! - the recomputed centroids are exactly the previous ones (converged). This last iteration is not reported.
//! - the sum of squares has been exactly the same for [STAGNATION_PATIENCE] consecutive
//!   reported iterations (stagnated).
//!
//! Each other iteration is handed to an [IterationObserver]. A cluster becoming empty stops the run with
//! [KmeansError::EmptyCluster], no reseeding is done.

use num_traits::float::Float;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use std::fmt::Debug;

use super::assign::{assign, random_assignment};
use super::centroid::{Centroids, compute_centroids};
use super::cost::{STAGNATION_PATIENCE, StagnationTracker, sum_of_squares};
use super::dataset::Dataset;
use super::point::Point;
use crate::error::KmeansError;

/// how iterations ended
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Termination {
    /// centroids did not move
    Converged,
    /// cost did not change during [STAGNATION_PATIENCE] consecutive iterations
    Stagnated,
}

/// Returns members of each cluster, in cluster order then in dataset order
pub fn group_members<'a, T>(
    data: &'a Dataset<T>,
    assignment: &[usize],
    nb_cluster: usize,
) -> Vec<Vec<&'a Point<T>>>
where
    T: Float + Debug,
{
    let mut groups: Vec<Vec<&Point<T>>> = (0..nb_cluster).map(|_| Vec::new()).collect();
    for (p, &c) in data.get_points().iter().zip(assignment.iter()) {
        groups[c].push(p);
    }
    groups
}

//==========================

/// What is known of a reported iteration. It borrows the state of the loop and lives
/// only during the report.
pub struct IterationRecord<'a, T> {
    iteration: usize,
    data: &'a Dataset<T>,
    assignment: &'a [usize],
    centroids: &'a Centroids<T>,
    sum_of_squares: T,
}

impl<'a, T> IterationRecord<'a, T>
where
    T: Float + Debug,
{
    /// iteration number, starting at 1
    pub fn get_iteration(&self) -> usize {
        self.iteration
    }

    pub fn get_sum_of_squares(&self) -> T {
        self.sum_of_squares
    }

    pub fn get_assignment(&self) -> &[usize] {
        self.assignment
    }

    pub fn get_centroids(&self) -> &Centroids<T> {
        self.centroids
    }

    /// members of each cluster
    pub fn get_groups(&self) -> Vec<Vec<&'a Point<T>>> {
        group_members(self.data, self.assignment, self.centroids.len())
    }
} // end of impl IterationRecord

/// Receives each reported iteration.
pub trait IterationObserver<T> {
    fn on_iteration(&mut self, record: &IterationRecord<'_, T>) -> std::io::Result<()>;
}

/// An observer that just keeps the successive costs
#[derive(Debug, Clone, Default)]
pub struct CostHistory<T> {
    costs: Vec<T>,
}

impl<T> CostHistory<T> {
    pub fn new() -> Self {
        CostHistory { costs: Vec::new() }
    }

    pub fn get_costs(&self) -> &[T] {
        &self.costs
    }
}

impl<T> IterationObserver<T> for CostHistory<T>
where
    T: Float + Debug,
{
    fn on_iteration(&mut self, record: &IterationRecord<'_, T>) -> std::io::Result<()> {
        self.costs.push(record.get_sum_of_squares());
        Ok(())
    }
}

//==========================

/// final state of a run
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    termination: Termination,
    // number of iterations run, including the one that detected termination
    nb_iter: usize,
    assignment: Vec<usize>,
    centroids: Centroids<T>,
    sum_of_squares: T,
}

impl<T> Outcome<T>
where
    T: Float + Debug,
{
    pub fn get_termination(&self) -> Termination {
        self.termination
    }

    pub fn get_nb_iter(&self) -> usize {
        self.nb_iter
    }

    pub fn get_assignment(&self) -> &[usize] {
        &self.assignment
    }

    pub fn get_centroids(&self) -> &Centroids<T> {
        &self.centroids
    }

    pub fn get_sum_of_squares(&self) -> T {
        self.sum_of_squares
    }

    /// final grouping of data
    pub fn get_groups<'a>(&self, data: &'a Dataset<T>) -> Vec<Vec<&'a Point<T>>> {
        group_members(data, &self.assignment, self.centroids.len())
    }
} // end of impl Outcome

//==========================

/// Lloyd iterations driver
#[derive(Debug, Copy, Clone)]
pub struct Kmeans {
    nb_cluster: usize,
    // seed of initial random assignment, if None one is drawn
    seed: Option<u64>,
}

impl Kmeans {
    pub fn new(nb_cluster: usize) -> Self {
        Kmeans {
            nb_cluster,
            seed: None,
        }
    }

    /// fix seed of the random initial assignment
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn get_nb_cluster(&self) -> usize {
        self.nb_cluster
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Runs iterations from a random assignment drawn with a Xoshiro256PlusPlus generator.
    /// The seed used is logged so a run can be replayed.
    pub fn cluster<T, O>(&self, data: &Dataset<T>, observer: &mut O) -> Result<Outcome<T>, KmeansError>
    where
        T: Float + Debug,
        O: IterationObserver<T>,
    {
        let seed = self.seed.unwrap_or_else(rand::random::<u64>);
        log::info!(
            "kmeans on {} points with {} clusters, seed : {}",
            data.get_nb_points(),
            self.nb_cluster,
            seed
        );
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        self.cluster_with_rng(data, &mut rng, observer)
    } // end of cluster

    /// Runs iterations from a random assignment drawn from rng
    pub fn cluster_with_rng<T, R, O>(
        &self,
        data: &Dataset<T>,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<Outcome<T>, KmeansError>
    where
        T: Float + Debug,
        R: Rng,
        O: IterationObserver<T>,
    {
        self.check_nb_cluster(data)?;
        let assignment = random_assignment(data.get_nb_points(), self.nb_cluster, rng);
        self.cluster_from_assignment(data, assignment, observer)
    }

    /// Runs iterations from a given initial assignment
    pub fn cluster_from_assignment<T, O>(
        &self,
        data: &Dataset<T>,
        assignment: Vec<usize>,
        observer: &mut O,
    ) -> Result<Outcome<T>, KmeansError>
    where
        T: Float + Debug,
        O: IterationObserver<T>,
    {
        self.check_nb_cluster(data)?;
        self.check_assignment(data, &assignment)?;
        //
        let nb_cluster = self.nb_cluster;
        let mut centroids = compute_centroids(data, &assignment, nb_cluster)?;
        let mut tracker = StagnationTracker::<T>::new(STAGNATION_PATIENCE);
        let mut iteration: usize = 1;
        loop {
            let assignment = assign(data, &centroids);
            let new_centroids = compute_centroids(data, &assignment, nb_cluster).inspect_err(|_| {
                log::error!("empty cluster at iteration {}", iteration);
            })?;
            //
            if new_centroids == centroids {
                let final_cost = sum_of_squares(data, &centroids, &assignment);
                log::info!(
                    "converged at iteration {}, sum of squares : {:.6e}",
                    iteration,
                    final_cost.to_f64().unwrap_or(f64::NAN)
                );
                return Ok(Outcome {
                    termination: Termination::Converged,
                    nb_iter: iteration,
                    assignment,
                    centroids,
                    sum_of_squares: final_cost,
                });
            }
            centroids = new_centroids;
            //
            let cost = sum_of_squares(data, &centroids, &assignment);
            log::debug!(
                "iteration {}, sum of squares : {:.6e}",
                iteration,
                cost.to_f64().unwrap_or(f64::NAN)
            );
            let record = IterationRecord {
                iteration,
                data,
                assignment: &assignment,
                centroids: &centroids,
                sum_of_squares: cost,
            };
            observer.on_iteration(&record).map_err(KmeansError::Report)?;
            //
            if tracker.update(cost) {
                log::info!(
                    "stagnation at iteration {}, cost unchanged during {} iterations",
                    iteration,
                    tracker.get_nb_unchanged()
                );
                return Ok(Outcome {
                    termination: Termination::Stagnated,
                    nb_iter: iteration,
                    assignment,
                    centroids,
                    sum_of_squares: cost,
                });
            }
            iteration += 1;
        }
    } // end of cluster_from_assignment

    // k = 0 is the only count refused up front, k > nb points ends in an empty cluster.
    fn check_nb_cluster<T: Float + Debug>(&self, data: &Dataset<T>) -> Result<(), KmeansError> {
        if self.nb_cluster == 0 {
            return Err(KmeansError::InvalidClusterCount {
                requested: self.nb_cluster,
                nb_points: data.get_nb_points(),
            });
        }
        if self.nb_cluster > data.get_nb_points() {
            log::warn!(
                "asked {} clusters for {} points, some cluster will be empty",
                self.nb_cluster,
                data.get_nb_points()
            );
        }
        Ok(())
    }

    fn check_assignment<T: Float + Debug>(
        &self,
        data: &Dataset<T>,
        assignment: &[usize],
    ) -> Result<(), KmeansError> {
        if assignment.len() != data.get_nb_points() {
            return Err(KmeansError::AssignmentLength {
                expected: data.get_nb_points(),
                found: assignment.len(),
            });
        }
        if let Some((point, &cluster)) = assignment
            .iter()
            .enumerate()
            .find(|(_, c)| **c >= self.nb_cluster)
        {
            return Err(KmeansError::AssignmentIndex {
                point,
                cluster,
                nb_cluster: self.nb_cluster,
            });
        }
        Ok(())
    }
} // end of impl Kmeans

//======================================

// end of mod tests
