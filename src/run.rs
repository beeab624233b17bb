//! entry point of a run : load the csv file, then iterate.

use anyhow::{Context, anyhow};

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::io::read_csv;
use crate::lloyd::{IterationObserver, Kmeans, Outcome};

/// default input file name
pub const DEFAULT_DATA_FILE: &str = "data.csv";

/// parameters of a run
#[derive(Debug, Clone)]
pub struct RunConfig {
    data_path: PathBuf,
    nb_cluster: usize,
    // seed of the random initial assignment, drawn at run time if None
    seed: Option<u64>,
}

impl RunConfig {
    pub fn new(data_path: PathBuf, nb_cluster: usize, seed: Option<u64>) -> Self {
        RunConfig {
            data_path,
            nb_cluster,
            seed,
        }
    }

    pub fn get_data_path(&self) -> &PathBuf {
        &self.data_path
    }

    pub fn get_nb_cluster(&self) -> usize {
        self.nb_cluster
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }
} // end of impl RunConfig

/// Loads data and runs Lloyd iterations, each iteration is handed to observer.
/// Errors of the library are kept as source of the returned error.
pub fn run<O>(config: &RunConfig, observer: &mut O) -> anyhow::Result<Outcome<f64>>
where
    O: IterationObserver<f64>,
{
    let data = read_csv::<f64>(&config.data_path)
        .with_context(|| format!("could not load points from {}", config.data_path.display()))?;
    //
    let mut kmeans = Kmeans::new(config.nb_cluster);
    if let Some(seed) = config.seed {
        kmeans = kmeans.with_seed(seed);
    }
    let outcome = kmeans
        .cluster(&data, observer)
        .with_context(|| format!("clustering in {} clusters failed", config.nb_cluster))?;
    //
    let sizes: Vec<usize> = outcome.get_groups(&data).iter().map(|g| g.len()).collect();
    log::info!(
        "{:?} after {} iterations, cluster sizes : {:?}",
        outcome.get_termination(),
        outcome.get_nb_iter(),
        sizes
    );
    Ok(outcome)
} // end of run

/// prompts for the number of clusters and reads it from input
pub fn ask_nb_cluster<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
{
    write!(output, "Number of clusters: ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("no number of clusters given"));
    }
    line.trim()
        .parse::<usize>()
        .map_err(|_| anyhow!("number of clusters must be a non negative integer, got {:?}", line.trim()))
} // end of ask_nb_cluster

//======================================

// end of mod tests
