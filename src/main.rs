//! Clusters points of a csv file with k-means.
//!
//! The command takes the following args:
//!
//!  * --data file : csv file, no header, last column is a label and is dropped. Default data.csv
//!  * --clusters k : number of clusters. If absent it is asked on stdin.
//!  * --seed s : seed of the random initial assignment. If absent one is drawn and logged.
//!
//! Each iteration is printed on stdout. Logging is controlled by RUST_LOG.

use clap::{Arg, ArgAction, Command};
use cpu_time::ProcessTime;

use std::path::PathBuf;
use std::time::SystemTime;

use lloydcluster::io::ConsoleReport;
use lloydcluster::run::{DEFAULT_DATA_FILE, RunConfig, ask_nb_cluster, run};

pub fn main() {
    //
    let _ = env_logger::builder().try_init();
    //
    let matches = Command::new("lloydcluster")
        .arg(
            Arg::new("data")
                .long("data")
                .required(false)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_DATA_FILE)
                .help("csv file of points, last column is a label"),
        )
        .arg(
            Arg::new("clusters")
                .long("clusters")
                .short('k')
                .required(false)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("number of clusters, asked on stdin if absent"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .required(false)
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u64))
                .help("seed of random initial assignment"),
        )
        .get_matches();
    //
    let data_path = match matches.get_one::<PathBuf>("data") {
        Some(path) => path.clone(),
        None => PathBuf::from(DEFAULT_DATA_FILE),
    };
    let nb_cluster = match matches.get_one::<usize>("clusters") {
        Some(k) => *k,
        None => {
            let stdin = std::io::stdin();
            let res = ask_nb_cluster(&mut stdin.lock(), &mut std::io::stdout());
            match res {
                Ok(k) => k,
                Err(e) => {
                    log::error!("{}", e);
                    eprintln!("error : {}", e);
                    std::process::exit(1);
                }
            }
        }
    };
    let seed = matches.get_one::<u64>("seed").copied();
    //
    let config = RunConfig::new(data_path, nb_cluster, seed);
    log::info!("run with {:?}", config);
    //
    let cpu_start = ProcessTime::now();
    let sys_now = SystemTime::now();
    //
    let mut report = ConsoleReport::stdout();
    if let Err(e) = run(&config, &mut report) {
        log::error!("{:#}", e);
        eprintln!("error : {:#}", e);
        std::process::exit(1);
    }
    //
    log::info!(
        "sys time(ms) {:?} cpu time(ms) {:?}",
        sys_now.elapsed().map(|d| d.as_millis()).unwrap_or(0),
        cpu_start.elapsed().as_millis()
    );
} // end of main
