//! reads points from a csv file.
//!
//! One record per line, no header. The last field of each record is a label, it is read and dropped,
//! the other fields are the coordinates.

use num_traits::float::Float;

use std::fmt::Debug;
use std::fs::OpenOptions;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use crate::error::KmeansError;
use crate::lloyd::{Dataset, Point};

/// Reads points from a file, see [read_points]
pub fn read_csv<T>(filepath: &Path) -> Result<Dataset<T>, KmeansError>
where
    T: Float + FromStr + Debug,
{
    let fileres = OpenOptions::new().read(true).open(filepath);
    let file = match fileres {
        Ok(file) => file,
        Err(e) => {
            log::error!("read_csv could not open {:?} : {}", filepath.as_os_str(), e);
            return Err(KmeansError::Io(e));
        }
    };
    log::info!("reading points from {}", filepath.display());
    read_points(BufReader::new(file))
} // end of read_csv

/// Reads points from any reader.
///
/// Fields are trimmed before decoding. A field that is not a real, or decodes to NaN or infinity, fails the whole read.
/// Records must all have the same number of fields, points ids are record ranks.
pub fn read_points<T, R>(reader: R) -> Result<Dataset<T>, KmeansError>
where
    T: Float + FromStr + Debug,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    //
    let mut points = Vec::<Point<T>>::new();
    for (num_record, result) in rdr.records().enumerate() {
        let record = result?;
        // last field is the label
        let nb_var = record.len().saturating_sub(1);
        let mut new_data = Vec::<T>::with_capacity(nb_var);
        for (j, field) in record.iter().take(nb_var).enumerate() {
            let val = match field.trim().parse::<T>() {
                Ok(val) => val,
                Err(_) => {
                    log::debug!("error decoding field {} of record {}", j, num_record);
                    return Err(KmeansError::Parse {
                        record: num_record,
                        field: j,
                        value: field.to_string(),
                    });
                }
            };
            if !val.is_finite() {
                return Err(KmeansError::NonFinite {
                    record: num_record,
                    field: j,
                });
            }
            new_data.push(val);
        } // end for j
        points.push(Point::new(num_record, new_data));
    }
    //
    log::info!("number of records loaded : {:?}", points.len());
    Dataset::new(points)
} // end of read_points

//======================================

// end of mod tests
