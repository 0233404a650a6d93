//! Functions for reading electrode positions exported by Brainstorm as BIDS `electrodes.tsv` in subject space millimeters.
//!
//! In Brainstorm, right click an EEG channel file and select `File > Export to file...`, then choose the file type
//! `EEG: BIDS electrodes.tsv, subject space mm (*.tsv)`. The result is a tab-separated file with a header row and
//! one electrode or fiducial per row:
//!
//! ```text
//! name    x       y       z       type
//! NAS     84.1    0.0     -6.3    FID
//! AF3     69.5    27.1    46.0    EEG
//! ```
//!
//! Only the `name`, `x`, `y` and `z` columns are used. Column names are matched after trimming and lowercasing.

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use std::io::Read;
use std::path::Path;

use crate::error::{MontageformatsError, Result};
use crate::montage::{CoordFrame, Montage};
use crate::util::{open_input, require_file};

/// The columns that must be present in the header.
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "x", "y", "z"];

/// Millimeters per meter.
pub const MM_PER_M: f64 = 1000.0;


/// The rows of a subject space mm TSV file, in file order and in the original unit (millimeters).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BstElectrodes {
    pub name: Vec<String>,
    pub x_mm: Vec<f64>,
    pub y_mm: Vec<f64>,
    pub z_mm: Vec<f64>,
}


/// Find the index of each required column in the header.
fn required_column_indices(header: &StringRecord) -> Result<[usize; 4]> {
    let normalized: Vec<String> = header.iter().map(|c| c.trim().to_lowercase()).collect();
    let mut indices = [0usize; 4];
    for (slot, required) in indices.iter_mut().zip(REQUIRED_COLUMNS.iter()) {
        *slot = normalized
            .iter()
            .position(|c| c == required)
            .ok_or_else(|| MontageformatsError::MissingColumn(required.to_string()))?;
    }
    Ok(indices)
}


fn parse_coord(record: &StringRecord, row: usize, col_idx: usize, col_name: &str) -> Result<f64> {
    let value = record.get(col_idx).unwrap_or("");
    value.trim().parse::<f64>().map_err(|_| MontageformatsError::InvalidNumber {
        row,
        column: col_name.to_string(),
        value: value.to_string(),
    })
}


impl BstElectrodes {

    /// Read a subject space mm TSV file.
    /// If the file's name ends with ".gz", the file is assumed to need GZip decoding.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BstElectrodes> {
        require_file(&path)?;
        let electrodes = BstElectrodes::from_reader(open_input(&path)?)?;
        debug!(path = %path.as_ref().display(), rows = electrodes.len(), "read subject space mm TSV");
        Ok(electrodes)
    }


    /// Read subject space mm TSV data from the given stream, which must be at the start of the header row.
    /// A single malformed row fails the whole read.
    pub fn from_reader<S>(input: S) -> Result<BstElectrodes>
    where
        S: Read,
    {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(b'\t')
            .flexible(false)
            .from_reader(input);

        let [name_idx, x_idx, y_idx, z_idx] = required_column_indices(rdr.headers()?)?;

        let mut electrodes = BstElectrodes::default();
        for (row, result) in rdr.records().enumerate() {
            let record = result?;
            electrodes.x_mm.push(parse_coord(&record, row, x_idx, "x")?);
            electrodes.y_mm.push(parse_coord(&record, row, y_idx, "y")?);
            electrodes.z_mm.push(parse_coord(&record, row, z_idx, "z")?);
            electrodes.name.push(record.get(name_idx).unwrap_or("").to_string());
        }
        Ok(electrodes)
    }


    /// Number of rows, including fiducials.
    pub fn len(&self) -> usize {
        self.name.len()
    }

    /// Whether the file had no data rows.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }


    /// Convert to a montage in the head coordinate frame. Coordinates are converted from millimeters to meters,
    /// rows named `NAS`, `LPA` or `RPA` (case-insensitive) become fiducials.
    pub fn to_montage(&self) -> Montage {
        let points = self.name.iter().enumerate().map(|(idx, name)| {
            (name.clone(), [self.x_mm[idx] / MM_PER_M, self.y_mm[idx] / MM_PER_M, self.z_mm[idx] / MM_PER_M])
        });
        let montage = Montage::from_labeled_points(points, CoordFrame::Head);
        debug!(channels = montage.len(), fiducials = montage.num_fiducials(), "built montage from subject space mm TSV");
        montage
    }
}


/// Read a Brainstorm subject space mm TSV file into a montage in the head coordinate frame, in meters.
///
/// Fails with [`MontageformatsError::MissingFile`] before reading anything if the file does not exist.
///
/// # Examples
///
/// ```no_run
/// let montage = montageformats::read_subject_space_mm_tsv("electrodes_subjectspacemm.tsv").unwrap();
/// println!("Channels: {:?}", montage.ch_names());
/// ```
pub fn read_subject_space_mm_tsv<P: AsRef<Path>>(path: P) -> Result<Montage> {
    Ok(BstElectrodes::from_file(path)?.to_montage())
}
