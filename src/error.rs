use quick_error::quick_error;
use std::io::Error as IOError;
use std::path::PathBuf;

quick_error! {
    /// Error type for all error variants originated by this crate.
    #[derive(Debug)]
    pub enum MontageformatsError {
        /// The input file does not exist. Checked before any parsing is attempted.
        MissingFile(path: PathBuf) {
            display("Electrode positions file '{}' does not exist", path.display())
        }

        /// A required column is missing from the header of a TSV file.
        MissingColumn(name: String) {
            display("Required column '{}' not found in TSV header", name)
        }

        /// A coordinate cell could not be parsed as a number.
        InvalidNumber { row: usize, column: String, value: String } {
            display("Invalid number '{}' in column '{}' of data row {}", value, column, row)
        }

        /// Error from the tabular reader, e.g., a row with the wrong number of fields.
        Csv(err: csv::Error) {
            from()
            source(err)
        }

        /// I/O Error
        Io(err: IOError) {
            from()
            source(err)
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, MontageformatsError>;
