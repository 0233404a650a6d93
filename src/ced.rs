//! Tolerant reader for EEGLAB CED electrode layout files.
//!
//! CED files are whitespace-delimited text with one electrode per line: a label followed by a number of fields, at
//! least three of which are numeric. Lines starting with `%` or `#` are comments. The unit of the coordinates is
//! not defined by the format, so the values are returned exactly as found in the file.
//!
//! Lines that cannot be interpreted are skipped, they never cause an error. This reader does not detect fiducials
//! and does not build a [`crate::Montage`]. Use [`crate::Montage::from_labeled_points`] on the result if needed,
//! after converting to meters.

use regex::Regex;
use tracing::{debug, trace};

use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;
use crate::montage::{ChannelPositions, Point3};
use crate::util::{open_input, require_file};


/// Which part of a line is searched for the numeric x, y and z fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericScan {
    /// Search the whole line, including the label. A label that contains digits, like `E1`, contributes numbers.
    WholeLine,
    /// Search only the text after the label.
    AfterLabel,
}

impl Default for NumericScan {
    fn default() -> NumericScan {
        NumericScan::WholeLine
    }
}


/// Models the electrode positions of a CED file, in file order and in the unit of the file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CedLayout {
    pub positions: ChannelPositions,
}


fn numeric_token_regex() -> &'static Regex {
    static NUMERIC: OnceLock<Regex> = OnceLock::new();
    NUMERIC.get_or_init(|| Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("numeric token pattern is valid"))
}


/// Interpret one line of a CED file. Returns `None` for comments, blank lines and lines with fewer than 3 numbers.
fn parse_line(line: &str, scan: NumericScan) -> Option<(&str, Point3)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('%') || line.starts_with('#') {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let label = tokens.next()?;
    tokens.next()?;

    let haystack = match scan {
        NumericScan::WholeLine => line,
        NumericScan::AfterLabel => &line[label.len()..],
    };

    let mut numbers = numeric_token_regex()
        .find_iter(haystack)
        .filter_map(|m| m.as_str().parse::<f64>().ok());

    match (numbers.next(), numbers.next(), numbers.next()) {
        (Some(x), Some(y), Some(z)) => Some((label, [x, y, z])),
        _ => None,
    }
}


/// Parse the text content of a CED file. Lines may end in `\n`, `\r\n` or a lone `\r`.
/// Later lines with the same label replace earlier ones.
pub fn parse_ced_str(content: &str, scan: NumericScan) -> ChannelPositions {
    let mut positions = ChannelPositions::new();
    for line in content.split(|c: char| c == '\n' || c == '\r').filter(|l| !l.is_empty()) {
        match parse_line(line, scan) {
            Some((label, point)) => {
                positions.insert(label, point);
            }
            None => trace!(line, "skipped CED line"),
        }
    }
    positions
}


/// Decode UTF-8, dropping invalid byte sequences instead of replacing them.
fn decode_utf8_dropping_invalid(mut raw: &[u8]) -> String {
    let mut text = String::with_capacity(raw.len());
    loop {
        match std::str::from_utf8(raw) {
            Ok(valid) => {
                text.push_str(valid);
                return text;
            }
            Err(err) => {
                let (valid, rest) = raw.split_at(err.valid_up_to());
                text.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match err.error_len() {
                    Some(len) => raw = &rest[len..],
                    None => return text, // truncated sequence at the end
                }
            }
        }
    }
}


impl CedLayout {

    /// Read a CED file.
    /// If the file's name ends with ".gz", the file is assumed to need GZip decoding.
    pub fn from_file<P: AsRef<Path>>(path: P, scan: NumericScan) -> Result<CedLayout> {
        require_file(&path)?;
        let layout = CedLayout::from_reader(open_input(&path)?, scan)?;
        debug!(path = %path.as_ref().display(), electrodes = layout.positions.len(), "read CED layout");
        Ok(layout)
    }


    /// Read CED data from the given stream. Invalid UTF-8 bytes are dropped rather than reported.
    pub fn from_reader<S>(mut input: S, scan: NumericScan) -> Result<CedLayout>
    where
        S: Read,
    {
        let mut raw = Vec::new();
        input.read_to_end(&mut raw)?;
        let content = decode_utf8_dropping_invalid(&raw);
        Ok(CedLayout { positions: parse_ced_str(&content, scan) })
    }
}


/// Read a CED file into a map from electrode label to its raw (x, y, z) position, searching whole lines for numbers.
///
/// # Examples
///
/// ```no_run
/// let positions = montageformats::read_ced("emotiv.ced").unwrap();
/// println!("Position of AF3: {:?}", positions.get("AF3"));
/// ```
pub fn read_ced<P: AsRef<Path>>(path: P) -> Result<ChannelPositions> {
    read_ced_with(path, NumericScan::WholeLine)
}


/// Read a CED file into a map from electrode label to its raw (x, y, z) position.
pub fn read_ced_with<P: AsRef<Path>>(path: P, scan: NumericScan) -> Result<ChannelPositions> {
    Ok(CedLayout::from_file(path, scan)?.positions)
}
