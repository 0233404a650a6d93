//! Montages: named 3D electrode positions plus fiducial landmarks, anchored to a coordinate frame.
//!
//! The types in here are plain data. They are produced by the file readers in [`crate::bst_tsv`]
//! and [`crate::ced`], and are never modified after construction.

use ndarray::Array2;

use std::collections::HashMap;
use std::fmt;

/// A 3D point, stored as x, y, z.
pub type Point3 = [f64; 3];

/// The fiducial label of the nasion.
pub const NASION: &str = "NAS";
/// The fiducial label of the left preauricular point.
pub const LPA: &str = "LPA";
/// The fiducial label of the right preauricular point.
pub const RPA: &str = "RPA";


/// Insertion-ordered map from a case-sensitive label to a [`Point3`].
///
/// Inserting a label a second time replaces its point but keeps the position of the first insertion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChannelPositions {
    labels: Vec<String>,
    points: Vec<Point3>,
    index: HashMap<String, usize>,
}

impl ChannelPositions {
    pub fn new() -> ChannelPositions {
        ChannelPositions::default()
    }

    /// Insert a point, returning the point previously stored under the label, if any.
    pub fn insert<S: Into<String>>(&mut self, label: S, point: Point3) -> Option<Point3> {
        let label = label.into();
        match self.index.get(&label) {
            Some(&idx) => Some(std::mem::replace(&mut self.points[idx], point)),
            None => {
                self.index.insert(label.clone(), self.labels.len());
                self.labels.push(label);
                self.points.push(point);
                None
            }
        }
    }

    /// The point stored under the label.
    pub fn get(&self, label: &str) -> Option<&Point3> {
        self.index.get(label).map(|&idx| &self.points[idx])
    }

    /// Whether a point is stored under the label.
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no label is stored.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The labels, in insertion order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Iterate over (label, point) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Point3)> {
        self.labels.iter().map(|l| l.as_str()).zip(self.points.iter())
    }

    /// The points as a matrix with one row per label, in insertion order.
    pub fn to_array(&self) -> Array2<f64> {
        let mut arr = Array2::<f64>::zeros((self.points.len(), 3));
        for (mut row, p) in arr.outer_iter_mut().zip(self.points.iter()) {
            for (dim, value) in p.iter().enumerate() {
                row[dim] = *value;
            }
        }
        arr
    }
}

impl<S: Into<String>> std::iter::FromIterator<(S, Point3)> for ChannelPositions {
    fn from_iter<I: IntoIterator<Item = (S, Point3)>>(iter: I) -> Self {
        let mut positions = ChannelPositions::new();
        for (label, point) in iter {
            positions.insert(label, point);
        }
        positions
    }
}


/// The three anatomical landmarks used to define the head coordinate frame. Any of them may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FiducialSet {
    pub nasion: Option<Point3>,
    pub lpa: Option<Point3>,
    pub rpa: Option<Point3>,
}

impl FiducialSet {
    /// Look up a fiducial by label, case-insensitive. Returns `None` for labels that are not fiducial codes.
    pub fn get(&self, label: &str) -> Option<Point3> {
        match label.to_uppercase().as_str() {
            NASION => self.nasion,
            LPA => self.lpa,
            RPA => self.rpa,
            _ => None,
        }
    }

    /// Number of fiducials that are present, between 0 and 3.
    pub fn count(&self) -> usize {
        [self.nasion, self.lpa, self.rpa].iter().filter(|f| f.is_some()).count()
    }

    /// Store the point if the label is a fiducial code (case-insensitive). Returns whether it was stored.
    fn set(&mut self, label: &str, point: Point3) -> bool {
        let slot = match label.to_uppercase().as_str() {
            NASION => &mut self.nasion,
            LPA => &mut self.lpa,
            RPA => &mut self.rpa,
            _ => return false,
        };
        *slot = Some(point);
        true
    }
}


/// Coordinate frame a montage is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordFrame {
    /// Defined by the fiducials of the subject's head.
    Head,
    /// The frame of the subject's MRI scan.
    Mri,
    Unknown,
}

impl CoordFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordFrame::Head => "head",
            CoordFrame::Mri => "mri",
            CoordFrame::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CoordFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}


/// Named electrode positions, fiducials and the coordinate frame they are expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Montage {
    ch_pos: ChannelPositions,
    fiducials: FiducialSet,
    coord_frame: CoordFrame,
}

impl Montage {
    /// Create a montage from its parts.
    pub fn new(ch_pos: ChannelPositions, fiducials: FiducialSet, coord_frame: CoordFrame) -> Montage {
        Montage { ch_pos, fiducials, coord_frame }
    }

    /// Create a montage from labeled points. Points labeled `NAS`, `LPA` or `RPA` (case-insensitive) become
    /// fiducials, all others become channels under their original label. Later duplicates replace earlier ones.
    /// The points are used as given, no unit conversion is performed.
    pub fn from_labeled_points<I, S>(points: I, coord_frame: CoordFrame) -> Montage
    where
        I: IntoIterator<Item = (S, Point3)>,
        S: Into<String>,
    {
        let mut ch_pos = ChannelPositions::new();
        let mut fiducials = FiducialSet::default();
        for (label, point) in points {
            let label = label.into();
            if !fiducials.set(&label, point) {
                ch_pos.insert(label, point);
            }
        }
        Montage::new(ch_pos, fiducials, coord_frame)
    }

    /// The channel names, in file order.
    pub fn ch_names(&self) -> &[String] {
        self.ch_pos.labels()
    }

    /// The channel positions, without fiducials.
    pub fn channel_positions(&self) -> &ChannelPositions {
        &self.ch_pos
    }

    /// Position of a single channel.
    pub fn get(&self, ch_name: &str) -> Option<&Point3> {
        self.ch_pos.get(ch_name)
    }

    /// The fiducials. Missing ones are `None`.
    pub fn fiducials(&self) -> &FiducialSet {
        &self.fiducials
    }

    /// Number of fiducials that are present.
    pub fn num_fiducials(&self) -> usize {
        self.fiducials.count()
    }

    /// The coordinate frame the positions are expressed in.
    pub fn coord_frame(&self) -> CoordFrame {
        self.coord_frame
    }

    /// Number of channels, not counting fiducials.
    pub fn len(&self) -> usize {
        self.ch_pos.len()
    }

    /// Whether the montage has no channels. Fiducials are not counted.
    pub fn is_empty(&self) -> bool {
        self.ch_pos.is_empty()
    }

    /// Channel positions as an `n x 3` matrix, rows ordered like [`Montage::ch_names`].
    pub fn positions(&self) -> Array2<f64> {
        self.ch_pos.to_array()
    }
}

impl fmt::Display for Montage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Montage | {} channels, {} fiducials, coord_frame: {}>", self.len(), self.num_fiducials(), self.coord_frame)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn channel_positions_keep_first_position_and_last_value() {
        let mut pos = ChannelPositions::new();
        assert_eq!(None, pos.insert("AF3", [1.0, 2.0, 3.0]));
        pos.insert("F7", [4.0, 5.0, 6.0]);
        assert_eq!(Some([1.0, 2.0, 3.0]), pos.insert("AF3", [7.0, 8.0, 9.0]));

        assert_eq!(2, pos.len());
        assert_eq!(&["AF3".to_string(), "F7".to_string()], pos.labels());
        assert_eq!(Some(&[7.0, 8.0, 9.0]), pos.get("AF3"));
    }

    #[test]
    fn channel_labels_are_case_sensitive() {
        let pos: ChannelPositions = vec![("cz", [0.0, 0.0, 1.0]), ("Cz", [0.0, 0.0, 2.0])].into_iter().collect();
        assert_eq!(2, pos.len());
        assert!(!pos.contains("CZ"));
    }

    #[test]
    fn fiducials_are_routed_case_insensitively() {
        let montage = Montage::from_labeled_points(
            vec![("nas", [0.1, 0.0, 0.0]), ("Rpa", [0.0, -0.08, 0.0]), ("O1", [-0.08, 0.03, 0.04])],
            CoordFrame::Head,
        );

        assert_eq!(1, montage.len());
        assert_eq!(2, montage.num_fiducials());
        assert_eq!(Some([0.1, 0.0, 0.0]), montage.fiducials().nasion);
        assert_eq!(None, montage.fiducials().lpa);
        assert_eq!(Some([0.0, -0.08, 0.0]), montage.fiducials().get("RPA"));
        assert!(montage.get("nas").is_none());
    }

    #[test]
    fn positions_matrix_follows_channel_order() {
        let montage = Montage::from_labeled_points(
            vec![("F3", [1.0, 2.0, 3.0]), ("LPA", [9.0, 9.0, 9.0]), ("F4", [4.0, 5.0, 6.0])],
            CoordFrame::Head,
        );
        let expected = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_abs_diff_eq!(expected, montage.positions(), epsilon = 1e-12);
    }

    #[test]
    fn montage_display_summarizes_content() {
        let montage = Montage::from_labeled_points(vec![("Pz", [0.0, 0.0, 1.0])], CoordFrame::Head);
        assert_eq!("<Montage | 1 channels, 0 fiducials, coord_frame: head>", format!("{}", montage));
    }
}
