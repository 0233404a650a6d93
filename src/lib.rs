//! Reading EEG electrode position files into montages.
//!
//! Supported are Brainstorm `electrodes.tsv` exports in subject space millimeters, which are converted into a
//! [`Montage`] in meters in the head coordinate frame, and EEGLAB CED layout files, which are read into raw
//! label to position maps. The package also ships a default electrode layout and simplified head meshes,
//! see the [`resources`] module.

pub mod bst_tsv;
pub mod ced;
pub mod error;
pub mod helper;
pub mod montage;
pub mod resources;
pub mod util;

pub use bst_tsv::{read_subject_space_mm_tsv, BstElectrodes};
pub use ced::{parse_ced_str, read_ced, read_ced_with, CedLayout, NumericScan};
pub use error::{MontageformatsError, Result};
pub use helper::ElectrodeHelper;
pub use montage::{ChannelPositions, CoordFrame, FiducialSet, Montage, Point3};
pub use resources::{
    get_default_electrode_positions_path, get_resource_path, get_simplified_fullhead_mesh_path,
    get_simplified_head_mesh_path,
};
