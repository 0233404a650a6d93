//! Locating the resource files bundled with this package, like the default electrode layout and head meshes.
//!
//! Resource paths are given relative to the package root, e.g., `resources/ElectrodeLayouts/...`. The package root
//! is the directory of this crate's `Cargo.toml`, unless the environment variable `MONTAGEFORMATS_RESOURCE_ROOT`
//! is set, in which case that directory is used. None of the functions check whether the file exists.

use std::env;
use std::path::PathBuf;

use crate::util::normalize_path;

/// Environment variable that overrides the directory resource paths are resolved against.
pub const RESOURCE_ROOT_ENV_VAR: &str = "MONTAGEFORMATS_RESOURCE_ROOT";

/// The default electrode layout, a Brainstorm subject space mm TSV file for an Emotiv EPOC X headset.
pub const DEFAULT_ELECTRODE_POSITIONS: &str =
    "resources/ElectrodeLayouts/brainstorm_electrode_positions_PhoHAle_eeg_subjectspacemm.tsv";

/// Simplified head surface mesh (STL).
pub const SIMPLIFIED_HEAD_MESH: &str = "resources/ElectrodeLayouts/simplified/head_bem_1922V_fill_fixed.stl";

/// Simplified full head surface mesh (STL).
pub const SIMPLIFIED_FULLHEAD_MESH: &str =
    "resources/ElectrodeLayouts/simplified/pho_2025-06-23_FullHead_0007_fixed.stl";


/// The directory that relative resource paths are resolved against.
pub fn package_root() -> PathBuf {
    match env::var_os(RESOURCE_ROOT_ENV_VAR) {
        Some(root) if !root.is_empty() => PathBuf::from(root),
        _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")),
    }
}


/// Get the absolute, normalized path of a resource file, given its path relative to the package root.
///
/// # Examples
///
/// ```
/// let stl_path = montageformats::get_resource_path("resources/ElectrodeLayouts/simplified/head_bem_1922V_fill_fixed.stl");
/// assert!(stl_path.is_absolute());
/// ```
pub fn get_resource_path(relative_path: &str) -> PathBuf {
    normalize_path(package_root().join(relative_path))
}


/// Get the path of the simplified head BEM mesh STL file.
pub fn get_simplified_head_mesh_path() -> PathBuf {
    get_resource_path(SIMPLIFIED_HEAD_MESH)
}


/// Get the path of the simplified full head mesh STL file.
pub fn get_simplified_fullhead_mesh_path() -> PathBuf {
    get_resource_path(SIMPLIFIED_FULLHEAD_MESH)
}


/// Get the path of the default electrode positions TSV file.
pub fn get_default_electrode_positions_path() -> PathBuf {
    get_resource_path(DEFAULT_ELECTRODE_POSITIONS)
}
