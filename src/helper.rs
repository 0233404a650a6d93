//! A holder for one long-lived montage, by default the bundled Emotiv EPOC X layout.

use tracing::debug;

use std::path::{Path, PathBuf};

use crate::bst_tsv::read_subject_space_mm_tsv;
use crate::error::Result;
use crate::montage::Montage;
use crate::resources::get_default_electrode_positions_path;
use crate::util::require_file;


/// Holds the active montage. It is set on construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectrodeHelper {
    active_montage: Montage,
}

impl ElectrodeHelper {

    pub fn new(active_montage: Montage) -> ElectrodeHelper {
        ElectrodeHelper { active_montage }
    }

    /// Load the montage from a subject space mm TSV file. If no path is given, the bundled default layout is used.
    ///
    /// Fails with [`crate::MontageformatsError::MissingFile`] if the file does not exist. For the bundled default,
    /// this means the resources were not installed with the package.
    ///
    /// # Examples
    ///
    /// ```
    /// use montageformats::ElectrodeHelper;
    ///
    /// let helper = ElectrodeHelper::init_epocx_montage::<&str>(None).unwrap();
    /// println!("Channel names: {:?}", helper.active_montage().ch_names());
    /// ```
    pub fn init_epocx_montage<P: AsRef<Path>>(electrode_positions_path: Option<P>) -> Result<ElectrodeHelper> {
        let path: PathBuf = match electrode_positions_path {
            Some(p) => p.as_ref().to_path_buf(),
            None => get_default_electrode_positions_path(),
        };
        require_file(&path)?;

        let montage = read_subject_space_mm_tsv(&path)?;
        debug!(path = %path.display(), "{}", montage);
        Ok(ElectrodeHelper::new(montage))
    }

    pub fn active_montage(&self) -> &Montage {
        &self.active_montage
    }

    /// Consume the helper, returning the montage.
    pub fn into_montage(self) -> Montage {
        self.active_montage
    }
}
