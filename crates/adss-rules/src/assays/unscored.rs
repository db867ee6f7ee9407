use crate::Assay;

/// A method the intake form offers but which has no thresholds in the
/// current rule set. Listing it never changes a classification.
pub struct Unscored {
    id: &'static str,
    name: &'static str,
}

pub const LUMIPULSE: Unscored = Unscored {
    id: "Lumipulse",
    name: "Lumipulse (CSF automated)",
};

pub const MRI_FREESURFER: Unscored = Unscored {
    id: "MRIFreesurfer",
    name: "MRI Freesurfer (volumetric analysis)",
};

pub const PLASMA_SIMOA: Unscored = Unscored {
    id: "PlasmaSimoa",
    name: "Plasma Simoa (blood-based)",
};

impl Assay for Unscored {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }
}
