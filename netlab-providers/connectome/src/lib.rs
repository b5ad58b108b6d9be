//! Connectome tables for graph experiments.
//!
//! Reads the exported neuron, synapse and ROI connection CSV tables, reduces
//! the ROI table to one record per neuron pair and classifies each surviving
//! ROI into a coarse superset.

mod clean;
mod errors;
mod loader;
mod records;
mod superset;

pub use clean::{CleanedRecords, clean_roi, dedup_sorted_runs};
pub use errors::{CleanError, CleanErrorCode, ConnectomeError, ConnectomeErrorCode};
pub use loader::{
    CachePolicy, Connectome, ConnectomeLoader, ConnectomeTables, DEFAULT_CONNECTOME_DIR,
    NEURONS_FILE, ROI_CONNECTIONS_FILE, TOTAL_CONNECTIONS_FILE, TREATED_ROI_FILE, TreatedSource,
    default_connectome_dir, read_datasets,
};
pub use records::{BodyId, GroupedRecord, Neuron, NeuronPair, RoiConnection, SynapseCount, TreatedRoi};
pub use superset::{RoiSupersetMapping, map_roi_to_superset};

#[cfg(test)]
mod tests;
