//! Row types of the connectome tables.
//!
//! Column names follow the exported hemibrain adjacency tables; columns not
//! named here are ignored when reading.

use std::{fmt::Debug, hash::Hash};

use serde::{Deserialize, Serialize};

/// Body identifier of a traced neuron.
pub type BodyId = u64;

/// Grouping key shared by the synapse and ROI tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeuronPair {
    /// Presynaptic body id.
    pub pre: BodyId,
    /// Postsynaptic body id.
    pub post: BodyId,
}

impl NeuronPair {
    /// Creates a pair key.
    #[must_use]
    pub const fn new(pre: BodyId, post: BodyId) -> Self {
        Self { pre, post }
    }
}

/// A row of `traced-neurons.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neuron {
    /// Body id.
    #[serde(rename = "bodyId")]
    pub body_id: BodyId,
    /// Cell type, when annotated.
    #[serde(rename = "type", default)]
    pub cell_type: Option<String>,
    /// Instance name, when annotated.
    #[serde(default)]
    pub instance: Option<String>,
}

/// A row of `traced-total-connections.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynapseCount {
    /// Presynaptic body id.
    #[serde(rename = "bodyId_pre")]
    pub pre: BodyId,
    /// Postsynaptic body id.
    #[serde(rename = "bodyId_post")]
    pub post: BodyId,
    /// Total synapse count across all regions.
    pub weight: u64,
}

impl SynapseCount {
    /// Returns the `(pre, post)` key.
    #[must_use]
    pub const fn pair(&self) -> NeuronPair {
        NeuronPair::new(self.pre, self.post)
    }
}

/// A row of `traced-roi-connections.csv`: synapses of a pair inside one ROI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiConnection {
    /// Presynaptic body id.
    #[serde(rename = "bodyId_pre")]
    pub pre: BodyId,
    /// Postsynaptic body id.
    #[serde(rename = "bodyId_post")]
    pub post: BodyId,
    /// Region-of-interest label, such as `AL(L)`.
    pub roi: String,
    /// Synapse count within the region.
    pub weight: u64,
}

impl RoiConnection {
    /// Creates a record.
    #[must_use]
    pub fn new(pre: BodyId, post: BodyId, roi: impl Into<String>, weight: u64) -> Self {
        Self {
            pre,
            post,
            roi: roi.into(),
            weight,
        }
    }

    /// Returns the `(pre, post)` key.
    #[must_use]
    pub const fn pair(&self) -> NeuronPair {
        NeuronPair::new(self.pre, self.post)
    }
}

/// A cleaned ROI record with its superset; the row type of `treated_roi.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatedRoi {
    /// Presynaptic body id.
    #[serde(rename = "bodyId_pre")]
    pub pre: BodyId,
    /// Postsynaptic body id.
    #[serde(rename = "bodyId_post")]
    pub post: BodyId,
    /// Region with the most synapses for the pair.
    pub roi: String,
    /// Synapse count within that region.
    pub weight: u64,
    /// Coarse region containing `roi`, if it is mapped.
    #[serde(default)]
    pub superset: Option<String>,
}

impl TreatedRoi {
    /// Returns the `(pre, post)` key.
    #[must_use]
    pub const fn pair(&self) -> NeuronPair {
        NeuronPair::new(self.pre, self.post)
    }
}

/// A record that belongs to a group and carries a weight.
///
/// Cleaning keeps one record per [`GroupedRecord::Key`].
pub trait GroupedRecord {
    /// Grouping key.
    type Key: Copy + Eq + Hash + Debug;

    /// Returns the record's grouping key.
    fn key(&self) -> Self::Key;

    /// Returns the weight compared when choosing a group's survivor.
    fn weight(&self) -> u64;
}

impl GroupedRecord for RoiConnection {
    type Key = NeuronPair;

    fn key(&self) -> NeuronPair {
        self.pair()
    }

    fn weight(&self) -> u64 {
        self.weight
    }
}

impl GroupedRecord for TreatedRoi {
    type Key = NeuronPair;

    fn key(&self) -> NeuronPair {
        self.pair()
    }

    fn weight(&self) -> u64 {
        self.weight
    }
}
