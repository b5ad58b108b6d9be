//! Benchmark parameter types.
//!
//! Each type renders as the Criterion parameter label of one benchmark case.

use std::fmt;

/// Parameters for a random-model generation run.
#[derive(Clone, Debug)]
pub struct ModelBenchParams {
    /// Catalogue key of the model.
    pub model: &'static str,
    /// Number of nodes.
    pub node_count: usize,
}

impl fmt::Display for ModelBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.model, self.node_count)
    }
}

/// Parameters for an ROI cleaning run.
#[derive(Clone, Debug)]
pub struct CleanBenchParams {
    /// Number of distinct neuron pairs.
    pub pairs: usize,
    /// Records per pair.
    pub rois_per_pair: usize,
}

impl fmt::Display for CleanBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pairs={},per_pair={}", self.pairs, self.rois_per_pair)
    }
}
