//! Seeded random-graph models.
//!
//! Every generator takes an optional seed. With a seed the output is fully
//! reproducible (same seed and parameters, same graph); without one the RNG is
//! seeded from the operating system.

mod adjacency;
mod barabasi_albert;
mod erdos_renyi;
mod powerlaw_cluster;
mod watts_strogatz;

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{
    Graph,
    error::{CatalogueError, GenerationError},
};

pub use barabasi_albert::barabasi_albert;
pub use erdos_renyi::{default_edge_probability, erdos_renyi};
pub use powerlaw_cluster::clustered_scale_free;
pub use watts_strogatz::{CONNECTED_WATTS_STROGATZ_TRIES, connected_watts_strogatz};

/// Keyword-style parameters accepted by the catalogue's model entries.
///
/// Unset fields fall back to the per-model defaults; `n` is mandatory for
/// every model.
///
/// # Examples
/// ```
/// use netlab_core::ModelParams;
///
/// let params = ModelParams::new(100).with_m(2).with_seed(7);
/// assert_eq!(params.n, Some(100));
/// assert_eq!(params.m, Some(2));
/// assert_eq!(params.p, None);
/// assert_eq!(params.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelParams {
    /// Number of nodes.
    pub n: Option<usize>,
    /// Structural edge count (ring neighbours for `WS`, attachments otherwise).
    pub m: Option<usize>,
    /// Structural probability (edge, rewiring or triad probability).
    pub p: Option<f64>,
    /// RNG seed; `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl ModelParams {
    /// Creates parameters for `n` nodes with every other field unset.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self {
            n: Some(n),
            m: None,
            p: None,
            seed: None,
        }
    }

    /// Overrides the structural edge count.
    #[must_use]
    pub const fn with_m(mut self, m: usize) -> Self {
        self.m = Some(m);
        self
    }

    /// Overrides the structural probability.
    #[must_use]
    pub const fn with_p(mut self, p: f64) -> Self {
        self.p = Some(p);
        self
    }

    /// Fixes the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A random-graph model registered in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// `ER`: Erdos-Renyi `G(n, p)`.
    ErdosRenyi,
    /// `WS`: connected Watts-Strogatz small world.
    WattsStrogatz,
    /// `BA`: Barabasi-Albert preferential attachment.
    BarabasiAlbert,
    /// `CSF`: Holme-Kim clustered scale-free.
    ClusteredScaleFree,
}

impl Model {
    /// Every model, in listing order.
    pub const ALL: [Self; 4] = [
        Self::ErdosRenyi,
        Self::WattsStrogatz,
        Self::BarabasiAlbert,
        Self::ClusteredScaleFree,
    ];

    /// Default `m` for `WS` (ring neighbours).
    pub const DEFAULT_WS_NEIGHBOURS: usize = 4;
    /// Default `p` for `WS` (rewiring probability).
    pub const DEFAULT_WS_REWIRING: f64 = 0.05;
    /// Default `m` for `BA` and `CSF` (edges per new node).
    pub const DEFAULT_ATTACHMENTS: usize = 3;
    /// Default `p` for `CSF` (triad probability).
    pub const DEFAULT_TRIAD_PROBABILITY: f64 = 0.3;

    /// Returns the catalogue key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ErdosRenyi => "ER",
            Self::WattsStrogatz => "WS",
            Self::BarabasiAlbert => "BA",
            Self::ClusteredScaleFree => "CSF",
        }
    }

    /// Resolves a catalogue key; keys are case sensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|model| model.key() == key)
    }

    /// Generates a graph, filling unset parameters with the model defaults.
    ///
    /// # Errors
    /// Returns [`CatalogueError::MissingParameter`] when `params.n` is unset
    /// and [`CatalogueError::Generation`] when the generator rejects the
    /// resolved parameters.
    ///
    /// # Examples
    /// ```
    /// use netlab_core::{Model, ModelParams};
    ///
    /// let graph = Model::BarabasiAlbert.generate(&ModelParams::new(10).with_seed(1))?;
    /// assert_eq!(graph.edge_count(), 3 + 6 * 3);
    /// # Ok::<(), netlab_core::CatalogueError>(())
    /// ```
    pub fn generate(self, params: &ModelParams) -> Result<Graph, CatalogueError> {
        let model = self.key();
        let n = params.n.ok_or(CatalogueError::MissingParameter {
            model,
            parameter: "n",
        })?;
        let seed = params.seed;
        let generated = match self {
            Self::ErdosRenyi => params
                .p
                .map_or_else(|| default_edge_probability(n), Ok)
                .and_then(|p| erdos_renyi(n, p, seed)),
            Self::WattsStrogatz => connected_watts_strogatz(
                n,
                params.m.unwrap_or(Self::DEFAULT_WS_NEIGHBOURS),
                params.p.unwrap_or(Self::DEFAULT_WS_REWIRING),
                seed,
            ),
            Self::BarabasiAlbert => {
                barabasi_albert(n, params.m.unwrap_or(Self::DEFAULT_ATTACHMENTS), seed)
            }
            Self::ClusteredScaleFree => clustered_scale_free(
                n,
                params.m.unwrap_or(Self::DEFAULT_ATTACHMENTS),
                params.p.unwrap_or(Self::DEFAULT_TRIAD_PROBABILITY),
                seed,
            ),
        };
        generated.map_err(|error| CatalogueError::Generation { model, error })
    }
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

pub(crate) fn check_probability(
    model: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<(), GenerationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenerationError::InvalidProbability {
            model,
            parameter,
            value,
        })
    }
}

/// Draws `count` distinct values from `pool`, sampling with repetition.
///
/// Values appearing several times in `pool` are proportionally more likely,
/// which is how degree-proportional attachment is realised. `pool` must hold
/// at least `count` distinct values.
pub(crate) fn random_subset(pool: &[usize], count: usize, rng: &mut SmallRng) -> BTreeSet<usize> {
    let mut chosen = BTreeSet::new();
    if pool.is_empty() {
        return chosen;
    }
    while chosen.len() < count {
        let pick = rng.gen_range(0..pool.len());
        chosen.insert(pool[pick]);
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::er("ER", Model::ErdosRenyi)]
    #[case::ws("WS", Model::WattsStrogatz)]
    #[case::ba("BA", Model::BarabasiAlbert)]
    #[case::csf("CSF", Model::ClusteredScaleFree)]
    fn model_keys_round_trip(#[case] key: &str, #[case] model: Model) {
        assert_eq!(Model::from_key(key), Some(model));
        assert_eq!(model.key(), key);
    }

    #[rstest]
    fn model_keys_are_case_sensitive() {
        assert_eq!(Model::from_key("er"), None);
    }

    #[rstest]
    #[case::er(Model::ErdosRenyi)]
    #[case::csf(Model::ClusteredScaleFree)]
    fn missing_node_count_is_reported(#[case] model: Model) {
        let err = model
            .generate(&ModelParams::default())
            .expect_err("n is mandatory");
        assert!(matches!(
            err,
            CatalogueError::MissingParameter { parameter: "n", .. }
        ));
    }

    #[rstest]
    fn empty_erdos_renyi_needs_explicit_probability() {
        let err = Model::ErdosRenyi
            .generate(&ModelParams::new(0))
            .expect_err("default p is undefined for n = 0");
        assert!(matches!(
            err.generation_code(),
            Some(crate::GenerationErrorCode::UndefinedDefaultProbability)
        ));

        let graph = Model::ErdosRenyi
            .generate(&ModelParams::new(0).with_p(0.5))
            .expect("explicit p works for n = 0");
        assert_eq!(graph.node_count(), 0);
    }

    #[rstest]
    fn watts_strogatz_defaults_give_four_regular_lattice_edges() {
        let graph = Model::WattsStrogatz
            .generate(&ModelParams::new(20).with_seed(3))
            .expect("defaults are valid");
        assert_eq!(graph.edge_count(), 40);
    }

    #[rstest]
    fn barabasi_albert_uses_m_override() {
        let graph = Model::BarabasiAlbert
            .generate(&ModelParams::new(10).with_m(1).with_seed(3))
            .expect("m = 1 is valid");
        assert_eq!(graph.edge_count(), 9);
    }

    #[rstest]
    fn random_subset_returns_distinct_values() {
        let mut rng = seeded_rng(Some(3));
        let pool = [0, 0, 0, 1, 2, 2, 3];
        let chosen = random_subset(&pool, 3, &mut rng);
        assert_eq!(chosen.len(), 3);
        assert!(chosen.iter().all(|value| pool.contains(value)));
    }

    #[rstest]
    fn random_subset_of_empty_pool_is_empty() {
        let mut rng = seeded_rng(Some(3));
        assert!(random_subset(&[], 2, &mut rng).is_empty());
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(1.0, true)]
    #[case(-0.1, false)]
    #[case(1.5, false)]
    #[case(f64::NAN, false)]
    fn check_probability_bounds(#[case] value: f64, #[case] valid: bool) {
        assert_eq!(check_probability("test", "p", value).is_ok(), valid);
    }
}
