//! Synthetic ROI connection tables.

use netlab_providers_connectome::{RoiConnection, RoiSupersetMapping};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Shape of a synthetic ROI table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntheticRoiConfig {
    /// Number of distinct `(pre, post)` pairs.
    pub pairs: usize,
    /// Records generated for every pair.
    pub rois_per_pair: usize,
    /// RNG seed.
    pub seed: u64,
}

/// Generates a table where each pair's records form one contiguous run,
/// heaviest first, as the exported tables are laid out.
///
/// Labels are drawn from the hemibrain mapping so classification hits real
/// supersets.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `pairs` or `rois_per_pair` is
/// zero.
pub fn sorted_roi_records(config: &SyntheticRoiConfig) -> Result<Vec<RoiConnection>, BenchSetupError> {
    if config.pairs == 0 {
        return Err(BenchSetupError::ZeroValue { context: "pairs" });
    }
    if config.rois_per_pair == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "rois_per_pair",
        });
    }

    let labels = hemibrain_labels();
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(config.pairs.saturating_mul(config.rois_per_pair));
    for pair in 0..config.pairs {
        let pre = pair as u64;
        let post = pre.wrapping_mul(7_919).wrapping_add(1);
        let mut weights: Vec<u64> = (0..config.rois_per_pair)
            .map(|_| rng.gen_range(1..500))
            .collect();
        weights.sort_unstable_by(|left, right| right.cmp(left));
        for weight in weights {
            let roi = labels.choose(&mut rng).map_or("unknown_roi", String::as_str);
            records.push(RoiConnection::new(pre, post, roi, weight));
        }
    }
    Ok(records)
}

/// Same records as [`sorted_roi_records`], shuffled so runs are broken up.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for the same inputs as
/// [`sorted_roi_records`].
pub fn shuffled_roi_records(
    config: &SyntheticRoiConfig,
) -> Result<Vec<RoiConnection>, BenchSetupError> {
    let mut records = sorted_roi_records(config)?;
    let mut rng = SmallRng::seed_from_u64(config.seed.wrapping_add(1));
    records.shuffle(&mut rng);
    Ok(records)
}

fn hemibrain_labels() -> Vec<String> {
    let mapping = RoiSupersetMapping::hemibrain();
    let mut labels: Vec<String> = mapping
        .supersets()
        .flat_map(|superset| mapping.members(superset).iter().cloned())
        .collect();
    labels.push("unknown_roi".to_owned());
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    use netlab_providers_connectome::{clean_roi, dedup_sorted_runs};
    use rstest::rstest;

    const CONFIG: SyntheticRoiConfig = SyntheticRoiConfig {
        pairs: 50,
        rois_per_pair: 4,
        seed: 42,
    };

    #[rstest]
    fn sorted_records_form_runs() -> Result<(), Box<dyn std::error::Error>> {
        let records = sorted_roi_records(&CONFIG)?;
        assert_eq!(records.len(), 200);
        let deletions = dedup_sorted_runs(&records)?;
        assert_eq!(deletions.len(), 150);
        assert_eq!(clean_roi(records).dropped, deletions);
        Ok(())
    }

    #[rstest]
    fn shuffled_records_keep_one_survivor_per_pair() -> Result<(), Box<dyn std::error::Error>> {
        let records = shuffled_roi_records(&CONFIG)?;
        assert!(dedup_sorted_runs(&records).is_err());
        assert_eq!(clean_roi(records).records.len(), 50);
        Ok(())
    }

    #[rstest]
    fn generation_is_seeded() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(sorted_roi_records(&CONFIG)?, sorted_roi_records(&CONFIG)?);
        Ok(())
    }

    #[rstest]
    #[case::no_pairs(SyntheticRoiConfig { pairs: 0, ..CONFIG }, "pairs")]
    #[case::no_rois(SyntheticRoiConfig { rois_per_pair: 0, ..CONFIG }, "rois_per_pair")]
    fn zero_sizes_are_rejected(#[case] config: SyntheticRoiConfig, #[case] expected: &str) {
        let err = sorted_roi_records(&config).expect_err("zero size must fail");
        assert!(matches!(err, BenchSetupError::ZeroValue { context } if context == expected));
    }
}
