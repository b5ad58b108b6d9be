use super::{CleanError, RoiConnection};
use crate::{GroupedRecord, clean_roi, dedup_sorted_runs};
use netlab_test_support::proptest_profile::suite_proptest_config;
use proptest::prelude::*;
use rstest::rstest;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Keyed {
    key: u32,
    weight: u64,
}

impl GroupedRecord for Keyed {
    type Key = u32;

    fn key(&self) -> u32 {
        self.key
    }

    fn weight(&self) -> u64 {
        self.weight
    }
}

fn keyed(rows: &[(u32, u64)]) -> Vec<Keyed> {
    rows.iter()
        .map(|&(key, weight)| Keyed { key, weight })
        .collect()
}

fn keys(records: &[Keyed]) -> Vec<u32> {
    records.iter().map(|record| record.key).collect()
}

#[rstest]
fn run_scan_drops_the_tail_of_each_run() {
    let records = keyed(&[(5, 1), (5, 1), (6, 1)]);
    assert_eq!(dedup_sorted_runs(&records), Ok(vec![1]));
}

#[rstest]
#[case::empty(&[], &[])]
#[case::singletons(&[(1, 1), (2, 1), (3, 1)], &[])]
#[case::long_run(&[(4, 1), (4, 2), (4, 3), (7, 1), (7, 1)], &[1, 2, 4])]
fn run_scan_reports_deletions(#[case] rows: &[(u32, u64)], #[case] expected: &[usize]) {
    assert_eq!(dedup_sorted_runs(&keyed(rows)), Ok(expected.to_vec()));
}

#[rstest]
fn run_scan_rejects_interleaved_keys() {
    let records = keyed(&[(5, 1), (6, 1), (5, 1)]);
    let err = dedup_sorted_runs(&records).expect_err("key 5 reappears");
    assert_eq!(
        err,
        CleanError::NonContiguousKey {
            key: "5".to_owned(),
            index: 2,
            run_start: 0,
        }
    );
    assert_eq!(err.code().as_str(), "CLEAN_NON_CONTIGUOUS_KEY");
}

#[rstest]
fn run_scan_remembers_every_run_start() {
    let mut rows: Vec<(u32, u64)> = (0..500).map(|key| (key, 1)).collect();
    rows.push((3, 1));
    let err = dedup_sorted_runs(&keyed(&rows)).expect_err("key 3 reappears");
    assert!(matches!(
        err,
        CleanError::NonContiguousKey { index: 500, run_start: 3, .. }
    ));
}

#[rstest]
fn clean_keeps_one_record_per_key() {
    let cleaned = clean_roi(keyed(&[(5, 1), (5, 1), (6, 1)]));
    assert_eq!(keys(&cleaned.records), vec![5, 6]);
    assert_eq!(cleaned.dropped, vec![1]);
}

#[rstest]
fn clean_prefers_the_heaviest_record() {
    let cleaned = clean_roi(vec![
        RoiConnection::new(1, 2, "CA(R)", 3),
        RoiConnection::new(2, 3, "SMP(R)", 4),
        RoiConnection::new(1, 2, "gL(R)", 9),
    ]);
    assert_eq!(cleaned.dropped, vec![0]);
    let rois: Vec<_> = cleaned.records.iter().map(|r| r.roi.as_str()).collect();
    assert_eq!(rois, vec!["SMP(R)", "gL(R)"]);
}

#[rstest]
fn clean_breaks_ties_by_position() {
    let cleaned = clean_roi(vec![
        RoiConnection::new(3, 1, "AL(L)", 5),
        RoiConnection::new(3, 1, "unknown_roi", 5),
    ]);
    assert_eq!(cleaned.dropped, vec![1]);
    assert_eq!(cleaned.records[0].roi, "AL(L)");
}

#[rstest]
fn clean_matches_run_scan_on_sorted_input() {
    let records = keyed(&[(1, 9), (1, 2), (2, 4), (3, 8), (3, 8), (3, 1)]);
    let runs = dedup_sorted_runs(&records).expect("contiguous input");
    assert_eq!(clean_roi(records).dropped, runs);
}

fn records_strategy() -> impl Strategy<Value = Vec<Keyed>> {
    prop::collection::vec((0_u32..8, 0_u64..16), 0..64).prop_map(|rows| keyed(&rows))
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn clean_is_idempotent(records in records_strategy()) {
        let once = clean_roi(records).records;
        let twice = clean_roi(once.clone());
        prop_assert_eq!(&twice.records, &once);
        prop_assert!(twice.dropped.is_empty());
    }

    #[test]
    fn clean_keeps_the_first_maximum_of_each_key(records in records_strategy()) {
        let mut expected: HashMap<u32, (u64, usize)> = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            let best = expected.entry(record.key).or_insert((record.weight, index));
            if record.weight > best.0 {
                *best = (record.weight, index);
            }
        }

        let cleaned = clean_roi(records.clone());
        prop_assert_eq!(cleaned.records.len(), expected.len());
        prop_assert_eq!(cleaned.records.len() + cleaned.dropped.len(), records.len());

        let mut kept: Vec<usize> = expected.values().map(|&(_, index)| index).collect();
        kept.sort_unstable();
        let survivors: Vec<Keyed> = kept.iter().map(|&index| records[index].clone()).collect();
        prop_assert_eq!(cleaned.records, survivors);
    }
}
