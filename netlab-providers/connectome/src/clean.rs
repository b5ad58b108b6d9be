//! ROI record deduplication.
//!
//! Two strategies keep one record per grouping key. [`dedup_sorted_runs`] is
//! the linear run scan over input where each key's records are contiguous and
//! the first record of a run is the one to keep; it rejects input that breaks
//! contiguity. [`clean_roi`] groups explicitly and keeps the heaviest record
//! of every group, so it needs no ordering at all.

use std::collections::{HashMap, hash_map::Entry};

use crate::{errors::CleanError, records::GroupedRecord};

/// Result of [`clean_roi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRecords<R> {
    /// Survivors, in their original relative order.
    pub records: Vec<R>,
    /// Input positions that were dropped, ascending.
    pub dropped: Vec<usize>,
}

/// Scans contiguous runs of equal keys and returns the indices of every
/// record after the first of its run.
///
/// The returned indices take O(k) space for k deletions. Detecting a key
/// that reappears after its run needs the start of every run, so the scan
/// also holds one map entry per distinct key: O(n) extra space when every
/// record has its own key.
///
/// # Errors
/// Returns [`CleanError::NonContiguousKey`] when a key appears again after
/// its run has ended.
///
/// # Examples
/// ```
/// use netlab_providers_connectome::{RoiConnection, dedup_sorted_runs};
///
/// let records = [
///     RoiConnection::new(5, 9, "AL(L)", 12),
///     RoiConnection::new(5, 9, "LH(R)", 3),
///     RoiConnection::new(6, 9, "AL(R)", 4),
/// ];
/// assert_eq!(dedup_sorted_runs(&records)?, vec![1]);
/// # Ok::<(), netlab_providers_connectome::CleanError>(())
/// ```
pub fn dedup_sorted_runs<R: GroupedRecord>(records: &[R]) -> Result<Vec<usize>, CleanError> {
    let mut deletions = Vec::new();
    let mut run_starts: HashMap<R::Key, usize> = HashMap::new();
    let mut runs = records.iter().enumerate().peekable();

    while let Some((start, record)) = runs.next() {
        let key = record.key();
        if let Some(&run_start) = run_starts.get(&key) {
            return Err(CleanError::NonContiguousKey {
                key: format!("{key:?}"),
                index: start,
                run_start,
            });
        }
        run_starts.insert(key, start);
        while let Some((index, _)) = runs.next_if(|(_, next)| next.key() == key) {
            deletions.push(index);
        }
    }
    Ok(deletions)
}

/// Keeps the highest-weight record of every key.
///
/// Ties go to the earliest record. Survivors keep their input order, so
/// cleaning an already clean sequence returns it unchanged. When every key's
/// records are contiguous and the heaviest comes first, the dropped indices
/// equal those of [`dedup_sorted_runs`].
///
/// # Examples
/// ```
/// use netlab_providers_connectome::{RoiConnection, clean_roi};
///
/// let records = vec![
///     RoiConnection::new(1, 2, "CA(R)", 3),
///     RoiConnection::new(3, 4, "EB", 8),
///     RoiConnection::new(1, 2, "gL(R)", 9),
/// ];
/// let cleaned = clean_roi(records);
/// assert_eq!(cleaned.dropped, vec![0]);
/// assert_eq!(cleaned.records[1].roi, "gL(R)");
/// ```
#[must_use]
pub fn clean_roi<R: GroupedRecord>(records: Vec<R>) -> CleanedRecords<R> {
    let mut best: HashMap<R::Key, usize> = HashMap::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match best.entry(record.key()) {
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
            Entry::Occupied(mut slot) => {
                let heavier = records
                    .get(*slot.get())
                    .is_some_and(|current| record.weight() > current.weight());
                if heavier {
                    slot.insert(index);
                }
            }
        }
    }

    let mut keep = vec![false; records.len()];
    for &index in best.values() {
        if let Some(flag) = keep.get_mut(index) {
            *flag = true;
        }
    }

    let mut cleaned = CleanedRecords {
        records: Vec::with_capacity(best.len()),
        dropped: Vec::with_capacity(records.len().saturating_sub(best.len())),
    };
    for ((index, record), kept) in records.into_iter().enumerate().zip(keep) {
        if kept {
            cleaned.records.push(record);
        } else {
            cleaned.dropped.push(index);
        }
    }
    cleaned
}
