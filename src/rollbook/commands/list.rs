use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{query, Stats, ViewCriteria};
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, criteria: &ViewCriteria) -> Result<CmdResult> {
    let listed: Vec<_> = query(store.all(), criteria).into_iter().cloned().collect();
    let stats = Stats::compute(store.all(), listed.len());
    Ok(CmdResult::default()
        .with_listed_students(listed)
        .with_stats(stats))
}
