use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::{resolve_selector, StudentSelector};

pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    selectors: &[StudentSelector],
) -> Result<CmdResult> {
    let mut listed = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let id = resolve_selector(store, selector)?;
        if let Some(record) = store.find(&id) {
            listed.push(record.clone());
        }
    }
    Ok(CmdResult::default().with_listed_students(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollbookError;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn resolves_by_id_or_roll_no() {
        let store = StoreFixture::new().with_alice_and_bob().store;
        let result = run(
            &store,
            &[StudentSelector::new("bob"), StudentSelector::new("R1")],
        )
        .unwrap();
        let names: Vec<_> = result.listed_students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[test]
    fn unknown_selector_is_not_found() {
        let store = StoreFixture::new().with_alice_and_bob().store;
        let err = run(&store, &[StudentSelector::new("R404")]).unwrap_err();
        assert!(matches!(err, RollbookError::NotFound(_)));
    }
}
