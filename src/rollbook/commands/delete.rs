use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollbookError};
use crate::model::StudentId;
use crate::store::{RecordStore, StorageBackend};
use tracing::info;

/// Removes record `id` permanently. There is no undo.
pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, id: &StudentId) -> Result<CmdResult> {
    let index = store
        .position(id)
        .ok_or_else(|| RollbookError::NotFound(id.clone()))?;

    let removed = store.remove_at(index)?;
    info!(id = %removed.id, roll_no = %removed.roll_no, "student deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "\"{}\" has been deleted",
        removed.name
    )));
    Ok(result.with_affected_students(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{query, ViewCriteria};
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn removes_and_returns_record() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        let result = run(&mut store, &"bob".into()).unwrap();

        assert_eq!(result.affected_students[0].name, "Bob");
        let listed = query(store.all(), &ViewCriteria::default());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Alice");
    }

    #[test]
    fn missing_id_is_not_found_and_noop() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        let err = run(&mut store, &"ghost".into()).unwrap_err();
        assert!(matches!(err, RollbookError::NotFound(_)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn deleting_twice_fails_the_second_time() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        run(&mut store, &"alice".into()).unwrap();
        assert!(run(&mut store, &"alice".into()).is_err());
    }
}
