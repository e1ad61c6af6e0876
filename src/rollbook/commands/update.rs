use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollbookError};
use crate::model::{StudentId, StudentInput};
use crate::store::{RecordStore, StorageBackend};
use tracing::info;

use super::helpers::validated_record;

/// Replaces record `id` in place with `input`, keeping its id and position.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    id: &StudentId,
    input: StudentInput,
) -> Result<CmdResult> {
    let index = store
        .position(id)
        .ok_or_else(|| RollbookError::NotFound(id.clone()))?;

    let record = validated_record(id.clone(), input, store.all())?;
    store.replace_at(index, record.clone())?;
    info!(id = %record.id, roll_no = %record.roll_no, "student updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Updated: {}", record.name)));
    Ok(result.with_affected_students(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use crate::validation::Field;

    #[test]
    fn updates_in_place() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        let alice_id: StudentId = "alice".into();
        let mut input = store.all()[0].to_input();
        input.name = "Alicia".into();

        run(&mut store, &alice_id, input).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].id, alice_id);
        assert_eq!(store.all()[0].name, "Alicia");
    }

    #[test]
    fn keeping_own_roll_no_succeeds() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        let input = store.all()[0].to_input();
        assert!(run(&mut store, &"alice".into(), input).is_ok());
    }

    #[test]
    fn taking_another_roll_no_fails_and_leaves_record() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        let before = store.all()[0].clone();
        let mut input = before.to_input();
        input.roll_no = "R2".into();

        let err = run(&mut store, &"alice".into(), input).unwrap_err();

        assert!(err.field_errors().unwrap().contains(Field::RollNo));
        assert_eq!(store.all()[0], before);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        let input = store.all()[0].to_input();
        let err = run(&mut store, &"ghost".into(), input).unwrap_err();
        assert!(matches!(err, RollbookError::NotFound(id) if id.as_str() == "ghost"));
    }
}
