//! Bulk import replaces the whole collection.
//!
//! Import is a trust boundary: records are NOT run through the validator. A payload
//! is rejected only when it is not a JSON array of record-shaped objects or when
//! two records share an id, and then nothing is applied. Records that would fail
//! validation are still imported but are reported back as warnings so the
//! exception stays visible.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RollbookError};
use crate::model::StudentRecord;
use crate::store::{RecordStore, StorageBackend};
use crate::validation::validate;
use std::collections::HashSet;
use tracing::{info, warn};

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, payload: &str) -> Result<CmdResult> {
    let records = parse_payload(payload)?;
    let mut result = CmdResult::default();

    for record in &records {
        let errors = validate(&record.id, &record.to_input(), &records);
        if !errors.is_empty() {
            warn!(id = %record.id, errors = %errors, "imported record bypasses validation");
            result.add_message(CmdMessage::warning(format!(
                "Imported without validation ({}): {}",
                record.roll_no, errors
            )));
        }
    }

    let count = records.len();
    store.replace_all(records.clone())?;
    info!(count, "students imported");

    result.add_message(CmdMessage::success(format!(
        "Data imported successfully! ({} students)",
        count
    )));
    Ok(result.with_affected_students(records))
}

fn parse_payload(payload: &str) -> Result<Vec<StudentRecord>> {
    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| RollbookError::InvalidImport(format!("Error importing data: {}", e)))?;
    if !value.is_array() {
        return Err(RollbookError::InvalidImport("Invalid data format".to_string()));
    }
    let records: Vec<StudentRecord> = serde_json::from_value(value)
        .map_err(|e| RollbookError::InvalidImport(format!("Invalid student record: {}", e)))?;

    let mut seen = HashSet::with_capacity(records.len());
    if let Some(dup) = records.iter().find(|r| !seen.insert(&r.id)) {
        return Err(RollbookError::InvalidImport(format!(
            "Duplicate student id: {}",
            dup.id
        )));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Year;
    use crate::store::fixtures::StoreFixture;

    const TWO_RECORDS: &str = r#"[
        {"id": "1", "name": "Tanisshq M", "rollNo": "714023105053",
         "department": "Computer Science & Engineering", "year": "3",
         "email": "mtanisshq7@gmail.com", "phone": "+91 9345733566"},
        {"id": "2", "name": "Ravi K", "rollNo": "714023105054",
         "department": "Data Science", "year": 1,
         "email": "ravi@example.com", "phone": "9345733567"}
    ]"#;

    #[test]
    fn replaces_store_contents() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        let result = run(&mut store, TWO_RECORDS).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].name, "Tanisshq M");
        assert_eq!(store.all()[1].year, Year::First);
        assert_eq!(result.affected_students.len(), 2);
        assert!(result
            .messages
            .iter()
            .all(|m| m.level != crate::commands::MessageLevel::Warning));
    }

    #[test]
    fn non_array_is_rejected_untouched() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        let err = run(&mut store, r#"{"students": []}"#).unwrap_err();
        assert!(matches!(err, RollbookError::InvalidImport(ref m) if m == "Invalid data format"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn malformed_json_is_rejected_untouched() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        assert!(run(&mut store, "[{").is_err());
        assert_eq!(store.all()[0].name, "Alice");
    }

    #[test]
    fn one_bad_element_rejects_everything() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        let payload = r#"[{"id":"1","name":"A","rollNo":"x","department":"d","year":"1","email":"e","phone":"p"}, 42]"#;
        assert!(matches!(
            run(&mut store, payload),
            Err(RollbookError::InvalidImport(_))
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn invalid_records_are_imported_with_warnings() {
        let mut store = StoreFixture::new().store;
        let payload = r#"[{"id":"1","name":"X1","rollNo":"R1","department":"d","year":"1","email":"bad","phone":"1"}]"#;
        let result = run(&mut store, payload).unwrap();
        assert_eq!(store.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }

    #[test]
    fn duplicate_ids_reject_everything() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        let payload = r#"[
            {"id":"1","name":"Ann","rollNo":"R7","department":"d","year":"1","email":"a@x.io","phone":"1234567890"},
            {"id":"1","name":"Ben","rollNo":"R8","department":"d","year":"2","email":"b@x.io","phone":"1234567890"}
        ]"#;
        let err = run(&mut store, payload).unwrap_err();
        assert!(matches!(err, RollbookError::InvalidImport(ref m) if m == "Duplicate student id: 1"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].name, "Alice");
    }
}
