use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{StudentId, StudentRecord, Year};
use crate::store::{RecordStore, StorageBackend};
use tracing::info;

/// Demo records for a fresh install.
pub fn sample_students() -> Vec<StudentRecord> {
    vec![StudentRecord {
        id: StudentId::from("1"),
        name: "Tanisshq M".to_string(),
        roll_no: "714023105053".to_string(),
        department: "Computer Science & Engineering".to_string(),
        year: Year::Third,
        email: "mtanisshq7@gmail.com".to_string(),
        phone: "+91 9345733566".to_string(),
    }]
}

/// Loads [`sample_students`], but only into an empty store.
pub fn run<B: StorageBackend>(store: &mut RecordStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !store.is_empty() {
        result.add_message(CmdMessage::info(
            "Sample data is only loaded when there are no students yet.",
        ));
        return Ok(result);
    }

    let records = sample_students();
    store.replace_all(records.clone())?;
    info!(count = records.len(), "sample students loaded");

    result.add_message(CmdMessage::success("Sample data loaded successfully!"));
    Ok(result.with_affected_students(records))
}
