use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{StudentId, StudentInput};
use crate::store::{RecordStore, StorageBackend};
use tracing::info;

use super::helpers::validated_record;

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, input: StudentInput) -> Result<CmdResult> {
    let record = validated_record(StudentId::generate(), input, store.all())?;
    store.push(record.clone())?;
    info!(id = %record.id, roll_no = %record.roll_no, "student added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added: {}", record.name)));
    Ok(result.with_affected_students(vec![record]))
}
