use crate::error::{Result, RollbookError};
use crate::model::{StudentId, StudentInput, StudentRecord, Year};
use crate::store::{RecordStore, StorageBackend};
use crate::validation::{validate, ErrorMap, Field};

/// A user reference to one record: its id, or failing that its roll number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSelector(pub String);

impl StudentSelector {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }
}

impl std::fmt::Display for StudentSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a selector to a record id. Id matches win over roll number matches.
pub fn resolve_selector<B: StorageBackend>(
    store: &RecordStore<B>,
    selector: &StudentSelector,
) -> Result<StudentId> {
    let as_id = StudentId::from(selector.0.as_str());
    if store.find(&as_id).is_some() {
        return Ok(as_id);
    }
    store
        .all()
        .iter()
        .find(|s| s.roll_no == selector.0)
        .map(|s| s.id.clone())
        .ok_or(RollbookError::NotFound(as_id))
}

/// Normalizes and validates `input` as record `id`, returning the record to store.
pub fn validated_record(
    id: StudentId,
    input: StudentInput,
    existing: &[StudentRecord],
) -> Result<StudentRecord> {
    let input = input.normalized();
    let errors = validate(&id, &input, existing);
    if !errors.is_empty() {
        return Err(RollbookError::Validation(errors));
    }
    let year: Year = input.year.parse().map_err(|e: crate::model::ParseYearError| {
        let mut errors = ErrorMap::new();
        errors.insert(Field::Year, e.to_string());
        RollbookError::Validation(errors)
    })?;
    Ok(StudentRecord::from_valid_input(id, input, year))
}
