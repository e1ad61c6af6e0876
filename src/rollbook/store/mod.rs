//! # Storage Layer
//!
//! [`RecordStore`] owns the authoritative, ordered collection of student records and
//! mirrors it to durable storage through a [`StorageBackend`].
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, one JSON file per key
//! - [`mem_backend::MemBackend`]: in-memory storage for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── students.json   # Ordered JSON array of student records
//! ├── theme.json      # "light" or "dark"
//! └── config.json     # RollbookConfig
//! ```
//!
//! ## Commit Discipline
//!
//! Every mutation is followed by an unconditional [`RecordStore::commit`]. There is
//! no dirty tracking. If the write fails the in-memory change is rolled back, so the
//! collection handed to the query engine always matches what was last persisted.

use crate::error::Result;
use crate::model::{StudentId, StudentRecord, ThemePreference};
use tracing::{debug, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

pub const STUDENTS_KEY: &str = "students";
pub const THEME_KEY: &str = "theme";

pub struct RecordStore<B: StorageBackend> {
    backend: B,
    records: Vec<StudentRecord>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Loads the persisted collection. Missing or corrupt data yields an empty store.
    pub fn load(backend: B) -> Self {
        let records = match backend.read(STUDENTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<StudentRecord>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(error = %e, "persisted student data is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read persisted student data, starting empty");
                Vec::new()
            }
        };
        debug!(count = records.len(), "record store loaded");
        Self { backend, records }
    }

    pub fn all(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &StudentId) -> Option<&StudentRecord> {
        self.records.iter().find(|s| &s.id == id)
    }

    pub fn position(&self, id: &StudentId) -> Option<usize> {
        self.records.iter().position(|s| &s.id == id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Persists the current collection.
    pub fn commit(&self) -> Result<()> {
        let content = serde_json::to_string(&self.records)?;
        self.backend.write(STUDENTS_KEY, &content)?;
        debug!(count = self.records.len(), "record store committed");
        Ok(())
    }

    /// Swaps in a whole new collection and commits it.
    pub fn replace_all(&mut self, records: Vec<StudentRecord>) -> Result<()> {
        let previous = std::mem::replace(&mut self.records, records);
        self.commit_or_restore(|store| store.records = previous)
    }

    pub(crate) fn push(&mut self, record: StudentRecord) -> Result<()> {
        self.records.push(record);
        self.commit_or_restore(|store| {
            store.records.pop();
        })
    }

    pub(crate) fn replace_at(&mut self, index: usize, record: StudentRecord) -> Result<()> {
        let previous = std::mem::replace(&mut self.records[index], record);
        self.commit_or_restore(|store| store.records[index] = previous)
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Result<StudentRecord> {
        let removed = self.records.remove(index);
        match self.commit() {
            Ok(()) => Ok(removed),
            Err(e) => {
                self.records.insert(index, removed);
                Err(e)
            }
        }
    }

    fn commit_or_restore(&mut self, restore: impl FnOnce(&mut Self)) -> Result<()> {
        if let Err(e) = self.commit() {
            restore(self);
            return Err(e);
        }
        Ok(())
    }

    /// Stored theme preference; anything unreadable reads as light.
    pub fn theme(&self) -> ThemePreference {
        match self.backend.read(THEME_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => ThemePreference::default(),
        }
    }

    pub fn set_theme(&self, theme: ThemePreference) -> Result<()> {
        let content = serde_json::to_string(&theme)?;
        self.backend.write(THEME_KEY, &content)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::mem_backend::MemBackend;
    use super::*;
    use crate::model::Year;

    pub fn student(id: &str, name: &str, roll_no: &str, year: Year) -> StudentRecord {
        StudentRecord {
            id: id.into(),
            name: name.to_string(),
            roll_no: roll_no.to_string(),
            department: "Computer Science & Engineering".to_string(),
            year,
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "9876543210".to_string(),
        }
    }

    pub struct StoreFixture {
        pub store: RecordStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: RecordStore::load(MemBackend::new()),
            }
        }

        pub fn with_student(mut self, record: StudentRecord) -> Self {
            self.store.push(record).unwrap();
            self
        }

        /// Alice (R1, year 2) followed by Bob (R2, year 1).
        pub fn with_alice_and_bob(self) -> Self {
            self.with_student(student("alice", "Alice", "R1", Year::Second))
                .with_student(student("bob", "Bob", "R2", Year::First))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{student, StoreFixture};
    use super::mem_backend::MemBackend;
    use super::*;
    use crate::model::Year;

    #[test]
    fn missing_data_loads_empty() {
        let store = RecordStore::load(MemBackend::new());
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_data_loads_empty() {
        let backend = MemBackend::new().with_value(STUDENTS_KEY, "{not json");
        let store = RecordStore::load(backend);
        assert!(store.is_empty());
    }

    #[test]
    fn non_array_data_loads_empty() {
        let backend = MemBackend::new().with_value(STUDENTS_KEY, "{\"id\":\"1\"}");
        assert!(RecordStore::load(backend).is_empty());
    }

    #[test]
    fn mutations_are_persisted() {
        let fixture = StoreFixture::new().with_alice_and_bob();
        let raw = fixture.store.backend().read(STUDENTS_KEY).unwrap().unwrap();
        let persisted: Vec<StudentRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, fixture.store.all());
    }

    #[test]
    fn failed_commit_rolls_back_push() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        store.backend().set_simulate_write_error(true);
        let result = store.push(student("carl", "Carl", "R3", Year::Third));
        assert!(result.is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn failed_commit_rolls_back_remove_in_place() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        store.backend().set_simulate_write_error(true);
        assert!(store.remove_at(0).is_err());
        assert_eq!(store.all()[0].name, "Alice");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn replace_all_swaps_collection() {
        let mut store = StoreFixture::new().with_alice_and_bob().store;
        store
            .replace_all(vec![student("z", "Zed", "R9", Year::Fifth)])
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name, "Zed");
    }

    #[test]
    fn theme_defaults_to_light_and_persists() {
        let store = RecordStore::load(MemBackend::new());
        assert_eq!(store.theme(), ThemePreference::Light);
        store.set_theme(ThemePreference::Dark).unwrap();
        assert_eq!(store.theme(), ThemePreference::Dark);
    }

    #[test]
    fn unknown_theme_reads_as_light() {
        let backend = MemBackend::new().with_value(THEME_KEY, "\"purple\"");
        assert_eq!(RecordStore::load(backend).theme(), ThemePreference::Light);
    }
}
