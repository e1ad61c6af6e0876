//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every UI action, reads
//! and writes alike, funnels through [`RollbookApi`].
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selectors → record ids, patches → full inputs)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O and no formatting.
//!
//! `RollbookApi<B: StorageBackend>` is generic over the storage backend:
//! `FsBackend` in production and `MemBackend` in tests.

use crate::commands::helpers::resolve_selector;
use crate::commands::{self, CmdResult, RollbookPaths, StudentPatch};
use crate::error::{Result, RollbookError};
use crate::model::StudentInput;
use crate::query::ViewCriteria;
use crate::store::{RecordStore, StorageBackend};

pub struct RollbookApi<B: StorageBackend> {
    store: RecordStore<B>,
    paths: RollbookPaths,
}

impl<B: StorageBackend> RollbookApi<B> {
    pub fn new(store: RecordStore<B>, paths: RollbookPaths) -> Self {
        Self { store, paths }
    }

    pub fn create_student(&mut self, input: StudentInput) -> Result<CmdResult> {
        commands::create::run(&mut self.store, input)
    }

    /// Replaces every field of the selected record.
    pub fn update_student(&mut self, selector: &str, input: StudentInput) -> Result<CmdResult> {
        let id = resolve_selector(&self.store, &StudentSelector::new(selector))?;
        commands::update::run(&mut self.store, &id, input)
    }

    /// Changes only the fields present in `patch`.
    pub fn edit_student(&mut self, selector: &str, patch: &StudentPatch) -> Result<CmdResult> {
        if patch.is_empty() {
            return Err(RollbookError::Api("Nothing to change".to_string()));
        }
        let id = resolve_selector(&self.store, &StudentSelector::new(selector))?;
        let current = self
            .store
            .find(&id)
            .ok_or_else(|| RollbookError::NotFound(id.clone()))?;
        let input = patch.apply_to(current);
        commands::update::run(&mut self.store, &id, input)
    }

    pub fn delete_student(&mut self, selector: &str) -> Result<CmdResult> {
        let id = resolve_selector(&self.store, &StudentSelector::new(selector))?;
        commands::delete::run(&mut self.store, &id)
    }

    pub fn list_students(&self, criteria: &ViewCriteria) -> Result<CmdResult> {
        commands::list::run(&self.store, criteria)
    }

    pub fn view_students<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors: Vec<_> = selectors
            .iter()
            .map(|s| StudentSelector::new(s.as_ref()))
            .collect();
        commands::view::run(&self.store, &selectors)
    }

    pub fn import_students(&mut self, payload: &str) -> Result<CmdResult> {
        commands::import::run(&mut self.store, payload)
    }

    /// Seeds demo records when the store is empty.
    pub fn load_sample_students(&mut self) -> Result<CmdResult> {
        commands::sample::run(&mut self.store)
    }

    pub fn export_students(&self) -> Result<CmdResult> {
        commands::export::run(&self.store)
    }

    pub fn departments(&self) -> Result<CmdResult> {
        commands::departments::run(&self.store)
    }

    pub fn theme(&self, action: ThemeAction) -> Result<CmdResult> {
        commands::theme::run(&self.store, action)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn paths(&self) -> &RollbookPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::helpers::StudentSelector;
pub use crate::commands::theme::ThemeAction;
pub use commands::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemePreference;
    use crate::query::SortKey;
    use crate::store::fixtures::StoreFixture;
    use crate::store::mem_backend::MemBackend;
    use std::path::PathBuf;

    fn api() -> RollbookApi<MemBackend> {
        let store = StoreFixture::new().with_alice_and_bob().store;
        RollbookApi::new(
            store,
            RollbookPaths {
                data_dir: PathBuf::from("/nonexistent"),
            },
        )
    }

    #[test]
    fn delete_by_roll_no_then_list() {
        let mut api = api();
        api.delete_student("R2").unwrap();
        let result = api.list_students(&ViewCriteria::default()).unwrap();
        assert_eq!(result.listed_students.len(), 1);
        assert_eq!(result.listed_students[0].name, "Alice");
    }

    #[test]
    fn list_reflects_latest_commit() {
        let mut api = api();
        let mut input = api.store().all()[1].to_input();
        input.year = "5".into();
        api.update_student("bob", input).unwrap();

        let criteria = ViewCriteria {
            sort: SortKey::YearDesc,
            ..Default::default()
        };
        let names: Vec<_> = api
            .list_students(&criteria)
            .unwrap()
            .listed_students
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[test]
    fn edit_changes_only_given_fields() {
        let mut api = api();
        let patch = StudentPatch {
            email: Some("alice@school.edu".into()),
            ..Default::default()
        };
        api.edit_student("R1", &patch).unwrap();
        let alice = &api.store().all()[0];
        assert_eq!(alice.email, "alice@school.edu");
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.roll_no, "R1");
    }

    #[test]
    fn empty_edit_is_rejected() {
        let mut api = api();
        assert!(api.edit_student("R1", &StudentPatch::default()).is_err());
    }

    #[test]
    fn unknown_selector_is_not_found() {
        let mut api = api();
        assert!(matches!(
            api.delete_student("R404"),
            Err(RollbookError::NotFound(_))
        ));
    }

    #[test]
    fn theme_dispatches() {
        let api = api();
        let result = api.theme(ThemeAction::Set(ThemePreference::Dark)).unwrap();
        assert_eq!(result.theme, Some(ThemePreference::Dark));
    }

    #[test]
    fn sample_only_loads_into_empty_store() {
        let mut api = api();
        api.load_sample_students().unwrap();
        assert_eq!(api.store().len(), 2);

        let mut empty = RollbookApi::new(
            StoreFixture::new().store,
            RollbookPaths {
                data_dir: PathBuf::from("/nonexistent"),
            },
        );
        empty.load_sample_students().unwrap();
        assert_eq!(empty.store().all()[0].roll_no, "714023105053");
    }
}
