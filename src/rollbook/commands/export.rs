use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};
use chrono::NaiveDate;

/// Serializes the whole collection, in store order, as pretty-printed JSON.
pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let exported = serde_json::to_string_pretty(store.all())?;
    let mut result = CmdResult::default();
    if store.is_empty() {
        result.add_message(CmdMessage::info("No students to export."));
    }
    Ok(result.with_exported(exported))
}

/// File name for an export taken on `date`, e.g. `rollbook-data-2024-03-01.json`.
pub fn default_file_name(date: NaiveDate) -> String {
    format!("rollbook-data-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::import;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn exports_array_in_store_order() {
        let store = StoreFixture::new().with_alice_and_bob().store;
        let exported = run(&store).unwrap().exported.unwrap();
        let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
        let names: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert!(exported.contains('\n'));
    }

    #[test]
    fn export_then_import_reproduces_collection() {
        let source = StoreFixture::new().with_alice_and_bob().store;
        let exported = run(&source).unwrap().exported.unwrap();

        let mut target = StoreFixture::new().store;
        import::run(&mut target, &exported).unwrap();

        assert_eq!(target.all(), source.all());
    }

    #[test]
    fn file_name_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(default_file_name(date), "rollbook-data-2024-03-01.json");
    }
}
