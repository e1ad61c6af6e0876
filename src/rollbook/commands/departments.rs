use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::departments;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_departments(departments(store.all())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Year;
    use crate::store::fixtures::{student, StoreFixture};

    #[test]
    fn includes_custom_departments() {
        let mut record = student("x", "Xena", "R7", Year::First);
        record.department = "Quantum Gastronomy".into();
        let store = StoreFixture::new().with_student(record).store;

        let result = run(&store).unwrap();
        assert!(result.departments.iter().any(|d| d == "Quantum Gastronomy"));
        assert!(result.departments.iter().any(|d| d == "BA History"));
    }
}
