use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ThemePreference;
use crate::store::{RecordStore, StorageBackend};

#[derive(Debug, Clone, Copy)]
pub enum ThemeAction {
    Show,
    Set(ThemePreference),
    Toggle,
}

pub fn run<B: StorageBackend>(store: &RecordStore<B>, action: ThemeAction) -> Result<CmdResult> {
    let current = store.theme();
    let mut result = CmdResult::default();

    let theme = match action {
        ThemeAction::Show => current,
        ThemeAction::Set(theme) => theme,
        ThemeAction::Toggle => current.toggled(),
    };

    if !matches!(action, ThemeAction::Show) {
        store.set_theme(theme)?;
        let label = match theme {
            ThemePreference::Light => "Switched to Light Mode",
            ThemePreference::Dark => "Switched to Dark Mode",
        };
        result.add_message(CmdMessage::success(label));
    }

    Ok(result.with_theme(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn toggle_flips_and_persists() {
        let store = StoreFixture::new().store;
        let result = run(&store, ThemeAction::Toggle).unwrap();
        assert_eq!(result.theme, Some(ThemePreference::Dark));
        assert_eq!(store.theme(), ThemePreference::Dark);

        run(&store, ThemeAction::Toggle).unwrap();
        assert_eq!(store.theme(), ThemePreference::Light);
    }

    #[test]
    fn show_does_not_write() {
        let store = StoreFixture::new().store;
        let result = run(&store, ThemeAction::Show).unwrap();
        assert_eq!(result.theme, Some(ThemePreference::Light));
        assert!(result.messages.is_empty());
    }
}
