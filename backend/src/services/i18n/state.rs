use std::sync::Arc;

use common::i18n::Language;
use log::error;
use tokio::sync::RwLock;

use crate::content::slots::{self, SlotStore};

/// Process-wide active locale, persisted across restarts. The only
/// mutation is the toggle between the two supported locales.
#[derive(Clone)]
pub struct LanguageState {
    current: Arc<RwLock<Language>>,
    slots: SlotStore,
}

impl LanguageState {
    pub fn load(slots: SlotStore) -> Self {
        let language = match slots.read(slots::LANGUAGE) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or(Language::He),
            Ok(None) => Language::He,
            Err(e) => {
                error!("failed to read language slot: {e}");
                Language::He
            }
        };
        LanguageState {
            current: Arc::new(RwLock::new(language)),
            slots,
        }
    }

    pub async fn current(&self) -> Language {
        *self.current.read().await
    }

    /// Flips the locale, persists the choice, and returns the new locale so
    /// the caller can flip the page direction with it.
    pub async fn toggle(&self) -> Language {
        let mut current = self.current.write().await;
        *current = current.toggled();
        if let Err(e) = self.slots.write(slots::LANGUAGE, current.code()) {
            error!("failed to persist language choice: {e}");
        }
        *current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn toggle_flips_and_persists_the_locale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.sqlite");
        let state = LanguageState::load(SlotStore::open(&path).unwrap());
        assert_eq!(state.current().await, Language::He);

        assert_eq!(state.toggle().await, Language::En);
        assert_eq!(state.current().await, Language::En);

        let reloaded = LanguageState::load(SlotStore::open(&path).unwrap());
        assert_eq!(reloaded.current().await, Language::En);
    }

    #[tokio::test]
    async fn unknown_persisted_code_falls_back_to_hebrew() {
        let dir = tempfile::tempdir().unwrap();
        let slots = SlotStore::open(dir.path().join("slots.sqlite")).unwrap();
        slots.write(slots::LANGUAGE, "fr").unwrap();
        let state = LanguageState::load(slots);
        assert_eq!(state.current().await, Language::He);
    }
}
