//! Widget Store
//!
//! The authoritative ordered widget list, persisted as one JSON array in a
//! single storage slot. Every mutation loads the slot, edits the list and
//! writes it back immediately; the last writer wins.
//!
//! Widgets have no stable id. All lookups are positional.

use crate::config::AppConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::{WidgetOptions, WidgetRecord};
use crate::storage::KeyValueStorage;

/// Asks the user whether corrupted widget data may be discarded
pub trait ResetPrompt {
    fn confirm_reset(&self, error: &StoreError) -> bool;
}

impl<F: Fn(&StoreError) -> bool> ResetPrompt for F {
    fn confirm_reset(&self, error: &StoreError) -> bool {
        self(error)
    }
}

/// `window.confirm` dialog
pub struct BrowserConfirm;

impl ResetPrompt for BrowserConfirm {
    fn confirm_reset(&self, error: &StoreError) -> bool {
        let message = format!(
            "An error occurred while reading the saved widgets list.\nWould you like to reset it?\n{}",
            error
        );
        web_sys::window()
            .and_then(|w| w.confirm_with_message(&message).ok())
            .unwrap_or(false)
    }
}

pub struct WidgetStore<S, P> {
    storage: S,
    prompt: P,
    widgets_key: &'static str,
    background_key: &'static str,
}

impl<S: KeyValueStorage, P: ResetPrompt> WidgetStore<S, P> {
    #[cfg(test)]
    pub fn new(storage: S, prompt: P) -> Self {
        Self::with_config(storage, prompt, &AppConfig::default())
    }

    pub fn with_config(storage: S, prompt: P, config: &AppConfig) -> Self {
        Self {
            storage,
            prompt,
            widgets_key: config.widgets_key,
            background_key: config.background_key,
        }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the widget list.
    ///
    /// An absent slot is an empty list. If the slot cannot be read or
    /// parsed, the prompt decides: a confirmed reset overwrites the slot
    /// with `[]`, a declined one returns `None` and leaves the slot as is.
    pub fn load(&self) -> Option<Vec<WidgetRecord>> {
        let error = match self.read() {
            Ok(widgets) => return Some(widgets),
            Err(e) => e,
        };

        log::warn!("[STORE] {}", error);
        if !self.prompt.confirm_reset(&error) {
            log::warn!("[STORE] Reset declined, widgets unavailable");
            return None;
        }

        match self.save(Vec::new()) {
            Ok(widgets) => {
                log::info!("[STORE] Widget list reset");
                Some(widgets)
            }
            Err(e) => {
                log::error!("[STORE] Reset failed: {}", e);
                None
            }
        }
    }

    fn read(&self) -> StoreResult<Vec<WidgetRecord>> {
        let raw = self
            .storage
            .get(self.widgets_key)
            .map_err(|e| StoreError::Corrupted(e.to_string()))?;
        match raw {
            None => Ok(Vec::new()),
            Some(text) => {
                serde_json::from_str(&text).map_err(|e| StoreError::Corrupted(e.to_string()))
            }
        }
    }

    /// Overwrite the slot with `widgets` and hand them back
    pub fn save(&self, widgets: Vec<WidgetRecord>) -> StoreResult<Vec<WidgetRecord>> {
        let json =
            serde_json::to_string(&widgets).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.storage.set(self.widgets_key, &json)?;
        log::debug!("[STORE] Saved {} widgets", widgets.len());
        Ok(widgets)
    }

    fn load_available(&self) -> StoreResult<Vec<WidgetRecord>> {
        self.load().ok_or(StoreError::Unavailable)
    }

    /// Insert at `position`, or append when `None`. Positions past the end append.
    pub fn insert_at(
        &self,
        record: WidgetRecord,
        position: Option<usize>,
    ) -> StoreResult<Vec<WidgetRecord>> {
        let mut widgets = self.load_available()?;
        match position {
            Some(index) if index < widgets.len() => widgets.insert(index, record),
            _ => widgets.push(record),
        }
        self.save(widgets)
    }

    /// Remove the widget at `position`. Out of range is an error and writes nothing.
    pub fn remove_at(&self, position: usize) -> StoreResult<Vec<WidgetRecord>> {
        let mut widgets = self.load_available()?;
        check_index(position, widgets.len())?;
        widgets.remove(position);
        self.save(widgets)
    }

    /// Replace the options of the widget at `position`
    pub fn update_options(
        &self,
        position: usize,
        options: WidgetOptions,
    ) -> StoreResult<Vec<WidgetRecord>> {
        let mut widgets = self.load_available()?;
        check_index(position, widgets.len())?;
        widgets[position].options = options;
        self.save(widgets)
    }

    /// Move the widget at `from` so it ends up at `to` (clamped to the last slot)
    pub fn move_widget(&self, from: usize, to: usize) -> StoreResult<Vec<WidgetRecord>> {
        let mut widgets = self.load_available()?;
        check_index(from, widgets.len())?;
        let record = widgets.remove(from);
        let to = to.min(widgets.len());
        widgets.insert(to, record);
        self.save(widgets)
    }

    pub fn clear(&self) -> StoreResult<Vec<WidgetRecord>> {
        self.save(Vec::new())
    }

    /// Background style, passed through verbatim
    pub fn background(&self) -> StoreResult<String> {
        Ok(self.storage.get(self.background_key)?.unwrap_or_default())
    }

    pub fn set_background(&self, style: &str) -> StoreResult<()> {
        self.storage.set(self.background_key, style)?;
        Ok(())
    }
}

fn check_index(index: usize, len: usize) -> StoreResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(StoreError::InvalidIndex { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WidgetKind;
    use crate::storage::MemoryStorage;
    use std::cell::Cell;

    fn accept(_: &StoreError) -> bool {
        true
    }

    fn decline(_: &StoreError) -> bool {
        false
    }

    fn setup() -> WidgetStore<MemoryStorage, fn(&StoreError) -> bool> {
        WidgetStore::new(MemoryStorage::new(), accept as fn(&StoreError) -> bool)
    }

    fn text(s: &str) -> WidgetRecord {
        WidgetRecord::new(WidgetKind::StaticText).with_option("text", s)
    }

    #[test]
    fn test_empty_slot_loads_empty_list() {
        let store = setup();
        assert_eq!(store.load(), Some(vec![]));
        // Reading does not create the slot
        assert_eq!(store.storage().raw("widgets"), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = setup();
        let widgets = vec![
            WidgetRecord::new(WidgetKind::Date),
            WidgetRecord::new(WidgetKind::Time).with_option("12h", true),
            text("hello"),
            text("hello"),
            WidgetRecord::new(WidgetKind::Space).with_option("height", 48i64),
        ];
        let saved = store.save(widgets.clone()).unwrap();
        assert_eq!(saved, widgets);
        assert_eq!(store.load(), Some(widgets));
    }

    #[test]
    fn test_insert_without_position_appends() {
        let store = setup();
        store.insert_at(text("a"), None).unwrap();
        let widgets = store.insert_at(text("b"), None).unwrap();
        assert_eq!(widgets, vec![text("a"), text("b")]);
    }

    #[test]
    fn test_insert_at_position_shifts_right() {
        let store = setup();
        store.save(vec![text("a"), text("b"), text("c")]).unwrap();

        let widgets = store.insert_at(text("x"), Some(1)).unwrap();
        assert_eq!(widgets, vec![text("a"), text("x"), text("b"), text("c")]);

        let widgets = store.insert_at(text("y"), Some(0)).unwrap();
        assert_eq!(widgets[0], text("y"));

        let widgets = store.insert_at(text("z"), Some(widgets.len())).unwrap();
        assert_eq!(widgets.last(), Some(&text("z")));
        assert_eq!(store.load().unwrap(), widgets);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let store = setup();
        store.save(vec![text("a")]).unwrap();
        let widgets = store.insert_at(text("b"), Some(10)).unwrap();
        assert_eq!(widgets, vec![text("a"), text("b")]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let store = setup();
        store.save(vec![text("a"), text("b"), text("c")]).unwrap();
        let widgets = store.remove_at(1).unwrap();
        assert_eq!(widgets, vec![text("a"), text("c")]);
        assert_eq!(store.load().unwrap(), widgets);
    }

    #[test]
    fn test_remove_is_positional_with_duplicates() {
        let store = setup();
        store.save(vec![text("same"), text("other"), text("same")]).unwrap();
        let widgets = store.remove_at(2).unwrap();
        assert_eq!(widgets, vec![text("same"), text("other")]);
    }

    #[test]
    fn test_remove_out_of_range_is_invalid_index() {
        let store = setup();
        store.save(vec![text("a")]).unwrap();
        let before = store.storage().raw("widgets");

        let err = store.remove_at(1).unwrap_err();
        assert_eq!(err, StoreError::InvalidIndex { index: 1, len: 1 });
        assert_eq!(store.storage().raw("widgets"), before);
    }

    #[test]
    fn test_update_options() {
        let store = setup();
        store.save(vec![WidgetRecord::new(WidgetKind::Time), text("a")]).unwrap();

        let mut options = WidgetOptions::new();
        options.insert("12h".to_string(), Some(true.into()));
        let widgets = store.update_options(0, options.clone()).unwrap();
        assert_eq!(widgets[0].options, options);
        assert_eq!(widgets[1], text("a"));

        let err = store.update_options(5, WidgetOptions::new()).unwrap_err();
        assert_eq!(err, StoreError::InvalidIndex { index: 5, len: 2 });
    }

    #[test]
    fn test_move_widget() {
        let store = setup();
        store.save(vec![text("a"), text("b"), text("c")]).unwrap();

        let widgets = store.move_widget(0, 2).unwrap();
        assert_eq!(widgets, vec![text("b"), text("c"), text("a")]);

        let widgets = store.move_widget(2, 0).unwrap();
        assert_eq!(widgets, vec![text("a"), text("b"), text("c")]);

        let widgets = store.move_widget(1, 99).unwrap();
        assert_eq!(widgets, vec![text("a"), text("c"), text("b")]);

        assert!(matches!(store.move_widget(3, 0), Err(StoreError::InvalidIndex { .. })));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = setup();
        store.save(vec![text("a"), text("b")]).unwrap();
        assert_eq!(store.clear().unwrap(), vec![]);
        assert_eq!(store.load(), Some(vec![]));
        assert_eq!(store.clear().unwrap(), vec![]);
        assert_eq!(store.storage().raw("widgets").as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupted_slot_reset_when_confirmed() {
        let asked = Cell::new(0);
        let prompt = |err: &StoreError| {
            assert!(matches!(err, StoreError::Corrupted(_)));
            asked.set(asked.get() + 1);
            true
        };
        let store = WidgetStore::new(MemoryStorage::with_slot("widgets", "{not json"), prompt);

        assert_eq!(store.load(), Some(vec![]));
        assert_eq!(asked.get(), 1);
        assert_eq!(store.storage().raw("widgets").as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupted_slot_kept_when_declined() {
        let store = WidgetStore::new(MemoryStorage::with_slot("widgets", "[{\"type\":"), decline);

        assert_eq!(store.load(), None);
        assert_eq!(store.storage().raw("widgets").as_deref(), Some("[{\"type\":"));

        // Mutations refuse to guess at the data
        assert_eq!(store.insert_at(text("a"), None), Err(StoreError::Unavailable));
        assert_eq!(store.remove_at(0), Err(StoreError::Unavailable));
        assert_eq!(store.storage().raw("widgets").as_deref(), Some("[{\"type\":"));
    }

    #[test]
    fn test_wrong_shape_is_corruption() {
        let store = WidgetStore::new(MemoryStorage::with_slot("widgets", r#"{"type":1}"#), decline);
        assert_eq!(store.load(), None);

        let store = WidgetStore::new(MemoryStorage::with_slot("widgets", r#"[{"type":99}]"#), decline);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_recovers_declined_store() {
        let store = WidgetStore::new(MemoryStorage::with_slot("widgets", "garbage"), decline);
        assert_eq!(store.load(), None);
        store.clear().unwrap();
        assert_eq!(store.load(), Some(vec![]));
    }

    #[test]
    fn test_background_round_trip() {
        let store = setup();
        assert_eq!(store.background().unwrap(), "");
        let style = "background: linear-gradient(#123, #456); (not validated";
        store.set_background(style).unwrap();
        assert_eq!(store.background().unwrap(), style);
        // Independent of the widget slot
        store.clear().unwrap();
        assert_eq!(store.background().unwrap(), style);
    }

    #[test]
    fn test_insert_then_remove_scenario() {
        let store = setup();
        let date = WidgetRecord::new(WidgetKind::Date);
        let time = WidgetRecord::new(WidgetKind::Time);
        let time_12h = WidgetRecord::new(WidgetKind::Time).with_option("12h", true);

        store.insert_at(date.clone(), None).unwrap();
        store.insert_at(time.clone(), None).unwrap();
        store.insert_at(time_12h.clone(), None).unwrap();
        assert_eq!(store.load(), Some(vec![date.clone(), time, time_12h.clone()]));

        store.remove_at(1).unwrap();
        assert_eq!(store.load(), Some(vec![date, time_12h]));
        assert_eq!(
            store.storage().raw("widgets").as_deref(),
            Some(r#"[{"type":2,"options":{}},{"type":1,"options":{"12h":true}}]"#)
        );
    }
}
