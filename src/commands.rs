//! Store Command Wrappers
//!
//! UI-facing bindings to the widget store over `localStorage`. Each command
//! opens the store, runs one operation and reports failures as strings.

use crate::config::AppConfig;
use crate::error::StoreError;
use crate::models::{WidgetOptions, WidgetRecord};
use crate::storage::BrowserStorage;
use crate::widget_store::{BrowserConfirm, WidgetStore};

type PageStore = WidgetStore<BrowserStorage, BrowserConfirm>;

fn open() -> Result<PageStore, String> {
    let storage = BrowserStorage::new().map_err(|e| e.to_string())?;
    Ok(WidgetStore::with_config(storage, BrowserConfirm, &AppConfig::default()))
}

fn report(op: &str, err: StoreError) -> String {
    log::warn!("[STORE] {} failed: {}", op, err);
    err.to_string()
}

// ========================
// Widget Commands
// ========================

/// `Ok(None)` when the saved list is corrupted and the user kept it
pub fn load_widgets() -> Result<Option<Vec<WidgetRecord>>, String> {
    let widgets = open()?.load();
    if let Some(widgets) = &widgets {
        log::info!("[STORE] Loaded {} widgets", widgets.len());
    }
    Ok(widgets)
}

pub fn insert_widget(record: WidgetRecord, position: Option<usize>) -> Result<Vec<WidgetRecord>, String> {
    open()?.insert_at(record, position).map_err(|e| report("insert", e))
}

pub fn remove_widget(position: usize) -> Result<Vec<WidgetRecord>, String> {
    open()?.remove_at(position).map_err(|e| report("remove", e))
}

pub fn update_widget_options(position: usize, options: WidgetOptions) -> Result<Vec<WidgetRecord>, String> {
    open()?.update_options(position, options).map_err(|e| report("update", e))
}

pub fn move_widget(from: usize, to: usize) -> Result<Vec<WidgetRecord>, String> {
    open()?.move_widget(from, to).map_err(|e| report("move", e))
}

pub fn clear_widgets() -> Result<Vec<WidgetRecord>, String> {
    open()?.clear().map_err(|e| report("clear", e))
}

// ========================
// Background Commands
// ========================

pub fn load_background() -> Result<String, String> {
    open()?.background().map_err(|e| report("load background", e))
}

pub fn save_background(style: &str) -> Result<(), String> {
    open()?.set_background(style).map_err(|e| report("save background", e))
}
