//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The widget list
//! here mirrors the persisted slot and is replaced wholesale after every
//! store command.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{WidgetKind, WidgetRecord};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Widgets in display order
    pub widgets: Vec<WidgetRecord>,
    /// Free-form background style for the page container
    pub background: String,
    /// Saved widgets could not be read and the reset was declined
    pub unavailable: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the widget list after a successful store command
pub fn store_set_widgets(store: &AppStore, widgets: Vec<WidgetRecord>) {
    store.widgets().set(widgets);
    store.unavailable().set(false);
}

/// Number of widgets of `kind`, tracked
pub fn store_count_kind(store: &AppStore, kind: WidgetKind) -> usize {
    store.widgets().with(|widgets| widgets.iter().filter(|w| w.kind == kind).count())
}
