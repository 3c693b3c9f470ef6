//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use chrono::NaiveDateTime;
use leptos::prelude::*;

use crate::geo::IpState;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Shared clock, ticked by the app's interval timer
    pub now: ReadSignal<NaiveDateTime>,
    /// Latest IP/location lookup result
    pub ip_state: ReadSignal<IpState>,
    /// Whether widget controls are shown - read
    pub editing: ReadSignal<bool>,
    /// Whether widget controls are shown - write
    set_editing: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        now: ReadSignal<NaiveDateTime>,
        ip_state: ReadSignal<IpState>,
        editing: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            now,
            ip_state,
            editing: editing.0,
            set_editing: editing.1,
        }
    }

    /// Toggle edit mode
    pub fn toggle_editing(&self) {
        self.set_editing.update(|v| *v = !*v);
    }
}

/// Get the app context, panics if App did not provide it
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
