//! ntab App
//!
//! Root component: loads the saved widgets, drives the shared clock and the
//! IP lookup, and lays out the toolbar and widget list.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::clock;
use crate::commands;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::geo::{self, IpState};
use crate::models::WidgetKind;
use crate::store::{store_count_kind, store_set_widgets, AppState, AppStateStoreFields};
use crate::components::{BackgroundEditor, Toolbar, WidgetList};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    // State
    let store = Store::new(AppState::new());
    let (now, set_now) = signal(clock::local_now());
    let (ip_state, set_ip_state) = signal(IpState::Loading);
    let (editing, set_editing) = signal(false);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(now, ip_state, (editing, set_editing)));

    // Load saved widgets
    match commands::load_widgets() {
        Ok(Some(widgets)) => store_set_widgets(&store, widgets),
        Ok(None) => store.unavailable().set(true),
        Err(e) => {
            log::error!("[APP] Cannot open storage: {}", e);
            store.unavailable().set(true);
        }
    }
    if let Ok(background) = commands::load_background() {
        store.background().set(background);
    }

    // Clock, date and greeting widgets all read this one signal
    Interval::new(config.clock_interval_ms, move || set_now.set(clock::local_now())).forget();

    // Only the newest lookup may write the result
    let generation = StoredValue::new(0u32);
    let geo_url = config.geo_url;
    let refresh_ip = move || {
        if store.widgets().with_untracked(|w| w.iter().all(|r| r.kind != WidgetKind::Ip)) {
            return;
        }
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        spawn_local(async move {
            let state = geo::fetch_ip_state(geo_url).await;
            if generation.get_value() == current {
                set_ip_state.set(state);
            }
        });
    };

    // Fetch when the first IP widget appears (including on startup)
    let ip_widgets = Memo::new(move |_| store_count_kind(&store, WidgetKind::Ip));
    Effect::new(move |prev: Option<usize>| {
        let count = ip_widgets.get();
        if count > 0 && prev.unwrap_or(0) == 0 {
            refresh_ip();
        }
        count
    });
    Interval::new(config.geo_interval_ms, refresh_ip).forget();

    view! {
        <div class="ntab-page" style=move || store.background().get()>
            <Toolbar />

            <Show when=move || store.unavailable().get()>
                <p class="storage-notice">
                    "Saved widgets are unavailable. If they were reported as corrupted, use Clear all to start fresh."
                </p>
            </Show>

            <WidgetList />

            <Show when=move || editing.get()>
                <BackgroundEditor />
            </Show>
        </div>
    }
}
