//! Widget Bodies
//!
//! One component per widget kind, selected by a single match on the kind.

use leptos::prelude::*;

use crate::clock;
use crate::components::save_option;
use crate::context::use_app_context;
use crate::geo::{IpState, NO_INFORMATION};
use crate::models::{OptionValue, WidgetKind, WidgetRecord};
use crate::store::use_app_store;

/// Dispatch to the body component for `record.kind`
#[component]
pub fn WidgetBody(index: usize, record: WidgetRecord) -> impl IntoView {
    match record.kind {
        WidgetKind::Generic => view! { <GenericWidget record=record /> }.into_any(),
        WidgetKind::Time => view! { <TimeWidget record=record /> }.into_any(),
        WidgetKind::Date => view! { <DateWidget record=record /> }.into_any(),
        WidgetKind::Ip => view! { <IpWidget record=record /> }.into_any(),
        WidgetKind::StaticText => view! { <p class="static-text">{record.text("text")}</p> }.into_any(),
        WidgetKind::DynamicText => view! { <DynamicTextWidget index=index record=record /> }.into_any(),
        WidgetKind::Space => {
            let height = record.number("height", 32.0).max(0.0);
            view! { <div class="spacer" style=format!("height: {}px", height)></div> }.into_any()
        }
        WidgetKind::Greeting => view! { <GreetingWidget record=record /> }.into_any(),
        WidgetKind::Css => view! { <style>{record.text("css")}</style> }.into_any(),
    }
}

#[component]
fn GenericWidget(record: WidgetRecord) -> impl IntoView {
    let json = serde_json::to_string(&record).unwrap_or_default();
    view! { <code class="generic-widget">{json}</code> }
}

#[component]
fn TimeWidget(record: WidgetRecord) -> impl IntoView {
    let ctx = use_app_context();
    let twelve_hour = record.flag("12h", false);
    let seconds = record.flag("seconds", true);

    view! {
        <div class="time">
            {move || clock::format_time(ctx.now.get(), twelve_hour, seconds)}
        </div>
    }
}

#[component]
fn DateWidget(record: WidgetRecord) -> impl IntoView {
    let ctx = use_app_context();
    let weekday = record.flag("weekday", true);
    let year = record.flag("year", true);

    view! {
        <div class="date">
            {move || clock::format_date(ctx.now.get().date(), weekday, year)}
        </div>
    }
}

#[component]
fn GreetingWidget(record: WidgetRecord) -> impl IntoView {
    let ctx = use_app_context();
    let name = record.text("name");

    view! {
        <div class="greeting">{move || clock::greeting(ctx.now.get(), &name)}</div>
    }
}

#[component]
fn IpWidget(record: WidgetRecord) -> impl IntoView {
    let ctx = use_app_context();
    let show_ip = record.flag("show_ip", true);
    let show_location = record.flag("show_location", true);

    view! {
        <div class="ip">
            {move || match ctx.ip_state.get() {
                IpState::Loading => view! { <span class="ip-loading">"Locating…"</span> }.into_any(),
                IpState::Unavailable => view! { <span class="ip-none">{NO_INFORMATION}</span> }.into_any(),
                IpState::Ready(info) => {
                    let ip = show_ip.then(|| info.ip.clone());
                    let location = if show_location { info.location_line() } else { None };
                    view! {
                        {ip.map(|ip| view! { <div class="ip-address">{ip}</div> })}
                        {location.map(|l| view! { <div class="ip-location">{l}</div> })}
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// Text edited in place, saved when the textarea loses focus
#[component]
fn DynamicTextWidget(index: usize, record: WidgetRecord) -> impl IntoView {
    let store = use_app_store();

    view! {
        <textarea
            class="dynamic-text"
            prop:value=record.text("text")
            placeholder="Write something…"
            on:change=move |ev| {
                save_option(&store, index, "text", OptionValue::Text(event_target_value(&ev)));
            }
        ></textarea>
    }
}
