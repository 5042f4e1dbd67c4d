//! Demo page: a draft editor beside the map.
//!
//! The page is the widget's parent. It owns the draft text, persists it to
//! localStorage, and shows the raw GeoJSON in a textarea so edits can flow
//! both ways: drawing on the map rewrites the text, typing valid GeoJSON
//! redraws the map.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use widget::config::{MapConfig, WidgetConfig};

use crate::components::map_draft::MapDraft;
use crate::net::config::fetch_map_config;
use crate::state::draft::DraftState;
use crate::util::draft_persistence::{load_draft, save_draft};

fn status_line(state: &DraftState) -> String {
    if let Some(err) = &state.last_error {
        return format!("Not applied: {err}");
    }
    match state.feature_count() {
        Some(1) => "1 feature".to_owned(),
        Some(n) => format!("{n} features"),
        None => "Draft does not parse".to_owned(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let draft = RwSignal::new(DraftState::new(load_draft().unwrap_or_default()));
    let disabled = RwSignal::new(false);
    let map_config = RwSignal::new(None::<MapConfig>);

    leptos::task::spawn_local(async move {
        map_config.set(Some(fetch_map_config().await));
    });

    // Only text changes reach the map and storage; a recorded diagnostic
    // touches the status line alone.
    let draft_text = Memo::new(move |_| draft.with(|state| state.text.clone()));
    Effect::new(move || draft_text.with(|text| save_draft(text)));

    let update_draft = Callback::new(move |text: String| draft.maybe_update(|state| state.replace(text)));
    let on_error = Callback::new(move |message: String| draft.maybe_update(|state| state.record_error(message)));

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        draft.maybe_update(|state| state.replace(text));
    };
    let on_clear = move |_| draft.maybe_update(|state| state.replace(String::new()));

    view! {
        <main class="mapdraft">
            <section class="mapdraft__map">
                {move || {
                    map_config
                        .get()
                        .map(|map| {
                            let config = WidgetConfig { map, ..WidgetConfig::default() };
                            view! {
                                <MapDraft
                                    draft=draft_text
                                    disabled=disabled
                                    update_draft=update_draft
                                    config=config
                                    on_error=on_error
                                />
                            }
                        })
                }}
            </section>
            <aside class="mapdraft__editor">
                <textarea class="mapdraft__draft" spellcheck="false" prop:value=draft_text on:input=on_input></textarea>
                <div class="mapdraft__controls">
                    <button on:click=on_clear>"Clear"</button>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=disabled
                            on:change=move |ev| disabled.set(event_target_checked(&ev))
                        />
                        " disabled"
                    </label>
                </div>
                <p class="mapdraft__status">{move || draft.with(status_line)}</p>
            </aside>
        </main>
    }
}
