//! Bridge component between a Leptos draft signal and the imperative `widget::MapWidget`.
//!
//! ARCHITECTURE
//! ============
//! The widget crate owns the map/overlay lifecycle and the draft codec; this
//! host only wires reactive inputs to it. One effect mounts the widget once
//! the container `div` exists, one applies every draft change after mount,
//! and one forwards the `disabled` flag. Cleanup unmounts, which releases the
//! overlay listeners.
//!
//! The draft effect applies each distinct text once. A parent that records
//! the widget's diagnostics in the same state it feeds back as `draft` would
//! otherwise re-run the import of a malformed draft forever.

use leptos::prelude::*;
use widget::config::WidgetConfig;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use widget::adapter::MapWidget;
#[cfg(feature = "csr")]
use widget::mapbox::MapboxBackend;

#[cfg(feature = "csr")]
use crate::state::draft::DraftGate;

/// Inline style of the map container.
pub const CONTAINER_STYLE: &str = "width:100%;height:100%;border:1px solid #ccc";

/// Map with a drawing overlay bound to a GeoJSON draft.
///
/// Every finished edit on the map calls `update_draft` with the whole feature
/// collection. Every change of `draft` reloads the overlay and fits the camera
/// to it. A draft that does not parse leaves the map alone; the reason goes to
/// `on_error` when given.
#[component]
pub fn MapDraft(
    #[prop(into)] draft: Signal<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
    update_draft: Callback<String>,
    #[prop(optional)] config: Option<WidgetConfig>,
    #[prop(optional)] on_error: Option<Callback<String>>,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let widget: Rc<RefCell<Option<MapWidget<MapboxBackend>>>> = Rc::new(RefCell::new(None));
        let gate = Rc::new(RefCell::new(DraftGate::default()));
        let ready = RwSignal::new(false);
        let text = Memo::new(move |_| draft.get());
        let config = config.unwrap_or_default();

        // Mount once the container is in the DOM.
        {
            let widget = Rc::clone(&widget);
            let gate = Rc::clone(&gate);
            Effect::new(move || {
                let Some(container) = container_ref.get() else {
                    return;
                };
                let Ok(mut slot) = widget.try_borrow_mut() else {
                    log::warn!("map draft mount skipped: widget busy");
                    return;
                };
                if slot.is_some() {
                    return;
                }

                let mut instance = MapWidget::new(MapboxBackend, config.clone(), move |text| update_draft.run(text));
                if let Some(on_error) = on_error {
                    instance = instance.with_diagnostics(move |err| on_error.run(err.to_string()));
                }
                match instance.mount(&container) {
                    Ok(outcome) => {
                        log::debug!("map draft mount: {outcome:?}");
                        *slot = Some(instance);
                        drop(slot);
                        gate.borrow_mut().reset();
                        ready.set(true);
                    }
                    Err(err) => log::error!("map draft mount failed: {err}"),
                }
            });
        }

        // Draft changed: reload the overlay and fit the camera.
        {
            let widget = Rc::clone(&widget);
            Effect::new(move || {
                let text = text.get();
                if !ready.get() {
                    return;
                }
                let Ok(slot) = widget.try_borrow() else {
                    log::warn!("draft not applied: widget busy");
                    return;
                };
                let Some(instance) = slot.as_ref() else {
                    return;
                };
                if !gate.borrow_mut().admit(&text) {
                    return;
                }
                if let Err(err) = instance.apply_draft(&text) {
                    log::debug!("draft not applied: {err}");
                }
            });
        }

        {
            let widget = Rc::clone(&widget);
            Effect::new(move || {
                let flag = disabled.get();
                if !ready.get() {
                    return;
                }
                match widget.try_borrow_mut() {
                    Ok(mut slot) => {
                        if let Some(instance) = slot.as_mut() {
                            instance.set_disabled(flag);
                        }
                    }
                    Err(_) => log::warn!("disabled flag not forwarded: widget busy"),
                }
            });
        }

        let stored = StoredValue::new_local(widget);
        on_cleanup(move || {
            let released = stored.try_with_value(|widget| widget.try_borrow_mut().ok().and_then(|mut slot| slot.take()));
            if let Some(Some(mut instance)) = released {
                instance.unmount();
            }
        });
    }

    #[cfg(not(feature = "csr"))]
    {
        let _ = (draft, disabled, update_draft, config, on_error);
    }

    view! {
        <div node_ref=container_ref class="map-draft" style=CONTAINER_STYLE></div>
    }
}
