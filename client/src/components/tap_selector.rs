//! Global tap selector dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once in the dashboard header. It owns the `TapSelection`
//! reconciler, drives inventory reads (on mount and on a polling interval),
//! and publishes every committed change into the shared `TapScope` context.

use leptos::prelude::*;

use crate::state::scope::TapScope;
use crate::state::tap_selection::{LOADING_LABEL, PickerRow, SelectorPhase, TapSelection};
use crate::util::selection_store::{BrowserSelectionStore, BrowserSlot, SlotSelectionStore};

type Selector = RwSignal<TapSelection<BrowserSelectionStore>>;

#[cfg(feature = "hydrate")]
const INVENTORY_POLL_SECS: u64 = 30;

/// Dropdown that scopes the dashboard to all taps or an explicit subset.
#[component]
pub fn TapSelector() -> impl IntoView {
    let scope = expect_context::<RwSignal<TapScope>>();
    let selector: Selector = RwSignal::new(TapSelection::new(SlotSelectionStore::new(BrowserSlot)));
    let notice = RwSignal::new(None::<String>);

    // Publish committed changes to every other view.
    Effect::new(move || {
        if let Some(committed) = selector.with(|s| s.committed().cloned()) {
            scope.maybe_update(|sc| sc.publish(&committed));
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::state::tap_selection::RefreshTicket;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        async fn read_inventory(selector: Selector, notice: RwSignal<Option<String>>, ticket: RefreshTicket) {
            let result = crate::net::api::fetch_taps().await;
            let message = selector
                .try_update(|s| {
                    s.apply_inventory(ticket, result);
                    s.take_notice()
                })
                .flatten();
            if let Some(n) = message {
                notice.set(Some(n.message()));
            }
        }

        if let Some(ticket) = selector.try_update(TapSelection::activate) {
            leptos::task::spawn_local(read_inventory(selector, notice, ticket));
        }

        let poll_alive = Arc::new(AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(INVENTORY_POLL_SECS)).await;
                if !poll_alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let Some(ticket) = selector.try_update(TapSelection::begin_refresh) else {
                    break;
                };
                read_inventory(selector, notice, ticket).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, Ordering::Relaxed));
    }

    let is_ready = move || {
        selector.with(|s| matches!(s.phase(), SelectorPhase::Ready | SelectorPhase::PickerOpen))
    };
    let is_open = move || selector.with(|s| s.phase() == SelectorPhase::PickerOpen);
    let all_active = move || selector.with(|s| s.pending().is_some_and(|p| p.is_all()));

    let take_notice = move || {
        if let Some(n) = selector.try_update(TapSelection::take_notice).flatten() {
            notice.set(Some(n.message()));
        }
    };

    let on_toggle_menu = move |_| {
        selector.update(|s| {
            if !s.dismiss() {
                s.open_picker();
            }
        });
    };

    let on_select_all = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        selector.update(|s| {
            s.select_all();
        });
    };

    let on_confirm = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        selector.update(|s| {
            s.confirm();
        });
        take_notice();
    };

    let on_dismiss = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        selector.update(|s| {
            s.dismiss();
        });
    };

    view! {
        <div class="tap-selector">
            <Show
                when=is_ready
                fallback=move || {
                    view! {
                        <button class="btn tap-selector__toggle" type="button" disabled=true>
                            <span class="tap-selector__spinner" aria-hidden="true"></span>
                            " "
                            {LOADING_LABEL}
                        </button>
                    }
                }
            >
                <button
                    class="btn tap-selector__toggle"
                    type="button"
                    aria-expanded=move || is_open().to_string()
                    disabled=move || !selector.with(TapSelection::picker_enabled)
                    on:click=on_toggle_menu
                >
                    {move || selector.with(TapSelection::display_label)}
                    " "
                    <Show when=move || selector.with(TapSelection::has_stale_member)>
                        <span class="tap-selector__stale" title="A selected tap is offline or no longer available">
                            "⚠"
                        </span>
                    </Show>
                </button>

                <Show when=is_open>
                    <ul class="tap-selector__menu">
                        <li>
                            <a
                                class="tap-selector__item"
                                class:tap-selector__item--active=all_active
                                href="#"
                                on:click=on_select_all
                            >
                                "All Taps"
                            </a>
                        </li>
                        <li>
                            <hr class="tap-selector__divider"/>
                        </li>
                        {move || {
                            selector
                                .with(TapSelection::picker_rows)
                                .into_iter()
                                .map(|row| view! { <TapRow row=row selector=selector/> })
                                .collect_view()
                        }}
                        <li class="tap-selector__actions">
                            <button class="btn btn--primary tap-selector__select" on:click=on_confirm>
                                "Select Taps"
                            </button>
                            <button class="btn tap-selector__cancel" on:click=on_dismiss>
                                "Cancel"
                            </button>
                        </li>
                    </ul>
                </Show>
            </Show>

            <Show when=move || notice.get().is_some()>
                <div class="tap-selector__notice" role="status">
                    <span>{move || notice.get().unwrap_or_default()}</span>
                    <button class="tap-selector__notice-close" on:click=move |_| notice.set(None) title="Dismiss">
                        "×"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn TapRow(row: PickerRow, selector: Selector) -> impl IntoView {
    let PickerRow { id, display_name, is_online, is_active } = row;
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        selector.update(|s| {
            s.toggle(&id);
        });
    };

    view! {
        <li>
            <a class="tap-selector__item" class:tap-selector__item--active=is_active href="#" on:click=on_click>
                {display_name}
                <Show when=move || !is_online>
                    <span class="tap-selector__offline">" (Offline)"</span>
                </Show>
            </a>
        </li>
    }
}
