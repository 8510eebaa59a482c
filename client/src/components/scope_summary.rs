//! Read-only view of the committed tap scope.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands in for the dashboard panels that scope their own queries to the
//! selector's committed value; it never writes the scope.

#[cfg(test)]
#[path = "scope_summary_test.rs"]
mod scope_summary_test;

use leptos::prelude::*;

use crate::state::scope::TapScope;
use crate::state::selection::Selection;

/// Panel summarizing which taps the dashboard queries are scoped to.
#[component]
pub fn ScopeSummary() -> impl IntoView {
    let scope = expect_context::<RwSignal<TapScope>>();

    let description = move || {
        scope.with(|sc| match sc.selection.as_ref() {
            None => "Waiting for tap selection...".to_owned(),
            Some(selection) => describe(selection),
        })
    };
    let query = move || scope.with(TapScope::query_value).map(|q| format!("?taps={q}"));

    view! {
        <section class="scope-summary">
            <h2 class="scope-summary__title">"Scope"</h2>
            <p class="scope-summary__description">{description}</p>
            <Show when=move || query().is_some()>
                <code class="scope-summary__query">{move || query().unwrap_or_default()}</code>
            </Show>
        </section>
    }
}

fn describe(selection: &Selection) -> String {
    match selection.ids() {
        None => "Showing data from all taps.".to_owned(),
        Some(ids) if ids.len() == 1 => "Showing data from 1 tap.".to_owned(),
        Some(ids) => format!("Showing data from {} taps.", ids.len()),
    }
}
