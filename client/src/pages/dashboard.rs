//! Dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts the global tap selector in the header. Everything below the header
//! reads the committed scope from context.

use leptos::prelude::*;

use crate::components::scope_summary::ScopeSummary;
use crate::components::tap_selector::TapSelector;

/// Dashboard page with the tap selector header.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Overview"</span>
                <span class="toolbar__spacer"></span>
                <TapSelector/>
            </header>

            <div class="dashboard-page__grid">
                <ScopeSummary/>
            </div>
        </div>
    }
}
