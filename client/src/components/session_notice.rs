//! Fallback shown when a view is mounted outside the session provider.

use leptos::prelude::*;

use crate::state::session::MissingAuthProvider;

#[component]
pub fn MissingSessionNotice() -> impl IntoView {
    log::error!("{MissingAuthProvider}");
    view! { <p class="page-error">"Session unavailable. Reload the page and try again."</p> }
}
