//! Dashboard list entry for one escrow.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::EscrowSummary;
use crate::util::display::{role_badge_class, role_label, status_label, transaction_type_label};

#[component]
pub fn EscrowCard(escrow: EscrowSummary, #[prop(optional)] can_invite: bool) -> impl IntoView {
    let invite_href = format!("/escrows/{}/invite", escrow.id);
    view! {
        <article class="escrow-card">
            <header class="escrow-card__header">
                <div>
                    <div class="escrow-card__name">{escrow.agreement_name}</div>
                    <div class="escrow-card__address">{escrow.property_address}</div>
                </div>
                <span class=role_badge_class(escrow.role)>{role_label(escrow.role)}</span>
            </header>
            <dl class="escrow-card__facts">
                <dt>"Status"</dt>
                <dd>{status_label(escrow.status)}</dd>
                <dt>"Type"</dt>
                <dd>{transaction_type_label(&escrow.transaction_type)}</dd>
            </dl>
            <Show when=move || can_invite>
                <A href=invite_href.clone() attr:class="escrow-card__invite">
                    "Invite participants"
                </A>
            </Show>
        </article>
    }
}
