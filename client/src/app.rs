//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::pages::{
    become_broker::BecomeBrokerPage, dashboard::DashboardPage, escrow_create::EscrowCreatePage,
    escrow_invite::EscrowInvitePage, kyc::KycPage, login::LoginPage, register::RegisterPage,
};
use crate::state::session::AuthContext;
use crate::state::storage::default_storage;
use crate::util::guard::{DASHBOARD_PATH, RouteAccess};

/// Root application component.
///
/// Builds the session from persisted storage, provides it to every page, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(ClientConfig::from_env(), default_storage());
    log::debug!("session restored: {:?}", auth.phase());
    provide_context(auth);

    view! {
        <Title text="Escrow Platform"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path=DASHBOARD_PATH/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("escrows"), StaticSegment("new"))
                        view=|| {
                            view! {
                                <ProtectedRoute access=RouteAccess::Broker>
                                    <EscrowCreatePage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("escrows"), ParamSegment("id"), StaticSegment("invite"))
                        view=|| {
                            view! {
                                <ProtectedRoute access=RouteAccess::Broker>
                                    <EscrowInvitePage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("become-broker")
                        view=|| view! { <ProtectedRoute><BecomeBrokerPage/></ProtectedRoute> }
                    />
                    <Route path=StaticSegment("kyc") view=|| view! { <ProtectedRoute><KycPage/></ProtectedRoute> }/>
                </Routes>
            </main>
        </Router>
    }
}
