//! Main application component with routing

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Header, Sidebar};
use crate::pages::{AlertsPage, ClientsPage, NotFoundPage, PlanboardPage, RostersPage};
use crate::settings::AppSettings;
use crate::store::provide_store;
use crate::theme::provide_settings;

/// Root application component
#[component]
pub fn App(settings: AppSettings) -> impl IntoView {
    provide_meta_context();
    provide_settings(&settings);
    provide_store();

    let palette = settings.theme.css_variables();

    view! {
        <Title text="Planboard" />
        <Router>
            <div class="min-h-screen bg-gray-900 text-gray-100" style=palette>
                <div class="flex h-screen">
                    <Sidebar />
                    <div class="flex-1 flex flex-col overflow-hidden">
                        <Header />
                        <main class="flex-1 overflow-y-auto p-6 bg-gray-800">
                            <Routes fallback=NotFoundPage>
                                <Route path=path!("/") view=PlanboardPage />
                                <Route path=path!("/clients") view=ClientsPage />
                                <Route path=path!("/rosters") view=RostersPage />
                                <Route path=path!("/alerts") view=AlertsPage />
                            </Routes>
                        </main>
                    </div>
                </div>
            </div>
        </Router>
    }
}
