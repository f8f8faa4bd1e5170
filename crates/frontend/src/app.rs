use crate::dashboards::d001_subjects::ui::SubjectsDashboard;
use crate::domain::a001_unit::ui::details::UnitDetailsPage;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Transient success messages shared by every page.
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <Router>
                <main class="app-main">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=SubjectsDashboard />
                        <Route path=(StaticSegment("units"), ParamSegment("id")) view=UnitDetailsPage />
                    </Routes>
                </main>
            </Router>
            <NotificationHost />
        </ConfigProvider>
    }
}
