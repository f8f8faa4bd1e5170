use super::column::DashboardColumn;
use crate::domain::a001_unit::api as unit_api;
use crate::domain::a002_standard::api as standard_api;
use contracts::domain::a001_unit::Unit;
use contracts::domain::a002_standard::StandardsSet;
use contracts::enums::Subject;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// One column per subject with that subject's units
#[component]
pub fn SubjectsDashboard() -> impl IntoView {
    let (units, set_units) = signal(Vec::<Unit>::new());
    let (sets, set_sets) = signal(Vec::<StandardsSet>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Load units and standards sets on mount
    Effect::new(move |_| {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match unit_api::fetch_units().await {
                Ok(list) => {
                    log::debug!("Loaded {} units", list.len());
                    set_units.set(list);
                }
                Err(e) => {
                    log::error!("Failed to load units: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });

        spawn_local(async move {
            match standard_api::fetch_sets().await {
                Ok(list) => set_sets.set(list),
                Err(e) => log::error!("Failed to load standards sets: {}", e),
            }
        });
    });

    view! {
        <div class="subjects-dashboard">
            <header class="subjects-dashboard__header">
                <h1>"Units"</h1>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </header>

            {move || error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
            })}

            <div class="subjects-dashboard__columns">
                {Subject::all()
                    .into_iter()
                    .map(|subject| view! {
                        <DashboardColumn subject=subject units=units sets=sets />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
