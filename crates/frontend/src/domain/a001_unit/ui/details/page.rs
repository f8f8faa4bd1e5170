use super::sections::{DatesSection, PlanningList, PlanningListSection, StandardsSection};
use super::view_model::UnitDetailsViewModel;
use crate::domain::a001_unit::ui::UnitFormNav;
use crate::shared::icons::icon;
use contracts::domain::a001_unit::{AssessmentKind, UnitId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// `/units/:id`
#[component]
pub fn UnitDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let vm = UnitDetailsViewModel::new();

    // Load once the route id is known
    Effect::new(move |_| {
        let Some(raw) = params.read().get("id") else {
            return;
        };
        match UnitId::from_string(&raw) {
            Ok(id) => vm.load(id),
            Err(e) => {
                log::warn!("Bad unit id in route {:?}: {}", raw, e);
                vm.error.set(Some(format!("Unknown unit \"{}\"", raw)));
            }
        }
    });

    view! {
        <div class="unit-page">
            <div class="unit-page__back">
                <A href="/">
                    {icon("arrow-left")}
                    <span>"All units"</span>
                </A>
            </div>

            <Show when=move || vm.loading.get()>
                <div class="unit-page__loading">
                    <Spinner size=SpinnerSize::Small />
                </div>
            </Show>

            {move || vm.error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    {err}
                </MessageBar>
            })}

            <Show when=move || vm.store.is_loaded()>
                <UnitFormNav store=vm.store />
                <DatesSection vm=vm />
                <PlanningListSection vm=vm list=PlanningList::Objectives />
                <StandardsSection vm=vm />
                <PlanningListSection vm=vm list=PlanningList::Assessments(AssessmentKind::Formative) />
                <PlanningListSection vm=vm list=PlanningList::Assessments(AssessmentKind::Summative) />
            </Show>
        </div>
    }
}
