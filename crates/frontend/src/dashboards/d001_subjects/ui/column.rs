use crate::dashboards::d001_subjects::state::{
    add_unit_label, empty_column_text, next_unit_number, units_for_subject,
};
use crate::domain::a001_unit::ui::{nav::unit_badge, UnitCard};
use crate::shared::icons::icon;
use contracts::domain::a001_unit::{Unit, UnitId};
use contracts::domain::a002_standard::StandardsSet;
use contracts::enums::Subject;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

#[component]
pub fn DashboardColumn(
    subject: Subject,
    #[prop(into)] units: Signal<Vec<Unit>>,
    #[prop(into)] sets: Signal<Vec<StandardsSet>>,
) -> impl IntoView {
    let show_card = RwSignal::new(false);
    let navigate = use_navigate();

    let column_units = Signal::derive(move || units.with(|all| units_for_subject(all, subject)));
    let next_number = Signal::derive(move || units.with(|all| next_unit_number(all, subject)));

    let on_created = Callback::new(move |id: UnitId| {
        show_card.set(false);
        navigate(&format!("/units/{}", id), NavigateOptions::default());
    });
    let on_cancel = Callback::new(move |_: ()| show_card.set(false));

    view! {
        <section class="dashboard-column">
            <div class="dashboard-column__header">
                <h2>{subject.display_name()}</h2>
            </div>

            {move || {
                let list = column_units.get();
                if list.is_empty() {
                    view! {
                        <p class="dashboard-column__empty">{empty_column_text(subject)}</p>
                    }.into_any()
                } else {
                    list.into_iter()
                        .map(|unit| {
                            let href = format!("/units/{}", unit.id);
                            let count = unit.planning.standards.len();
                            view! {
                                <A href=href>
                                    <div class="unit-card">
                                        <span class="unit-nav__badge">{unit_badge(unit.number)}</span>
                                        <span class="unit-card__title">{unit.title}</span>
                                        <span class="unit-card__meta">{format!("{} standards", count)}</span>
                                    </div>
                                </A>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}

            <Show
                when=move || show_card.get()
                fallback=move || view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| show_card.set(true)
                    >
                        {icon("plus")}
                        {add_unit_label(subject)}
                    </Button>
                }
            >
                <UnitCard
                    subject=subject
                    sets=sets
                    next_number=next_number
                    on_created=on_created
                    on_cancel=on_cancel
                />
            </Show>
        </section>
    }
}
