use crate::domain::a001_unit::UnitStore;
use leptos::prelude::*;

pub fn unit_badge(number: i32) -> String {
    format!("U{}", number)
}

/// Header of the unit page: badge, title and subject
#[component]
pub fn UnitFormNav(store: UnitStore) -> impl IntoView {
    let unit = store.unit();

    view! {
        {move || unit.get().map(|unit| view! {
            <nav class="unit-nav">
                <span class="unit-nav__badge">{unit_badge(unit.number)}</span>
                <h1 class="unit-nav__title">{unit.title}</h1>
                <span class="unit-nav__subject">{unit.subject_name}</span>
            </nav>
        })}
    }
}
