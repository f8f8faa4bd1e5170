mod dates;
mod list_editor;
mod standards;

pub use dates::DatesSection;
pub use list_editor::{PlanningList, PlanningListSection};
pub use standards::StandardsSection;

use leptos::prelude::*;

/// Titled block of the unit page
#[component]
pub fn UnitFormSection(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="unit-section">
            <div class="unit-section__tab">{title}</div>
            <div class="unit-section__body">{children()}</div>
        </section>
    }
}
