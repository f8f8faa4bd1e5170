use super::UnitFormSection;
use crate::domain::a001_unit::ui::details::UnitDetailsViewModel;
use crate::domain::a002_standard::ui::{StandardsSelector, StandardsSelectorViewModel, StandardsTable};
use leptos::prelude::*;
use thaw::*;

/// Standards picker, commit button and the table of attached standards
#[component]
pub fn StandardsSection(vm: UnitDetailsViewModel) -> impl IntoView {
    let selector = StandardsSelectorViewModel::new(vm.store);
    let set_id = vm.store.set_id();

    // Reload options whenever the unit's standards set becomes known or changes
    Effect::new(move |_| {
        selector.load_catalog(set_id.get());
    });

    view! {
        <UnitFormSection title="Standards">
            <div class="standards-picker">
                <StandardsSelector vm=selector />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=selector.saving
                    on_click=move |_| selector.commit(vm)
                >
                    {move || {
                        if selector.saving.get() {
                            view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                        } else {
                            "Update Standards".into_any()
                        }
                    }}
                </Button>
            </div>
            <StandardsTable store=vm.store />
        </UnitFormSection>
    }
}
