use super::UnitFormSection;
use crate::domain::a001_unit::ui::details::{SaveScope, UnitDetailsViewModel};
use crate::shared::icons::icon;
use contracts::domain::a001_unit::{AssessmentKind, UnitPlanning};
use leptos::prelude::*;
use thaw::*;

/// Free-text lists of the unit plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanningList {
    Objectives,
    Assessments(AssessmentKind),
}

impl PlanningList {
    pub fn title(&self) -> &'static str {
        match self {
            PlanningList::Objectives => "Objectives",
            PlanningList::Assessments(kind) => kind.title(),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            PlanningList::Objectives => "Students will be able to...",
            PlanningList::Assessments(AssessmentKind::Formative) => "Exit ticket, quick check, ...",
            PlanningList::Assessments(AssessmentKind::Summative) => "Unit test, project, ...",
        }
    }

    pub fn scope(&self) -> SaveScope {
        match self {
            PlanningList::Objectives => SaveScope::Objectives,
            PlanningList::Assessments(kind) => SaveScope::Assessments(*kind),
        }
    }

    pub fn items<'a>(&self, planning: &'a UnitPlanning) -> &'a [String] {
        match self {
            PlanningList::Objectives => &planning.objectives,
            PlanningList::Assessments(kind) => planning.assessments(*kind),
        }
    }

    pub fn add(&self, planning: &mut UnitPlanning, text: &str) -> bool {
        match self {
            PlanningList::Objectives => planning.add_objective(text),
            PlanningList::Assessments(kind) => planning.add_assessment(*kind, text),
        }
    }

    pub fn remove(&self, planning: &mut UnitPlanning, index: usize) -> Option<String> {
        match self {
            PlanningList::Objectives => planning.remove_objective(index),
            PlanningList::Assessments(kind) => planning.remove_assessment(*kind, index),
        }
    }
}

#[component]
pub fn PlanningListSection(vm: UnitDetailsViewModel, list: PlanningList) -> impl IntoView {
    let store = vm.store;
    let planning = store.planning();
    let draft = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let add = move || {
        let text = draft.get_untracked();
        if store.update_planning(|p| list.add(p, &text)) {
            draft.set(String::new());
        }
    };

    view! {
        <UnitFormSection title=list.title()>
            <ol class="planning-list">
                {move || {
                    planning
                        .with(|p| list.items(p).to_vec())
                        .into_iter()
                        .enumerate()
                        .map(|(index, text)| {
                            view! {
                                <li class="planning-list__item">
                                    <span>{text}</span>
                                    <button
                                        class="icon-button"
                                        aria-label="Remove"
                                        on:click=move |_| {
                                            store.update_planning(|p| list.remove(p, index));
                                        }
                                    >
                                        {icon("trash")}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
            <div class="planning-list__add">
                <input
                    type="text"
                    placeholder=list.placeholder()
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add();
                        }
                    }
                />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| add()>
                    "Add"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=saving
                    on_click=move |_| vm.persist(list.scope(), saving)
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </UnitFormSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_route_to_their_planning_fields() {
        let mut planning = UnitPlanning::default();
        let formative = PlanningList::Assessments(AssessmentKind::Formative);

        assert!(PlanningList::Objectives.add(&mut planning, "Compare fractions"));
        assert!(formative.add(&mut planning, "Exit ticket"));
        assert!(!formative.add(&mut planning, "   "));

        assert_eq!(PlanningList::Objectives.items(&planning), ["Compare fractions"]);
        assert_eq!(formative.items(&planning), ["Exit ticket"]);
        assert!(PlanningList::Assessments(AssessmentKind::Summative)
            .items(&planning)
            .is_empty());

        assert_eq!(formative.remove(&mut planning, 0), Some("Exit ticket".into()));
        assert_eq!(formative.remove(&mut planning, 0), None);
    }

    #[test]
    fn titles_and_scopes() {
        let summative = PlanningList::Assessments(AssessmentKind::Summative);
        assert_eq!(summative.title(), "Summative Assessment");
        assert_eq!(summative.scope(), SaveScope::Assessments(AssessmentKind::Summative));
        assert_eq!(PlanningList::Objectives.scope(), SaveScope::Objectives);
    }
}
