//! Inline form that creates a unit from a dashboard column.

use crate::domain::a001_unit::api;
use contracts::domain::a001_unit::{Unit, UnitDto, UnitId};
use contracts::domain::a002_standard::{StandardsSet, StandardsSetId};
use contracts::enums::Subject;
use leptos::prelude::*;
use thaw::*;

/// Validates the form fields and builds the create request
pub fn draft_unit(
    subject: Subject,
    number: &str,
    title: &str,
    set_id: Option<StandardsSetId>,
) -> Result<UnitDto, String> {
    let number: i32 = number
        .trim()
        .parse()
        .map_err(|_| "Unit number must be a whole number.".to_string())?;

    let dto = UnitDto {
        id: None,
        number,
        title: title.to_string(),
        subject_name: subject.display_name().to_string(),
        set_id,
        ..Default::default()
    };
    Unit::new_for_insert(&dto)
        .validate()
        .map_err(|e| e.to_string())?;
    Ok(dto)
}

#[component]
pub fn UnitCard(
    subject: Subject,
    #[prop(into)] sets: Signal<Vec<StandardsSet>>,
    #[prop(into)] next_number: Signal<i32>,
    on_created: Callback<UnitId>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let number = RwSignal::new(next_number.get_untracked().to_string());
    let title = RwSignal::new(String::new());
    let set_id = RwSignal::new(None::<StandardsSetId>);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Sets that belong to this subject
    let subject_sets = Signal::derive(move || {
        sets.get()
            .into_iter()
            .filter(|s| Subject::from_display_name(&s.subject_name) == Some(subject))
            .collect::<Vec<_>>()
    });

    // Preselect the first matching set
    Effect::new(move |_| {
        if set_id.get_untracked().is_none() {
            if let Some(first) = subject_sets.get().first() {
                set_id.set(Some(first.id));
            }
        }
    });

    let submit = move |_| {
        let dto = match draft_unit(
            subject,
            &number.get_untracked(),
            &title.get_untracked(),
            set_id.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };

        error.set(None);
        saving.set(true);
        leptos::task::spawn_local(async move {
            match api::create_unit(&dto).await {
                Ok(id) => {
                    log::info!("Created {} unit {} (id {})", dto.subject_name, dto.number, id);
                    saving.set(false);
                    on_created.run(id);
                }
                Err(e) => {
                    log::error!("Failed to create unit: {}", e);
                    error.set(Some(e));
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="unit-card unit-card--form">
            <div class="unit-card__row">
                <label class="unit-card__label">"Number"</label>
                <input
                    type="number"
                    min="1"
                    class="unit-card__number"
                    prop:value=move || number.get()
                    on:input=move |ev| number.set(event_target_value(&ev))
                />
            </div>
            <div class="unit-card__row">
                <label class="unit-card__label">"Title"</label>
                <input
                    type="text"
                    placeholder="Unit title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </div>
            <div class="unit-card__row">
                <label class="unit-card__label">"Standards set"</label>
                <select on:change=move |ev| {
                    set_id.set(event_target_value(&ev).parse::<StandardsSetId>().ok());
                }>
                    <option value="" selected=move || set_id.get().is_none()>"None"</option>
                    {move || {
                        subject_sets
                            .get()
                            .into_iter()
                            .map(|s| {
                                let id = s.id;
                                view! {
                                    <option value=id.to_string() selected=move || set_id.get() == Some(id)>
                                        {s.name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            {move || error.get().map(|e| view! { <p class="unit-card__error">{e}</p> })}

            <div class="unit-card__actions">
                <Button appearance=ButtonAppearance::Primary disabled=saving on_click=submit>
                    {move || if saving.get() { "Creating..." } else { "Create Unit" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_uses_subject_display_name() {
        let dto = draft_unit(Subject::SocialStudies, " 2 ", "Colonial America", Some(4)).unwrap();
        assert_eq!(dto.number, 2);
        assert_eq!(dto.subject_name, "Social Studies");
        assert_eq!(dto.set_id, Some(4));
        assert!(dto.id.is_none());
        assert!(dto.planning.standards.is_empty());
    }

    #[test]
    fn draft_rejects_bad_number_and_missing_title() {
        assert!(draft_unit(Subject::Math, "two", "Fractions", None).is_err());
        assert!(draft_unit(Subject::Math, "0", "Fractions", None).is_err());
        assert!(draft_unit(Subject::Math, "1", "   ", None).is_err());
    }
}
