use super::UnitFormSection;
use crate::domain::a001_unit::ui::details::{SaveScope, UnitDetailsViewModel};
use chrono::NaiveDate;
use contracts::domain::a001_unit::UnitPlanning;
use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Value of an `<input type="date">`; empty or malformed clears the date
fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
enum DateField {
    Start,
    End,
}

/// Writes one date; false when it would put the end before the start
fn set_date(planning: &mut UnitPlanning, field: DateField, date: Option<NaiveDate>) -> bool {
    match field {
        DateField::Start => planning.set_start_date(date),
        DateField::End => planning.set_end_date(date),
    }
}

#[component]
pub fn DatesSection(vm: UnitDetailsViewModel) -> impl IntoView {
    let store = vm.store;
    let planning = store.planning();
    let saving = RwSignal::new(false);
    let rejected = RwSignal::new(false);
    // only reachable for units stored before edits were checked
    let inverted = Signal::derive(move || planning.with(|p| p.has_inverted_dates()));

    let on_change = move |field: DateField, ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let date = parse_date_input(&input.value());
        let accepted = store.update_planning(|p| set_date(p, field, date));
        rejected.set(!accepted);
        if !accepted {
            let current = planning.with_untracked(|p| match field {
                DateField::Start => p.start_date,
                DateField::End => p.end_date,
            });
            input.set_value(&format_date_input(current));
        }
    };

    view! {
        <UnitFormSection title="Dates">
            <div class="unit-dates">
                <label class="unit-dates__field">
                    <span>"Start date"</span>
                    <input
                        type="date"
                        prop:value=move || format_date_input(planning.with(|p| p.start_date))
                        on:change=move |ev| on_change(DateField::Start, ev)
                    />
                </label>
                <label class="unit-dates__field">
                    <span>"End date"</span>
                    <input
                        type="date"
                        prop:value=move || format_date_input(planning.with(|p| p.end_date))
                        on:change=move |ev| on_change(DateField::End, ev)
                    />
                </label>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get() || inverted.get())
                    on_click=move |_| vm.persist(SaveScope::Dates, saving)
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
            <Show when=move || rejected.get() || inverted.get()>
                <p class="unit-dates__warning">"End date cannot be before start date."</p>
            </Show>
        </UnitFormSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_input_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 3);
        assert_eq!(parse_date_input("2024-09-03"), date);
        assert_eq!(format_date_input(date), "2024-09-03");
    }

    #[test]
    fn empty_or_malformed_input_clears_date() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("09/03/2024"), None);
        assert_eq!(format_date_input(None), "");
    }

    #[test]
    fn inverted_edit_leaves_planning_unchanged() {
        let mut planning = UnitPlanning::default();
        assert!(set_date(&mut planning, DateField::Start, parse_date_input("2024-10-01")));
        assert!(!set_date(&mut planning, DateField::End, parse_date_input("2024-09-01")));
        assert_eq!(planning.end_date, None);
        assert!(!planning.has_inverted_dates());
        assert!(set_date(&mut planning, DateField::End, parse_date_input("2024-10-20")));
    }
}
