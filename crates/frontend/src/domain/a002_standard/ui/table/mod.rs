//! Table of the standards attached to a unit.

use crate::domain::a001_unit::UnitStore;
use crate::shared::icons::icon;
use crate::shared::theme::stripe;
use contracts::domain::a002_standard::Standard;
use leptos::prelude::*;

pub const EMPTY_TEXT: &str = "There are no standards attached to this unit yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardRow {
    /// Position in the unit's list, used when deleting
    pub index: usize,
    /// 1-based number shown in the first column
    pub number: usize,
    pub code: String,
    pub description: String,
}

pub fn standard_rows(standards: &[Standard]) -> Vec<StandardRow> {
    standards
        .iter()
        .enumerate()
        .map(|(index, s)| StandardRow {
            index,
            number: index + 1,
            code: s.code.clone(),
            description: s.description.clone(),
        })
        .collect()
}

/// Delete only touches local state; the unit is saved by the next commit.
#[component]
pub fn StandardsTable(store: UnitStore) -> impl IntoView {
    let standards = store.standards();

    view! {
        <div class="standards-table">
            {move || {
                let rows = standards.with(|s| standard_rows(s));
                if rows.is_empty() {
                    return view! { <p class="standards-table__empty">{EMPTY_TEXT}</p> }.into_any();
                }
                view! {
                    <table>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let StandardRow { index, number, code, description } = row;
                                    let guard_code = code.clone();
                                    view! {
                                        <tr style:background-color=stripe(index)>
                                            <td class="standards-table__number">{number}</td>
                                            <td class="standards-table__code">{code}</td>
                                            <td class="standards-table__description">{description}</td>
                                            <td class="standards-table__actions">
                                                <button
                                                    class="icon-button"
                                                    aria-label="Remove standard"
                                                    on:click=move |_| {
                                                        if store.remove_standard_if(index, &guard_code).is_none() {
                                                            log::warn!("Standard {} is no longer at row {}", guard_code, number);
                                                        }
                                                    }
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_numbered_from_one() {
        let standards = vec![
            Standard::new("5.NF.1", "Add fractions with unlike denominators").unwrap(),
            Standard::new("5.NF.2", "Solve word problems").unwrap(),
        ];

        let rows = standard_rows(&standards);

        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].index, rows[0].number), (0, 1));
        assert_eq!((rows[1].index, rows[1].number), (1, 2));
        assert_eq!(rows[1].code, "5.NF.2");
        assert_eq!(rows[1].description, "Solve word problems");
    }

    #[test]
    fn no_standards_no_rows() {
        assert!(standard_rows(&[]).is_empty());
    }
}
