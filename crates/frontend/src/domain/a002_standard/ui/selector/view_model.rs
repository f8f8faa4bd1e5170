use super::state::{visible_options, CatalogState, SelectionState};
use crate::domain::a001_unit::ui::details::{
    save_via_api, SaveCompletion, SaveScope, UnitDetailsViewModel,
};
use crate::domain::a001_unit::UnitStore;
use crate::domain::a002_standard::api;
use contracts::domain::a001_unit::{UnitDto, UnitId};
use contracts::domain::a002_standard::{StandardOption, StandardsSetId};
use leptos::prelude::*;

pub const PLACEHOLDER: &str = "Search standards by code or description...";

#[derive(Clone, Copy)]
pub struct StandardsSelectorViewModel {
    store: UnitStore,
    pub catalog: RwSignal<CatalogState>,
    pub selection: RwSignal<SelectionState>,
    pub query: RwSignal<String>,
    pub menu_open: RwSignal<bool>,
    /// Position of the highlighted row within the visible options
    pub focused: RwSignal<Option<usize>>,
    pub saving: RwSignal<bool>,
}

impl StandardsSelectorViewModel {
    pub fn new(store: UnitStore) -> Self {
        Self {
            store,
            catalog: RwSignal::new(CatalogState::default()),
            selection: RwSignal::new(SelectionState::default()),
            query: RwSignal::new(String::new()),
            menu_open: RwSignal::new(false),
            focused: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Fetches the option list for `set_id`; does nothing without one
    pub fn load_catalog(&self, set_id: Option<StandardsSetId>) {
        let Some(set_id) = self.catalog.try_update(|c| c.request(set_id)).flatten() else {
            return;
        };
        let catalog = self.catalog;

        leptos::task::spawn_local(async move {
            match api::fetch_standards_by_set_id(set_id).await {
                Ok(standards) => {
                    let applied = catalog
                        .try_update(|c| c.apply(set_id, &standards))
                        .unwrap_or(false);
                    if applied {
                        log::debug!("Loaded {} standards for set {}", standards.len(), set_id);
                    } else {
                        log::debug!("Dropped stale catalog for set {}", set_id);
                    }
                }
                Err(e) => {
                    log::error!("Failed to load standards for set {}: {}", set_id, e);
                    let _ = catalog.try_update(|c| c.fail(set_id));
                }
            }
        });
    }

    /// Options to render in the menu (tracked)
    pub fn visible(&self) -> Vec<StandardOption> {
        let query = self.query.get();
        let selection = self.selection;
        self.catalog
            .with(|catalog| selection.with(|s| visible_options(catalog, s, &query)))
    }

    pub fn open_menu(&self) {
        if !self.selection.with_untracked(SelectionState::is_selecting) {
            self.selection.update(SelectionState::begin);
        }
        self.menu_open.set(true);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
        self.focused.set(None);
    }

    pub fn set_query(&self, query: String) {
        self.query.set(query);
        self.focused.set(Some(0));
        self.open_menu();
    }

    /// Menu stays open after a pick so several standards can be chosen in a row
    pub fn pick(&self, option: StandardOption) {
        self.selection.update(|s| {
            s.pick(option);
        });
        self.query.set(String::new());
    }

    pub fn unpick(&self, index: usize) {
        self.selection.update(|s| {
            s.unpick(index);
        });
    }

    /// Backspace on an empty search box
    pub fn remove_last(&self) {
        if self.query.with_untracked(String::is_empty) {
            self.selection.update(|s| {
                s.pop();
            });
        }
    }

    pub fn move_focus(&self, delta: isize) {
        let count = self.visible_untracked().len();
        self.open_menu();
        self.focused
            .update(|focused| *focused = step_focus(*focused, delta, count));
    }

    pub fn pick_focused(&self) {
        let Some(position) = self.focused.get_untracked() else {
            return;
        };
        if let Some(option) = self.visible_untracked().into_iter().nth(position) {
            self.pick(option);
        }
    }

    /// Appends the picked standards to the unit, clears the selection and
    /// saves the unit. The commit button is disabled through `saving` until
    /// that save answers, so commits do not overlap.
    pub fn commit(&self, details: UnitDetailsViewModel) {
        self.commit_with(details, save_via_api);
    }

    pub fn commit_with<S>(&self, details: UnitDetailsViewModel, save: S)
    where
        S: FnOnce(UnitId, UnitDto, SaveCompletion),
    {
        let entries = self
            .selection
            .try_update(SelectionState::commit)
            .unwrap_or_default();
        let added = self.store.set_standards(entries);
        log::info!("Committing {} standards", added);

        self.query.set(String::new());
        self.close_menu();
        details.persist_with(SaveScope::Standards, self.saving, save);
    }

    fn visible_untracked(&self) -> Vec<StandardOption> {
        let query = self.query.get_untracked();
        let selection = self.selection;
        self.catalog
            .with_untracked(|catalog| selection.with_untracked(|s| visible_options(catalog, s, &query)))
    }
}

/// Keyboard focus wraps around the visible rows
fn step_focus(current: Option<usize>, delta: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let count = count as isize;
    let next = match current {
        None if delta >= 0 => 0,
        None => count - 1,
        Some(position) => (position as isize + delta).rem_euclid(count),
    };
    Some(next as usize)
}
