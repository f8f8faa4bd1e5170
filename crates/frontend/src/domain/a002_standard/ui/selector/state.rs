use contracts::domain::a002_standard::{Standard, StandardOption, StandardsSetId};

/// Pending selection of the multi-select.
///
/// `Idle` means nothing is pending. The first interaction with the dropdown
/// moves to `Selecting`, which may still hold zero options. Commit always
/// returns to `Idle`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting(Vec<StandardOption>),
}

impl SelectionState {
    pub fn begin(&mut self) {
        if let SelectionState::Idle = self {
            *self = SelectionState::Selecting(Vec::new());
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, SelectionState::Selecting(_))
    }

    pub fn picked(&self) -> &[StandardOption] {
        match self {
            SelectionState::Idle => &[],
            SelectionState::Selecting(picked) => picked,
        }
    }

    pub fn is_picked(&self, option: &StandardOption) -> bool {
        self.picked().iter().any(|p| p.index == option.index)
    }

    /// Adds the option at the end. Returns false if it was already picked.
    pub fn pick(&mut self, option: StandardOption) -> bool {
        self.begin();
        let SelectionState::Selecting(picked) = self else {
            return false;
        };
        if picked.iter().any(|p| p.index == option.index) {
            return false;
        }
        picked.push(option);
        true
    }

    /// Removes the option built from catalog position `index`
    pub fn unpick(&mut self, index: usize) -> Option<StandardOption> {
        let SelectionState::Selecting(picked) = self else {
            return None;
        };
        let position = picked.iter().position(|p| p.index == index)?;
        Some(picked.remove(position))
    }

    /// Backspace in an empty search box drops the last chip
    pub fn pop(&mut self) -> Option<StandardOption> {
        match self {
            SelectionState::Selecting(picked) => picked.pop(),
            SelectionState::Idle => None,
        }
    }

    /// Takes the picked options as standards, in pick order, and resets to `Idle`.
    pub fn commit(&mut self) -> Vec<Standard> {
        let picked = match std::mem::take(self) {
            SelectionState::Idle => Vec::new(),
            SelectionState::Selecting(picked) => picked,
        };
        picked.iter().map(StandardOption::to_standard).collect()
    }
}

/// Options of the catalog currently shown by the selector.
///
/// Each fetch is tagged with the set id it was issued for; a response for any
/// other set id is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    set_id: Option<StandardsSetId>,
    options: Vec<StandardOption>,
    loading: bool,
}

impl CatalogState {
    /// Starts a fetch for `set_id`. Returns the id to fetch, or `None` when the
    /// unit has no standards set yet.
    pub fn request(&mut self, set_id: Option<StandardsSetId>) -> Option<StandardsSetId> {
        let set_id = set_id?;
        if self.set_id != Some(set_id) {
            self.options.clear();
        }
        self.set_id = Some(set_id);
        self.loading = true;
        Some(set_id)
    }

    /// Applies a fetched catalog. Returns false for a stale response.
    ///
    /// Entries with a blank code or description never become options, so
    /// every pickable option converts back into a valid standard.
    pub fn apply(&mut self, set_id: StandardsSetId, catalog: &[Standard]) -> bool {
        if self.set_id != Some(set_id) {
            return false;
        }
        let accepted: Vec<Standard> = catalog
            .iter()
            .filter(|standard| match standard.validate() {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Ignoring catalog entry for set {}: {}", set_id, e);
                    false
                }
            })
            .cloned()
            .collect();
        self.options = StandardOption::options_for(&accepted);
        self.loading = false;
        true
    }

    /// A failed fetch leaves the option list empty
    pub fn fail(&mut self, set_id: StandardsSetId) -> bool {
        if self.set_id != Some(set_id) {
            return false;
        }
        self.options.clear();
        self.loading = false;
        true
    }

    pub fn set_id(&self) -> Option<StandardsSetId> {
        self.set_id
    }

    pub fn options(&self) -> &[StandardOption] {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Menu rows: catalog options not yet picked that match the search text
pub fn visible_options(
    catalog: &CatalogState,
    selection: &SelectionState,
    query: &str,
) -> Vec<StandardOption> {
    catalog
        .options()
        .iter()
        .filter(|option| !selection.is_picked(option) && option.matches(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_unit::UnitPlanning;

    fn standard(code: &str, description: &str) -> Standard {
        Standard::new(code, description).unwrap()
    }

    fn catalog() -> Vec<Standard> {
        vec![
            standard("RL.5.1", "Quote accurately from a text"),
            standard("RL.5.2", "Determine a theme of a story"),
            standard("RL.5.3", "Compare and contrast two characters"),
        ]
    }

    fn loaded(set_id: StandardsSetId) -> CatalogState {
        let mut state = CatalogState::default();
        state.request(Some(set_id));
        state.apply(set_id, &catalog());
        state
    }

    #[test]
    fn starts_idle_and_first_interaction_begins_selecting() {
        let mut selection = SelectionState::default();
        assert!(!selection.is_selecting());
        assert!(selection.picked().is_empty());

        selection.begin();
        assert!(selection.is_selecting());
        assert!(selection.picked().is_empty());
    }

    #[test]
    fn pick_keeps_order_and_ignores_repeats() {
        let options = StandardOption::options_for(&catalog());
        let mut selection = SelectionState::default();

        assert!(selection.pick(options[2].clone()));
        assert!(selection.pick(options[0].clone()));
        assert!(!selection.pick(options[2].clone()));

        let codes: Vec<_> = selection.picked().iter().map(|o| o.code()).collect();
        assert_eq!(codes, vec!["RL.5.3", "RL.5.1"]);
    }

    #[test]
    fn unpick_and_pop_remove_chips() {
        let options = StandardOption::options_for(&catalog());
        let mut selection = SelectionState::default();
        for option in &options {
            selection.pick(option.clone());
        }

        assert_eq!(selection.unpick(1).map(|o| o.value), Some("RL.5.2".to_string()));
        assert_eq!(selection.unpick(1), None);
        assert_eq!(selection.pop().map(|o| o.value), Some("RL.5.3".to_string()));
        assert_eq!(selection.picked().len(), 1);
        assert!(selection.is_selecting());
    }

    #[test]
    fn commit_returns_standards_in_pick_order_and_resets() {
        let options = StandardOption::options_for(&catalog());
        let mut selection = SelectionState::default();
        selection.pick(options[1].clone());
        selection.pick(options[0].clone());

        let committed = selection.commit();

        assert_eq!(committed, vec![catalog()[1].clone(), catalog()[0].clone()]);
        assert_eq!(selection, SelectionState::Idle);
    }

    #[test]
    fn commit_from_idle_yields_nothing() {
        let mut selection = SelectionState::Idle;
        assert!(selection.commit().is_empty());
        assert_eq!(selection, SelectionState::Idle);
    }

    #[test]
    fn committed_standards_append_after_existing_ones() {
        let mut planning = UnitPlanning::default();
        planning.set_standards(vec![standard("W.5.1", "Write opinion pieces")]);

        let options = StandardOption::options_for(&catalog());
        let mut selection = SelectionState::default();
        selection.pick(options[0].clone());

        let added = planning.set_standards(selection.commit());

        assert_eq!(added, 1);
        let codes: Vec<_> = planning.standards.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["W.5.1", "RL.5.1"]);
        assert!(selection.picked().is_empty());
    }

    #[test]
    fn catalog_options_follow_catalog_order_and_labels() {
        let state = loaded(1);
        let labels: Vec<_> = state.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "RL.5.1 - Quote accurately from a text",
                "RL.5.2 - Determine a theme of a story",
                "RL.5.3 - Compare and contrast two characters",
            ]
        );
        assert!(!state.is_loading());
    }

    #[test]
    fn commit_keeps_catalog_text_and_count() {
        let entries = vec![
            Standard {
                code: "A1".into(),
                description: " d1 ".into(),
            },
            standard("B2", "d2"),
        ];
        let mut state = CatalogState::default();
        state.request(Some(9));
        state.apply(9, &entries);

        let mut selection = SelectionState::default();
        for option in state.options() {
            selection.pick(option.clone());
        }
        let committed = selection.commit();

        assert_eq!(committed.len(), 2);
        assert_eq!(committed, entries);
    }

    #[test]
    fn blank_catalog_entries_are_not_offered() {
        let entries = vec![
            standard("A1", "d1"),
            Standard {
                code: "B2".into(),
                description: "   ".into(),
            },
        ];
        let mut state = CatalogState::default();
        state.request(Some(4));
        assert!(state.apply(4, &entries));

        let codes: Vec<_> = state.options().iter().map(|o| o.code()).collect();
        assert_eq!(codes, vec!["A1"]);
    }

    #[test]
    fn request_without_set_id_is_ignored() {
        let mut state = CatalogState::default();
        assert_eq!(state.request(None), None);
        assert_eq!(state, CatalogState::default());
    }

    #[test]
    fn stale_catalog_response_is_discarded() {
        let mut state = CatalogState::default();
        state.request(Some(1));
        state.request(Some(2));

        assert!(!state.apply(1, &catalog()));
        assert!(state.options().is_empty());
        assert!(state.is_loading());

        assert!(state.apply(2, &catalog()[..1]));
        assert_eq!(state.options().len(), 1);
        assert_eq!(state.set_id(), Some(2));
    }

    #[test]
    fn failed_fetch_leaves_options_empty() {
        let mut state = loaded(1);
        state.request(Some(3));
        assert!(!state.fail(1));
        assert!(state.fail(3));
        assert!(state.options().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn visible_options_hide_picked_and_filter_by_query() {
        let state = loaded(1);
        let mut selection = SelectionState::default();
        selection.pick(state.options()[0].clone());

        let all: Vec<_> = visible_options(&state, &selection, "")
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(all, vec!["RL.5.2", "RL.5.3"]);

        let theme: Vec<_> = visible_options(&state, &selection, "THEME")
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(theme, vec!["RL.5.2"]);

        assert!(visible_options(&state, &selection, "rl.5.1").is_empty());
    }
}
