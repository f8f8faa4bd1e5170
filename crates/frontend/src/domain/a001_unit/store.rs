//! Client-side state of the unit being edited.
//!
//! The unit page creates one [`UnitStore`] and hands it to its sections.
//! Readers subscribe through the signal accessors; writers go through the
//! mutation methods, which never touch the network.

use contracts::domain::a001_unit::{Unit, UnitDto, UnitPlanning};
use contracts::domain::a002_standard::{Standard, StandardsSetId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UnitStore {
    unit: RwSignal<Option<Unit>>,
}

impl UnitStore {
    pub fn new() -> Self {
        Self {
            unit: RwSignal::new(None),
        }
    }

    pub fn set_unit(&self, unit: Unit) {
        self.unit.set(Some(unit));
    }

    // === Read ===

    pub fn unit(&self) -> ReadSignal<Option<Unit>> {
        self.unit.read_only()
    }

    pub fn is_loaded(&self) -> bool {
        self.unit.with(Option::is_some)
    }

    pub fn standards(&self) -> Signal<Vec<Standard>> {
        let unit = self.unit;
        Signal::derive(move || {
            unit.with(|u| u.as_ref().map(|u| u.planning.standards.clone()).unwrap_or_default())
        })
    }

    pub fn planning(&self) -> Signal<UnitPlanning> {
        let unit = self.unit;
        Signal::derive(move || unit.with(|u| u.as_ref().map(|u| u.planning.clone()).unwrap_or_default()))
    }

    pub fn set_id(&self) -> Signal<Option<StandardsSetId>> {
        let unit = self.unit;
        Signal::derive(move || unit.with(|u| u.as_ref().and_then(|u| u.set_id)))
    }

    /// Current unit as a request body, without subscribing
    pub fn snapshot(&self) -> Option<UnitDto> {
        self.unit.with_untracked(|u| u.as_ref().map(Unit::to_dto))
    }

    // === Write ===

    /// Appends `entries` in order after the current standards
    pub fn set_standards(&self, entries: Vec<Standard>) -> usize {
        self.update_planning(|p| p.set_standards(entries))
    }

    /// Removes the standard at `index`; out of range does nothing
    pub fn remove_standard(&self, index: usize) -> Option<Standard> {
        self.update_planning(|p| p.remove_standard(index))
    }

    /// Removes the standard at `index` only while it still has `code`
    pub fn remove_standard_if(&self, index: usize, code: &str) -> Option<Standard> {
        self.update_planning(|p| p.remove_standard_if(index, code))
    }

    /// Applies `f` to the planning of the loaded unit.
    /// Without a loaded unit nothing happens and `R::default()` is returned.
    pub fn update_planning<R: Default>(&self, f: impl FnOnce(&mut UnitPlanning) -> R) -> R {
        self.unit
            .try_update(|u| u.as_mut().map(|u| f(&mut u.planning)))
            .flatten()
            .unwrap_or_default()
    }
}

impl Default for UnitStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_unit::{UnitDto, UnitId};

    fn standard(code: &str) -> Standard {
        Standard::new(code, format!("{} description", code)).unwrap()
    }

    fn unit_with(codes: &[&str]) -> Unit {
        let mut unit = Unit::new_for_insert(&UnitDto {
            number: 1,
            title: "Stories".into(),
            subject_name: "ELA".into(),
            set_id: Some(1),
            ..Default::default()
        });
        unit.id = UnitId::new(7);
        unit.planning.standards = codes.iter().map(|c| standard(c)).collect();
        unit
    }

    fn codes(store: &UnitStore) -> Vec<String> {
        store
            .standards()
            .get_untracked()
            .into_iter()
            .map(|s| s.code)
            .collect()
    }

    #[test]
    fn mutations_without_unit_do_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let store = UnitStore::new();
            assert_eq!(store.set_standards(vec![standard("A1")]), 0);
            assert_eq!(store.remove_standard(0), None);
            assert!(store.snapshot().is_none());
        });
    }

    #[test]
    fn set_standards_appends_in_order() {
        let owner = Owner::new();
        owner.with(|| {
            let store = UnitStore::new();
            store.set_unit(unit_with(&["A1"]));

            let added = store.set_standards(vec![standard("B2"), standard("A1")]);

            assert_eq!(added, 2);
            assert_eq!(codes(&store), vec!["A1", "B2", "A1"]);
        });
    }

    #[test]
    fn remove_standard_is_positional_and_bounded() {
        let owner = Owner::new();
        owner.with(|| {
            let store = UnitStore::new();
            store.set_unit(unit_with(&["A1", "B2"]));

            assert_eq!(store.remove_standard(2), None);
            assert_eq!(codes(&store), vec!["A1", "B2"]);

            assert_eq!(store.remove_standard(0).map(|s| s.code), Some("A1".into()));
            assert_eq!(codes(&store), vec!["B2"]);
        });
    }

    #[test]
    fn remove_standard_if_checks_code() {
        let owner = Owner::new();
        owner.with(|| {
            let store = UnitStore::new();
            store.set_unit(unit_with(&["A1", "B2"]));

            assert_eq!(store.remove_standard_if(0, "B2"), None);
            assert_eq!(store.remove_standard_if(1, "B2").map(|s| s.code), Some("B2".into()));
            assert_eq!(codes(&store), vec!["A1"]);
        });
    }

    #[test]
    fn snapshot_carries_local_mutations() {
        let owner = Owner::new();
        owner.with(|| {
            let store = UnitStore::new();
            store.set_unit(unit_with(&[]));
            store.set_standards(vec![standard("C3")]);

            let dto = store.snapshot().unwrap();
            assert_eq!(dto.id, Some(UnitId::new(7)));
            assert_eq!(dto.planning.standards, vec![standard("C3")]);
            assert_eq!(store.set_id().get_untracked(), Some(1));
        });
    }
}
