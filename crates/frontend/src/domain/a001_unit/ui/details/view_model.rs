//! ViewModel for the unit page.
//!
//! Owns the [`UnitStore`] for the page. Sections mutate the store locally and
//! call [`UnitDetailsViewModel::persist`] to write the whole unit back.

use crate::domain::a001_unit::{api, UnitStore};
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_unit::{AssessmentKind, UnitDto, UnitId};
use leptos::prelude::*;

/// Which section asked for the save; only affects the success message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveScope {
    Dates,
    Objectives,
    Standards,
    Assessments(AssessmentKind),
}

impl SaveScope {
    pub fn success_message(&self, unit_number: i32) -> String {
        match self {
            SaveScope::Dates => format!("Unit {} dates have been updated.", unit_number),
            SaveScope::Objectives => format!("Unit {} objectives have been updated.", unit_number),
            SaveScope::Standards => format!("Unit {} standards has been updated.", unit_number),
            SaveScope::Assessments(kind) => format!(
                "Unit {} {} has been updated.",
                unit_number,
                kind.title().to_lowercase()
            ),
        }
    }
}

/// Message to show after a save attempt. Failures are never shown.
pub fn save_outcome_message(
    scope: SaveScope,
    unit_number: i32,
    result: &Result<(), String>,
) -> Option<String> {
    result.as_ref().ok().map(|_| scope.success_message(unit_number))
}

/// Called once with the server's answer to a save
pub type SaveCompletion = Box<dyn FnOnce(Result<(), String>)>;

/// Sends the unit with `api::save_unit` and reports back on completion
pub fn save_via_api(id: UnitId, dto: UnitDto, done: SaveCompletion) {
    leptos::task::spawn_local(async move {
        let result = api::save_unit(id, &dto).await;
        done(result);
    });
}

#[derive(Clone, Copy)]
pub struct UnitDetailsViewModel {
    pub store: UnitStore,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    notifications: Option<NotificationService>,
}

impl UnitDetailsViewModel {
    pub fn new() -> Self {
        Self {
            store: UnitStore::new(),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            notifications: use_context::<NotificationService>(),
        }
    }

    /// Load unit by ID
    pub fn load(&self, id: UnitId) {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match api::fetch_unit(id).await {
                Ok(unit) => {
                    log::debug!("Loaded unit {} ({} standards)", unit.id, unit.planning.standards.len());
                    this.store.set_unit(unit);
                    this.loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load unit {}: {}", id, e);
                    this.error.set(Some(e));
                    this.loading.set(false);
                }
            }
        });
    }

    /// Writes the current unit back to the server.
    ///
    /// `saving` is the caller's loading flag: set while the request is in
    /// flight and cleared whatever the outcome. Success shows a notification;
    /// failure is only logged and local changes are kept.
    pub fn persist(&self, scope: SaveScope, saving: RwSignal<bool>) {
        self.persist_with(scope, saving, save_via_api);
    }

    /// [`persist`](Self::persist) with the transport supplied by the caller
    pub fn persist_with<S>(&self, scope: SaveScope, saving: RwSignal<bool>, save: S)
    where
        S: FnOnce(UnitId, UnitDto, SaveCompletion),
    {
        let Some(dto) = self.store.snapshot() else {
            log::warn!("Nothing to save: unit is not loaded");
            return;
        };
        let Some(id) = dto.id else {
            log::warn!("Nothing to save: unit has no id");
            return;
        };
        let notifications = self.notifications;
        let number = dto.number;

        saving.set(true);
        save(
            id,
            dto,
            Box::new(move |result| {
                saving.set(false);

                if let Err(e) = &result {
                    log::error!("Failed to save unit {}: {}", id, e);
                }
                if let Some(message) = save_outcome_message(scope, number, &result) {
                    match notifications {
                        Some(service) => service.success(message),
                        None => log::info!("{}", message),
                    }
                }
            }),
        );
    }
}

impl Default for UnitDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standards_success_message() {
        assert_eq!(
            SaveScope::Standards.success_message(4),
            "Unit 4 standards has been updated."
        );
    }

    #[test]
    fn assessment_messages_name_the_kind() {
        assert_eq!(
            SaveScope::Assessments(AssessmentKind::Summative).success_message(2),
            "Unit 2 summative assessment has been updated."
        );
    }

    #[test]
    fn rejected_save_shows_nothing() {
        let failed: Result<(), String> = Err("HTTP error: 500".into());
        assert_eq!(save_outcome_message(SaveScope::Standards, 1, &failed), None);

        let ok: Result<(), String> = Ok(());
        assert_eq!(
            save_outcome_message(SaveScope::Standards, 1, &ok),
            Some("Unit 1 standards has been updated.".to_string())
        );
    }
}
