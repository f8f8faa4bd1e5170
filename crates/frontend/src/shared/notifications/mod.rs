//! Transient success messages ("toasts").
//!
//! Usage:
//! ```rust,ignore
//! let notifications = use_context::<NotificationService>().expect("NotificationService not provided in context");
//! notifications.success(format!("Unit {} standards has been updated.", number));
//! ```

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a message stays on screen
pub const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub text: String,
}

/// Ordered list of visible messages with monotonically increasing ids.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            text: text.into(),
        });
        id
    }

    /// Returns false when the message was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Context service, provided once by `App`.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    /// Shows `text` and removes it again after [`DISMISS_AFTER_MS`]
    pub fn success(&self, text: impl Into<String>) {
        let text = text.into();
        log::info!("notification: {}", text);
        let mut id = 0;
        self.queue.update(|q| id = q.push(text));

        let queue = self.queue;
        Timeout::new(DISMISS_AFTER_MS, move || {
            // The owner may be gone if the app was unmounted meanwhile
            let _ = queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    /// Messages currently on screen, oldest first (tracked)
    pub fn messages(&self) -> Vec<Notification> {
        self.queue.with(|q| q.items().to_vec())
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed stack of toasts in the bottom-right corner.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_context::<NotificationService>()
        .expect("NotificationService not provided in context");

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || service.messages()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class="toast toast--success">
                            <span class="toast__text">{n.text}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| service.dismiss(id)
                            >
                                {crate::shared::icons::icon("close")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut q = NotificationQueue::default();
        let a = q.push("first");
        let b = q.push("second");
        assert!(b > a);
        assert_eq!(q.items().len(), 2);
        assert_eq!(q.items()[0].text, "first");
    }

    #[test]
    fn dismiss_removes_only_matching_message() {
        let mut q = NotificationQueue::default();
        let a = q.push("first");
        let b = q.push("second");

        assert!(q.dismiss(a));
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);

        assert!(!q.dismiss(a));
        assert!(q.dismiss(b));
        assert!(q.is_empty());
    }
}
