//! Toast Notifications
//!
//! Transient messages stacked in the bottom-right corner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Ordered list of visible toasts with monotonically increasing ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn push(&mut self, title: String, description: String, variant: ToastVariant) -> u32 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            title,
            description,
            variant,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle to the toast queue, provided through `AppContext`
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    lifetime_ms: u32,
}

impl Toaster {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            lifetime_ms,
        }
    }

    pub fn push(&self, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) {
        let id = self
            .queue
            .try_update(|q| q.push(title.into(), description.into(), variant))
            .unwrap_or_default();

        let queue = self.queue;
        let lifetime = self.lifetime_ms;
        spawn_local(async move {
            TimeoutFuture::new(lifetime).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title, description, ToastVariant::Default);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title, description, ToastVariant::Destructive);
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

/// Renders the active toasts
#[component]
pub fn ToastViewport(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-viewport">
            <For
                each=move || toaster.toasts()
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let class = match t.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <div class="toast-title">{t.title}</div>
                                <div class="toast-description">{t.description}</div>
                            </div>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>"×"</button>
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
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push("A".into(), "first".into(), ToastVariant::Default);
        let b = queue.push("B".into(), "second".into(), ToastVariant::Destructive);
        assert_ne!(a, b);
        assert_eq!(queue.toasts().len(), 2);

        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "B");

        // dismissing twice is harmless
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push("A".into(), String::new(), ToastVariant::Default);
        queue.dismiss(a);
        let b = queue.push("B".into(), String::new(), ToastVariant::Default);
        assert!(b > a);
    }
}
