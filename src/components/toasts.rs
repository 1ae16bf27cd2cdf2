use crate::config::FinderConfig;
use crate::search::Notice;
use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
async fn toast_delay_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
async fn toast_delay_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastStack {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        let id = self.next_id;
        self.toasts.push(Toast { id, notice });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[derive(Clone, Copy)]
pub struct ToastController {
    stack: Signal<ToastStack>,
    timeout_ms: u64,
}

impl ToastController {
    pub fn new(stack: Signal<ToastStack>, timeout_ms: u64) -> Self {
        Self { stack, timeout_ms }
    }

    /// Show `notice` and schedule its removal.
    pub fn show(&mut self, notice: Notice) {
        let id = self.stack.with_mut(|stack| stack.push(notice));
        let mut stack = self.stack;
        let timeout_ms = self.timeout_ms;
        spawn(async move {
            toast_delay_ms(timeout_ms).await;
            stack.with_mut(|stack| stack.dismiss(id));
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.stack.with_mut(|stack| stack.dismiss(id));
    }

    pub fn current(&self) -> ToastStack {
        (self.stack)()
    }
}

#[component]
pub fn ToastViewport() -> Element {
    let mut toasts = use_context::<ToastController>();
    let stack = toasts.current();

    rsx! {
        div { class: "toast-viewport", role: "status", aria_live: "polite",
            for toast in stack.toasts {
                button {
                    key: "{toast.id}",
                    class: "toast toast-destructive",
                    onclick: {
                        let id = toast.id;
                        move |_| toasts.dismiss(id)
                    },
                    p { class: "toast-title", "{toast.notice.title()}" }
                    p { class: "toast-description", "{toast.notice.description()}" }
                }
            }
        }
    }
}

pub fn use_toast_provider(config: &FinderConfig) -> ToastController {
    let stack = use_signal(ToastStack::default);
    let controller = ToastController::new(stack, config.notice_timeout_ms);
    use_context_provider(|| controller)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut stack = ToastStack::default();
        let first = stack.push(Notice::NoResults);
        let second = stack.push(Notice::Failed);

        assert!(second > first);
        assert_eq!(stack.toasts.len(), 2);
        assert_eq!(stack.toasts[1].notice, Notice::Failed);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut stack = ToastStack::default();
        let first = stack.push(Notice::NoResults);
        let second = stack.push(Notice::Failed);

        stack.dismiss(first);
        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].id, second);

        stack.dismiss(999);
        assert_eq!(stack.toasts.len(), 1);
    }
}
