//! On-screen container for transient toasts.

use std::time::Duration;

use dioxus::prelude::*;
use postboard_core::toast::ActiveToast;
use postboard_core::{ToastLevel, ToastPosition};

use crate::state::use_toasts;

/// Renders active toasts grouped by screen position.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let groups: Vec<(ToastPosition, Vec<ActiveToast>)> = {
        let queue = toasts.read();
        ToastPosition::ALL
            .into_iter()
            .map(|position| (position, queue.at(position).cloned().collect::<Vec<_>>()))
            .filter(|(_, active)| !active.is_empty())
            .collect()
    };

    rsx! {
        for (position, active) in groups {
            div {
                key: "{position.css_class()}",
                class: "toast-container {position.css_class()}",
                for toast in active {
                    ToastItem {
                        key: "{toast.id}",
                        id: toast.id,
                        level: toast.toast.level,
                        message: toast.toast.message,
                        auto_close: toast.toast.options.auto_close,
                    }
                }
            }
        }
    }
}

/// A single toast. Dismisses itself after `auto_close`, or early on click.
///
/// The timer belongs to this component, so it keeps running after the
/// component that emitted the toast unmounts.
#[component]
fn ToastItem(id: u64, level: ToastLevel, message: String, auto_close: Duration) -> Element {
    let mut toasts = use_toasts();

    use_future(move || async move {
        tokio::time::sleep(auto_close).await;
        toasts.write().dismiss(id);
    });

    rsx! {
        div {
            class: "toast {level.css_class()}",
            role: "status",
            onclick: move |_| {
                toasts.write().dismiss(id);
            },
            "{message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use dioxus::prelude::*;
    use postboard_core::{Toast, ToastOptions, ToastQueue, Toaster};

    use super::*;
    use crate::state::SignalToaster;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        queue: ToastQueue,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let queue = props.queue.clone();
        use_context_provider(move || Signal::new(queue));

        rsx! { ToastHost {} }
    }

    fn render(queue: ToastQueue) -> String {
        let mut vdom = VirtualDom::new_with_props(Harness, HarnessProps { queue });
        vdom.rebuild_in_place();
        dioxus_ssr::render(&vdom)
    }

    #[test]
    fn test_empty_queue_renders_no_containers() {
        let html = render(ToastQueue::new());
        assert!(!html.contains("toast-container"));
    }

    #[test]
    fn test_toasts_grouped_by_position() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::new(
            ToastLevel::Success,
            "Logged in successfully!",
            ToastOptions::default(),
        ));
        queue.push(Toast::new(
            ToastLevel::Info,
            "Logged out successfully",
            ToastOptions {
                position: ToastPosition::BottomLeft,
                ..ToastOptions::default()
            },
        ));

        let html = render(queue);
        assert!(html.contains("toast-container top-right"));
        assert!(html.contains("toast-container bottom-left"));
        assert!(html.contains("toast success"));
        assert!(html.contains("Logged in successfully!"));
        assert!(html.contains("toast info"));
    }

    /// Queue lengths observed on every render of the host harness.
    #[derive(Clone, Default)]
    struct QueueLengths(Arc<Mutex<Vec<usize>>>);

    impl QueueLengths {
        fn snapshot(&self) -> Vec<usize> {
            self.0.lock().unwrap().clone()
        }
    }

    #[component]
    fn EmitterHost() -> Element {
        let queue = use_context_provider(|| Signal::new(ToastQueue::new()));
        let show_emitter = use_signal(|| true);
        let lengths = use_context::<QueueLengths>();
        lengths.0.lock().unwrap().push(queue.read().len());

        rsx! {
            if show_emitter() {
                Emitter { show: show_emitter }
            }
            ToastHost {}
        }
    }

    /// Shows a short-lived toast, then unmounts itself, like the login form.
    #[component]
    fn Emitter(show: Signal<bool>) -> Element {
        let queue = use_toasts();

        use_effect(move || {
            let options = ToastOptions {
                auto_close: Duration::from_millis(20),
                ..ToastOptions::default()
            };
            SignalToaster::new(queue).notify_success("Logged in successfully!", options);

            let mut show = show;
            show.set(false);
        });

        rsx! { span { "emitter" } }
    }

    #[tokio::test]
    async fn test_toast_auto_closes_after_emitter_unmounts() {
        let lengths = QueueLengths::default();
        let mut vdom = VirtualDom::new(EmitterHost).with_root_context(lengths.clone());
        vdom.rebuild_in_place();

        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while tokio::time::Instant::now() < deadline {
            tokio::select! {
                _ = vdom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(10)) => {}
            }
            let _ = vdom.render_immediate_to_vec();

            let seen = lengths.snapshot();
            if seen.contains(&1) && seen.last() == Some(&0) {
                break;
            }
        }

        let seen = lengths.snapshot();
        assert!(seen.contains(&1), "toast was never shown: {seen:?}");
        assert_eq!(seen.last(), Some(&0), "toast never auto-closed: {seen:?}");
    }
}
