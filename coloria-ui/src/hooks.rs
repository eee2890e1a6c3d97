//! Browser-driven hooks for the library view

use crate::wasm_utils::{keyboard_key, sleep_ms, viewport_width, WindowEventListener};
use coloria_common::{DebounceTicket, Debouncer, ViewerCommand};
use dioxus::core::Task;
use dioxus::prelude::*;
use std::rc::Rc;

/// Wait out the quiet period, then hand `ticket` to `fire`. A ticket that
/// was superseded meanwhile yields `None`.
async fn settle<T>(
    delay_ms: u64,
    ticket: DebounceTicket,
    fire: impl FnOnce(DebounceTicket) -> Option<T>,
) -> Option<T> {
    sleep_ms(delay_ms).await;
    fire(ticket)
}

/// Mirror `value` into the returned signal once it has been still for
/// `delay_ms`. Intermediate values in a burst are never emitted.
pub fn use_debounced(value: Signal<String>, delay_ms: u64) -> Signal<String> {
    let mut debounced = use_signal(|| value.peek().clone());
    let mut debouncer = use_signal(Debouncer::<String>::new);
    let mut timer: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let next = value();
        if next == *debounced.peek() && !debouncer.peek().is_pending() {
            return;
        }
        let ticket = debouncer.write().push(next);
        if let Some(task) = timer.take() {
            task.cancel();
        }
        let task = spawn(async move {
            let fired = settle(delay_ms, ticket, |t| debouncer.write().fire(t)).await;
            if let Some(settled) = fired {
                if *debounced.peek() != settled {
                    debounced.set(settled);
                }
            }
        });
        timer.set(Some(task));
    });

    debounced
}

/// Window inner width, updated on resize.
pub fn use_viewport_width() -> Signal<u32> {
    let mut width = use_signal(viewport_width);
    use_hook(move || {
        Rc::new(WindowEventListener::new("resize", move |_| {
            let next = viewport_width();
            if *width.peek() != next {
                width.set(next);
            }
        }))
    });
    width
}

/// Forward viewer key presses (Escape, ArrowLeft, ArrowRight) to `on_command`
/// while `is_open` reads true. Closed, the keys keep their default behavior.
pub fn use_viewer_keys(is_open: ReadSignal<bool>, on_command: EventHandler<ViewerCommand>) {
    use_hook(move || {
        Rc::new(WindowEventListener::new("keydown", move |event| {
            let open = *is_open.peek();
            if let Some(command) = keyboard_key(&event).and_then(|k| ViewerCommand::bound(&k, open)) {
                event.prevent_default();
                on_command.call(command);
            }
        }))
    });
}
