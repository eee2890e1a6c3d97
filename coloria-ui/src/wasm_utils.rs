//! Browser interop helpers
//!
//! Listeners attached through `WindowEventListener` are removed when the
//! value is dropped. Keep it in hook storage so its lifetime matches the
//! component that created it.

use coloria_common::DEFAULT_VIEWPORT_WIDTH;
use tracing::warn;
use wasm_bindgen::prelude::*;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowEventListener {
    /// Attach `callback` to `event_name` on the global window.
    ///
    /// Returns `None` outside a browser.
    pub fn new(
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));
        if let Err(e) =
            window.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        {
            warn!("Could not listen for {} events: {:?}", event_name, e);
            return None;
        }
        Some(Self {
            window,
            event_name,
            callback,
        })
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// `KeyboardEvent.key` of a DOM event, if it is a keyboard event.
pub fn keyboard_key(event: &web_sys::Event) -> Option<String> {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .map(|e| e.key())
}

/// Current `window.innerWidth` in CSS pixels.
pub fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
