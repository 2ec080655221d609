//! Thin wrappers over the browser APIs the runner needs.

use std::cell::RefCell;
use std::rc::Rc;

use orrery_engine::StopHandle;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `location.search` of the current page, or empty outside a window.
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Full-page navigation, replacing the current document.
pub fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window, cannot navigate to {}", url);
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::warn!("navigation to {} failed: {:?}", url, e);
    }
}

/// Inner size of the window in CSS pixels.
pub fn window_size() -> Option<(f32, f32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

/// Seed derived from the wall clock.
pub fn time_seed() -> u64 {
    js_sys::Date::now() as u64
}

fn request_animation_frame(callback: &Closure<dyn FnMut(f64)>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

/// Run `step` on every display refresh until the returned handle is stopped.
///
/// The callback re-posts itself after each step. Once stopped it drops its own
/// closure so nothing stays scheduled.
pub fn start_animation_loop(mut step: impl FnMut(f64) + 'static) -> StopHandle {
    let stop = StopHandle::new();
    let handle = stop.clone();

    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let inner = slot.clone();

    *slot.borrow_mut() = Some(Closure::new(move |time_ms: f64| {
        if handle.is_stopped() {
            let _ = inner.borrow_mut().take();
            return;
        }
        step(time_ms);
        if let Some(callback) = inner.borrow().as_ref() {
            request_animation_frame(callback);
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_animation_frame(callback);
    }
    stop
}
