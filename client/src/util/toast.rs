//! Toast driver: appends toast elements to `#toast-container` and walks them
//! through their lifecycle with a paint frame, a timer and `transitionend`.

use std::time::Duration;

use pitstop::toast::Toast;

#[cfg(feature = "csr")]
use std::cell::Cell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use pitstop::toast::{ToastEvent, ToastPhase};
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

pub const TOAST_CONTAINER_ID: &str = "toast-container";

/// Show `message` for `duration`. Fire-and-forget; returns the toast created.
pub fn show_toast(message: &str, duration: Duration) -> Toast {
    let toast = Toast::with_duration(message, duration);
    #[cfg(feature = "csr")]
    mount(&toast);
    toast
}

#[cfg(feature = "csr")]
fn mount(toast: &Toast) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(doc) = window.document() else {
        return;
    };
    let Some(container) = doc.get_element_by_id(TOAST_CONTAINER_ID) else {
        log::warn!("#{TOAST_CONTAINER_ID} missing; toast dropped: {}", toast.message);
        return;
    };
    let el = match doc.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("toast element not created: {e:?}");
            return;
        }
    };
    el.set_id(&toast.element_id());
    el.set_text_content(Some(&toast.message));

    let phase = Rc::new(Cell::new(ToastPhase::Mounted));
    el.set_class_name(&phase.get().class_name());
    if let Err(e) = container.append_child(&el) {
        log::warn!("toast not attached: {e:?}");
        return;
    }

    // Entrance: add `show` on the next frame so the CSS transition runs.
    let enter = {
        let el = el.clone();
        let phase = Rc::clone(&phase);
        Closure::once_into_js(move || advance(&el, &phase, ToastEvent::NextFrame))
    };
    if window.request_animation_frame(enter.unchecked_ref()).is_err() {
        advance(&el, &phase, ToastEvent::NextFrame);
    }

    // Exit: drop `show`, then detach once the transition finishes.
    let millis = u32::try_from(toast.duration.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || {
        advance(&el, &phase, ToastEvent::DurationElapsed);
        if phase.get() == ToastPhase::Detached {
            return;
        }
        let detach = {
            let el = el.clone();
            let phase = Rc::clone(&phase);
            Closure::once_into_js(move || advance(&el, &phase, ToastEvent::TransitionEnd))
        };
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_once(true);
        if let Err(e) = el.add_event_listener_with_callback_and_add_event_listener_options(
            "transitionend",
            detach.unchecked_ref(),
            &opts,
        ) {
            log::warn!("toast exit listener not attached: {e:?}");
            advance(&el, &phase, ToastEvent::TransitionEnd);
        }
    })
    .forget();
}

#[cfg(feature = "csr")]
fn advance(el: &web_sys::Element, phase: &Cell<ToastPhase>, event: ToastEvent) {
    let next = phase.get().on(event);
    if next == phase.get() {
        return;
    }
    phase.set(next);
    if next == ToastPhase::Detached {
        el.remove();
    } else {
        el.set_class_name(&next.class_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_toast_returns_the_toast_created() {
        let toast = show_toast("Saved", Duration::from_millis(1500));
        assert_eq!(toast.message, "Saved");
        assert_eq!(toast.duration, Duration::from_millis(1500));
    }
}
