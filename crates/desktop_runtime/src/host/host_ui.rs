#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    context_menu::TriggerSnapshot,
    model::{Viewport, WindowId},
};

pub(super) fn focus_window_input(window_id: &WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(&window_primary_input_dom_id(window_id))
        else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

pub(super) fn viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        let fallback = Viewport::default();
        let Some(window) = web_sys::window() else {
            return fallback;
        };
        let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, default: i32| {
            value
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(default)
        };
        Viewport {
            width: read(window.inner_width(), fallback.width),
            height: read(window.inner_height(), fallback.height),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Viewport::default()
    }
}

pub(super) fn vibrate(duration_ms: u32) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| window.navigator().vibrate_with_duration(duration_ms))
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = duration_ms;
        false
    }
}

pub(super) fn inspect_trigger(element: &web_sys::Element) -> TriggerSnapshot {
    #[cfg(target_arch = "wasm32")]
    {
        let rect = element.get_bounding_client_rect();
        let (width, height) = (rect.width(), rect.height());
        let center_x = rect.left() + width / 2.0;
        let center_y = rect.top() + height / 2.0;
        let topmost = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.element_from_point(center_x as f32, center_y as f32));
        TriggerSnapshot {
            width,
            height,
            center_hits_self_or_descendant: topmost.map_or(true, |top| {
                let top: &web_sys::Node = top.as_ref();
                element.contains(Some(top))
            }),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element;
        TriggerSnapshot::visible()
    }
}
