//! Pointer input handling

/// Pointer Y relative to the arena's top edge
///
/// `client_y` is the event's viewport coordinate, `top` the canvas's
/// bounding-rect top in the same space.
pub fn relative_y(client_y: f64, top: f64) -> f32 {
    (client_y - top) as f32
}

#[cfg(target_arch = "wasm32")]
pub use listener::PointerListener;

#[cfg(target_arch = "wasm32")]
mod listener {
    use super::relative_y;
    use game_core::PointerSignal;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    /// `mousemove` listener feeding a [`PointerSignal`]; detached on drop
    pub struct PointerListener {
        canvas: HtmlCanvasElement,
        callback: Closure<dyn FnMut(MouseEvent)>,
    }

    impl PointerListener {
        pub fn attach(
            canvas: &HtmlCanvasElement,
            signal: Rc<PointerSignal>,
        ) -> Result<Self, JsValue> {
            let target = canvas.clone();
            let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let rect = target.get_bounding_client_rect();
                signal.write(relative_y(event.client_y() as f64, rect.top()));
            });

            canvas
                .add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())?;

            Ok(Self {
                canvas: canvas.clone(),
                callback,
            })
        }
    }

    impl Drop for PointerListener {
        fn drop(&mut self) {
            let callback: &js_sys::Function = self.callback.as_ref().unchecked_ref();
            if let Err(e) = self
                .canvas
                .remove_event_listener_with_callback("mousemove", callback)
            {
                log::warn!("Failed to detach pointer listener: {:?}", e);
            }
        }
    }
}
