//! Browser host for the Pong game
//!
//! Canvas 2D rendering and mouse input around `game_core`. Everything that
//! touches the DOM only builds for wasm32; the rest is plain Rust.

pub mod fsm;
pub mod input;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod driver;
#[cfg(target_arch = "wasm32")]
mod logger;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use crate::driver::FrameLoop;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    /// Running game, handed to JavaScript
    #[wasm_bindgen]
    pub struct GameHandle {
        frame_loop: FrameLoop,
    }

    #[wasm_bindgen]
    impl GameHandle {
        /// Stop the frame loop and detach input
        pub fn stop(&self) {
            self.frame_loop.stop();
        }

        #[wasm_bindgen(getter)]
        pub fn running(&self) -> bool {
            self.frame_loop.is_running()
        }

        /// Frames simulated so far
        #[wasm_bindgen(getter)]
        pub fn frames(&self) -> f64 {
            self.frame_loop.frames() as f64
        }
    }

    /// Start a match on `canvas`
    #[wasm_bindgen]
    pub fn start_game(canvas: HtmlCanvasElement) -> Result<GameHandle, JsValue> {
        console_error_panic_hook::set_once();
        crate::logger::init();

        let seed = js_sys::Date::now() as u64;
        let frame_loop = FrameLoop::start(&canvas, seed)?;

        Ok(GameHandle { frame_loop })
    }
}
