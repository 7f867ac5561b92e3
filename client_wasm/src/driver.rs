//! Frame driver
//!
//! Runs one simulation step and one draw per `requestAnimationFrame` tick.
//! The frame closure re-schedules itself while the loop is `Running`; `stop`
//! cancels the pending frame, detaches the pointer listener and releases the
//! closure.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{PointerSignal, Simulation};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::fsm::{LoopAction, LoopFsm};
use crate::input::PointerListener;
use crate::render::Renderer;

type FrameCallback = Closure<dyn FnMut()>;

/// Everything a frame touches
struct LoopContext {
    sim: Simulation,
    renderer: Renderer,
    pointer: Rc<PointerSignal>,
    listener: Option<PointerListener>,
    fsm: LoopFsm,
    pending_frame: Option<i32>,
}

impl LoopContext {
    fn frame(&mut self) {
        let pointer_y = self.pointer.sample();
        self.sim.step(pointer_y);

        if let Some(scene) = self.sim.scene() {
            self.renderer.draw(&scene);
        }
    }
}

pub struct FrameLoop {
    state: Rc<RefCell<LoopContext>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    /// Build the match on `canvas` and schedule the first frame
    pub fn start(canvas: &HtmlCanvasElement, seed: u64) -> Result<Self, JsValue> {
        let renderer = Renderer::new(canvas)?;
        let pointer = Rc::new(PointerSignal::new());
        let listener = PointerListener::attach(canvas, Rc::clone(&pointer))?;

        let state = Rc::new(RefCell::new(LoopContext {
            sim: Simulation::new(seed),
            renderer,
            pointer,
            listener: Some(listener),
            fsm: LoopFsm::new(),
            pending_frame: None,
        }));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let frame_state = Rc::clone(&state);
        let frame_callback = Rc::clone(&callback);
        *callback.borrow_mut() = Some(Closure::new(move || {
            let mut state = frame_state.borrow_mut();
            state.pending_frame = None;
            if !state.fsm.is_running() {
                return;
            }

            state.frame();

            match request_frame(&frame_callback) {
                Ok(handle) => state.pending_frame = Some(handle),
                Err(e) => {
                    log::error!("Failed to schedule frame {}: {:?}", state.sim.frame, e);
                    state.fsm.transition(LoopAction::Stop);
                }
            }
        }));

        state.borrow_mut().fsm.transition(LoopAction::Start);
        let handle = request_frame(&callback)?;
        state.borrow_mut().pending_frame = Some(handle);

        log::info!("Frame loop started with seed {}", seed);

        Ok(Self { state, callback })
    }

    /// Stop the loop and release the frame closure; safe to call repeatedly
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        let stopped_now = state.fsm.transition(LoopAction::Stop).success();

        if let Some(handle) = state.pending_frame.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(handle) {
                    log::warn!("Failed to cancel animation frame: {:?}", e);
                }
            }
        }

        // Detach the pointer listener
        state.listener = None;
        let frames = state.sim.frame;
        drop(state);

        // The closure holds a handle to its own slot, clear it to break the cycle
        self.callback.borrow_mut().take();

        if stopped_now {
            log::info!("Frame loop stopped after {} frames", frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().fsm.is_running()
    }

    pub fn frames(&self) -> u64 {
        self.state.borrow().sim.frame
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(callback: &Rc<RefCell<Option<FrameCallback>>>) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let callback = callback.borrow();
    let callback = callback
        .as_ref()
        .ok_or_else(|| JsValue::from_str("Frame loop already stopped"))?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}
