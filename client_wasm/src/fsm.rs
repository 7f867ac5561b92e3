//! Frame loop lifecycle
//!
//! The simulation has no end condition of its own, so the loop only ends when
//! the host asks it to. This state machine is what the driver consults before
//! scheduling another frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Loop states
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Actions that trigger state transitions
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Start,
    Stop,
}

/// Result of a state transition
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: LoopState,
    to_state: LoopState,
    action: LoopAction,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl TransitionResult {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn success(&self) -> bool {
        self.success
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> LoopState {
        self.from_state
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn to_state(&self) -> LoopState {
        self.to_state
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn action(&self) -> LoopAction {
        self.action
    }
}

/// Frame loop state machine
#[derive(Debug)]
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: LoopAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            (LoopState::Idle, LoopAction::Start) => Some(LoopState::Running),
            // Torn down before the first frame
            (LoopState::Idle, LoopAction::Stop) => Some(LoopState::Stopped),
            (LoopState::Running, LoopAction::Stop) => Some(LoopState::Stopped),

            // Stopped is terminal, a new loop needs a new driver
            _ => None,
        }
    }

    /// Whether the driver should schedule another frame
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = LoopFsm::new();
        assert_eq!(fsm.state(), LoopState::Idle);
        assert!(!fsm.is_running());
    }

    #[test]
    fn test_start_then_stop() {
        let mut fsm = LoopFsm::new();

        let result = fsm.transition(LoopAction::Start);
        assert!(result.success());
        assert_eq!(result.from_state(), LoopState::Idle);
        assert_eq!(result.to_state(), LoopState::Running);
        assert!(fsm.is_running());

        let result = fsm.transition(LoopAction::Stop);
        assert!(result.success());
        assert_eq!(fsm.state(), LoopState::Stopped);
        assert!(!fsm.is_running());
    }

    #[test]
    fn test_stop_before_start() {
        let mut fsm = LoopFsm::new();
        assert!(fsm.transition(LoopAction::Stop).success());
        assert_eq!(fsm.state(), LoopState::Stopped);
    }

    #[test]
    fn test_stopped_is_terminal() {
        let mut fsm = LoopFsm::new();
        fsm.transition(LoopAction::Start);
        fsm.transition(LoopAction::Stop);

        assert!(!fsm.can_transition(LoopAction::Start));
        let result = fsm.transition(LoopAction::Start);
        assert!(!result.success());
        assert_eq!(result.to_state(), LoopState::Stopped);

        // Second stop is rejected, callers treat it as a no-op
        assert!(!fsm.transition(LoopAction::Stop).success());
    }

    #[test]
    fn test_double_start_rejected() {
        let mut fsm = LoopFsm::new();
        fsm.transition(LoopAction::Start);
        let result = fsm.transition(LoopAction::Start);
        assert!(!result.success());
        assert_eq!(result.action(), LoopAction::Start);
        assert!(fsm.is_running());
    }
}
