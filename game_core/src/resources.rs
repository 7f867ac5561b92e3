use std::cell::Cell;

use crate::Side;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub ball_reset: Option<Side>, // side the ball left through
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.ball_reset = None;
    }
}

/// Latest vertical pointer coordinate, relative to the arena's top edge.
///
/// Single-slot cell: the host's pointer callback overwrites it whenever the
/// pointer moves and the frame driver samples it once per frame, so writes
/// landing between two frames are collapsed into the last one. `None` until
/// the pointer has been seen at least once.
#[derive(Debug, Default)]
pub struct PointerSignal {
    latest: Cell<Option<f32>>,
}

impl PointerSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, y: f32) {
        self.latest.set(Some(y));
    }

    pub fn sample(&self) -> Option<f32> {
        self.latest.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.ball_hit_paddle = Some(Side::Left);
        events.ball_reset = Some(Side::Right);

        events.clear();

        assert!(!events.ball_hit_wall);
        assert!(events.ball_hit_paddle.is_none());
        assert!(events.ball_reset.is_none());
    }

    #[test]
    fn test_pointer_signal_empty_until_written() {
        let signal = PointerSignal::new();
        assert_eq!(signal.sample(), None);
    }

    #[test]
    fn test_pointer_signal_last_write_wins() {
        let signal = PointerSignal::new();
        signal.write(10.0);
        signal.write(120.0);
        signal.write(300.0);
        assert_eq!(signal.sample(), Some(300.0));
        // Sampling does not consume the value
        assert_eq!(signal.sample(), Some(300.0));
    }

    #[test]
    fn test_rng_is_deterministic_per_seed() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..10 {
            assert_eq!(a.0.gen::<u32>(), b.0.gen::<u32>());
        }
    }
}
