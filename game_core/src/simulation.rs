use hecs::World;

use crate::{spawn_match, step, Ball, Config, Events, GameMap, GameRng, Paddle, Scene, Side};

/// A complete match: world plus the resources `step` needs
///
/// Owned by whoever drives frames. State is created once and mutated in place.
pub struct Simulation {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub events: Events,
    pub rng: GameRng,
    pub frame: u64,
}

impl Simulation {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        spawn_match(&mut world, &map, &config, &mut rng);

        Self {
            world,
            map,
            config,
            events: Events::new(),
            rng,
            frame: 0,
        }
    }

    /// Advance one frame and report what happened in it
    pub fn step(&mut self, pointer_y: Option<f32>) -> &Events {
        step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.events,
            &mut self.rng,
            pointer_y,
        );
        self.frame += 1;
        &self.events
    }

    pub fn scene(&self) -> Option<Scene> {
        Scene::capture(&self.world, &self.map, &self.config)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Mutable access to the ball, for hosts and tests that stage a shot
    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        let entity = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(e, _)| e)?;
        self.world.get::<&mut Ball>(entity).ok()
    }
}
