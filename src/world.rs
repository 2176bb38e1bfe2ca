//! Shared game-state context handed to every task step.

use rand::rngs::StdRng;

use crate::assets::Assets;
use crate::canvas::Canvas;
use crate::entities::Controls;
use crate::obstacles::ObstacleRegistry;
use crate::progression::GameClock;
use crate::tasks::Task;

pub struct World {
    /// Play field, border included.
    pub canvas: Canvas,
    /// Year panel.
    pub hud: Canvas,
    pub obstacles: ObstacleRegistry,
    pub clock: GameClock,
    /// Controls sampled at the start of the current tick.
    pub controls: Controls,
    pub rng: StdRng,
    pub assets: Assets,
    spawned: Vec<Box<dyn Task>>,
    beeps: u32,
}

impl World {
    pub fn new(canvas: Canvas, hud: Canvas, clock: GameClock, assets: Assets, rng: StdRng) -> Self {
        Self {
            canvas,
            hud,
            obstacles: ObstacleRegistry::new(),
            clock,
            controls: Controls::default(),
            rng,
            assets,
            spawned: Vec::new(),
            beeps: 0,
        }
    }

    /// Queue a task; it first runs on the tick after this one.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.spawned.push(Box::new(task));
    }

    pub fn take_spawned(&mut self) -> Vec<Box<dyn Task>> {
        std::mem::take(&mut self.spawned)
    }

    /// Ask the display for an audible alert at the next commit.
    pub fn beep(&mut self) {
        self.beeps += 1;
    }

    pub fn take_beeps(&mut self) -> u32 {
        std::mem::take(&mut self.beeps)
    }
}
