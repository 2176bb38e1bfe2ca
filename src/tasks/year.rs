use tracing::info;

use crate::tasks::{Idle, Step, Task};
use crate::world::World;

/// Ticks per game year.
pub const YEAR_TICKS: u32 = 15;

/// Advances the game year and keeps the HUD caption current.
pub struct YearClock {
    period: u32,
    idle: Idle,
    started: bool,
    caption: Option<String>,
}

impl Default for YearClock {
    fn default() -> Self {
        Self::new(YEAR_TICKS)
    }
}

impl YearClock {
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            idle: Idle::default(),
            started: false,
            caption: None,
        }
    }

    fn show(&mut self, world: &mut World) {
        if let Some(old) = self.caption.take() {
            world.hud.draw_frame(1.0, 2.0, &old, true);
        }
        let caption = world.clock.caption();
        world.hud.draw_frame(1.0, 2.0, &caption, false);
        self.caption = Some(caption);
        self.idle = Idle::new(self.period - 1);
    }
}

impl Task for YearClock {
    fn name(&self) -> &'static str {
        "year_clock"
    }

    fn step(&mut self, world: &mut World) -> Step {
        if world.clock.is_over() {
            info!(year = world.clock.year(), "year clock stopped");
            return Step::Done;
        }
        if !self.started {
            self.started = true;
            self.show(world);
            return Step::Pending;
        }
        if self.idle.wait() {
            return Step::Pending;
        }
        world.clock.advance();
        self.show(world);
        Step::Pending
    }
}
