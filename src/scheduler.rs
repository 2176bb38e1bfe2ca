//! Cooperative scheduler: resumes every live task once per tick.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::controls::read_controls;
use crate::display::Display;
use crate::tasks::{Step, Task};
use crate::world::World;

#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.tasks.push(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Names of live tasks, in resume order.
    pub fn names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|task| task.name()).collect()
    }

    /// Resume each live task once, in registration order, and reap the
    /// finished ones.  Tasks spawned during the sweep are parked in the
    /// world and join the set afterwards, so they first run next tick.
    pub fn tick(&mut self, world: &mut World) {
        self.tasks.retain_mut(|task| match task.step(world) {
            Step::Pending => true,
            Step::Done => {
                debug!(task = task.name(), "task finished");
                false
            }
        });
        self.tasks.extend(world.take_spawned());
    }

    /// Drive the game at a fixed `period` until the player quits.
    pub fn run<D: Display>(
        &mut self,
        world: &mut World,
        display: &mut D,
        period: Duration,
    ) -> io::Result<()> {
        loop {
            let tick_start = Instant::now();

            let controls = read_controls(display.pending_keys());
            if controls.quit {
                info!(year = world.clock.year(), "quit requested");
                return Ok(());
            }
            world.controls = controls;

            self.tick(world);

            world.canvas.draw_border();
            world.hud.draw_border();
            display.commit(&[&world.canvas, &world.hud])?;
            for _ in 0..world.take_beeps() {
                display.beep()?;
            }

            let elapsed = tick_start.elapsed();
            if elapsed < period {
                thread::sleep(period - elapsed);
            }
        }
    }
}
