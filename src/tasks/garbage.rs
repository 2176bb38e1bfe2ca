use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::assets::Frame;
use crate::canvas::frame_size;
use crate::entities::Obstacle;
use crate::obstacles::{ObstacleId, ObstacleRegistry};
use crate::tasks::{Explosion, Idle, Imprint, Step, Task};
use crate::world::World;

/// Rows garbage falls per tick.
pub const GARBAGE_SPEED: f64 = 0.5;

/// Ticks the spawner waits before re-reading the year while space is clean.
const CLEAN_SKY_WAIT: u32 = 10;

// ── Falling garbage ───────────────────────────────────────────────────────────

/// One piece of garbage drifting down the play field.  Owns its obstacle.
pub struct FlyGarbage {
    id: ObstacleId,
    row: f64,
    column: f64,
    speed: f64,
    frame: Frame,
    imprint: Imprint,
}

impl FlyGarbage {
    /// Register a new obstacle at the top edge and return the task that
    /// moves it.
    pub fn launch(obstacles: &mut ObstacleRegistry, column: f64, frame: Frame) -> Self {
        Self::launch_at(obstacles, 0.0, column, GARBAGE_SPEED, frame)
    }

    pub fn launch_at(
        obstacles: &mut ObstacleRegistry,
        row: f64,
        column: f64,
        speed: f64,
        frame: Frame,
    ) -> Self {
        let (rows, columns) = frame_size(&frame);
        let id = obstacles.add(Obstacle::new(row, column, rows, columns));
        Self {
            id,
            row,
            column,
            speed,
            frame,
            imprint: Imprint::default(),
        }
    }

    pub fn id(&self) -> ObstacleId {
        self.id
    }

    pub fn row(&self) -> f64 {
        self.row
    }
}

impl Task for FlyGarbage {
    fn name(&self) -> &'static str {
        "fly_garbage"
    }

    fn step(&mut self, world: &mut World) -> Step {
        self.imprint.wipe(&mut world.canvas);

        if world.obstacles.take_collided(self.id) {
            world.obstacles.remove(self.id);
            return Step::Done;
        }
        let Some(obstacle) = world.obstacles.get(self.id) else {
            return Step::Done;
        };
        let bounds = Obstacle { row: self.row, ..obstacle.clone() }.bounding_box();

        // Bottom edge on the inner side of the border: ground impact.
        if bounds.top + bounds.height >= world.canvas.max_row() as i32 {
            world.obstacles.remove(self.id);
            let (center_row, center_column) = bounds.center();
            debug!(id = ?self.id, "garbage landed");
            world.spawn(Explosion::new(center_row, center_column));
            return Step::Done;
        }

        self.imprint.stamp(&mut world.canvas, self.row, self.column, &self.frame);
        world.obstacles.move_to(self.id, self.row);
        self.row += self.speed;
        Step::Pending
    }
}

// ── Spawner ───────────────────────────────────────────────────────────────────

/// Drops random garbage at the rate dictated by the current year until the
/// game ends.
#[derive(Default)]
pub struct GarbageSpawner {
    idle: Idle,
}

impl GarbageSpawner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task for GarbageSpawner {
    fn name(&self) -> &'static str {
        "garbage_spawner"
    }

    fn step(&mut self, world: &mut World) -> Step {
        if world.clock.is_over() {
            info!("garbage spawner stopped");
            return Step::Done;
        }
        if self.idle.wait() {
            return Step::Pending;
        }

        let Some(delay) = world.clock.garbage_delay() else {
            self.idle = Idle::new(CLEAN_SKY_WAIT - 1);
            return Step::Pending;
        };

        let frame = world.assets.garbage.values().choose(&mut world.rng).cloned();
        if let Some(frame) = frame {
            let max_column = world.canvas.max_column().max(2);
            let column = world.rng.gen_range(1..max_column) as f64;
            let garbage = FlyGarbage::launch(&mut world.obstacles, column, frame);
            debug!(id = ?garbage.id(), column, "garbage spawned");
            world.spawn(garbage);
        }
        self.idle = Idle::new(delay.saturating_sub(1));
        Step::Pending
    }
}
