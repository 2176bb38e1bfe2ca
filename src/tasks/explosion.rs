use tracing::debug;

use crate::canvas::frame_size;
use crate::tasks::{Imprint, Step, Task};
use crate::world::World;

/// One pass through the explosion frames around a centre point.
pub struct Explosion {
    center_row: f64,
    center_column: f64,
    next: usize,
    imprint: Imprint,
}

impl Explosion {
    pub fn new(center_row: f64, center_column: f64) -> Self {
        Self {
            center_row,
            center_column,
            next: 0,
            imprint: Imprint::default(),
        }
    }
}

impl Task for Explosion {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn step(&mut self, world: &mut World) -> Step {
        self.imprint.wipe(&mut world.canvas);

        let Some(frame) = world.assets.explosion.get(self.next).cloned() else {
            return Step::Done;
        };
        if self.next == 0 {
            debug!(row = self.center_row, column = self.center_column, "explosion");
            world.beep();
        }
        self.next += 1;

        let (rows, columns) = frame_size(&frame);
        let row = self.center_row - rows as f64 / 2.0;
        let column = self.center_column - columns as f64 / 2.0;
        self.imprint.stamp(&mut world.canvas, row, column, &frame);
        Step::Pending
    }
}
