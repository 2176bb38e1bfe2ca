use crate::canvas::frame_size;
use crate::tasks::{Imprint, Step, Task};
use crate::world::World;

/// Ticks each banner frame stays on screen.
const FRAME_HOLD: usize = 5;

/// "Game over" banner looping in the middle of the play field until the
/// player quits.
#[derive(Default)]
pub struct GameOver {
    tick: usize,
    imprint: Imprint,
}

impl GameOver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Task for GameOver {
    fn name(&self) -> &'static str {
        "game_over"
    }

    fn step(&mut self, world: &mut World) -> Step {
        self.imprint.wipe(&mut world.canvas);

        let frames = &world.assets.game_over;
        if frames.is_empty() {
            return Step::Pending;
        }
        let frame = frames[(self.tick / FRAME_HOLD) % frames.len()].clone();
        self.tick += 1;

        let (rows, columns) = frame_size(&frame);
        let row = (world.canvas.rows() as f64 - rows as f64) / 2.0;
        let column = (world.canvas.columns() as f64 - columns as f64) / 2.0;
        self.imprint.stamp(&mut world.canvas, row, column, &frame);
        Step::Pending
    }
}
