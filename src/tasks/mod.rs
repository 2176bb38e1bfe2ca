//! Animated behaviours driven one step per tick by the scheduler.
//!
//! Each task is an explicit state machine.  `step` runs the code between two
//! suspension points and reports whether the task wants to be resumed again.
//! A task only returns after leaving the canvas in a state that is fine to
//! show on screen.

mod blink;
mod explosion;
mod fire;
mod game_over;
mod garbage;
mod ship;
mod year;

pub use blink::Blink;
pub use explosion::Explosion;
pub use fire::Fire;
pub use game_over::GameOver;
pub use garbage::{FlyGarbage, GarbageSpawner, GARBAGE_SPEED};
pub use ship::{Ship, BORDER_THICKNESS};
pub use year::{YearClock, YEAR_TICKS};

use crate::assets::Frame;
use crate::canvas::Canvas;
use crate::world::World;

/// Outcome of resuming a task once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Pending,
    Done,
}

pub trait Task {
    /// Short label for logs and tests.
    fn name(&self) -> &'static str;

    fn step(&mut self, world: &mut World) -> Step;
}

/// "Sleep for N ticks", spent one tick per call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Idle {
    remaining: u32,
}

impl Idle {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    /// Spend one tick.  Returns `true` while the wait is still running.
    pub fn wait(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// The frame a task last drew and where, so the next step can erase it.
#[derive(Debug, Default)]
pub(crate) struct Imprint(Option<(f64, f64, Frame)>);

impl Imprint {
    pub(crate) fn stamp(&mut self, canvas: &mut Canvas, row: f64, column: f64, frame: &Frame) {
        canvas.draw_frame(row, column, frame, false);
        self.0 = Some((row, column, Frame::clone(frame)));
    }

    pub(crate) fn wipe(&mut self, canvas: &mut Canvas) {
        if let Some((row, column, frame)) = self.0.take() {
            canvas.draw_frame(row, column, &frame, true);
        }
    }
}
