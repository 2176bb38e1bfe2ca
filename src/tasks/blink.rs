use crate::canvas::Attr;
use crate::tasks::{Idle, Step, Task};
use crate::world::World;

/// Brightness cycle of a star: attribute and how many ticks it is held.
const PHASES: [(Attr, u32); 4] = [(Attr::Dim, 8), (Attr::Normal, 1), (Attr::Bold, 6), (Attr::Normal, 4)];

/// A star twinkling at a fixed cell, forever.
pub struct Blink {
    row: i32,
    column: i32,
    symbol: char,
    offset: Idle,
    phase: usize,
    held: u32,
}

impl Blink {
    /// `offset` ticks of dim light stagger stars so they do not pulse together.
    pub fn new(row: i32, column: i32, symbol: char, offset: u32) -> Self {
        Self {
            row,
            column,
            symbol,
            offset: Idle::new(offset),
            phase: 0,
            held: 0,
        }
    }

    /// Attribute the star will show on its next step.
    pub fn attr(&self) -> Attr {
        if self.offset.remaining() > 0 {
            Attr::Dim
        } else {
            PHASES[self.phase].0
        }
    }
}

impl Task for Blink {
    fn name(&self) -> &'static str {
        "blink"
    }

    fn step(&mut self, world: &mut World) -> Step {
        let attr = self.attr();
        world.canvas.put(self.row, self.column, self.symbol, attr);

        if self.offset.wait() {
            return Step::Pending;
        }
        self.held += 1;
        if self.held == PHASES[self.phase].1 {
            self.held = 0;
            self.phase = (self.phase + 1) % PHASES.len();
        }
        Step::Pending
    }
}
