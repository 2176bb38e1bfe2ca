use tracing::debug;

use crate::canvas::Attr;
use crate::compute::to_cell;
use crate::tasks::{Explosion, Step, Task};
use crate::world::World;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Spark,
    Flash,
    Flight,
}

/// A projectile: short muzzle flash, then a straight flight until it hits
/// garbage or leaves the play field.
pub struct Fire {
    row: f64,
    column: f64,
    rows_speed: f64,
    columns_speed: f64,
    stage: Stage,
    drawn: Option<(i32, i32)>,
}

impl Fire {
    /// Straight up, one row per tick.
    pub fn new(row: f64, column: f64) -> Self {
        Self::with_speed(row, column, -1.0, 0.0)
    }

    pub fn with_speed(row: f64, column: f64, rows_speed: f64, columns_speed: f64) -> Self {
        Self {
            row,
            column,
            rows_speed,
            columns_speed,
            stage: Stage::Spark,
            drawn: None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    fn symbol(&self) -> char {
        if self.columns_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    /// Mark whatever garbage covers the projectile's cell and blow it up.
    /// Returns `true` on a hit.
    fn strike(&self, world: &mut World) -> bool {
        let (row, column) = (to_cell(self.row), to_cell(self.column));
        let Some(id) = world.obstacles.find_hit(row, column) else {
            return false;
        };
        debug!(?id, row, column, "projectile hit");
        let center = world.obstacles.get(id).map(|o| o.bounding_box().center());
        world.obstacles.mark_collided(id);
        if let Some((center_row, center_column)) = center {
            world.spawn(Explosion::new(center_row, center_column));
        }
        true
    }

    fn show(&mut self, world: &mut World, symbol: char) {
        let (row, column) = (to_cell(self.row), to_cell(self.column));
        world.canvas.put(row, column, symbol, Attr::Normal);
        self.drawn = Some((row, column));
    }
}

impl Task for Fire {
    fn name(&self) -> &'static str {
        "fire"
    }

    fn step(&mut self, world: &mut World) -> Step {
        if let Some((row, column)) = self.drawn.take() {
            world.canvas.put(row, column, ' ', Attr::Normal);
        }

        // Garbage may have fallen onto the projectile since its last step.
        if self.strike(world) {
            return Step::Done;
        }

        match self.stage {
            Stage::Spark => {
                world.beep();
                self.show(world, '*');
                self.stage = Stage::Flash;
                Step::Pending
            }
            Stage::Flash => {
                self.show(world, 'O');
                self.stage = Stage::Flight;
                Step::Pending
            }
            Stage::Flight => {
                self.row += self.rows_speed;
                self.column += self.columns_speed;

                let (row, column) = (to_cell(self.row), to_cell(self.column));
                let (max_row, max_column) =
                    (world.canvas.max_row() as i32, world.canvas.max_column() as i32);
                if !(0 < row && row < max_row && 0 < column && column < max_column) {
                    return Step::Done;
                }
                if self.strike(world) {
                    return Step::Done;
                }

                let symbol = self.symbol();
                self.show(world, symbol);
                Step::Pending
            }
        }
    }
}
