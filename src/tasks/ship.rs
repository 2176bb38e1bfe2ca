use std::rc::Rc;

use tracing::{debug, info};

use crate::assets::Frame;
use crate::canvas::{frame_size, Canvas};
use crate::compute::{clamp_position, to_cell, update_speed};
use crate::entities::BoundingBox;
use crate::tasks::{Explosion, Fire, GameOver, Imprint, Step, Task};
use crate::world::World;

/// Width of the play-field frame the ship must stay inside.
pub const BORDER_THICKNESS: usize = 1;

/// Ticks each rocket frame is shown before the next one.
const FRAME_HOLD: usize = 2;

/// The player's rocket.
pub struct Ship {
    frames: Rc<[Frame]>,
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    height: usize,
    width: usize,
    tick: usize,
    imprint: Imprint,
}

impl Ship {
    pub fn new(frames: Rc<[Frame]>, row: f64, column: f64) -> Self {
        let (height, width) = frames
            .iter()
            .map(|frame| frame_size(frame))
            .fold((0, 0), |(h, w), (fh, fw)| (h.max(fh), w.max(fw)));
        Self {
            frames,
            row,
            column,
            row_speed: 0.0,
            column_speed: 0.0,
            height,
            width,
            tick: 0,
            imprint: Imprint::default(),
        }
    }

    /// Ship parked in the middle of `canvas`.
    pub fn centered(frames: Rc<[Frame]>, canvas: &Canvas) -> Self {
        let mut ship = Self::new(frames, 0.0, 0.0);
        ship.row = ((canvas.rows().saturating_sub(ship.height)) / 2) as f64;
        ship.column = ((canvas.columns().saturating_sub(ship.width)) / 2) as f64;
        ship
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    pub fn size(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn footprint(&self) -> BoundingBox {
        BoundingBox::new(
            to_cell(self.row),
            to_cell(self.column),
            self.height as i32,
            self.width as i32,
        )
    }

    fn crash(&mut self, world: &mut World) {
        if world.clock.end() {
            info!(year = world.clock.year(), "ship destroyed, game over");
        }
        let (center_row, center_column) = self.footprint().center();
        world.spawn(Explosion::new(center_row, center_column));
        world.spawn(GameOver::new());
    }
}

impl Task for Ship {
    fn name(&self) -> &'static str {
        "ship"
    }

    fn step(&mut self, world: &mut World) -> Step {
        self.imprint.wipe(&mut world.canvas);

        if let Some(id) = world.obstacles.find_collision(&self.footprint()) {
            debug!(?id, "ship collided");
            world.obstacles.mark_collided(id);
            self.crash(world);
            return Step::Done;
        }

        let controls = world.controls;
        if controls.fire && world.clock.weapon_unlocked() {
            let nose = self.column + (self.width / 2) as f64;
            world.spawn(Fire::new(self.row - 1.0, nose));
        }

        (self.row_speed, self.column_speed) = update_speed(
            self.row_speed,
            self.column_speed,
            controls.rows_direction,
            controls.columns_direction,
        );
        self.row = clamp_position(
            self.row + self.row_speed,
            self.height,
            BORDER_THICKNESS,
            world.canvas.max_row(),
        );
        self.column = clamp_position(
            self.column + self.column_speed,
            self.width,
            BORDER_THICKNESS,
            world.canvas.max_column(),
        );

        if self.frames.is_empty() {
            return Step::Pending;
        }
        let frame = self.frames[(self.tick / FRAME_HOLD) % self.frames.len()].clone();
        self.tick += 1;
        self.imprint.stamp(&mut world.canvas, self.row, self.column, &frame);
        Step::Pending
    }
}
