//! Game setup: screen layout and the initial task set.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::assets::Assets;
use crate::canvas::Canvas;
use crate::config::Config;
use crate::progression::GameClock;
use crate::scheduler::Scheduler;
use crate::tasks::{Blink, GarbageSpawner, Ship, YearClock, BORDER_THICKNESS};
use crate::world::World;

/// Height of the year panel under the play field.
pub const HUD_ROWS: usize = 3;

const STAR_SYMBOLS: &[char] = &['+', '*', '.', ':', '\''];

/// Split the screen into play field and HUD, scatter stars and register the
/// ship, the garbage spawner and the year clock.
pub fn init_game(config: &Config, assets: Assets, rows: usize, columns: usize) -> (World, Scheduler) {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let field_rows = rows.saturating_sub(HUD_ROWS);
    let mut canvas = Canvas::new(field_rows, columns);
    canvas.draw_border();
    let mut hud = Canvas::new(HUD_ROWS, columns).with_origin(field_rows as u16, 0);
    hud.draw_border();

    let mut world = World::new(canvas, hud, GameClock::new(config.start_year), assets, rng);
    let mut scheduler = Scheduler::new();

    let max_row = world.canvas.max_row();
    let max_column = world.canvas.max_column();
    if max_row >= 2 * BORDER_THICKNESS && max_column >= 2 * BORDER_THICKNESS {
        for _ in 0..config.stars {
            let row = world.rng.gen_range(BORDER_THICKNESS..=max_row - BORDER_THICKNESS);
            let column = world.rng.gen_range(BORDER_THICKNESS..=max_column - BORDER_THICKNESS);
            let symbol = *STAR_SYMBOLS.choose(&mut world.rng).unwrap_or(&'*');
            let offset = world.rng.gen_range(1..=10);
            scheduler.spawn(Blink::new(row as i32, column as i32, symbol, offset));
        }
    }

    scheduler.spawn(Ship::centered(world.assets.rocket.clone(), &world.canvas));
    scheduler.spawn(GarbageSpawner::new());
    scheduler.spawn(YearClock::new(config.year_ticks));

    info!(rows, columns, stars = config.stars, year = config.start_year, "game initialised");
    (world, scheduler)
}
