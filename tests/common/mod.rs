#![allow(dead_code)]

use std::collections::BTreeMap;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use space_garbage::assets::{Assets, Frame};
use space_garbage::canvas::Canvas;
use space_garbage::progression::GameClock;
use space_garbage::world::World;

pub const SHIP: &str = "###\n###\n###";
pub const GARBAGE: &str = "ooo\nooo\nooo";

pub fn frames(texts: &[&str]) -> Rc<[Frame]> {
    texts.iter().map(|text| Frame::from(*text)).collect()
}

pub fn test_assets() -> Assets {
    let mut garbage = BTreeMap::new();
    garbage.insert("box".to_string(), Frame::from(GARBAGE));
    Assets {
        rocket: frames(&[SHIP]),
        explosion: frames(&["*****\n*****", "* * *\n * * ", "  *  \n     "]),
        game_over: frames(&["GAME\nOVER"]),
        garbage,
    }
}

pub fn make_world(rows: usize, columns: usize, year: u32) -> World {
    World::new(
        Canvas::new(rows, columns),
        Canvas::new(3, columns).with_origin(rows as u16, 0),
        GameClock::new(year),
        test_assets(),
        StdRng::seed_from_u64(42),
    )
}

/// Every character currently on the play field.
pub fn field_text(world: &World) -> String {
    (0..world.canvas.rows())
        .map(|row| world.canvas.row(row).iter().map(|cell| cell.ch).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn names(tasks: &[Box<dyn space_garbage::tasks::Task>]) -> Vec<&'static str> {
    tasks.iter().map(|task| task.name()).collect()
}
