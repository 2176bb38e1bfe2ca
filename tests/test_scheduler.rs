mod common;

use std::cell::RefCell;
use std::rc::Rc;

use space_garbage::scheduler::Scheduler;
use space_garbage::tasks::{Idle, Step, Task};
use space_garbage::world::World;

use common::make_world;

type Log = Rc<RefCell<Vec<String>>>;

/// Records every resumption and finishes after `steps` of them.
struct Probe {
    label: &'static str,
    steps: u32,
    log: Log,
}

impl Task for Probe {
    fn name(&self) -> &'static str {
        self.label
    }

    fn step(&mut self, _world: &mut World) -> Step {
        self.log.borrow_mut().push(self.label.to_string());
        self.steps -= 1;
        if self.steps == 0 {
            Step::Done
        } else {
            Step::Pending
        }
    }
}

/// Spawns a child probe on its first step.
struct Parent {
    log: Log,
    spawned: bool,
}

impl Task for Parent {
    fn name(&self) -> &'static str {
        "parent"
    }

    fn step(&mut self, world: &mut World) -> Step {
        self.log.borrow_mut().push("parent".to_string());
        if !self.spawned {
            self.spawned = true;
            world.spawn(Probe { label: "child", steps: 2, log: self.log.clone() });
        }
        Step::Pending
    }
}

fn take(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.borrow_mut())
}

#[test]
fn tasks_resume_once_per_tick_in_registration_order() {
    let log: Log = Rc::default();
    let mut world = make_world(10, 10, 1957);
    let mut scheduler = Scheduler::new();
    for label in ["a", "b", "c"] {
        scheduler.spawn(Probe { label, steps: 10, log: log.clone() });
    }

    scheduler.tick(&mut world);
    assert_eq!(take(&log), ["a", "b", "c"]);
    scheduler.tick(&mut world);
    assert_eq!(take(&log), ["a", "b", "c"]);
}

#[test]
fn finished_tasks_are_reaped() {
    let log: Log = Rc::default();
    let mut world = make_world(10, 10, 1957);
    let mut scheduler = Scheduler::new();
    scheduler.spawn(Probe { label: "short", steps: 1, log: log.clone() });
    scheduler.spawn(Probe { label: "long", steps: 3, log: log.clone() });

    scheduler.tick(&mut world);
    assert_eq!(scheduler.names(), ["long"]);
    scheduler.tick(&mut world);
    scheduler.tick(&mut world);
    assert!(scheduler.is_empty());
    assert_eq!(take(&log), ["short", "long", "long", "long"]);
}

#[test]
fn tasks_spawned_mid_sweep_start_next_tick() {
    let log: Log = Rc::default();
    let mut world = make_world(10, 10, 1957);
    let mut scheduler = Scheduler::new();
    scheduler.spawn(Parent { log: log.clone(), spawned: false });
    scheduler.spawn(Probe { label: "sibling", steps: 10, log: log.clone() });

    scheduler.tick(&mut world);
    assert_eq!(take(&log), ["parent", "sibling"]);
    assert_eq!(scheduler.names(), ["parent", "sibling", "child"]);

    scheduler.tick(&mut world);
    assert_eq!(take(&log), ["parent", "sibling", "child"]);
    scheduler.tick(&mut world);
    assert_eq!(scheduler.names(), ["parent", "sibling"]);
}

#[test]
fn idle_spends_one_tick_per_call() {
    let mut idle = Idle::new(3);
    assert!(idle.wait());
    assert!(idle.wait());
    assert!(idle.wait());
    assert!(!idle.wait());
    assert!(!Idle::default().wait());
}
