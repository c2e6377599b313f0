// Copyright (C) 2026 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! How commands grow their lock sets, and what happens when they misbehave.

use std::thread;
use std::time::Duration;

use hearth_common::{Direction, Location, LocationId, Thing, World, WorldError};
use hearth_kernel::tasks::command_context::{CommitContext, PlanContext};
use hearth_kernel::tasks::messages::Visibility;
use hearth_kernel::testing::TestHarness;
use hearth_kernel::{Command, CommandError, CommandRegistry, Config};
use pretty_assertions::assert_eq;

/// Counts the rooms to the north, looking inside each: so each one must be locked before the
/// next can even be found.
struct Survey;

impl Command for Survey {
    type Plan = usize;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<usize> {
        let mut current = ctx.location().clone();
        let mut rooms = 0;
        while let Some(next) = current.exit(Direction::North) {
            let next = ctx.world().location(next).ok()?;
            if !ctx.require(&next) {
                return None;
            }
            ctx.inventory(next.id())?;
            rooms += 1;
            current = next;
        }
        Some(rooms)
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, rooms: usize) -> Result<(), WorldError> {
        ctx.msg()
            .actor()
            .send(&format!("{rooms} rooms lie to the north."));
        ctx.succeed();
        Ok(())
    }
}

/// Tries to walk north as part of its own commit, without having locked the way.
struct Sneak;

impl Command for Sneak {
    type Plan = ();

    fn plan(&self, _ctx: &mut PlanContext<'_, '_>) -> Option<()> {
        Some(())
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, _plan: ()) -> Result<(), WorldError> {
        if ctx.script(Visibility::ALL, "NORTH") {
            ctx.succeed();
        } else {
            ctx.msg().actor().send("The way north is barred.");
        }
        Ok(())
    }
}

struct Explode;

impl Command for Explode {
    type Plan = ();

    fn plan(&self, _ctx: &mut PlanContext<'_, '_>) -> Option<()> {
        panic!("boom");
    }

    fn commit(&self, _ctx: &mut CommitContext<'_, '_>, _plan: ()) -> Result<(), WorldError> {
        Ok(())
    }
}

/// A corridor of `length` rooms running north from LocationId(1). Rooms are built northmost
/// first, so lock order runs against the direction of travel.
fn corridor(length: u32) -> World {
    let rooms = (1..=length).rev().map(|n| {
        let mut room = Location::new(LocationId(n), &format!("Room {n}"), "");
        if n < length {
            room = room.with_exit(Direction::North, LocationId(n + 1));
        }
        if n > 1 {
            room = room.with_exit(Direction::South, LocationId(n - 1));
        }
        if n == 1 {
            room = room.with_thing(Thing::player("Alice"));
        }
        room
    });
    World::from_locations(rooms.collect::<Vec<_>>()).unwrap()
}

fn harness(length: u32, config: Config) -> TestHarness {
    let mut registry = CommandRegistry::new();
    registry.register(&["SURVEY"], Survey);
    registry.register(&["SNEAK"], Sneak);
    registry.register(&["EXPLODE"], Explode);
    let mut harness = TestHarness::with_registry(corridor(length), registry, config);
    harness.connect("Alice");
    harness
}

#[test]
fn test_one_round_per_discovered_location() {
    for length in 1..=5 {
        let harness = harness(length, Config::default());
        let outcome = harness.run("Alice", "survey");
        assert!(outcome.ok);
        assert_eq!(outcome.rounds, length as usize);
        assert_eq!(
            harness.output("Alice"),
            vec![format!("{} rooms lie to the north.", length - 1)]
        );
    }
}

#[test]
fn test_lock_rounds_exhausted() {
    let config = Config {
        max_lock_rounds: 2,
        ..Config::default()
    };
    let harness = harness(4, config);
    assert_eq!(
        harness.try_run("Alice", "survey"),
        Err(CommandError::LockRoundsExceeded {
            keyword: "SURVEY".to_string(),
            rounds: 2,
        })
    );
    assert!(harness.output("Alice").is_empty());

    // Nothing was left locked.
    assert!(harness.run("Alice", "look").ok);
}

#[test]
fn test_sub_command_cannot_grow_locks() {
    let harness = harness(2, Config::default());
    let alice = harness.player("Alice");
    let outcome = harness.run("Alice", "sneak");
    assert!(!outcome.ok);
    assert_eq!(outcome.rounds, 1);
    assert_eq!(harness.output("Alice"), vec!["The way north is barred."]);
    assert_eq!(
        harness.interpreter.world().locate(alice).unwrap().id(),
        LocationId(1)
    );
}

#[test]
fn test_handler_panic_releases_locks() {
    let harness = harness(2, Config::default());
    let result = harness.try_run("Alice", "explode");
    assert_eq!(
        result,
        Err(CommandError::HandlerFault {
            keyword: "EXPLODE".to_string(),
            reason: "boom".to_string(),
        })
    );
    assert_eq!(
        harness.output("Alice"),
        vec!["Something went wrong, and nothing happened."]
    );
    assert!(harness.run("Alice", "north").ok);
}

#[test]
fn test_follows_actor_who_moved_while_waiting() {
    let harness = harness(2, Config::default());
    let alice = harness.player("Alice");
    let world = harness.interpreter.world().clone();
    let (first, second) = (
        world.location(LocationId(1)).unwrap(),
        world.location(LocationId(2)).unwrap(),
    );

    // Hold both rooms while the command starts, and move Alice before letting go.
    let (mut first_guard, mut second_guard) = if first.lock_id() < second.lock_id() {
        let first_guard = first.lock();
        (first_guard, second.lock())
    } else {
        let second_guard = second.lock();
        (first.lock(), second_guard)
    };

    let interpreter = harness.interpreter.clone();
    let (done_tx, done_rx) = flume::unbounded();
    let waiter = thread::spawn(move || {
        let outcome = interpreter.parse(alice, "look");
        done_tx.send(()).unwrap();
        outcome
    });
    thread::sleep(Duration::from_millis(50));

    let thing = first_guard.remove(alice).unwrap();
    second_guard.add(thing);
    world.record_whereabouts(alice, LocationId(2));
    assert!(done_rx.try_recv().is_err());
    drop(second_guard);
    drop(first_guard);

    done_rx
        .recv_timeout(Duration::from_secs(30))
        .expect("the command never got its locks");
    let outcome = waiter.join().unwrap().unwrap();
    assert!(outcome.ok);
    assert!(outcome.rounds <= 2);
    assert_eq!(harness.output("Alice")[0], "Room 2");
}
