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

//! The command set, driven through the interpreter as players would drive it.

use hearth_common::matching::mock_things::{box_of, large_green_ball, small_green_ball};
use hearth_common::{Direction, Location, LocationId, Thing, World};
use hearth_kernel::CommandError;
use hearth_kernel::testing::TestHarness;
use pretty_assertions::assert_eq;
use test_case::test_case;

const HALL: LocationId = LocationId(1);
const STUDY: LocationId = LocationId(2);

fn world() -> World {
    World::from_locations([
        Location::new(HALL, "The Hall", "A draughty hall.")
            .with_exit(Direction::North, STUDY)
            .with_exit(Direction::East, LocationId(3))
            .with_thing(Thing::player("Alice"))
            .with_thing(Thing::player("Bob"))
            .with_thing(Thing::player("Dave"))
            .with_thing(small_green_ball())
            .with_thing(large_green_ball())
            .with_thing(
                box_of("a wooden box", vec![Thing::item("a brass key", "KEY")])
                    .with_qualifier("WOODEN"),
            )
            .with_thing(Thing::narrative("a stone fountain", "FOUNTAIN").with_qualifier("STONE")),
        Location::new(STUDY, "The Study", "Books everywhere.")
            .with_exit(Direction::South, HALL)
            .with_thing(Thing::player("Carol")),
        Location::new(LocationId(3), "The Kitchen", "").with_exit(Direction::West, HALL),
    ])
    .unwrap()
}

fn harness() -> TestHarness {
    let mut harness = TestHarness::new(world());
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        harness.connect(name);
    }
    harness
}

#[test]
fn test_look() {
    let harness = harness();
    let outcome = harness.run("Alice", "look");
    assert!(outcome.ok);
    assert_eq!(outcome.rounds, 1);
    assert_eq!(
        harness.output("Alice"),
        vec![
            "The Hall",
            "A draughty hall.",
            "You see a small green ball, a large green ball and a wooden box here.",
            "Bob and Dave are here.",
            "Exits: north and east.",
        ]
    );
    assert!(harness.output("Bob").is_empty());
}

#[test]
fn test_get_and_inventory() {
    let harness = harness();
    assert!(harness.run("Alice", "get the green ball").ok);
    assert_eq!(harness.output("Alice"), vec!["You take a small green ball."]);
    assert_eq!(harness.output("Bob"), vec!["Alice takes a small green ball."]);
    assert_eq!(harness.output("Dave"), vec!["Alice takes a small green ball."]);
    assert!(harness.output("Carol").is_empty());

    harness.run("Alice", "i");
    assert_eq!(harness.output("Alice"), vec!["You are carrying a small green ball."]);

    harness.run("Bob", "inventory");
    assert_eq!(harness.output("Bob"), vec!["You are empty handed."]);
}

#[test_case("get fountain", "You can't take a stone fountain."; "get scenery")]
#[test_case("get frob", "You see no 'FROB' here."; "get unknown")]
#[test_case("get 3rd green ball", "You don't see that many '3RD GREEN BALL' here."; "get too many")]
#[test_case("get bob", "You can't take Bob."; "get player")]
#[test_case("get", "Get what?"; "get nothing")]
#[test_case("drop ball", "You see no 'BALL' here."; "drop uncarried")]
#[test_case("drop", "Drop what?"; "drop nothing")]
#[test_case("take key", "Take what from what?"; "take without container")]
#[test_case("put ball", "Put what in what?"; "put without container")]
#[test_case("junk fountain", "You can't junk a stone fountain."; "junk scenery")]
#[test_case("examine", "Examine what?"; "examine nothing")]
#[test_case("west", "You can't go that way."; "no exit")]
#[test_case("go sideways", "Eh?"; "go nowhere known")]
#[test_case("go", "Go where?"; "go without direction")]
fn test_rejected_commands(input: &str, reply: &str) {
    let harness = harness();
    let outcome = harness.run("Alice", input);
    assert!(outcome.recognized);
    assert!(!outcome.ok);
    assert_eq!(harness.output("Alice"), vec![reply]);

    // Nobody saw anything happen.
    assert!(harness.output("Bob").is_empty());
}

#[test]
fn test_get_all_then_drop_some() {
    let harness = harness();
    harness.run("Alice", "get all ball");
    assert_eq!(
        harness.output("Alice"),
        vec!["You take a small green ball and a large green ball."]
    );

    assert!(harness.run("Alice", "drop large ball").ok);
    assert_eq!(harness.output("Alice"), vec!["You drop a large green ball."]);
    assert_eq!(
        harness.output("Bob"),
        vec![
            "Alice takes a small green ball and a large green ball.",
            "Alice drops a large green ball.",
        ]
    );

    harness.run("Alice", "inventory");
    assert_eq!(harness.output("Alice"), vec!["You are carrying a small green ball."]);
}

#[test]
fn test_take_from_and_put_in_container() {
    let harness = harness();
    assert!(harness.run("Alice", "take the key from the box").ok);
    assert_eq!(
        harness.output("Alice"),
        vec!["You take a brass key from a wooden box."]
    );
    assert_eq!(
        harness.output("Bob"),
        vec!["Alice takes a brass key from a wooden box."]
    );

    harness.run("Alice", "examine wooden box");
    assert_eq!(
        harness.output("Alice"),
        vec!["You see nothing special about a wooden box. It is empty."]
    );
    assert_eq!(harness.output("Bob"), vec!["Alice examines a wooden box."]);

    harness.run("Alice", "get small ball");
    assert!(harness.run("Alice", "put key in box").ok);
    assert!(harness.run("Alice", "put ball into box").ok);
    harness.output("Alice");
    harness.run("Alice", "x box");
    assert_eq!(
        harness.output("Alice"),
        vec!["You see nothing special about a wooden box. It contains a brass key and a small green ball."]
    );

    assert!(!harness.run("Alice", "put fountain in box").ok);
    assert_eq!(harness.output("Alice"), vec!["You see no 'FOUNTAIN' here."]);

    // Scenery can't be a container; nor can the key be seen, now it's in the box.
    assert!(!harness.run("Alice", "take key from fountain").ok);
    assert_eq!(harness.output("Alice"), vec!["You see no 'KEY FOUNTAIN' here."]);
}

#[test]
fn test_container_must_hold_things() {
    let harness = harness();
    harness.run("Alice", "get small ball");
    harness.output("Alice");
    assert!(!harness.run("Alice", "put small ball in large ball").ok);
    assert_eq!(
        harness.output("Alice"),
        vec!["A large green ball can't hold anything."]
    );
}

#[test]
fn test_examine_one_thing_at_a_time() {
    let harness = harness();
    assert!(!harness.run("Alice", "examine all ball").ok);
    assert_eq!(
        harness.output("Alice"),
        vec!["You can only do that to one thing at a time."]
    );
    assert!(harness.run("Alice", "look fountain").ok);
    assert_eq!(
        harness.output("Alice"),
        vec!["You see nothing special about a stone fountain."]
    );
}

#[test]
fn test_junk() {
    let harness = harness();
    assert!(harness.run("Alice", "junk large ball").ok);
    assert_eq!(harness.output("Alice"), vec!["You junk a large green ball."]);
    assert_eq!(harness.output("Dave"), vec!["Alice junks a large green ball."]);

    // Only the small one is left, so "LARGE" no longer means anything.
    assert!(!harness.run("Alice", "get large ball").ok);
    assert_eq!(harness.output("Alice"), vec!["You see no 'LARGE' here."]);

    assert!(!harness.run("Alice", "junk fountain").ok);
    assert_eq!(harness.output("Alice"), vec!["You can't junk a stone fountain."]);
}

#[test]
fn test_movement() {
    let harness = harness();
    let alice = harness.player("Alice");

    let outcome = harness.run("Alice", "north");
    assert!(outcome.ok);
    assert_eq!(outcome.rounds, 2);
    assert_eq!(
        harness.output("Alice"),
        vec!["The Study", "Books everywhere.", "Carol is here.", "Exits: south."]
    );
    assert_eq!(harness.output("Bob"), vec!["Alice goes north."]);
    assert_eq!(harness.output("Carol"), vec!["Alice arrives from the south."]);
    assert_eq!(harness.interpreter.world().locate(alice).unwrap().id(), STUDY);

    assert!(harness.run("Alice", "s").ok);
    assert_eq!(harness.output("Carol"), vec!["Alice goes south."]);
    assert_eq!(harness.output("Bob"), vec!["Alice arrives from the north."]);

    harness.output("Alice");
    assert!(harness.run("Alice", "go east").ok);
    assert_eq!(harness.output("Alice"), vec!["The Kitchen", "Exits: west."]);
}

#[test]
fn test_say_and_emote() {
    let harness = harness();
    assert!(harness.run("Alice", "\"Hello there").ok);
    assert_eq!(harness.output("Alice"), vec!["You say: \"Hello there\""]);
    assert_eq!(harness.output("Bob"), vec!["Alice says: \"Hello there\""]);
    assert!(harness.output("Carol").is_empty());

    assert!(harness.run("Bob", ":waves.").ok);
    assert_eq!(harness.output("Bob"), vec!["Bob waves."]);
    assert_eq!(harness.output("Alice"), vec!["Bob waves."]);
}

#[test]
fn test_shout_reaches_neighbours() {
    let harness = harness();
    let outcome = harness.run("Alice", "shout Fire!");
    assert!(outcome.ok);
    // Both neighbours are asked for in the first round.
    assert_eq!(outcome.rounds, 2);
    assert_eq!(harness.output("Alice"), vec!["You shout: \"Fire!\""]);
    assert_eq!(harness.output("Bob"), vec!["Alice shouts: \"Fire!\""]);
    assert_eq!(
        harness.output("Carol"),
        vec!["Someone shouts from the south: \"Fire!\""]
    );
}

#[test]
fn test_tell_reaches_another_location() {
    let harness = harness();
    let outcome = harness.run("Alice", "tell carol meet me in the hall");
    assert!(outcome.ok);
    assert_eq!(outcome.rounds, 2);
    assert_eq!(
        harness.output("Alice"),
        vec!["You tell Carol: \"meet me in the hall\""]
    );
    assert_eq!(
        harness.output("Carol"),
        vec!["Alice tells you: \"meet me in the hall\""]
    );
    assert!(harness.output("Bob").is_empty());

    assert!(!harness.run("Alice", "tell zed hello").ok);
    assert_eq!(harness.output("Alice"), vec!["There is no one called 'zed'."]);
}

#[test]
fn test_whisper() {
    let harness = harness();
    assert!(harness.run("Alice", "whisper bob psst").ok);
    assert_eq!(harness.output("Alice"), vec!["You whisper to Bob: \"psst\""]);
    assert_eq!(harness.output("Bob"), vec!["Alice whispers to you: \"psst\""]);
    assert_eq!(harness.output("Dave"), vec!["Alice whispers something to Bob."]);

    assert!(!harness.run("Alice", "whisper carol psst").ok);
    assert_eq!(harness.output("Alice"), vec!["You see no 'CAROL' here."]);
}

#[test]
fn test_unrecognized_and_reserved_commands() {
    let harness = harness();
    let outcome = harness.run("Alice", "dance wildly");
    assert!(!outcome.recognized);
    assert_eq!(outcome.keyword, "DANCE");
    assert_eq!(harness.output("Alice"), vec!["Eh?"]);

    // Players can't use script commands...
    let outcome = harness.run("Alice", "$poof");
    assert!(!outcome.recognized);
    assert_eq!(harness.output("Alice"), vec!["Eh?"]);
    assert!(harness.output("Bob").is_empty());

    // ...but scripts can.
    let outcome = harness.script("Alice", "$POOF");
    assert!(outcome.recognized && outcome.ok);
    assert_eq!(harness.output("Alice")[0], "The Hall");
    assert_eq!(harness.output("Bob"), vec!["Alice appears in a puff of smoke."]);

    harness.script("Alice", "$ACTION sniffs the air.");
    assert!(harness.output("Alice").is_empty());
    assert_eq!(harness.output("Dave"), vec!["Alice sniffs the air."]);
}

#[test]
fn test_command_errors() {
    let harness = harness();
    assert_eq!(
        harness.try_run("Alice", "   "),
        Err(CommandError::EmptyCommand)
    );

    let bob = harness.player("Bob");
    harness.interpreter.world().leave(bob).unwrap();
    assert_eq!(
        harness.interpreter.parse(bob, "look"),
        Err(CommandError::NotLocated(bob))
    );
}
