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

//! Ready-made things for matching tests, here and in dependent crates.

use crate::model::Thing;

pub fn small_green_ball() -> Thing {
    Thing::item("a small green ball", "BALL")
        .with_qualifier("SMALL")
        .with_qualifier("GREEN")
}

pub fn large_green_ball() -> Thing {
    Thing::item("a large green ball", "BALL")
        .with_qualifier("LARGE")
        .with_qualifier("GREEN")
}

/// Four balls, told apart by colour: red, green, blue, yellow.
pub fn four_balls() -> Vec<Thing> {
    ["red", "green", "blue", "yellow"]
        .into_iter()
        .map(|colour| Thing::item(&format!("a {colour} ball"), "BALL").with_qualifier(colour))
        .collect()
}

/// A sword in a scabbard, as one thing. "SHORT" only qualifies the sword; "LEATHER" only the
/// scabbard.
pub fn sheathed_sword() -> Thing {
    Thing::item("a short sword in a leather scabbard", "SWORD")
        .with_alias("SCABBARD")
        .with_bound_qualifier("SWORD", "SHORT")
        .with_bound_qualifier("SCABBARD", "LEATHER")
}

pub fn long_sword() -> Thing {
    Thing::item("a long sword", "SWORD").with_qualifier("LONG")
}

pub fn box_of(name: &str, things: Vec<Thing>) -> Thing {
    things
        .into_iter()
        .fold(Thing::item(name, "BOX").container(), Thing::holding)
}
