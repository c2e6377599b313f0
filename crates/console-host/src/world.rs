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

//! The little village the console drops you into.

use hearth_common::{Direction, Location, LocationId, Thing, World, WorldError};

pub const SQUARE: LocationId = LocationId(1);
pub const INN: LocationId = LocationId(2);
pub const CELLAR: LocationId = LocationId(3);
pub const GARDEN: LocationId = LocationId(4);
pub const TOWER: LocationId = LocationId(5);
pub const LOOKOUT: LocationId = LocationId(6);

pub fn village() -> Result<World, WorldError> {
    let square = Location::new(
        SQUARE,
        "The Village Square",
        "Cobbles worn smooth by generations of feet. An inn stands to the north, a walled garden \
         lies east, and an old tower rises to the west.",
    )
    .with_exit(Direction::North, INN)
    .with_exit(Direction::East, GARDEN)
    .with_exit(Direction::West, TOWER)
    .with_thing(
        Thing::narrative("a stone well", "WELL")
            .with_qualifier("STONE")
            .with_description("Moss grows between the stones. A long way down, water glints."),
    )
    .with_thing(
        Thing::item("a copper coin", "COIN")
            .with_qualifier("COPPER")
            .with_description("Stamped with the head of a forgotten king."),
    );

    let inn = Location::new(
        INN,
        "The Crooked Inn",
        "Low beams, a smoky hearth and the smell of stew. Stairs lead down to the cellar.",
    )
    .with_exit(Direction::South, SQUARE)
    .with_exit(Direction::Down, CELLAR)
    .with_thing(Thing::narrative("a roaring hearth", "HEARTH").with_qualifier("ROARING"))
    .with_thing(
        Thing::item("a pewter tankard", "TANKARD")
            .with_alias("MUG")
            .with_qualifier("PEWTER"),
    )
    .with_thing(
        Thing::item("a wooden chest", "CHEST")
            .with_qualifier("WOODEN")
            .container()
            .holding(Thing::item("a loaf of bread", "LOAF").with_alias("BREAD"))
            .holding(Thing::item("a wedge of cheese", "WEDGE").with_alias("CHEESE")),
    );

    let cellar = Location::new(
        CELLAR,
        "The Cellar",
        "Barrels line the damp walls. It is very quiet down here.",
    )
    .with_exit(Direction::Up, INN)
    .with_thing(Thing::narrative("a row of barrels", "BARRELS").with_alias("BARREL"))
    .with_thing(
        Thing::item("a red apple", "APPLE")
            .with_qualifier("RED")
            .with_description("Crisp, and only slightly bruised."),
    )
    .with_thing(Thing::item("a green apple", "APPLE").with_qualifier("GREEN"));

    let garden = Location::new(
        GARDEN,
        "The Walled Garden",
        "Rows of herbs and a gnarled pear tree. The square is back to the west.",
    )
    .with_exit(Direction::West, SQUARE)
    .with_thing(Thing::narrative("a gnarled pear tree", "TREE").with_qualifier("PEAR"))
    .with_thing(
        Thing::item("a canvas sack", "SACK")
            .with_qualifier("CANVAS")
            .container(),
    )
    .with_thing(Thing::item("a small trowel", "TROWEL").with_qualifier("SMALL"))
    .with_thing(Thing::item("a ripe pear", "PEAR").with_qualifier("RIPE"))
    .with_thing(Thing::item("a ripe pear", "PEAR").with_qualifier("RIPE"))
    .with_thing(Thing::item("a ripe pear", "PEAR").with_qualifier("RIPE"));

    let tower = Location::new(
        TOWER,
        "The Foot of the Tower",
        "A spiral stair winds upward into the dark. The square is to the east.",
    )
    .with_exit(Direction::East, SQUARE)
    .with_exit(Direction::Up, LOOKOUT)
    .with_thing(
        Thing::item("a brass lantern", "LANTERN")
            .with_alias("LAMP")
            .with_qualifier("BRASS"),
    );

    let lookout = Location::new(
        LOOKOUT,
        "The Lookout",
        "Wind whistles through the arrow slits. The whole village is laid out below.",
    )
    .with_exit(Direction::Down, TOWER)
    .with_thing(
        Thing::narrative("a rusty telescope", "TELESCOPE")
            .with_qualifier("RUSTY")
            .with_description("Pointed at the inn. Someone has been keeping watch."),
    );

    World::from_locations([square, inn, cellar, garden, tower, lookout])
}

#[cfg(test)]
mod tests {
    use crate::world::{CELLAR, GARDEN, SQUARE, village};

    #[test]
    fn test_village_is_connected() {
        let world = village().unwrap();
        assert_eq!(world.locations().count(), 6);
        let garden = world.location(GARDEN).unwrap();
        assert_eq!(garden.lock().contents().len(), 5);
        assert!(world.location(CELLAR).unwrap().exit(hearth_common::Direction::Up).is_some());
        assert_eq!(world.location(SQUARE).unwrap().lock().narratives().len(), 1);
    }
}
