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

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, MutexGuard};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

use crate::model::{LocationId, Thing, ThingId, ThingKind};

static NEXT_LOCK_ID: AtomicU64 = AtomicU64::new(1);

/// The position of a location's lock in the global acquisition order. Allocated once when the
/// location is built and never changed; every multi-lock acquisition goes in ascending order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LockId(u64);

impl LockId {
    fn next() -> Self {
        Self(NEXT_LOCK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for LockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "lock:{}", self.0)
    }
}

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, StrumDisplay, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "NORTH", serialize = "N")]
    North,
    #[strum(to_string = "NORTHEAST", serialize = "NE")]
    Northeast,
    #[strum(to_string = "EAST", serialize = "E")]
    East,
    #[strum(to_string = "SOUTHEAST", serialize = "SE")]
    Southeast,
    #[strum(to_string = "SOUTH", serialize = "S")]
    South,
    #[strum(to_string = "SOUTHWEST", serialize = "SW")]
    Southwest,
    #[strum(to_string = "WEST", serialize = "W")]
    West,
    #[strum(to_string = "NORTHWEST", serialize = "NW")]
    Northwest,
    #[strum(to_string = "UP", serialize = "U")]
    Up,
    #[strum(to_string = "DOWN", serialize = "D")]
    Down,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::Northeast => Direction::Southwest,
            Direction::East => Direction::West,
            Direction::Southeast => Direction::Northwest,
            Direction::South => Direction::North,
            Direction::Southwest => Direction::Northeast,
            Direction::West => Direction::East,
            Direction::Northwest => Direction::Southeast,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Lowercase name for use in prose, e.g. "northeast".
    pub fn name(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Where a sound coming from this direction appears to come from: "the north", "above".
    pub fn source(&self) -> String {
        match self {
            Direction::Up => "above".to_string(),
            Direction::Down => "below".to_string(),
            _ => format!("the {}", self.name()),
        }
    }
}

/// What a location holds. Portable things, scenery and players are kept apart so each can be
/// searched (and listed) on its own; every collection keeps insertion order.
#[derive(Debug, Default)]
pub struct Inventory {
    contents: Vec<Thing>,
    narratives: Vec<Thing>,
    players: Vec<Thing>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    fn collection_mut(&mut self, kind: ThingKind) -> &mut Vec<Thing> {
        match kind {
            ThingKind::Item => &mut self.contents,
            ThingKind::Narrative => &mut self.narratives,
            ThingKind::Player => &mut self.players,
        }
    }

    /// Add a thing to the collection matching its kind.
    pub fn add(&mut self, thing: Thing) {
        self.collection_mut(thing.kind()).push(thing);
    }

    /// Remove a thing held directly by this inventory.
    pub fn remove(&mut self, id: ThingId) -> Option<Thing> {
        for collection in [&mut self.contents, &mut self.narratives, &mut self.players] {
            if let Some(position) = collection.iter().position(|t| t.id() == id) {
                return Some(collection.remove(position));
            }
        }
        None
    }

    pub fn find(&self, id: ThingId) -> Option<&Thing> {
        self.contents
            .iter()
            .chain(self.narratives.iter())
            .chain(self.players.iter())
            .find(|t| t.id() == id)
    }

    pub fn find_mut(&mut self, id: ThingId) -> Option<&mut Thing> {
        self.contents
            .iter_mut()
            .chain(self.narratives.iter_mut())
            .chain(self.players.iter_mut())
            .find(|t| t.id() == id)
    }

    pub fn contains(&self, id: ThingId) -> bool {
        self.find(id).is_some()
    }

    pub fn contents(&self) -> &[Thing] {
        &self.contents
    }

    pub fn narratives(&self) -> &[Thing] {
        &self.narratives
    }

    pub fn players(&self) -> &[Thing] {
        &self.players
    }

    /// Every collection in search order: portable things, scenery, then players.
    pub fn collections(&self) -> [&[Thing]; 3] {
        [&self.contents, &self.narratives, &self.players]
    }
}

/// A place in the world. A location's mutex guards its whole inventory, including everything
/// nested inside containers in it.
#[derive(Debug)]
pub struct Location {
    id: LocationId,
    lock_id: LockId,
    name: String,
    description: String,
    exits: BTreeMap<Direction, LocationId>,
    inventory: Mutex<Inventory>,
}

impl Location {
    pub fn new(id: LocationId, name: &str, description: &str) -> Self {
        Self {
            id,
            lock_id: LockId::next(),
            name: name.to_string(),
            description: description.to_string(),
            exits: BTreeMap::new(),
            inventory: Mutex::new(Inventory::new()),
        }
    }

    #[must_use]
    pub fn with_exit(mut self, direction: Direction, to: LocationId) -> Self {
        self.exits.insert(direction, to);
        self
    }

    /// Seed the location with a thing while it is still being built.
    #[must_use]
    pub fn with_thing(mut self, thing: Thing) -> Self {
        self.inventory.get_mut().add(thing);
        self
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn lock_id(&self) -> LockId {
        self.lock_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn exit(&self, direction: Direction) -> Option<LocationId> {
        self.exits.get(&direction).copied()
    }

    pub fn exits(&self) -> &BTreeMap<Direction, LocationId> {
        &self.exits
    }

    /// Block until this location's inventory is ours. Callers taking more than one location's
    /// lock must do so in ascending `lock_id` order.
    pub fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inventory.lock()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::model::location::{Direction, Inventory, Location};
    use crate::model::{LocationId, Thing};

    #[test]
    fn test_direction_spellings() {
        assert_eq!(Direction::from_str("N"), Ok(Direction::North));
        assert_eq!(Direction::from_str("north"), Ok(Direction::North));
        assert_eq!(Direction::from_str("SW"), Ok(Direction::Southwest));
        assert_eq!(Direction::from_str("D"), Ok(Direction::Down));
        assert!(Direction::from_str("SIDEWAYS").is_err());
        assert_eq!(Direction::Northeast.to_string(), "NORTHEAST");
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::West.source(), "the west");
        assert_eq!(Direction::Down.opposite().source(), "above");
    }

    #[test]
    fn test_inventory_routes_by_kind() {
        let mut inventory = Inventory::new();
        let ball = Thing::item("a ball", "BALL");
        let ball_id = ball.id();
        inventory.add(ball);
        inventory.add(Thing::narrative("a fountain", "FOUNTAIN"));
        inventory.add(Thing::player("Alice"));
        assert_eq!(inventory.contents().len(), 1);
        assert_eq!(inventory.narratives().len(), 1);
        assert_eq!(inventory.players().len(), 1);

        assert!(inventory.contains(ball_id));
        assert!(inventory.remove(ball_id).is_some());
        assert!(!inventory.contains(ball_id));
        assert!(inventory.remove(ball_id).is_none());
    }

    #[test]
    fn test_lock_ids_are_unique_and_ordered() {
        let a = Location::new(LocationId(1), "A", "");
        let b = Location::new(LocationId(2), "B", "");
        assert_ne!(a.lock_id(), b.lock_id());
        assert!(a.lock_id() < b.lock_id());
    }
}
