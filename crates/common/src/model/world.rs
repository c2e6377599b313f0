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

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::model::{Location, LocationId, Thing, ThingId, WorldError};

/// The set of locations making up the world, plus an index of where each player is.
///
/// The location graph is fixed once built. What moves is the contents of each location, which is
/// guarded by that location's own lock. The whereabouts index is only a hint used to find which
/// lock to take: it is updated while the relevant location locks are held, and anything read
/// from it must be re-checked under the lock.
pub struct World {
    locations: HashMap<LocationId, Arc<Location>>,
    whereabouts: RwLock<HashMap<ThingId, LocationId>>,
    player_names: RwLock<HashMap<String, ThingId>>,
}

impl World {
    /// Build a world from its locations, indexing any players they were seeded with.
    pub fn from_locations(locations: impl IntoIterator<Item = Location>) -> Result<Self, WorldError> {
        let mut by_id = HashMap::new();
        let mut whereabouts = HashMap::new();
        let mut player_names = HashMap::new();
        for location in locations {
            let id = location.id();
            for player in location.lock().players() {
                whereabouts.insert(player.id(), id);
                let name = player.name().to_uppercase();
                if player_names.insert(name, player.id()).is_some() {
                    return Err(WorldError::DuplicatePlayerName(player.name().to_string()));
                }
            }
            if by_id.insert(id, Arc::new(location)).is_some() {
                return Err(WorldError::DuplicateLocation(id));
            }
        }
        for location in by_id.values() {
            for to in location.exits().values() {
                if !by_id.contains_key(to) {
                    return Err(WorldError::NoSuchLocation(*to));
                }
            }
        }
        Ok(Self {
            locations: by_id,
            whereabouts: RwLock::new(whereabouts),
            player_names: RwLock::new(player_names),
        })
    }

    pub fn location(&self, id: LocationId) -> Result<Arc<Location>, WorldError> {
        self.locations
            .get(&id)
            .cloned()
            .ok_or(WorldError::NoSuchLocation(id))
    }

    pub fn locations(&self) -> impl Iterator<Item = &Arc<Location>> {
        self.locations.values()
    }

    /// The location a player was last recorded in. Only authoritative once that location's
    /// lock is held and the player is found in it.
    pub fn locate(&self, player: ThingId) -> Result<Arc<Location>, WorldError> {
        let id = self
            .whereabouts
            .read()
            .get(&player)
            .copied()
            .ok_or(WorldError::NotLocated(player))?;
        self.location(id)
    }

    /// Record that a player is now in `location`. Callers must hold the lock of the location the
    /// player was moved into.
    pub fn record_whereabouts(&self, player: ThingId, location: LocationId) {
        self.whereabouts.write().insert(player, location);
    }

    /// Find a player by (case insensitive) name.
    pub fn lookup_player(&self, name: &str) -> Option<ThingId> {
        self.player_names.read().get(&name.to_uppercase()).copied()
    }

    /// Bring a player into the world at `at`. Player names are unique, ignoring case.
    pub fn place(&self, player: Thing, at: LocationId) -> Result<ThingId, WorldError> {
        let location = self.location(at)?;
        let id = player.id();
        {
            let mut player_names = self.player_names.write();
            let name = player.name().to_uppercase();
            if player_names.contains_key(&name) {
                return Err(WorldError::DuplicatePlayerName(player.name().to_string()));
            }
            player_names.insert(name, id);
        }
        let mut inventory = location.lock();
        inventory.add(player);
        self.record_whereabouts(id, at);
        debug!(player = %id, location = %at, "placed player");
        Ok(id)
    }

    /// Take a player out of the world, wherever they currently are.
    pub fn leave(&self, player: ThingId) -> Result<Thing, WorldError> {
        loop {
            let location = self.locate(player)?;
            let mut inventory = location.lock();
            // Moved between the lookup and the lock; chase them.
            let Some(thing) = inventory.remove(player) else {
                if self.locate(player)?.id() == location.id() {
                    return Err(WorldError::ThingNotFound(player, location.id()));
                }
                continue;
            };
            self.whereabouts.write().remove(&player);
            let mut player_names = self.player_names.write();
            let name = thing.name().to_uppercase();
            if player_names.get(&name) == Some(&player) {
                player_names.remove(&name);
            }
            drop(player_names);
            debug!(player = %player, location = %location.id(), "player left");
            return Ok(thing);
        }
    }
}
