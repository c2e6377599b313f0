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

use std::sync::Arc;

use hearth_common::{Inventory, Location, LocationId, LockId, ThingId, World, WorldError};
use parking_lot::MutexGuard;
use tracing::trace;

/// The inventories of a set of locations, locked for the lifetime of this value.
///
/// This is the only way commands get at an inventory, so holding a reference to one means its
/// lock is held. Dropping it releases everything, whichever way the command ended.
pub struct HeldLocks<'a> {
    held: Vec<(&'a Location, MutexGuard<'a, Inventory>)>,
}

impl<'a> HeldLocks<'a> {
    /// Lock every location in `locations`, which must be in ascending lock id order. Blocks until
    /// all of them are ours.
    pub fn acquire(locations: &'a [Arc<Location>]) -> Self {
        debug_assert!(
            locations
                .windows(2)
                .all(|pair| pair[0].lock_id() < pair[1].lock_id()),
            "locks must be taken in ascending order"
        );
        let held = locations
            .iter()
            .map(|location| {
                trace!(location = %location.id(), lock = %location.lock_id(), "acquiring");
                (location.as_ref(), location.lock())
            })
            .collect();
        Self { held }
    }

    fn position(&self, location: LocationId) -> Result<usize, WorldError> {
        self.held
            .iter()
            .position(|(l, _)| l.id() == location)
            .ok_or(WorldError::NotLocked(location))
    }

    pub fn is_held(&self, lock_id: LockId) -> bool {
        self.held.iter().any(|(l, _)| l.lock_id() == lock_id)
    }

    pub fn location(&self, location: LocationId) -> Option<&'a Location> {
        self.held
            .iter()
            .find(|(l, _)| l.id() == location)
            .map(|(l, _)| *l)
    }

    pub fn locations(&self) -> impl Iterator<Item = &'a Location> + '_ {
        self.held.iter().map(|(l, _)| *l)
    }

    pub fn inventory(&self, location: LocationId) -> Result<&Inventory, WorldError> {
        let position = self.position(location)?;
        Ok(&self.held[position].1)
    }

    pub fn inventory_mut(&mut self, location: LocationId) -> Result<&mut Inventory, WorldError> {
        let position = self.position(location)?;
        Ok(&mut self.held[position].1)
    }

    /// Move a thing held directly by one locked location into another, keeping the world's
    /// whereabouts index up to date for players.
    pub fn transfer(
        &mut self,
        world: &World,
        thing: ThingId,
        from: LocationId,
        to: LocationId,
    ) -> Result<(), WorldError> {
        let to_position = self.position(to)?;
        let moved = self
            .inventory_mut(from)?
            .remove(thing)
            .ok_or(WorldError::ThingNotFound(thing, from))?;
        let is_player = moved.is_player();
        self.held[to_position].1.add(moved);
        if is_player {
            world.record_whereabouts(thing, to);
        }
        trace!(thing = %thing, from = %from, to = %to, "transferred");
        Ok(())
    }
}
