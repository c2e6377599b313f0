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

//! The in-memory world: things, the locations that contain them, and the index used to find
//! where a player currently is.

use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

pub use crate::model::location::{Direction, Inventory, Location, LockId};
pub use crate::model::things::{Qualifier, Thing, ThingKind};
pub use crate::model::world::World;

mod location;
mod things;
mod world;

static NEXT_THING_ID: AtomicU64 = AtomicU64::new(1);

/// The identity of a thing. Unique for the life of the process.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ThingId(u64);

impl ThingId {
    pub(crate) fn next() -> Self {
        Self(NEXT_THING_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for ThingId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The identity of a location, as referenced by exits.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LocationId(pub u32);

impl Display for LocationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("No such location: {0}")]
    NoSuchLocation(LocationId),
    #[error("Duplicate location: {0}")]
    DuplicateLocation(LocationId),
    #[error("Thing {0} is not in {1}")]
    ThingNotFound(ThingId, LocationId),
    #[error("Thing {0} is not located anywhere")]
    NotLocated(ThingId),
    #[error("Location {0} is not locked by this command")]
    NotLocked(LocationId),
    #[error("Thing {0} cannot hold other things")]
    NotAContainer(ThingId),
    #[error("There is already a player called {0}")]
    DuplicatePlayerName(String),
}
