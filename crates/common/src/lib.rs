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

//! The world model and object matching shared by the hearth kernel and its hosts.
//!
//! The world is a set of locations, each guarding an inventory of things behind its own lock. The
//! [`matching`] module turns player-supplied words into references to things held in those
//! inventories; it never blocks and never mutates.

pub mod matching;
pub mod model;
pub mod tracing;
pub mod util;

pub use model::{
    Direction, Inventory, Location, LocationId, LockId, Qualifier, Thing, ThingId, ThingKind,
    World, WorldError,
};
