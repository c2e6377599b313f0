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

use hearth_common::{ThingId, WorldError};
use thiserror::Error;

pub mod command_context;
pub mod command_parse;
pub mod held_locks;
pub mod interpreter;
pub mod lock_list;
pub mod messages;
pub mod sessions;

/// What happened to one line of input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandOutcome {
    /// The keyword that was run (or that wasn't recognized).
    pub keyword: String,
    /// Whether a command was registered for the keyword.
    pub recognized: bool,
    /// Whether the command reported success.
    pub ok: bool,
    /// How many times the command was planned before its lock set settled.
    pub rounds: usize,
}

/// Ways a command can fail that are the player's business rather than the system's. Reported to
/// the actor and otherwise treated as an ordinary, unsuccessful command.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CommandFailure {
    #[error("You see no '{0}' here.")]
    UnknownReference(String),
    #[error("You don't see that many '{0}' here.")]
    InsufficientQuantity(String),
    #[error("You can only do that to one thing at a time.")]
    AmbiguousMatch,
    #[error("Eh?")]
    UnrecognizedCommand,
}

/// Errors that stop a command from running at all.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    EmptyCommand,
    #[error("{0} is not anywhere in the world")]
    NotLocated(ThingId),
    #[error("Command {keyword} still needed more locks after {rounds} rounds")]
    LockRoundsExceeded { keyword: String, rounds: usize },
    #[error("Command {keyword} failed: {reason}")]
    HandlerFault { keyword: String, reason: String },
    #[error("World error: {0}")]
    World(#[from] WorldError),
}
