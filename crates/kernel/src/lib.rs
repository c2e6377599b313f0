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

//! The hearth command kernel.
//!
//! Player input is parsed into a keyword and argument words, the keyword is looked up in the
//! [`commands::CommandRegistry`], and the command is run by the [`tasks::Interpreter`] under
//! whatever set of location locks it turns out to need. Commands discover that set as they go:
//! each round acquires the currently known locks in ascending order and plans the command; a
//! plan that asks for more locks sends the command round again, and only a plan that asked for
//! nothing new is committed.

pub use crate::commands::{Command, CommandRegistry};
pub use crate::config::Config;
pub use crate::tasks::interpreter::Interpreter;
pub use crate::tasks::sessions::{Session, SessionError, SessionRegistry};
pub use crate::tasks::{CommandError, CommandFailure, CommandOutcome};

pub mod commands;
pub mod config;
pub mod tasks;

#[doc(hidden)]
pub mod testing;
