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

//! Resolution of the nouns in a player's command to the things they refer to.
//!
//! A command like `GET ALL GREEN BALL 2ND RED BOX` is a sequence of *groups*, each ending in an
//! alias, optionally preceded by qualifiers and then a quantifier. The resolver turns each group
//! into zero or more concrete things, or reports the span of words it couldn't make sense of.

use crate::model::Thing;

#[doc(hidden)]
pub mod mock_things;
mod quantifier;
mod resolver;

pub use quantifier::{Quantifier, parse_quantifier};
pub use resolver::{resolve, resolve_all, resolve_one};

/// The outcome of resolving one group (or part of one) of the word list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchResult<'t> {
    /// A thing matched by a group.
    Found(&'t Thing),
    /// Words that matched no alias in any of the searched collections.
    Unknown(String),
    /// A group whose quantifier asked for more things than there are.
    NotEnough(String),
}

impl<'t> MatchResult<'t> {
    pub fn found(&self) -> Option<&'t Thing> {
        match self {
            MatchResult::Found(thing) => Some(thing),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found(_))
    }
}
