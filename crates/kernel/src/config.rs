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

//! Config is created by the host and handed to the interpreter, where it's available to command
//! parsing and the execution loop. Holds things typically configured by CLI flags or a config
//! file.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_LOCK_ROUNDS: usize = 64;

pub const DEFAULT_STOP_WORDS: [&str; 9] =
    ["A", "AN", "THE", "OF", "FROM", "IN", "INTO", "OUT", "SOME"];

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Words dropped from a command's arguments before matching, e.g. "the" in "get the ball".
    /// The original text is still available to commands that echo it.
    pub stop_words: Vec<String>,
    /// Leading character reserving a command keyword for scripts (`$POOF`). Such commands
    /// can't be typed by players.
    pub script_prefix: char,
    /// How many times a command may grow its lock set before it is abandoned. Commands normally
    /// settle in a handful of rounds; hitting this means a command keeps asking for new locks.
    pub max_lock_rounds: usize,
    /// What a player is told when their command keyword isn't known.
    pub unknown_command_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            script_prefix: '$',
            max_lock_rounds: DEFAULT_MAX_LOCK_ROUNDS,
            unknown_command_message: "Eh?".to_string(),
        }
    }
}

impl Config {
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }
}
