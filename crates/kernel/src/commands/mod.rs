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

//! The command set, and the trait commands implement.

use std::collections::HashMap;
use std::sync::Arc;

use hearth_common::matching::MatchResult;
use hearth_common::{Thing, World, WorldError};
use tracing::{debug, error};

use crate::commands::items::register_item_commands;
use crate::commands::look::register_look_commands;
use crate::commands::movement::register_movement_commands;
use crate::commands::speech::register_speech_commands;
use crate::config::Config;
use crate::tasks::CommandFailure;
use crate::tasks::command_context::{CommandContext, CommitContext, PlanContext};
use crate::tasks::held_locks::HeldLocks;

mod items;
mod look;
mod movement;
mod speech;

/// A command, split in two so that nothing is changed until everything it touches is locked.
///
/// `plan` may be run any number of times: once per round, until a round passes in which it
/// asked for no new locks. It sees the world read-only, works out what the command will do, and
/// says why it can't when it can't. `commit` runs at most once, straight after the final plan
/// under the same locks, and carries it out.
pub trait Command: Send + Sync {
    /// What `plan` hands on to `commit`. Usually the ids of the things to act on.
    type Plan;

    /// Returns `None` if there's nothing to commit: the command failed, or it is waiting on
    /// locks it has just asked for.
    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Self::Plan>;

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, plan: Self::Plan) -> Result<(), WorldError>;
}

/// Whether a round settled the command's lock set.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum RoundOutcome {
    /// The plan asked for more locks; run it again with them held.
    Grew,
    /// The plan asked for nothing new, and has been committed if there was anything to commit.
    Stable,
}

/// One attempt at running a command, under one set of held locks.
pub(crate) struct Round<'r, 'a> {
    pub(crate) ctx: &'r mut CommandContext,
    pub(crate) held: &'r mut HeldLocks<'a>,
    pub(crate) world: &'r World,
    pub(crate) registry: &'r CommandRegistry,
    pub(crate) config: &'r Config,
}

/// Object-safe face of `Command`, so commands with different plan types can share a registry.
pub(crate) trait DynCommand: Send + Sync {
    fn run(&self, round: &mut Round<'_, '_>) -> Result<RoundOutcome, WorldError>;
}

impl<C: Command> DynCommand for C {
    fn run(&self, round: &mut Round<'_, '_>) -> Result<RoundOutcome, WorldError> {
        let generation = round.ctx.locks().generation();
        let plan = {
            let mut plan_ctx = PlanContext::new(round.ctx, round.held, round.world)?;
            self.plan(&mut plan_ctx)
        };
        if round.ctx.locks().generation() != generation {
            return Ok(RoundOutcome::Grew);
        }
        if round.ctx.missed_lock() {
            return Ok(RoundOutcome::Stable);
        }
        if let Some(plan) = plan {
            debug!(keyword = %round.ctx.keyword(), actor = %round.ctx.actor(), "committing");
            let mut commit_ctx = CommitContext::new(
                round.ctx,
                round.held,
                round.world,
                round.registry,
                round.config,
            );
            if let Err(e) = self.commit(&mut commit_ctx, plan) {
                error!(keyword = %round.ctx.keyword(), error = %e, "commit failed part way");
                return Err(e);
            }
        }
        Ok(RoundOutcome::Stable)
    }
}

/// Turn match results into the things they found, or the first reason they didn't.
pub fn found<'t>(results: Vec<MatchResult<'t>>) -> Result<Vec<&'t Thing>, CommandFailure> {
    results
        .into_iter()
        .map(|result| match result {
            MatchResult::Found(thing) => Ok(thing),
            MatchResult::Unknown(span) => Err(CommandFailure::UnknownReference(span)),
            MatchResult::NotEnough(span) => Err(CommandFailure::InsufficientQuantity(span)),
        })
        .collect()
}

/// The table of commands, by keyword. Built once at startup and shared, read-only, by everything
/// that runs commands.
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn DynCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// The full command set.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        register_look_commands(&mut registry);
        register_item_commands(&mut registry);
        register_movement_commands(&mut registry);
        register_speech_commands(&mut registry);
        registry
    }

    /// No commands at all; for building up a custom set.
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register `command` under each of `keywords`.
    pub fn register<C: Command + 'static>(&mut self, keywords: &[&str], command: C) {
        let command: Arc<dyn DynCommand> = Arc::new(command);
        for keyword in keywords {
            self.commands
                .insert(keyword.to_uppercase(), command.clone());
        }
    }

    pub(crate) fn get(&self, keyword: &str) -> Option<Arc<dyn DynCommand>> {
        self.commands.get(keyword).cloned()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.commands.contains_key(keyword)
    }

    /// Every registered keyword, sorted.
    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }
}

#[cfg(test)]
mod tests {
    use hearth_common::matching::MatchResult;
    use hearth_common::Thing;

    use crate::commands::{CommandRegistry, found};
    use crate::tasks::CommandFailure;

    #[test]
    fn test_found_stops_at_first_failure() {
        let ball = Thing::item("a ball", "BALL");
        assert_eq!(
            found(vec![MatchResult::Found(&ball)]).unwrap(),
            vec![&ball]
        );
        assert_eq!(
            found(vec![
                MatchResult::Found(&ball),
                MatchResult::NotEnough("3 BALLS".to_string()),
                MatchResult::Unknown("FROG".to_string()),
            ]),
            Err(CommandFailure::InsufficientQuantity("3 BALLS".to_string()))
        );
    }

    #[test]
    fn test_registry_keywords() {
        let registry = CommandRegistry::new();
        for keyword in ["LOOK", "L", "GET", "N", "NORTH", "GO", "SAY", "SHOUT", "$POOF"] {
            assert!(registry.contains(keyword), "{keyword} missing");
        }
        assert!(!registry.contains("look"));
        let keywords = registry.keywords();
        assert!(keywords.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(CommandRegistry::empty().keywords().is_empty());
    }
}
