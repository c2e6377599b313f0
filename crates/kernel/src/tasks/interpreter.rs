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

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use hearth_common::{ThingId, World};
use tracing::{debug, error, trace, warn};

use crate::commands::{CommandRegistry, DynCommand, Round, RoundOutcome};
use crate::config::Config;
use crate::tasks::command_context::CommandContext;
use crate::tasks::command_parse::{ParsedCommand, parse_command};
use crate::tasks::held_locks::HeldLocks;
use crate::tasks::sessions::{SessionError, SessionRegistry};
use crate::tasks::{CommandError, CommandOutcome};

const HANDLER_FAULT_MESSAGE: &str = "Something went wrong, and nothing happened.";

/// Runs players' (and scripts') commands against the world.
///
/// Any number of threads may call into one interpreter at once; commands touching disjoint
/// locations run in parallel, and commands touching the same locations take turns. Every
/// command locks locations in ascending lock id order, so no set of commands can deadlock.
pub struct Interpreter {
    world: Arc<World>,
    registry: Arc<CommandRegistry>,
    sessions: Arc<SessionRegistry>,
    config: Arc<Config>,
}

impl Interpreter {
    pub fn new(
        world: Arc<World>,
        registry: Arc<CommandRegistry>,
        sessions: Arc<SessionRegistry>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            world,
            registry,
            sessions,
            config,
        }
    }

    pub fn world(&self) -> &Arc<World> {
        &self.world
    }

    pub fn sessions(&self) -> &Arc<SessionRegistry> {
        &self.sessions
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Run a line typed by a player.
    pub fn parse(&self, actor: ThingId, input: &str) -> Result<CommandOutcome, CommandError> {
        self.run(actor, input, false)
    }

    /// Run a line on behalf of a script, which may also use commands reserved for scripts.
    pub fn script(&self, actor: ThingId, input: &str) -> Result<CommandOutcome, CommandError> {
        self.run(actor, input, true)
    }

    fn run(
        &self,
        actor: ThingId,
        input: &str,
        privileged: bool,
    ) -> Result<CommandOutcome, CommandError> {
        let parsed = parse_command(input, &self.config)?;
        let reserved = parsed.keyword.starts_with(self.config.script_prefix);
        let command = if reserved && !privileged {
            None
        } else {
            self.registry.get(&parsed.keyword)
        };
        let Some(command) = command else {
            debug!(actor = %actor, keyword = %parsed.keyword, "unrecognized command");
            self.deliver(vec![(actor, self.config.unknown_command_message.clone())]);
            return Ok(CommandOutcome {
                keyword: parsed.keyword,
                recognized: false,
                ok: false,
                rounds: 0,
            });
        };
        self.execute(actor, parsed, command.as_ref())
    }

    /// Run `command` until its lock set settles, then deliver what it had to say.
    fn execute(
        &self,
        actor: ThingId,
        parsed: ParsedCommand,
        command: &dyn DynCommand,
    ) -> Result<CommandOutcome, CommandError> {
        let anchor = self
            .world
            .locate(actor)
            .map_err(|_| CommandError::NotLocated(actor))?;
        let mut ctx = CommandContext::new(actor, anchor, parsed);
        let mut rounds = 0;

        let deliveries = loop {
            if rounds >= self.config.max_lock_rounds {
                error!(actor = %actor, keyword = %ctx.keyword(), rounds, locks = ctx.locks().len(),
                    "command never settled on a lock set; abandoning");
                return Err(CommandError::LockRoundsExceeded {
                    keyword: ctx.keyword().to_string(),
                    rounds,
                });
            }
            rounds += 1;

            let locations = ctx.locks().snapshot();
            let mut held = HeldLocks::acquire(&locations);
            trace!(actor = %actor, keyword = %ctx.keyword(), round = rounds, locks = locations.len(), "locks held");

            // The actor may have moved while we were waiting. If so, follow them.
            let present = held
                .inventory(ctx.location().id())
                .is_ok_and(|inventory| inventory.contains(actor));
            if !present {
                let location = self
                    .world
                    .locate(actor)
                    .map_err(|_| CommandError::NotLocated(actor))?;
                if location.id() == ctx.location().id() {
                    return Err(CommandError::NotLocated(actor));
                }
                ctx.relocate(location);
                continue;
            }

            ctx.begin_round();
            let mut round = Round {
                ctx: &mut ctx,
                held: &mut held,
                world: &self.world,
                registry: &self.registry,
                config: &self.config,
            };
            let outcome = catch_unwind(AssertUnwindSafe(|| command.run(&mut round)));
            match outcome {
                Ok(Ok(RoundOutcome::Grew)) => continue,
                Ok(Ok(RoundOutcome::Stable)) => {
                    debug!(actor = %actor, keyword = %ctx.keyword(), rounds, ok = ctx.ok(), "command settled");
                    break ctx.msg().deliveries(actor, &held);
                }
                Ok(Err(e)) => {
                    drop(held);
                    return Err(self.fault(actor, ctx.keyword(), e.to_string()));
                }
                Err(panic) => {
                    drop(held);
                    let reason = panic
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| panic.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "panic".to_string());
                    return Err(self.fault(actor, ctx.keyword(), reason));
                }
            }
        };

        self.deliver(deliveries);
        Ok(CommandOutcome {
            keyword: ctx.keyword().to_string(),
            recognized: true,
            ok: ctx.ok(),
            rounds,
        })
    }

    fn fault(&self, actor: ThingId, keyword: &str, reason: String) -> CommandError {
        error!(actor = %actor, keyword, reason = %reason, "command failed unexpectedly");
        self.deliver(vec![(actor, HANDLER_FAULT_MESSAGE.to_string())]);
        CommandError::HandlerFault {
            keyword: keyword.to_string(),
            reason,
        }
    }

    /// Send output to whoever is connected. Never called with locks held.
    fn deliver(&self, deliveries: Vec<(ThingId, String)>) {
        for (player, text) in deliveries {
            match self.sessions.send(player, &text) {
                Ok(()) => {}
                Err(SessionError::NoConnectionForPlayer(_)) => {
                    trace!(player = %player, "not connected; output dropped");
                }
                Err(e) => warn!(player = %player, error = %e, "could not deliver output"),
            }
        }
    }
}
