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

use hearth_common::{Inventory, Location, LocationId, Thing, ThingId, World, WorldError};
use tracing::{trace, warn};

use crate::commands::{CommandRegistry, Round, RoundOutcome};
use crate::config::Config;
use crate::tasks::CommandFailure;
use crate::tasks::command_parse::{ParsedCommand, parse_command};
use crate::tasks::held_locks::HeldLocks;
use crate::tasks::lock_list::LockList;
use crate::tasks::messages::{Buffers, Visibility};

/// Everything about one line of input as it makes its way through the interpreter. Lives for
/// the whole command, across however many rounds it takes for the lock set to settle.
pub struct CommandContext {
    actor: ThingId,
    /// Where the actor is; the location the command is relative to.
    location: Arc<Location>,
    keyword: String,
    words: Vec<String>,
    argstr: String,
    locks: LockList,
    ok: bool,
    msg: Buffers,
    /// Running as a sub-command, where the lock set can no longer grow.
    fixed: bool,
    missed_lock: bool,
}

/// What a sub-command displaces in its parent's context, to be put back afterwards.
pub(crate) struct Displaced {
    keyword: String,
    words: Vec<String>,
    argstr: String,
    ok: bool,
    fixed: bool,
    missed_lock: bool,
}

impl CommandContext {
    pub fn new(actor: ThingId, location: Arc<Location>, parsed: ParsedCommand) -> Self {
        Self {
            actor,
            locks: LockList::new(location.clone()),
            location,
            keyword: parsed.keyword,
            words: parsed.words,
            argstr: parsed.argstr,
            ok: false,
            msg: Buffers::new(),
            fixed: false,
            missed_lock: false,
        }
    }

    pub fn actor(&self) -> ThingId {
        self.actor
    }

    pub fn location(&self) -> &Arc<Location> {
        &self.location
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn argstr(&self) -> &str {
        &self.argstr
    }

    pub fn locks(&self) -> &LockList {
        &self.locks
    }

    pub fn ok(&self) -> bool {
        self.ok
    }

    pub fn msg(&mut self) -> &mut Buffers {
        &mut self.msg
    }

    pub(crate) fn missed_lock(&self) -> bool {
        self.missed_lock
    }

    /// Forget whatever the previous round said and did.
    pub(crate) fn begin_round(&mut self) {
        self.ok = false;
        self.missed_lock = false;
        self.msg.clear();
    }

    /// The actor turned out to be somewhere else: make that the anchor, locking it from now on.
    pub(crate) fn relocate(&mut self, location: Arc<Location>) {
        trace!(actor = %self.actor, from = %self.location.id(), to = %location.id(), "actor moved; following");
        self.locks.add(&location);
        self.location = location;
    }

    fn require(&mut self, location: &Arc<Location>, held: &HeldLocks<'_>) -> bool {
        if held.is_held(location.lock_id()) {
            return true;
        }
        if self.fixed {
            warn!(
                keyword = %self.keyword,
                location = %location.id(),
                "sub-command needs a location its parent didn't lock"
            );
            self.missed_lock = true;
            return false;
        }
        if self.locks.add(location) {
            trace!(keyword = %self.keyword, location = %location.id(), "lock set grew");
        }
        false
    }

    pub(crate) fn enter_subcommand(&mut self, parsed: ParsedCommand) -> Displaced {
        let displaced = Displaced {
            keyword: std::mem::replace(&mut self.keyword, parsed.keyword),
            words: std::mem::replace(&mut self.words, parsed.words),
            argstr: std::mem::replace(&mut self.argstr, parsed.argstr),
            ok: self.ok,
            fixed: self.fixed,
            missed_lock: self.missed_lock,
        };
        self.ok = false;
        self.fixed = true;
        self.missed_lock = false;
        displaced
    }

    /// Put the parent back, returning whether the sub-command succeeded.
    pub(crate) fn leave_subcommand(&mut self, displaced: Displaced) -> bool {
        let succeeded = self.ok && !self.missed_lock;
        self.keyword = displaced.keyword;
        self.words = displaced.words;
        self.argstr = displaced.argstr;
        self.ok = displaced.ok;
        self.fixed = displaced.fixed;
        self.missed_lock = displaced.missed_lock;
        succeeded
    }
}

/// A command's view of the world while it works out what to do. Everything locked so far can be
/// read; nothing can be changed.
pub struct PlanContext<'r, 'a> {
    ctx: &'r mut CommandContext,
    held: &'r HeldLocks<'a>,
    here: &'r Inventory,
    world: &'r World,
}

impl<'r, 'a> PlanContext<'r, 'a> {
    pub(crate) fn new(
        ctx: &'r mut CommandContext,
        held: &'r HeldLocks<'a>,
        world: &'r World,
    ) -> Result<Self, WorldError> {
        let here = held.inventory(ctx.location.id())?;
        Ok(Self {
            ctx,
            held,
            here,
            world,
        })
    }

    pub fn actor(&self) -> ThingId {
        self.ctx.actor
    }

    pub fn keyword(&self) -> &str {
        &self.ctx.keyword
    }

    pub fn words(&self) -> &[String] {
        &self.ctx.words
    }

    pub fn argstr(&self) -> &str {
        &self.ctx.argstr
    }

    pub fn world(&self) -> &'r World {
        self.world
    }

    /// The location the actor is in.
    pub fn location(&self) -> &Arc<Location> {
        &self.ctx.location
    }

    /// What's in the actor's location.
    pub fn here(&self) -> &'r Inventory {
        self.here
    }

    /// The actor themselves.
    pub fn me(&self) -> Option<&'r Thing> {
        self.here.find(self.ctx.actor)
    }

    /// The actor's name, for telling others what they did.
    pub fn my_name(&self) -> String {
        self.me()
            .map(|me| me.name().to_string())
            .unwrap_or_else(|| "Someone".to_string())
    }

    /// What the actor is carrying.
    pub fn carried(&self) -> &'r [Thing] {
        self.me().map(Thing::contents).unwrap_or_default()
    }

    /// The inventory of some other location, if this command has it locked.
    pub fn inventory(&self, location: LocationId) -> Option<&'r Inventory> {
        let held: &'r HeldLocks<'a> = self.held;
        held.inventory(location).ok()
    }

    /// Ask for `location` to be locked. True if it already is; otherwise the plan should give up
    /// for now, and will be run again once the lock is held.
    pub fn require(&mut self, location: &Arc<Location>) -> bool {
        self.ctx.require(location, self.held)
    }

    pub fn msg(&mut self) -> &mut Buffers {
        &mut self.ctx.msg
    }

    pub fn set_participant(&mut self, participant: ThingId) {
        self.ctx.msg.set_participant(Some(participant));
    }

    /// Tell the actor why the command can't be done, and plan nothing.
    pub fn reject<T>(&mut self, failure: CommandFailure) -> Option<T> {
        self.ctx.msg.actor().send(&failure.to_string());
        None
    }
}

/// A command's view of the world once its lock set has settled: everything it asked for is
/// locked, and can be changed.
pub struct CommitContext<'r, 'a> {
    ctx: &'r mut CommandContext,
    held: &'r mut HeldLocks<'a>,
    world: &'r World,
    registry: &'r CommandRegistry,
    config: &'r Config,
}

impl<'r, 'a> CommitContext<'r, 'a> {
    pub(crate) fn new(
        ctx: &'r mut CommandContext,
        held: &'r mut HeldLocks<'a>,
        world: &'r World,
        registry: &'r CommandRegistry,
        config: &'r Config,
    ) -> Self {
        Self {
            ctx,
            held,
            world,
            registry,
            config,
        }
    }

    pub fn actor(&self) -> ThingId {
        self.ctx.actor
    }

    pub fn argstr(&self) -> &str {
        &self.ctx.argstr
    }

    pub fn world(&self) -> &World {
        self.world
    }

    pub fn location(&self) -> &Arc<Location> {
        &self.ctx.location
    }

    pub fn here_mut(&mut self) -> Result<&mut Inventory, WorldError> {
        self.held.inventory_mut(self.ctx.location.id())
    }

    pub fn inventory(&self, location: LocationId) -> Result<&Inventory, WorldError> {
        self.held.inventory(location)
    }

    pub fn inventory_mut(&mut self, location: LocationId) -> Result<&mut Inventory, WorldError> {
        self.held.inventory_mut(location)
    }

    /// The actor themselves.
    pub fn me_mut(&mut self) -> Result<&mut Thing, WorldError> {
        let (actor, here) = (self.ctx.actor, self.ctx.location.id());
        self.held
            .inventory_mut(here)?
            .find_mut(actor)
            .ok_or(WorldError::ThingNotFound(actor, here))
    }

    pub fn transfer(
        &mut self,
        thing: ThingId,
        from: LocationId,
        to: LocationId,
    ) -> Result<(), WorldError> {
        self.held.transfer(self.world, thing, from, to)
    }

    /// The actor has moved to `location` (which must be locked): treat it as where they are for
    /// the rest of the command.
    pub fn relocate_anchor(&mut self, location: LocationId) -> Result<(), WorldError> {
        let location = self.world.location(location)?;
        if !self.held.is_held(location.lock_id()) {
            return Err(WorldError::NotLocked(location.id()));
        }
        self.ctx.location = location;
        Ok(())
    }

    pub fn msg(&mut self) -> &mut Buffers {
        &mut self.ctx.msg
    }

    pub fn succeed(&mut self) {
        self.ctx.ok = true;
    }

    /// Run another command as part of this one, using the locks and buffers already in hand.
    /// Audiences hidden by `visibility` don't hear what it says. The sub-command can't lock
    /// anything new; if it would need to, it fails. Returns whether it succeeded.
    pub fn script(&mut self, visibility: Visibility, input: &str) -> bool {
        let parsed = match parse_command(input, self.config) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(input, error = %e, "unparseable sub-command");
                return false;
            }
        };
        let Some(command) = self.registry.get(&parsed.keyword) else {
            warn!(keyword = %parsed.keyword, "unknown sub-command");
            return false;
        };

        let keyword = parsed.keyword.clone();
        let displaced = self.ctx.enter_subcommand(parsed);
        let previous = self.ctx.msg.visibility();
        self.ctx.msg.apply(previous.narrow(visibility));

        let mut round = Round {
            ctx: &mut *self.ctx,
            held: &mut *self.held,
            world: self.world,
            registry: self.registry,
            config: self.config,
        };
        let outcome = command.run(&mut round);

        self.ctx.msg.apply(previous);
        let succeeded = self.ctx.leave_subcommand(displaced);
        match outcome {
            Ok(RoundOutcome::Stable) => succeeded,
            Ok(RoundOutcome::Grew) => false,
            Err(e) => {
                warn!(keyword = %keyword, error = %e, "sub-command failed");
                false
            }
        }
    }
}
