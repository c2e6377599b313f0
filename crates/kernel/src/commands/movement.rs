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

use std::str::FromStr;

use hearth_common::{Direction, LocationId, WorldError};
use strum::IntoEnumIterator;

use crate::commands::{Command, CommandRegistry};
use crate::tasks::CommandFailure;
use crate::tasks::command_context::{CommitContext, PlanContext};
use crate::tasks::messages::Visibility;

pub(crate) fn register_movement_commands(registry: &mut CommandRegistry) {
    for direction in Direction::iter() {
        let long = direction.to_string();
        let short = short_form(direction);
        registry.register(&[long.as_str(), short], Go(Some(direction)));
    }
    registry.register(&["GO"], Go(None));
    registry.register(&["$POOF"], Poof);
}

fn short_form(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "N",
        Direction::Northeast => "NE",
        Direction::East => "E",
        Direction::Southeast => "SE",
        Direction::South => "S",
        Direction::Southwest => "SW",
        Direction::West => "W",
        Direction::Northwest => "NW",
        Direction::Up => "U",
        Direction::Down => "D",
    }
}

pub(crate) struct Journey {
    direction: Direction,
    from: LocationId,
    to: LocationId,
    actor_name: String,
}

/// Move the actor through an exit. `Go(None)` takes the direction from the first word.
struct Go(Option<Direction>);

impl Command for Go {
    type Plan = Journey;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Journey> {
        let direction = match self.0 {
            Some(direction) => direction,
            None => match ctx.words().first().map(|w| Direction::from_str(w)) {
                Some(Ok(direction)) => direction,
                Some(Err(_)) => return ctx.reject(CommandFailure::UnrecognizedCommand),
                None => {
                    ctx.msg().actor().send("Go where?");
                    return None;
                }
            },
        };
        let from = ctx.location().clone();
        let Some(to) = from.exit(direction) else {
            ctx.msg().actor().send("You can't go that way.");
            return None;
        };
        let destination = match ctx.world().location(to) {
            Ok(destination) => destination,
            Err(_) => {
                ctx.msg().actor().send("You can't go that way.");
                return None;
            }
        };
        if !ctx.require(&destination) {
            return None;
        }
        Some(Journey {
            direction,
            from: from.id(),
            to,
            actor_name: ctx.my_name(),
        })
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, journey: Journey) -> Result<(), WorldError> {
        let actor = ctx.actor();
        ctx.transfer(actor, journey.from, journey.to)?;
        ctx.msg().observer(journey.from).send(&format!(
            "{} goes {}.",
            journey.actor_name,
            journey.direction.name()
        ));
        ctx.msg().observer(journey.to).send(&format!(
            "{} arrives from {}.",
            journey.actor_name,
            journey.direction.opposite().source()
        ));
        ctx.relocate_anchor(journey.to)?;
        ctx.script(Visibility::ACTOR_ONLY, "LOOK");
        ctx.succeed();
        Ok(())
    }
}

/// Announce the actor's sudden appearance, e.g. on connecting, and show them where they are.
struct Poof;

impl Command for Poof {
    type Plan = String;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<String> {
        Some(ctx.my_name())
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, actor_name: String) -> Result<(), WorldError> {
        let here = ctx.location().id();
        ctx.msg()
            .observer(here)
            .send(&format!("{actor_name} appears in a puff of smoke."));
        ctx.script(Visibility::ACTOR_ONLY, "LOOK");
        ctx.succeed();
        Ok(())
    }
}
