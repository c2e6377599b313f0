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

use hearth_common::matching::resolve_all;
use hearth_common::util::english_list;
use hearth_common::{Inventory, Location, Thing, ThingId, WorldError};

use crate::commands::{Command, CommandRegistry, found};
use crate::tasks::CommandFailure;
use crate::tasks::command_context::{CommitContext, PlanContext};

pub(crate) fn register_look_commands(registry: &mut CommandRegistry) {
    registry.register(&["LOOK", "L"], Look);
    registry.register(&["EXAMINE", "EXAM", "X"], Examine);
    registry.register(&["INVENTORY", "INV", "I"], TakeInventory);
}

fn names(things: &[Thing]) -> Vec<&str> {
    things.iter().map(Thing::name).collect()
}

/// Name, description, and everything to be seen in a location.
fn describe_location(location: &Location, inventory: &Inventory, actor: ThingId) -> String {
    let mut text = location.name().to_string();
    if !location.description().is_empty() {
        text.push('\n');
        text.push_str(location.description());
    }
    if !inventory.contents().is_empty() {
        text.push_str(&format!(
            "\nYou see {} here.",
            english_list(&names(inventory.contents()))
        ));
    }
    let others: Vec<&str> = inventory
        .players()
        .iter()
        .filter(|p| p.id() != actor)
        .map(Thing::name)
        .collect();
    match others.len() {
        0 => {}
        1 => text.push_str(&format!("\n{} is here.", others[0])),
        _ => text.push_str(&format!("\n{} are here.", english_list(&others))),
    }
    let exits: Vec<String> = location.exits().keys().map(|d| d.name()).collect();
    if exits.is_empty() {
        text.push_str("\nThere are no obvious exits.");
    } else {
        text.push_str(&format!("\nExits: {}.", english_list(&exits)));
    }
    text
}

fn describe_thing(thing: &Thing) -> String {
    let mut text = match thing.description() {
        "" => format!("You see nothing special about {}.", thing.name()),
        description => description.to_string(),
    };
    if thing.is_container() && !thing.is_player() {
        match thing.contents() {
            [] => text.push_str(" It is empty."),
            contents => text.push_str(&format!(" It contains {}.", english_list(&names(contents)))),
        }
    }
    text
}

struct Look;

impl Command for Look {
    type Plan = String;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<String> {
        if !ctx.words().is_empty() {
            return Examine.plan(ctx).map(|(description, _)| description);
        }
        Some(describe_location(ctx.location(), ctx.here(), ctx.actor()))
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, description: String) -> Result<(), WorldError> {
        ctx.msg().actor().send(&description);
        ctx.succeed();
        Ok(())
    }
}

struct Examine;

impl Command for Examine {
    /// The description, and what observers are told.
    type Plan = (String, String);

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<(String, String)> {
        if ctx.words().is_empty() {
            ctx.msg().actor().send("Examine what?");
            return None;
        }
        let here = ctx.here();
        let words = ctx.words().to_vec();
        let collections = [ctx.carried(), here.contents(), here.narratives(), here.players()];
        let things = match found(resolve_all(&words, &collections)) {
            Ok(things) => things,
            Err(failure) => return ctx.reject(failure),
        };
        let [thing] = things.as_slice() else {
            return ctx.reject(CommandFailure::AmbiguousMatch);
        };
        let observed = format!("{} examines {}.", ctx.my_name(), thing.name());
        Some((describe_thing(thing), observed))
    }

    fn commit(
        &self,
        ctx: &mut CommitContext<'_, '_>,
        (description, observed): (String, String),
    ) -> Result<(), WorldError> {
        let here = ctx.location().id();
        ctx.msg().actor().send(&description);
        ctx.msg().observer(here).send(&observed);
        ctx.succeed();
        Ok(())
    }
}

struct TakeInventory;

impl Command for TakeInventory {
    type Plan = String;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<String> {
        let carried = ctx.carried();
        if carried.is_empty() {
            return Some("You are empty handed.".to_string());
        }
        Some(format!(
            "You are carrying {}.",
            english_list(&names(carried))
        ))
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, listing: String) -> Result<(), WorldError> {
        ctx.msg().actor().send(&listing);
        ctx.succeed();
        Ok(())
    }
}
