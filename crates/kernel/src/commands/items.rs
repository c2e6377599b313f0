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

//! Picking things up, putting them down, and putting them in other things.

use hearth_common::matching::{resolve_all, resolve_one};
use hearth_common::util::{capitalize, english_list};
use hearth_common::{Thing, ThingId, WorldError};

use crate::commands::{Command, CommandRegistry, found};
use crate::tasks::CommandFailure;
use crate::tasks::command_context::{CommitContext, PlanContext};

pub(crate) fn register_item_commands(registry: &mut CommandRegistry) {
    registry.register(&["GET"], Get);
    registry.register(&["TAKE"], Take);
    registry.register(&["DROP"], DropThings);
    registry.register(&["PUT"], Put);
    registry.register(&["JUNK"], Junk);
}

/// Things to act on, by id, with how to describe them.
pub(crate) struct Selection {
    ids: Vec<ThingId>,
    names: String,
    actor_name: String,
}

impl Selection {
    fn of(things: &[&Thing], actor_name: String) -> Self {
        let names: Vec<&str> = things.iter().map(|t| t.name()).collect();
        Self {
            ids: things.iter().map(|t| t.id()).collect(),
            names: english_list(&names),
            actor_name,
        }
    }
}

/// Where a container the actor named is.
#[derive(Copy, Clone)]
pub(crate) struct ContainerRef {
    id: ThingId,
    carried: bool,
}

fn give_actor(ctx: &mut CommitContext<'_, '_>, thing: Thing) -> Result<(), WorldError> {
    let actor = ctx.actor();
    ctx.me_mut()?
        .put(thing)
        .map_err(|_| WorldError::NotAContainer(actor))
}

fn take_from_actor(ctx: &mut CommitContext<'_, '_>, id: ThingId) -> Result<Thing, WorldError> {
    let here = ctx.location().id();
    ctx.me_mut()?
        .take(id)
        .ok_or(WorldError::ThingNotFound(id, here))
}

fn container_mut<'c>(
    ctx: &'c mut CommitContext<'_, '_>,
    container: ContainerRef,
) -> Result<&'c mut Thing, WorldError> {
    let here = ctx.location().id();
    let found = if container.carried {
        ctx.me_mut()?.find_mut(container.id)
    } else {
        ctx.here_mut()?.find_mut(container.id)
    };
    found.ok_or(WorldError::ThingNotFound(container.id, here))
}

/// Resolve the single container named by the last group of words, returning the words before
/// it. Carried things are searched before things lying around.
fn plan_container<'r>(
    ctx: &mut PlanContext<'r, '_>,
    words: &[String],
) -> Option<(&'r Thing, ContainerRef, usize)> {
    let carried = ctx.carried();
    let here = ctx.here();
    let (results, rest) = resolve_one(words, &[carried, here.contents()]);
    let things = match found(results) {
        Ok(things) => things,
        Err(failure) => return ctx.reject(failure),
    };
    let [container] = things.as_slice() else {
        return ctx.reject(CommandFailure::AmbiguousMatch);
    };
    if !container.is_container() {
        ctx.msg()
            .actor()
            .send(&format!("{} can't hold anything.", capitalize(container.name())));
        return None;
    }
    let reference = ContainerRef {
        id: container.id(),
        carried: carried.iter().any(|t| t.id() == container.id()),
    };
    Some((*container, reference, rest.len()))
}

/// GET things lying in the actor's location.
struct Get;

impl Command for Get {
    type Plan = Selection;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Selection> {
        if ctx.words().is_empty() {
            ctx.msg().actor().send("Get what?");
            return None;
        }
        let here = ctx.here();
        let words = ctx.words().to_vec();
        let things = match found(resolve_all(
            &words,
            &[here.contents(), here.narratives(), here.players()],
        )) {
            Ok(things) => things,
            Err(failure) => return ctx.reject(failure),
        };
        if let Some(fixed) = things.iter().find(|t| t.is_narrative() || t.is_player()) {
            ctx.msg()
                .actor()
                .send(&format!("You can't take {}.", fixed.name()));
            return None;
        }
        Some(Selection::of(&things, ctx.my_name()))
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, plan: Selection) -> Result<(), WorldError> {
        let here = ctx.location().id();
        for id in &plan.ids {
            let thing = ctx
                .here_mut()?
                .remove(*id)
                .ok_or(WorldError::ThingNotFound(*id, here))?;
            give_actor(ctx, thing)?;
        }
        ctx.msg().actor().send(&format!("You take {}.", plan.names));
        ctx.msg()
            .observer(here)
            .send(&format!("{} takes {}.", plan.actor_name, plan.names));
        ctx.succeed();
        Ok(())
    }
}

/// TAKE things out of a container: `TAKE BALL [FROM] BOX`.
struct Take;

impl Command for Take {
    type Plan = (Selection, ContainerRef, String);

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Self::Plan> {
        let words = ctx.words().to_vec();
        if words.len() < 2 {
            ctx.msg().actor().send("Take what from what?");
            return None;
        }
        let (container, reference, unconsumed) = plan_container(ctx, &words)?;
        let rest = &words[..unconsumed];
        if rest.is_empty() {
            ctx.msg()
                .actor()
                .send(&format!("Take what from {}?", container.name()));
            return None;
        }
        let things = match found(resolve_all(rest, &[container.contents()])) {
            Ok(things) => things,
            Err(failure) => return ctx.reject(failure),
        };
        let selection = Selection::of(&things, ctx.my_name());
        Some((selection, reference, container.name().to_string()))
    }

    fn commit(
        &self,
        ctx: &mut CommitContext<'_, '_>,
        (plan, container, container_name): Self::Plan,
    ) -> Result<(), WorldError> {
        let here = ctx.location().id();
        let mut taken = Vec::with_capacity(plan.ids.len());
        {
            let holder = container_mut(ctx, container)?;
            for id in &plan.ids {
                taken.push(
                    holder
                        .take(*id)
                        .ok_or(WorldError::ThingNotFound(*id, here))?,
                );
            }
        }
        for thing in taken {
            give_actor(ctx, thing)?;
        }
        ctx.msg()
            .actor()
            .send(&format!("You take {} from {}.", plan.names, container_name));
        ctx.msg().observer(here).send(&format!(
            "{} takes {} from {}.",
            plan.actor_name, plan.names, container_name
        ));
        ctx.succeed();
        Ok(())
    }
}

/// DROP carried things.
struct DropThings;

impl Command for DropThings {
    type Plan = Selection;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Selection> {
        if ctx.words().is_empty() {
            ctx.msg().actor().send("Drop what?");
            return None;
        }
        let words = ctx.words().to_vec();
        let things = match found(resolve_all(&words, &[ctx.carried()])) {
            Ok(things) => things,
            Err(failure) => return ctx.reject(failure),
        };
        Some(Selection::of(&things, ctx.my_name()))
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, plan: Selection) -> Result<(), WorldError> {
        let here = ctx.location().id();
        for id in &plan.ids {
            let thing = take_from_actor(ctx, *id)?;
            ctx.here_mut()?.add(thing);
        }
        ctx.msg().actor().send(&format!("You drop {}.", plan.names));
        ctx.msg()
            .observer(here)
            .send(&format!("{} drops {}.", plan.actor_name, plan.names));
        ctx.succeed();
        Ok(())
    }
}

/// PUT carried things into a container: `PUT BALL [IN] BOX`.
struct Put;

impl Command for Put {
    type Plan = (Selection, ContainerRef, String);

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Self::Plan> {
        let words = ctx.words().to_vec();
        if words.len() < 2 {
            ctx.msg().actor().send("Put what in what?");
            return None;
        }
        let (container, reference, unconsumed) = plan_container(ctx, &words)?;
        let rest = &words[..unconsumed];
        if rest.is_empty() {
            ctx.msg()
                .actor()
                .send(&format!("Put what in {}?", container.name()));
            return None;
        }
        let things = match found(resolve_all(rest, &[ctx.carried()])) {
            Ok(things) => things,
            Err(failure) => return ctx.reject(failure),
        };
        if things.iter().any(|t| t.id() == container.id()) {
            ctx.msg()
                .actor()
                .send(&format!("You can't put {} inside itself.", container.name()));
            return None;
        }
        let selection = Selection::of(&things, ctx.my_name());
        Some((selection, reference, container.name().to_string()))
    }

    fn commit(
        &self,
        ctx: &mut CommitContext<'_, '_>,
        (plan, container, container_name): Self::Plan,
    ) -> Result<(), WorldError> {
        let here = ctx.location().id();
        let mut moving = Vec::with_capacity(plan.ids.len());
        for id in &plan.ids {
            moving.push(take_from_actor(ctx, *id)?);
        }
        let holder = container_mut(ctx, container)?;
        for thing in moving {
            holder
                .put(thing)
                .map_err(|_| WorldError::NotAContainer(container.id))?;
        }
        ctx.msg()
            .actor()
            .send(&format!("You put {} in {}.", plan.names, container_name));
        ctx.msg().observer(here).send(&format!(
            "{} puts {} in {}.",
            plan.actor_name, plan.names, container_name
        ));
        ctx.succeed();
        Ok(())
    }
}

/// JUNK things, carried or lying around, for good. Whatever is inside them goes too.
struct Junk;

impl Command for Junk {
    /// Things, and whether each is carried.
    type Plan = (Selection, Vec<bool>);

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Self::Plan> {
        if ctx.words().is_empty() {
            ctx.msg().actor().send("Junk what?");
            return None;
        }
        let words = ctx.words().to_vec();
        let carried = ctx.carried();
        let here = ctx.here();
        let things = match found(resolve_all(
            &words,
            &[carried, here.contents(), here.narratives(), here.players()],
        )) {
            Ok(things) => things,
            Err(failure) => return ctx.reject(failure),
        };
        if let Some(fixed) = things.iter().find(|t| t.is_narrative() || t.is_player()) {
            ctx.msg()
                .actor()
                .send(&format!("You can't junk {}.", fixed.name()));
            return None;
        }
        let in_hand = things
            .iter()
            .map(|thing| carried.iter().any(|c| c.id() == thing.id()))
            .collect();
        Some((Selection::of(&things, ctx.my_name()), in_hand))
    }

    fn commit(
        &self,
        ctx: &mut CommitContext<'_, '_>,
        (plan, in_hand): Self::Plan,
    ) -> Result<(), WorldError> {
        let here = ctx.location().id();
        for (id, carried) in plan.ids.iter().zip(in_hand) {
            if carried {
                take_from_actor(ctx, *id)?;
            } else {
                ctx.here_mut()?
                    .remove(*id)
                    .ok_or(WorldError::ThingNotFound(*id, here))?;
            }
        }
        ctx.msg().actor().send(&format!("You junk {}.", plan.names));
        ctx.msg()
            .observer(here)
            .send(&format!("{} junks {}.", plan.actor_name, plan.names));
        ctx.succeed();
        Ok(())
    }
}
