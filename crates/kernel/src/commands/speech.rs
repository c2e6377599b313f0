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

//! Talking: to the room, to the neighbours, and to one other player.

use std::collections::BTreeSet;

use hearth_common::{Direction, LocationId, WorldError};

use crate::commands::{Command, CommandRegistry};
use crate::tasks::CommandFailure;
use crate::tasks::command_context::{CommitContext, PlanContext};

pub(crate) fn register_speech_commands(registry: &mut CommandRegistry) {
    registry.register(&["SAY"], Say);
    registry.register(&["EMOTE"], Emote { echo: true });
    registry.register(&["$ACTION"], Emote { echo: false });
    registry.register(&["SHOUT"], Shout);
    registry.register(&["TELL"], Tell);
    registry.register(&["WHISPER"], Whisper);
}

/// The first word of `text` and everything after it.
fn split_addressee(text: &str) -> Option<(&str, &str)> {
    let (name, message) = text.split_once(char::is_whitespace)?;
    let message = message.trim();
    (!message.is_empty()).then_some((name, message))
}

pub(crate) struct Speech {
    actor_name: String,
    text: String,
}

fn plan_speech(ctx: &mut PlanContext<'_, '_>, prompt: &str) -> Option<Speech> {
    if ctx.argstr().is_empty() {
        ctx.msg().actor().send(prompt);
        return None;
    }
    Some(Speech {
        actor_name: ctx.my_name(),
        text: ctx.argstr().to_string(),
    })
}

struct Say;

impl Command for Say {
    type Plan = Speech;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Speech> {
        plan_speech(ctx, "Say what?")
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, speech: Speech) -> Result<(), WorldError> {
        let here = ctx.location().id();
        ctx.msg()
            .actor()
            .send(&format!("You say: \"{}\"", speech.text));
        ctx.msg()
            .observer(here)
            .send(&format!("{} says: \"{}\"", speech.actor_name, speech.text));
        ctx.succeed();
        Ok(())
    }
}

/// Free-form action, seen by everyone present. Scripts use the silent form, which doesn't echo
/// back to the actor.
struct Emote {
    echo: bool,
}

impl Command for Emote {
    type Plan = Speech;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Speech> {
        plan_speech(ctx, "Emote what?")
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, speech: Speech) -> Result<(), WorldError> {
        let here = ctx.location().id();
        let action = format!("{} {}", speech.actor_name, speech.text);
        if self.echo {
            ctx.msg().actor().send(&action);
        }
        ctx.msg().observer(here).send(&action);
        ctx.succeed();
        Ok(())
    }
}

/// SHOUT: heard here, and in every location one exit away.
struct Shout;

impl Command for Shout {
    /// The speech, and each neighbouring location with the direction it lies in.
    type Plan = (Speech, Vec<(Direction, LocationId)>);

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Self::Plan> {
        let speech = plan_speech(ctx, "Shout what?")?;
        let here = ctx.location().clone();
        let mut seen = BTreeSet::from([here.id()]);
        let mut neighbours = vec![];
        let mut all_held = true;
        for (direction, to) in here.exits() {
            if !seen.insert(*to) {
                continue;
            }
            let Ok(neighbour) = ctx.world().location(*to) else {
                continue;
            };
            // Ask for every missing lock at once, rather than one per round.
            all_held &= ctx.require(&neighbour);
            neighbours.push((*direction, *to));
        }
        all_held.then_some((speech, neighbours))
    }

    fn commit(
        &self,
        ctx: &mut CommitContext<'_, '_>,
        (speech, neighbours): Self::Plan,
    ) -> Result<(), WorldError> {
        let here = ctx.location().id();
        ctx.msg()
            .actor()
            .send(&format!("You shout: \"{}\"", speech.text));
        ctx.msg()
            .observer(here)
            .send(&format!("{} shouts: \"{}\"", speech.actor_name, speech.text));
        for (direction, neighbour) in neighbours {
            ctx.msg().observer(neighbour).send(&format!(
                "Someone shouts from {}: \"{}\"",
                direction.opposite().source(),
                speech.text
            ));
        }
        ctx.succeed();
        Ok(())
    }
}

pub(crate) struct Message {
    actor_name: String,
    participant_name: String,
    text: String,
}

/// TELL another player something, wherever they are.
struct Tell;

impl Command for Tell {
    type Plan = Message;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Message> {
        let Some((name, text)) = split_addressee(ctx.argstr()) else {
            ctx.msg().actor().send("Tell whom what?");
            return None;
        };
        let (name, text) = (name.to_string(), text.to_string());
        let Some(participant) = ctx.world().lookup_player(&name) else {
            ctx.msg()
                .actor()
                .send(&format!("There is no one called '{name}'."));
            return None;
        };
        if participant == ctx.actor() {
            ctx.msg().actor().send("You mutter to yourself.");
            return None;
        }
        let Ok(location) = ctx.world().locate(participant) else {
            ctx.msg().actor().send(&format!("{name} isn't around."));
            return None;
        };
        if !ctx.require(&location) {
            return None;
        }
        let Some(participant_thing) = ctx
            .inventory(location.id())
            .and_then(|inventory| inventory.find(participant))
        else {
            ctx.msg().actor().send(&format!("{name} isn't around."));
            return None;
        };
        let participant_name = participant_thing.name().to_string();
        ctx.set_participant(participant);
        Some(Message {
            actor_name: ctx.my_name(),
            participant_name,
            text,
        })
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, message: Message) -> Result<(), WorldError> {
        ctx.msg().actor().send(&format!(
            "You tell {}: \"{}\"",
            message.participant_name, message.text
        ));
        ctx.msg().participant().send(&format!(
            "{} tells you: \"{}\"",
            message.actor_name, message.text
        ));
        ctx.succeed();
        Ok(())
    }
}

/// WHISPER to another player in the same location. Others present notice, but don't hear what.
struct Whisper;

impl Command for Whisper {
    type Plan = Message;

    fn plan(&self, ctx: &mut PlanContext<'_, '_>) -> Option<Message> {
        let Some((name, text)) = split_addressee(ctx.argstr()) else {
            ctx.msg().actor().send("Whisper what to whom?");
            return None;
        };
        let (name, text) = (name.to_uppercase(), text.to_string());
        let Some(participant) = ctx
            .here()
            .players()
            .iter()
            .find(|p| p.has_alias(&name) && p.id() != ctx.actor())
        else {
            return ctx.reject(CommandFailure::UnknownReference(name));
        };
        ctx.set_participant(participant.id());
        Some(Message {
            actor_name: ctx.my_name(),
            participant_name: participant.name().to_string(),
            text,
        })
    }

    fn commit(&self, ctx: &mut CommitContext<'_, '_>, message: Message) -> Result<(), WorldError> {
        let here = ctx.location().id();
        ctx.msg().actor().send(&format!(
            "You whisper to {}: \"{}\"",
            message.participant_name, message.text
        ));
        ctx.msg().participant().send(&format!(
            "{} whispers to you: \"{}\"",
            message.actor_name, message.text
        ));
        ctx.msg().observer(here).send(&format!(
            "{} whispers something to {}.",
            message.actor_name, message.participant_name
        ));
        ctx.succeed();
        Ok(())
    }
}
