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

//! Output produced by a command, held back until the command has settled.
//!
//! A command writes to up to three audiences: the actor, an optional participant (someone the
//! actor addressed, possibly elsewhere), and the observers at each location the command has
//! locked. Nothing is sent until the command commits; a round that grows the lock set throws its
//! output away along with its plan.

use std::collections::BTreeMap;

use hearth_common::{LocationId, ThingId};
use tracing::warn;

use crate::tasks::held_locks::HeldLocks;

/// Line-oriented text for one audience.
#[derive(Clone, Debug, Default)]
pub struct Buffer {
    text: String,
    silent: bool,
}

impl Buffer {
    /// Start a new line.
    pub fn send(&mut self, text: &str) -> &mut Self {
        if self.silent {
            return self;
        }
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(text);
        self
    }

    /// Continue the current line.
    pub fn append(&mut self, text: &str) -> &mut Self {
        if self.silent {
            return self;
        }
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push(' ');
        }
        self.text.push_str(text);
        self
    }

    /// Discard (or stop discarding) writes. Returns the previous setting.
    pub fn silent(&mut self, silent: bool) -> bool {
        std::mem::replace(&mut self.silent, silent)
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Which audiences get to hear what a command says.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Visibility {
    pub actor: bool,
    pub participant: bool,
    pub observers: bool,
}

impl Visibility {
    pub const ALL: Visibility = Visibility {
        actor: true,
        participant: true,
        observers: true,
    };
    pub const ACTOR_ONLY: Visibility = Visibility {
        actor: true,
        participant: false,
        observers: false,
    };
    pub const NONE: Visibility = Visibility {
        actor: false,
        participant: false,
        observers: false,
    };

    /// Audiences visible under both `self` and `other`.
    #[must_use]
    pub fn narrow(self, other: Visibility) -> Visibility {
        Visibility {
            actor: self.actor && other.actor,
            participant: self.participant && other.participant,
            observers: self.observers && other.observers,
        }
    }
}

/// Every audience's buffer for one command.
#[derive(Debug, Default)]
pub struct Buffers {
    actor: Buffer,
    participant: Buffer,
    participant_id: Option<ThingId>,
    observers: BTreeMap<LocationId, Buffer>,
    observers_silent: bool,
}

impl Buffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actor(&mut self) -> &mut Buffer {
        &mut self.actor
    }

    pub fn participant(&mut self) -> &mut Buffer {
        &mut self.participant
    }

    pub fn participant_id(&self) -> Option<ThingId> {
        self.participant_id
    }

    pub fn set_participant(&mut self, participant: Option<ThingId>) {
        self.participant_id = participant;
    }

    /// The observers at `location`.
    pub fn observer(&mut self, location: LocationId) -> &mut Buffer {
        let buffer = self.observers.entry(location).or_default();
        buffer.silent(self.observers_silent);
        buffer
    }

    pub fn visibility(&self) -> Visibility {
        Visibility {
            actor: !self.actor.is_silent(),
            participant: !self.participant.is_silent(),
            observers: !self.observers_silent,
        }
    }

    /// Silence the audiences `visibility` hides, returning what was visible before so it can be
    /// put back.
    pub fn apply(&mut self, visibility: Visibility) -> Visibility {
        let previous = self.visibility();
        self.actor.silent(!visibility.actor);
        self.participant.silent(!visibility.participant);
        self.observers_silent = !visibility.observers;
        for buffer in self.observers.values_mut() {
            buffer.silent(self.observers_silent);
        }
        previous
    }

    /// Throw away everything written and forget the participant. Silencing is left alone.
    pub fn clear(&mut self) {
        self.actor.clear();
        self.participant.clear();
        self.participant_id = None;
        self.observers.clear();
    }

    /// Work out who receives what. Must be called while the locks are still held, since the
    /// observers are whoever is in each location right now; the actor and participant never
    /// hear the observers' version of events.
    pub fn deliveries(&self, actor: ThingId, held: &HeldLocks<'_>) -> Vec<(ThingId, String)> {
        let mut deliveries = vec![];
        if !self.actor.is_empty() {
            deliveries.push((actor, self.actor.text().to_string()));
        }
        if let Some(participant) = self.participant_id
            && !self.participant.is_empty()
        {
            deliveries.push((participant, self.participant.text().to_string()));
        }
        for (location, buffer) in &self.observers {
            if buffer.is_empty() {
                continue;
            }
            let Ok(inventory) = held.inventory(*location) else {
                warn!(location = %location, "output for observers at a location that isn't locked");
                continue;
            };
            for player in inventory.players() {
                let id = player.id();
                if id == actor || Some(id) == self.participant_id {
                    continue;
                }
                deliveries.push((id, buffer.text().to_string()));
            }
        }
        deliveries
    }
}
