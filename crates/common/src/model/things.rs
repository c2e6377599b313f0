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

use crate::model::ThingId;

/// What sort of thing this is, which decides the inventory collection it is kept in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ThingKind {
    /// A portable item.
    Item,
    /// Fixed scenery: can be looked at and matched, never carried.
    Narrative,
    /// An actor; a connected player or a scripted mobile.
    Player,
}

/// An adjective-like word which narrows an alias match. A qualifier bound to an alias only
/// applies when the thing is being matched on that alias, so that e.g. "SHORT" can qualify a
/// "SWORD" without also qualifying the "SCABBARD" alias of the same thing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Qualifier {
    word: String,
    alias: Option<String>,
}

impl Qualifier {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_uppercase(),
            alias: None,
        }
    }

    pub fn bound(alias: &str, word: &str) -> Self {
        Self {
            word: word.to_uppercase(),
            alias: Some(alias.to_uppercase()),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Does this qualifier narrow a match on `alias` when the player wrote `word`?
    pub fn applies(&self, alias: &str, word: &str) -> bool {
        if self.word != word {
            return false;
        }
        match &self.alias {
            None => true,
            Some(bound) => bound == alias,
        }
    }
}

/// A thing in the world. Things are owned by value by whatever collection holds them, so a thing
/// is always in exactly one place; moving it means taking it out of one collection and pushing it
/// into another.
#[derive(Debug)]
pub struct Thing {
    id: ThingId,
    kind: ThingKind,
    name: String,
    description: String,
    aliases: Vec<String>,
    qualifiers: Vec<Qualifier>,
    contents: Option<Vec<Thing>>,
}

impl PartialEq for Thing {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Thing {}

impl Thing {
    fn new(kind: ThingKind, name: &str, alias: &str) -> Self {
        Self {
            id: ThingId::next(),
            kind,
            name: name.to_string(),
            description: String::new(),
            aliases: vec![alias.to_uppercase()],
            qualifiers: vec![],
            contents: None,
        }
    }

    /// A portable item, e.g. `Thing::item("a small green ball", "BALL")`.
    pub fn item(name: &str, alias: &str) -> Self {
        Self::new(ThingKind::Item, name, alias)
    }

    /// Immovable scenery.
    pub fn narrative(name: &str, alias: &str) -> Self {
        Self::new(ThingKind::Narrative, name, alias)
    }

    /// An actor. Players are matched on their name and can always carry things.
    pub fn player(name: &str) -> Self {
        let mut player = Self::new(ThingKind::Player, name, name);
        player.contents = Some(vec![]);
        player
    }

    #[must_use]
    pub fn with_alias(mut self, alias: &str) -> Self {
        let alias = alias.to_uppercase();
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
        self
    }

    #[must_use]
    pub fn with_qualifier(mut self, word: &str) -> Self {
        self.qualifiers.push(Qualifier::new(word));
        self
    }

    #[must_use]
    pub fn with_bound_qualifier(mut self, alias: &str, word: &str) -> Self {
        self.qualifiers.push(Qualifier::bound(alias, word));
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Make this thing able to hold other things.
    #[must_use]
    pub fn container(mut self) -> Self {
        self.contents.get_or_insert_with(Vec::new);
        self
    }

    /// Put `thing` inside this one, making it a container if it was not already.
    #[must_use]
    pub fn holding(mut self, thing: Thing) -> Self {
        self.contents.get_or_insert_with(Vec::new).push(thing);
        self
    }

    pub fn id(&self) -> ThingId {
        self.id
    }

    pub fn kind(&self) -> ThingKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn qualifiers(&self) -> &[Qualifier] {
        &self.qualifiers
    }

    pub fn is_player(&self) -> bool {
        self.kind == ThingKind::Player
    }

    pub fn is_narrative(&self) -> bool {
        self.kind == ThingKind::Narrative
    }

    pub fn is_container(&self) -> bool {
        self.contents.is_some()
    }

    pub fn has_alias(&self, word: &str) -> bool {
        self.aliases.iter().any(|alias| alias == word)
    }

    /// Does `word` qualify this thing when it is being matched on `alias`?
    pub fn qualifies(&self, alias: &str, word: &str) -> bool {
        self.qualifiers.iter().any(|q| q.applies(alias, word))
    }

    /// Things held inside this one. Empty for things that are not containers.
    pub fn contents(&self) -> &[Thing] {
        self.contents.as_deref().unwrap_or(&[])
    }

    pub fn contents_mut(&mut self) -> Option<&mut Vec<Thing>> {
        self.contents.as_mut()
    }

    /// Find a thing directly inside this one.
    pub fn find(&self, id: ThingId) -> Option<&Thing> {
        self.contents().iter().find(|t| t.id == id)
    }

    pub fn find_mut(&mut self, id: ThingId) -> Option<&mut Thing> {
        self.contents.as_mut()?.iter_mut().find(|t| t.id == id)
    }

    /// Remove and return a thing directly inside this one.
    pub fn take(&mut self, id: ThingId) -> Option<Thing> {
        let contents = self.contents.as_mut()?;
        let position = contents.iter().position(|t| t.id == id)?;
        Some(contents.remove(position))
    }

    /// Put a thing inside this one. Hands the thing back if this is not a container.
    pub fn put(&mut self, thing: Thing) -> Result<(), Thing> {
        match self.contents.as_mut() {
            Some(contents) => {
                contents.push(thing);
                Ok(())
            }
            None => Err(thing),
        }
    }
}
