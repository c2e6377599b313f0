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

//! Testing utilities for the kernel crate: an interpreter wired up to mock sessions.

use std::collections::HashMap;
use std::sync::Arc;

use hearth_common::{ThingId, World};

use crate::commands::CommandRegistry;
use crate::config::Config;
use crate::tasks::interpreter::Interpreter;
use crate::tasks::sessions::{MockSession, SessionRegistry};
use crate::tasks::{CommandError, CommandOutcome};

/// An interpreter over a test world, with a recording session per connected player.
pub struct TestHarness {
    pub interpreter: Arc<Interpreter>,
    sessions: HashMap<ThingId, Arc<MockSession>>,
}

impl TestHarness {
    pub fn new(world: World) -> Self {
        Self::with_registry(world, CommandRegistry::new(), Config::default())
    }

    pub fn with_registry(world: World, registry: CommandRegistry, config: Config) -> Self {
        let interpreter = Interpreter::new(
            Arc::new(world),
            Arc::new(registry),
            Arc::new(SessionRegistry::new()),
            Arc::new(config),
        );
        Self {
            interpreter: Arc::new(interpreter),
            sessions: HashMap::new(),
        }
    }

    /// Look up a player already in the world by name.
    pub fn player(&self, name: &str) -> ThingId {
        self.interpreter
            .world()
            .lookup_player(name)
            .unwrap_or_else(|| panic!("no player called {name}"))
    }

    /// Attach a recording session to a player already in the world.
    pub fn connect(&mut self, name: &str) -> ThingId {
        let player = self.player(name);
        let session = Arc::new(MockSession::new());
        self.interpreter.sessions().connect(player, session.clone());
        self.sessions.insert(player, session);
        player
    }

    pub fn try_run(&self, name: &str, input: &str) -> Result<CommandOutcome, CommandError> {
        self.interpreter.parse(self.player(name), input)
    }

    pub fn run(&self, name: &str, input: &str) -> CommandOutcome {
        self.try_run(name, input)
            .unwrap_or_else(|e| panic!("{name}: {input}: {e}"))
    }

    pub fn script(&self, name: &str, input: &str) -> CommandOutcome {
        self.interpreter
            .script(self.player(name), input)
            .unwrap_or_else(|e| panic!("{name}: {input}: {e}"))
    }

    /// Take everything a connected player has been sent since last asked.
    pub fn output(&self, name: &str) -> Vec<String> {
        let player = self.player(name);
        self.sessions
            .get(&player)
            .map(|session| session.take())
            .unwrap_or_else(|| panic!("{name} is not connected"))
    }
}
