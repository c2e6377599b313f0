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

use std::collections::HashMap;
use std::sync::Arc;

use hearth_common::ThingId;
use parking_lot::{Mutex, RwLock};
use thiserror::Error;

/// The interface for getting output to a connected player. Hosts implement this for whatever
/// their connection is (a terminal, a socket, a test harness).
///
/// Output is only ever sent once a command has finished and released its locks, so
/// implementations are free to block on I/O.
pub trait Session: Send + Sync {
    /// Send one chunk of output, which may span several lines.
    fn send(&self, text: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SessionError {
    #[error("No connection for player {0}")]
    NoConnectionForPlayer(ThingId),
    #[error("Could not deliver output: {0}")]
    DeliveryError(String),
}

/// Which players are connected, and how to reach them. Players without a session (scripted
/// wanderers, or players whose connection dropped) still exist in the world; output addressed to
/// them is dropped.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<ThingId, Arc<dyn Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&self, player: ThingId, session: Arc<dyn Session>) {
        self.sessions.write().insert(player, session);
    }

    pub fn disconnect(&self, player: ThingId) -> bool {
        self.sessions.write().remove(&player).is_some()
    }

    pub fn is_connected(&self, player: ThingId) -> bool {
        self.sessions.read().contains_key(&player)
    }

    pub fn connected_players(&self) -> Vec<ThingId> {
        self.sessions.read().keys().copied().collect()
    }

    pub fn send(&self, player: ThingId, text: &str) -> Result<(), SessionError> {
        // Don't hold the registry lock while the session does its I/O.
        let session = self
            .sessions
            .read()
            .get(&player)
            .cloned()
            .ok_or(SessionError::NoConnectionForPlayer(player))?;
        session.send(text)
    }
}

/// A session which records what it was sent, for use in tests.
#[derive(Default)]
pub struct MockSession {
    received: Mutex<Vec<String>>,
}

impl MockSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, one entry per line.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().clone()
    }

    /// Take (and forget) everything received so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.received.lock())
    }
}

impl Session for MockSession {
    fn send(&self, text: &str) -> Result<(), SessionError> {
        self.received
            .lock()
            .extend(text.lines().map(str::to_string));
        Ok(())
    }
}
