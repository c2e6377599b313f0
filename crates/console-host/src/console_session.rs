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

use std::io::Write;

use hearth_kernel::{Session, SessionError};

/// Output for the player at the keyboard. Text arrives from whichever thread ran the command, so
/// it may land in the middle of the prompt.
pub struct ConsoleSession;

impl Session for ConsoleSession {
    fn send(&self, text: &str) -> Result<(), SessionError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").map_err(|e| SessionError::DeliveryError(e.to_string()))?;
        stdout
            .flush()
            .map_err(|e| SessionError::DeliveryError(e.to_string()))
    }
}
