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

//! A console for hearth: one player at the keyboard, a handful of simulated wanderers, and a
//! small village for them all to share.

mod args;
mod console_session;
mod wanderers;
mod world;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::Error;
use hearth_common::{Thing, ThingId};
use hearth_common::tracing::init_tracing;
use hearth_kernel::{CommandError, CommandRegistry, Interpreter, SessionRegistry};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{error, info};

use crate::args::Args;
use crate::console_session::ConsoleSession;
use crate::wanderers::Wanderers;

fn console_loop(interpreter: &Interpreter, player: ThingId) -> Result<(), Error> {
    interpreter
        .sessions()
        .connect(player, Arc::new(ConsoleSession));
    interpreter.script(player, "$POOF")?;

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if line.eq_ignore_ascii_case("quit") {
                    break;
                }
                match interpreter.parse(player, line) {
                    Ok(_) => {}
                    // Already told the player; nothing more to say.
                    Err(CommandError::HandlerFault { .. }) => {}
                    Err(e) => error!(error = %e, "command failed"),
                }
            }
            Err(ReadlineError::Eof) => {
                println!("<EOF>");
                break;
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(e) => {
                println!("Error: {e:?}");
                break;
            }
        }
    }

    interpreter.sessions().disconnect(player);
    interpreter.world().leave(player)?;
    Ok(())
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;

    let args: Args = Args::parse();
    init_tracing(args.debug)?;
    let config = args.load_config()?;

    let interpreter = Arc::new(Interpreter::new(
        Arc::new(world::village()?),
        Arc::new(CommandRegistry::new()),
        Arc::new(SessionRegistry::new()),
        Arc::new(config.kernel.clone()),
    ));

    // Placed before the wanderers, so they pick names around the player's.
    let player = interpreter
        .world()
        .place(Thing::player(&config.player_name), world::SQUARE)?;
    let wanderers = Wanderers::spawn(
        interpreter.clone(),
        config.wanderers,
        world::SQUARE,
        Duration::from_millis(config.wander_interval_ms),
    )?;
    info!(player = %config.player_name, wanderers = config.wanderers, "console ready");

    let result = console_loop(&interpreter, player);
    wanderers.stop();
    result
}
