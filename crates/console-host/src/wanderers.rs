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

//! Simulated players, each on its own thread, so that the console player's commands have
//! company to contend with for locks.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

use hearth_common::{LocationId, Thing, ThingId, World, WorldError};
use hearth_kernel::{CommandError, Interpreter};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

const NAMES: [&str; 8] = [
    "Ottilie", "Bramwell", "Ysolde", "Fennick", "Maud", "Corwin", "Hesper", "Tamsin",
];

const GESTURES: [&str; 6] = [
    "yawns.",
    "hums a tune.",
    "looks around.",
    "stretches.",
    "scratches their head.",
    "mutters about the weather.",
];

/// A running wanderer, stopped by [`Wanderers::stop`].
struct Wanderer {
    player: ThingId,
    thread: JoinHandle<()>,
}

pub struct Wanderers {
    interpreter: Arc<Interpreter>,
    running: Arc<AtomicBool>,
    wanderers: Vec<Wanderer>,
}

impl Wanderers {
    pub fn spawn(
        interpreter: Arc<Interpreter>,
        count: usize,
        start: LocationId,
        max_pause: Duration,
    ) -> Result<Self, eyre::Report> {
        let running = Arc::new(AtomicBool::new(true));
        let mut wanderers = Vec::with_capacity(count);
        let mut next_name = 0;
        for _ in 0..count {
            let (name, player) = place_wanderer(interpreter.world(), start, &mut next_name)?;
            let thread = std::thread::Builder::new().name(format!("wanderer-{name}")).spawn({
                let interpreter = interpreter.clone();
                let running = running.clone();
                move || wander(&interpreter, player, &running, max_pause)
            })?;
            info!(name, player = %player, "wanderer started");
            wanderers.push(Wanderer { player, thread });
        }
        Ok(Self {
            interpreter,
            running,
            wanderers,
        })
    }

    /// Stop every wanderer and take them out of the world.
    pub fn stop(self) {
        self.running.store(false, Ordering::Relaxed);
        for wanderer in self.wanderers {
            if wanderer.thread.join().is_err() {
                warn!(player = %wanderer.player, "wanderer thread panicked");
            }
            if let Err(e) = self.interpreter.world().leave(wanderer.player) {
                warn!(player = %wanderer.player, error = %e, "could not remove wanderer");
            }
        }
    }
}

/// The `n`th wanderer name: each of [`NAMES`], then each again with a number after it.
fn wanderer_name(n: usize) -> String {
    if n < NAMES.len() {
        NAMES[n].to_string()
    } else {
        format!("{}{}", NAMES[n % NAMES.len()], n / NAMES.len())
    }
}

/// Place a wanderer under the first name from `next_name` on that nobody is using.
fn place_wanderer(
    world: &World,
    start: LocationId,
    next_name: &mut usize,
) -> Result<(String, ThingId), WorldError> {
    loop {
        let name = wanderer_name(*next_name);
        *next_name += 1;
        match world.place(Thing::player(&name), start) {
            Ok(player) => return Ok((name, player)),
            Err(WorldError::DuplicatePlayerName(_)) => continue,
            Err(e) => return Err(e),
        }
    }
}

fn wander(interpreter: &Interpreter, player: ThingId, running: &AtomicBool, max_pause: Duration) {
    let mut rng = rand::rng();
    if let Err(e) = interpreter.script(player, "$POOF") {
        warn!(player = %player, error = %e, "wanderer failed to appear");
        return;
    }
    while running.load(Ordering::Relaxed) {
        let input = next_action(interpreter, player, &mut rng);
        match interpreter.script(player, &input) {
            Ok(outcome) => {
                debug!(player = %player, input, ok = outcome.ok, rounds = outcome.rounds, "wanderer acted")
            }
            Err(CommandError::NotLocated(_)) => return,
            Err(e) => warn!(player = %player, input, error = %e, "wanderer's command failed"),
        }

        // Sleep in short steps, so that stopping doesn't wait out a long pause.
        let max_ms = max_pause.as_millis().max(1) as u64;
        let mut pause = Duration::from_millis(rng.random_range(0..max_ms));
        while !pause.is_zero() && running.load(Ordering::Relaxed) {
            let step = pause.min(Duration::from_millis(100));
            std::thread::sleep(step);
            pause -= step;
        }
    }
}

/// Mostly walk somewhere, sometimes fidget.
fn next_action(interpreter: &Interpreter, player: ThingId, rng: &mut impl Rng) -> String {
    if rng.random_bool(0.25) {
        let gesture = GESTURES.choose(rng).copied().unwrap_or("waits.");
        return format!("$ACTION {gesture}");
    }
    let exits: Vec<String> = match interpreter.world().locate(player) {
        Ok(location) => location.exits().keys().map(|d| d.to_string()).collect(),
        Err(_) => vec![],
    };
    exits
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| "LOOK".to_string())
}
