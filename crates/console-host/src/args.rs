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

use std::path::PathBuf;

use clap::builder::ValueHint;
use clap_derive::Parser;
use eyre::eyre;
use figment::Figment;
use figment::providers::{Format as ProviderFormat, Serialized, Yaml};
use hearth_kernel::Config;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "hearth-console", about = "Walk around a small shared world from the terminal")]
pub struct Args {
    #[arg(
        long,
        value_name = "config",
        help = "Path to configuration (YAML) file to use, if any. If not specified, defaults are used.\
                Configuration file values can be overridden by command line arguments.",
        value_hint = ValueHint::FilePath
    )]
    pub config_file: Option<PathBuf>,

    #[arg(long, value_name = "name", help = "What to call your player")]
    pub player_name: Option<String>,

    #[arg(
        long,
        value_name = "count",
        help = "How many simulated players wander the world alongside you"
    )]
    pub wanderers: Option<usize>,

    #[arg(long, help = "Enable debug logging", default_value = "false")]
    pub debug: bool,
}

/// Everything the console host can be configured with. The kernel's own settings live under
/// `kernel`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub player_name: String,
    pub wanderers: usize,
    /// Longest pause between a wanderer's actions, in milliseconds.
    pub wander_interval_ms: u64,
    pub kernel: Config,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            player_name: "Traveller".to_string(),
            wanderers: 3,
            wander_interval_ms: 4000,
            kernel: Config::default(),
        }
    }
}

impl Args {
    /// Load the configuration file if there is one, then apply any command line overrides.
    pub fn load_config(&self) -> Result<HostConfig, eyre::Report> {
        let mut config = match &self.config_file {
            Some(config_path) => Figment::new()
                .merge(Serialized::defaults(HostConfig::default()))
                .merge(Yaml::file(config_path))
                .extract::<HostConfig>()
                .map_err(|e| {
                    eyre!(
                        "Failed to parse configuration from {:?}: {}",
                        config_path,
                        e
                    )
                })?,
            None => HostConfig::default(),
        };
        if let Some(player_name) = &self.player_name {
            config.player_name = player_name.clone();
        }
        if let Some(wanderers) = self.wanderers {
            config.wanderers = wanderers;
        }
        if config.player_name.split_whitespace().count() != 1 {
            return Err(eyre!(
                "Player name {:?} must be a single word",
                config.player_name
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use pretty_assertions::assert_eq;

    use crate::args::Args;

    #[test]
    fn test_defaults_without_config_file() {
        let args = Args::parse_from(["hearth-console"]);
        let config = args.load_config().unwrap();
        assert_eq!(config.player_name, "Traveller");
        assert_eq!(config.wanderers, 3);
        assert_eq!(config.kernel.max_lock_rounds, 64);
    }

    #[test]
    fn test_file_then_flags() {
        let path = std::env::temp_dir().join(format!("hearth-console-{}.yaml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "player_name: Wren\nwanderers: 7\nkernel:\n  unknown_command_message: What?"
        )
        .unwrap();
        drop(file);

        let args = Args::parse_from([
            "hearth-console",
            "--config-file",
            path.to_str().unwrap(),
            "--wanderers",
            "1",
        ]);
        let config = args.load_config().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.player_name, "Wren");
        assert_eq!(config.wanderers, 1);
        assert_eq!(config.kernel.unknown_command_message, "What?");
        assert_eq!(config.kernel.script_prefix, '$');
    }

    #[test]
    fn test_player_name_must_be_one_word() {
        let args = Args::parse_from(["hearth-console", "--player-name", "Big Wren"]);
        assert!(args.load_config().is_err());
    }
}
