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

use hearth_common::util::split_words;

use crate::config::Config;
use crate::tasks::CommandError;

/// A line of input, split into its command keyword and the words the command will match on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedCommand {
    /// The first word, upper-cased.
    pub keyword: String,
    /// The remaining words, upper-cased, with stop words removed.
    pub words: Vec<String>,
    /// Everything after the keyword, as typed (less surrounding whitespace).
    pub argstr: String,
}

#[tracing::instrument(skip(config))]
pub fn parse_command(input: &str, config: &Config) -> Result<ParsedCommand, CommandError> {
    // Replace initial command characters with say/emote
    let mut command = input.trim().to_string();
    match command.chars().next() {
        Some('"') => command.replace_range(..1, "say "),
        Some(':') => command.replace_range(..1, "emote "),
        _ => {}
    };

    // Split into keyword and argument string
    let mut parts = command.splitn(2, char::is_whitespace);
    let keyword = parts.next().unwrap_or_default().to_uppercase();
    if keyword.is_empty() {
        return Err(CommandError::EmptyCommand);
    }
    let argstr = parts.next().unwrap_or_default().trim().to_string();

    let words = split_words(&argstr)
        .into_iter()
        .filter(|word| !config.is_stop_word(word))
        .collect();

    Ok(ParsedCommand {
        keyword,
        words,
        argstr,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::config::Config;
    use crate::tasks::CommandError;
    use crate::tasks::command_parse::{ParsedCommand, parse_command};

    #[test]
    fn test_keyword_and_words() {
        let parsed = parse_command("  get the Small  BALL from a box ", &Config::default()).unwrap();
        assert_eq!(
            parsed,
            ParsedCommand {
                keyword: "GET".to_string(),
                words: vec!["SMALL".to_string(), "BALL".to_string(), "BOX".to_string()],
                argstr: "the Small  BALL from a box".to_string(),
            }
        );
    }

    #[test]
    fn test_say_shortcut_keeps_text() {
        let parsed = parse_command("\"Hello, the world!", &Config::default()).unwrap();
        assert_eq!(parsed.keyword, "SAY");
        assert_eq!(parsed.argstr, "Hello, the world!");
        assert_eq!(parsed.words, vec!["HELLO,", "WORLD!"]);
    }

    #[test]
    fn test_emote_shortcut() {
        let parsed = parse_command(":waves.", &Config::default()).unwrap();
        assert_eq!(parsed.keyword, "EMOTE");
        assert_eq!(parsed.argstr, "waves.");
    }

    #[test]
    fn test_bare_keyword() {
        let parsed = parse_command("look", &Config::default()).unwrap();
        assert_eq!(parsed.keyword, "LOOK");
        assert!(parsed.words.is_empty());
        assert_eq!(parsed.argstr, "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse_command("   ", &Config::default()),
            Err(CommandError::EmptyCommand)
        );
    }

    #[test]
    fn test_configured_stop_words() {
        let config = Config {
            stop_words: vec!["PLEASE".to_string()],
            ..Config::default()
        };
        let parsed = parse_command("get the ball please", &config).unwrap();
        assert_eq!(parsed.words, vec!["THE", "BALL"]);
    }
}
