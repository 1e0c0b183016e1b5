//! Text command input for the headless driver.
//!
//! Each line typed by the player is normalized into a [`Command`]: either a game
//! [`Action`] for the engine, or a driver-level request (show status, wait, quit).

use std::str::FromStr;

use thiserror::Error;

use crate::game::{Action, ItemCategory, SettingKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Dispatch this action `n` times.
    Repeat(Action, u32),
    /// Let `n` seconds of game time pass.
    Wait(u32),
    Status,
    Shop,
    Challenges,
    Save,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("`{0}` is not a number")]
    BadNumber(String),
    #[error("unknown shop section `{0}` (click, auto, ap, prestige, ball)")]
    BadCategory(String),
    #[error("unknown setting `{0}` (haptic, animations, sound)")]
    BadSetting(String),
}

pub const HELP: &str = "\
tap [n]                 tap the ball (n times)
buy <section> <id>      sections: click, auto, ap, prestige, ball
ball <id>               select a ball, buying it if needed
rebirth                 reset the run for a permanent boost
answer <1-4>            answer the open trivia question
dismiss                 close the trivia question
claim <id>              claim a completed challenge
ok                      dismiss the oldest achievement popup
toggle <setting>        haptic, animations, sound
wait <secs>             let time pass
status | shop | challenges | save | help | quit
reset-all-progress      wipe everything except settings";

fn arg<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, ParseCommandError> {
    parts
        .next()
        .ok_or(ParseCommandError::MissingArgument { command, what })
}

fn number(s: &str) -> Result<u32, ParseCommandError> {
    s.parse()
        .map_err(|_| ParseCommandError::BadNumber(s.to_string()))
}

impl FromStr for ItemCategory {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "click" => Ok(ItemCategory::Click),
            "auto" => Ok(ItemCategory::Auto),
            "ap" => Ok(ItemCategory::ApUpgrade),
            "prestige" => Ok(ItemCategory::Prestige),
            "ball" => Ok(ItemCategory::Ball),
            other => Err(ParseCommandError::BadCategory(other.to_string())),
        }
    }
}

impl FromStr for SettingKey {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haptic" => Ok(SettingKey::Haptic),
            "animations" => Ok(SettingKey::Animations),
            "sound" => Ok(SettingKey::Sound),
            other => Err(ParseCommandError::BadSetting(other.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let lowered = line.trim().to_lowercase();
        let mut parts = lowered.split_whitespace();
        let Some(head) = parts.next() else {
            return Err(ParseCommandError::Empty);
        };
        let once = |a: Action| -> Result<Command, ParseCommandError> { Ok(Command::Repeat(a, 1)) };

        match head {
            "tap" | "t" => {
                let n = parts.next().map(number).transpose()?.unwrap_or(1);
                Ok(Command::Repeat(Action::Tap, n))
            }
            "buy" | "b" => {
                let category = arg(&mut parts, "buy", "a shop section")?.parse()?;
                let id = arg(&mut parts, "buy", "an item id")?;
                once(Action::Buy(category, id.to_string()))
            }
            "ball" => once(Action::SelectBall(
                arg(&mut parts, "ball", "a ball id")?.to_string(),
            )),
            "rebirth" => once(Action::Rebirth),
            "answer" | "a" => {
                let n = number(arg(&mut parts, "answer", "an answer number")?)?;
                // Shown 1-based to the player.
                let index = n.checked_sub(1).ok_or(ParseCommandError::BadNumber(n.to_string()))?;
                once(Action::SubmitTriviaAnswer(index as usize))
            }
            "dismiss" => once(Action::DismissTrivia),
            "claim" => once(Action::ClaimChallenge(
                arg(&mut parts, "claim", "a challenge id")?.to_string(),
            )),
            "ok" => once(Action::DismissAchievementPopup),
            "toggle" => once(Action::ToggleSetting(
                arg(&mut parts, "toggle", "a setting")?.parse()?,
            )),
            "reset-all-progress" => once(Action::ResetAllProgress),
            "wait" | "w" => Ok(Command::Wait(number(arg(&mut parts, "wait", "seconds")?)?)),
            "status" | "s" => Ok(Command::Status),
            "shop" => Ok(Command::Shop),
            "challenges" | "c" => Ok(Command::Challenges),
            "save" => Ok(Command::Save),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}
