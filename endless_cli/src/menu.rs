//! The title screen, main menu and help text.

use std::ops::Range;

use dialogue_core::{Console, DialogueError, Session, SessionOutcome, Transcript};
use tracing::debug;

use crate::config::GameSettings;

pub const TITLE: &str = r#"  ______           _ _
 |  ____|         | | |
 | |__   _ __   __| | | ___  ___ ___
 |  __| | '_ \ / _` | |/ _ \/ __/ __|
 | |____| | | | (_| | |  __/\__ \__ \
 |______|_| |_|\__,_|_|\___||___/___/"#;

pub const HELP: [&str; 2] = [
    "Endless is a minimal, single-player version of Waving Hands.",
    "See: http://www.gamecabinet.com/rules/WavingHands.html",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Help,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [MenuChoice::Play, MenuChoice::Help, MenuChoice::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Play => "Play Game",
            MenuChoice::Help => "Help",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Ask until the answer is an integer in `choices`.
///
/// Returns `None` if the console runs out of input first.
pub fn get_int_input(choices: Range<usize>, console: &mut impl Console) -> Option<usize> {
    loop {
        let answer = console.read_line()?;
        let Ok(number) = answer.trim().parse::<i64>() else {
            console.write_line("That is not a valid integer.");
            continue;
        };
        match usize::try_from(number) {
            Ok(choice) if choices.contains(&choice) => return Some(choice),
            _ => {
                let valid: Vec<String> = choices.clone().map(|c| c.to_string()).collect();
                console.write_line(&format!(
                    "That choice is not valid. (Valid choices are {})",
                    valid.join(",")
                ));
            }
        }
    }
}

pub fn show_help(console: &mut impl Console) {
    for line in HELP {
        console.write_line(line);
    }
}

/// Play one game and hand back how it ended and what happened.
pub fn play_game(
    console: &mut impl Console,
    settings: &GameSettings,
) -> Result<(SessionOutcome, Transcript), DialogueError> {
    let mut session = Session::new().with_max_turns(settings.max_turns);
    let outcome = session.play(console)?;
    Ok((outcome, session.into_transcript()))
}

/// Show the title and loop on the main menu until the player quits or the
/// console runs dry. Running out of input mid-game ends the menu too.
///
/// Returns the transcript of every game played along the way.
pub fn main_menu(
    console: &mut impl Console,
    settings: &GameSettings,
) -> Result<Vec<Transcript>, DialogueError> {
    console.write_line(TITLE);

    let mut transcripts = Vec::new();
    loop {
        console.write_line("");
        console.write_line("Main Menu:");
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            console.write_line(&format!("{}) {}", index, choice.label()));
        }

        let choice = get_int_input(0..MenuChoice::ALL.len(), console)
            .and_then(|index| MenuChoice::ALL.get(index).copied());
        debug!(?choice, "menu choice");
        match choice {
            Some(MenuChoice::Play) => {
                let (outcome, transcript) = play_game(console, settings)?;
                transcripts.push(transcript);
                if outcome == SessionOutcome::InputExhausted {
                    break;
                }
            }
            Some(MenuChoice::Help) => show_help(console),
            Some(MenuChoice::Quit) | None => break,
        }
    }
    Ok(transcripts)
}
