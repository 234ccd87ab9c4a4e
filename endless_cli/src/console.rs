//! The terminal console: speech from stdin, game text to stdout.

use std::io::{self, BufRead, Write};

use dialogue_core::Console;
use tracing::warn;

pub const PROMPT: &str = "> ";

/// Reads one non-empty line at a time, prompting with `> `.
#[derive(Debug, Default)]
pub struct StdioConsole;

impl Console for StdioConsole {
    fn read_line(&mut self) -> Option<String> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("{}", PROMPT);
            if let Err(err) = io::stdout().flush() {
                warn!(error = %err, "failed to flush prompt");
            }

            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let speech = line.trim_end_matches(['\r', '\n']);
                    if !speech.is_empty() {
                        return Some(speech.to_string());
                    }
                }
                Err(err) => {
                    warn!(error = %err, "failed to read from stdin");
                    return None;
                }
            }
        }
    }

    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }
}
