//! Canned-input console for driving sessions from tests.

use std::collections::VecDeque;

use crate::session::Console;

/// Replays a fixed sequence of speech and records everything written.
///
/// Each line of speech is echoed into the output as `> speech`, and written
/// text is split on newlines, so the output reads like a terminal log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    feed: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(feed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            feed: feed.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Every output line so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Lines of speech not yet consumed.
    pub fn remaining(&self) -> usize {
        self.feed.len()
    }

    /// Whether any output line contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.output.iter().any(|line| line.contains(text))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Option<String> {
        let speech = self.feed.pop_front()?;
        self.output.push(format!("> {}", speech));
        Some(speech)
    }

    fn write_line(&mut self, text: &str) {
        self.output.extend(text.split('\n').map(str::to_string));
    }
}
