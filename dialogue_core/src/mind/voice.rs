//! The stock lines a familiar falls back on when it is not making progress.

/// Stage-specific hints woven into the familiar's confused replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionDetails {
    pub suggestions: [&'static str; 3],
    pub explanation: &'static str,
}

/// Said instead of a hint when the active stage has none to offer.
pub const PLAIN_CONFUSION: &str = "I don't understand, Master.";

/// One stock line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Plain(&'static str),
    /// A lead-in followed by one of the stage's suggestions.
    Suggestion { lead: &'static str, index: usize },
    /// The stage's explanation, then one of its suggestions.
    Explanation { index: usize },
    Silent,
}

impl Line {
    /// Fill in stage details. `None` means the familiar says nothing.
    pub fn render(&self, details: Option<&ConfusionDetails>) -> Option<String> {
        match (self, details) {
            (Line::Plain(text), _) => Some((*text).to_string()),
            (Line::Silent, _) => None,
            (Line::Suggestion { lead, index }, Some(details)) => {
                Some(format!("{}{}", lead, details.suggestions[*index]))
            }
            (Line::Explanation { index }, Some(details)) => Some(format!(
                "{} {}",
                details.explanation, details.suggestions[*index]
            )),
            (Line::Suggestion { .. } | Line::Explanation { .. }, None) => {
                Some(PLAIN_CONFUSION.to_string())
            }
        }
    }
}

/// Ordered escalations of confusion and impatience.
///
/// Counts past the end keep repeating the last line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    confusion: Vec<Line>,
    impatience: Vec<Line>,
}

impl Voice {
    pub fn new(confusion: Vec<Line>, impatience: Vec<Line>) -> Self {
        Self {
            confusion,
            impatience,
        }
    }

    /// Tomar's voice, growing more plaintive the less sense the master makes.
    pub fn tomar() -> Self {
        use Line::*;
        Self::new(
            vec![
                Plain("I don't understand, Master."),
                Suggestion {
                    lead: "I still don't understand what you're trying to say.\n",
                    index: 0,
                },
                Explanation { index: 1 },
                Plain("I don't understand, Master."),
                Suggestion { lead: "", index: 2 },
                Plain("Please Master, I'm trying."),
                Plain("I don't understand."),
                Plain("Have I displeased you?"),
                Plain("I await a command that I can comprehend."),
                Plain("Master, your thoughts are madness. Please say something in Liltish."),
                Plain("Please!"),
                Plain("..."),
                Silent,
                Plain("Perhaps something is wrong."),
                Plain("I will meditate on the problem."),
                Plain("When you are ready to _shta_ or anything else that makes sense, I will respond."),
                Plain("..."),
            ],
            vec![Silent, Plain("Any time now..."), Silent],
        )
    }

    pub fn confusion_line(&self, count: usize) -> Line {
        pick(&self.confusion, count)
    }

    pub fn impatience_line(&self, count: usize) -> Line {
        pick(&self.impatience, count)
    }
}

fn pick(lines: &[Line], count: usize) -> Line {
    lines
        .get(count)
        .or_else(|| lines.last())
        .copied()
        .unwrap_or(Line::Silent)
}
