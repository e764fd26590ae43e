//! Front-end seams: where the game writes lines, reads choices and waits.
//!
//! The game never touches stdout or stdin directly. `TerminalConsole` drives a
//! real terminal through crossterm; `ScriptedConsole` feeds canned input and
//! records everything for tests.

pub mod scripted;
pub mod screens;
pub mod terminal;

pub use scripted::{ScriptEvent, ScriptedConsole};
pub use terminal::TerminalConsole;

use std::io;
use std::time::Duration;

/// Cosmetic styling for a piece of text. Front ends map these to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Successful action or good news.
    Success,
    /// Failed action, monster damage, defeat.
    Failure,
    /// Heal and level-up notices.
    Reward,
    Border,
    Stage,
    PlayerInfo,
    MonsterInfo,
    Title,
    Welcome,
    MenuKey,
    Hint,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

/// One output line made of styled segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::toned(text, Tone::Plain)
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self::new().with(text, tone)
    }

    pub fn blank() -> Self {
        Self::new()
    }

    pub fn with(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            tone,
        });
        self
    }

    /// The line's text with styling dropped.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Receives ordered output. Order matters, styling does not.
pub trait DisplaySink {
    fn clear(&mut self) -> io::Result<()>;

    fn show(&mut self, line: Line) -> io::Result<()>;

    fn show_all(&mut self, lines: Vec<Line>) -> io::Result<()> {
        for line in lines {
            self.show(line)?;
        }
        Ok(())
    }
}

/// Blocking line input. End of input is reported as `UnexpectedEof`.
pub trait InputSource {
    fn prompt(&mut self, label: &str) -> io::Result<String>;
}

/// Fixed-duration waits that keep the game legible to a human.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Everything the game loops need from a front end.
pub trait Console: DisplaySink + InputSource + Pacer {}

impl<T: DisplaySink + InputSource + Pacer> Console for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text_joins_segments() {
        let line = Line::toned("| Stage: 1 ", Tone::Stage).with("| HP: 3", Tone::PlayerInfo);
        assert_eq!(line.text(), "| Stage: 1 | HP: 3");
        assert_eq!(line.segments.len(), 2);
    }

    #[test]
    fn test_blank_line_is_empty() {
        assert_eq!(Line::blank().text(), "");
        assert!(Line::blank().segments.is_empty());
    }
}
