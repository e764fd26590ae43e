//! In-memory console: replays canned answers and records what was shown.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use super::{DisplaySink, InputSource, Line, Pacer};

/// One thing the game did to the console, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    Clear,
    Show(Line),
    Prompt(String),
    Pause(Duration),
}

#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    events: Vec<ScriptEvent>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[ScriptEvent] {
        &self.events
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Text of every shown line, across clears.
    pub fn shown_text(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ScriptEvent::Show(line) => Some(line.text()),
                _ => None,
            })
            .collect()
    }

    /// Text of the lines shown since the last clear.
    pub fn last_frame(&self) -> Vec<String> {
        let start = self
            .events
            .iter()
            .rposition(|e| *e == ScriptEvent::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.events[start..]
            .iter()
            .filter_map(|e| match e {
                ScriptEvent::Show(line) => Some(line.text()),
                _ => None,
            })
            .collect()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ScriptEvent::Pause(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn prompt_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ScriptEvent::Prompt(_)))
            .count()
    }
}

impl DisplaySink for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.events.push(ScriptEvent::Clear);
        Ok(())
    }

    fn show(&mut self, line: Line) -> io::Result<()> {
        self.events.push(ScriptEvent::Show(line));
        Ok(())
    }
}

impl InputSource for ScriptedConsole {
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        self.events.push(ScriptEvent::Prompt(label.to_string()));
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }
}

impl Pacer for ScriptedConsole {
    fn pause(&mut self, duration: Duration) {
        self.events.push(ScriptEvent::Pause(duration));
    }
}
