//! Line-oriented terminal front end built on crossterm.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};

use super::{DisplaySink, InputSource, Line, Pacer, Tone};

pub struct TerminalConsole {
    pacing: bool,
}

impl TerminalConsole {
    /// With `pacing` off, pauses return immediately.
    pub fn new(pacing: bool) -> Self {
        Self { pacing }
    }

    /// Leaves the terminal with default colors, e.g. before printing an error.
    pub fn reset(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        execute!(out, SetAttribute(Attribute::Reset), ResetColor)
    }
}

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Plain => None,
        Tone::Success => Some(Color::DarkGreen),
        Tone::Failure => Some(Color::DarkRed),
        Tone::Reward => Some(Color::Green),
        Tone::Border => Some(Color::Magenta),
        Tone::Stage => Some(Color::Cyan),
        Tone::PlayerInfo => Some(Color::Blue),
        Tone::MonsterInfo => Some(Color::Red),
        Tone::Title => Some(Color::DarkCyan),
        Tone::Welcome => Some(Color::Yellow),
        Tone::MenuKey => Some(Color::DarkBlue),
        Tone::Hint => Some(Color::DarkGrey),
        Tone::Warning => Some(Color::DarkYellow),
    }
}

impl DisplaySink for TerminalConsole {
    fn clear(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn show(&mut self, line: Line) -> io::Result<()> {
        let mut out = io::stdout().lock();
        for segment in &line.segments {
            if segment.tone == Tone::Welcome {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            match tone_color(segment.tone) {
                Some(color) => queue!(
                    out,
                    SetForegroundColor(color),
                    Print(&segment.text),
                    ResetColor,
                    SetAttribute(Attribute::Reset)
                )?,
                None => queue!(out, Print(&segment.text))?,
            }
        }
        queue!(out, Print("\n"))?;
        out.flush()
    }
}

impl InputSource for TerminalConsole {
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        {
            let mut out = io::stdout().lock();
            queue!(out, Print(label))?;
            out.flush()?;
        }

        let mut buffer = String::new();
        let read = io::stdin().lock().read_line(&mut buffer)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        while buffer.ends_with('\n') || buffer.ends_with('\r') {
            buffer.pop();
        }
        Ok(buffer)
    }
}

impl Pacer for TerminalConsole {
    fn pause(&mut self, duration: Duration) {
        if self.pacing && !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
