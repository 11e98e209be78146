//! Line-based terminal I/O
//!
//! Wraps an input reader and an output writer with the few things the
//! front end needs: clearing, colored text, animated text and validated
//! number prompts. Generic over the streams so menus can be driven from a
//! byte buffer in tests.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::data::Settings;

use super::widgets::Segment;

pub struct Console<R, W> {
    input: R,
    output: W,
    text_delay: Duration,
    clear_screen: bool,
    color: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout
    pub fn stdio(settings: &Settings) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), settings)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: &Settings) -> Self {
        Self {
            input,
            output,
            text_delay: Duration::from_millis(settings.text_delay_ms),
            clear_screen: settings.clear_screen,
            color: settings.color,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.output.flush()
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        queue!(self.output, Print(text))?;
        self.output.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        queue!(self.output, Print(text), Print("\n"))?;
        self.output.flush()
    }

    /// Bold colored text; plain when color is turned off
    pub fn styled(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.color {
            queue!(
                self.output,
                SetForegroundColor(color),
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        } else {
            queue!(self.output, Print(text))?;
        }
        self.output.flush()
    }

    pub fn styled_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.styled(text, color)?;
        self.print("\n")
    }

    pub fn segments(&mut self, segments: &[Segment]) -> io::Result<()> {
        for segment in segments {
            match segment.color {
                Some(color) => self.styled(&segment.text, color)?,
                None => self.print(&segment.text)?,
            }
        }
        Ok(())
    }

    /// Type text out one character at a time
    pub fn animate(&mut self, text: &str) -> io::Result<()> {
        self.animate_with(text, self.text_delay)
    }

    pub fn animate_with(&mut self, text: &str, delay: Duration) -> io::Result<()> {
        if delay.is_zero() {
            return self.print(text);
        }
        for c in text.chars() {
            queue!(self.output, Print(c))?;
            self.output.flush()?;
            thread::sleep(delay);
        }
        Ok(())
    }

    /// Dramatic pause, skipped when text animation is off
    pub fn pause(&self, millis: u64) {
        if !self.text_delay.is_zero() {
            thread::sleep(Duration::from_millis(millis));
        }
    }

    /// Next line of input without its line ending, `None` at end of input
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask until a number in `min..=max` is entered. `None` at end of input.
    pub fn choose(&mut self, prompt: &str, min: usize, max: usize) -> io::Result<Option<usize>> {
        loop {
            self.print(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(choice) if (min..=max).contains(&choice) => return Ok(Some(choice)),
                _ => self.println(&format!(
                    "Invalid input! Please enter a number between {} and {}.",
                    min, max
                ))?,
            }
        }
    }

    pub fn wait_for_enter(&mut self, prompt: &str) -> io::Result<()> {
        self.animate(prompt)?;
        self.read_line()?;
        Ok(())
    }
}
