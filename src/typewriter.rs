//! Character-by-character text output.

use colored::{Color, Colorize};
use std::io::Write;
use std::time::Duration;
use tokio::time::sleep;

use crate::error::Result;
use crate::terminal::{Console, NEWLINE};

/// Types a line one character at a time.
///
/// Spaces are emitted without delay; every other character waits `delay`.
/// Each call takes `&mut` of the writer, so two lines can never interleave.
#[derive(Debug, Clone, Copy)]
pub struct Typewriter {
    delay: Duration,
    color: Option<Color>,
}

impl Typewriter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Type `text` after the console padding, then end the line.
    pub async fn type_line<W: Write>(&self, out: &mut W, console: &Console, text: &str) -> Result<()> {
        write!(out, "{}", console.pad())?;
        self.type_text(out, text).await?;
        out.write_all(NEWLINE.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Type `text` with no padding or line break.
    pub async fn type_text<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        for ch in text.chars() {
            match self.color {
                Some(color) => write!(out, "{}", ch.to_string().color(color))?,
                None => write!(out, "{}", ch)?,
            }
            out.flush()?;
            if ch != ' ' && !self.delay.is_zero() {
                sleep(self.delay).await;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_spaces_are_free() {
        let tw = Typewriter::new(10);
        let mut buf = Vec::new();
        let start = Instant::now();
        tw.type_text(&mut buf, "a b  c").await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(30));
        assert_eq!(String::from_utf8(buf).unwrap(), "a b  c");
    }

    #[tokio::test(start_paused = true)]
    async fn test_type_line_pads_and_terminates() {
        let tw = Typewriter::new(5);
        let console = Console::new(2, false);
        let mut buf = Vec::new();
        tw.type_line(&mut buf, &console, "Get ready...").await.unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "  Get ready...\r\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_line() {
        let tw = Typewriter::new(5);
        let mut buf = Vec::new();
        let start = Instant::now();
        tw.type_line(&mut buf, &Console::new(0, false), "").await.unwrap();
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(buf, b"\r\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_multibyte_characters() {
        let tw = Typewriter::new(1);
        let mut buf = Vec::new();
        tw.type_text(&mut buf, "✔ ok").await.unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "✔ ok");
    }
}
