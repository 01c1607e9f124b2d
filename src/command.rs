//! Serial command intake
//!
//! Commands arrive one per line as ASCII text:
//!
//! ```text
//! <channel> <level> [duration_ms]
//! ```
//!
//! A missing duration means an instant change. Levels above `MAX_LEVEL`
//! are accepted here and clamped when the fade is armed.

use core::str::FromStr;

use embassy_time::{Duration, Instant};
use heapless::String;

use crate::ChannelId;

/// Request to fade one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeCommand {
    pub channel: ChannelId,
    pub level: u32,
    pub duration: Duration,
}

/// Reasons a line could not be turned into a [`FadeCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Line held only whitespace
    Empty,
    /// Level field is missing
    MissingField,
    /// A field is not a number or out of range for its type
    InvalidNumber,
    /// More than three fields
    TrailingInput,
    /// Line did not fit into the reader buffer
    Overflow,
}

impl FadeCommand {
    pub fn parse_from_str(line: &str) -> Result<Self, CommandError> {
        let mut fields = line.split_ascii_whitespace();
        let channel = parse_field(fields.next().ok_or(CommandError::Empty)?)?;
        let level = parse_field(fields.next().ok_or(CommandError::MissingField)?)?;
        let duration_ms: u64 = match fields.next() {
            Some(field) => parse_field(field)?,
            None => 0,
        };
        if fields.next().is_some() {
            return Err(CommandError::TrailingInput);
        }

        Ok(Self {
            channel,
            level,
            duration: Duration::from_millis(duration_ms),
        })
    }
}

fn parse_field<T: FromStr>(field: &str) -> Result<T, CommandError> {
    field.parse().map_err(|_| CommandError::InvalidNumber)
}

/// Line framing for a byte stream
///
/// N is the longest line accepted, terminator excluded
#[derive(Debug)]
pub struct LineReader<const N: usize> {
    buffer: String<N>,
    /// Longest gap allowed between two bytes of the same line
    timeout: Duration,
    last_byte: Option<Instant>,
    /// Skipping the rest of an overlong line
    discarding: bool,
}

impl<const N: usize> LineReader<N> {
    pub const fn new(timeout: Duration) -> Self {
        Self {
            buffer: String::new(),
            timeout,
            last_byte: None,
            discarding: false,
        }
    }

    /// Bytes of the current partial line
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Feed one received byte
    ///
    /// Returns a result once a line is complete. A partial line older than
    /// the timeout is dropped before the byte is stored.
    pub fn push(&mut self, byte: u8, now: Instant) -> Option<Result<FadeCommand, CommandError>> {
        if let Some(last) = self.last_byte {
            if now.saturating_duration_since(last) > self.timeout {
                self.buffer.clear();
                self.discarding = false;
            }
        }
        self.last_byte = Some(now);

        match byte {
            b'\n' | b'\r' => {
                if self.discarding {
                    self.discarding = false;
                    return None;
                }
                if self.buffer.is_empty() {
                    return None;
                }
                let result = FadeCommand::parse_from_str(&self.buffer);
                self.buffer.clear();
                Some(result)
            }
            _ if self.discarding => None,
            _ => {
                if self.buffer.push(char::from(byte)).is_err() {
                    self.buffer.clear();
                    self.discarding = true;
                    return Some(Err(CommandError::Overflow));
                }
                None
            }
        }
    }
}
