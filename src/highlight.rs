use std::time::Duration;

use crate::interval::Interval;

pub const HIGHLIGHT_INTERVAL: Duration = Duration::from_millis(150);

/// Walks an accent across a string, one character per tick, forever.
#[derive(Debug, Clone)]
pub struct Highlight {
    text: String,
    len: usize,
    index: Option<usize>,
    interval: Interval,
}

impl Highlight {
    pub fn new(text: impl Into<String>, period: Duration) -> Self {
        let text = text.into();
        Self {
            len: text.chars().count(),
            text,
            index: None,
            interval: Interval::new(period),
        }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        let ticks = self.interval.drain(elapsed);
        if ticks == 0 || self.len == 0 {
            return;
        }

        let len = self.len as u64;
        // no highlight counts as position -1
        let start = self.index.map_or(len - 1, |i| i as u64);
        self.index = Some(((start + ticks % len) % len) as usize);
    }

    /// Index (in characters) of the highlighted character, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Split the text around the highlighted character.
    pub fn parts(&self) -> (&str, &str, &str) {
        let Some(idx) = self.index else {
            return (&self.text, "", "");
        };

        let mut chars = self.text.char_indices().skip(idx);
        match chars.next() {
            Some((start, ch)) => {
                let end = start + ch.len_utf8();
                (&self.text[..start], &self.text[start..end], &self.text[end..])
            }
            None => (&self.text, "", ""),
        }
    }
}
