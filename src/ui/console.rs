//! In-app console
//!
//! Keeps the most recent editor messages for the console panel and mirrors
//! every message to the `log` facade, so the same lines reach stderr through
//! `env_logger`.

use std::collections::VecDeque;

/// Bounded message log shown by the console panel
#[derive(Debug, Clone)]
pub struct Console {
    lines: VecDeque<String>,
    capacity: usize,
}

impl Console {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Record a message at `level`; the oldest line is dropped when full
    pub fn log(&mut self, level: log::Level, message: impl Into<String>) {
        let message = message.into();
        log::log!(level, "{}", message);

        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(log::Level::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(log::Level::Warn, message);
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_drops_oldest() {
        let mut console = Console::new(2);
        console.info("one");
        console.info("two");
        console.warn("three");

        let lines: Vec<_> = console.lines().collect();
        assert_eq!(lines, vec!["two", "three"]);
        assert_eq!(console.last(), Some("three"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut console = Console::new(0);
        console.info("ignored");
        assert!(console.is_empty());
    }
}
