//! Scripted terminal reveal for the Skills window
//!
//! A `TypingScript` is a fixed list of lines plus a per-line delay. `frames()`
//! is lazy and always starts from the first line, so remounting the panel
//! replays the whole script. `TypingState` holds what has been revealed.

use std::time::Duration;

pub const SKILLS_TERMINAL_LINES: &[&str] = &[
    "$ whoami",
    "joao-bosco",
    "",
    "$ skills --list",
    "Languages: Java, .NET, Node.js, TypeScript",
    "Databases: SQL, MongoDB, NoSQL, Redis",
    "DevOps: Docker, CI/CD, Kubernetes",
    "Architecture: Microsserviços, Cloud, APIs REST",
    "Practices: TDD, Clean Code, Agile, Mentoria",
    "",
    "$ experience --years",
    "7+ years of professional development",
    "",
    "$ status",
    "Ready for new challenges! 🚀",
];

pub const DEFAULT_LINE_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingScript {
    lines: &'static [&'static str],
    interval: Duration,
}

/// One step of the script: wait `delay`, then reveal `line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingFrame {
    pub index: usize,
    pub line: &'static str,
    pub delay: Duration,
}

impl TypingScript {
    pub const fn new(lines: &'static [&'static str], interval: Duration) -> Self {
        Self { lines, interval }
    }

    pub const fn skills() -> Self {
        Self::new(SKILLS_TERMINAL_LINES, DEFAULT_LINE_INTERVAL)
    }

    pub fn with_interval(self, interval: Duration) -> Self {
        Self { interval, ..self }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn frames(&self) -> impl Iterator<Item = TypingFrame> + '_ {
        self.lines
            .iter()
            .copied()
            .enumerate()
            .map(move |(index, line)| TypingFrame {
                index,
                line,
                delay: self.interval,
            })
    }

    /// Full text once every line has been revealed.
    pub fn transcript(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }
}

impl Default for TypingScript {
    fn default() -> Self {
        Self::skills()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingState {
    current_line: usize,
    displayed: String,
}

impl TypingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal the next line. Returns false once the script is exhausted.
    pub fn advance(&mut self, script: &TypingScript) -> bool {
        let Some(frame) = script.frames().nth(self.current_line) else {
            return false;
        };
        self.reveal(frame);
        true
    }

    pub fn reveal(&mut self, frame: TypingFrame) {
        self.displayed.push_str(frame.line);
        self.displayed.push('\n');
        self.current_line = frame.index + 1;
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn is_complete(&self, script: &TypingScript) -> bool {
        self.current_line >= script.len()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_follow_script_order_with_fixed_delay() {
        let script = TypingScript::skills();
        let frames: Vec<_> = script.frames().collect();

        assert_eq!(frames.len(), 15);
        assert_eq!(frames[0].line, "$ whoami");
        assert_eq!(frames[14].line, "Ready for new challenges! 🚀");
        assert!(frames.iter().all(|f| f.delay == Duration::from_millis(500)));
        assert!(frames.iter().enumerate().all(|(i, f)| f.index == i));
    }

    #[test]
    fn frames_restart_from_the_first_line() {
        let script = TypingScript::skills();
        let first: Vec<_> = script.frames().take(3).collect();
        let again: Vec<_> = script.frames().take(3).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn state_accumulates_lines_until_complete() {
        let script = TypingScript::skills();
        let mut state = TypingState::new();

        assert!(state.advance(&script));
        assert!(state.advance(&script));
        assert_eq!(state.displayed(), "$ whoami\njoao-bosco\n");
        assert_eq!(state.current_line(), 2);

        while state.advance(&script) {}
        assert!(state.is_complete(&script));
        assert_eq!(state.displayed(), script.transcript());
        assert!(!state.advance(&script));
    }

    #[test]
    fn reset_replays_the_script() {
        let script = TypingScript::skills();
        let mut state = TypingState::new();
        while state.advance(&script) {}

        state.reset();
        assert_eq!(state.displayed(), "");
        assert!(state.advance(&script));
        assert_eq!(state.displayed(), "$ whoami\n");
    }

    #[test]
    fn custom_interval_applies_to_every_frame() {
        let script = TypingScript::skills().with_interval(Duration::from_millis(20));
        assert!(script.frames().all(|f| f.delay == Duration::from_millis(20)));
    }
}
