//! Character-by-character reveal of a fixed string.

pub const DEFAULT_TYPING_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    target: String,
    revealed: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let total = target.chars().count();
        Self {
            target,
            revealed: 0,
            total,
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.total
    }

    /// Reveals one more character. Once everything is shown this is a no-op
    /// returning `false`.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn text(&self) -> &str {
        match self.target.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.target[..end],
            None => &self.target,
        }
    }
}
