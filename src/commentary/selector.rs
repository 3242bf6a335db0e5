//! Non-repeating line selection.

use std::collections::VecDeque;

use crate::core::GameRng;

/// The most recent lines spoken, oldest first.
#[derive(Clone, Debug, Default)]
pub struct LineHistory {
    lines: VecDeque<String>,
    limit: usize,
}

impl LineHistory {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(limit + 1),
            limit,
        }
    }

    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Remember a line, forgetting the oldest beyond the limit.
    pub fn push(&mut self, line: String) {
        self.lines.push_back(line);
        while self.lines.len() > self.limit {
            self.lines.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Pick a line from `pool`, avoiding recent ones, and record it.
///
/// When every line in the pool is recent the whole pool is eligible again.
/// Returns `None` only for an empty pool.
pub fn select_line(pool: &[String], history: &mut LineHistory, rng: &mut GameRng) -> Option<String> {
    let fresh: Vec<&String> = pool.iter().filter(|line| !history.contains(line)).collect();

    let line = if fresh.is_empty() {
        rng.choose(pool)?.clone()
    } else {
        (*rng.choose(&fresh)?).clone()
    };

    history.push(line.clone());
    Some(line)
}
