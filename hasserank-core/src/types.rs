/// Core types shared across the elicitation engine.
///
/// A `Comparison` is an unordered pair: identity and hashing are
/// orientation-independent, so `(a, b)` and `(b, a)` are the same comparison.
/// Display orientation relative to a focus item is derived at presentation
/// time, never stored.
use std::fmt;

/// An unresolved pairwise comparison between two distinct items.
///
/// Stored in canonical (lexicographic) element order so that equality,
/// hashing, and removal ignore the order the pair was constructed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comparison {
    a: String,
    b: String,
}

impl Comparison {
    /// Build the canonical comparison for two distinct items.
    ///
    /// # Panics
    ///
    /// Panics if both names are equal — an item is never compared to itself.
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        let (x, y) = (x.into(), y.into());
        assert!(x != y, "comparison requires two distinct items, got \"{x}\" twice");
        if x <= y {
            Comparison { a: x, b: y }
        } else {
            Comparison { a: y, b: x }
        }
    }

    /// First element in canonical order.
    pub fn first(&self) -> &str {
        &self.a
    }

    /// Second element in canonical order.
    pub fn second(&self) -> &str {
        &self.b
    }

    /// True if either element is `item`.
    pub fn involves(&self, item: &str) -> bool {
        self.a == item || self.b == item
    }

    /// The element that is not `item`, or `None` if `item` is not part of
    /// this comparison.
    pub fn other_than(&self, item: &str) -> Option<&str> {
        if self.a == item {
            Some(&self.b)
        } else if self.b == item {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.a, self.b)
    }
}

/// All C(n,2) unordered pairs over an item list — the initial pending set.
pub fn all_pairs(items: &[String]) -> Vec<Comparison> {
    let mut pairs = Vec::with_capacity(items.len() * items.len().saturating_sub(1) / 2);
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            pairs.push(Comparison::new(items[i].clone(), items[j].clone()));
        }
    }
    pairs
}

/// Current judgment mode. Always interpreted relative to the displayed focus
/// item: `Greater` means "focus is preferred over the selected item".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Greater,
    Less,
    Skip,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Greater => write!(f, "greater"),
            Mode::Less => write!(f, "less"),
            Mode::Skip => write!(f, "skip"),
        }
    }
}

/// A parsed input token driving the interaction loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch judgment mode. Does not consume a comparison or re-rank.
    Mode(Mode),
    /// Resolve the i-th displayed comparison under the current mode.
    Select(usize),
    /// Force re-scoring of the displayed candidates.
    Rerank,
    /// Terminate the loop immediately.
    Quit,
}

impl Command {
    /// Parse a single input token. Returns `None` for unrecognized input
    /// (handled as a non-fatal reprompt by the loop).
    pub fn parse(token: &str) -> Option<Command> {
        match token.trim() {
            "g" => Some(Command::Mode(Mode::Greater)),
            "l" => Some(Command::Mode(Mode::Less)),
            "s" => Some(Command::Mode(Mode::Skip)),
            "r" => Some(Command::Rerank),
            "q" => Some(Command::Quit),
            t => t.parse::<usize>().ok().map(Command::Select),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_canonical_identity() {
        let xy = Comparison::new("X", "Y");
        let yx = Comparison::new("Y", "X");
        assert_eq!(xy, yx);
        assert_eq!(xy.first(), "X");
        assert_eq!(xy.second(), "Y");
    }

    #[test]
    #[should_panic(expected = "two distinct items")]
    fn test_comparison_rejects_self_pair() {
        let _ = Comparison::new("X", "X");
    }

    #[test]
    fn test_comparison_other_than() {
        let c = Comparison::new("B", "A");
        assert_eq!(c.other_than("A"), Some("B"));
        assert_eq!(c.other_than("B"), Some("A"));
        assert_eq!(c.other_than("Z"), None);
    }

    #[test]
    fn test_all_pairs_count() {
        let items: Vec<String> = (0..6).map(|i| format!("item{i}")).collect();
        let pairs = all_pairs(&items);
        assert_eq!(pairs.len(), 6 * 5 / 2);

        // No duplicates under canonical identity
        for (i, p) in pairs.iter().enumerate() {
            for q in &pairs[i + 1..] {
                assert_ne!(p, q, "duplicate pair {p}");
            }
        }
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("g"), Some(Command::Mode(Mode::Greater)));
        assert_eq!(Command::parse("l"), Some(Command::Mode(Mode::Less)));
        assert_eq!(Command::parse("s"), Some(Command::Mode(Mode::Skip)));
        assert_eq!(Command::parse("r"), Some(Command::Rerank));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("3"), Some(Command::Select(3)));
        assert_eq!(Command::parse(" 0 "), Some(Command::Select(0)));
        assert_eq!(Command::parse("x"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("-1"), None);
    }
}
