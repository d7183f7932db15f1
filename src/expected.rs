use std::fmt;

/// What a rejecting combinator would have accepted at the failure position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected<T> {
    /// A token-match wanted this token
    Token(T),
    /// An end-of-input match found more input
    EndOfInput,
    /// A repetition matched a number of times outside its bounds
    Count { min: usize, max: Option<usize> },
}

impl<T: fmt::Debug> fmt::Display for Expected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(token) => write!(f, "{:?}", token),
            Expected::EndOfInput => write!(f, "end of input"),
            Expected::Count { min, max: Some(max) } => {
                write!(f, "between {} and {} repetitions", min, max)
            }
            Expected::Count { min, max: None } => write!(f, "at least {} repetitions", min),
        }
    }
}

/// Insertion-ordered, duplicate-free set of rejectors
///
/// Only `PartialEq` is required of the token type, so membership is a linear
/// scan. Rejector sets stay small: one entry per alternative tried at a single
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedSet<T> {
    entries: Vec<Expected<T>>,
}

impl<T> ExpectedSet<T> {
    pub fn new() -> Self {
        ExpectedSet {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expected<T>> {
        self.entries.iter()
    }
}

impl<T: PartialEq> ExpectedSet<T> {
    pub fn single(expected: Expected<T>) -> Self {
        ExpectedSet {
            entries: vec![expected],
        }
    }

    /// Add a rejector, returning false if it was already present
    pub fn insert(&mut self, expected: Expected<T>) -> bool {
        if self.entries.contains(&expected) {
            return false;
        }
        self.entries.push(expected);
        true
    }

    pub fn contains(&self, expected: &Expected<T>) -> bool {
        self.entries.contains(expected)
    }

    /// Whether some token-match in the set wanted `token`
    pub fn expects_token(&self, token: &T) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, Expected::Token(wanted) if wanted == token))
    }
}

impl<T> Default for ExpectedSet<T> {
    fn default() -> Self {
        ExpectedSet::new()
    }
}

impl<T: PartialEq> Extend<Expected<T>> for ExpectedSet<T> {
    fn extend<I: IntoIterator<Item = Expected<T>>>(&mut self, iter: I) {
        for expected in iter {
            self.insert(expected);
        }
    }
}

impl<T: PartialEq> FromIterator<Expected<T>> for ExpectedSet<T> {
    fn from_iter<I: IntoIterator<Item = Expected<T>>>(iter: I) -> Self {
        let mut set = ExpectedSet::new();
        set.extend(iter);
        set
    }
}

impl<T> IntoIterator for ExpectedSet<T> {
    type Item = Expected<T>;
    type IntoIter = std::vec::IntoIter<Expected<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ExpectedSet<T> {
    type Item = &'a Expected<T>;
    type IntoIter = std::slice::Iter<'a, Expected<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: fmt::Debug> fmt::Display for ExpectedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entries.as_slice() {
            [] => write!(f, "unexpected input"),
            [only] => write!(f, "expected {}", only),
            entries => {
                write!(f, "expected one of {{")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", entry)?;
                }
                write!(f, "}}")
            }
        }
    }
}
