//! The ordered bells struck on one day.

use std::fmt;
use std::slice;

use crate::bell::Bell;

/// The ordered bells struck on one day.
///
/// Produced by the day-range generator: every bell appears exactly once, and
/// index 0 is the first bell struck.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChimeSequence(Vec<Bell>);

impl ChimeSequence {
    pub(crate) fn from_bells(bells: Vec<Bell>) -> Self {
        Self(bells)
    }

    /// Returns the bells in striking order.
    pub fn bells(&self) -> &[Bell] {
        &self.0
    }

    /// Returns the bell numbers in striking order.
    pub fn numbers(&self) -> Vec<u8> {
        self.0.iter().map(|b| b.get()).collect()
    }

    /// Returns the number of bells in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence holds no bells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the bells in striking order.
    pub fn iter(&self) -> slice::Iter<'_, Bell> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ChimeSequence {
    type Item = &'a Bell;
    type IntoIter = slice::Iter<'a, Bell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[Bell]> for ChimeSequence {
    fn as_ref(&self) -> &[Bell] {
        &self.0
    }
}

impl fmt::Display for ChimeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, bell) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{bell}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(numbers: &[u8]) -> ChimeSequence {
        ChimeSequence::from_bells(numbers.iter().map(|&n| Bell::new(n).unwrap()).collect())
    }

    #[test]
    fn display_as_list() {
        assert_eq!(seq(&[2, 1, 3]).to_string(), "[2, 1, 3]");
        assert_eq!(seq(&[]).to_string(), "[]");
    }

    #[test]
    fn numbers_preserve_order() {
        assert_eq!(seq(&[5, 4, 10]).numbers(), vec![5, 4, 10]);
    }

    #[test]
    fn len_and_iter() {
        let s = seq(&[1, 2, 3]);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.iter().count(), 3);
        assert_eq!((&s).into_iter().next().unwrap().get(), 1);
    }
}
