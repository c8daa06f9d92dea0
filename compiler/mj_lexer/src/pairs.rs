//! Bracket pairing over a scanned token list.
//!
//! The lexer only tags brackets; it never checks that they balance. This is
//! the consumer side: each bracket kind is matched independently with its
//! own stack, so `( [ ) ]` pairs `(` with `)` and `[` with `]`, which is what
//! an editor's "jump to matching bracket" wants.

use crate::token::{BracketKind, Token};

/// Result of [`match_brackets`]: partner lookup by token index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BracketMatches {
    /// `partners[i]` is the index of the token paired with token `i`.
    partners: Vec<Option<usize>>,
    /// Indices of bracket tokens left without a partner, ascending.
    unbalanced: Vec<usize>,
}

impl BracketMatches {
    /// Index of the bracket paired with the token at `index`, if any.
    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(index).copied().flatten()
    }

    pub fn unbalanced(&self) -> &[usize] {
        &self.unbalanced
    }

    pub fn is_balanced(&self) -> bool {
        self.unbalanced.is_empty()
    }
}

/// Pair up the bracket tokens of `tokens`.
pub fn match_brackets(tokens: &[Token]) -> BracketMatches {
    let mut partners = vec![None; tokens.len()];
    let mut unbalanced = Vec::new();
    let mut open: [Vec<usize>; BracketKind::ALL.len()] = Default::default();

    for (index, token) in tokens.iter().enumerate() {
        let Some(pair) = token.pair else { continue };
        let stack = &mut open[pair.kind() as usize - 1];
        if pair.is_open() {
            stack.push(index);
        } else if let Some(opener) = stack.pop() {
            partners[opener] = Some(index);
            partners[index] = Some(opener);
        } else {
            unbalanced.push(index);
        }
    }

    unbalanced.extend(open.into_iter().flatten());
    unbalanced.sort_unstable();
    BracketMatches {
        partners,
        unbalanced,
    }
}
