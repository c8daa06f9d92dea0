//! Lexer configuration.

/// Initial input buffer size, in chars.
pub const DEFAULT_BUFFER_CAPACITY: usize = 16 * 1024;

/// What to do with a character no token pattern starts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnmatchedPolicy {
    /// Drop the character silently and keep scanning.
    ///
    /// This is the highlighting behaviour: stray `#`, `"` or a lone `&`
    /// simply stay uncoloured.
    #[default]
    Skip,
    /// Return [`LexError::Lexical`](crate::LexError::Lexical) for it.
    Error,
}

/// Knobs for [`Lexer::with_config`](crate::Lexer::with_config).
///
/// ```
/// use mj_lexer::{LexerConfig, UnmatchedPolicy};
///
/// let config = LexerConfig::default()
///     .buffer_capacity(256)
///     .unmatched(UnmatchedPolicy::Error);
/// assert_eq!(config.buffer_capacity, 256);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexerConfig {
    /// Initial input buffer size in chars (clamped to at least 1). The
    /// buffer still grows past this for tokens that do not fit.
    pub buffer_capacity: usize,
    pub unmatched: UnmatchedPolicy,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            unmatched: UnmatchedPolicy::Skip,
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn buffer_capacity(mut self, chars: usize) -> Self {
        self.buffer_capacity = chars;
        self
    }

    #[must_use]
    pub fn unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }
}
