//! Threaded parse state, passed explicitly by `&mut self` rather than kept
//! as process-wide singletons.
//!
//! `recursion` is consulted, not decremented, per matcher entry (see
//! `parser::try_node`): it counts total productions entered over a whole
//! parse rather than live call-stack depth.

use crate::limit::LimitTracker;
use crate::token::{Token, TokenKind};

pub struct ParseContext<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Highest token index ever reached, for error reporting.
    maximum_extent: usize,
    pub recursion: LimitTracker,
}

impl<'a> ParseContext<'a> {
    pub fn new(tokens: &'a [Token], recursion_limit: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            maximum_extent: 0,
            recursion: LimitTracker::new(recursion_limit),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub fn nth(&self, n: usize) -> &Token {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Advance past the current token, returning its index, and bump
    /// `maximum_extent`.
    pub fn advance(&mut self) -> usize {
        let idx = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        if self.pos > self.maximum_extent {
            self.maximum_extent = self.pos;
        }
        idx
    }

    pub fn maximum_extent(&self) -> usize {
        self.maximum_extent
    }

    pub fn recursion_limited(&self) -> bool {
        self.recursion.limited()
    }
}
