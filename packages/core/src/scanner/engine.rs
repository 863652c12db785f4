//! Scanner driver
//!
//! Feeds the input to the transition function one byte at a time and decides
//! acceptance once the input runs out.

use super::types::{Leg, LegKind, LocatedLeg, Rejection, ScanState};
use crate::error::SyntaxViolation;

/// Forward-only scanner over a single path string
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    /// Text being scanned
    pub(super) input: &'a str,
    /// Current automaton state
    pub(super) state: ScanState,
    /// Byte offset of the byte being examined
    pub(super) position: usize,
    /// Byte offset where the current leg began
    pub(super) leg_start: usize,
    /// Set by a recursive descent leg, cleared by any later leg
    pub(super) descent_pending: bool,
}

impl<'a> Scanner<'a> {
    #[inline]
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            state: ScanState::ExpectRoot,
            position: 0,
            leg_start: 0,
            descent_pending: false,
        }
    }

    /// Scan the whole input, reporting each completed leg to `on_leg`
    pub(crate) fn run<F>(mut self, mut on_leg: F) -> Result<(), Rejection>
    where
        F: FnMut(LocatedLeg<'a>),
    {
        let input = self.input;
        let bytes = input.as_bytes();
        while self.position < bytes.len() {
            self.step(bytes[self.position], &mut on_leg)?;
            self.position += 1;
        }
        self.finish(&mut on_leg)
    }

    /// Settle the leg in progress at end of input and check the obligation
    fn finish<F>(&mut self, on_leg: &mut F) -> Result<(), Rejection>
    where
        F: FnMut(LocatedLeg<'a>),
    {
        let end = self.input.len();
        match self.state {
            ScanState::ExpectRoot => return Err(self.reject(SyntaxViolation::MissingRoot)),
            ScanState::LegBoundary => {}
            ScanState::InIdentifier => self.complete(LegKind::Member, end, on_leg),
            ScanState::DotStar => self.complete(LegKind::WildcardMember, end, on_leg),
            ScanState::AfterDot => return Err(self.reject(SyntaxViolation::EmptyIdentifier)),
            ScanState::BareStar => return Err(self.reject(SyntaxViolation::LoneAsterisk)),
            ScanState::AfterBracket | ScanState::InDigits | ScanState::BracketStar => {
                return Err(self.reject(SyntaxViolation::UnterminatedBracket));
            }
        }

        if self.descent_pending {
            return Err(self.reject(SyntaxViolation::DanglingRecursiveDescent));
        }
        Ok(())
    }

    /// Close the current leg at byte offset `end`
    pub(super) fn complete<F>(&mut self, kind: LegKind, end: usize, on_leg: &mut F)
    where
        F: FnMut(LocatedLeg<'a>),
    {
        let input = self.input;
        let text = &input[self.leg_start..end];
        let leg = match kind {
            LegKind::Member => Leg::Member(&text[1..]),
            LegKind::WildcardMember => Leg::WildcardMember,
            LegKind::Index => Leg::Index(&text[1..text.len() - 1]),
            LegKind::WildcardIndex => Leg::WildcardIndex,
            LegKind::RecursiveDescent => Leg::RecursiveDescent,
        };
        self.descent_pending = kind == LegKind::RecursiveDescent;
        on_leg(LocatedLeg {
            leg,
            start: self.leg_start,
            end,
        });
    }

    #[inline]
    pub(super) fn reject(&self, violation: SyntaxViolation) -> Rejection {
        Rejection {
            position: self.position,
            violation,
        }
    }

    /// Character starting at the current position, for diagnostics
    #[inline]
    pub(super) fn current_char(&self) -> char {
        self.input
            .get(self.position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}
