//! State transition implementations
//!
//! One transition per input byte. A leg whose end is only visible from the
//! following byte (a member name, a `.*` wildcard) is closed on that byte and
//! the byte is then dispatched as the start of the next leg; nothing is ever
//! re-read from an earlier position.

use super::engine::Scanner;
use super::types::{LegKind, LocatedLeg, ScanState};
use crate::error::SyntaxViolation;
use crate::tokens::{ROOT_BYTE, is_identifier_continue, is_identifier_start};

type Step = Result<(), super::types::Rejection>;

impl<'a> Scanner<'a> {
    /// Consume `byte` at the current position
    pub(super) fn step<F>(&mut self, byte: u8, on_leg: &mut F) -> Step
    where
        F: FnMut(LocatedLeg<'a>),
    {
        match self.state {
            ScanState::ExpectRoot => {
                if byte == ROOT_BYTE {
                    self.state = ScanState::LegBoundary;
                    Ok(())
                } else {
                    Err(self.reject(SyntaxViolation::MissingRoot))
                }
            }

            ScanState::LegBoundary => self.dispatch(byte),

            ScanState::AfterDot => match byte {
                b'*' => {
                    self.state = ScanState::DotStar;
                    Ok(())
                }
                b'.' => Err(self.reject(SyntaxViolation::EmptyIdentifier)),
                b if is_identifier_start(b) => {
                    self.state = ScanState::InIdentifier;
                    Ok(())
                }
                _ => Err(self.reject(SyntaxViolation::InvalidIdentifierStart(
                    self.current_char(),
                ))),
            },

            ScanState::DotStar => {
                if byte == b'*' {
                    self.complete(LegKind::RecursiveDescent, self.position + 1, on_leg);
                    self.state = ScanState::LegBoundary;
                    Ok(())
                } else {
                    self.complete(LegKind::WildcardMember, self.position, on_leg);
                    self.dispatch(byte)
                }
            }

            ScanState::BareStar => {
                if byte == b'*' {
                    self.complete(LegKind::RecursiveDescent, self.position + 1, on_leg);
                    self.state = ScanState::LegBoundary;
                    Ok(())
                } else {
                    Err(self.reject(SyntaxViolation::LoneAsterisk))
                }
            }

            ScanState::InIdentifier => {
                if is_identifier_continue(byte) {
                    Ok(())
                } else {
                    self.complete(LegKind::Member, self.position, on_leg);
                    self.dispatch(byte)
                }
            }

            ScanState::AfterBracket => match byte {
                b'0'..=b'9' => {
                    self.state = ScanState::InDigits;
                    Ok(())
                }
                b'*' => {
                    self.state = ScanState::BracketStar;
                    Ok(())
                }
                b']' => Err(self.reject(SyntaxViolation::EmptyIndex)),
                b'-' | b'+' => Err(self.reject(SyntaxViolation::SignedIndex)),
                _ => Err(self.reject(SyntaxViolation::InvalidIndexCharacter(
                    self.current_char(),
                ))),
            },

            ScanState::InDigits => match byte {
                b'0'..=b'9' => Ok(()),
                b']' => {
                    self.complete(LegKind::Index, self.position + 1, on_leg);
                    self.state = ScanState::LegBoundary;
                    Ok(())
                }
                _ => Err(self.reject(SyntaxViolation::InvalidIndexCharacter(
                    self.current_char(),
                ))),
            },

            ScanState::BracketStar => {
                if byte == b']' {
                    self.complete(LegKind::WildcardIndex, self.position + 1, on_leg);
                    self.state = ScanState::LegBoundary;
                    Ok(())
                } else {
                    Err(self.reject(SyntaxViolation::InvalidIndexCharacter(
                        self.current_char(),
                    )))
                }
            }
        }
    }

    /// Pick the leg production that `byte` starts
    fn dispatch(&mut self, byte: u8) -> Step {
        self.leg_start = self.position;
        self.state = match byte {
            b'.' => ScanState::AfterDot,
            b'[' => ScanState::AfterBracket,
            b'*' => ScanState::BareStar,
            _ => {
                return Err(self.reject(SyntaxViolation::UnexpectedCharacter(
                    self.current_char(),
                )));
            }
        };
        Ok(())
    }
}
