//! Upload state machine.
//!
//! `Idle → InFlight → Complete`, with `reset` leading back to `Idle` from
//! anywhere. Any other edge is refused.

use std::fmt;

use crate::types::{ConvertedStatement, Phase};

/// A refused state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionError {
    pub from: Phase,
    pub to: Phase,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot move from {} to {}", self.from, self.to)
    }
}

impl std::error::Error for TransitionError {}

/// State of the single upload attempt a widget tracks.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    /// A file was accepted and its upload is pending.
    InFlight { file_name: String },
    /// The conversion succeeded and its statement is displayed.
    Complete(ConvertedStatement),
}

impl UploadState {
    /// Visible phase for this state.
    pub fn phase(&self) -> Phase {
        match self {
            UploadState::Idle => Phase::Idle,
            UploadState::InFlight { .. } => Phase::InFlight,
            UploadState::Complete(_) => Phase::Complete,
        }
    }

    /// Name of the file being uploaded, while in flight.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            UploadState::InFlight { file_name } => Some(file_name),
            _ => None,
        }
    }

    /// The displayed statement, once complete.
    pub fn statement(&self) -> Option<&ConvertedStatement> {
        match self {
            UploadState::Complete(statement) => Some(statement),
            _ => None,
        }
    }

    /// `Idle → InFlight`.
    pub fn begin(&mut self, file_name: impl Into<String>) -> Result<(), TransitionError> {
        match self {
            UploadState::Idle => {
                *self = UploadState::InFlight {
                    file_name: file_name.into(),
                };
                Ok(())
            }
            other => Err(TransitionError {
                from: other.phase(),
                to: Phase::InFlight,
            }),
        }
    }

    /// `InFlight → Complete`.
    pub fn complete(&mut self, statement: ConvertedStatement) -> Result<(), TransitionError> {
        match self {
            UploadState::InFlight { .. } => {
                *self = UploadState::Complete(statement);
                Ok(())
            }
            other => Err(TransitionError {
                from: other.phase(),
                to: Phase::Complete,
            }),
        }
    }

    /// Back to `Idle`, dropping the file name and statement.
    pub fn reset(&mut self) {
        *self = UploadState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatementResult;

    fn statement() -> ConvertedStatement {
        ConvertedStatement {
            result: StatementResult {
                transaction_period: None,
                total_maechul: 10.0,
                maechul_wonka: 4.0,
                maechul_total_iik: 6.0,
                ipgeum_total: 8.0,
            },
            updated: false,
            output_filename: "out.xlsx".to_string(),
            record_id: None,
        }
    }

    #[test]
    fn test_forward_path() {
        let mut state = UploadState::default();
        assert_eq!(state.phase(), Phase::Idle);

        state.begin("ledger.xlsx").unwrap();
        assert_eq!(state.phase(), Phase::InFlight);
        assert_eq!(state.file_name(), Some("ledger.xlsx"));

        state.complete(statement()).unwrap();
        assert_eq!(state.phase(), Phase::Complete);
        assert_eq!(state.statement().map(|s| s.output_filename.as_str()), Some("out.xlsx"));
        assert_eq!(state.file_name(), None);
    }

    #[test]
    fn test_refuses_reentry_and_skips() {
        let mut state = UploadState::default();
        assert_eq!(
            state.complete(statement()),
            Err(TransitionError { from: Phase::Idle, to: Phase::Complete })
        );

        state.begin("a.xlsx").unwrap();
        assert_eq!(
            state.begin("b.xlsx"),
            Err(TransitionError { from: Phase::InFlight, to: Phase::InFlight })
        );
        assert_eq!(state.file_name(), Some("a.xlsx"));

        state.complete(statement()).unwrap();
        assert!(state.begin("c.xlsx").is_err());
        assert!(state.complete(statement()).is_err());
    }

    #[test]
    fn test_reset_from_any_phase() {
        let mut state = UploadState::default();
        state.reset();
        assert_eq!(state, UploadState::Idle);

        state.begin("a.xlsx").unwrap();
        state.reset();
        assert_eq!(state, UploadState::Idle);

        state.begin("a.xlsx").unwrap();
        state.complete(statement()).unwrap();
        state.reset();
        assert_eq!(state, UploadState::Idle);
        assert!(state.statement().is_none());
    }
}
