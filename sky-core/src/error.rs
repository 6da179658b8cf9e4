use crate::types::Step;
use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by the parser, the simulator and the front end.
///
/// Every variant is fatal at the top level; there is no partial-result
/// recovery, since a correct step count depends on simulating every step
/// of the full input.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file missing or unreadable.
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the input did not match `position=<X, Y> velocity=<DX, DY>`.
    #[error("malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    /// The input contained zero point records.
    #[error("input contains no points")]
    EmptyInput,

    /// The field never started expanding within the configured step cap.
    #[error("no convergence within {steps} steps")]
    NonConvergent { steps: Step },
}
