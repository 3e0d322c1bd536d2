use ark_std::{error, fmt, string::String};
use zsl_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, SnarkError>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SnarkError {
    /// Algebra error
    Algebra(AlgebraError),
    /// Error with message
    Message(String),
    /// No evaluation domain of at least this size exists over the field.
    DomainTooLarge(usize),
    /// Evaluation domains have a positive power-of-two size.
    InvalidDomainSize(usize),
    /// A vector handed to a domain operation has the wrong length.
    DomainSizeMismatch {
        /// The domain size.
        expected: usize,
        /// The vector length.
        actual: usize,
    },
    /// The assignment does not match the variable layout of the constraint system.
    InvalidAssignmentLength,
    /// More primary inputs than the verification key accepts.
    PrimaryInputTooLong {
        /// The number of inputs of the key.
        max: usize,
        /// The number of inputs supplied.
        actual: usize,
    },
    /// The number of primary inputs differs from the verification key.
    PrimaryInputLengthMismatch {
        /// The number of inputs of the key.
        expected: usize,
        /// The number of inputs supplied.
        actual: usize,
    },
    /// A constraint refers to a variable the system does not have.
    InvalidConstraintSystem,
    /// Division by zero.
    DivisionByZero,
}

impl fmt::Display for SnarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SnarkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            Message(e) => f.write_str(e),
            DomainTooLarge(n) => write!(f, "No evaluation domain of size {} exists.", n),
            InvalidDomainSize(n) => write!(f, "{} is not a valid evaluation domain size.", n),
            DomainSizeMismatch { expected, actual } => write!(
                f,
                "Domain size mismatch: expected {} elements, got {}.",
                expected, actual
            ),
            InvalidAssignmentLength => f.write_str("Invalid assignment length."),
            PrimaryInputTooLong { max, actual } => write!(
                f,
                "Too many primary inputs: at most {} expected, got {}.",
                max, actual
            ),
            PrimaryInputLengthMismatch { expected, actual } => write!(
                f,
                "Primary input length mismatch: expected {}, got {}.",
                expected, actual
            ),
            InvalidConstraintSystem => f.write_str("Invalid constraint system."),
            DivisionByZero => f.write_str("Division by zero."),
        }
    }
}

impl error::Error for SnarkError {}

impl From<AlgebraError> for SnarkError {
    fn from(e: AlgebraError) -> SnarkError {
        SnarkError::Algebra(e)
    }
}
