use ark_std::{error, fmt};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum AlgebraError {
    DeserializationError,
    SerializationError,
    IndexError,
    ParameterError,
    GroupInversionError,
    PointNotOnCurve,
    PointNotInSubgroup,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AlgebraError::*;
        f.write_str(match self {
            DeserializationError => "Could not deserialize object",
            SerializationError => "Could not serialize object",
            IndexError => "Index out of bounds",
            ParameterError => "Unexpected parameter for method or function",
            GroupInversionError => "Group Element not invertible",
            PointNotOnCurve => "Point is not on the curve",
            PointNotInSubgroup => "Point is not in the prime-order subgroup",
        })
    }
}

impl error::Error for AlgebraError {}
