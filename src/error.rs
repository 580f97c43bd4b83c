use std::error;
use std::fmt;
use std::result;

/// A broken structural invariant found by `validate`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Violation {
    /// The root is red.
    RedRoot,
    /// A red node has a red child.
    RedChildOfRed,
    /// Two paths from the same node to empty slots pass through different numbers of black
    /// nodes.
    BlackHeightMismatch,
    /// A child does not point back at its parent.
    BrokenParentLink,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Violation::RedRoot => "root is red",
            Violation::RedChildOfRed => "red node has a red child",
            Violation::BlackHeightMismatch => "black heights differ between paths",
            Violation::BrokenParentLink => "child does not link back to its parent",
        };
        f.write_str(description)
    }
}

/// Errors returned by the fallible operations of the maps and sets in this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// `try_insert` was called with a key that is already present.
    DuplicateKey,
    /// `try_remove` was called with a key that is not present.
    NotFound,
    /// Keys are not in ascending order with respect to the comparator, so the comparator is not
    /// a consistent total order.
    InvalidConfiguration,
    /// The tree breaks one of the red-black invariants.
    InvariantViolation(Violation),
}

pub type Result<T> = result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateKey => write!(f, "key already exists"),
            Error::NotFound => write!(f, "key does not exist"),
            Error::InvalidConfiguration => {
                write!(f, "keys are out of order; comparator is not a total order")
            },
            Error::InvariantViolation(violation) => {
                write!(f, "red-black invariant violated: {}", violation)
            },
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::{Error, Violation};

    #[test]
    fn test_display() {
        assert_eq!(Error::DuplicateKey.to_string(), "key already exists");
        assert_eq!(Error::NotFound.to_string(), "key does not exist");
        assert_eq!(
            Error::InvariantViolation(Violation::RedRoot).to_string(),
            "red-black invariant violated: root is red",
        );
    }
}
