use core::fmt;

/// Error returned when a cursor has no valid "after" target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPosition {
    /// The cursor is one past the last element.
    End,
    /// Nothing follows the cursor, so there is nothing to erase.
    NoSuccessor,
}

impl fmt::Display for InvalidPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPosition::End => f.write_str("invalid position: cursor is at the end of the list"),
            InvalidPosition::NoSuccessor => {
                f.write_str("invalid position: no element follows the cursor")
            }
        }
    }
}

impl core::error::Error for InvalidPosition {}

/// Reports a rejected anchor and hands the error back.
pub(crate) fn rejected(operation: &'static str, error: InvalidPosition) -> InvalidPosition {
    #[cfg(feature = "log")]
    log::debug!("{operation} rejected: {error}");
    #[cfg(not(feature = "log"))]
    let _ = operation;
    error
}
