//! Error type for checked access to an empty container.

/// Returned when the value of an empty [`Nullable`](crate::Nullable) is requested.
///
/// Dereferencing an empty container panics with this error's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyError;

impl core::fmt::Display for EmptyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("accessed an empty nullable value")
    }
}

impl std::error::Error for EmptyError {}
