use thiserror::Error;

/// Recoverable failures reported by the checked buffer and list accessors.
///
/// The unchecked paths (`Index`, [`crate::LayoutList::insert`], [`crate::LayoutList::remove_at`])
/// fail fast instead of returning these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The index lies outside `[0, length)` (or `[0, length]` for insertion).
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange { index: usize, length: usize },
    /// A list was requested with zero initial capacity.
    #[error("initial capacity must be greater than zero")]
    InvalidCapacity,
}
