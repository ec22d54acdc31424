//! Compositor error taxonomy.

/// Errors surfaced by the compositor core.
///
/// Only initialization and allocation can fail loudly; operations on an
/// unknown window id silently no-op instead, because the usual caller is an
/// input path with nowhere to report errors to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WmError {
    /// The host surface descriptor failed validation.
    InvalidSurface,
    /// A buffer or title allocation failed; prior state is untouched.
    OutOfMemory,
    /// The global service was used before `init`.
    NotInitialized,
}
