/// Setup error produced while building a [`Registry`](crate::Registry).
///
/// This is the one error kind the library itself reports. It is distinct from any
/// interceptable exception: a value of this type describes a malformed registry, it never
/// flows through one. Callers cannot recover by retrying; the registrations must be fixed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InterceptorError {
    /// Two actions were recorded for the same exception type.
    #[error("duplicate action for exception type `{exception}`")]
    DuplicateAction {
        /// Name of the doubly registered exception type.
        exception: &'static str,
    },
}
