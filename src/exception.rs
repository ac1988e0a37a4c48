use std::any::{TypeId, type_name};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

// Module invariant: `type_id`/`type_name` always describe the concrete type behind `cause`.
// They are recorded in `new`, where that type is statically known, and never change afterwards.

/// A captured exception.
///
/// `Exception` carries an arbitrary error object together with the identity of its concrete
/// type, recorded at the raise site. Registries match on that identity, so interception
/// dispatches on the *exact* runtime type of the error, never on trait impls or
/// [`source`](Error::source) chains.
///
/// Any `E: Error + Send + Sync + 'static` converts into an `Exception` via [`From`], so target
/// callables returning `Result<R, Exception>` can raise concrete errors with `?`:
///
/// ```rust
/// use intercept::Exception;
///
/// fn parse(text: &str) -> Result<i32, Exception> {
///     Ok(text.parse()?)
/// }
///
/// assert!(parse("seven").unwrap_err().is::<std::num::ParseIntError>());
/// ```
///
/// Cloning is shallow: the underlying error is shared, not duplicated. `Exception` does not
/// implement [`Error`] itself; that keeps the blanket conversion coherent, same as
/// `anyhow::Error`.
#[derive(Clone)]
pub struct Exception {
    cause: Arc<dyn Error + Send + Sync>,
    type_id: TypeId,
    type_name: &'static str,
}

impl Exception {
    /// Capture a concrete error as an exception.
    #[inline]
    #[must_use]
    pub fn new<E: Error + Send + Sync + 'static>(cause: E) -> Self {
        Self {
            type_id: TypeId::of::<E>(),
            type_name: type_name::<E>(),
            cause: Arc::new(cause),
        }
    }

    /// The [`TypeId`] of the concrete error type this exception was captured from.
    #[inline]
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The name of the concrete error type, as produced by [`type_name`].
    ///
    /// Diagnostic only: the format is unspecified and not a stable identifier.
    #[inline]
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether the captured error is exactly of type `E`.
    #[inline]
    #[must_use]
    pub fn is<E: Error + Send + Sync + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<E>()
    }

    /// Borrow the captured error as `E`, if it is exactly of type `E`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<E: Error + Send + Sync + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref::<E>()
    }

    /// Borrow the captured error as a trait object.
    #[inline]
    #[must_use]
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.cause
    }
}

impl<E: Error + Send + Sync + 'static> From<E> for Exception {
    #[inline]
    fn from(cause: E) -> Self {
        Self::new(cause)
    }
}

impl fmt::Display for Exception {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl fmt::Debug for Exception {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.cause, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[error("boom: {0}")]
    struct Boom(&'static str);

    #[test]
    fn captures_concrete_type() {
        let ex = Exception::new(Boom("late"));
        assert_eq!(ex.type_id(), TypeId::of::<Boom>(), "identity must be the concrete type");
        assert!(ex.is::<Boom>(), "exact type must match");
        assert!(!ex.is::<std::fmt::Error>(), "other types must not match");
    }

    #[test]
    fn downcasts_to_the_captured_error() {
        let ex = Exception::new(Boom("late"));
        assert_eq!(ex.downcast_ref::<Boom>(), Some(&Boom("late")), "downcast must see the value");
        assert!(ex.downcast_ref::<std::fmt::Error>().is_none(), "wrong type must not downcast");
    }

    #[test]
    fn question_mark_converts() {
        fn parse(text: &str) -> Result<i32, Exception> {
            Ok(text.parse()?)
        }

        let ex = parse("seven").unwrap_err();
        assert!(ex.is::<std::num::ParseIntError>(), "conversion must keep the concrete type");
        assert_eq!(parse("7").unwrap(), 7);
    }

    #[test]
    fn display_and_debug_delegate_to_the_cause() {
        let ex = Exception::new(Boom("late"));
        assert_eq!(ex.to_string(), "boom: late");
        assert_eq!(format!("{ex:?}"), "Boom(\"late\")");
    }

    #[test]
    fn clone_shares_the_cause() {
        let ex = Exception::new(Boom("late"));
        let twin = ex.clone();
        let original = ex.downcast_ref::<Boom>().unwrap();
        let shared = twin.downcast_ref::<Boom>().unwrap();
        assert!(std::ptr::eq(original, shared), "clone must not duplicate the error");
    }
}
