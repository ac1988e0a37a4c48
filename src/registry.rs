use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::error::Error;

use crate::action::Action;
use crate::error::InterceptorError;

/// Validated mapping from exception type to [`Action`].
///
/// A registry is built through [`RegistryBuilder`]: record an action per exception type with
/// [`on`](RegistryBuilder::on), then validate the whole set with
/// [`build`](RegistryBuilder::build). Validation is all-or-nothing: if any registration is
/// invalid, no registry is produced.
///
/// Keys are concrete error *types*. Dispatch compares the captured exception's exact
/// [`TypeId`] against them, so a type that embeds or sources another error never stands in
/// for it.
///
/// # Example
///
/// ```rust
/// use intercept::{Registry, returns};
/// use std::num::{ParseFloatError, ParseIntError};
///
/// let registry = Registry::builder()
///     .on::<ParseIntError>(returns(0.0))
///     .on::<ParseFloatError>(returns(0.0))
///     .build()
///     .unwrap();
///
/// assert!(registry.contains::<ParseIntError>());
/// assert!(!registry.contains::<std::fmt::Error>());
/// assert_eq!(registry.len(), 2);
/// ```
pub struct Registry<R> {
    actions: HashMap<TypeId, Action<R>>,
}

impl<R> std::fmt::Debug for Registry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("len", &self.actions.len()).finish()
    }
}

impl<R> Registry<R> {
    /// Start recording registrations.
    #[inline]
    #[must_use]
    pub const fn builder() -> RegistryBuilder<R> {
        RegistryBuilder { entries: Vec::new() }
    }

    /// Check whether an action is registered for exception type `E`.
    #[inline]
    #[must_use]
    pub fn contains<E: Error + Send + Sync + 'static>(&self) -> bool {
        self.actions.contains_key(&TypeId::of::<E>())
    }

    /// Number of registered exception types.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check whether no exception types are registered.
    ///
    /// An empty registry is valid: wrapping with it is pure pass-through.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub(crate) fn get(&self, key: TypeId) -> Option<&Action<R>> {
        self.actions.get(&key)
    }
}

/// Records `(exception type, action)` entries for [`Registry`] construction.
pub struct RegistryBuilder<R> {
    entries: Vec<(TypeId, &'static str, Action<R>)>,
}

impl<R> RegistryBuilder<R> {
    /// Record `action` for exception type `E`.
    ///
    /// Recording does not validate; errors surface in [`build`](Self::build).
    #[inline]
    #[must_use]
    pub fn on<E: Error + Send + Sync + 'static>(mut self, action: Action<R>) -> Self {
        self.entries.push((TypeId::of::<E>(), type_name::<E>(), action));
        self
    }

    /// Validate every recorded entry and build the registry.
    ///
    /// # Errors
    ///
    /// Fails with [`InterceptorError::DuplicateAction`] if two actions were recorded for the
    /// same exception type. Nothing is registered in that case.
    #[inline]
    pub fn build(self) -> Result<Registry<R>, InterceptorError> {
        let mut actions = HashMap::with_capacity(self.entries.len());
        for (key, exception, action) in self.entries {
            if actions.insert(key, action).is_some() {
                return Err(InterceptorError::DuplicateAction { exception });
            }
        }
        Ok(Registry { actions })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::action::{raises, returns};

    #[derive(Debug, Clone, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn builds_an_empty_registry() {
        let registry = Registry::<i32>::builder().build().unwrap();
        assert!(registry.is_empty(), "no registrations recorded");
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn records_one_action_per_exception_type() {
        let registry = Registry::builder()
            .on::<Boom>(returns(1))
            .on::<std::fmt::Error>(raises(std::io::Error::other("gave up")))
            .build()
            .unwrap();
        assert!(registry.contains::<Boom>());
        assert!(registry.contains::<std::fmt::Error>());
        assert!(!registry.contains::<std::io::Error>(), "raise payloads are not keys");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn rejects_duplicate_registrations() {
        let err = Registry::builder()
            .on::<Boom>(returns(1))
            .on::<Boom>(returns(2))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            InterceptorError::DuplicateAction { exception: std::any::type_name::<Boom>() }
        );
        assert!(err.to_string().contains("duplicate action"), "message names the failure");
    }
}
