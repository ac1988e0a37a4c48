use std::sync::Arc;

use tracing::trace;

use crate::exception::Exception;
use crate::registry::Registry;

/// Dispatch logic bound to a validated [`Registry`].
///
/// An interceptor holds its registry behind an [`Arc`], read-only: cloning is cheap, and one
/// interceptor can wrap any number of callables. It keeps no per-invocation state, so a
/// wrapped callable is as safe to share across threads as its target is.
///
/// Per invocation, exactly one of three things happens to the target's outcome:
///
/// - it completed normally: the value is returned untouched;
/// - it raised an exception whose exact type is registered: the matched [`Action`] decides
///   the outcome, a return value or a replacement error;
/// - it raised anything else: the original exception propagates unchanged.
///
/// [`Action`]: crate::Action
pub struct Interceptor<R> {
    registry: Arc<Registry<R>>,
}

/// Bind a validated registry to an interceptor.
///
/// # Example
///
/// ```rust
/// use intercept::{Exception, Registry, intercept, returns};
/// use std::num::ParseIntError;
///
/// let registry = Registry::builder()
///     .on::<ParseIntError>(returns(0))
///     .build()
///     .unwrap();
/// let interceptor = intercept(registry);
///
/// let parsed = interceptor.run(|| Ok("eight".parse()?));
/// assert_eq!(parsed.unwrap(), 0);
/// ```
#[inline]
#[must_use]
pub fn intercept<R>(registry: Registry<R>) -> Interceptor<R> {
    Interceptor { registry: Arc::new(registry) }
}

impl<R> Clone for Interceptor<R> {
    #[inline]
    fn clone(&self) -> Self {
        Self { registry: Arc::clone(&self.registry) }
    }
}

impl<R: Clone> Interceptor<R> {
    /// Execute `target` once, intercepting a raised exception per the registry.
    ///
    /// This is the capture-everything form: arguments live in the closure's environment.
    /// Use [`wrap`](Self::wrap) to build a reusable callable instead.
    ///
    /// # Errors
    ///
    /// Whatever the dispatch rules produce: the original exception if its type is
    /// unregistered, or the replacement error if the matched action raises.
    #[inline]
    pub fn run<F>(&self, target: F) -> Result<R, Exception>
    where
        F: FnOnce() -> Result<R, Exception>,
    {
        match target() {
            Ok(value) => Ok(value),
            Err(caught) => self.dispatch(caught),
        }
    }

    /// Wrap `target`, producing a new callable with the same calling convention.
    ///
    /// The wrapper forwards its argument to `target` unchanged; several values pass as a
    /// tuple. Normal returns pass through untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intercept::{Exception, Registry, intercept, returns};
    /// use std::num::ParseIntError;
    ///
    /// let registry = Registry::builder()
    ///     .on::<ParseIntError>(returns(-1))
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut sum = intercept(registry).wrap(|(a, b): (&str, &str)| -> Result<i32, Exception> {
    ///     Ok(a.parse::<i32>()? + b.parse::<i32>()?)
    /// });
    ///
    /// assert_eq!(sum(("2", "3")).unwrap(), 5);
    /// assert_eq!(sum(("2", "three")).unwrap(), -1);
    /// ```
    #[inline]
    pub fn wrap<Args, F>(&self, mut target: F) -> impl FnMut(Args) -> Result<R, Exception> + use<R, Args, F>
    where
        F: FnMut(Args) -> Result<R, Exception>,
    {
        let interceptor = self.clone();
        move |args| interceptor.run(|| target(args))
    }

    fn dispatch(&self, caught: Exception) -> Result<R, Exception> {
        match self.registry.get(caught.type_id()) {
            Some(action) => {
                trace!(exception = caught.type_name(), "intercepting exception");
                action.run(&caught)
            }
            None => {
                trace!(exception = caught.type_name(), "no action registered, propagating");
                Err(caught)
            }
        }
    }
}
