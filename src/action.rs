use crate::exception::Exception;

/// What to do with a captured exception.
///
/// The two variants are the whole set: a registry entry either replaces the exception with a
/// return value or with another raised error. Construct actions with [`returns`],
/// [`returns_with`], [`raises`] or [`raises_with`] rather than spelling the variants out.
///
/// Actions are immutable once constructed and may be invoked any number of times, so one
/// action can back entries in several registries over the lifetime of a program.
pub enum Action<R> {
    /// Replace the captured exception with a return value.
    Return(Payload<R>),
    /// Replace the captured exception with a newly raised error.
    Raise(Payload<Exception>),
}

/// An action outcome: a literal, or one computed from the captured exception.
pub enum Payload<T> {
    /// A fixed outcome, handed out on every invocation.
    Literal(T),
    /// An outcome computed from the captured exception on each invocation.
    Computed(Box<dyn Fn(&Exception) -> T + Send + Sync>),
}

impl<T: Clone> Payload<T> {
    fn resolve(&self, caught: &Exception) -> T {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Computed(produce) => produce(caught),
        }
    }
}

impl<R: Clone> Action<R> {
    /// Run the action against a captured exception.
    ///
    /// A [`Return`](Self::Return) action yields `Ok` with its resolved value; a
    /// [`Raise`](Self::Raise) action yields `Err` with its resolved error. A panic inside a
    /// [`Computed`](Payload::Computed) payload propagates unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err` exactly when the action is a [`Raise`](Self::Raise): the resolved
    /// replacement error, not the captured one.
    #[inline]
    pub fn run(&self, caught: &Exception) -> Result<R, Exception> {
        match self {
            Self::Return(payload) => Ok(payload.resolve(caught)),
            Self::Raise(payload) => Err(payload.resolve(caught)),
        }
    }
}

/// Intercept by returning `value` in place of the captured exception.
///
/// The value is cloned on each invocation.
///
/// ```rust
/// use intercept::{Exception, returns};
///
/// let action = returns("fallback");
/// let caught = Exception::new(std::fmt::Error);
/// assert_eq!(action.run(&caught).unwrap(), "fallback");
/// ```
#[inline]
pub fn returns<R: Clone>(value: R) -> Action<R> {
    Action::Return(Payload::Literal(value))
}

/// Intercept by returning a value computed from the captured exception.
///
/// ```rust
/// use intercept::{Exception, returns_with};
///
/// let action = returns_with(|e| format!("saw {e}"));
/// let caught = Exception::new(std::fmt::Error);
/// assert_eq!(action.run(&caught).unwrap(), "saw an error occurred when formatting an argument");
/// ```
#[inline]
pub fn returns_with<R, F>(produce: F) -> Action<R>
where
    F: Fn(&Exception) -> R + Send + Sync + 'static,
{
    Action::Return(Payload::Computed(Box::new(produce)))
}

/// Intercept by raising `error` in place of the captured exception.
///
/// The replacement is stored once and re-raised on every invocation; clones share the same
/// underlying error object.
///
/// ```rust
/// use intercept::{Exception, raises};
/// use std::io;
///
/// let action = raises::<(), _>(io::Error::other("gave up"));
/// let caught = Exception::new(std::fmt::Error);
/// assert!(action.run(&caught).unwrap_err().is::<io::Error>());
/// ```
#[inline]
pub fn raises<R, E: Into<Exception>>(error: E) -> Action<R> {
    Action::Raise(Payload::Literal(error.into()))
}

/// Intercept by raising an error computed from the captured exception.
///
/// This is the conversion form: build the replacement from the captured error, typically to
/// re-express it in a caller-facing error type.
///
/// ```rust
/// use intercept::{Exception, raises_with};
/// use std::io;
///
/// let action = raises_with::<(), _, _>(|e| io::Error::other(e.to_string()));
/// let caught = Exception::new(std::fmt::Error);
/// assert!(action.run(&caught).unwrap_err().is::<io::Error>());
/// ```
#[inline]
pub fn raises_with<R, E, F>(produce: F) -> Action<R>
where
    E: Into<Exception>,
    F: Fn(&Exception) -> E + Send + Sync + 'static,
{
    Action::Raise(Payload::Computed(Box::new(move |caught| produce(caught).into())))
}
