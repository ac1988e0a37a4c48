//! Exception interception for fallible callables.
//!
//! Intercept wraps a fallible callable so that chosen exception types, when raised during
//! invocation, are replaced with either a substitute return value or a substitute raised error.
//! Everything else, the normal return path included, passes through untouched: an exception
//! type you did not register propagates as if the wrapper were not there.
//!
//! The building blocks are a [`Registry`] mapping exception types to [`Action`]s, and an
//! [`Interceptor`] binding that registry to dispatch logic. Actions come in two flavors:
//! [`returns`] replaces the exception with a value, [`raises`] replaces it with another error.
//! Both have a `_with` form taking a function of the captured [`Exception`].
//!
//!
//! # Usage
//!
//! ```toml
//! [dependencies]
//! intercept = "0.1"
//! ```
//!
//! Declare which exception types to intercept, then wrap the callable:
//!
//! ```rust
//! use intercept::{Exception, Registry, intercept, returns};
//! use std::num::ParseIntError;
//!
//! let registry = Registry::builder()
//!     .on::<ParseIntError>(returns(0))
//!     .build()
//!     .unwrap();
//!
//! let mut parse = intercept(registry).wrap(|text: &str| -> Result<i32, Exception> {
//!     Ok(text.parse()?)
//! });
//!
//! assert_eq!(parse("7").unwrap(), 7);
//! assert_eq!(parse("seven").unwrap(), 0);
//! ```
//!
//! An action can compute its outcome from the captured exception, e.g. to build a custom
//! message:
//!
//! ```rust
//! use intercept::{Exception, Registry, intercept, returns_with};
//! use std::num::ParseIntError;
//!
//! let registry = Registry::builder()
//!     .on::<ParseIntError>(returns_with(|e| format!("intercepted {e}")))
//!     .build()
//!     .unwrap();
//!
//! let mut read = intercept(registry).wrap(|text: &str| -> Result<String, Exception> {
//!     Ok(text.parse::<i32>()?.to_string())
//! });
//!
//! assert_eq!(read("x").unwrap(), "intercepted invalid digit found in string");
//! ```
//!
//! Or convert the captured exception into a different error:
//!
//! ```rust
//! use intercept::{Exception, Registry, intercept, raises_with};
//! use std::io;
//! use std::num::ParseIntError;
//!
//! let registry = Registry::builder()
//!     .on::<ParseIntError>(raises_with(|e| {
//!         io::Error::new(io::ErrorKind::InvalidData, e.to_string())
//!     }))
//!     .build()
//!     .unwrap();
//!
//! let mut parse = intercept(registry).wrap(|text: &str| -> Result<i32, Exception> {
//!     Ok(text.parse()?)
//! });
//!
//! let caught = parse("seven").unwrap_err();
//! assert!(caught.is::<io::Error>());
//! ```
//!
//! An [`Interceptor`] is a value: build it once, clone it cheaply, and wrap as many callables
//! with it as you like. For one-shot use, [`Interceptor::run`] executes a closure directly
//! without constructing a wrapper.
//!
//!
//! # Dispatch semantics
//!
//! Matching uses the *exact* runtime type of the raised error, captured at the raise site by
//! the [`Exception`] conversion. An error type that wraps another error is a different type:
//! registering the inner type does not intercept the wrapper, and the registry never looks
//! through [`source`](std::error::Error::source) chains. Unmatched exceptions propagate with
//! their original payload intact.
//!
//! Registry construction is eager and all-or-nothing: an invalid set of registrations fails
//! with [`InterceptorError`] before any callable can be wrapped.

#![forbid(unsafe_code)]
#![warn(
    clippy::cargo,
    clippy::pedantic,
    clippy::missing_const_for_fn,
    clippy::allow_attributes,
    clippy::assertions_on_result_states,
    clippy::clone_on_ref_ptr,
    clippy::else_if_without_else,
    clippy::empty_drop,
    clippy::format_push_string,
    clippy::infinite_loop,
    clippy::missing_assert_message,
    clippy::missing_inline_in_public_items,
    clippy::mixed_read_write_in_expression,
    clippy::needless_raw_strings,
    clippy::pub_without_shorthand,
    clippy::redundant_type_annotations,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::semicolon_inside_block,
    clippy::separated_literal_suffix,
    clippy::shadow_unrelated,
    clippy::string_lit_chars_any,
    clippy::string_to_string,
    clippy::tests_outside_test_module,
    clippy::try_err,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unused_result_ok,
    clippy::wildcard_enum_match_arm
)]

mod action;
mod error;
mod exception;
mod intercept;
mod registry;

pub use action::{Action, Payload, raises, raises_with, returns, returns_with};
pub use error::InterceptorError;
pub use exception::Exception;
pub use intercept::{Interceptor, intercept};
pub use registry::{Registry, RegistryBuilder};
