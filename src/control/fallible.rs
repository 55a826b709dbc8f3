//! Fallible type - the recorded outcome of running a computation once.
//!
//! [`Fallible::new`] runs its computation immediately and exactly once, and
//! keeps either the value it returned or the error it failed with. From then
//! on the outcome is plain data: it can be queried, transformed with
//! [`Fallible::map`] and [`Fallible::flat_map`], converted into an
//! [`Either`], or narrowed into a [`Maybe`].
//!
//! A failed `Fallible` keeps its original error through `map` and
//! `flat_map`: the same error value is moved into the new instance.
//!
//! # Examples
//!
//! ```rust
//! use uogtad::control::Fallible;
//!
//! let port = Fallible::new(|| "8080".parse::<u16>()).map(|port| port + 1);
//! assert!(port.is_success());
//! assert_eq!(port.or_else(|_| 80), 8081);
//!
//! let broken = Fallible::new(|| "eighty".parse::<u16>());
//! assert!(broken.is_exception());
//! assert_eq!(broken.or_else(|_| 80), 80);
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::either::Either;
use super::error::Error;
use super::maybe::Maybe;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// The outcome of a computation that either produced an `F` or failed with
/// an `E`.
///
/// The outcome is decided once, at construction, and never changes.
///
/// # Type Parameters
///
/// * `F` - The type of the successful value
/// * `E` - The type of the recorded error, [`Error`] by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallible<F, E = Error> {
    outcome: Result<F, E>,
}

impl<F, E> Fallible<F, E> {
    /// Runs `computation` once and records its outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::control::Fallible;
    ///
    /// let read = Fallible::new(|| std::fs::read_to_string("/definitely/not/here"));
    /// assert!(read.is_exception());
    /// ```
    pub fn new<C>(computation: C) -> Self
    where
        C: FnOnce() -> Result<F, E>,
    {
        let outcome = computation();
        #[cfg(feature = "tracing")]
        if outcome.is_err() {
            tracing::trace!(
                error_type = std::any::type_name::<E>(),
                "fallible computation recorded an error"
            );
        }
        Self { outcome }
    }

    /// Creates a successful `Fallible` holding `value`.
    #[inline]
    pub const fn succeeded(value: F) -> Self {
        Self { outcome: Ok(value) }
    }

    /// Creates a failed `Fallible` holding `error`.
    #[inline]
    pub const fn failed(error: E) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    /// Returns `true` if the computation produced a value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub const fn is_exception(&self) -> bool {
        self.outcome.is_err()
    }

    /// Converts into an [`Either`] with the value on the left and the error
    /// on the right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::control::{Either, Fallible};
    ///
    /// let parsed = Fallible::new(|| "12".parse::<i32>());
    /// assert_eq!(parsed.as_result(), Either::new(12));
    /// ```
    #[inline]
    pub fn as_result(self) -> Either<F, E> {
        Either::from(self.outcome)
    }

    /// Converts into the native `Result`.
    #[inline]
    pub fn into_result(self) -> Result<F, E> {
        self.outcome
    }

    /// Calls `function` with the value, if the computation succeeded.
    #[inline]
    pub fn if_success<C>(&self, function: C)
    where
        C: FnOnce(&F),
    {
        if let Ok(value) = &self.outcome {
            function(value);
        }
    }

    /// Calls `function` with the error, if the computation failed.
    #[inline]
    pub fn if_exception<C>(&self, function: C)
    where
        C: FnOnce(&E),
    {
        if let Err(error) = &self.outcome {
            function(error);
        }
    }

    /// Applies a function to the value. A recorded error is carried over
    /// unchanged.
    #[inline]
    pub fn map<G, C>(self, function: C) -> Fallible<G, E>
    where
        C: FnOnce(F) -> G,
    {
        Fallible {
            outcome: self.outcome.map(function),
        }
    }

    /// Chains a computation returning a `Fallible` onto the value.
    ///
    /// `function` runs immediately and its result is returned as is. A
    /// recorded error is carried over unchanged and `function` is not called.
    #[inline]
    pub fn flat_map<G, C>(self, function: C) -> Fallible<G, E>
    where
        C: FnOnce(F) -> Fallible<G, E>,
    {
        match self.outcome {
            Ok(value) => function(value),
            Err(error) => Fallible::failed(error),
        }
    }

    /// Applies a function to the recorded error.
    #[inline]
    pub fn map_err<D, C>(self, function: C) -> Fallible<F, D>
    where
        C: FnOnce(E) -> D,
    {
        Fallible {
            outcome: self.outcome.map_err(function),
        }
    }

    /// Discards the error detail, keeping the value as a [`Maybe`].
    #[inline]
    pub fn narrow(self) -> Maybe<F> {
        Maybe::new(self.outcome.ok())
    }

    /// Returns the value, or recovers one from the recorded error.
    #[inline]
    pub fn or_else<C>(self, recovery: C) -> F
    where
        C: FnOnce(E) -> F,
    {
        match self.outcome {
            Ok(value) => value,
            Err(error) => recovery(error),
        }
    }
}

impl<F> Fallible<F, Error> {
    /// Runs `computation` once, recording a panic as [`Error::Panicked`].
    ///
    /// The computation must not rely on state it leaves half-updated when it
    /// panics; it is run under [`AssertUnwindSafe`].
    ///
    /// The panic still goes through the installed panic hook, which by
    /// default prints the message to stderr. Replace the hook with
    /// [`std::panic::set_hook`] where that output is unwanted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::control::Fallible;
    ///
    /// let tada: Option<String> = Fallible::<String>::catching(|| panic!("tada"))
    ///     .as_result()
    ///     .swap()
    ///     .map(|error| error.message().to_string())
    ///     .narrow()
    ///     .narrow();
    /// assert_eq!(tada.as_deref(), Some("tada"));
    /// ```
    ///
    /// Silencing the hook around an expected panic:
    ///
    /// ```rust
    /// use uogtad::control::Fallible;
    ///
    /// let previous = std::panic::take_hook();
    /// std::panic::set_hook(Box::new(|_| {}));
    /// let quiet = Fallible::<u8>::catching(|| panic!("expected"));
    /// std::panic::set_hook(previous);
    ///
    /// assert!(quiet.is_exception());
    /// ```
    pub fn catching<C>(computation: C) -> Self
    where
        C: FnOnce() -> F,
    {
        let outcome = catch_unwind(AssertUnwindSafe(computation)).map_err(|payload| {
            let error = Error::from_panic(&*payload);
            #[cfg(feature = "tracing")]
            tracing::debug!(panic_message = error.message(), "fallible computation panicked");
            error
        });
        Self { outcome }
    }
}

impl<F, E> From<Result<F, E>> for Fallible<F, E> {
    #[inline]
    fn from(outcome: Result<F, E>) -> Self {
        Self { outcome }
    }
}

impl<F, E> TypeConstructor for Fallible<F, E> {
    type Inner = F;
    type WithType<B> = Fallible<B, E>;
}

impl<F, E> Functor for Fallible<F, E> {
    #[inline]
    fn fmap<B, C>(self, function: C) -> Fallible<B, E>
    where
        C: FnOnce(F) -> B,
    {
        self.map(function)
    }
}

impl<F, E> Monad for Fallible<F, E> {
    #[inline]
    fn pure<B>(value: B) -> Fallible<B, E> {
        Fallible::succeeded(value)
    }

    #[inline]
    fn flat_map<B, C>(self, function: C) -> Fallible<B, E>
    where
        C: FnOnce(F) -> Fallible<B, E>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Fallible<String>: Send, Sync);
