//! Maybe type - presence or absence of a value.
//!
//! `Maybe<A>` is either `Present(A)` or `Absent`. Unlike a bare `Option`, it
//! carries the narrowing and lifting operations that connect it to
//! [`Either`]: [`Maybe::context`] promotes absence into an explicit error, and
//! [`Maybe::narrow`] hands the value back as a native `Option`.
//!
//! Presence is decided by the variant alone. `Maybe::of(0)`, `Maybe::of("")`
//! and `Maybe::of(false)` are all present.
//!
//! # Examples
//!
//! ```rust
//! use uogtad::control::Maybe;
//!
//! let spaceship = Maybe::of(true)
//!     .flat_map(|is_spaceship| if is_spaceship { Maybe::of("croc") } else { Maybe::empty() });
//!
//! let mut signal = None;
//! spaceship.if_present(|croc| signal = Some(format!("You got the {croc}!")));
//! assert_eq!(signal.as_deref(), Some("You got the croc!"));
//! ```

use super::either::Either;
use super::error::Error;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A value that may be absent.
///
/// # Examples
///
/// ```rust
/// use uogtad::control::Maybe;
///
/// let name = Maybe::new(std::env::var("UOGTAD_UNSET_VARIABLE").ok());
/// assert_eq!(name.or_else("anonymous".to_string()), "anonymous");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// A value is present.
    Present(A),
    /// No value.
    Absent,
}

impl<A> Maybe<A> {
    /// Creates a `Maybe` from a native optional value. `None` is absence.
    #[inline]
    pub fn new(value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Creates a present `Maybe`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Present(value)
    }

    /// Creates an absent `Maybe`.
    #[inline]
    pub const fn empty() -> Self {
        Self::Absent
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Lifts into an [`Either`], turning absence into an [`Error`] that
    /// carries `message`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::control::Maybe;
    ///
    /// let missing: Maybe<u16> = Maybe::empty();
    /// let error = missing.context("port not configured").right_value().unwrap();
    /// assert_eq!(error.to_string(), "port not configured");
    /// ```
    #[inline]
    pub fn context(self, message: impl Into<String>) -> Either<A, Error> {
        match self {
            Self::Present(value) => Either::new(value),
            Self::Absent => Either::right(Error::context(message)),
        }
    }

    /// Returns the value, or `default` if absent.
    #[inline]
    pub fn or_else(self, default: A) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the value, or computes a default if absent.
    ///
    /// `provider` is only called when no value is present.
    #[inline]
    pub fn or_else_get<F>(self, provider: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => provider(),
        }
    }

    /// Calls `function` with the value, if there is one.
    #[inline]
    pub fn if_present<F>(&self, function: F)
    where
        F: FnOnce(&A),
    {
        if let Self::Present(value) = self {
            function(value);
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Applies a function to the value; absence propagates.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Chains a computation returning a `Maybe`; absence propagates.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns the value as a native `Option`.
    #[inline]
    pub fn narrow(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::new(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.narrow()
    }
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
