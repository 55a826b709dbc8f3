//! Either type - exactly one of two values, biased towards the left.
//!
//! `Either<T, U>` holds either a `Left(T)` or a `Right(U)`. The left side is
//! the conventional success channel: [`Either::new`] builds a left,
//! [`Either::map`] and [`Either::flat_map`] act on the left, and the right
//! side passes through them untouched. Explicit right-channel transforms are
//! available as [`Either::map_right`] and [`Either::flat_map_right`].
//!
//! Occupancy is the enum discriminant, so falsy payloads such as `0`,
//! `false` or `""` are ordinary left (or right) values.
//!
//! # Examples
//!
//! ```rust
//! use uogtad::control::Either;
//!
//! let mainline: Either<i32, String> = Either::new(1).map(|z| z + 1);
//! assert_eq!(mainline.clone().narrow().narrow(), Some(2));
//!
//! let circuitous = mainline.flat_map(|z| {
//!     if z == 2 { Either::new(z + 1) } else { Either::right("???".to_string()) }
//! });
//! assert_eq!(circuitous.narrow().narrow(), Some(3));
//! ```

use super::error::{BoxError, Error};
use super::maybe::Maybe;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A value that is exactly one of a left `T` or a right `U`.
///
/// # Type Parameters
///
/// * `T` - The type of the left (primary) value
/// * `U` - The type of the right (secondary) value
///
/// # Examples
///
/// ```rust
/// use uogtad::control::Either;
///
/// let success: Either<i32, String> = Either::new(42);
/// let failure: Either<i32, String> = Either::right("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::new(84));
/// assert_eq!(failure.or_else(|message| message.len() as i32), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<T, U> {
    /// The left variant, the primary channel.
    Left(T),
    /// The right variant, conventionally carrying an error or alternative.
    Right(U),
}

impl<T, U> Either<T, U> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a left value. This is the primary constructor.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self::Left(value)
    }

    /// Creates a right value.
    #[inline]
    pub const fn right(value: U) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::control::Either;
    ///
    /// assert!(Either::<i32, String>::new(0).is_left());
    /// assert!(!Either::<i32, &str>::right("zero").is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Converts from `&Either<T, U>` to `Either<&T, &U>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&T, &U> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Returns the left value as an `Option`, consuming the either.
    #[inline]
    pub fn left_value(self) -> Option<T> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value as an `Option`, consuming the either.
    #[inline]
    pub fn right_value(self) -> Option<U> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Swap and Recovery
    // =========================================================================

    /// Exchanges the two channels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::control::Either;
    ///
    /// let left: Either<i32, String> = Either::new(42);
    /// assert_eq!(left.swap(), Either::right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<U, T> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the left value, or recovers one from the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::control::Either;
    ///
    /// let parsed: Either<i32, String> = Either::right("not a number".to_string());
    /// assert_eq!(parsed.or_else(|_| -1), -1);
    /// ```
    #[inline]
    pub fn or_else<F>(self, recovery: F) -> T
    where
        F: FnOnce(U) -> T,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => recovery(value),
        }
    }

    // =========================================================================
    // Left-channel Operations
    // =========================================================================

    /// Applies a function to the left value; a right value is passed through.
    #[inline]
    pub fn map<V, F>(self, function: F) -> Either<V, U>
    where
        F: FnOnce(T) -> V,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation returning an `Either` onto the left value.
    ///
    /// The result of `function` is returned as is, without nesting. A right
    /// value is passed through.
    #[inline]
    pub fn flat_map<V, F>(self, function: F) -> Either<V, U>
    where
        F: FnOnce(T) -> Either<V, U>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Right-channel Operations
    // =========================================================================

    /// Applies a function to the right value; a left value is passed through.
    #[inline]
    pub fn map_right<V, F>(self, function: F) -> Either<T, V>
    where
        F: FnOnce(U) -> V,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains a computation returning an `Either` onto the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::control::Either;
    ///
    /// let retried: Either<i32, &str> = Either::right("timeout")
    ///     .flat_map_right(|reason| if reason == "timeout" { Either::new(0) } else { Either::right(reason) });
    /// assert_eq!(retried, Either::new(0));
    /// ```
    #[inline]
    pub fn flat_map_right<V, F>(self, function: F) -> Either<T, V>
    where
        F: FnOnce(U) -> Either<T, V>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies one of two functions depending on the occupied channel.
    #[inline]
    pub fn bimap<V, W, F, G>(self, left_function: F, right_function: G) -> Either<V, W>
    where
        F: FnOnce(T) -> V,
        G: FnOnce(U) -> W,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the either by applying one of two functions.
    #[inline]
    pub fn fold<V, F, G>(self, left_function: F, right_function: G) -> V
    where
        F: FnOnce(T) -> V,
        G: FnOnce(U) -> V,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Calls `function` with the left value, if there is one.
    #[inline]
    pub fn if_left<F>(&self, function: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Left(value) = self {
            function(value);
        }
    }

    /// Calls `function` with the right value, if there is one.
    #[inline]
    pub fn if_right<F>(&self, function: F)
    where
        F: FnOnce(&U),
    {
        if let Self::Right(value) = self {
            function(value);
        }
    }

    // =========================================================================
    // Narrowing and Context
    // =========================================================================

    /// Discards the right channel, keeping the left value as a [`Maybe`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::control::{Either, Maybe};
    ///
    /// assert_eq!(Either::<i32, String>::new(7).narrow(), Maybe::of(7));
    /// assert_eq!(Either::<i32, &str>::right("gone").narrow(), Maybe::empty());
    /// ```
    #[inline]
    pub fn narrow(self) -> Maybe<T> {
        match self {
            Self::Left(value) => Maybe::Present(value),
            Self::Right(_) => Maybe::Absent,
        }
    }

    /// Wraps a right value in an [`Error`] carrying `message`.
    ///
    /// A left value is passed through. The previous right value becomes the
    /// [`source`](std::error::Error::source) of the new error, so it must
    /// convert into a [`BoxError`] (any error type, `String` or `&str`).
    /// Other right payloads go through [`Either::context_debug`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::error::Error as _;
    /// use uogtad::control::Either;
    ///
    /// let failed: Either<i32, &str> = Either::right("connection refused");
    /// let error = failed.context("fetching index").right_value().unwrap();
    /// assert_eq!(error.message(), "fetching index");
    /// assert_eq!(error.source().unwrap().to_string(), "connection refused");
    /// ```
    #[inline]
    pub fn context(self, message: impl Into<String>) -> Either<T, Error>
    where
        U: Into<BoxError>,
    {
        self.map_right(|cause| Error::with_cause(message, cause))
    }

    /// Wraps a right value that is not an error in an [`Error`] carrying
    /// `message`.
    ///
    /// The previous right value is kept as the cause and displayed through
    /// its `Debug` output. A left value is passed through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::error::Error as _;
    /// use uogtad::control::Either;
    ///
    /// #[derive(Debug)]
    /// struct Status(u16);
    ///
    /// let failed: Either<String, Status> = Either::right(Status(404));
    /// let error = failed.context_debug("fetching index").right_value().unwrap();
    /// assert_eq!(error.message(), "fetching index");
    /// assert_eq!(error.source().unwrap().to_string(), "Status(404)");
    /// ```
    #[inline]
    pub fn context_debug(self, message: impl Into<String>) -> Either<T, Error>
    where
        U: std::fmt::Debug + Send + Sync + 'static,
    {
        self.map_right(|payload| Error::with_debug_cause(message, payload))
    }

    /// Converts into a `Result`, mapping left to `Ok` and right to `Err`.
    #[inline]
    pub fn into_result(self) -> Result<T, U> {
        self.into()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, U> From<Result<T, U>> for Either<T, U> {
    /// `Ok(t)` becomes `Left(t)` and `Err(u)` becomes `Right(u)`.
    #[inline]
    fn from(result: Result<T, U>) -> Self {
        match result {
            Ok(value) => Self::Left(value),
            Err(error) => Self::Right(error),
        }
    }
}

impl<T, U> From<Either<T, U>> for Result<T, U> {
    #[inline]
    fn from(either: Either<T, U>) -> Self {
        match either {
            Either::Left(value) => Ok(value),
            Either::Right(value) => Err(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, U> TypeConstructor for Either<T, U> {
    type Inner = T;
    type WithType<B> = Either<B, U>;
}

impl<T, U> Functor for Either<T, U> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<B, U>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T, U> Monad for Either<T, U> {
    #[inline]
    fn pure<B>(value: B) -> Either<B, U> {
        Either::Left(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<B, U>
    where
        F: FnOnce(T) -> Either<B, U>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::error::Error as _;

    #[rstest]
    fn new_is_left() {
        let value: Either<i32, String> = Either::new(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn right_is_right() {
        let value: Either<i32, String> = Either::right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    fn falsy_left_values_are_left() {
        let zero: Either<i32, String> = Either::new(0);
        let no: Either<bool, String> = Either::new(false);
        let blank: Either<&str, String> = Either::new("");

        assert!(zero.is_left());
        assert_eq!(zero.narrow().narrow(), Some(0));
        assert!(no.is_left());
        assert_eq!(no.map(|flag| !flag), Either::new(true));
        assert_eq!(blank.or_else(|_| "fallback"), "");
    }

    #[rstest]
    fn falsy_right_values_are_right() {
        let zero: Either<String, i32> = Either::right(0);
        assert!(zero.is_right());
        assert_eq!(zero.map_right(|n| n + 1), Either::right(1));
    }

    #[rstest]
    fn map_leaves_right_inert() {
        let value: Either<i32, &str> = Either::right("kept");
        assert_eq!(value.map(|x| x * 2), Either::right("kept"));
        assert_eq!(value.flat_map(|x| Either::new(x * 2)), Either::right("kept"));
    }

    #[rstest]
    fn map_right_leaves_left_inert() {
        let value: Either<i32, &str> = Either::new(3);
        assert_eq!(value.map_right(str::len), Either::new(3));
        assert_eq!(value.flat_map_right(|s| Either::right(s.len())), Either::new(3));
    }

    #[rstest]
    fn flat_map_returns_inner_result_directly() {
        let value: Either<i32, String> = Either::new(2);
        let result = value.flat_map(|x| Either::<i32, String>::right(format!("rejected {x}")));
        assert_eq!(result, Either::right("rejected 2".to_string()));
    }

    #[rstest]
    fn swap_exchanges_channels() {
        let left: Either<i32, &str> = Either::new(1);
        let right: Either<i32, &str> = Either::right("one");
        assert_eq!(left.swap(), Either::right(1));
        assert_eq!(right.swap(), Either::new("one"));
    }

    #[rstest]
    #[case(Either::new(5), 5)]
    #[case(Either::right("four"), 4)]
    fn or_else_is_total(#[case] value: Either<usize, &str>, #[case] expected: usize) {
        assert_eq!(value.or_else(str::len), expected);
    }

    #[rstest]
    fn or_else_does_not_call_recovery_for_left() {
        let called = Cell::new(false);
        let value: Either<i32, &str> = Either::new(1);
        let result = value.or_else(|_| {
            called.set(true);
            0
        });
        assert_eq!(result, 1);
        assert!(!called.get());
    }

    #[rstest]
    fn if_left_and_if_right_run_only_for_their_channel() {
        let left_calls = Cell::new(0);
        let right_calls = Cell::new(0);

        let left: Either<i32, &str> = Either::new(0);
        left.if_left(|_| left_calls.set(left_calls.get() + 1));
        left.if_right(|_| right_calls.set(right_calls.get() + 1));

        let right: Either<i32, &str> = Either::right("");
        right.if_left(|_| left_calls.set(left_calls.get() + 1));
        right.if_right(|_| right_calls.set(right_calls.get() + 1));

        assert_eq!(left_calls.get(), 1);
        assert_eq!(right_calls.get(), 1);
    }

    #[rstest]
    fn context_on_left_passes_through() {
        let value: Either<i32, &str> = Either::new(9);
        let result = value.context("unused");
        assert!(matches!(result, Either::Left(9)));
    }

    #[rstest]
    fn context_on_right_wraps_message_and_previous_value() {
        let value: Either<i32, String> = Either::right("disk full".to_string());
        let Either::Right(error) = value.context("saving") else {
            panic!("expected a right value");
        };
        assert_eq!(error.message(), "saving");
        assert_eq!(error.to_string(), "saving");
        assert_eq!(error.source().map(ToString::to_string), Some("disk full".to_string()));
    }

    #[derive(Debug)]
    struct StatusCode(u16);

    #[rstest]
    fn context_debug_wraps_non_error_payload() {
        let value: Either<i32, StatusCode> = Either::right(StatusCode(404));
        let Either::Right(error) = value.context_debug("fetching") else {
            panic!("expected a right value");
        };
        assert_eq!(error.to_string(), "fetching");
        assert_eq!(error.source().map(ToString::to_string), Some("StatusCode(404)".to_string()));
    }

    #[rstest]
    fn context_debug_on_left_passes_through() {
        let value: Either<i32, StatusCode> = Either::new(0);
        assert!(matches!(value.context_debug("unused"), Either::Left(0)));
    }

    #[rstest]
    fn context_with_empty_message_still_wraps() {
        let value: Either<i32, &str> = Either::right("");
        let Either::Right(error) = value.context("") else {
            panic!("expected a right value");
        };
        assert_eq!(error.message(), "");
        assert_eq!(error.source().map(ToString::to_string), Some(String::new()));
    }

    #[rstest]
    fn narrow_drops_right_channel() {
        let right: Either<i32, &str> = Either::right("x");
        assert_eq!(right.narrow(), Maybe::Absent);
        assert_eq!(Either::<i32, &str>::new(1).narrow(), Maybe::Present(1));
    }

    #[rstest]
    fn bimap_and_fold_cover_both_channels() {
        let left: Either<i32, String> = Either::new(42);
        assert_eq!(left.clone().bimap(|x| x * 2, |s| s.len()), Either::new(84));
        assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    }

    #[rstest]
    fn result_conversion_is_left_biased() {
        let ok: Result<i32, String> = Ok(42);
        assert_eq!(Either::from(ok), Either::new(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<i32, String> = err.into();
        assert_eq!(either.clone(), Either::right("error".to_string()));
        assert_eq!(either.into_result(), Err("error".to_string()));
    }

    #[rstest]
    fn as_ref_borrows_payload() {
        let value: Either<String, i32> = Either::new("owned".to_string());
        assert_eq!(value.as_ref().map(String::len), Either::new(5));
        assert!(value.is_left());
    }

    #[rstest]
    fn typeclass_fmap_and_pure_follow_left_channel() {
        let mapped = Functor::fmap(Either::<i32, &str>::new(1), |x| x + 1);
        assert_eq!(mapped, Either::new(2));
        assert_eq!(<Either<(), &str>>::pure("lifted"), Either::new("lifted"));
    }
}
