//! Functor type class - mapping over the primary channel of a container.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For two-channel containers only the primary channel is mapped. The right
//! side of an `Either` and the error of a `Result` or `Fallible` pass through
//! untouched.
//!
//! # Examples
//!
//! ```rust
//! use uogtad::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fmap(|n| n.to_string()), None);
//! ```

use super::higher::TypeConstructor;

/// A type class for containers whose primary value can be transformed while
/// the container's shape is preserved.
///
/// # Examples
///
/// ```rust
/// use uogtad::control::Maybe;
/// use uogtad::typeclass::Functor;
///
/// let length = Maybe::of("hello").fmap(str::len);
/// assert_eq!(length, Maybe::of(5));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value in the primary channel.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value in the primary channel with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uogtad::typeclass::Functor;
    ///
    /// assert_eq!(Some(1).replace("one"), Some("one"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value in the primary channel, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}
