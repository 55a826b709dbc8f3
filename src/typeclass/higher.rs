//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] records the inner type of a container and how to
//! rebuild the same container around a different inner type, which is all
//! [`Functor`](super::Functor) and [`Monad`](super::Monad) need.
//!
//! # Example
//!
//! ```rust
//! use uogtad::typeclass::TypeConstructor;
//!
//! fn absent_of<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = absent_of(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A type that is one application of a type constructor.
///
/// For a container `C<A>`, `Inner` is `A` and `WithType<B>` is `C<B>`. Any
/// type parameters that are not the primary channel (the right side of an
/// `Either`, the error of a `Result`) are carried along unchanged.
pub trait TypeConstructor {
    /// The type of the value in the primary channel.
    type Inner;

    /// The same container with its primary channel replaced by `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
