//! Type class traits shared by the wrapper types.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over the primary channel
//! - [`Monad`]: Lifting a value and sequencing dependent computations
//!
//! Besides this crate's `Either`, `Maybe` and `Fallible`, the native
//! `Option` and `Result` implement the same traits, so generic code can be
//! written once for all of them.
//!
//! # Examples
//!
//! ```rust
//! use uogtad::typeclass::{Functor, Monad};
//!
//! fn increment<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|value| value + 1)
//! }
//!
//! assert_eq!(increment(Some(1)), Some(2));
//! assert_eq!(increment(Ok::<i32, String>(41)), Ok(42));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
