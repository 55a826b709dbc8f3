//! # uogtad
//!
//! Three small wrapper types for expressing binary-choice results, fallible
//! computations, and optional values as chainable objects.
//!
//! ## Overview
//!
//! - **[`Either`](control::Either)**: exactly one of a left (success) or a
//!   right value. Left-biased: `map`/`flat_map` act on the left channel.
//! - **[`Fallible`](control::Fallible)**: the recorded outcome of running a
//!   computation exactly once.
//! - **[`Maybe`](control::Maybe)**: presence or absence of a value, with
//!   absence as a first-class state.
//!
//! The types convert into each other through narrowing (`Either` to `Maybe`,
//! `Fallible` to `Maybe`) and lifting with context (`Maybe` to `Either`).
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor` and `Monad` type classes
//! - `control`: the wrapper types themselves
//! - `tracing`: emit `tracing` events when a `Fallible` records a failure
//!
//! ## Example
//!
//! ```rust
//! use uogtad::prelude::*;
//!
//! fn categorize(number: i32) -> Either<&'static str, &'static str> {
//!     if number == 0 { Either::new("A") } else { Either::right("B") }
//! }
//!
//! let lefts: Vec<&str> = [0, 1, 0, 2, 0, 3]
//!     .into_iter()
//!     .map(categorize)
//!     .filter(Either::is_left)
//!     .filter_map(|either| either.narrow().narrow())
//!     .collect();
//! assert_eq!(lefts, vec!["A", "A", "A"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use uogtad::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
