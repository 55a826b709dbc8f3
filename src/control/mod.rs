//! The wrapper types and the error they share.
//!
//! - [`Either`]: exactly one of a left (primary) or a right value
//! - [`Fallible`]: the recorded outcome of running a computation once
//! - [`Maybe`]: presence or absence of a value
//! - [`Error`]: built when absence or a right value gains context
//!
//! # Conversions
//!
//! ```text
//!            narrow                    narrow
//! Either<T, U> ───────▶ Maybe<T> ◀─────────── Fallible<F, E>
//!      ▲                   │                        │
//!      └──── context ──────┘                        │
//!      ▲                                            │
//!      └────────────────── as_result ───────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use uogtad::control::{Error, Fallible, Maybe};
//!
//! let configured: Maybe<&str> = Maybe::of("8080");
//! let port = configured.context("port is not configured").flat_map(|text| {
//!     Fallible::new(|| text.parse::<u16>())
//!         .as_result()
//!         .map_right(|error| Error::with_cause("invalid port", error))
//! });
//! assert_eq!(port.narrow().narrow(), Some(8080));
//! ```

mod either;
mod error;
mod fallible;
mod maybe;

pub use either::Either;
pub use error::{BoxError, Error};
pub use fallible::Fallible;
pub use maybe::Maybe;
