//! Outcome container: a successful value of `T`, or a failure `F`.
//!
//! This crate provides:
//! - `Outcome<T, F>`, a closed two-case sum type (`Ok` | `Error`)
//! - Total equality across variants plus bare-payload comparison
//!   (`eq_value`, `eq_failure`) and defensive checked forms
//! - Value and failure enumeration views, each a zero-or-one sequence
//! - `FailureFilter` and [`Outcome::capture`], the selective
//!   failure-translation boundary: a fallible operation's failure is wrapped
//!   in `Error` only when its runtime type is in a caller-fixed admitted
//!   set, and propagates unchanged otherwise
//!
//! The failure representation `F` is caller-chosen; only the capture
//! boundary fixes it to [`BoxedFailure`], the erased form runtime type
//! probes can be run against.

mod filter;
mod iter;
mod outcome;

pub use filter::{BoxedFailure, FailureFilter};
pub use iter::{FailureIter, IntoIter, Iter};
pub use outcome::Outcome;
