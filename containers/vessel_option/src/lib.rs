//! Optional value container: a value of `T`, or nothing.
//!
//! This crate provides:
//! - `Optional<T>`, a closed two-case sum type (`Empty` | `Present`)
//! - Total equality across variants and against bare payload values
//! - A zero-or-one-element enumeration view (`Iter`, `IntoIter`)
//! - Checked boundary operations that report `ContractViolation` instead of
//!   silently coercing absent arguments
//!
//! # Variant discipline
//!
//! `Empty` carries no payload, so every `Empty` of one instantiation is the
//! same value by construction — the singleton the pattern calls for, without
//! any runtime initialization to guard. `Present` always carries a payload;
//! absence is inexpressible in the payload position. Callers holding
//! possibly-absent data (`Option<T>`) choose between the coercing
//! [`Optional::from_nullable`] and the rejecting
//! [`Optional::checked_present`].

mod iter;
mod option;

pub use iter::{IntoIter, Iter};
pub use option::Optional;
