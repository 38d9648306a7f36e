//! The `Outcome<T, F>` variant type.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use vessel_contract::{fmt_type_label, ContractResult, ContractViolation};
use vessel_option::Optional;

use crate::iter::{FailureIter, IntoIter, Iter};

/// Container family name used in contract violations.
const CONTAINER: &str = "Outcome";

/// A successful value of type `T`, or a failure of type `F`.
///
/// The two variants are mutually exclusive and exhaustive by construction.
/// `F` is a caller-chosen failure representation; it is deliberately not
/// wired to any particular error hierarchy. Unlike the optional container
/// there is no singleton case: each failure is distinct data.
///
/// # Equality
///
/// Two outcomes are equal iff they are the same variant with equal payloads;
/// cross-variant comparison is always `false`. Comparison against a bare
/// value or bare failure goes through [`Outcome::eq_value`] and
/// [`Outcome::eq_failure`]: operator impls for both directions would collide
/// exactly when `T` and `F` are the same type, which is the ambiguous
/// instantiation the construction guard rejects.
///
/// # Ambiguity guard
///
/// The `ok`/`error` factories reject instantiations where `T` and `F` are
/// statically the same type — a caller bug that makes "the success value"
/// and "the failure" indistinguishable. The check needs `'static` type
/// identity, so the factories carry that bound; the variants themselves stay
/// directly constructible for borrowed payloads.
#[derive(Debug, Clone, Copy)]
pub enum Outcome<T, F> {
    /// The operation produced a value.
    Ok(T),
    /// The operation failed.
    Error(F),
}

impl<T: 'static, F: 'static> Outcome<T, F> {
    /// Wrap a successful value.
    ///
    /// # Panics
    ///
    /// Panics if `T` and `F` are the same type; see the type-level docs.
    pub fn ok(value: T) -> Self {
        Self::guard_unambiguous();
        Self::Ok(value)
    }

    /// Wrap a failure.
    ///
    /// # Panics
    ///
    /// Panics if `T` and `F` are the same type; see the type-level docs.
    pub fn error(failure: F) -> Self {
        Self::guard_unambiguous();
        Self::Error(failure)
    }

    /// Boundary-checked `ok`: an absent value or an ambiguous instantiation
    /// is reported as a violation instead of panicking.
    pub fn checked_ok(value: Option<T>) -> ContractResult<Self> {
        Self::checked_unambiguous()?;
        match value {
            Some(value) => Ok(Self::Ok(value)),
            None => Err(ContractViolation::MissingPayload {
                container: CONTAINER,
            }),
        }
    }

    /// Boundary-checked `error`: an absent failure or an ambiguous
    /// instantiation is reported as a violation instead of panicking.
    pub fn checked_error(failure: Option<F>) -> ContractResult<Self> {
        Self::checked_unambiguous()?;
        match failure {
            Some(failure) => Ok(Self::Error(failure)),
            None => Err(ContractViolation::MissingPayload {
                container: CONTAINER,
            }),
        }
    }

    fn checked_unambiguous() -> ContractResult<()> {
        if TypeId::of::<T>() == TypeId::of::<F>() {
            Err(ContractViolation::AmbiguousPayload {
                type_name: type_name::<T>(),
            })
        } else {
            Ok(())
        }
    }

    fn guard_unambiguous() {
        if let Err(violation) = Self::checked_unambiguous() {
            panic!("{violation}");
        }
    }
}

impl<T, F> Outcome<T, F> {
    /// Build an outcome from an optional, supplying the failure for the
    /// empty case. Caller-side composition; the two families stay
    /// structurally independent.
    pub fn from_optional(optional: Optional<T>, failure: F) -> Self {
        match optional.into_value() {
            Some(value) => Self::Ok(value),
            None => Self::Error(failure),
        }
    }

    /// True for `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// True for `Error`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The value for `Ok`, `None` for `Error`. Never fails.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// The failure for `Error`, `None` for `Ok`. Never fails.
    #[inline]
    pub const fn failure(&self) -> Option<&F> {
        match self {
            Self::Ok(_) => None,
            Self::Error(failure) => Some(failure),
        }
    }

    /// Consume the outcome, returning the value for `Ok`.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Consume the outcome, returning the failure for `Error`.
    #[inline]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Ok(_) => None,
            Self::Error(failure) => Some(failure),
        }
    }

    /// Borrowing view as a std `Result`.
    #[inline]
    pub const fn as_result(&self) -> Result<&T, &F> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(failure) => Err(failure),
        }
    }

    /// Consume into a std `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, F> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(failure) => Err(failure),
        }
    }

    /// True only for `Ok` with a payload equal to `value`.
    pub fn eq_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Self::Ok(v) if v == value)
    }

    /// True only for `Error` with a failure equal to `failure`.
    pub fn eq_failure(&self, failure: &F) -> bool
    where
        F: PartialEq,
    {
        matches!(self, Self::Error(f) if f == failure)
    }

    /// Defensive equality against a possibly-absent outcome.
    pub fn checked_eq(&self, other: Option<&Self>) -> ContractResult<bool>
    where
        T: PartialEq,
        F: PartialEq,
    {
        match other {
            Some(other) => Ok(self == other),
            None => Err(ContractViolation::MissingComparand {
                container: CONTAINER,
            }),
        }
    }

    /// Defensive [`Outcome::eq_value`] against a possibly-absent value.
    pub fn checked_eq_value(&self, value: Option<&T>) -> ContractResult<bool>
    where
        T: PartialEq,
    {
        match value {
            Some(value) => Ok(self.eq_value(value)),
            None => Err(ContractViolation::MissingComparand {
                container: CONTAINER,
            }),
        }
    }

    /// Defensive [`Outcome::eq_failure`] against a possibly-absent failure.
    pub fn checked_eq_failure(&self, failure: Option<&F>) -> ContractResult<bool>
    where
        F: PartialEq,
    {
        match failure {
            Some(failure) => Ok(self.eq_failure(failure)),
            None => Err(ContractViolation::MissingComparand {
                container: CONTAINER,
            }),
        }
    }

    /// Enumerate the success value as a zero-or-one-element sequence.
    ///
    /// Lazy, exact-size, fused; calling `iter` again restarts.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.value())
    }

    /// Enumerate the failure as a zero-or-one-element sequence.
    #[must_use]
    pub fn failures(&self) -> FailureIter<'_, F> {
        FailureIter::new(self.failure())
    }
}

impl<T: PartialEq, F: PartialEq> PartialEq for Outcome<T, F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Ok(a), Self::Ok(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, F: Eq> Eq for Outcome<T, F> {}

impl<T: Hash, F: Hash> Hash for Outcome<T, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Discriminant first so Ok(x) and Error(x) stay distinct even for
        // payloads that hash alike.
        mem::discriminant(self).hash(state);
        match self {
            Self::Ok(value) => value.hash(state),
            Self::Error(failure) => failure.hash(state),
        }
    }
}

impl<T, F> From<Result<T, F>> for Outcome<T, F> {
    fn from(result: Result<T, F>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(failure) => Self::Error(failure),
        }
    }
}

impl<T, F> From<Outcome<T, F>> for Result<T, F> {
    fn from(outcome: Outcome<T, F>) -> Self {
        outcome.into_result()
    }
}

impl<T, F> IntoIterator for Outcome<T, F> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_value())
    }
}

impl<'a, T, F> IntoIterator for &'a Outcome<T, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Renders as `Ok<i32>(5)` or `Error<i32>(<failure>)`; the label carries the
/// element type of the instantiation, matching the optional container's
/// rendering.
impl<T: fmt::Display, F: fmt::Display> fmt::Display for Outcome<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => {
                f.write_str("Ok<")?;
                fmt_type_label::<T>(f)?;
                write!(f, ">({value})")
            }
            Self::Error(failure) => {
                f.write_str("Error<")?;
                fmt_type_label::<T>(f)?;
                write!(f, ">({failure})")
            }
        }
    }
}
