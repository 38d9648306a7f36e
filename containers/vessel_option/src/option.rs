//! The `Optional<T>` variant type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use vessel_contract::{fmt_type_label, ContractResult, ContractViolation};

use crate::iter::{IntoIter, Iter};

/// Container family name used in contract violations.
const CONTAINER: &str = "Optional";

/// A value of type `T`, or nothing.
///
/// The two variants form a closed set: every `Optional<T>` is exactly one of
/// `Empty` or `Present`, and `match` exhaustiveness is checked statically.
/// Values are immutable once constructed; the container never aliases or
/// mutates its payload.
///
/// # Equality
///
/// Equality is total and symmetric across the variant set: two optionals are
/// equal iff both are `Empty`, or both are `Present` with equal payloads.
/// An optional also compares against a bare `T` via [`PartialEq<T>`]; `Empty`
/// never equals any bare value. Cross-variant comparison is `false`, never an
/// error. The defensive forms [`Optional::checked_eq`] and
/// [`Optional::checked_eq_value`] reject an absent comparand with
/// [`ContractViolation::MissingComparand`] instead of silently answering.
///
/// # Hashing
///
/// `Present` hashes exactly as its payload, keeping hashes consistent with
/// the bare-value equality above. `Empty` hashes a stable discriminant-based
/// value; it has no payload to hash and all `Empty`s of one instantiation
/// are one value anyway.
#[derive(Debug, Clone, Copy)]
pub enum Optional<T> {
    /// No value. Payload-free, so all `Empty`s of one instantiation are
    /// indistinguishable — the singleton case of the pattern.
    Empty,
    /// A present value.
    Present(T),
}

impl<T> Optional<T> {
    /// The empty optional, available in const position.
    pub const EMPTY: Self = Self::Empty;

    /// The empty optional.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Wrap a value that is statically known to exist.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Boundary-checked construction from possibly-absent data.
    ///
    /// Unlike [`Optional::from_nullable`], an absent payload is a contract
    /// violation here, not an `Empty`: this is the constructor for call
    /// sites that promised a value and want bypasses rejected.
    pub fn checked_present(value: Option<T>) -> ContractResult<Self> {
        match value {
            Some(value) => Ok(Self::Present(value)),
            None => Err(ContractViolation::MissingPayload {
                container: CONTAINER,
            }),
        }
    }

    /// Coerce possibly-absent data: `None` becomes `Empty`.
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }

    /// True for `Present`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// True for `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The payload for `Present`, `None` for `Empty`. Never fails.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Consume the optional, returning the payload for `Present`.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Defensive equality against a possibly-absent optional.
    ///
    /// An absent comparand is a contract violation rather than `false`:
    /// callers that can legitimately hold "no optional at all" must say so
    /// before asking for a comparison.
    pub fn checked_eq(&self, other: Option<&Self>) -> ContractResult<bool>
    where
        T: PartialEq,
    {
        match other {
            Some(other) => Ok(self == other),
            None => Err(ContractViolation::MissingComparand {
                container: CONTAINER,
            }),
        }
    }

    /// Defensive equality against a possibly-absent bare value.
    pub fn checked_eq_value(&self, value: Option<&T>) -> ContractResult<bool>
    where
        T: PartialEq,
    {
        match value {
            Some(value) => Ok(self == value),
            None => Err(ContractViolation::MissingComparand {
                container: CONTAINER,
            }),
        }
    }

    /// Enumerate the container as a zero-or-one-element sequence.
    ///
    /// The iterator is lazy, exact-size, and fused; calling `iter` again
    /// restarts from the same single element. Iteration never consumes the
    /// container.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.value())
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Present(a), Self::Present(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

/// Bare-value equality: `Present` compares its payload, `Empty` never
/// equals any value.
impl<T: PartialEq> PartialEq<T> for Optional<T> {
    fn eq(&self, other: &T) -> bool {
        match self {
            Self::Present(value) => value == other,
            Self::Empty => false,
        }
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            // Present hashes as its payload, consistent with PartialEq<T>.
            Self::Present(value) => value.hash(state),
            Self::Empty => mem::discriminant(self).hash(state),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_value()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_value())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Renders as `Present<i32>(5)` or `Empty<i32>`; the element type label
/// disambiguates generic instantiations in debug logs.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => {
                f.write_str("Present<")?;
                fmt_type_label::<T>(f)?;
                write!(f, ">({value})")
            }
            Self::Empty => {
                f.write_str("Empty<")?;
                fmt_type_label::<T>(f)?;
                f.write_str(">")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_forms_are_one_value() {
        assert_eq!(Optional::<i32>::empty(), Optional::EMPTY);
        assert_eq!(Optional::<i32>::empty(), Optional::from_nullable(None));
        assert_eq!(
            mem::discriminant(&Optional::<i32>::empty()),
            mem::discriminant(&Optional::<i32>::EMPTY)
        );
    }

    #[test]
    fn payload_round_trip() {
        assert_eq!(Optional::present(5).value(), Some(&5));
        assert_eq!(Optional::present(5).into_value(), Some(5));
        assert_eq!(Optional::<i32>::empty().value(), None);
    }

    #[test]
    fn variant_tests_are_exclusive() {
        assert!(Optional::present(1).is_present());
        assert!(!Optional::present(1).is_empty());
        assert!(Optional::<i32>::empty().is_empty());
        assert!(!Optional::<i32>::empty().is_present());
    }

    #[test]
    fn equality_across_variants() {
        assert_eq!(Optional::present(5), Optional::present(5));
        assert_ne!(Optional::present(5), Optional::present(6));
        assert_ne!(Optional::present(5), Optional::empty());
        assert_eq!(Optional::<i32>::empty(), Optional::empty());
    }

    #[test]
    fn equality_against_bare_values() {
        assert_eq!(Optional::present(5), 5);
        assert_ne!(Optional::present(5), 6);
        assert_ne!(Optional::<i32>::empty(), 5);
    }

    #[test]
    fn checked_present_rejects_absent_payload() {
        assert_eq!(
            Optional::checked_present(Some(5)),
            Ok(Optional::present(5))
        );
        assert_eq!(
            Optional::<i32>::checked_present(None),
            Err(ContractViolation::MissingPayload {
                container: "Optional"
            })
        );
    }

    #[test]
    fn checked_eq_rejects_absent_comparand() {
        let present = Optional::present(5);
        assert_eq!(present.checked_eq(Some(&Optional::present(5))), Ok(true));
        assert_eq!(present.checked_eq(Some(&Optional::empty())), Ok(false));
        assert_eq!(
            present.checked_eq(None),
            Err(ContractViolation::MissingComparand {
                container: "Optional"
            })
        );
        assert_eq!(present.checked_eq_value(Some(&5)), Ok(true));
        assert_eq!(
            present.checked_eq_value(None),
            Err(ContractViolation::MissingComparand {
                container: "Optional"
            })
        );
    }

    #[test]
    fn nullable_interop() {
        assert_eq!(Optional::from(Some(3)), Optional::present(3));
        assert_eq!(Optional::<i32>::from(None), Optional::empty());
        assert_eq!(Option::from(Optional::present(3)), Some(3));
        assert_eq!(Option::<i32>::from(Optional::<i32>::empty()), None);
    }

    #[test]
    fn display_names_variant_and_element_type() {
        assert_eq!(Optional::present(5).to_string(), "Present<i32>(5)");
        assert_eq!(Optional::<i32>::empty().to_string(), "Empty<i32>");
        assert_eq!(
            Optional::present(String::from("hi")).to_string(),
            "Present<String>(hi)"
        );
    }
}
