//! Selective failure translation at the capture boundary.
//!
//! [`Outcome::capture`] runs a fallible operation and decides, per failure,
//! between two fates: failures whose runtime type is in the caller's
//! [`FailureFilter`] are wrapped in [`Outcome::Error`]; every other failure
//! propagates to the caller unchanged. The admitted set is fixed when the
//! filter is built — nothing is reconfigurable at runtime — and probes run
//! in admission order, first match wins.

use std::any::type_name;
use std::error::Error;
use std::fmt;

use tracing::trace;

use crate::Outcome;

/// Type-erased failure the capture boundary operates on.
pub type BoxedFailure = Box<dyn Error + Send + Sync + 'static>;

/// Runtime type probe for one admitted failure type.
type FailureProbe = fn(&(dyn Error + Send + Sync + 'static)) -> bool;

/// A closed set of failure types admitted at the capture boundary.
///
/// Built once by chaining [`FailureFilter::admit`]; each entry records the
/// admitted type's name and a monomorphized probe that tests an erased
/// failure against that concrete type. One filter with any number of entries
/// replaces a family of fixed-arity "catch these N types" helpers.
///
/// ```
/// use vessel_outcome::FailureFilter;
///
/// let filter = FailureFilter::new()
///     .admit::<std::num::ParseIntError>()
///     .admit::<std::str::Utf8Error>();
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct FailureFilter {
    probes: Vec<(&'static str, FailureProbe)>,
}

impl FailureFilter {
    /// An empty filter; admits nothing until [`FailureFilter::admit`] is
    /// called.
    #[must_use]
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    /// Admit failures of concrete type `E`.
    ///
    /// Entries are probed in the order they were admitted; the first match
    /// wins (only observable if the same type is admitted twice, since
    /// distinct types never both match one failure).
    #[must_use]
    pub fn admit<E: Error + Send + Sync + 'static>(mut self) -> Self {
        self.probes
            .push((type_name::<E>(), |failure| failure.is::<E>()));
        self
    }

    /// True if the failure's runtime type is in the admitted set.
    pub fn admits(&self, failure: &BoxedFailure) -> bool {
        self.first_match(failure).is_some()
    }

    /// The name of the first admitted type matching the failure, if any.
    pub fn first_match(&self, failure: &BoxedFailure) -> Option<&'static str> {
        self.probes
            .iter()
            .find(|(_, probe)| probe(failure.as_ref()))
            .map(|(name, _)| *name)
    }

    /// Admitted type names, in admission order.
    pub fn admitted(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.probes.iter().map(|(name, _)| *name)
    }

    /// Number of admitted types.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// True if no types are admitted.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl fmt::Debug for FailureFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.admitted()).finish()
    }
}

impl<T: 'static> Outcome<T, BoxedFailure> {
    /// Run a fallible operation, translating admitted failures into
    /// [`Outcome::Error`].
    ///
    /// Completion wraps the result in [`Outcome::Ok`]. A raised failure is
    /// probed against `filter`: an admitted failure becomes the `Error`
    /// payload unchanged, while a failure outside the admitted set is never
    /// translated — it comes back unchanged as the outer `Err`, for the
    /// caller to handle or re-raise.
    ///
    /// ```
    /// use vessel_outcome::{FailureFilter, Outcome};
    ///
    /// let filter = FailureFilter::new().admit::<std::num::ParseIntError>();
    /// let outcome = Outcome::capture(|| Ok("7".parse::<i32>()?), &filter)?;
    /// assert!(outcome.eq_value(&7));
    ///
    /// let outcome = Outcome::capture(|| Ok("x".parse::<i32>()?), &filter)?;
    /// assert!(outcome.is_error());
    /// # Ok::<(), vessel_outcome::BoxedFailure>(())
    /// ```
    pub fn capture<Op>(op: Op, filter: &FailureFilter) -> Result<Self, BoxedFailure>
    where
        Op: FnOnce() -> Result<T, BoxedFailure>,
    {
        match op() {
            Ok(value) => Ok(Self::ok(value)),
            Err(failure) => match filter.first_match(&failure) {
                Some(admitted) => {
                    trace!(admitted, "admitting failure at capture boundary");
                    Ok(Self::error(failure))
                }
                None => {
                    trace!(failure = %failure, "failure outside admitted set; propagating");
                    Err(failure)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_failure() -> BoxedFailure {
        match "x".parse::<i32>() {
            Err(err) => Box::new(err),
            Ok(_) => unreachable!("\"x\" never parses as an integer"),
        }
    }

    #[test]
    fn empty_filter_admits_nothing() {
        let filter = FailureFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);
        assert!(!filter.admits(&parse_failure()));
    }

    #[test]
    fn admitted_type_matches_by_runtime_type() {
        let filter = FailureFilter::new()
            .admit::<std::num::ParseIntError>()
            .admit::<std::str::Utf8Error>();
        assert!(filter.admits(&parse_failure()));
        assert_eq!(
            filter.first_match(&parse_failure()),
            Some(type_name::<std::num::ParseIntError>())
        );
    }

    #[test]
    fn unadmitted_type_does_not_match() {
        let filter = FailureFilter::new().admit::<std::str::Utf8Error>();
        assert!(!filter.admits(&parse_failure()));
        assert_eq!(filter.first_match(&parse_failure()), None);
    }

    #[test]
    fn admission_order_is_preserved() {
        let filter = FailureFilter::new()
            .admit::<std::str::Utf8Error>()
            .admit::<std::num::ParseIntError>();
        let admitted: Vec<_> = filter.admitted().collect();
        assert_eq!(
            admitted,
            vec![
                type_name::<std::str::Utf8Error>(),
                type_name::<std::num::ParseIntError>(),
            ]
        );
    }
}
