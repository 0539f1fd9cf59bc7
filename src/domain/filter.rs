//! Equality helpers shared by the list filters.
//!
//! Every filter is exact-match: no substring, case folding, or ranges.
//! An unset filter matches everything; a set filter never matches an
//! unset stored value.

pub(crate) fn matches<T: PartialEq + ?Sized>(filter: Option<&T>, value: &T) -> bool {
    filter.map_or(true, |expected| expected == value)
}

pub(crate) fn matches_optional<T: PartialEq + ?Sized>(filter: Option<&T>, value: Option<&T>) -> bool {
    filter.map_or(true, |expected| value == Some(expected))
}
