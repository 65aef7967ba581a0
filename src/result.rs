//! Typed result cells.
//!
//! A [`ResultEntry`] is one column slot of a result row. The row object reuses
//! it for every fetched row:
//!
//! ```text
//! unfetched --assign/validate--> valid --invalidate--> unfetched
//! ```
//!
//! Reading `is_null` or `value` is only meaningful while the slot is valid.
//! What happens otherwise depends on the backend's [`Connector`] policy; see
//! there for the assert mode contract.

use crate::connector::{Connector, ResultTarget};
use crate::error::{ResultEntryResult, ResultError};
use crate::value_kind::ValueKind;
use std::fmt;
use std::marker::PhantomData;

/// Result cell of kind `K` read through connector `Db`.
///
/// `NULL_IS_TRIVIAL` lets a single field read NULL as the zero value even when
/// the connector does not.
pub struct ResultEntry<K: ValueKind, Db, const NULL_IS_TRIVIAL: bool = false> {
    is_valid: bool,
    is_null: bool,
    value: K::Native,
    _connector: PhantomData<fn() -> Db>,
}

impl<K: ValueKind, Db: Connector, const NULL_IS_TRIVIAL: bool> ResultEntry<K, Db, NULL_IS_TRIVIAL> {
    /// An unfetched slot.
    pub fn new() -> Self {
        Self {
            is_valid: false,
            is_null: true,
            value: K::Native::default(),
            _connector: PhantomData,
        }
    }

    /// A valid slot holding the parsed cell.
    pub fn from_cell(data: Option<&[u8]>) -> Self {
        let mut entry = Self::new();
        entry.assign(data);
        entry
    }

    /// Parse a textual wire cell; `None` is SQL NULL. The slice length is the
    /// cell length. Always leaves the slot valid.
    pub fn assign(&mut self, data: Option<&[u8]>) {
        self.is_valid = true;
        match data {
            Some(bytes) => {
                self.is_null = false;
                self.value = K::parse_cell(bytes);
            }
            None => {
                self.is_null = true;
                self.value = K::Native::default();
            }
        }
    }

    /// Mark the slot as holding a fetched row, e.g. after the backend filled it
    /// through [`ResultEntry::bind`].
    pub fn validate(&mut self) {
        self.is_valid = true;
    }

    /// Back to the unfetched state: not valid, NULL, zero value.
    pub fn invalidate(&mut self) {
        self.is_valid = false;
        self.is_null = true;
        self.value = K::Native::default();
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_null(&self) -> ResultEntryResult<bool> {
        if Db::ASSERT_RESULT_VALIDITY {
            debug_assert!(self.is_valid, "accessing is_null in non-existing row");
        } else if !self.is_valid {
            return Err(ResultError::NonExistingRow { accessor: "is_null" });
        }
        Ok(self.is_null)
    }

    /// Whether [`ResultEntry::value`] may be read: the slot holds a fetched row,
    /// and its cell is either non-NULL or NULL reads as the zero value.
    pub fn is_readable(&self) -> bool {
        self.is_valid && !self.is_null_value()
    }

    pub fn value(&self) -> ResultEntryResult<&K::Native> {
        if Db::ASSERT_RESULT_VALIDITY {
            debug_assert!(self.is_valid, "accessing value in non-existing row");
            debug_assert!(!self.is_null_value(), "accessing value of NULL field");
        } else {
            if !self.is_valid {
                return Err(ResultError::NonExistingRow { accessor: "value" });
            }
            if self.is_null_value() {
                return Err(ResultError::NullField);
            }
        }
        Ok(&self.value)
    }

    /// NULL that has no zero-value reading under this field's policy.
    fn is_null_value(&self) -> bool {
        self.is_null && !NULL_IS_TRIVIAL && !Db::NULL_RESULT_IS_TRIVIAL_VALUE
    }

    /// Hand this slot to the backend's result hook at `index`.
    pub fn bind<T: ResultTarget + ?Sized>(&mut self, target: &mut T, index: usize) {
        K::bind_result(target, index, &mut self.value, &mut self.is_null);
    }
}

impl<K: ValueKind, Db: Connector, const NULL_IS_TRIVIAL: bool> Default
    for ResultEntry<K, Db, NULL_IS_TRIVIAL>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ValueKind, Db, const NULL_IS_TRIVIAL: bool> Clone for ResultEntry<K, Db, NULL_IS_TRIVIAL> {
    fn clone(&self) -> Self {
        Self {
            is_valid: self.is_valid,
            is_null: self.is_null,
            value: self.value.clone(),
            _connector: PhantomData,
        }
    }
}

impl<K: ValueKind, Db, const NULL_IS_TRIVIAL: bool> fmt::Debug
    for ResultEntry<K, Db, NULL_IS_TRIVIAL>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultEntry")
            .field("kind", &K::NAME)
            .field("is_valid", &self.is_valid)
            .field("is_null", &self.is_null)
            .field("value", &self.value)
            .finish()
    }
}

/// Shows the value, or `NULL` for NULL and unfetched slots.
impl<K: ValueKind, Db, const NULL_IS_TRIVIAL: bool> fmt::Display
    for ResultEntry<K, Db, NULL_IS_TRIVIAL>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid && !self.is_null {
            write!(f, "{}", self.value)
        } else {
            f.write_str("NULL")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::{CheckedConnector, LenientConnector, TrustedConnector};
    use crate::value_kind::{Boolean, FloatingPoint, Integral, Text};

    type Checked<K> = ResultEntry<K, CheckedConnector>;

    #[test]
    fn test_unfetched_slot_errors() {
        let entry = Checked::<Integral>::new();
        assert!(!entry.is_valid());
        assert_eq!(
            entry.is_null(),
            Err(ResultError::NonExistingRow { accessor: "is_null" })
        );
        assert_eq!(
            entry.value(),
            Err(ResultError::NonExistingRow { accessor: "value" })
        );
    }

    #[test]
    fn test_assign_value() {
        let mut entry = Checked::<Integral>::new();
        entry.assign(Some(b"42".as_slice()));
        assert!(entry.is_valid());
        assert_eq!(entry.is_null(), Ok(false));
        assert_eq!(entry.value(), Ok(&42));

        let entry = Checked::<FloatingPoint>::from_cell(Some(b"2.25".as_slice()));
        assert_eq!(entry.value(), Ok(&2.25));

        let entry = Checked::<Text>::from_cell(Some(b"hello".as_slice()));
        assert_eq!(entry.value().map(String::as_str), Ok("hello"));

        let entry = Checked::<Boolean>::from_cell(Some(b"t".as_slice()));
        assert_eq!(entry.value(), Ok(&true));
    }

    #[test]
    fn test_null_cell() {
        let mut entry = Checked::<Integral>::from_cell(Some(b"5".as_slice()));
        entry.assign(None);
        assert!(entry.is_valid());
        assert_eq!(entry.is_null(), Ok(true));
        assert_eq!(entry.value(), Err(ResultError::NullField));
    }

    #[test]
    fn test_null_is_trivial() {
        let entry = ResultEntry::<Integral, LenientConnector>::from_cell(None);
        assert_eq!(entry.is_null(), Ok(true));
        assert_eq!(entry.value(), Ok(&0));

        let entry = ResultEntry::<Text, CheckedConnector, true>::from_cell(None);
        assert_eq!(entry.is_null(), Ok(true));
        assert_eq!(entry.value().map(String::as_str), Ok(""));

        // Validity is still checked.
        let entry = ResultEntry::<Integral, LenientConnector>::new();
        assert_eq!(
            entry.value(),
            Err(ResultError::NonExistingRow { accessor: "value" })
        );
    }

    #[test]
    fn test_invalidate_and_validate() {
        let mut entry = Checked::<Integral>::from_cell(Some(b"17".as_slice()));
        entry.invalidate();
        assert!(!entry.is_valid());
        assert!(entry.is_null().is_err());
        assert!(entry.value().is_err());

        entry.validate();
        // Nothing stale survives invalidation.
        assert_eq!(entry.is_null(), Ok(true));
        assert_eq!(entry.value(), Err(ResultError::NullField));

        entry.assign(Some(b"18".as_slice()));
        assert_eq!(entry.value(), Ok(&18));
    }

    #[test]
    fn test_trusted_connector_valid_access() {
        let entry = ResultEntry::<Integral, TrustedConnector>::from_cell(Some(b"9".as_slice()));
        assert_eq!(entry.is_null(), Ok(false));
        assert_eq!(entry.value(), Ok(&9));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "accessing is_null in non-existing row")]
    fn test_trusted_connector_asserts_validity() {
        let entry = ResultEntry::<Integral, TrustedConnector>::new();
        let _ = entry.is_null();
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "accessing value of NULL field")]
    fn test_trusted_connector_asserts_null() {
        let entry = ResultEntry::<Integral, TrustedConnector>::from_cell(None);
        let _ = entry.value();
    }

    #[test]
    fn test_is_readable_follows_value() {
        let unfetched = Checked::<Integral>::new();
        assert!(!unfetched.is_readable());
        assert!(unfetched.value().is_err());

        let null = Checked::<Integral>::from_cell(None);
        assert!(!null.is_readable());
        assert!(null.value().is_err());

        let filled = Checked::<Integral>::from_cell(Some(b"1".as_slice()));
        assert!(filled.is_readable());
        assert!(filled.value().is_ok());

        let lenient = ResultEntry::<Integral, LenientConnector>::from_cell(None);
        assert!(lenient.is_readable());
        let per_field = ResultEntry::<Integral, TrustedConnector, true>::from_cell(None);
        assert!(per_field.is_readable());
        assert_eq!(per_field.value(), Ok(&0));

        let trusted = ResultEntry::<Integral, TrustedConnector>::from_cell(None);
        assert!(!trusted.is_readable());
    }

    #[test]
    fn test_display() {
        assert_eq!(Checked::<Integral>::from_cell(Some(b"3".as_slice())).to_string(), "3");
        assert_eq!(Checked::<Integral>::from_cell(None).to_string(), "NULL");
        assert_eq!(Checked::<Text>::new().to_string(), "NULL");
    }

    #[test]
    fn test_bind_lets_backend_fill_slot() {
        struct FetchedRow;

        impl ResultTarget for FetchedRow {
            fn bind_integral_result(&mut self, index: usize, value: &mut i64, is_null: &mut bool) {
                *value = index as i64 * 10;
                *is_null = false;
            }
            fn bind_floating_point_result(&mut self, _: usize, _: &mut f64, is_null: &mut bool) {
                *is_null = true;
            }
            fn bind_text_result(&mut self, _: usize, value: &mut String, is_null: &mut bool) {
                value.push_str("filled");
                *is_null = false;
            }
            fn bind_boolean_result(&mut self, _: usize, _: &mut bool, is_null: &mut bool) {
                *is_null = true;
            }
        }

        let mut row = FetchedRow;
        let mut id = Checked::<Integral>::new();
        let mut label = Checked::<Text>::new();
        id.bind(&mut row, 4);
        label.bind(&mut row, 1);
        assert!(id.value().is_err());

        id.validate();
        label.validate();
        assert_eq!(id.value(), Ok(&40));
        assert_eq!(label.value().map(String::as_str), Ok("filled"));
    }
}
