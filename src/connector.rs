//! Backend connector boundary.
//!
//! A backend participates through three traits:
//!
//! - **Connector**: compile-time policy for result access checks
//! - **ParameterTarget**: per-kind hooks receiving bound parameter values
//! - **ResultTarget**: per-kind hooks receiving result slots to fill
//!
//! Slot indices are forwarded untouched; bounds checking is the backend's job.

/// Result access policy of a backend.
///
/// With `ASSERT_RESULT_VALIDITY` the backend promises never to let callers read
/// a slot outside a fetched row. Access checks become `debug_assert!`s, so a
/// violated promise panics in debug builds and silently yields whatever the slot
/// holds in release builds.
///
/// With `NULL_RESULT_IS_TRIVIAL_VALUE` reading the value of a NULL cell yields
/// the kind's zero value instead of an error.
pub trait Connector {
    const ASSERT_RESULT_VALIDITY: bool = false;
    const NULL_RESULT_IS_TRIVIAL_VALUE: bool = false;
}

/// Reports every access violation as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedConnector;

impl Connector for CheckedConnector {}

/// Trusts the caller and only asserts in debug builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustedConnector;

impl Connector for TrustedConnector {
    const ASSERT_RESULT_VALIDITY: bool = true;
}

/// Checks row validity but reads NULL cells as zero values.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientConnector;

impl Connector for LenientConnector {
    const NULL_RESULT_IS_TRIVIAL_VALUE: bool = true;
}

/// Receives bound parameter values, one hook per kind.
pub trait ParameterTarget {
    fn bind_integral_parameter(&mut self, index: usize, value: &i64, is_null: bool);
    fn bind_floating_point_parameter(&mut self, index: usize, value: &f64, is_null: bool);
    fn bind_text_parameter(&mut self, index: usize, value: &str, is_null: bool);
    fn bind_boolean_parameter(&mut self, index: usize, value: &bool, is_null: bool);
}

/// Receives result slots, one hook per kind. The backend may write the fetched
/// value and null flag through the given references.
pub trait ResultTarget {
    fn bind_integral_result(&mut self, index: usize, value: &mut i64, is_null: &mut bool);
    fn bind_floating_point_result(&mut self, index: usize, value: &mut f64, is_null: &mut bool);
    fn bind_text_result(&mut self, index: usize, value: &mut String, is_null: &mut bool);
    fn bind_boolean_result(&mut self, index: usize, value: &mut bool, is_null: &mut bool);
}
