//! SQL scalar kinds and their capabilities.
//!
//! Each kind is a zero-sized tag type implementing [`ValueKind`]:
//!
//! - **Integral**: whole numbers, carried as `i64`
//! - **FloatingPoint**: real numbers, carried as `f64`
//! - **Text**: character data, carried as `String`
//! - **Boolean**: truth values, carried as `bool`
//!
//! Capability flags are associated constants that default to `false`. The same
//! capabilities exist as marker traits ([`NumericKind`], [`TextKind`],
//! [`BooleanKind`]) so operator impls can require them as bounds. A new kind is
//! added by implementing these traits on a new type; existing kinds stay untouched.

pub mod boolean;
pub mod floating_point;
pub mod integral;
pub mod text;
pub mod wire;

pub use boolean::Boolean;
pub use floating_point::FloatingPoint;
pub use integral::Integral;
pub use text::Text;

use crate::connector::{ParameterTarget, ResultTarget};
use crate::serializer::Context;
use std::fmt;

/// A SQL scalar domain.
pub trait ValueKind: Copy + Default + fmt::Debug + 'static {
    /// Canonical kind used for results of cross-kind operations.
    type Base: ValueKind;

    /// Native Rust representation of a value of this kind.
    type Native: Clone + Default + PartialEq + fmt::Debug + fmt::Display;

    /// Human readable kind name.
    const NAME: &'static str;

    const IS_NUMERIC: bool = false;
    const IS_INTEGRAL: bool = false;
    const IS_FLOATING_POINT: bool = false;
    const IS_TEXT: bool = false;
    const IS_BOOLEAN: bool = false;

    /// Parse a non-null textual wire cell.
    fn parse_cell(data: &[u8]) -> Self::Native;

    /// Render a literal of this kind.
    fn write_literal<C: Context>(value: &Self::Native, context: &mut C);

    /// Hand a parameter value to the backend slot at `index`.
    fn bind_parameter<T: ParameterTarget + ?Sized>(
        target: &mut T,
        index: usize,
        value: &Self::Native,
        is_null: bool,
    );

    /// Hand a result slot to the backend so it can fill it in place.
    fn bind_result<T: ResultTarget + ?Sized>(
        target: &mut T,
        index: usize,
        value: &mut Self::Native,
        is_null: &mut bool,
    );
}

/// Kinds that take part in arithmetic.
pub trait NumericKind: ValueKind {}

/// Kinds holding character data.
pub trait TextKind: ValueKind {}

/// Kinds holding truth values.
pub trait BooleanKind: ValueKind {}

/// Implemented by a left-hand kind for every right-hand kind it may be combined
/// with in a binary operation.
pub trait ValidOperand<Rhs: ValueKind>: ValueKind {}

impl<R: NumericKind> ValidOperand<R> for Integral {}
impl<R: NumericKind> ValidOperand<R> for FloatingPoint {}
impl<R: TextKind> ValidOperand<R> for Text {}
impl<R: BooleanKind> ValidOperand<R> for Boolean {}
