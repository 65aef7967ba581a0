use super::{wire, NumericKind, ValueKind};
use crate::connector::{ParameterTarget, ResultTarget};
use crate::serializer::Context;

/// Real numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FloatingPoint;

impl ValueKind for FloatingPoint {
    type Base = FloatingPoint;
    type Native = f64;

    const NAME: &'static str = "floating point";
    const IS_NUMERIC: bool = true;
    const IS_FLOATING_POINT: bool = true;

    fn parse_cell(data: &[u8]) -> f64 {
        wire::parse_floating_point(data)
    }

    fn write_literal<C: Context>(value: &f64, context: &mut C) {
        context.write_floating_point(*value);
    }

    fn bind_parameter<T: ParameterTarget + ?Sized>(
        target: &mut T,
        index: usize,
        value: &f64,
        is_null: bool,
    ) {
        target.bind_floating_point_parameter(index, value, is_null);
    }

    fn bind_result<T: ResultTarget + ?Sized>(
        target: &mut T,
        index: usize,
        value: &mut f64,
        is_null: &mut bool,
    ) {
        target.bind_floating_point_result(index, value, is_null);
    }
}

impl NumericKind for FloatingPoint {}
