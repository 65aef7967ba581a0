use super::{wire, NumericKind, ValueKind};
use crate::connector::{ParameterTarget, ResultTarget};
use crate::serializer::Context;

/// Whole numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Integral;

impl ValueKind for Integral {
    type Base = Integral;
    type Native = i64;

    const NAME: &'static str = "integral";
    const IS_NUMERIC: bool = true;
    const IS_INTEGRAL: bool = true;

    fn parse_cell(data: &[u8]) -> i64 {
        wire::parse_integral(data)
    }

    fn write_literal<C: Context>(value: &i64, context: &mut C) {
        context.write_integral(*value);
    }

    fn bind_parameter<T: ParameterTarget + ?Sized>(
        target: &mut T,
        index: usize,
        value: &i64,
        is_null: bool,
    ) {
        target.bind_integral_parameter(index, value, is_null);
    }

    fn bind_result<T: ResultTarget + ?Sized>(
        target: &mut T,
        index: usize,
        value: &mut i64,
        is_null: &mut bool,
    ) {
        target.bind_integral_result(index, value, is_null);
    }
}

impl NumericKind for Integral {}
