use super::{wire, BooleanKind, ValueKind};
use crate::connector::{ParameterTarget, ResultTarget};
use crate::serializer::Context;

/// Truth values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boolean;

impl ValueKind for Boolean {
    type Base = Boolean;
    type Native = bool;

    const NAME: &'static str = "boolean";
    const IS_BOOLEAN: bool = true;

    fn parse_cell(data: &[u8]) -> bool {
        wire::parse_boolean(data)
    }

    fn write_literal<C: Context>(value: &bool, context: &mut C) {
        context.write_boolean(*value);
    }

    fn bind_parameter<T: ParameterTarget + ?Sized>(
        target: &mut T,
        index: usize,
        value: &bool,
        is_null: bool,
    ) {
        target.bind_boolean_parameter(index, value, is_null);
    }

    fn bind_result<T: ResultTarget + ?Sized>(
        target: &mut T,
        index: usize,
        value: &mut bool,
        is_null: &mut bool,
    ) {
        target.bind_boolean_result(index, value, is_null);
    }
}

impl BooleanKind for Boolean {}
