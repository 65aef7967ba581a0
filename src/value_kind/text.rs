use super::{wire, TextKind, ValueKind};
use crate::connector::{ParameterTarget, ResultTarget};
use crate::serializer::Context;

/// Character data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Text;

impl ValueKind for Text {
    type Base = Text;
    type Native = String;

    const NAME: &'static str = "text";
    const IS_TEXT: bool = true;

    fn parse_cell(data: &[u8]) -> String {
        wire::parse_text(data)
    }

    fn write_literal<C: Context>(value: &String, context: &mut C) {
        context.write_text(value);
    }

    fn bind_parameter<T: ParameterTarget + ?Sized>(
        target: &mut T,
        index: usize,
        value: &String,
        is_null: bool,
    ) {
        target.bind_text_parameter(index, value, is_null);
    }

    fn bind_result<T: ResultTarget + ?Sized>(
        target: &mut T,
        index: usize,
        value: &mut String,
        is_null: &mut bool,
    ) {
        target.bind_text_result(index, value, is_null);
    }
}

impl TextKind for Text {}
