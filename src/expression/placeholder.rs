use super::column::Column;
use super::{Expression, Value};
use crate::serializer::{Context, Serialize};
use crate::value_kind::ValueKind;
use std::marker::PhantomData;

/// Placeholder for a value bound at execution time.
///
/// The rendered form is up to the dialect (`?`, `$1`, ...). The value itself
/// lives in a [`crate::parameter::ParameterValue`] owned by the statement.
#[derive(Debug, Clone)]
pub struct Parameter<K> {
    name: String,
    _kind: PhantomData<K>,
}

impl<K: ValueKind> Parameter<K> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _kind: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Create a parameter of the column's kind, named after the column.
pub fn parameter<K: ValueKind>(column: &Column<K>) -> Parameter<K> {
    Parameter::new(column.name())
}

impl<K: ValueKind> Expression for Parameter<K> {
    type Kind = K;
}

impl<K: ValueKind> Value for Parameter<K> {}

impl<C: Context, K: ValueKind> Serialize<C> for Parameter<K> {
    fn serialize(&self, context: &mut C) {
        context.write_parameter_placeholder(&self.name);
    }
}

crate::impl_expression_operators!([K] Parameter<K>);
