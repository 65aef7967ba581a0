use super::operator::UnaryOperator;
use super::{Expression, Value};
use crate::serializer::{Context, Serialize};
use crate::value_kind::ValueKind;
use std::marker::PhantomData;

/// Unary operation owning its operand. `K` is the result kind.
#[derive(Debug, Clone)]
pub struct Unary<Op, E, K> {
    operand: E,
    _marker: PhantomData<(Op, K)>,
}

impl<Op, E, K> Unary<Op, E, K> {
    pub fn new(operand: E) -> Self {
        Self {
            operand,
            _marker: PhantomData,
        }
    }

    pub fn operand(&self) -> &E {
        &self.operand
    }
}

impl<Op, E, K> Expression for Unary<Op, E, K>
where
    Op: UnaryOperator,
    E: Expression,
    K: ValueKind,
{
    type Kind = K;
}

impl<Op, E, K> Value for Unary<Op, E, K>
where
    Op: UnaryOperator,
    E: Value,
    K: ValueKind,
{
}

impl<C, Op, E, K> Serialize<C> for Unary<Op, E, K>
where
    C: Context,
    Op: UnaryOperator,
    E: Serialize<C>,
{
    fn serialize(&self, context: &mut C) {
        Op::serialize(&self.operand, context);
    }

    // Keeps `-(-x)` from rendering as the comment marker `--x`.
    fn is_compound(&self) -> bool {
        true
    }
}

crate::impl_expression_operators!([Op, E, K] Unary<Op, E, K>);
