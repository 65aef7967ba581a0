use super::operator::BinaryOperator;
use super::{Expression, Value};
use crate::serializer::{Context, Serialize};
use crate::value_kind::ValueKind;
use std::marker::PhantomData;

/// Binary operation owning both operands. `K` is the result kind.
#[derive(Debug, Clone)]
pub struct Binary<Op, L, R, K> {
    lhs: L,
    rhs: R,
    _marker: PhantomData<(Op, K)>,
}

impl<Op, L, R, K> Binary<Op, L, R, K> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self {
            lhs,
            rhs,
            _marker: PhantomData,
        }
    }

    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<Op, L, R, K> Expression for Binary<Op, L, R, K>
where
    Op: BinaryOperator,
    L: Expression,
    R: Expression,
    K: ValueKind,
{
    type Kind = K;
}

impl<Op, L, R, K> Value for Binary<Op, L, R, K>
where
    Op: BinaryOperator,
    L: Value,
    R: Value,
    K: ValueKind,
{
}

impl<C, Op, L, R, K> Serialize<C> for Binary<Op, L, R, K>
where
    C: Context,
    Op: BinaryOperator,
    L: Serialize<C>,
    R: Serialize<C>,
{
    fn serialize(&self, context: &mut C) {
        Op::serialize(&self.lhs, &self.rhs, context);
    }

    fn is_compound(&self) -> bool {
        true
    }
}

crate::impl_expression_operators!([Op, L, R, K] Binary<Op, L, R, K>);
