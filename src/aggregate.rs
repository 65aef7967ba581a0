//! Aggregate function calls.
//!
//! Supports COUNT, SUM, AVG, MIN and MAX over any value expression. Each call
//! is a named expression (the keyword is its display name, the lowercase
//! keyword its member name) and also a value, so `max(age) + 1` composes.

use crate::expression::{Expression, Value};
use crate::named::{Member, NamedExpression};
use crate::operand::{IntoOperand, OperandKind};
use crate::serializer::{Context, Serialize};
use crate::value_kind::{FloatingPoint, Integral, NumericKind, ValueKind};
use std::fmt;
use std::marker::PhantomData;

/// Aggregate function marker.
pub trait AggregateFunction: Copy + Default + fmt::Debug {
    /// SQL keyword, also the display name
    const NAME: &'static str;
    /// Field name in result rows
    const MEMBER: &'static str;
}

/// Result kind of an aggregate function over argument kind `K`.
pub trait AggregateOf<K: ValueKind>: AggregateFunction {
    type Output: ValueKind;
}

macro_rules! aggregate_function {
    ($($(#[$meta:meta])* $name:ident => $keyword:literal, $member:literal;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl AggregateFunction for $name {
                const NAME: &'static str = $keyword;
                const MEMBER: &'static str = $member;
            }
        )+
    };
}

aggregate_function! {
    /// MAX(expr) - maximum value, ignoring NULLs
    Max => "MAX", "max";
    /// MIN(expr) - minimum value, ignoring NULLs
    Min => "MIN", "min";
    /// SUM(expr) - sums numeric values, ignoring NULLs
    Sum => "SUM", "sum";
    /// AVG(expr) - average of numeric values, ignoring NULLs
    Avg => "AVG", "avg";
    /// COUNT(expr) - counts non-NULL values
    Count => "COUNT", "count";
}

impl<K: ValueKind> AggregateOf<K> for Max {
    type Output = K::Base;
}

impl<K: ValueKind> AggregateOf<K> for Min {
    type Output = K::Base;
}

impl<K: NumericKind> AggregateOf<K> for Sum {
    type Output = K::Base;
}

impl<K: NumericKind> AggregateOf<K> for Avg {
    type Output = FloatingPoint;
}

impl<K: ValueKind> AggregateOf<K> for Count {
    type Output = Integral;
}

/// Aggregate function applied to an owned argument expression.
#[derive(Debug, Clone)]
pub struct Aggregate<F, E> {
    argument: E,
    _function: PhantomData<F>,
}

impl<F: AggregateFunction, E: Value> Aggregate<F, E> {
    pub fn new(argument: E) -> Self {
        Self {
            argument,
            _function: PhantomData,
        }
    }

    pub fn argument(&self) -> &E {
        &self.argument
    }
}

impl<F, E> Expression for Aggregate<F, E>
where
    F: AggregateOf<<E as Expression>::Kind>,
    E: Value,
{
    type Kind = F::Output;
}

impl<F, E> Value for Aggregate<F, E>
where
    F: AggregateOf<<E as Expression>::Kind>,
    E: Value,
{
}

impl<F, E> NamedExpression for Aggregate<F, E>
where
    F: AggregateOf<<E as Expression>::Kind>,
    E: Value,
{
    fn name(&self) -> &str {
        F::NAME
    }

    fn member(&self) -> Member<F::Output> {
        Member::new(F::MEMBER)
    }
}

impl<C, F, E> Serialize<C> for Aggregate<F, E>
where
    C: Context,
    F: AggregateFunction,
    E: Serialize<C>,
{
    fn serialize(&self, context: &mut C) {
        context.serialize_function(F::NAME, &self.argument);
    }
}

crate::impl_expression_operators!([F, E] Aggregate<F, E>);

/// `MAX(argument)`
pub fn max<T>(argument: T) -> Aggregate<Max, T::Operand>
where
    T: IntoOperand,
    T::Operand: Value,
{
    Aggregate::new(argument.into_operand())
}

/// `MIN(argument)`
pub fn min<T>(argument: T) -> Aggregate<Min, T::Operand>
where
    T: IntoOperand,
    T::Operand: Value,
{
    Aggregate::new(argument.into_operand())
}

/// `SUM(argument)`
pub fn sum<T>(argument: T) -> Aggregate<Sum, T::Operand>
where
    T: IntoOperand,
    T::Operand: Value,
    OperandKind<T>: NumericKind,
{
    Aggregate::new(argument.into_operand())
}

/// `AVG(argument)`
pub fn avg<T>(argument: T) -> Aggregate<Avg, T::Operand>
where
    T: IntoOperand,
    T::Operand: Value,
    OperandKind<T>: NumericKind,
{
    Aggregate::new(argument.into_operand())
}

/// `COUNT(argument)`
pub fn count<T>(argument: T) -> Aggregate<Count, T::Operand>
where
    T: IntoOperand,
    T::Operand: Value,
{
    Aggregate::new(argument.into_operand())
}
