//! Composition operations shared by every value expression.
//!
//! Arithmetic uses the `std::ops` traits. Those are foreign traits, so they are
//! stamped onto each node type by [`impl_expression_operators!`]; everything
//! else comes from the blanket [`ExpressionOperators`] trait. Operand checks are
//! trait bounds, so an invalid combination never produces a node.
//!
//! `/` only requires a numeric dividend and a value divisor. The divisor's kind
//! is not checked, unlike `+`, `-` and `*`.

use super::binary::Binary;
use super::operator::{
    And, Equal, Greater, GreaterEqual, IsNotNull, IsNull, Less, LessEqual, Like, NotEqual, Or,
    Positive,
};
use super::unary::Unary;
use super::Value;
use crate::named::Aliased;
use crate::operand::{IntoOperand, OperandKind};
use crate::value_kind::{Boolean, BooleanKind, NumericKind, TextKind, ValidOperand};

/// Implements operand wrapping and the arithmetic operators for a node type.
///
/// The generic parameters of the type are listed in brackets, each with at most
/// one bound: `impl_expression_operators!([K: ValueKind] Literal<K>)`.
#[macro_export]
macro_rules! impl_expression_operators {
    ([$($param:ident $(: $bound:ident)?),*] $ty:ty) => {
        impl<$($param $(: $bound)?),*> $crate::operand::IntoOperand for $ty
        where
            $ty: $crate::expression::Expression,
        {
            type Operand = Self;

            fn into_operand(self) -> Self {
                self
            }
        }

        impl<$($param $(: $bound)?,)* RhsOperand> ::std::ops::Add<RhsOperand> for $ty
        where
            $ty: $crate::expression::Value,
            RhsOperand: $crate::operand::IntoOperand,
            <RhsOperand as $crate::operand::IntoOperand>::Operand: $crate::expression::Value,
            <$ty as $crate::expression::Expression>::Kind:
                $crate::expression::Additive<$crate::operand::OperandKind<RhsOperand>>,
        {
            type Output = $crate::expression::Binary<
                <<$ty as $crate::expression::Expression>::Kind as $crate::expression::Additive<
                    $crate::operand::OperandKind<RhsOperand>,
                >>::Operator,
                $ty,
                <RhsOperand as $crate::operand::IntoOperand>::Operand,
                <<$ty as $crate::expression::Expression>::Kind as $crate::value_kind::ValueKind>::Base,
            >;

            fn add(self, rhs: RhsOperand) -> Self::Output {
                $crate::expression::Binary::new(
                    self,
                    $crate::operand::IntoOperand::into_operand(rhs),
                )
            }
        }

        impl<$($param $(: $bound)?,)* RhsOperand> ::std::ops::Sub<RhsOperand> for $ty
        where
            $ty: $crate::expression::Value,
            RhsOperand: $crate::operand::IntoOperand,
            <RhsOperand as $crate::operand::IntoOperand>::Operand: $crate::expression::Value,
            <$ty as $crate::expression::Expression>::Kind: $crate::value_kind::NumericKind
                + $crate::value_kind::ValidOperand<$crate::operand::OperandKind<RhsOperand>>,
        {
            type Output = $crate::expression::Binary<
                $crate::expression::operator::Minus,
                $ty,
                <RhsOperand as $crate::operand::IntoOperand>::Operand,
                <<$ty as $crate::expression::Expression>::Kind as $crate::value_kind::ValueKind>::Base,
            >;

            fn sub(self, rhs: RhsOperand) -> Self::Output {
                $crate::expression::Binary::new(
                    self,
                    $crate::operand::IntoOperand::into_operand(rhs),
                )
            }
        }

        impl<$($param $(: $bound)?,)* RhsOperand> ::std::ops::Mul<RhsOperand> for $ty
        where
            $ty: $crate::expression::Value,
            RhsOperand: $crate::operand::IntoOperand,
            <RhsOperand as $crate::operand::IntoOperand>::Operand: $crate::expression::Value,
            <$ty as $crate::expression::Expression>::Kind: $crate::value_kind::NumericKind
                + $crate::value_kind::ValidOperand<$crate::operand::OperandKind<RhsOperand>>,
        {
            type Output = $crate::expression::Binary<
                $crate::expression::operator::Multiply,
                $ty,
                <RhsOperand as $crate::operand::IntoOperand>::Operand,
                <<$ty as $crate::expression::Expression>::Kind as $crate::value_kind::ValueKind>::Base,
            >;

            fn mul(self, rhs: RhsOperand) -> Self::Output {
                $crate::expression::Binary::new(
                    self,
                    $crate::operand::IntoOperand::into_operand(rhs),
                )
            }
        }

        impl<$($param $(: $bound)?,)* RhsOperand> ::std::ops::Div<RhsOperand> for $ty
        where
            $ty: $crate::expression::Value,
            RhsOperand: $crate::operand::IntoOperand,
            <RhsOperand as $crate::operand::IntoOperand>::Operand: $crate::expression::Value,
            <$ty as $crate::expression::Expression>::Kind: $crate::value_kind::NumericKind,
        {
            type Output = $crate::expression::Binary<
                $crate::expression::operator::Divide,
                $ty,
                <RhsOperand as $crate::operand::IntoOperand>::Operand,
                <<$ty as $crate::expression::Expression>::Kind as $crate::value_kind::ValueKind>::Base,
            >;

            fn div(self, rhs: RhsOperand) -> Self::Output {
                $crate::expression::Binary::new(
                    self,
                    $crate::operand::IntoOperand::into_operand(rhs),
                )
            }
        }

        impl<$($param $(: $bound)?),*> ::std::ops::Neg for $ty
        where
            $ty: $crate::expression::Value,
            <$ty as $crate::expression::Expression>::Kind: $crate::value_kind::NumericKind,
        {
            type Output = $crate::expression::Unary<
                $crate::expression::operator::Negate,
                $ty,
                <$ty as $crate::expression::Expression>::Kind,
            >;

            fn neg(self) -> Self::Output {
                $crate::expression::Unary::new(self)
            }
        }

        impl<$($param $(: $bound)?),*> ::std::ops::Not for $ty
        where
            $ty: $crate::expression::Value,
            <$ty as $crate::expression::Expression>::Kind: $crate::value_kind::BooleanKind,
        {
            type Output = $crate::expression::Unary<
                $crate::expression::operator::Not,
                $ty,
                $crate::value_kind::Boolean,
            >;

            fn not(self) -> Self::Output {
                $crate::expression::Unary::new(self)
            }
        }
    };
}

/// Comparison, logical, text and aliasing operations on value expressions.
pub trait ExpressionOperators: Value + Sized {
    fn eq<R>(self, rhs: R) -> Binary<Equal, Self, R::Operand, Boolean>
    where
        R: IntoOperand,
        R::Operand: Value,
        Self::Kind: ValidOperand<OperandKind<R>>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn ne<R>(self, rhs: R) -> Binary<NotEqual, Self, R::Operand, Boolean>
    where
        R: IntoOperand,
        R::Operand: Value,
        Self::Kind: ValidOperand<OperandKind<R>>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn lt<R>(self, rhs: R) -> Binary<Less, Self, R::Operand, Boolean>
    where
        R: IntoOperand,
        R::Operand: Value,
        Self::Kind: ValidOperand<OperandKind<R>>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn le<R>(self, rhs: R) -> Binary<LessEqual, Self, R::Operand, Boolean>
    where
        R: IntoOperand,
        R::Operand: Value,
        Self::Kind: ValidOperand<OperandKind<R>>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn gt<R>(self, rhs: R) -> Binary<Greater, Self, R::Operand, Boolean>
    where
        R: IntoOperand,
        R::Operand: Value,
        Self::Kind: ValidOperand<OperandKind<R>>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn ge<R>(self, rhs: R) -> Binary<GreaterEqual, Self, R::Operand, Boolean>
    where
        R: IntoOperand,
        R::Operand: Value,
        Self::Kind: ValidOperand<OperandKind<R>>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn is_null(self) -> Unary<IsNull, Self, Boolean> {
        Unary::new(self)
    }

    fn is_not_null(self) -> Unary<IsNotNull, Self, Boolean> {
        Unary::new(self)
    }

    /// Unary plus.
    fn positive(self) -> Unary<Positive, Self, Self::Kind>
    where
        Self::Kind: NumericKind,
    {
        Unary::new(self)
    }

    fn and<R>(self, rhs: R) -> Binary<And, Self, R::Operand, Boolean>
    where
        R: IntoOperand,
        R::Operand: Value,
        Self::Kind: BooleanKind + ValidOperand<OperandKind<R>>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn or<R>(self, rhs: R) -> Binary<Or, Self, R::Operand, Boolean>
    where
        R: IntoOperand,
        R::Operand: Value,
        Self::Kind: BooleanKind + ValidOperand<OperandKind<R>>,
    {
        Binary::new(self, rhs.into_operand())
    }

    fn like<R>(self, pattern: R) -> Binary<Like, Self, R::Operand, Boolean>
    where
        R: IntoOperand,
        R::Operand: Value,
        Self::Kind: TextKind + ValidOperand<OperandKind<R>>,
    {
        Binary::new(self, pattern.into_operand())
    }

    /// `expr AS name`. The result is a named expression but no longer a value.
    fn alias(self, name: impl Into<String>) -> Aliased<Self> {
        Aliased::new(self, name)
    }
}

impl<E: Value> ExpressionOperators for E {}
