//! Operator definitions for expressions.
//!
//! Operators are zero-sized marker types. Each one knows its SQL symbol and
//! routes its rendering through the matching [`Context`] hook, which is where
//! dialects differ.

use crate::serializer::{Context, Serialize};
use crate::value_kind::{NumericKind, Text, TextKind, ValidOperand};
use std::fmt;

/// Binary operators supported in expressions
pub trait BinaryOperator: Copy + Default + fmt::Debug {
    const SYMBOL: &'static str;

    fn serialize<C, L, R>(lhs: &L, rhs: &R, context: &mut C)
    where
        C: Context,
        L: Serialize<C>,
        R: Serialize<C>,
    {
        context.serialize_binary(lhs, Self::SYMBOL, rhs);
    }
}

/// Unary operators supported in expressions
pub trait UnaryOperator: Copy + Default + fmt::Debug {
    const SYMBOL: &'static str;
    const POSTFIX: bool = false;

    fn serialize<C, E>(operand: &E, context: &mut C)
    where
        C: Context,
        E: Serialize<C>,
    {
        if Self::POSTFIX {
            context.serialize_postfix(operand, Self::SYMBOL);
        } else {
            context.serialize_prefix(Self::SYMBOL, operand);
        }
    }
}

macro_rules! binary_operator {
    ($($(#[$meta:meta])* $name:ident => $symbol:literal),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl BinaryOperator for $name {
                const SYMBOL: &'static str = $symbol;
            }
        )+
    };
}

binary_operator! {
    Plus => "+",
    Minus => "-",
    Multiply => "*",
    Divide => "/",
    Equal => "=",
    NotEqual => "<>",
    Less => "<",
    LessEqual => "<=",
    Greater => ">",
    GreaterEqual => ">=",
    And => "AND",
    Or => "OR",
    Like => "LIKE",
}

/// Text concatenation. Rendering goes through [`Context::serialize_concat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Concat;

impl BinaryOperator for Concat {
    const SYMBOL: &'static str = "||";

    fn serialize<C, L, R>(lhs: &L, rhs: &R, context: &mut C)
    where
        C: Context,
        L: Serialize<C>,
        R: Serialize<C>,
    {
        context.serialize_concat(lhs, rhs);
    }
}

macro_rules! unary_operator {
    ($($name:ident => $symbol:literal $(, postfix = $postfix:literal)?);+ $(;)?) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl UnaryOperator for $name {
                const SYMBOL: &'static str = $symbol;
                $(const POSTFIX: bool = $postfix;)?
            }
        )+
    };
}

unary_operator! {
    Positive => "+";
    Negate => "-";
    Not => "NOT ";
    IsNull => " IS NULL", postfix = true;
    IsNotNull => " IS NOT NULL", postfix = true;
}

/// What `+` means for a left-hand kind: addition for numbers, concatenation
/// for text.
///
/// Every numeric kind gets addition from the blanket impl. A new text-like
/// kind implements this trait itself with [`Concat`].
pub trait Additive<Rhs: crate::value_kind::ValueKind>: ValidOperand<Rhs> {
    type Operator: BinaryOperator;
}

impl<L, R> Additive<R> for L
where
    L: NumericKind + ValidOperand<R>,
    R: NumericKind,
{
    type Operator = Plus;
}

impl<R: TextKind> Additive<R> for Text {
    type Operator = Concat;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Plus::SYMBOL, "+");
        assert_eq!(Divide::SYMBOL, "/");
        assert_eq!(NotEqual::SYMBOL, "<>");
        assert_eq!(And::SYMBOL, "AND");
        assert_eq!(Concat::SYMBOL, "||");

        assert_eq!(Negate::SYMBOL, "-");
        assert!(!Negate::POSTFIX);
        assert_eq!(IsNull::SYMBOL, " IS NULL");
        assert!(IsNull::POSTFIX);
        assert!(IsNotNull::POSTFIX);
    }

    fn additive_operator<L: Additive<R>, R: crate::value_kind::ValueKind>() -> TypeId {
        TypeId::of::<L::Operator>()
    }

    #[test]
    fn test_additive_operator_by_kind() {
        use crate::value_kind::{FloatingPoint, Integral};

        assert_eq!(additive_operator::<Integral, FloatingPoint>(), TypeId::of::<Plus>());
        assert_eq!(additive_operator::<FloatingPoint, Integral>(), TypeId::of::<Plus>());
        assert_eq!(additive_operator::<Text, Text>(), TypeId::of::<Concat>());
    }
}
