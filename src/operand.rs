//! Operand wrapping.
//!
//! Every right-hand operand passes through [`IntoOperand`]. Expression nodes
//! wrap to themselves; plain Rust values become a [`Literal`] of the best
//! matching kind, so literals and sub-expressions are interchangeable.

use crate::expression::{Expression, Value};
use crate::serializer::{Context, Serialize};
use crate::value_kind::{Boolean, FloatingPoint, Integral, Text, ValueKind};

/// Conversion of an operand into an expression node.
pub trait IntoOperand {
    type Operand: Expression;

    fn into_operand(self) -> Self::Operand;
}

/// Value kind an operand evaluates to once wrapped.
pub type OperandKind<T> = <<T as IntoOperand>::Operand as Expression>::Kind;

/// Literal value in an expression
#[derive(Debug, Clone)]
pub struct Literal<K: ValueKind> {
    value: K::Native,
}

impl<K: ValueKind> Literal<K> {
    pub fn new(value: K::Native) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &K::Native {
        &self.value
    }
}

impl<K: ValueKind> Expression for Literal<K> {
    type Kind = K;
}

impl<K: ValueKind> Value for Literal<K> {}

impl<C: Context, K: ValueKind> Serialize<C> for Literal<K> {
    fn serialize(&self, context: &mut C) {
        K::write_literal(&self.value, context);
    }
}

crate::impl_expression_operators!([K: ValueKind] Literal<K>);

macro_rules! impl_literal_operand {
    ($kind:ty => $($native:ty),+) => {
        $(
            impl IntoOperand for $native {
                type Operand = Literal<$kind>;

                fn into_operand(self) -> Literal<$kind> {
                    Literal::new(self.into())
                }
            }
        )+
    };
}

impl_literal_operand!(Integral => i8, i16, i32, i64, u8, u16, u32);
impl_literal_operand!(FloatingPoint => f32, f64);
impl_literal_operand!(Text => String);
impl_literal_operand!(Boolean => bool);

impl IntoOperand for &str {
    type Operand = Literal<Text>;

    fn into_operand(self) -> Literal<Text> {
        Literal::new(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Column;
    use std::any::TypeId;

    fn kind_of<T: IntoOperand>(_: T) -> TypeId {
        TypeId::of::<OperandKind<T>>()
    }

    #[test]
    fn test_literal_kinds() {
        assert_eq!(kind_of(5), TypeId::of::<Integral>());
        assert_eq!(kind_of(5u8), TypeId::of::<Integral>());
        assert_eq!(kind_of(5i64), TypeId::of::<Integral>());
        assert_eq!(kind_of(2.5), TypeId::of::<FloatingPoint>());
        assert_eq!(kind_of(2.5f32), TypeId::of::<FloatingPoint>());
        assert_eq!(kind_of("abc"), TypeId::of::<Text>());
        assert_eq!(kind_of(String::from("abc")), TypeId::of::<Text>());
        assert_eq!(kind_of(true), TypeId::of::<Boolean>());
    }

    #[test]
    fn test_literal_values() {
        assert_eq!(*7i32.into_operand().value(), 7i64);
        assert_eq!(*u32::MAX.into_operand().value(), 4_294_967_295i64);
        assert_eq!(*1.5f32.into_operand().value(), 1.5f64);
        assert_eq!("x".into_operand().value(), "x");
        assert!(*true.into_operand().value());
    }

    #[test]
    fn test_expressions_wrap_to_themselves() {
        let age = Column::<Integral>::new("age");
        let wrapped = age.into_operand();
        assert_eq!(wrapped.name(), "age");
        assert_eq!(kind_of(wrapped), TypeId::of::<Integral>());
    }
}
