//! Column references.

use super::assignment::Assignment;
use super::binary::Binary;
use super::operator::{Additive, Divide, Minus, Multiply};
use super::{Expression, Value};
use crate::named::{Member, NamedExpression};
use crate::operand::{IntoOperand, OperandKind};
use crate::serializer::{Context, Serialize};
use crate::value_kind::{NumericKind, ValidOperand, ValueKind};
use std::marker::PhantomData;

/// Column reference in an expression
///
/// Columns are the only assignable expressions, so the compound assignment
/// builders live here.
#[derive(Debug, Clone)]
pub struct Column<K> {
    /// Optional qualifying table name
    table: Option<String>,
    name: String,
    _kind: PhantomData<K>,
}

impl<K: ValueKind> Column<K> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
            _kind: PhantomData,
        }
    }

    pub fn with_table(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
            _kind: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// `column = value`
    pub fn assign<T>(&self, value: T) -> Assignment<Self, T::Operand>
    where
        T: IntoOperand,
        T::Operand: Value,
        K: ValidOperand<OperandKind<T>>,
    {
        Assignment::new(self.clone(), value.into_operand())
    }

    /// `column = column + value`
    #[allow(clippy::type_complexity)]
    pub fn assign_add<T>(
        &self,
        value: T,
    ) -> Assignment<Self, Binary<<K as Additive<OperandKind<T>>>::Operator, Self, T::Operand, K::Base>>
    where
        T: IntoOperand,
        T::Operand: Value,
        K: Additive<OperandKind<T>>,
    {
        Assignment::new(
            self.clone(),
            Binary::new(self.clone(), value.into_operand()),
        )
    }

    /// `column = column - value`
    pub fn assign_sub<T>(&self, value: T) -> Assignment<Self, Binary<Minus, Self, T::Operand, K::Base>>
    where
        T: IntoOperand,
        T::Operand: Value,
        K: NumericKind + ValidOperand<OperandKind<T>>,
    {
        Assignment::new(
            self.clone(),
            Binary::new(self.clone(), value.into_operand()),
        )
    }

    /// `column = column * value`
    pub fn assign_mul<T>(
        &self,
        value: T,
    ) -> Assignment<Self, Binary<Multiply, Self, T::Operand, K::Base>>
    where
        T: IntoOperand,
        T::Operand: Value,
        K: NumericKind + ValidOperand<OperandKind<T>>,
    {
        Assignment::new(
            self.clone(),
            Binary::new(self.clone(), value.into_operand()),
        )
    }

    /// `column = column / value`
    ///
    /// Unlike the plain `/` operator, the assignment form checks the operand kind.
    pub fn assign_div<T>(&self, value: T) -> Assignment<Self, Binary<Divide, Self, T::Operand, K::Base>>
    where
        T: IntoOperand,
        T::Operand: Value,
        K: NumericKind + ValidOperand<OperandKind<T>>,
    {
        Assignment::new(
            self.clone(),
            Binary::new(self.clone(), value.into_operand()),
        )
    }
}

impl<K: ValueKind> Expression for Column<K> {
    type Kind = K;
}

impl<K: ValueKind> Value for Column<K> {}

impl<K: ValueKind> NamedExpression for Column<K> {
    fn name(&self) -> &str {
        &self.name
    }

    fn member(&self) -> Member<K> {
        Member::new(self.name.clone())
    }
}

impl<C: Context, K: ValueKind> Serialize<C> for Column<K> {
    fn serialize(&self, context: &mut C) {
        if let Some(table) = &self.table {
            context.write_identifier(table);
            context.write(".");
        }
        context.write_identifier(&self.name);
    }
}

crate::impl_expression_operators!([K] Column<K>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::{to_sql, AnsiContext};
    use crate::value_kind::{FloatingPoint, Integral, Text};

    #[test]
    fn test_column() {
        let age = Column::<Integral>::new("age");
        assert_eq!(age.name(), "age");
        assert!(age.table().is_none());

        let qualified = Column::<Integral>::with_table("person", "age");
        assert_eq!(qualified.table(), Some("person"));
        assert_eq!(to_sql::<AnsiContext, _>(&qualified), "person.age");
    }

    #[test]
    fn test_compound_assignments() {
        let age = Column::<Integral>::new("age");
        assert_eq!(to_sql::<AnsiContext, _>(&age.assign(30)), "age = 30");
        assert_eq!(to_sql::<AnsiContext, _>(&age.assign_add(1)), "age = age + 1");
        assert_eq!(to_sql::<AnsiContext, _>(&age.assign_sub(2)), "age = age - 2");
        assert_eq!(to_sql::<AnsiContext, _>(&age.assign_mul(3)), "age = age * 3");
        assert_eq!(to_sql::<AnsiContext, _>(&age.assign_div(4)), "age = age / 4");

        let price = Column::<FloatingPoint>::new("price");
        assert_eq!(
            to_sql::<AnsiContext, _>(&price.assign_mul(1.5)),
            "price = price * 1.5"
        );

        let name = Column::<Text>::new("name");
        assert_eq!(
            to_sql::<AnsiContext, _>(&name.assign_add("!")),
            "name = name || '!'"
        );
    }
}
