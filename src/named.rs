//! Named expressions.
//!
//! A named expression can stand as a result column: besides its SQL rendering
//! it carries a display name and a [`Member`] descriptor from which result-row
//! types build a typed field.

use crate::connector::Connector;
use crate::expression::Expression;
use crate::result::ResultEntry;
use crate::serializer::{Context, Serialize};
use crate::value_kind::ValueKind;
use std::borrow::Cow;
use std::marker::PhantomData;

/// An expression usable as a named result-row field.
pub trait NamedExpression: Expression {
    /// Display name, e.g. the column name or the aggregate keyword.
    fn name(&self) -> &str;

    /// Accessor descriptor for the result-row field.
    fn member(&self) -> Member<Self::Kind>;
}

/// Typed field descriptor of a result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<K> {
    name: Cow<'static, str>,
    _kind: PhantomData<K>,
}

impl<K: ValueKind> Member<K> {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            _kind: PhantomData,
        }
    }

    /// Field name in the generated row type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A fresh, unfetched result slot for this field.
    pub fn entry<Db: Connector>(&self) -> ResultEntry<K, Db> {
        ResultEntry::new()
    }
}

/// `expr AS name`
#[derive(Debug, Clone)]
pub struct Aliased<E> {
    expr: E,
    alias: String,
}

impl<E> Aliased<E> {
    pub fn new(expr: E, alias: impl Into<String>) -> Self {
        Self {
            expr,
            alias: alias.into(),
        }
    }

    pub fn expr(&self) -> &E {
        &self.expr
    }
}

impl<E: Expression> Expression for Aliased<E> {
    type Kind = E::Kind;
}

impl<E: Expression> NamedExpression for Aliased<E> {
    fn name(&self) -> &str {
        &self.alias
    }

    fn member(&self) -> Member<E::Kind> {
        Member::new(self.alias.clone())
    }
}

impl<C: Context, E: Serialize<C>> Serialize<C> for Aliased<E> {
    fn serialize(&self, context: &mut C) {
        context.serialize_operand(&self.expr);
        context.write(" AS ");
        context.write_identifier(&self.alias);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::CheckedConnector;
    use crate::expression::{Column, ExpressionOperators};
    use crate::serializer::{to_sql, AnsiContext};
    use crate::value_kind::{Integral, Text};

    #[test]
    fn test_column_is_named() {
        let age = Column::<Integral>::new("age");
        assert_eq!(NamedExpression::name(&age), "age");
        assert_eq!(age.member().name(), "age");
    }

    #[test]
    fn test_alias() {
        let age = Column::<Integral>::new("age");
        let aliased = (age + 1).alias("next_age");
        assert_eq!(aliased.name(), "next_age");
        assert_eq!(aliased.member().name(), "next_age");
        assert_eq!(
            to_sql::<AnsiContext, _>(&aliased),
            "(age + 1) AS next_age"
        );

        let name = Column::<Text>::new("name").alias("Full Name");
        assert_eq!(to_sql::<AnsiContext, _>(&name), "name AS \"Full Name\"");
    }

    #[test]
    fn test_member_entry_starts_unfetched() {
        let member = Member::<Integral>::new("total");
        let entry = member.entry::<CheckedConnector>();
        assert!(!entry.is_valid());
    }
}
