//! Dialect contexts.
//!
//! | hook                  | ANSI       | PostgreSQL | MySQL          | SQLite    |
//! |-----------------------|------------|------------|----------------|-----------|
//! | quoted identifiers    | `"x"`      | `"x"`      | `` `x` ``      | `"x"`     |
//! | booleans              | TRUE/FALSE | TRUE/FALSE | TRUE/FALSE     | 1/0       |
//! | text concatenation    | `a \|\| b` | `a \|\| b` | `CONCAT(a, b)` | `a \|\| b` |
//! | parameters            | `?`        | `$1`, `$2` | `?`            | `?`       |

use super::{write_quoted_identifier, Context, Dialect, Serialize};

/// Standard SQL, using the default hooks.
#[derive(Debug, Clone, Default)]
pub struct AnsiContext {
    sql: String,
}

impl Context for AnsiContext {
    fn dialect(&self) -> Dialect {
        Dialect::Ansi
    }

    fn buffer(&mut self) -> &mut String {
        &mut self.sql
    }

    fn sql(&self) -> &str {
        &self.sql
    }

    fn into_sql(self) -> String {
        self.sql
    }
}

/// PostgreSQL: numbered placeholders.
#[derive(Debug, Clone, Default)]
pub struct PostgresContext {
    sql: String,
    /// Placeholders written so far
    parameter_count: usize,
}

impl PostgresContext {
    pub fn parameter_count(&self) -> usize {
        self.parameter_count
    }
}

impl Context for PostgresContext {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn buffer(&mut self) -> &mut String {
        &mut self.sql
    }

    fn sql(&self) -> &str {
        &self.sql
    }

    fn into_sql(self) -> String {
        self.sql
    }

    fn write_floating_point(&mut self, value: f64) {
        if value.is_finite() {
            self.write(&format!("{:?}", value));
        } else if value.is_nan() {
            self.write("'NaN'::float8");
        } else if value.is_sign_positive() {
            self.write("'Infinity'::float8");
        } else {
            self.write("'-Infinity'::float8");
        }
    }

    fn write_parameter_placeholder(&mut self, _name: &str) {
        self.parameter_count += 1;
        let placeholder = format!("${}", self.parameter_count);
        self.write(&placeholder);
    }
}

/// MySQL: backtick identifiers, backslash escapes, `CONCAT()`.
#[derive(Debug, Clone, Default)]
pub struct MySqlContext {
    sql: String,
}

impl Context for MySqlContext {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn buffer(&mut self) -> &mut String {
        &mut self.sql
    }

    fn sql(&self) -> &str {
        &self.sql
    }

    fn into_sql(self) -> String {
        self.sql
    }

    fn write_identifier(&mut self, name: &str) {
        write_quoted_identifier(self, name, '`');
    }

    fn write_text(&mut self, value: &str) {
        let escaped = value.replace('\\', "\\\\").replace('\'', "''");
        self.write("'");
        self.write(&escaped);
        self.write("'");
    }

    fn serialize_concat<L, R>(&mut self, lhs: &L, rhs: &R)
    where
        L: Serialize<Self>,
        R: Serialize<Self>,
    {
        self.write("CONCAT(");
        lhs.serialize(self);
        self.write(", ");
        rhs.serialize(self);
        self.write(")");
    }
}

/// SQLite: booleans are integers.
#[derive(Debug, Clone, Default)]
pub struct SqliteContext {
    sql: String,
}

impl Context for SqliteContext {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn buffer(&mut self) -> &mut String {
        &mut self.sql
    }

    fn sql(&self) -> &str {
        &self.sql
    }

    fn into_sql(self) -> String {
        self.sql
    }

    fn write_boolean(&mut self, value: bool) {
        self.write(if value { "1" } else { "0" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{parameter, Column, ExpressionOperators};
    use crate::serializer::to_sql;
    use crate::value_kind::{Boolean, FloatingPoint, Integral, Text};

    #[test]
    fn test_same_tree_in_every_dialect() {
        let active = Column::<Boolean>::new("active");
        let expr = active.eq(true);

        assert_eq!(to_sql::<AnsiContext, _>(&expr), "active = TRUE");
        assert_eq!(to_sql::<PostgresContext, _>(&expr), "active = TRUE");
        assert_eq!(to_sql::<MySqlContext, _>(&expr), "active = TRUE");
        assert_eq!(to_sql::<SqliteContext, _>(&expr), "active = 1");
    }

    #[test]
    fn test_concat_override() {
        let name = Column::<Text>::new("name");
        let expr = name + "-" + "x";

        assert_eq!(to_sql::<AnsiContext, _>(&expr), "(name || '-') || 'x'");
        assert_eq!(to_sql::<MySqlContext, _>(&expr), "CONCAT(CONCAT(name, '-'), 'x')");
    }

    #[test]
    fn test_identifier_quoting() {
        let column = Column::<Integral>::with_table("Order Items", "order");

        assert_eq!(
            to_sql::<AnsiContext, _>(&column),
            "\"Order Items\".\"order\""
        );
        assert_eq!(to_sql::<MySqlContext, _>(&column), "`Order Items`.`order`");
    }

    #[test]
    fn test_text_escaping() {
        let path = Column::<Text>::new("path");
        let expr = path.eq("C:\\it's");

        assert_eq!(to_sql::<AnsiContext, _>(&expr), "path = 'C:\\it''s'");
        assert_eq!(to_sql::<MySqlContext, _>(&expr), "path = 'C:\\\\it''s'");
    }

    #[test]
    fn test_parameter_placeholders() {
        let age = Column::<Integral>::new("age");
        let price = Column::<FloatingPoint>::new("price");
        let expr = age
            .clone()
            .gt(parameter(&age))
            .and(price.clone().lt(parameter(&price)));

        assert_eq!(to_sql::<AnsiContext, _>(&expr), "(age > ?) AND (price < ?)");
        assert_eq!(
            to_sql::<PostgresContext, _>(&expr),
            "(age > $1) AND (price < $2)"
        );

        let mut context = PostgresContext::default();
        crate::serializer::serialize(&expr, &mut context);
        assert_eq!(context.parameter_count(), 2);
    }

    #[test]
    fn test_postgres_non_finite_floats() {
        let price = Column::<FloatingPoint>::new("price");
        assert_eq!(
            to_sql::<PostgresContext, _>(&price.eq(f64::INFINITY)),
            "price = 'Infinity'::float8"
        );
    }
}
