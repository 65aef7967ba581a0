//! Rendering expression trees to SQL text.
//!
//! Rendering is dispatched on the pair (node type, context type):
//!
//! - **Serialize**: implemented by every node for the contexts it renders in
//! - **Context**: accumulates text and owns the dialect-sensitive hooks
//!
//! Nodes only ever call hooks. The hooks carry ANSI SQL default bodies and a
//! dialect overrides the ones it renders differently, so adding a dialect never
//! touches a node type.

pub mod dialect;

pub use dialect::{AnsiContext, MySqlContext, PostgresContext, SqliteContext};

use std::fmt;

/// SQL dialect rendered by a context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Ansi,
    Postgres,
    MySql,
    Sqlite,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Ansi => "ANSI",
            Dialect::Postgres => "PostgreSQL",
            Dialect::MySql => "MySQL",
            Dialect::Sqlite => "SQLite",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node renderable in context `C`.
pub trait Serialize<C: Context> {
    /// Append this node's SQL to the context. Must not keep any node state.
    fn serialize(&self, context: &mut C);

    /// Whether the node needs parentheses when it appears as an operand.
    fn is_compound(&self) -> bool {
        false
    }
}

/// Dialect-aware accumulator for rendered SQL.
pub trait Context: Sized {
    fn dialect(&self) -> Dialect;

    /// The accumulated output
    fn buffer(&mut self) -> &mut String;

    fn sql(&self) -> &str;

    fn into_sql(self) -> String;

    fn write(&mut self, text: &str) {
        self.buffer().push_str(text);
    }

    fn write_identifier(&mut self, name: &str) {
        write_quoted_identifier(self, name, '"');
    }

    fn write_integral(&mut self, value: i64) {
        self.write(&value.to_string());
    }

    fn write_floating_point(&mut self, value: f64) {
        if value.is_finite() {
            // Debug keeps the fractional part, so 5.0 stays a real literal.
            self.write(&format!("{:?}", value));
        } else {
            self.write("CAST(");
            self.write_text(non_finite_name(value));
            self.write(" AS DOUBLE PRECISION)");
        }
    }

    fn write_text(&mut self, value: &str) {
        self.write("'");
        self.write(&value.replace('\'', "''"));
        self.write("'");
    }

    fn write_boolean(&mut self, value: bool) {
        self.write(if value { "TRUE" } else { "FALSE" });
    }

    fn write_parameter_placeholder(&mut self, _name: &str) {
        self.write("?");
    }

    /// Render an operand, parenthesised when it is compound.
    fn serialize_operand<E: Serialize<Self>>(&mut self, operand: &E) {
        if operand.is_compound() {
            self.write("(");
            operand.serialize(self);
            self.write(")");
        } else {
            operand.serialize(self);
        }
    }

    fn serialize_binary<L, R>(&mut self, lhs: &L, operator: &str, rhs: &R)
    where
        L: Serialize<Self>,
        R: Serialize<Self>,
    {
        self.serialize_operand(lhs);
        self.write(" ");
        self.write(operator);
        self.write(" ");
        self.serialize_operand(rhs);
    }

    fn serialize_concat<L, R>(&mut self, lhs: &L, rhs: &R)
    where
        L: Serialize<Self>,
        R: Serialize<Self>,
    {
        self.serialize_binary(lhs, "||", rhs);
    }

    /// Render a prefix operation. An operand whose text starts with `-`, such
    /// as a negative literal, is parenthesised so `--` never opens a comment.
    fn serialize_prefix<E: Serialize<Self>>(&mut self, operator: &str, operand: &E) {
        self.write(operator);
        let start = self.buffer().len();
        self.serialize_operand(operand);

        let buffer = self.buffer();
        if buffer[start..].starts_with('-') {
            buffer.insert(start, '(');
            buffer.push(')');
        }
    }

    fn serialize_postfix<E: Serialize<Self>>(&mut self, operand: &E, operator: &str) {
        self.serialize_operand(operand);
        self.write(operator);
    }

    fn serialize_function<E: Serialize<Self>>(&mut self, name: &str, argument: &E) {
        self.write(name);
        self.write("(");
        argument.serialize(self);
        self.write(")");
    }
}

/// Render `expr` into `context`.
pub fn serialize<'a, E, C>(expr: &E, context: &'a mut C) -> &'a mut C
where
    E: Serialize<C>,
    C: Context,
{
    expr.serialize(context);
    context
}

/// Render `expr` with a fresh context and return the SQL text.
pub fn to_sql<C, E>(expr: &E) -> String
where
    C: Context + Default,
    E: Serialize<C>,
{
    let mut context = C::default();
    expr.serialize(&mut context);
    log::trace!("Rendered {} SQL: {}", context.dialect(), context.sql());
    context.into_sql()
}

/// Words that must be quoted when used as identifiers.
const RESERVED_WORDS: &[&str] = &[
    "all", "and", "as", "asc", "between", "by", "case", "check", "column", "create", "delete",
    "desc", "distinct", "drop", "else", "end", "exists", "from", "group", "having", "in",
    "insert", "into", "is", "join", "like", "limit", "not", "null", "on", "or", "order",
    "select", "set", "table", "then", "union", "update", "user", "values", "when", "where",
];

/// Whether `name` can be written without quotes in every supported dialect.
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !RESERVED_WORDS.contains(&name)
}

/// Write `name`, quoting it with `quote` (doubled inside) when required.
pub fn write_quoted_identifier<C: Context>(context: &mut C, name: &str, quote: char) {
    if is_plain_identifier(name) {
        context.write(name);
        return;
    }

    let buffer = context.buffer();
    buffer.push(quote);
    for c in name.chars() {
        if c == quote {
            buffer.push(quote);
        }
        buffer.push(c);
    }
    buffer.push(quote);
}

fn non_finite_name(value: f64) -> &'static str {
    if value.is_nan() {
        "NaN"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifiers() {
        assert!(is_plain_identifier("age"));
        assert!(is_plain_identifier("_tmp1"));
        assert!(is_plain_identifier("first_name"));

        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("1st"));
        assert!(!is_plain_identifier("Age"));
        assert!(!is_plain_identifier("full name"));
        assert!(!is_plain_identifier("order"));
        assert!(!is_plain_identifier("user"));
    }

    #[test]
    fn test_default_hooks() {
        let mut context = AnsiContext::default();
        context.write_identifier("order");
        context.write(" ");
        context.write_identifier("say \"hi\"");
        assert_eq!(context.sql(), "\"order\" \"say \"\"hi\"\"\"");

        let mut context = AnsiContext::default();
        context.write_text("it's");
        context.write(" ");
        context.write_boolean(false);
        context.write(" ");
        context.write_floating_point(5.0);
        context.write(" ");
        context.write_integral(-12);
        assert_eq!(context.sql(), "'it''s' FALSE 5.0 -12");
    }

    #[test]
    fn test_non_finite_floats() {
        let mut context = AnsiContext::default();
        context.write_floating_point(f64::NAN);
        assert_eq!(context.sql(), "CAST('NaN' AS DOUBLE PRECISION)");

        let mut context = AnsiContext::default();
        context.write_floating_point(f64::NEG_INFINITY);
        assert_eq!(context.sql(), "CAST('-Infinity' AS DOUBLE PRECISION)");
    }

    #[test]
    fn test_dialect_names() {
        assert_eq!(Dialect::Ansi.to_string(), "ANSI");
        assert_eq!(Dialect::Postgres.to_string(), "PostgreSQL");
        assert_eq!(Dialect::MySql.to_string(), "MySQL");
        assert_eq!(Dialect::Sqlite.to_string(), "SQLite");
    }
}
