//! Statically typed SQL expression building.
//!
//! Value kinds ([`Integral`], [`FloatingPoint`], [`Text`], [`Boolean`]) compose into
//! expression trees through Rust operators and the [`ExpressionOperators`] trait.
//! Invalid combinations are rejected by trait bounds, so no malformed tree can
//! ever be built. Trees render to SQL through a dialect [`Context`], and the
//! [`parameter`](mod@parameter) and [`result`] modules marshal scalar values to and from a backend.
//!
//! ```
//! use vibeql::{max, to_sql, AnsiContext, Column, Integral};
//!
//! let age = Column::<Integral>::new("age");
//! assert_eq!(to_sql::<AnsiContext, _>(&(age.clone() + 5)), "age + 5");
//! assert_eq!(to_sql::<AnsiContext, _>(&max(age)), "MAX(age)");
//! ```
//!
//! Arithmetic requires numeric operands:
//!
//! ```compile_fail
//! use vibeql::{Column, Integral};
//!
//! let age = Column::<Integral>::new("age");
//! let _ = age + "five";
//! ```
//!
//! Text cannot be subtracted:
//!
//! ```compile_fail
//! use vibeql::{Column, Text};
//!
//! let name = Column::<Text>::new("name");
//! let _ = name - "x";
//! ```
//!
//! Aggregates only take value expressions, and an alias is not one:
//!
//! ```compile_fail
//! use vibeql::{max, Column, ExpressionOperators, Integral};
//!
//! let age = Column::<Integral>::new("age");
//! let _ = max(age.alias("years"));
//! ```
//!
//! `SUM` needs a numeric argument:
//!
//! ```compile_fail
//! use vibeql::{sum, Column, Text};
//!
//! let _ = sum(Column::<Text>::new("name"));
//! ```
//!
//! Comparisons need compatible kinds:
//!
//! ```compile_fail
//! use vibeql::{Boolean, Column, ExpressionOperators};
//!
//! let active = Column::<Boolean>::new("active");
//! let _ = active.eq(1);
//! ```
//!
//! Multiplication checks its operand like `+` and `-`:
//!
//! ```compile_fail
//! use vibeql::{Column, Integral};
//!
//! let age = Column::<Integral>::new("age");
//! let _ = age * "x";
//! ```
//!
//! Booleans take no part in arithmetic:
//!
//! ```compile_fail
//! use vibeql::{Boolean, Column};
//!
//! let active = Column::<Boolean>::new("active");
//! let _ = active + 1;
//! ```
//!
//! Only numbers can be negated:
//!
//! ```compile_fail
//! use vibeql::{Column, Text};
//!
//! let name = Column::<Text>::new("name");
//! let _ = -name;
//! ```
//!
//! Only booleans can be inverted:
//!
//! ```compile_fail
//! use vibeql::{Column, Integral};
//!
//! let age = Column::<Integral>::new("age");
//! let _ = !age;
//! ```
//!
//! Compound assignments check the operand:
//!
//! ```compile_fail
//! use vibeql::{Column, Integral};
//!
//! let age = Column::<Integral>::new("age");
//! let _ = age.assign_add("x");
//! ```
//!
//! Even `assign_div`, although a plain `/` accepts any value divisor:
//!
//! ```compile_fail
//! use vibeql::{Column, Integral};
//!
//! let age = Column::<Integral>::new("age");
//! let _ = age.assign_div("x");
//! ```

pub mod aggregate;
pub mod connector;
pub mod error;
pub mod expression;
pub mod named;
pub mod operand;
pub mod parameter;
pub mod result;
pub mod serializer;
pub mod value_kind;

pub use aggregate::{avg, count, max, min, sum, Aggregate};
pub use connector::{CheckedConnector, Connector, LenientConnector, TrustedConnector};
pub use error::{ResultEntryResult, ResultError};
pub use expression::{
    parameter, Assignment, Binary, Column, Expression, ExpressionOperators, Parameter,
    Unary, Value,
};
pub use named::{Aliased, Member, NamedExpression};
pub use operand::{IntoOperand, Literal};
pub use parameter::ParameterValue;
pub use result::ResultEntry;
pub use serializer::{
    serialize, to_sql, AnsiContext, Context, Dialect, MySqlContext, PostgresContext,
    Serialize, SqliteContext,
};
pub use value_kind::{Boolean, FloatingPoint, Integral, Text, ValueKind};
