//! Expression trees.
//!
//! This module provides:
//! - The [`Expression`] and [`Value`] capability traits
//! - Leaf nodes: columns, literals (see [`crate::operand`]) and parameters
//! - Operation nodes: binary, unary and assignment
//! - Operator overloading and the [`ExpressionOperators`] extension trait
//!
//! Operation nodes own their operands by value. Trees are built bottom-up and
//! never change after construction.

pub mod assignment;
pub mod binary;
pub mod column;
pub mod operator;
pub mod ops;
pub mod placeholder;
pub mod unary;

pub use assignment::Assignment;
pub use binary::Binary;
pub use column::Column;
pub use operator::{Additive, BinaryOperator, UnaryOperator};
pub use ops::ExpressionOperators;
pub use placeholder::{parameter, Parameter};
pub use unary::Unary;

use crate::value_kind::ValueKind;

/// A node that evaluates to a value of kind [`Expression::Kind`].
pub trait Expression {
    type Kind: ValueKind;
}

/// An expression usable as a value: it may be an operand or an aggregate argument.
pub trait Value: Expression {}
