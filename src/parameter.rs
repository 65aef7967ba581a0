//! Values bound to statement parameters.

use crate::connector::ParameterTarget;
use crate::value_kind::ValueKind;

/// Current value of a bound parameter.
///
/// Starts out NULL with the kind's zero value. Binding copies the state into a
/// backend slot and does not change the parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterValue<K: ValueKind> {
    value: K::Native,
    is_null: bool,
}

impl<K: ValueKind> ParameterValue<K> {
    /// A parameter holding `value`.
    pub fn new(value: impl Into<K::Native>) -> Self {
        Self {
            value: value.into(),
            is_null: false,
        }
    }

    /// A NULL parameter.
    pub fn null() -> Self {
        Self {
            value: K::Native::default(),
            is_null: true,
        }
    }

    pub fn assign(&mut self, value: impl Into<K::Native>) {
        self.value = value.into();
        self.is_null = false;
    }

    /// Set to NULL; the stored value goes back to zero.
    pub fn assign_null(&mut self) {
        self.value = K::Native::default();
        self.is_null = true;
    }

    /// `Some` assigns the value, `None` assigns NULL.
    pub fn assign_option(&mut self, value: Option<K::Native>) {
        match value {
            Some(value) => self.assign(value),
            None => self.assign_null(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.is_null
    }

    pub fn value(&self) -> &K::Native {
        &self.value
    }

    /// Forward the value and null flag to the backend slot at `index`.
    pub fn bind<T: ParameterTarget + ?Sized>(&self, target: &mut T, index: usize) {
        K::bind_parameter(target, index, &self.value, self.is_null);
    }
}

impl<K: ValueKind> Default for ParameterValue<K> {
    fn default() -> Self {
        Self::null()
    }
}
