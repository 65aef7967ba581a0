use crate::serializer::{Context, Serialize};

/// `target = value`, as used by `UPDATE ... SET` and `INSERT` builders.
///
/// An assignment is not an expression and cannot be composed further.
#[derive(Debug, Clone)]
pub struct Assignment<T, V> {
    target: T,
    value: V,
}

impl<T, V> Assignment<T, V> {
    pub fn new(target: T, value: V) -> Self {
        Self { target, value }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<C, T, V> Serialize<C> for Assignment<T, V>
where
    C: Context,
    T: Serialize<C>,
    V: Serialize<C>,
{
    fn serialize(&self, context: &mut C) {
        self.target.serialize(context);
        context.write(" = ");
        self.value.serialize(context);
    }
}
