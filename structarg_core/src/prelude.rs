//! Traits which, typically, may be imported without concern: `use structarg::prelude::*`.

/// Behaviour for multiple (0 to many) items T to be collected together.
// Needs to be imported in order to implement a custom `Collectable`.
pub trait Collectable<T> {
    /// Add a value to this `Collectable`.
    fn add(&mut self, item: T);

    /// Remove every value from this `Collectable`.
    fn reset(&mut self);
}

/// Behaviour for a type to coerce itself from a Cli token.
///
/// When a destination type implements `UnmarshalArg` (and is wired via [`unmarshal_value!`](crate::unmarshal_value)),
/// its own coercion is used instead of the built-in one.
// Needs to be imported in order to implement a custom coercion.
pub trait UnmarshalArg {
    /// Overwrite `self` with the value described by `text`.
    fn unmarshal_arg(&mut self, text: &str) -> Result<(), String>;
}
