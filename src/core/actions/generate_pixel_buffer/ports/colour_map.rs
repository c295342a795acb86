use crate::core::data::colour::Colour;

/// Turns one escape-time value into an RGB colour.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;
}
