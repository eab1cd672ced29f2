//! Percentile dice and random sources.
//!
//! Every roll goes through a [`RollSource`], so sessions can run on real
//! entropy, on a seeded generator, or on a scripted sequence of values.

pub mod source;

pub use source::{RandomRolls, ScriptedRolls};

/// Number of faces on a percentile die.
pub const D100_SIDES: u32 = 100;

/// A source of uniformly distributed integers.
pub trait RollSource {
    /// Draw an integer in `low..=high`, each value equally likely.
    fn draw(&mut self, low: u32, high: u32) -> u32;
}

impl<S: RollSource + ?Sized> RollSource for &mut S {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        (**self).draw(low, high)
    }
}

impl<S: RollSource + ?Sized> RollSource for Box<S> {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        (**self).draw(low, high)
    }
}

/// Roll one percentile die (1-100).
pub fn roll_d100(source: &mut impl RollSource) -> u32 {
    source.draw(1, D100_SIDES)
}
