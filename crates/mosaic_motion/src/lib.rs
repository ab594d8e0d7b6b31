//! Interpolation, easing curves and keyframe animations shared by the
//! mosaic style builders.

use std::ops::{Add, Mul, Sub};

use mosaic_theme::Rgba;

mod easing;
pub use easing::*;

mod keyframes;
pub use keyframes::*;

/// A type which can be blended toward another value of the same type.
pub trait TransitionGoal {
    /// Defines how a value is calculated from the start and end goal.
    fn apply_delta(&self, to: &Self, delta: f32) -> Self;
}

macro_rules! float_transition_goals {
    ( $( $ty:ty ),+ ) => {
        $(
            impl TransitionGoal for $ty {
                fn apply_delta(&self, to: &Self, delta: f32) -> Self {
                    lerp(*self, *to, delta as $ty)
                }
            }
        )+
    };
}

float_transition_goals!(f32, f64);

macro_rules! int_transition_goals {
    ( $( $ty:ident as $ty_into:ident ),+ ) => {
        $(
            impl TransitionGoal for $ty {
                fn apply_delta(&self, to: &Self, delta: f32) -> Self {
                    lerp(*self as $ty_into, *to as $ty_into, delta as $ty_into).round() as $ty
                }
            }
        )+
    };
}

int_transition_goals!(u8 as f32, u16 as f32, u32 as f64, i32 as f64, usize as f64);

macro_rules! struct_transition_goals {
    ( $( $ty:ident { $( $n:ident ),+ } ),+ $(,)? ) => {
        $(
            impl TransitionGoal for $ty {
                fn apply_delta(&self, to: &Self, delta: f32) -> Self {
                    $ty {
                        $(
                            $n: self.$n.apply_delta(&to.$n, delta)
                        ),+
                    }
                }
            }
        )+
    };
}

struct_transition_goals!(Rgba { r, g, b, a });

impl<A: TransitionGoal, B: TransitionGoal> TransitionGoal for (A, B) {
    fn apply_delta(&self, to: &Self, delta: f32) -> Self {
        (self.0.apply_delta(&to.0, delta), self.1.apply_delta(&to.1, delta))
    }
}

pub fn lerp<T>(a: T, b: T, t: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    a + (b - a) * t
}
