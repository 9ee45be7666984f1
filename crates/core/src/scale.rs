//! Unit-conversion scaling over a registry.
//!
//! `apply_scale` runs once at the end of a load, `invert_scale` once
//! on the private snapshot a save serializes; scoping both to a single
//! call is what keeps the conversion from ever being applied twice.
//! Bindings without a scale factor, and bindings still holding their
//! declared default (explicit marker false), are left untouched.

use crate::block::DefaultsBlock;
use crate::registry::{FieldSlot, OptionRegistry};

/// Multiply every explicitly-set, scale-carrying binding by its factor
/// (on-disk units to in-memory units).
pub fn apply_scale(registry: &OptionRegistry, block: &mut DefaultsBlock) {
    rescale(registry, block, false);
}

/// Divide every explicitly-set, scale-carrying binding by its factor
/// (in-memory units back to on-disk units).
pub fn invert_scale(registry: &OptionRegistry, block: &mut DefaultsBlock) {
    rescale(registry, block, true);
}

fn rescale(registry: &OptionRegistry, block: &mut DefaultsBlock, invert: bool) {
    for binding in registry.bindings() {
        let Some(factor) = binding.scale else {
            continue;
        };
        if !binding.explicit {
            continue;
        }
        match binding.slot {
            // Integers scale through f64 and truncate, preserving the
            // historical precision of the format.
            FieldSlot::Int(f) => {
                let v = *f(block) as f64;
                *f(block) = (if invert { v / factor } else { v * factor }) as i32;
            }
            FieldSlot::Float(f) => {
                let v = *f(block) as f64;
                *f(block) = (if invert { v / factor } else { v * factor }) as f32;
            }
            FieldSlot::Double(f) => {
                let v = *f(block);
                *f(block) = if invert { v / factor } else { v * factor };
            }
        }
    }
}
