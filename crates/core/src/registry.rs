//! Option registry: the binding between option names and typed fields
//! of a [`DefaultsBlock`].
//!
//! The registry is rebuilt from the schema table for every load or
//! save call and discarded afterwards; bindings are never shared
//! between calls. Field access goes through kind-tagged fn-pointer
//! slots, so there is no runtime type probing and no address
//! arithmetic: the schema row fixes the kind at authoring time and the
//! builder verifies it.

use std::collections::HashMap;
use std::fmt;

use crate::block::DefaultsBlock;
use crate::error::ConfigError;
use crate::schema;

/// Storage kind of one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// 32-bit signed integer (also used for task flags).
    Int,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
}

/// A kind-tagged option value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionValue {
    Int(i32),
    Float(f32),
    Double(f64),
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Int(_) => OptionKind::Int,
            OptionValue::Float(_) => OptionKind::Float,
            OptionValue::Double(_) => OptionKind::Double,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Int(v) => write!(f, "{v}"),
            OptionValue::Float(v) => write!(f, "{v}"),
            OptionValue::Double(v) => write!(f, "{v}"),
        }
    }
}

/// Typed accessor for one field of the parameter block.
///
/// Reads go through the same mutable accessor used for writes, so all
/// registry operations take the block as `&mut`.
#[derive(Clone, Copy)]
pub enum FieldSlot {
    Int(for<'a> fn(&'a mut DefaultsBlock) -> &'a mut i32),
    Float(for<'a> fn(&'a mut DefaultsBlock) -> &'a mut f32),
    Double(for<'a> fn(&'a mut DefaultsBlock) -> &'a mut f64),
}

impl FieldSlot {
    pub fn kind(&self) -> OptionKind {
        match self {
            FieldSlot::Int(_) => OptionKind::Int,
            FieldSlot::Float(_) => OptionKind::Float,
            FieldSlot::Double(_) => OptionKind::Double,
        }
    }

    pub fn read(&self, block: &mut DefaultsBlock) -> OptionValue {
        match self {
            FieldSlot::Int(f) => OptionValue::Int(*f(block)),
            FieldSlot::Float(f) => OptionValue::Float(*f(block)),
            FieldSlot::Double(f) => OptionValue::Double(*f(block)),
        }
    }

    /// Store `value` into the slot. Kind agreement is established at
    /// registry build time.
    pub fn write(&self, block: &mut DefaultsBlock, value: OptionValue) {
        match (self, value) {
            (FieldSlot::Int(f), OptionValue::Int(v)) => *f(block) = v,
            (FieldSlot::Float(f), OptionValue::Float(v)) => *f(block) = v,
            (FieldSlot::Double(f), OptionValue::Double(v)) => *f(block) = v,
            // Registry construction rejects kind disagreement, so a
            // mismatched write cannot be reached through a built
            // registry.
            (slot, value) => unreachable!("kind mismatch: {slot:?} <- {:?}", value.kind()),
        }
    }
}

impl fmt::Debug for FieldSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldSlot::Int(_) => "FieldSlot::Int",
            FieldSlot::Float(_) => "FieldSlot::Float",
            FieldSlot::Double(_) => "FieldSlot::Double",
        })
    }
}

/// One row of the schema table.
#[derive(Debug, Clone, Copy)]
pub struct OptionDescriptor {
    /// Option name as it appears in defaults files.
    pub name: &'static str,
    pub slot: FieldSlot,
    pub default: OptionValue,
    /// Emitted as a `#` comment by the writer; may be empty.
    pub description: &'static str,
    /// Unit-conversion factor applied on load and inverted on save.
    pub scale: Option<f64>,
}

/// One named option bound to its storage slot, plus the explicit-value
/// marker recording whether the current value came from an input file.
#[derive(Debug, Clone, Copy)]
pub struct OptionBinding {
    pub name: &'static str,
    pub slot: FieldSlot,
    pub default: OptionValue,
    pub description: &'static str,
    pub scale: Option<f64>,
    pub explicit: bool,
}

/// Declaration-ordered option bindings with O(1) name lookup.
#[derive(Debug)]
pub struct OptionRegistry {
    bindings: Vec<OptionBinding>,
    index: HashMap<&'static str, usize>,
}

impl OptionRegistry {
    /// Build the registry from the pipeline schema table.
    pub fn build() -> Result<Self, ConfigError> {
        Self::from_table(schema::option_table())
    }

    /// Build a registry from an explicit descriptor table, rejecting
    /// duplicate names and slot/default kind mismatches.
    pub fn from_table(table: Vec<OptionDescriptor>) -> Result<Self, ConfigError> {
        let mut bindings = Vec::with_capacity(table.len());
        let mut index = HashMap::with_capacity(table.len());
        for d in table {
            if d.slot.kind() != d.default.kind() {
                return Err(ConfigError::KindMismatch(d.name));
            }
            if index.insert(d.name, bindings.len()).is_some() {
                return Err(ConfigError::DuplicateOption(d.name));
            }
            bindings.push(OptionBinding {
                name: d.name,
                slot: d.slot,
                default: d.default,
                description: d.description,
                scale: d.scale,
                explicit: false,
            });
        }
        Ok(Self { bindings, index })
    }

    /// Write every declared default into the block and clear all
    /// explicit markers.
    pub fn apply_defaults(&mut self, block: &mut DefaultsBlock) {
        for b in &mut self.bindings {
            b.slot.write(block, b.default);
            b.explicit = false;
        }
    }

    /// Apply one `name = value` assignment: the canonical path shared
    /// by both dialect parsers. Sets the binding's explicit marker.
    pub fn assign(
        &mut self,
        block: &mut DefaultsBlock,
        name: &str,
        raw: &str,
    ) -> Result<(), ConfigError> {
        let Some(&i) = self.index.get(name) else {
            return Err(ConfigError::UnknownOption(name.to_string()));
        };
        let b = &mut self.bindings[i];
        let value = match b.slot.kind() {
            OptionKind::Int => raw.parse().ok().map(OptionValue::Int),
            OptionKind::Float => raw.parse().ok().map(OptionValue::Float),
            OptionKind::Double => raw.parse().ok().map(OptionValue::Double),
        }
        .ok_or_else(|| ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw.to_string(),
        })?;
        b.slot.write(block, value);
        b.explicit = true;
        Ok(())
    }

    /// Set markers by comparing the block against declared defaults.
    ///
    /// Used on the save path, where no parser signal exists: a value
    /// still equal to its default is treated as never supplied.
    pub fn mark_changed(&mut self, block: &mut DefaultsBlock) {
        for b in &mut self.bindings {
            b.explicit = b.slot.read(block) != b.default;
        }
    }

    pub fn get(&self, name: &str) -> Option<&OptionBinding> {
        self.index.get(name).map(|&i| &self.bindings[i])
    }

    /// Bindings in schema declaration order.
    pub fn bindings(&self) -> &[OptionBinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
