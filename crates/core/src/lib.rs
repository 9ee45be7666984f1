//! stereo_defaults_core - typed option binding and persistence for
//! stereo pipeline defaults files.
//!
//! The engine binds named configuration options to strongly-typed
//! fields of a [`DefaultsBlock`], applies unit-conversion scaling to a
//! subset of them, and reads/writes the block in two text dialects
//! (legacy `SDF` and modern `name = value`) while preserving option
//! declaration order and descriptions.
//!
//! # Modules
//!
//! - [`block`]: the parameter block (`StereoParams` + `TaskFlags`)
//! - [`registry`]: option kinds, typed field slots, and the
//!   per-operation [`OptionRegistry`]
//! - [`schema`]: the declarative option table
//! - [`scale`]: unit-conversion application and inversion
//! - [`format`]: the two dialects (dual-format reader, legacy writer)
//! - [`error`]: the fatal-error taxonomy
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use stereo_defaults_core::{DefaultsBlock, initialize, load, save};
//!
//! # fn main() -> Result<(), stereo_defaults_core::ConfigError> {
//! let mut block = DefaultsBlock::default();
//! initialize(&mut block)?;                          // declared defaults
//! load(&mut block, Path::new("stereo.default"))?;   // either dialect
//! save(&block, Path::new("stereo.default.out"))?;   // legacy dialect
//! # Ok(())
//! # }
//! ```
//!
//! Every error is fatal to the operation that raised it; the engine
//! never terminates the process itself. The host decides how to
//! surface failures.

pub mod block;
pub mod error;
pub mod format;
pub mod registry;
pub mod scale;
pub mod schema;

pub use block::{AlignMatrix, DefaultsBlock, StereoParams, TaskFlags};
pub use error::ConfigError;
pub use registry::{
    FieldSlot, OptionBinding, OptionDescriptor, OptionKind, OptionRegistry, OptionValue,
};

use std::path::Path;

/// Populate `block` with every option's declared default, touching no
/// file. All explicit-value markers of the scoped registry start and
/// end false, so no scaling occurs.
pub fn initialize(block: &mut DefaultsBlock) -> Result<(), ConfigError> {
    let mut registry = OptionRegistry::build()?;
    registry.apply_defaults(block);
    Ok(())
}

/// Load a defaults file (either dialect) into `block`: defaults first,
/// then the file's assignments, then one pass of unit scaling over the
/// explicitly assigned options.
pub fn load(block: &mut DefaultsBlock, path: &Path) -> Result<(), ConfigError> {
    let mut registry = OptionRegistry::build()?;
    registry.apply_defaults(block);
    format::read_defaults_file(&mut registry, block, path)?;
    scale::apply_scale(&registry, block);
    tracing::info!(path = %path.display(), options = registry.len(), "defaults file loaded");
    Ok(())
}

/// Write `block` to `path` in the legacy dialect.
///
/// Serialization works on a private snapshot: options that differ from
/// their declared default are marked explicit, the inverse unit
/// scaling is applied to the snapshot, and the result is rendered.
/// The live block keeps its in-memory (scaled) values, and re-reading
/// the written file reproduces them.
pub fn save(block: &DefaultsBlock, path: &Path) -> Result<(), ConfigError> {
    let mut registry = OptionRegistry::build()?;
    let mut snapshot = block.clone();
    registry.mark_changed(&mut snapshot);
    scale::invert_scale(&registry, &mut snapshot);
    format::write_defaults_file(&registry, &mut snapshot, path)?;
    tracing::info!(path = %path.display(), "defaults file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_applies_declared_defaults() {
        let mut block = DefaultsBlock::default();
        initialize(&mut block).unwrap();

        assert_eq!(block.tasks.do_alignment, 1);
        assert_eq!(block.tasks.apply_mask, 1);
        assert_eq!(block.params.nff_v_step, 10);
        assert_eq!(block.params.smooth_disp_m, 19);
        assert_eq!(block.params.max_triangles, 500_000);
        assert!((block.params.ground_plane - -1.0).abs() < 1e-6);
        assert!((block.params.mesh_tolerance - 0.001).abs() < 1e-12);
        // Scaled options default to their unscaled identity.
        assert_eq!(block.params.baseline, 0.0);
        assert_eq!(block.params.pan_offset, 0.0);
    }

    #[test]
    fn test_save_does_not_touch_live_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.default");

        let mut block = DefaultsBlock::default();
        initialize(&mut block).unwrap();
        block.params.baseline = 0.12; // meters, in-memory units

        let before = block.clone();
        save(&block, &path).unwrap();
        assert_eq!(block, before);

        // On disk the value is in millimeters.
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("BASELINE\t"));
        let line = text
            .lines()
            .find(|l| l.starts_with("BASELINE\t"))
            .unwrap();
        let written: f32 = line.split('\t').nth(1).unwrap().parse().unwrap();
        assert!((written - 120.0).abs() < 1e-3);
    }
}
