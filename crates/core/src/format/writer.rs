//! Legacy-dialect defaults-file writer.
//!
//! Emits the registry's bindings in declaration order: `SDF` header,
//! then per option a blank line, a `# description` comment when one is
//! declared, and `NAME<TAB>VALUE`; a blank line and `END` close the
//! file. Floats are written in fixed-point notation so legacy parsers
//! never see scientific notation.

use std::fs;
use std::path::Path;

use crate::block::DefaultsBlock;
use crate::error::ConfigError;
use crate::registry::{OptionRegistry, OptionValue};

use super::{LEGACY_HEADER, LEGACY_TERMINATOR};

/// Render and write a defaults file from a block snapshot.
///
/// The snapshot must already be in on-disk units; `save` handles the
/// unscaling before calling this.
pub fn write_defaults_file(
    registry: &OptionRegistry,
    block: &mut DefaultsBlock,
    path: &Path,
) -> Result<(), ConfigError> {
    let text = render_defaults(registry, block);
    fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the legacy dialect to a string.
pub fn render_defaults(registry: &OptionRegistry, block: &mut DefaultsBlock) -> String {
    let mut out = String::new();
    out.push_str(LEGACY_HEADER);
    out.push('\n');
    for binding in registry.bindings() {
        out.push('\n');
        if !binding.description.is_empty() {
            out.push_str("# ");
            out.push_str(binding.description);
            out.push('\n');
        }
        let value = match binding.slot.read(block) {
            OptionValue::Int(v) => v.to_string(),
            OptionValue::Float(v) => format!("{v:.6}"),
            OptionValue::Double(v) => format!("{v:.6}"),
        };
        out.push_str(binding.name);
        out.push('\t');
        out.push_str(&value);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(LEGACY_TERMINATOR);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let mut registry = OptionRegistry::build().unwrap();
        let mut block = DefaultsBlock::default();
        registry.apply_defaults(&mut block);

        let text = render_defaults(&registry, &mut block);
        assert!(text.starts_with("SDF\n"));
        assert!(text.ends_with("\nEND\n"));
        assert!(text.contains("\n# distance between the cameras\nBASELINE\t0.000000\n"));
        assert!(text.contains("\nH_KERNEL\t0\n"));
    }

    #[test]
    fn test_fixed_point_floats() {
        let mut registry = OptionRegistry::build().unwrap();
        let mut block = DefaultsBlock::default();
        registry.apply_defaults(&mut block);
        block.params.far_universe_radius = 1.0e7;

        let text = render_defaults(&registry, &mut block);
        assert!(text.contains("FAR_UNIVERSE_RADIUS\t10000000.000000\n"));
        assert!(!text.contains("1e7"));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let mut registry = OptionRegistry::build().unwrap();
        let mut block = DefaultsBlock::default();
        registry.apply_defaults(&mut block);

        let text = render_defaults(&registry, &mut block);
        let do_alignment = text.find("DO_ALIGNMENT\t").unwrap();
        let baseline = text.find("BASELINE\t").unwrap();
        let verbose = text.find("VERBOSE\t").unwrap();
        assert!(do_alignment < baseline && baseline < verbose);
    }

    #[test]
    fn test_written_file_reparses_as_legacy() {
        let mut registry = OptionRegistry::build().unwrap();
        let mut block = DefaultsBlock::default();
        registry.apply_defaults(&mut block);
        block.params.h_kern = 25;

        let text = render_defaults(&registry, &mut block);

        let mut registry2 = OptionRegistry::build().unwrap();
        let mut reread = DefaultsBlock::default();
        registry2.apply_defaults(&mut reread);
        crate::format::parse_defaults(&mut registry2, &mut reread, &text).unwrap();
        assert_eq!(reread.params.h_kern, 25);
    }
}
