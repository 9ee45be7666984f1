//! Dual-dialect defaults-file reader.
//!
//! Dialect detection looks at the first three bytes only: `SDF` means
//! legacy, anything else modern. Both parsers funnel every entry
//! through [`OptionRegistry::assign`], so name lookup, type coercion
//! and the explicit-value marker behave identically in either dialect.

use std::fs;
use std::path::Path;

use crate::block::DefaultsBlock;
use crate::error::ConfigError;
use crate::registry::OptionRegistry;

use super::{LEGACY_HEADER, LEGACY_TERMINATOR, UNIVERSE_RADIUS_ALIAS};

/// Read and parse a defaults file into `block`, recording explicitly
/// assigned options in the registry markers. Scaling is the caller's
/// responsibility and runs after this returns.
pub fn read_defaults_file(
    registry: &mut OptionRegistry,
    block: &mut DefaultsBlock,
    path: &Path,
) -> Result<(), ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_defaults(registry, block, &text)
}

/// Parse defaults text in whichever dialect it is written in.
pub fn parse_defaults(
    registry: &mut OptionRegistry,
    block: &mut DefaultsBlock,
    text: &str,
) -> Result<(), ConfigError> {
    if let Some(body) = text.strip_prefix(LEGACY_HEADER) {
        tracing::debug!("reading legacy defaults dialect");
        parse_legacy(registry, block, body)
    } else {
        tracing::debug!("reading modern defaults dialect");
        parse_modern(registry, block, text)
    }
}

/// Legacy body (everything after the `SDF` marker): whitespace-token
/// scanning, `#` to end of line, `END` sentinel, `UNIVERSE_RADIUS`
/// alias. Anything after a value token is discarded to end of line.
fn parse_legacy(
    registry: &mut OptionRegistry,
    block: &mut DefaultsBlock,
    body: &str,
) -> Result<(), ConfigError> {
    let mut scan = Scanner::new(body);
    loop {
        scan.skip_space();
        match scan.peek() {
            None => break,
            Some('#') => {
                scan.skip_line();
                continue;
            }
            Some(_) => {}
        }
        let Some(name) = scan.word() else { break };
        if name == LEGACY_TERMINATOR {
            break;
        }
        let name = if name == UNIVERSE_RADIUS_ALIAS {
            "FAR_UNIVERSE_RADIUS"
        } else {
            name
        };
        let Some(value) = scan.word() else {
            return Err(ConfigError::MissingValue {
                name: name.to_string(),
            });
        };
        registry.assign(block, name, value)?;
        scan.skip_line();
    }
    Ok(())
}

/// Modern dialect: one `name = value` assignment per line, blank lines
/// ignored. A `#` starts a comment anywhere in a line, so trailing
/// comments after a value are allowed.
fn parse_modern(
    registry: &mut OptionRegistry,
    block: &mut DefaultsBlock,
    text: &str,
) -> Result<(), ConfigError> {
    for (i, line) in text.lines().enumerate() {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            return Err(ConfigError::Malformed { line: i + 1 });
        };
        registry.assign(block, name.trim(), value.trim())?;
    }
    Ok(())
}

/// Whitespace-token scanner over the legacy body.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn skip_space(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn skip_line(&mut self) {
        match self.rest.find('\n') {
            Some(i) => self.rest = &self.rest[i + 1..],
            None => self.rest = "",
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Next whitespace-delimited token, skipping leading whitespace
    /// (including newlines, as the historical parser did).
    fn word(&mut self) -> Option<&'a str> {
        self.skip_space();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (OptionRegistry, DefaultsBlock) {
        let mut registry = OptionRegistry::build().unwrap();
        let mut block = DefaultsBlock::default();
        registry.apply_defaults(&mut block);
        (registry, block)
    }

    #[test]
    fn test_legacy_detection_requires_exact_prefix() {
        let (mut registry, mut block) = fresh();
        // "SDF" prefix: legacy, "H_KERNEL 21" is a valid entry.
        parse_defaults(&mut registry, &mut block, "SDF\nH_KERNEL 21\nEND\n").unwrap();
        assert_eq!(block.params.h_kern, 21);

        // No prefix: modern, the same body is a malformed assignment.
        let (mut registry, mut block) = fresh();
        match parse_defaults(&mut registry, &mut block, "H_KERNEL 21\nEND\n") {
            Err(ConfigError::Malformed { line: 1 }) => {}
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_modern_assignments() {
        let (mut registry, mut block) = fresh();
        let text = "# stereo run for sol 42\n\nBASELINE = 120.0\nH_KERNEL = 21\n";
        parse_defaults(&mut registry, &mut block, text).unwrap();
        assert!((block.params.baseline - 120.0).abs() < 1e-6);
        assert_eq!(block.params.h_kern, 21);
        assert!(registry.get("BASELINE").unwrap().explicit);
        assert!(!registry.get("V_KERNEL").unwrap().explicit);
    }

    #[test]
    fn test_modern_trailing_comments() {
        let (mut registry, mut block) = fresh();
        let text = "BASELINE = 120.0 # millimeters\nH_KERNEL = 21# no space before\n";
        parse_defaults(&mut registry, &mut block, text).unwrap();
        assert!((block.params.baseline - 120.0).abs() < 1e-6);
        assert_eq!(block.params.h_kern, 21);
    }

    #[test]
    fn test_legacy_comments_and_blank_lines() {
        let (mut registry, mut block) = fresh();
        let text = "SDF\n\n# correlation kernel\nH_KERNEL\t21\n\n  # indented comment\nV_KERNEL 21\nEND\n";
        parse_defaults(&mut registry, &mut block, text).unwrap();
        assert_eq!(block.params.h_kern, 21);
        assert_eq!(block.params.v_kern, 21);
    }

    #[test]
    fn test_legacy_trailing_junk_discarded() {
        let (mut registry, mut block) = fresh();
        parse_defaults(
            &mut registry,
            &mut block,
            "SDF\nH_KERNEL 21 extra tokens ignored\nEND\n",
        )
        .unwrap();
        assert_eq!(block.params.h_kern, 21);
    }

    #[test]
    fn test_legacy_end_stops_parsing() {
        let (mut registry, mut block) = fresh();
        // NOT_A_REAL_OPTION after END must never be seen.
        parse_defaults(
            &mut registry,
            &mut block,
            "SDF\nH_KERNEL 21\nEND\nNOT_A_REAL_OPTION 1\n",
        )
        .unwrap();
        assert_eq!(block.params.h_kern, 21);
    }

    #[test]
    fn test_universe_radius_alias() {
        let (mut registry, mut block) = fresh();
        parse_defaults(&mut registry, &mut block, "SDF\nUNIVERSE_RADIUS  500\nEND\n").unwrap();
        assert!((block.params.far_universe_radius - 500.0).abs() < 1e-6);
        assert!(registry.get("FAR_UNIVERSE_RADIUS").unwrap().explicit);
    }

    #[test]
    fn test_alias_is_legacy_only() {
        let (mut registry, mut block) = fresh();
        match parse_defaults(&mut registry, &mut block, "UNIVERSE_RADIUS = 500\n") {
            Err(ConfigError::UnknownOption(name)) => assert_eq!(name, "UNIVERSE_RADIUS"),
            other => panic!("expected UnknownOption, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_option_rejected_in_both_dialects() {
        let (mut registry, mut block) = fresh();
        assert!(matches!(
            parse_defaults(&mut registry, &mut block, "SDF\nNOT_A_REAL_OPTION 1\nEND\n"),
            Err(ConfigError::UnknownOption(_))
        ));

        let (mut registry, mut block) = fresh();
        assert!(matches!(
            parse_defaults(&mut registry, &mut block, "NOT_A_REAL_OPTION = 1\n"),
            Err(ConfigError::UnknownOption(_))
        ));
    }

    #[test]
    fn test_legacy_missing_value() {
        let (mut registry, mut block) = fresh();
        match parse_defaults(&mut registry, &mut block, "SDF\nH_KERNEL") {
            Err(ConfigError::MissingValue { name }) => assert_eq!(name, "H_KERNEL"),
            other => panic!("expected MissingValue, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let mut registry = OptionRegistry::build().unwrap();
        let mut block = DefaultsBlock::default();
        registry.apply_defaults(&mut block);
        match read_defaults_file(
            &mut registry,
            &mut block,
            Path::new("/nonexistent/stereo.default"),
        ) {
            Err(ConfigError::Read { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/stereo.default"));
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }
}
