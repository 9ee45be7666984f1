//! stereodef — inspect, convert, and generate stereo defaults files.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use stereo_defaults_core::{DefaultsBlock, OptionRegistry, format, initialize, load, save, scale};

#[derive(Parser)]
#[command(name = "stereodef")]
#[command(about = "Read, rewrite, and generate stereo pipeline defaults files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a defaults file populated with the declared defaults.
    Init {
        /// Output path.
        #[arg(long, default_value = "stereo.default")]
        out: PathBuf,
    },

    /// Parse a defaults file and print the resulting option values.
    Show {
        /// Input defaults file (either dialect).
        file: PathBuf,

        /// Only print options explicitly set by the file.
        #[arg(long)]
        changed: bool,
    },

    /// Parse a defaults file and write it back in the legacy dialect.
    Rewrite {
        /// Input defaults file (either dialect).
        file: PathBuf,

        /// Output path.
        #[arg(long)]
        out: PathBuf,
    },

    /// Parse a defaults file, reporting the first error if any.
    Check {
        /// Input defaults file (either dialect).
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { out } => run_init(&out),
        Commands::Show { file, changed } => run_show(&file, changed),
        Commands::Rewrite { file, out } => run_rewrite(&file, &out),
        Commands::Check { file } => run_check(&file),
    }
}

fn run_init(out: &PathBuf) -> anyhow::Result<()> {
    let mut block = DefaultsBlock::default();
    initialize(&mut block)?;
    save(&block, out).with_context(|| format!("writing {}", out.display()))?;
    println!("wrote {}", out.display());
    Ok(())
}

fn run_show(file: &PathBuf, changed_only: bool) -> anyhow::Result<()> {
    // Run the load pipeline with a local registry so the explicit
    // markers survive for display.
    let mut registry = OptionRegistry::build()?;
    let mut block = DefaultsBlock::default();
    registry.apply_defaults(&mut block);
    format::read_defaults_file(&mut registry, &mut block, file)
        .with_context(|| format!("reading {}", file.display()))?;
    scale::apply_scale(&registry, &mut block);

    let bindings: Vec<_> = registry.bindings().to_vec();
    for binding in bindings {
        if changed_only && !binding.explicit {
            continue;
        }
        let marker = if binding.explicit { "*" } else { " " };
        let value = binding.slot.read(&mut block);
        println!("{marker} {:<32} {value}", binding.name);
    }
    Ok(())
}

fn run_rewrite(file: &PathBuf, out: &PathBuf) -> anyhow::Result<()> {
    let mut block = DefaultsBlock::default();
    load(&mut block, file).with_context(|| format!("reading {}", file.display()))?;
    save(&block, out).with_context(|| format!("writing {}", out.display()))?;
    println!("wrote {}", out.display());
    Ok(())
}

fn run_check(file: &PathBuf) -> anyhow::Result<()> {
    let mut block = DefaultsBlock::default();
    load(&mut block, file).with_context(|| format!("checking {}", file.display()))?;
    println!("{}: ok", file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("stereo.default");
        run_init(&out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("SDF\n"));
        assert!(text.ends_with("END\n"));

        run_check(&out).unwrap();
    }

    #[test]
    fn test_rewrite_normalizes_modern_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("stereo.cfg");
        std::fs::write(&input, "BASELINE = 120.0\nH_KERNEL = 21\n").unwrap();
        let out = dir.path().join("stereo.default");

        run_rewrite(&input, &out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("SDF\n"));
        assert!(text.contains("H_KERNEL\t21\n"));
    }

    #[test]
    fn test_check_rejects_unknown_option() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("stereo.default");
        std::fs::write(&input, "SDF\nNOT_A_REAL_OPTION 1\nEND\n").unwrap();

        assert!(run_check(&input).is_err());
    }

    #[test]
    fn test_show_accepts_both_dialects() {
        let dir = tempfile::tempdir().unwrap();
        let legacy = dir.path().join("stereo.default");
        std::fs::write(&legacy, "SDF\nBASELINE\t120.0\nEND\n").unwrap();
        run_show(&legacy, true).unwrap();

        let modern = dir.path().join("stereo.cfg");
        std::fs::write(&modern, "BASELINE = 120.0\n").unwrap();
        run_show(&modern, false).unwrap();
    }
}
