//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use sigil::batch::read_seeds;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;

/// Read the seed list from `path`, or from stdin when `path` is `-`.
pub fn read_seed_list(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == "-" {
        return read_seeds(io::stdin().lock()).context("failed to read seeds from stdin");
    }
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_seeds(BufReader::new(file)).with_context(|| format!("failed to read {}", path.display()))
}

/// Write `bytes` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, bytes: &[u8], module: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
            sigil::debug!(module; "wrote {} ({} bytes)", path.display(), bytes.len());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(bytes)?;
            out.flush()?;
        }
    }
    Ok(())
}
