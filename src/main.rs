use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use appicon_gen::{png, synth, IconSpec};

const OUTPUT_NAME: &str = "AppIcon.png";

fn main() -> Result<()> {
    env_logger::init();

    let spec = IconSpec::default();
    let pixels = synth::synthesize(&spec);
    let encoded = png::encode(spec.side, spec.side, &pixels).context("Failed to encode PNG")?;

    let path = output_path().context("Failed to resolve output path")?;
    write_atomic(&path, &encoded)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✓ Wrote {}", path.display());
    Ok(())
}

/// The icon lands next to the running executable.
fn output_path() -> Result<PathBuf> {
    let exe = env::current_exe().context("Can't locate the running executable")?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(OUTPUT_NAME))
}

/// Stage the bytes in a temporary file in the destination directory, then
/// rename over the final path. A failed run never leaves a partial icon.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = tempfile::NamedTempFile::new_in(dir)
        .context("Can't create temporary file in output directory")?;
    staged.write_all(bytes)?;
    staged.persist(path)?;
    Ok(())
}
