//! The `index.txt` manifest: one logical filename per line.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::MANIFEST_NAME;

/// Render manifest content: every name followed by a single `\n`.
pub fn render<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Overwrite the manifest at `path` with `names`, in order.
pub async fn write_manifest<'a>(
    path: &Path,
    names: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    tokio::fs::write(path, render(names)).await
}

/// Read `index.txt` in `dir` and return the listed files as paths inside `dir`.
/// Blank lines are skipped.
pub async fn read_manifest(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let content = tokio::fs::read_to_string(dir.join(MANIFEST_NAME)).await?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| dir.join(line))
        .collect())
}
