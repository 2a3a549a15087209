//! OS viewer hand-off.

use std::path::Path;
use std::process::Command;

use tracing::info;

/// Open a document with the platform's default viewer. The child is not
/// waited on; the viewer outlives this process.
pub fn open_document(path: &Path) -> eyre::Result<()> {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    command
        .spawn()
        .map_err(|e| eyre::eyre!("failed to open {}: {e}", path.display()))?;
    info!(path = %path.display(), "document handed to viewer");
    Ok(())
}
