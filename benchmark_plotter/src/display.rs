//!
//! Interactive chart display.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// Opens the file in the platform viewer and waits for the opener to return.
///
pub fn show(path: &Path) -> anyhow::Result<()> {
    let (program, arguments) = opener()?;
    let status = std::process::Command::new(program.as_path())
        .args(arguments)
        .arg(path)
        .status()
        .map_err(|error| anyhow::anyhow!("Viewer {program:?} starting: {error}"))?;
    if !status.success() {
        anyhow::bail!("Viewer {program:?} failed to open {path:?}: {status}");
    }
    Ok(())
}

///
/// Locates the platform file opener and its leading arguments.
///
fn opener() -> anyhow::Result<(PathBuf, &'static [&'static str])> {
    let candidates: &[(&str, &'static [&'static str])] = if cfg!(target_os = "macos") {
        &[("open", &[])]
    } else if cfg!(target_os = "windows") {
        &[("cmd", &["/C", "start", ""])]
    } else {
        &[("xdg-open", &[]), ("gio", &["open"])]
    };

    candidates
        .iter()
        .find_map(|(name, arguments)| {
            which::which(name)
                .ok()
                .map(|program| (program, *arguments))
        })
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No image viewer found. Tried: {}",
                candidates
                    .iter()
                    .map(|(name, _)| *name)
                    .collect::<Vec<&str>>()
                    .join(", ")
            )
        })
}
