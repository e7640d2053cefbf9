//! Shelling out to the system tesseract binary.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tokio::process::Command;

/// Run `tesseract <image> stdout -l <language>` and return the text.
pub async fn recognize(image_path: &str, language: &str) -> Result<String> {
    if !Path::new(image_path).exists() {
        bail!("Image not found: {}", image_path);
    }

    let binary = which::which("tesseract").context(
        "tesseract not found in PATH. Install it with your package manager \
         (e.g. `apt install tesseract-ocr`)",
    )?;

    let output = Command::new(&binary)
        .arg(image_path)
        .arg("stdout")
        .arg("-l")
        .arg(language)
        .output()
        .await
        .with_context(|| format!("Failed to run {}", binary.display()))?;

    if !output.status.success() {
        bail!(
            "tesseract exited with status {}: {}",
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
