use std::path::Path;

use anyhow::{Context, Result, bail};
use frost_types::Rect;
use opencv::{imgcodecs, prelude::*};
use tokio::process::Command;

/// One captured window screenshot, handed from the capture task to the
/// click task.
pub struct Frame {
    pub image: Mat,
    /// The window's global frame at capture time.
    pub window: Rect,
    pub iteration: u64,
}

impl Frame {
    /// Screenshot size in physical pixels (width, height).
    pub fn dims(&self) -> (i32, i32) {
        (self.image.cols(), self.image.rows())
    }
}

/// Screenshot the given window region with the macOS `screencapture`
/// utility and load the result as a BGR `Mat`.
///
/// `-x` suppresses the capture sound. The image is written in physical
/// pixels, so on Retina displays it is larger than the logical region.
pub async fn capture_window(region: Rect, output_path: &Path) -> Result<Mat> {
    if region.is_empty() {
        bail!(
            "invalid capture region: {}x{}",
            region.width,
            region.height
        );
    }

    let spec = format!(
        "{},{},{},{}",
        region.x, region.y, region.width, region.height
    );
    let status = Command::new("screencapture")
        .args(["-x", "-R", &spec])
        .arg(output_path)
        .status()
        .await
        .context("failed to run screencapture")?;
    if !status.success() {
        bail!("screencapture exited with {status}");
    }

    let path = output_path.to_string_lossy();
    let image = imgcodecs::imread(&path, imgcodecs::IMREAD_COLOR)?;
    if image.empty() {
        bail!("screenshot at {path} is empty");
    }
    Ok(image)
}
