use std::path::Path;

use anyhow::Result;
use opencv::{
    core::{self, Mat},
    imgcodecs, imgproc,
    prelude::*,
};

use crate::matcher::MatchHit;

/// Write an annotated copy of the screenshot: the matched region boxed
/// in green, the click center dotted in red, and the score above it.
pub fn save_annotated(screen: &Mat, hit: &MatchHit, out_path: &Path) -> Result<()> {
    let mut annotated = screen.try_clone()?;

    imgproc::rectangle(
        &mut annotated,
        core::Rect::new(hit.top_left.x, hit.top_left.y, hit.width, hit.height),
        core::Scalar::new(0.0, 255.0, 0.0, 0.0),
        2,
        imgproc::LINE_8,
        0,
    )?;

    let center = hit.center();
    imgproc::circle(
        &mut annotated,
        core::Point::new(center.x, center.y),
        5,
        core::Scalar::new(0.0, 0.0, 255.0, 0.0),
        -1,
        imgproc::LINE_8,
        0,
    )?;

    let text = format!("score={:.3}", hit.score);
    imgproc::put_text(
        &mut annotated,
        &text,
        core::Point::new(hit.top_left.x.max(0), (hit.top_left.y - 6).max(0)),
        imgproc::FONT_HERSHEY_SIMPLEX,
        0.5,
        core::Scalar::new(255.0, 0.0, 0.0, 0.0),
        1,
        imgproc::LINE_AA,
        false,
    )?;

    let path = out_path.to_string_lossy();
    if !imgcodecs::imwrite(&path, &annotated, &core::Vector::new())? {
        anyhow::bail!("failed to write debug screenshot: {path}");
    }
    Ok(())
}
