use std::path::Path;

use anyhow::{Result, bail};
use frost_config::matching::MatchingConfig;
use frost_types::Point;
use opencv::{
    core::{self, Mat},
    imgcodecs, imgproc,
    prelude::*,
};

/// Best template-match location across all attempted scales.
#[derive(Debug, Clone, Copy)]
pub struct MatchHit {
    /// Top-left of the match, in screenshot pixels.
    pub top_left: Point,
    /// Scaled template size, in screenshot pixels.
    pub width: i32,
    pub height: i32,
    /// Normalized correlation score, 0.0-1.0.
    pub score: f64,
    /// Template scale the hit was found at.
    pub scale: f64,
}

impl MatchHit {
    pub fn center(&self) -> Point {
        Point {
            x: self.top_left.x + self.width / 2,
            y: self.top_left.y + self.height / 2,
        }
    }
}

/// A UI element template loaded from disk.
pub struct Template {
    pub name: String,
    mat: Mat,
}

impl Template {
    pub fn load(name: &str, path: &Path) -> Result<Self> {
        let raw = path.to_string_lossy();
        let mat = imgcodecs::imread(&raw, imgcodecs::IMREAD_COLOR)?;
        if mat.empty() {
            bail!("failed to read template image: {raw}");
        }
        Ok(Self {
            name: name.to_string(),
            mat,
        })
    }

    /// Multi-scale match against a BGR screenshot, keeping the highest
    /// score across scales.
    ///
    /// Scales where the resized template degenerates or no longer fits
    /// inside the screenshot are skipped; `None` means every scale was
    /// skipped. Whether the returned hit is good enough is the
    /// caller's decision (see [`threshold_for_scale`]).
    pub fn find_best(&self, screen: &Mat, scales: &[f64]) -> Result<Option<MatchHit>> {
        let mut best: Option<MatchHit> = None;

        for scale in scales.iter().copied().filter(|s| *s > 0.0) {
            let template = if (scale - 1.0).abs() < f64::EPSILON {
                self.mat.try_clone()?
            } else {
                let new_size = core::Size {
                    width: (self.mat.cols() as f64 * scale).round() as i32,
                    height: (self.mat.rows() as f64 * scale).round() as i32,
                };
                if new_size.width <= 1 || new_size.height <= 1 {
                    continue;
                }
                let mut scaled = Mat::default();
                imgproc::resize(
                    &self.mat,
                    &mut scaled,
                    new_size,
                    0.0,
                    0.0,
                    imgproc::INTER_LINEAR,
                )?;
                scaled
            };

            let result_cols = screen.cols() - template.cols() + 1;
            let result_rows = screen.rows() - template.rows() + 1;
            if result_cols <= 0 || result_rows <= 0 {
                // Template larger than the screenshot at this scale.
                tracing::trace!(template = %self.name, scale, "scale skipped");
                continue;
            }

            let mut result =
                Mat::zeros(result_rows, result_cols, core::CV_32FC1)?.to_mat()?;
            imgproc::match_template(
                screen,
                &template,
                &mut result,
                imgproc::TM_CCOEFF_NORMED,
                &core::no_array(),
            )?;

            let mut min_val = 0.0;
            let mut max_val = 0.0;
            let mut min_loc = core::Point::new(0, 0);
            let mut max_loc = core::Point::new(0, 0);
            core::min_max_loc(
                &result,
                Some(&mut min_val),
                Some(&mut max_val),
                Some(&mut min_loc),
                Some(&mut max_loc),
                &core::no_array(),
            )?;

            if best.as_ref().map(|b| max_val > b.score).unwrap_or(true) {
                best = Some(MatchHit {
                    top_left: Point::new(max_loc.x, max_loc.y),
                    width: template.cols(),
                    height: template.rows(),
                    score: max_val,
                    scale,
                });
            }
        }

        Ok(best)
    }
}

/// The UI elements the bot knows how to react to.
pub struct TemplateSet {
    pub dismiss: Template,
    pub handshake: Template,
}

impl TemplateSet {
    pub fn load(config: &MatchingConfig) -> Result<Self> {
        let dir = Path::new(&config.templates_dir);
        Ok(Self {
            dismiss: Template::load("dismiss", &dir.join(&config.dismiss_template))?,
            handshake: Template::load("handshake", &dir.join(&config.handshake_template))?,
        })
    }

    /// Popups cover the play area, so the dismiss "X" is checked before
    /// the handshake icon.
    pub fn in_priority_order(&self) -> [&Template; 2] {
        [&self.dismiss, &self.handshake]
    }
}

/// Sliding acceptance threshold: a hit found at an off-unity scale is
/// held to a slightly lower bar, since resampling depresses correlation
/// scores, but never below `floor`.
pub fn threshold_for_scale(base: f64, relax: f64, floor: f64, scale: f64) -> f64 {
    (base - relax * (scale - 1.0).abs()).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_mat(rows: i32, cols: i32) -> Mat {
        Mat::new_rows_cols_with_default(rows, cols, core::CV_8UC1, core::Scalar::all(0.0))
            .unwrap()
    }

    fn test_template(name: &str, mat: Mat) -> Template {
        Template {
            name: name.to_string(),
            mat,
        }
    }

    #[test]
    fn oversized_template_matches_nothing() {
        // 8x8 template against a 4x4 screen: too big at every scale.
        let screen = gray_mat(4, 4);
        let template = test_template("big", gray_mat(8, 8));
        assert!(
            template
                .find_best(&screen, &[1.0, 2.0])
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn non_positive_scales_match_nothing() {
        let screen = gray_mat(16, 16);
        let template = test_template("flat", gray_mat(4, 4));
        assert!(
            template
                .find_best(&screen, &[0.0, -1.0])
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn degenerate_scaled_template_is_skipped() {
        // 4x4 at scale 0.2 resizes to 1x1, too small to match.
        let screen = gray_mat(16, 16);
        let template = test_template("tiny", gray_mat(4, 4));
        assert!(template.find_best(&screen, &[0.2]).unwrap().is_none());
    }

    #[test]
    fn finds_a_patterned_patch() {
        // Gradient background so no window has zero variance, with a
        // distinctive patch pasted at column 3, row 2.
        let patch = [[10u8, 200, 30], [40, 50, 250], [90, 120, 60]];
        let mut rows: Vec<Vec<u8>> = (0..8)
            .map(|y| (0..8).map(|x| (x + 8 * y) as u8).collect())
            .collect();
        for (dy, line) in patch.iter().enumerate() {
            for (dx, value) in line.iter().enumerate() {
                rows[2 + dy][3 + dx] = *value;
            }
        }
        let screen = Mat::from_slice_2d(&rows).unwrap();
        let template = test_template("patch", Mat::from_slice_2d(&patch).unwrap());

        let hit = template.find_best(&screen, &[1.0]).unwrap().unwrap();
        assert_eq!(hit.top_left, Point::new(3, 2));
        assert_eq!((hit.width, hit.height), (3, 3));
        assert_eq!(hit.scale, 1.0);
        assert!(hit.score > 0.99, "score was {}", hit.score);
    }

    #[test]
    fn hit_center() {
        let hit = MatchHit {
            top_left: Point::new(40, 60),
            width: 30,
            height: 20,
            score: 0.9,
            scale: 1.0,
        };
        assert_eq!(hit.center(), Point::new(55, 70));
    }

    #[test]
    fn threshold_unchanged_at_unity_scale() {
        assert_eq!(threshold_for_scale(0.75, 0.2, 0.6, 1.0), 0.75);
    }

    #[test]
    fn threshold_slides_with_scale_distance() {
        let t = threshold_for_scale(0.75, 0.2, 0.6, 0.9);
        assert!((t - 0.73).abs() < 1e-9);
        // Symmetric above and below unity.
        assert_eq!(
            threshold_for_scale(0.75, 0.2, 0.6, 0.8),
            threshold_for_scale(0.75, 0.2, 0.6, 1.2)
        );
    }

    #[test]
    fn threshold_never_below_floor() {
        assert_eq!(threshold_for_scale(0.75, 0.2, 0.6, 3.0), 0.6);
    }
}
