use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use frost_config::{automation::AutomationConfig, matching::MatchingConfig};
use frost_desktop::{display, mouse};
use frost_types::Rect;
use frost_vision::{Frame, TemplateSet, threshold_for_scale, translate_to_screen};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Consumer half of the bot: matches each captured frame against the
/// known templates and clicks the best accepted hit.
pub async fn click_loop(
    state: Arc<AppState>,
    frame_rx: AsyncReceiver<Frame>,
    templates: TemplateSet,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (matching, automation) = {
        let config = state.config.read().await;
        (config.matching.clone(), config.automation.clone())
    };

    let display_bounds = display::union_display_bounds()?;
    tracing::info!(?display_bounds, "display bounds resolved");

    let mut templates = templates;
    loop {
        let frame = tokio::select! {
            _ = cancel.cancelled() => break,
            frame = frame_rx.recv() => match frame {
                Ok(frame) => frame,
                // Capture side is gone; nothing more to do.
                Err(_) => break,
            },
        };
        let iteration = frame.iteration;

        // Matching and the click are blocking work (OpenCV, cursor
        // settle sleep); keep them off the async workers. The template
        // set moves through the closure and back out: its Mats are
        // Send but not Sync.
        let state_task = state.clone();
        let matching_task = matching.clone();
        let automation_task = automation.clone();
        let (returned, result) = tokio::task::spawn_blocking(move || {
            let result = handle_frame(
                &state_task,
                &templates,
                &matching_task,
                &automation_task,
                display_bounds,
                &frame,
            );
            (templates, result)
        })
        .await?;
        templates = returned;

        if let Err(e) = result {
            tracing::warn!(iteration, "frame handling failed: {e:#}");
            state.status.record_error();
        }
    }

    Ok(())
}

/// At most one click per frame: the first template (in priority order)
/// with an accepted hit wins.
fn handle_frame(
    state: &AppState,
    templates: &TemplateSet,
    matching: &MatchingConfig,
    automation: &AutomationConfig,
    display_bounds: Rect,
    frame: &Frame,
) -> anyhow::Result<()> {
    let (shot_w, shot_h) = frame.dims();

    for template in templates.in_priority_order() {
        let Some(hit) = template.find_best(&frame.image, &matching.scales)? else {
            continue;
        };
        let threshold = threshold_for_scale(
            matching.score_threshold,
            matching.scale_relax,
            matching.min_threshold,
            hit.scale,
        );
        if hit.score < threshold {
            tracing::debug!(
                template = %template.name,
                score = hit.score,
                threshold,
                scale = hit.scale,
                "best hit below threshold"
            );
            continue;
        }

        if automation.debug {
            let path = PathBuf::from(format!("{}-debug.png", template.name));
            frost_vision::save_annotated(&frame.image, &hit, &path)?;
            tracing::info!(path = %path.display(), "debug screenshot saved");
        }

        let point = translate_to_screen(hit.center(), shot_w, shot_h, frame.window);
        let point = display_bounds.clamp_point(point);
        mouse::click_at(point, Duration::from_millis(automation.click_settle_ms))?;
        state.status.record_click();
        tracing::info!(
            template = %template.name,
            x = point.x,
            y = point.y,
            score = hit.score,
            scale = hit.scale,
            "click performed"
        );
        return Ok(());
    }

    tracing::debug!(iteration = frame.iteration, "no template matched");
    Ok(())
}
