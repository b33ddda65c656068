use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use frost_config::automation::AutomationConfig;
use frost_desktop::{WindowError, window};
use frost_vision::Frame;
use kanal::AsyncSender;
use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Producer half of the bot: locates, focuses and screenshots the game
/// window once per iteration, handing each frame to the click task.
///
/// Every per-iteration failure is logged and counted, never fatal; the
/// next iteration starts fresh.
pub async fn capture_loop(
    state: Arc<AppState>,
    frame_tx: AsyncSender<Frame>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (app_name, capture_cfg, automation) = {
        let config = state.config.read().await;
        (
            config.target.app_name.clone(),
            config.capture.clone(),
            config.automation.clone(),
        )
    };
    let output_path = PathBuf::from(&capture_cfg.output_path);

    let mut iteration: u64 = 0;
    loop {
        if cancel.is_cancelled() {
            break;
        }
        if automation.iterations > 0 && iteration >= automation.iterations {
            tracing::info!("completed all {iteration} iterations");
            break;
        }
        iteration += 1;
        tracing::info!(iteration, "starting iteration");

        match run_iteration(
            &app_name,
            &capture_cfg,
            &output_path,
            &frame_tx,
            &cancel,
            iteration,
        )
        .await
        {
            Ok(()) => {}
            Err(e) => {
                tracing::warn!(iteration, "iteration failed: {e:#}");
                state.status.record_error();
            }
        }
        state.status.record_iteration();

        let delay = iteration_delay(&automation);
        tracing::debug!(?delay, "waiting before next iteration");
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(delay) => {}
        }
    }

    Ok(())
}

async fn run_iteration(
    app_name: &str,
    capture_cfg: &frost_config::capture::CaptureConfig,
    output_path: &std::path::Path,
    frame_tx: &AsyncSender<Frame>,
    cancel: &CancellationToken,
    iteration: u64,
) -> anyhow::Result<()> {
    if !window::is_app_running(app_name).await? {
        tracing::info!(app = app_name, "application not running");
        return Ok(());
    }

    let window = match window::locate_window(
        app_name,
        Duration::from_millis(capture_cfg.window_poll_ms),
        Duration::from_millis(capture_cfg.window_timeout_ms),
    )
    .await
    {
        Ok(window) => window,
        Err(WindowError::NotRunning) => {
            // The game quit between the running check and the locate.
            tracing::info!(app = app_name, "application not running");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    window::focus_window(app_name).await?;
    tokio::time::sleep(Duration::from_millis(capture_cfg.focus_settle_ms)).await;

    let image = frost_vision::capture_window(window, output_path).await?;
    send_frame(
        frame_tx,
        Frame {
            image,
            window,
            iteration,
        },
        cancel,
    )
    .await
}

/// Send a frame unless shutdown wins the race.
///
/// The channel is bounded at 1, so a send can block indefinitely while
/// the click task is busy; cancellation must still get through or
/// Ctrl+C would leave the capture task stuck here forever.
pub(crate) async fn send_frame(
    frame_tx: &AsyncSender<Frame>,
    frame: Frame,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    tokio::select! {
        _ = cancel.cancelled() => Ok(()),
        result = frame_tx.send(frame) => Ok(result?),
    }
}

/// Fixed delay, or uniform in `[0, delay_secs)` when randomized.
pub(crate) fn iteration_delay(automation: &AutomationConfig) -> Duration {
    if automation.random_delay && automation.delay_secs > 0 {
        Duration::from_secs(rand::rng().random_range(0..automation.delay_secs))
    } else {
        Duration::from_secs(automation.delay_secs)
    }
}
