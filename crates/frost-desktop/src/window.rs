//! Window introspection via System Events.
//!
//! Everything here shells out to `osascript`; the game renders into a
//! plain desktop window, so position and size are enough and no
//! Accessibility API bindings are needed.

use std::time::Duration;

use frost_types::Rect;
use tokio::process::Command;
use tokio::time::{Instant, sleep};

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("application is not running")]
    NotRunning,
    #[error("application has no window")]
    NoWindow,
    #[error("osascript failed: {0}")]
    Script(String),
    #[error("unexpected window info: {0}")]
    Parse(String),
    #[error("timed out waiting for the window to appear")]
    Timeout,
}

async fn run_osascript(script: &str) -> Result<String, WindowError> {
    let output = Command::new("osascript")
        .args(["-e", script])
        .output()
        .await
        .map_err(|e| WindowError::Script(e.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(WindowError::Script(stderr.trim().to_string()));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Whether a process with the given name exists.
pub async fn is_app_running(app_name: &str) -> Result<bool, WindowError> {
    let script = format!(
        r#"tell application "System Events"
    count (every process whose name is "{app_name}")
end tell"#
    );
    let out = run_osascript(&script).await?;
    let count: u32 = out
        .parse()
        .map_err(|_| WindowError::Parse(out.clone()))?;
    Ok(count > 0)
}

fn window_info_script(app_name: &str) -> String {
    format!(
        r#"tell application "System Events"
    if exists (processes whose name is "{app_name}") then
        tell process "{app_name}"
            set winCount to count of windows
            if winCount = 0 then
                return "NO_WINDOW"
            else
                set theWindow to first window
                set pos to position of theWindow
                set sz to size of theWindow
                return ((item 1 of pos) as text) & "," & ((item 2 of pos) as text) & "," & ((item 1 of sz) as text) & "," & ((item 2 of sz) as text)
            end if
        end tell
    else
        return "NOTFOUND"
    end if
end tell"#
    )
}

/// Parse the `window_info_script` output into a window rectangle.
fn parse_window_info(raw: &str) -> Result<Rect, WindowError> {
    match raw.trim() {
        "NOTFOUND" => return Err(WindowError::NotRunning),
        "NO_WINDOW" => return Err(WindowError::NoWindow),
        _ => {}
    }
    let fields: Vec<i32> = raw
        .split(',')
        .map(|f| f.trim().parse().ok())
        .collect::<Option<Vec<i32>>>()
        .ok_or_else(|| WindowError::Parse(raw.to_string()))?;
    let &[x, y, width, height] = fields.as_slice() else {
        return Err(WindowError::Parse(raw.to_string()));
    };
    Ok(Rect {
        x,
        y,
        width,
        height,
    })
}

/// One-shot query for the first window's global frame.
pub async fn query_window(app_name: &str) -> Result<Rect, WindowError> {
    let out = run_osascript(&window_info_script(app_name)).await?;
    parse_window_info(&out)
}

async fn window_count(app_name: &str) -> Result<u32, WindowError> {
    let script = format!(
        r#"tell application "System Events"
    if exists (processes whose name is "{app_name}") then
        tell process "{app_name}" to count windows
    else
        return "NOTFOUND"
    end if
end tell"#
    );
    let out = run_osascript(&script).await?;
    if out == "NOTFOUND" {
        return Err(WindowError::NotRunning);
    }
    out.parse().map_err(|_| WindowError::Parse(out.clone()))
}

async fn activate(app_name: &str) -> Result<(), WindowError> {
    let script = format!(r#"tell application "{app_name}" to activate"#);
    run_osascript(&script).await.map(|_| ())
}

/// Find the window frame, waiting for the window to appear.
///
/// Some games close their window while idling in the background; when
/// the process has no window we activate it to force one, then poll
/// until `timeout` elapses.
pub async fn locate_window(
    app_name: &str,
    poll: Duration,
    timeout: Duration,
) -> Result<Rect, WindowError> {
    match window_count(app_name).await {
        Ok(0) => {
            tracing::info!(app = app_name, "no window available, activating");
            if let Err(e) = activate(app_name).await {
                tracing::warn!(app = app_name, "activate failed: {e}");
            }
        }
        Ok(_) => {}
        Err(WindowError::NotRunning) => return Err(WindowError::NotRunning),
        Err(e) => tracing::debug!(app = app_name, "window count failed: {e}"),
    }

    let deadline = Instant::now() + timeout;
    loop {
        match query_window(app_name).await {
            Ok(rect) => {
                tracing::debug!(app = app_name, ?rect, "window located");
                return Ok(rect);
            }
            Err(WindowError::NotRunning) => return Err(WindowError::NotRunning),
            Err(e) => tracing::debug!(app = app_name, "window not ready: {e}"),
        }
        if Instant::now() >= deadline {
            return Err(WindowError::Timeout);
        }
        sleep(poll).await;
    }
}

/// Bring the window to the front, un-minimizing it if needed.
pub async fn focus_window(app_name: &str) -> Result<(), WindowError> {
    let script = format!(
        r#"tell application "{app_name}" to activate
tell application "System Events"
    tell process "{app_name}"
        try
            if miniaturized of window 1 is true then
                set miniaturized of window 1 to false
            end if
        end try
        set frontmost to true
    end tell
end tell"#
    );
    run_osascript(&script).await.map(|_| ())
}
