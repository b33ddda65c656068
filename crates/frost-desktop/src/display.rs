use anyhow::{Context, Result};
use frost_types::Rect;
use xcap::Monitor;

/// Union of all active display bounds, in global coordinates.
///
/// Click points are clamped into this rectangle so a bad coordinate
/// translation can never send the cursor off every screen.
pub fn union_display_bounds() -> Result<Rect> {
    let monitors = Monitor::all().context("failed to enumerate monitors")?;
    let mut iter = monitors.iter();
    let first = iter.next().context("no active displays reported")?;
    let mut bounds = monitor_rect(first);
    for monitor in iter {
        bounds = bounds.union(monitor_rect(monitor));
    }
    Ok(bounds)
}

fn monitor_rect(monitor: &Monitor) -> Rect {
    Rect {
        x: monitor.x(),
        y: monitor.y(),
        width: monitor.width() as i32,
        height: monitor.height() as i32,
    }
}
