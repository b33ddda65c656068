use std::{thread, time::Duration};

use anyhow::Result;
use enigo::{Enigo, MouseButton, MouseControllable};
use frost_types::Point;

/// Move the cursor to `point` and press the left button.
///
/// The short settle pause between move and click keeps the game from
/// registering the press at the cursor's previous position. Requires
/// the Accessibility permission on macOS.
pub fn click_at(point: Point, settle: Duration) -> Result<()> {
    let mut enigo = Enigo::new();
    enigo.mouse_move_to(point.x, point.y);
    thread::sleep(settle);
    enigo.mouse_click(MouseButton::Left);
    Ok(())
}

/// Move the cursor without clicking.
pub fn move_to(point: Point) -> Result<()> {
    let mut enigo = Enigo::new();
    enigo.mouse_move_to(point.x, point.y);
    Ok(())
}
