//! The click task hands matching and input synthesis to
//! `spawn_blocking`; these pin down the idiom it relies on.

use std::time::Duration;

use opencv::core::Mat;
use opencv::prelude::*;
use tokio::time::timeout;

#[tokio::test]
async fn blocking_work_does_not_stall_the_runtime() {
    let blocking = tokio::task::spawn_blocking(|| {
        std::thread::sleep(Duration::from_millis(200));
        "matched"
    });

    // A timer on the async side must still fire while the blocking
    // closure sleeps.
    let start = std::time::Instant::now();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(start.elapsed() < Duration::from_millis(150));

    let result = timeout(Duration::from_secs(2), blocking)
        .await
        .expect("blocking task timed out")
        .expect("blocking task panicked");
    assert_eq!(result, "matched");
}

#[tokio::test]
async fn mats_move_through_a_blocking_task_and_back() {
    // Same ownership pattern the click loop uses for its template set.
    let template = Mat::default();

    let (template, rows) = tokio::task::spawn_blocking(move || {
        let rows = template.rows();
        (template, rows)
    })
    .await
    .expect("blocking task panicked");

    assert_eq!(rows, 0);
    assert_eq!(template.rows(), 0);
}
