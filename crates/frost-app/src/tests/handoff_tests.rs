use std::time::Duration;

use frost_types::Rect;
use frost_vision::Frame;
use opencv::core::Mat;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::capture::send_frame;

fn empty_frame(iteration: u64) -> Frame {
    Frame {
        image: Mat::default(),
        window: Rect::new(16, 38, 800, 600),
        iteration,
    }
}

#[tokio::test]
async fn frame_round_trips_window_rect() {
    let (tx, rx) = kanal::bounded_async::<Frame>(1);

    tx.send(empty_frame(1)).await.expect("send failed");
    let frame = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out")
        .expect("recv failed");

    assert_eq!(frame.iteration, 1);
    assert_eq!(frame.window, Rect::new(16, 38, 800, 600));
}

#[tokio::test]
async fn capture_never_runs_two_frames_ahead() {
    let (tx, rx) = kanal::bounded_async::<Frame>(1);

    tx.send(empty_frame(1)).await.expect("send failed");

    // The channel is full: a second send must block until the consumer
    // drains the first frame.
    let second = timeout(Duration::from_millis(200), tx.send(empty_frame(2))).await;
    assert!(second.is_err(), "second send completed on a full channel");

    let frame = rx.recv().await.expect("recv failed");
    assert_eq!(frame.iteration, 1);

    timeout(Duration::from_secs(2), tx.send(empty_frame(2)))
        .await
        .expect("send after drain timed out")
        .expect("send failed");
}

#[tokio::test]
async fn shutdown_unblocks_a_send_on_a_full_channel() {
    let (tx, rx) = kanal::bounded_async::<Frame>(1);
    let cancel = CancellationToken::new();

    tx.send(empty_frame(1)).await.expect("send failed");

    // The consumer has stopped but the receiver stays alive (the
    // controller holds the original pair), so this send can only be
    // released by cancellation.
    let capture_side = tokio::spawn({
        let cancel = cancel.clone();
        async move { send_frame(&tx, empty_frame(2), &cancel).await }
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!capture_side.is_finished(), "send completed on a full channel");

    cancel.cancel();
    timeout(Duration::from_secs(2), capture_side)
        .await
        .expect("capture side still blocked after cancel")
        .expect("capture side panicked")
        .expect("send_frame errored");

    drop(rx);
}

#[tokio::test]
async fn dropped_sender_ends_the_click_loop_recv() {
    let (tx, rx) = kanal::bounded_async::<Frame>(1);
    drop(tx);
    assert!(rx.recv().await.is_err());
}
