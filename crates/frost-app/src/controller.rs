use std::sync::Arc;

use frost_vision::{Frame, TemplateSet};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::capture::capture_loop;
use crate::clicker::click_loop;
use crate::state::AppState;

/// Centralized channel management.
pub struct ChannelSet {
    pub frames: (AsyncSender<Frame>, AsyncReceiver<Frame>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            // Capacity 1: the capture task never runs more than one
            // frame ahead of the click task.
            frames: kanal::bounded_async(1),
        }
    }
}

/// Task spawning and lifecycle for the bot.
pub struct BotController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl BotController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, templates: TemplateSet) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(capture_loop(
            self.state.clone(),
            self.channels.frames.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks.spawn(click_loop(
            self.state.clone(),
            self.channels.frames.1.clone(),
            templates,
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
