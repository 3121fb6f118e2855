// SPDX-License-Identifier: MPL-2.0
//! Iced subscription hosting one media session.
//!
//! Bridges the transport task into the UI event loop: the subscription
//! first delivers a [`MediaSessionHandle`] for sending commands, then
//! streams every transport signal back as a message. While playing, a
//! ticker drives position advancement at a fixed cadence.

use std::time::{Duration, Instant};

use iced::futures::SinkExt;
use iced::stream;
use tokio::sync::mpsc;
use tokio::time::{interval, Interval, MissedTickBehavior};

use super::driver::{MediaCommand, MediaSessionHandle, MediaSignal, Transport};

/// Cadence of position reports while the transport is playing.
pub const POSITION_UPDATE_INTERVAL: Duration = Duration::from_millis(100);

/// Subscription ID for a media session.
/// Each upload starts a new session with a fresh ID, which makes Iced tear
/// down the old subscription and start this one from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaSessionId(u64);

/// State of the media session subscription.
enum State {
    /// Waiting to start.
    Idle,

    /// Transport is live and commands can arrive.
    Running {
        transport: Transport,
        command_rx: mpsc::UnboundedReceiver<MediaCommand>,
        ticker: Interval,
    },
}

/// Creates the media session subscription for `session_id`.
///
/// The first message is always [`MediaSignal::SessionStarted`] carrying the
/// command handle. The session ends for good once every clone of that
/// handle has been dropped.
pub fn media_session(session_id: u64) -> iced::Subscription<MediaSignal> {
    iced::Subscription::run_with(MediaSessionId(session_id), |_session| {
        stream::channel(
            100,
            move |mut output: iced::futures::channel::mpsc::Sender<MediaSignal>| async move {
            let mut state = State::Idle;

            loop {
                match &mut state {
                    State::Idle => {
                        let (command_tx, command_rx) = mpsc::unbounded_channel();

                        let handle = MediaSessionHandle::new(command_tx);
                        let _ = output.send(MediaSignal::SessionStarted(handle)).await;

                        let mut ticker = interval(POSITION_UPDATE_INTERVAL);
                        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

                        state = State::Running {
                            transport: Transport::new(),
                            command_rx,
                            ticker,
                        };
                    }

                    State::Running {
                        transport,
                        command_rx,
                        ticker,
                    } => {
                        tokio::select! {
                            command = command_rx.recv() => {
                                match command {
                                    Some(command) => {
                                        for signal in transport.apply(command, Instant::now()) {
                                            let _ = output.send(signal).await;
                                        }
                                    }
                                    None => {
                                        // Every handle dropped; session is over.
                                        break;
                                    }
                                }
                            }

                            _ = ticker.tick(), if transport.is_playing() => {
                                for signal in transport.advance(Instant::now()) {
                                    let _ = output.send(signal).await;
                                }
                            }
                        }
                    }
                }
            }

            // Keep the subscription alive but idle.
            std::future::pending::<()>().await;
        })
    })
}
