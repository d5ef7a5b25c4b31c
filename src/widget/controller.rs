//! Widget controller
//!
//! Holds the player handle and drives the `Paused`/`Playing` state machine.
//! Play flips the state before awaiting the unlock step, so the Play button
//! is already disabled while the audio context starts. A Pause issued during
//! that wait bumps the epoch and the pending start is dropped.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use super::errors::PlayerError;
use super::markup::MISSING_SOURCE_MESSAGE;
use super::WidgetView;
use crate::engine::{AudioEngine, AudioPlayer};
use crate::models::{ButtonStates, PlaybackState, PlayerConfig};

/// Result of a Play click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    /// No player handle; nothing changed
    NoPlayer,
    /// A start is already running or finished
    AlreadyPlaying,
    /// Pause was clicked while the audio context was unlocking
    Superseded,
}

/// Result of a Pause click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOutcome {
    Stopped,
    NoPlayer,
    AlreadyPaused,
}

struct Shared<P, V> {
    player: Option<P>,
    state: PlaybackState,
    /// Whether `start` succeeded since the last stop
    started: bool,
    /// Incremented on every Play/Pause transition
    epoch: u64,
    view: V,
}

impl<P, V: WidgetView> Shared<P, V> {
    fn transition(&mut self, state: PlaybackState) {
        self.state = state;
        self.view.set_buttons(state.buttons());
    }
}

/// Cheaply cloneable handle; clones share the same player and state
pub struct PlayerController<E: AudioEngine, V: WidgetView> {
    engine: Rc<E>,
    shared: Rc<RefCell<Shared<E::Player, V>>>,
}

impl<E: AudioEngine, V: WidgetView> Clone for PlayerController<E, V> {
    fn clone(&self) -> Self {
        Self {
            engine: Rc::clone(&self.engine),
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<E: AudioEngine, V: WidgetView> PlayerController<E, V> {
    /// Wire a controller for `config`.
    ///
    /// A missing source shows the error message on `view` and returns
    /// `PlayerError::MissingSource`; nothing else happens. A construction
    /// failure is logged and the controller comes up without a player, so
    /// Play and Pause are no-ops.
    pub fn initialize(config: &PlayerConfig, engine: E, mut view: V) -> Result<Self, PlayerError> {
        let Some(source) = config.source.as_ref() else {
            log::error!("No MIDI file URL provided.");
            view.show_error(MISSING_SOURCE_MESSAGE);
            return Err(PlayerError::MissingSource);
        };

        let player = match engine.create_player(source) {
            Ok(player) => {
                log::info!("Player created for {}", source.summary());
                Some(player)
            }
            Err(e) => {
                log::error!("{}", PlayerError::Construction(e));
                None
            }
        };

        let state = PlaybackState::default();
        view.set_buttons(state.buttons());

        Ok(Self {
            engine: Rc::new(engine),
            shared: Rc::new(RefCell::new(Shared {
                player,
                state,
                started: false,
                epoch: 0,
                view,
            })),
        })
    }

    pub fn state(&self) -> PlaybackState {
        self.shared.borrow().state
    }

    pub fn buttons(&self) -> ButtonStates {
        self.state().buttons()
    }

    pub fn has_player(&self) -> bool {
        self.shared.borrow().player.is_some()
    }

    /// Run `f` against the view (tests and teardown)
    pub fn with_view<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.shared.borrow_mut().view)
    }

    /// Handle a Play click: unlock the audio context, then start playback.
    ///
    /// The state flips to `Playing` when this is called, before the returned
    /// future is first polled, so a second click is ignored straight away.
    /// On unlock or start failure the state returns to `Paused`.
    pub fn play(&self) -> impl Future<Output = Result<PlayOutcome, PlayerError>> {
        let begun = self.begin_play();
        let this = self.clone();
        async move {
            match begun {
                Ok(epoch) => this.finish_play(epoch).await,
                Err(outcome) => Ok(outcome),
            }
        }
    }

    fn begin_play(&self) -> Result<u64, PlayOutcome> {
        let mut shared = self.shared.borrow_mut();
        if shared.player.is_none() {
            log::debug!("Play ignored: no player");
            return Err(PlayOutcome::NoPlayer);
        }
        if shared.state == PlaybackState::Playing {
            log::debug!("Play ignored: already playing");
            return Err(PlayOutcome::AlreadyPlaying);
        }
        shared.epoch += 1;
        shared.transition(PlaybackState::Playing);
        Ok(shared.epoch)
    }

    async fn finish_play(&self, epoch: u64) -> Result<PlayOutcome, PlayerError> {
        let unlocked = self.engine.unlock().await;

        let mut shared = self.shared.borrow_mut();
        if shared.epoch != epoch {
            log::info!("Play superseded before the audio context unlocked");
            return Ok(PlayOutcome::Superseded);
        }

        if let Err(e) = unlocked {
            shared.transition(PlaybackState::Paused);
            let err = PlayerError::Unlock(e);
            log::error!("{}", err);
            return Err(err);
        }

        let started = match shared.player.as_mut() {
            Some(player) => player.start(),
            None => {
                shared.transition(PlaybackState::Paused);
                return Ok(PlayOutcome::NoPlayer);
            }
        };

        match started {
            Ok(()) => {
                shared.started = true;
                log::info!("Playback started");
                Ok(PlayOutcome::Started)
            }
            Err(e) => {
                shared.transition(PlaybackState::Paused);
                let err = PlayerError::Start(e);
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    /// Handle a Pause click: stop playback and re-enable Play.
    ///
    /// A failing stop is reported but the widget still ends up `Paused`.
    pub fn pause(&self) -> Result<PauseOutcome, PlayerError> {
        let mut shared = self.shared.borrow_mut();
        if shared.player.is_none() {
            log::debug!("Pause ignored: no player");
            return Ok(PauseOutcome::NoPlayer);
        }
        if shared.state == PlaybackState::Paused {
            return Ok(PauseOutcome::AlreadyPaused);
        }

        shared.epoch += 1;
        let stopped = match (shared.started, shared.player.as_mut()) {
            (true, Some(player)) => player.stop(),
            _ => Ok(()),
        };
        shared.started = false;
        shared.transition(PlaybackState::Paused);

        match stopped {
            Ok(()) => {
                log::info!("Playback stopped");
                Ok(PauseOutcome::Stopped)
            }
            Err(e) => {
                let err = PlayerError::Stop(e);
                log::warn!("{}", err);
                Err(err)
            }
        }
    }

    /// Stop playback and release the player handle
    pub fn shutdown(&self) {
        if let Err(e) = self.pause() {
            log::warn!("Shutdown: {}", e);
        }
        self.shared.borrow_mut().player = None;
    }
}
