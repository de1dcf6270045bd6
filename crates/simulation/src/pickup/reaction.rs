//! Pop/fade reaction state machine.
//!
//! `Idle`, `PoppingUp`, `FadingOut`, then `Destroyed`, strictly forward. The machine
//! owns the pickup's uniform scale from the moment it is triggered.

use crate::config::PickupConfig;
use crate::tween::{Easing, Tween};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReactionState {
    #[default]
    Idle,
    PoppingUp,
    FadingOut,
    Destroyed,
}

/// Timing and scale targets for one reaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionSettings {
    pub pop_target: f32,
    pub pop_duration: f32,
    pub fade_duration: f32,
}

impl From<&PickupConfig> for ReactionSettings {
    fn from(config: &PickupConfig) -> Self {
        Self {
            pop_target: config.pop_target,
            pop_duration: config.pop_duration,
            fade_duration: config.fade_duration,
        }
    }
}

impl Default for ReactionSettings {
    fn default() -> Self {
        Self::from(&PickupConfig::default())
    }
}

/// Outcome of a single `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionStep {
    /// Nothing to animate (idle, or already destroyed).
    Unchanged,
    /// The scale changed and the sequence is still running.
    Progressed,
    /// The fade finished during this step; the pickup must be torn down.
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickupReaction {
    state: ReactionState,
    triggered: bool,
    scale: f32,
    tween: Option<Tween>,
    settings: ReactionSettings,
}

impl PickupReaction {
    pub fn new(settings: ReactionSettings) -> Self {
        Self {
            state: ReactionState::Idle,
            triggered: false,
            scale: 1.0,
            tween: None,
            settings,
        }
    }

    pub fn state(&self) -> ReactionState {
        self.state
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn settings(&self) -> ReactionSettings {
        self.settings
    }

    /// Start the pop. Only the first call has any effect; returns whether this
    /// call started the sequence.
    pub fn trigger(&mut self) -> bool {
        if self.triggered {
            return false;
        }
        self.triggered = true;
        self.state = ReactionState::PoppingUp;
        self.scale = 1.0;
        self.tween = Some(Tween::new(
            1.0,
            self.settings.pop_target,
            self.settings.pop_duration,
            Easing::EaseOutQuad,
        ));
        true
    }

    /// Advance the running tween by `dt` seconds.
    ///
    /// Time left over when the pop completes carries into the fade, so the
    /// sequence always takes `pop_duration + fade_duration` of frame time.
    pub fn advance(&mut self, dt: f32) -> ReactionStep {
        let mut remaining = dt;
        loop {
            let Some(tween) = self.tween.as_mut() else {
                return ReactionStep::Unchanged;
            };
            let (value, complete) = tween.advance(remaining);
            self.scale = value.clamp(0.0, self.settings.pop_target);
            if !complete {
                return ReactionStep::Progressed;
            }
            remaining = tween.overshoot();

            match self.state {
                ReactionState::PoppingUp => {
                    self.state = ReactionState::FadingOut;
                    self.tween = Some(Tween::new(
                        self.scale,
                        0.0,
                        self.settings.fade_duration,
                        Easing::EaseInOutQuad,
                    ));
                }
                ReactionState::FadingOut => {
                    self.state = ReactionState::Destroyed;
                    self.scale = 0.0;
                    self.tween = None;
                    return ReactionStep::Finished;
                }
                ReactionState::Idle | ReactionState::Destroyed => {
                    self.tween = None;
                    return ReactionStep::Unchanged;
                }
            }
        }
    }
}

impl Default for PickupReaction {
    fn default() -> Self {
        Self::new(ReactionSettings::default())
    }
}
