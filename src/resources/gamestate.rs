//! High-level game flow.
//!
//! The game opens on an intro banner, switches to play, and after the hero
//! reaches a star shows the win banner before asking the main loop to stop.
//! Banner lengths are counted in ticks so the flow stays on the fixed timestep.

use bevy_ecs::prelude::Resource;
use log::info;

pub const INTRO_TEXT: &str = "Get to the Star";
pub const WIN_TEXT: &str = "You Win!";
/// Seconds each banner stays up.
pub const BANNER_SECONDS: u32 = 2;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Intro,
    Playing,
    Won,
}

/// Authoritative current game state plus the banner countdown.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    current: GameStates,
    banner_ticks: u32,
    banner_length: u32,
    quit: bool,
}

impl GameState {
    /// Start on the intro banner. `tick_rate` is the number of ticks per second.
    pub fn new(tick_rate: u32) -> Self {
        let banner_length = tick_rate.saturating_mul(BANNER_SECONDS);
        Self {
            current: GameStates::Intro,
            banner_ticks: banner_length,
            banner_length,
            quit: false,
        }
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.current == GameStates::Playing
    }

    /// Text to show over the level, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self.current {
            GameStates::Intro => Some(INTRO_TEXT),
            GameStates::Playing => None,
            GameStates::Won => Some(WIN_TEXT),
        }
    }

    /// The hero touched a star.
    pub fn win(&mut self) {
        if self.current == GameStates::Playing {
            info!("Star reached");
            self.current = GameStates::Won;
            self.banner_ticks = self.banner_length;
        }
    }

    /// Count one tick of banner time and move on when it runs out.
    pub fn tick(&mut self) {
        if self.current == GameStates::Playing {
            return;
        }
        self.banner_ticks = self.banner_ticks.saturating_sub(1);
        if self.banner_ticks > 0 {
            return;
        }
        match self.current {
            GameStates::Intro => {
                info!("Intro finished, starting play");
                self.current = GameStates::Playing;
            }
            GameStates::Won => self.quit = true,
            GameStates::Playing => {}
        }
    }

    /// Ask the main loop to stop.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
