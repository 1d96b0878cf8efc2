//! One run of the game: canyon, ship, controls and score, advanced one tick at a time.
//! Nothing here touches the browser; the web runtime owns the timer and just calls
//! [`Game::tick`] with a canvas.

use crate::canyon::CanyonTrack;
use crate::config::GameConfig;
use crate::input::{Controls, Offset};
use crate::rng::RandomSource;
use crate::ship::Ship;
use crate::surface::DrawSurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    Ended,
}

/// What a tick did, so the caller knows when to tear the loop down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Survived { score: u32 },
    Crashed { score: u32 },
    AlreadyEnded,
}

pub struct Game<R: RandomSource> {
    canyon: CanyonTrack,
    ship: Ship,
    controls: Controls,
    score: u32,
    state: GameState,
    width: f64,
    height: f64,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    pub fn new(config: &GameConfig, mut rng: R) -> Self {
        let canyon = CanyonTrack::new(config, &mut rng);
        Self {
            canyon,
            ship: Ship::new(config.ship),
            controls: Controls::new(config.move_step),
            score: 0,
            state: GameState::Running,
            width: config.width as f64,
            height: config.height as f64,
            rng,
        }
    }

    pub fn tick(&mut self, surface: &mut dyn DrawSurface) -> TickOutcome {
        if self.state == GameState::Ended {
            return TickOutcome::AlreadyEnded;
        }
        let offset = self.controls.offset();

        surface.clear(self.width, self.height);
        self.ship.draw(surface, offset);
        self.canyon.advance(&mut self.rng);
        self.canyon.draw(surface);

        if self.collides(offset) {
            self.state = GameState::Ended;
            log::info!("ship hit the canyon wall, final score {}", self.score);
            return TickOutcome::Crashed { score: self.score };
        }
        self.score += 1;
        TickOutcome::Survived { score: self.score }
    }

    /// Checks the ship against the canyon row level with its back edge. Between rows
    /// or off screen there is nothing to hit.
    pub fn collides(&self, offset: Offset) -> bool {
        let bounds = self.ship.bounds(offset);
        match self.canyon.segment_at_row_offset(bounds.back) {
            Some(seg) => bounds.left as f64 <= seg.left || bounds.right as f64 >= seg.right,
            None => false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn canyon(&self) -> &CanyonTrack {
        &self.canyon
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }
}
