use glam::Vec3;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use thiserror::Error;

use crate::algorithms::bubble::{BubbleState, PassStep};
use crate::geometry::{bar_vertices, highlight_colors};

/// What a tick changed, i.e. which GPU buffer the host must re-upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// One pair was compared (and possibly swapped); the vertex list was rebuilt.
    Vertices,
    /// The highlight moved to the next pair; the color list was rebuilt.
    Colors,
    /// Sorting is finished; nothing changed and nothing will.
    Done,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot animate a sort over {0} value(s), need at least 2")]
    TooFewValues(usize),
}

/// The two tick kinds strictly alternate while a sort is running: first the
/// compared pair may swap heights, then the next pair lights up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    CompareSwap,
    Highlight,
}

/// Drives one bubble-sort animation.
///
/// Owns the value sequence and the vertex/color lists derived from it, and
/// advances the animation by exactly one comparison or one highlight update
/// per `step` call.
pub struct Engine {
    values: Vec<f32>,
    vertices: Vec<Vec3>,
    colors: Vec<Vec3>,
    bubble: BubbleState,
    phase: Phase,
    done: bool,
    rng: SmallRng,
}

impl Engine {
    /// Engine over `size` random values in [0, 1).
    pub fn random(size: usize) -> Result<Self, EngineError> {
        let mut rng = SmallRng::from_entropy();
        let values = (0..size).map(|_| rng.gen_range(0.0..1.0)).collect();
        Self::with_rng(values, rng)
    }

    /// Engine over a fixed value list.
    pub fn from_values(values: Vec<f32>) -> Result<Self, EngineError> {
        Self::with_rng(values, SmallRng::from_entropy())
    }

    fn with_rng(values: Vec<f32>, rng: SmallRng) -> Result<Self, EngineError> {
        if values.len() < 2 {
            return Err(EngineError::TooFewValues(values.len()));
        }
        let vertices = bar_vertices(&values);
        let colors = highlight_colors(values.len(), 0);
        Ok(Self {
            values,
            vertices,
            colors,
            bubble: BubbleState::new(),
            phase: Phase::CompareSwap,
            done: false,
            rng,
        })
    }

    /// Restart with fresh random values of the same size.
    pub fn reset(&mut self) {
        for value in &mut self.values {
            *value = self.rng.gen_range(0.0..1.0);
        }
        self.vertices = bar_vertices(&self.values);
        self.colors = highlight_colors(self.values.len(), 0);
        self.bubble = BubbleState::new();
        self.phase = Phase::CompareSwap;
        self.done = false;
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// True once a full pass ran without swapping.
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn comparisons(&self) -> usize {
        self.bubble.comparisons()
    }

    pub fn swaps(&self) -> usize {
        self.bubble.swaps()
    }

    /// Advance the animation by one tick.
    ///
    /// Each call performs one comparison/swap or one highlight update, never
    /// both. Once the sort has completed this is a no-op returning
    /// `Tick::Done`.
    pub fn step(&mut self) -> Tick {
        if self.done {
            return Tick::Done;
        }
        match self.phase {
            Phase::CompareSwap => {
                if self.bubble.advance(&mut self.values) == PassStep::SortDone {
                    self.done = true;
                    return Tick::Done;
                }
                self.vertices = bar_vertices(&self.values);
                self.phase = Phase::Highlight;
                Tick::Vertices
            }
            Phase::Highlight => {
                self.colors = highlight_colors(self.values.len(), self.bubble.index());
                self.phase = Phase::CompareSwap;
                Tick::Colors
            }
        }
    }
}
