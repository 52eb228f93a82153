//! Core types for transitions, effects and scripts.

use crate::colors::Color;
use core::num::NonZeroU16;

/// Default number of interpolation steps (255 / 5).
pub const DEFAULT_STEPS: u16 = 51;

/// Default delay after each interpolation step.
pub const DEFAULT_STEP_DELAY_MS: u32 = 20;

/// Timing of a linear color transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransitionConfig {
    steps: NonZeroU16,
    step_delay_ms: u32,
}

impl TransitionConfig {
    /// Creates a transition config.
    ///
    /// # Errors
    /// * `ZeroSteps` - `steps` is zero
    pub fn new(steps: u16, step_delay_ms: u32) -> Result<Self, ConfigError> {
        let steps = NonZeroU16::new(steps).ok_or(ConfigError::ZeroSteps)?;
        Ok(Self {
            steps,
            step_delay_ms,
        })
    }

    /// Number of interpolated colors committed before the final one.
    #[inline]
    pub fn steps(&self) -> NonZeroU16 {
        self.steps
    }

    /// Delay after each interpolated commit.
    #[inline]
    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            steps: NonZeroU16::new(DEFAULT_STEPS).unwrap_or(NonZeroU16::MIN),
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }
}

/// Timing of a wink (blink off and back on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WinkConfig {
    /// How many off/on cycles to run.
    pub repetitions: u8,

    /// How long the LED stays dark in each cycle.
    pub off_delay_ms: u32,

    /// How long the color is shown again in each cycle.
    pub on_delay_ms: u32,
}

impl WinkConfig {
    /// Creates a wink config.
    #[inline]
    pub const fn new(repetitions: u8, off_delay_ms: u32, on_delay_ms: u32) -> Self {
        Self {
            repetitions,
            off_delay_ms,
            on_delay_ms,
        }
    }
}

impl Default for WinkConfig {
    fn default() -> Self {
        Self::new(3, 100, 100)
    }
}

/// What to do after a script step reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PostEffect {
    /// Move on to the next step.
    #[default]
    None,

    /// Wink the target color.
    Wink(WinkConfig),
}

/// A single step in a script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    /// Color to transition to.
    pub target: Color,

    /// Name of the target color, used for progress output.
    pub label: &'static str,

    /// Effect to run once the target is reached.
    pub after: PostEffect,
}

impl ScriptStep {
    /// Creates a new script step.
    #[inline]
    pub fn new(target: Color, label: &'static str, after: PostEffect) -> Self {
        Self {
            target,
            label,
            after,
        }
    }
}

/// Transition config errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Step count of zero.
    ZeroSteps,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroSteps => write!(f, "transition needs at least one step"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Script validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScriptError {
    /// No steps provided.
    EmptyScript,

    /// Script capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScriptError::EmptyScript => write!(f, "script must have at least one step"),
            ScriptError::CapacityExceeded => write!(f, "script capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScriptError {}
