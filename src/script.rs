use crate::colors::{BLACK, BLUE, Color, GREEN, RED, WHITE, YELLOW};
use crate::types::{PostEffect, ScriptError, ScriptStep, TransitionConfig, WinkConfig};
use heapless::Vec;

/// Default pause between switching the LED off and the first transition.
pub const DEFAULT_SETTLE_MS: u32 = 100;

/// Number of steps in the [`Script::demo`] palette.
pub const DEMO_STEPS: usize = 6;

/// An ordered list of color transitions played on one LED.
///
/// The LED starts dark. Each step transitions to its target color and then runs
/// its post effect. Colors are named so progress output can label them.
///
/// # Type Parameters
/// * `N` - Maximum number of steps this script can hold
#[derive(Debug, Clone)]
pub struct Script<const N: usize> {
    steps: Vec<ScriptStep, N>,
    transition: TransitionConfig,
    settle_ms: u32,
    title: Option<&'static str>,
    start_label: &'static str,
}

impl<const N: usize> Script<N> {
    /// Creates a new script builder.
    pub fn builder() -> ScriptBuilder<N> {
        ScriptBuilder::new()
    }

    /// Returns the number of steps in this script.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns a reference to the step at the given index.
    pub fn get_step(&self, index: usize) -> Option<&ScriptStep> {
        self.steps.get(index)
    }

    /// Returns all steps in order.
    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Returns the transition timing shared by all steps.
    pub fn transition(&self) -> &TransitionConfig {
        &self.transition
    }

    /// Returns the delay between switching off and the first transition.
    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    /// Returns the title announced before playing, if any.
    pub fn title(&self) -> Option<&'static str> {
        self.title
    }

    /// Returns the name of the color the script starts from.
    pub fn start_label(&self) -> &'static str {
        self.start_label
    }
}

impl Script<DEMO_STEPS> {
    /// The on-board LED demo: off, blue, red, green, yellow, white and back off,
    /// winking at every color along the way.
    pub fn demo() -> Self {
        let wink = PostEffect::Wink(WinkConfig::default());
        let palette: [(Color, &'static str, PostEffect); DEMO_STEPS] = [
            (BLUE, "Blue", wink),
            (RED, "Red", wink),
            (GREEN, "Green", wink),
            (YELLOW, "Yellow", wink),
            (WHITE, "White", wink),
            (BLACK, "Off", PostEffect::None),
        ];

        let mut steps = Vec::new();
        for (target, label, after) in palette {
            // Capacity is exactly the palette length.
            let _ = steps.push(ScriptStep::new(target, label, after));
        }

        Self {
            steps,
            transition: TransitionConfig::default(),
            settle_ms: DEFAULT_SETTLE_MS,
            title: Some("On-board LED color example..."),
            start_label: "Off",
        }
    }
}

/// Builder for constructing validated scripts.
#[derive(Debug)]
pub struct ScriptBuilder<const N: usize> {
    steps: Vec<ScriptStep, N>,
    transition: TransitionConfig,
    settle_ms: u32,
    title: Option<&'static str>,
}

impl<const N: usize> ScriptBuilder<N> {
    /// Creates a new empty script builder.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            transition: TransitionConfig::default(),
            settle_ms: DEFAULT_SETTLE_MS,
            title: None,
        }
    }

    /// Adds a step to the script.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The script already holds `N` steps
    pub fn step(
        mut self,
        target: Color,
        label: &'static str,
        after: PostEffect,
    ) -> Result<Self, ScriptError> {
        self.steps
            .push(ScriptStep::new(target, label, after))
            .map_err(|_| ScriptError::CapacityExceeded)?;
        Ok(self)
    }

    /// Sets the transition timing used by every step.
    ///
    /// Default is 51 steps of 20ms.
    pub fn transition(mut self, config: TransitionConfig) -> Self {
        self.transition = config;
        self
    }

    /// Sets the pause between switching off and the first transition.
    pub fn settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Sets the title announced before playing.
    pub fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    /// Builds and validates the script.
    ///
    /// # Errors
    /// * `EmptyScript` - No steps were added
    pub fn build(self) -> Result<Script<N>, ScriptError> {
        if self.steps.is_empty() {
            return Err(ScriptError::EmptyScript);
        }

        Ok(Script {
            steps: self.steps,
            transition: self.transition,
            settle_ms: self.settle_ms,
            title: self.title,
            start_label: "Off",
        })
    }
}

impl<const N: usize> Default for ScriptBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
