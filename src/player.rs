//! Script player owning a single LED.
//!
//! Provides [`Player`], which owns an [`LedSink`] and a delay source and drives
//! the LED through transitions, winks and whole [`Script`]s.

use crate::colors::{BLACK, Color};
use crate::progress::Progress;
use crate::script::Script;
use crate::sink::LedSink;
use crate::transition::transition;
use crate::types::{PostEffect, TransitionConfig, WinkConfig};
use crate::wink::wink;
use embedded_hal::delay::DelayNs;

/// Drives a single RGB LED through color transitions.
///
/// The player is the only owner of the LED for as long as it lives; get the
/// hardware back with [`release`](Player::release).
///
/// # Type Parameters
/// * `S` - LED sink implementation type
/// * `D` - Delay implementation type
pub struct Player<S: LedSink, D: DelayNs> {
    sink: S,
    delay: D,
}

impl<S: LedSink, D: DelayNs> Player<S, D> {
    /// Creates a player. The LED is left as it is.
    pub fn new(sink: S, delay: D) -> Self {
        Self { sink, delay }
    }

    /// Transitions the LED from its current color to `target`.
    pub fn transition_to(
        &mut self,
        target: Color,
        config: &TransitionConfig,
    ) -> Result<(), S::Error> {
        transition(&mut self.sink, &mut self.delay, target, config, &mut ())
    }

    /// Winks the current color.
    pub fn wink(&mut self, config: &WinkConfig) -> Result<(), S::Error> {
        wink(&mut self.sink, &mut self.delay, config)
    }

    /// Switches the LED off immediately.
    pub fn off(&mut self) -> Result<(), S::Error> {
        self.sink.set(BLACK);
        self.sink.commit()
    }

    /// Plays a script from start to end.
    ///
    /// The LED is switched off, the script's title announced and its settle delay
    /// waited out before the first transition. The LED is switched off again when
    /// the script ends.
    ///
    /// # Errors
    /// Stops at the first failed commit and returns the sink's error.
    pub fn play<const N: usize, P>(
        &mut self,
        script: &Script<N>,
        progress: &mut P,
    ) -> Result<(), S::Error>
    where
        P: Progress + ?Sized,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("playing script of {=usize} steps", script.step_count());

        self.off()?;
        if let Some(title) = script.title() {
            progress.banner(title);
        }
        self.delay.delay_ms(script.settle_ms());

        let mut from = script.start_label();
        for step in script.steps() {
            progress.begin(from);
            transition(
                &mut self.sink,
                &mut self.delay,
                step.target,
                script.transition(),
                progress,
            )?;
            progress.end(step.label);

            match step.after {
                PostEffect::None => {}
                PostEffect::Wink(config) => self.wink(&config)?,
            }
            from = step.label;
        }

        progress.finish();
        self.off()
    }

    /// Returns the last color committed to the LED.
    pub fn current(&self) -> Color {
        self.sink.current()
    }

    /// Returns a reference to the LED sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the player and returns the sink and delay.
    pub fn release(self) -> (S, D) {
        (self.sink, self.delay)
    }
}
