//! Linear color transitions.
//!
//! [`Transition`] computes the intermediate colors between two endpoints and
//! [`transition`] pushes them to an [`LedSink`], pacing each step with a delay.
//!
//! Interpolation accumulates the per-step increment in `f32` and rounds the
//! accumulator fresh on every step (round half away from zero). Rounding the
//! increment once and adding it up would drift away from the target whenever
//! the increment is not a whole number.

use crate::colors::Color;
use crate::progress::Progress;
use crate::sink::LedSink;
use crate::types::TransitionConfig;
use core::num::NonZeroU16;
use embedded_hal::delay::DelayNs;

/// Iterator over the interpolated colors of a linear transition.
///
/// Yields exactly `steps` colors. The last one is the target, up to `f32`
/// accumulation error; callers that need the exact target should commit it
/// explicitly afterwards, as [`transition`] does.
#[derive(Debug, Clone)]
pub struct Transition {
    accumulator: [f32; 3],
    increment: [f32; 3],
    remaining: u16,
}

impl Transition {
    /// Creates the interpolation from `start` to `target` over `steps` steps.
    pub fn new(start: Color, target: Color, steps: NonZeroU16) -> Self {
        let start = channels(start);
        let target = channels(target);
        let count = f32::from(steps.get());

        let mut increment = [0.0; 3];
        for (inc, (from, to)) in increment.iter_mut().zip(start.iter().zip(target.iter())) {
            *inc = (to - from) / count;
        }

        Self {
            accumulator: start,
            increment,
            remaining: steps.get(),
        }
    }
}

impl Iterator for Transition {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        for (acc, inc) in self.accumulator.iter_mut().zip(self.increment.iter()) {
            *acc += inc;
        }

        let [red, green, blue] = self.accumulator;
        Some(Color::new(to_channel(red), to_channel(green), to_channel(blue)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.remaining);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Transition {}

impl core::iter::FusedIterator for Transition {}

fn channels(color: Color) -> [f32; 3] {
    [
        f32::from(color.red),
        f32::from(color.green),
        f32::from(color.blue),
    ]
}

fn to_channel(value: f32) -> u8 {
    libm::roundf(value).clamp(0.0, 255.0) as u8
}

/// Transitions the sink from its current color to `target`.
///
/// Commits `config.steps()` interpolated colors, waiting `config.step_delay_ms()`
/// after each, then commits `target` itself. The sink always ends on exactly
/// `target`.
///
/// # Errors
/// Returns the sink's error as soon as a commit fails; no further commits are made.
pub fn transition<S, D, P>(
    sink: &mut S,
    delay: &mut D,
    target: Color,
    config: &TransitionConfig,
    progress: &mut P,
) -> Result<(), S::Error>
where
    S: LedSink + ?Sized,
    D: DelayNs + ?Sized,
    P: Progress + ?Sized,
{
    let start = sink.current();

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "transition ({=u8},{=u8},{=u8}) -> ({=u8},{=u8},{=u8}) in {=u16} steps",
        start.red,
        start.green,
        start.blue,
        target.red,
        target.green,
        target.blue,
        config.steps().get()
    );

    for color in Transition::new(start, target, config.steps()) {
        sink.set(color);
        sink.commit()?;
        progress.step();
        delay.delay_ms(config.step_delay_ms());
    }

    sink.set(target);
    sink.commit()
}
