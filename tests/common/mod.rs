//! Shared test infrastructure for rgb-transition integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use rgb_transition::{BLACK, Color, LedSink};
use smart_leds::{RGB8, SmartLedsWrite};

// ============================================================================
// Mock Pixel
// ============================================================================

/// Mock pixel that records every committed color
pub struct MockPixel {
    pending: Color,
    committed: Color,
    history: heapless::Vec<Color, 512>,
    sets: usize,
}

impl MockPixel {
    pub fn new() -> Self {
        Self::starting_at(BLACK)
    }

    /// A pixel that already shows `color`, with an empty history
    pub fn starting_at(color: Color) -> Self {
        Self {
            pending: color,
            committed: color,
            history: heapless::Vec::new(),
            sets: 0,
        }
    }

    pub fn commits(&self) -> &[Color] {
        &self.history
    }

    pub fn set_calls(&self) -> usize {
        self.sets
    }
}

impl LedSink for MockPixel {
    type Error = Infallible;

    fn current(&self) -> Color {
        self.committed
    }

    fn set(&mut self, color: Color) {
        self.pending = color;
        self.sets += 1;
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        self.committed = self.pending;
        let _ = self.history.push(self.pending);
        Ok(())
    }
}

// ============================================================================
// Failing Pixel
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Pixel whose commits start failing after a fixed number of successes
pub struct FailingPixel {
    committed: Color,
    pending: Color,
    successes_left: usize,
    pub attempts: usize,
}

impl FailingPixel {
    pub fn failing_after(successes: usize) -> Self {
        Self {
            committed: BLACK,
            pending: BLACK,
            successes_left: successes,
            attempts: 0,
        }
    }
}

impl LedSink for FailingPixel {
    type Error = BusFault;

    fn current(&self) -> Color {
        self.committed
    }

    fn set(&mut self, color: Color) {
        self.pending = color;
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        self.attempts += 1;
        if self.successes_left == 0 {
            return Err(BusFault);
        }
        self.successes_left -= 1;
        self.committed = self.pending;
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that returns immediately and records every requested millisecond wait
pub struct MockDelay {
    waits: heapless::Vec<u32, 512>,
    nanos: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            waits: heapless::Vec::new(),
            nanos: 0,
        }
    }

    pub fn waits_ms(&self) -> &[u32] {
        &self.waits
    }

    pub fn total_ms(&self) -> u64 {
        self.waits.iter().map(|&ms| u64::from(ms)).sum::<u64>() + self.nanos / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.nanos += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.waits.push(ms);
    }
}

// ============================================================================
// Mock smart-leds Driver
// ============================================================================

/// Records every frame written to a strip
pub struct MockStrip {
    pub frames: heapless::Vec<heapless::Vec<RGB8, 4>, 64>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
        }
    }
}

impl SmartLedsWrite for MockStrip {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let frame: heapless::Vec<RGB8, 4> = iterator.into_iter().map(Into::into).collect();
        let _ = self.frames.push(frame);
        Ok(())
    }
}

// ============================================================================
// Mock PWM Channel
// ============================================================================

/// PWM channel that remembers its duty cycle
pub struct MockChannel {
    pub duty: u16,
    pub max: u16,
}

impl MockChannel {
    pub fn new(max: u16) -> Self {
        Self { duty: 0, max }
    }
}

impl embedded_hal::pwm::ErrorType for MockChannel {
    type Error = Infallible;
}

impl embedded_hal::pwm::SetDutyCycle for MockChannel {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Asserts that one channel never moves away from its target
pub fn assert_monotonic(values: impl Iterator<Item = u8>, rising: bool) {
    let mut previous: Option<u8> = None;
    for value in values {
        if let Some(prev) = previous {
            if rising {
                assert!(value >= prev, "channel fell from {} to {}", prev, value);
            } else {
                assert!(value <= prev, "channel rose from {} to {}", prev, value);
            }
        }
        previous = Some(value);
    }
}
