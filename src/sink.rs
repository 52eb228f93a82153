//! Single-pixel output abstraction.
//!
//! Defines the [`LedSink`] trait the transition routines drive, and adapters
//! for the two common ways a single RGB LED is wired up: an addressable pixel
//! behind a [`smart_leds::SmartLedsWrite`] driver, or three PWM channels.

use crate::colors::{BLACK, Color};
use embedded_hal::pwm::SetDutyCycle;
use smart_leds::{RGB8, SmartLedsWrite};

/// Trait for abstracting a single RGB pixel.
///
/// Setting a color only stages it; nothing is visible until [`commit`](LedSink::commit)
/// writes it to the hardware.
pub trait LedSink {
    /// Error returned when the hardware write fails.
    type Error;

    /// Returns the last committed color.
    fn current(&self) -> Color;

    /// Stages `color` for the next commit.
    fn set(&mut self, color: Color);

    /// Writes the staged color to the hardware.
    fn commit(&mut self) -> Result<(), Self::Error>;
}

impl<T: LedSink + ?Sized> LedSink for &mut T {
    type Error = T::Error;

    fn current(&self) -> Color {
        (**self).current()
    }

    fn set(&mut self, color: Color) {
        (**self).set(color);
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        (**self).commit()
    }
}

/// A single addressable pixel (WS2812, SK6812, APA106, ...) behind a
/// `smart-leds` driver.
///
/// The pixel starts out black. Nothing is written until the first commit.
pub struct SmartLedPixel<W> {
    writer: W,
    pending: Color,
    committed: Color,
}

impl<W> SmartLedPixel<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    /// Wraps a driver that owns a one-pixel strip.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending: BLACK,
            committed: BLACK,
        }
    }

    /// Returns the wrapped driver.
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W> LedSink for SmartLedPixel<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    type Error = W::Error;

    fn current(&self) -> Color {
        self.committed
    }

    fn set(&mut self, color: Color) {
        self.pending = color;
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        let pixel = RGB8::new(self.pending.red, self.pending.green, self.pending.blue);
        self.writer.write(core::iter::once(pixel))?;
        self.committed = self.pending;
        Ok(())
    }
}

/// An RGB LED driven by three PWM channels.
///
/// Handles the 8-bit to duty cycle conversion and common anode/cathode logic.
pub struct PwmPixel<R, G, B> {
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
    pending: Color,
    committed: Color,
}

impl<R, G, B> PwmPixel<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle<Error = R::Error>,
    B: SetDutyCycle<Error = R::Error>,
{
    /// Create a new RGB LED controller
    ///
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `green` - PWM channel for green LED
    /// * `blue` - PWM channel for blue LED
    /// * `common_anode` - true for common anode LED (inverted logic), false for common cathode
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        Self {
            red,
            green,
            blue,
            common_anode,
            pending: BLACK,
            committed: BLACK,
        }
    }

    /// Returns the wrapped channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

/// Scales an 8-bit channel onto `0..=max_duty`.
fn channel_to_duty(value: u8, max_duty: u16, common_anode: bool) -> u16 {
    let duty = (u32::from(value) * u32::from(max_duty) / 255) as u16;

    if common_anode { max_duty - duty } else { duty }
}

impl<R, G, B> LedSink for PwmPixel<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle<Error = R::Error>,
    B: SetDutyCycle<Error = R::Error>,
{
    type Error = R::Error;

    fn current(&self) -> Color {
        self.committed
    }

    fn set(&mut self, color: Color) {
        self.pending = color;
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        let color = self.pending;
        let anode = self.common_anode;

        let duty = channel_to_duty(color.red, self.red.max_duty_cycle(), anode);
        self.red.set_duty_cycle(duty)?;
        let duty = channel_to_duty(color.green, self.green.max_duty_cycle(), anode);
        self.green.set_duty_cycle(duty)?;
        let duty = channel_to_duty(color.blue, self.blue.max_duty_cycle(), anode);
        self.blue.set_duty_cycle(duty)?;

        self.committed = color;
        Ok(())
    }
}
