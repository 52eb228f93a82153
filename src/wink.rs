//! Wink effect: blink the current color off and back on.

use crate::colors::BLACK;
use crate::sink::LedSink;
use crate::types::WinkConfig;
use embedded_hal::delay::DelayNs;

/// Blinks the sink's current color `config.repetitions` times.
///
/// Each cycle commits black, waits `off_delay_ms`, restores the color that was
/// committed on entry and waits `on_delay_ms`. The sink ends on its entry color.
///
/// # Errors
/// Returns the sink's error as soon as a commit fails.
pub fn wink<S, D>(sink: &mut S, delay: &mut D, config: &WinkConfig) -> Result<(), S::Error>
where
    S: LedSink + ?Sized,
    D: DelayNs + ?Sized,
{
    let color = sink.current();

    #[cfg(feature = "defmt")]
    defmt::trace!("wink x{=u8}", config.repetitions);

    for _ in 0..config.repetitions {
        sink.set(BLACK);
        sink.commit()?;
        delay.delay_ms(config.off_delay_ms);

        sink.set(color);
        sink.commit()?;
        delay.delay_ms(config.on_delay_ms);
    }

    Ok(())
}
