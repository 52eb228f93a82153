#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: An 8-bit RGB color (`palette::Srgb<u8>`)
//! - **`LedSink`**: Trait to implement for your LED hardware (stage a color, then commit it)
//! - **`Transition`**: The interpolated colors between two endpoints
//! - **`transition`**: Fades an LED to a target color in fixed steps, ending exactly on the target
//! - **`wink`**: Blinks the current color off and back on
//! - **`Script`**: An ordered list of target colors with optional post effects
//! - **`Player`**: Owns one LED and plays transitions, winks and scripts on it
//! - **`Progress`**: Optional observer for step-by-step feedback
//!
//! Delays are taken from any `embedded_hal::delay::DelayNs` implementation.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod player;
pub mod progress;
pub mod script;
pub mod sink;
pub mod transition;
pub mod types;
pub mod wink;

pub use colors::{BLACK, BLUE, Color, GREEN, RED, WHITE, YELLOW, rgb};
pub use player::Player;
pub use progress::{Progress, TextProgress};
pub use script::{Script, ScriptBuilder};
pub use sink::{LedSink, PwmPixel, SmartLedPixel};
pub use transition::{Transition, transition};
pub use types::{
    ConfigError, PostEffect, ScriptError, ScriptStep, TransitionConfig, WinkConfig,
};
pub use wink::wink;
