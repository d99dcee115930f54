//! Color theme definitions for the UI.
//!
//! All color constants are defined here for consistency and easy theme
//! changes. The palette follows the original app: dark purple headlines,
//! white body text, and a bright "alien green" accent.

use ratatui::style::Color;

/// Primary accent color (the original's dark purple)
pub const PRIMARY: Color = Color::Rgb(147, 112, 219); // Medium purple
/// Secondary accent color (used for the countdown number)
pub const SECONDARY: Color = Color::Rgb(186, 148, 255); // Light purple
/// The original's "alien green" sparkle color
pub const ACCENT: Color = Color::Rgb(110, 255, 140);
/// Sun yellow for the header and mascots
pub const SUN: Color = Color::Rgb(250, 204, 21);
/// Muted text color
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Brighter gray
/// Error/danger color
pub const ERROR: Color = Color::Rgb(251, 113, 133); // Bright rose
/// Warning color (used for the reminder dialog)
pub const WARNING: Color = Color::Rgb(251, 191, 36); // Bright amber
/// Success color
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Border color
pub const BORDER: Color = Color::Rgb(129, 140, 248); // Light indigo
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
