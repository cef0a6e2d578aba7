//! Parsers for compound command-line values

use color_core::{GradientStop, Rgb};

use crate::error::CliError;

/// Parse a lock of the form `INDEX=HEX`, e.g. `2=#8B5CF6`.
pub fn parse_lock(s: &str) -> Result<(usize, Rgb), CliError> {
    let (index, hex) = s
        .split_once('=')
        .ok_or_else(|| CliError::invalid_argument(s, "expected INDEX=HEX"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|_| CliError::invalid_argument(s, "slot index must be a non-negative integer"))?;
    let color = hex
        .parse()
        .map_err(|e| CliError::invalid_argument(s, format!("{e}")))?;
    Ok((index, color))
}

/// Parse a gradient stop of the form `HEX@POSITION`, e.g. `#FF0000@25`.
///
/// The position is a percentage; out-of-range values are clamped later by
/// [`color_core::Gradient::new`].
pub fn parse_stop(s: &str) -> Result<GradientStop, CliError> {
    let (hex, position) = s
        .rsplit_once('@')
        .ok_or_else(|| CliError::invalid_argument(s, "expected HEX@POSITION"))?;
    let color = hex
        .parse()
        .map_err(|e| CliError::invalid_argument(s, format!("{e}")))?;
    let position: f64 = position
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| CliError::invalid_argument(s, "position must be a number"))?;
    if !position.is_finite() {
        return Err(CliError::invalid_argument(s, "position must be finite"));
    }
    Ok(GradientStop::new(color, position))
}

/// One lock slot per swatch. Locks past the end of the palette are dropped.
pub fn build_locks(count: usize, locks: &[(usize, Rgb)]) -> Vec<Option<Rgb>> {
    let mut slots = vec![None; count];
    for &(index, color) in locks {
        match slots.get_mut(index) {
            Some(slot) => *slot = Some(color),
            None => tracing::warn!(index, count, "Lock index outside palette, ignoring"),
        }
    }
    slots
}
