//! Assertion helpers for tests.

use chromakit::color_core::Rgb;

/// Assert two colors differ by at most `tolerance` on every channel.
pub fn assert_close(actual: Rgb, expected: Rgb, tolerance: u8) {
    let diff = |a: u8, b: u8| a.abs_diff(b);
    let worst = diff(actual.r, expected.r)
        .max(diff(actual.g, expected.g))
        .max(diff(actual.b, expected.b));
    assert!(
        worst <= tolerance,
        "Expected {actual} within {tolerance} of {expected}, off by {worst}"
    );
}

/// Assert a hex list parses and equals `expected`.
pub fn assert_hexes(colors: &[Rgb], expected: &[&str]) {
    let actual: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
    pretty_assertions::assert_eq!(actual, expected);
}
