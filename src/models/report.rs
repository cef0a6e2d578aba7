//! Serializable command results with plain-text renderings

use std::fmt;

use color_core::{
    contrast_ratio, readable_text_color, relative_luminance, Cluster, Cmyk, Deficiency, Hsb, Hsl,
    Hwb, Oklch, Rgb, WcagLevel,
};
use serde::Serialize;

/// Every representation of one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub hex: Rgb,
    pub rgb: [u8; 3],
    pub hsl: Hsl,
    pub hsb: Hsb,
    pub cmyk: Cmyk,
    pub hwb: Hwb,
    pub oklch: Oklch,
    pub luminance: f64,
    /// Black or white, whichever reads better on this color
    pub text_color: Rgb,
}

impl From<Rgb> for ColorReport {
    fn from(rgb: Rgb) -> Self {
        Self {
            hex: rgb,
            rgb: rgb.to_bytes(),
            hsl: Hsl::from(rgb),
            hsb: Hsb::from(rgb),
            cmyk: Cmyk::from(rgb),
            hwb: Hwb::from(rgb),
            oklch: Oklch::from(rgb),
            luminance: relative_luminance(rgb),
            text_color: readable_text_color(rgb),
        }
    }
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        let pct = |v: f64| (v * 100.0).round();
        writeln!(f, "HEX    {}", self.hex)?;
        writeln!(f, "RGB    rgb({r}, {g}, {b})")?;
        writeln!(
            f,
            "HSL    hsl({:.0}, {}%, {}%)",
            self.hsl.h,
            pct(self.hsl.s),
            pct(self.hsl.l)
        )?;
        writeln!(
            f,
            "HSB    hsb({:.0}, {}%, {}%)",
            self.hsb.h,
            pct(self.hsb.s),
            pct(self.hsb.b)
        )?;
        writeln!(
            f,
            "CMYK   cmyk({}%, {}%, {}%, {}%)",
            self.cmyk.c, self.cmyk.m, self.cmyk.y, self.cmyk.k
        )?;
        writeln!(
            f,
            "HWB    hwb({:.0} {:.0}% {:.0}%)",
            self.hwb.h, self.hwb.w, self.hwb.b
        )?;
        writeln!(
            f,
            "OKLCH  oklch({:.3} {:.3} {:.1})",
            self.oklch.l, self.oklch.c, self.oklch.h
        )?;
        writeln!(f, "LUM    {:.4}", self.luminance)?;
        write!(f, "TEXT   {}", self.text_color)
    }
}

/// Contrast between a foreground and background color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastReport {
    pub foreground: Rgb,
    pub background: Rgb,
    pub ratio: f64,
    pub level: WcagLevel,
}

impl ContrastReport {
    pub fn new(foreground: Rgb, background: Rgb) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            foreground,
            background,
            ratio,
            level: color_core::wcag_level(ratio),
        }
    }
}

fn verdict(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "fail"
    }
}

impl fmt::Display for ContrastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} on {}: {:.2}:1",
            self.foreground, self.background, self.ratio
        )?;
        writeln!(f, "AA         {}", verdict(self.level.aa))?;
        writeln!(f, "AA large   {}", verdict(self.level.aa_large))?;
        writeln!(f, "AAA        {}", verdict(self.level.aaa))?;
        write!(f, "AAA large  {}", verdict(self.level.aaa_large))
    }
}

/// An accessible replacement for a foreground color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionReport {
    pub original: Rgb,
    pub background: Rgb,
    pub target_ratio: f64,
    pub suggestion: Rgb,
    pub ratio: f64,
    /// The suggestion still misses the target (only possible for black/white)
    pub below_target: bool,
}

impl SuggestionReport {
    pub fn new(original: Rgb, background: Rgb, target_ratio: f64, suggestion: Rgb) -> Self {
        let ratio = contrast_ratio(suggestion, background);
        Self {
            original,
            background,
            target_ratio,
            suggestion,
            ratio,
            below_target: ratio < target_ratio,
        }
    }
}

impl fmt::Display for SuggestionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}:1 on {})", self.suggestion, self.ratio, self.background)?;
        if self.below_target {
            write!(f, " - target {:.2}:1 is unreachable", self.target_ratio)?;
        }
        Ok(())
    }
}

/// A palette as seen with a color-vision deficiency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub deficiency: Deficiency,
    pub original: Vec<Rgb>,
    pub simulated: Vec<Rgb>,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.deficiency)?;
        for (original, simulated) in self.original.iter().zip(&self.simulated) {
            write!(f, "\n{original} -> {simulated}")?;
        }
        Ok(())
    }
}

/// Extraction result, one line per cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClusterReport(pub Vec<Cluster>);

impl fmt::Display for ClusterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total: usize = self.0.iter().map(|c| c.population).sum();
        for (i, cluster) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if total == 0 {
                write!(f, "{}", cluster.color)?;
            } else {
                let share = 100.0 * cluster.population as f64 / total as f64;
                write!(f, "{}  {:5.1}%", cluster.color, share)?;
            }
        }
        Ok(())
    }
}
