//! SVG empire map and share text.
//!
//! Pure string formatting. Numbers go through `{:.N}` so a NaN balance
//! shows up as `NaN` rather than failing.

use solciv_common::constants::{DEFAULT_MAP_CREDIT, DEFAULT_SHARE_CREDIT, GUEST_NAME};
use solciv_common::types::WalletProfile;
use solciv_types::config::RenderConfig;

use crate::layout::Shape;

pub const MAP_TITLE: &str = "SOLCIV EMPIRE MAP";
pub const SVG_MIME: &str = "image/svg+xml";
pub const TEXT_MIME: &str = "text/plain; charset=utf-8";

/// Text baked into the artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub credit: String,
    pub share_credit: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            credit: DEFAULT_MAP_CREDIT.to_string(),
            share_credit: DEFAULT_SHARE_CREDIT.to_string(),
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(c: &RenderConfig) -> Self {
        Self {
            credit: c.credit.clone(),
            share_credit: c.share_credit.clone(),
        }
    }
}

/// Map label for an address: `GUEST` when absent, short addresses as-is,
/// otherwise `abcd…wxyz`.
pub fn display_name(address: Option<&str>) -> String {
    let Some(addr) = address.filter(|a| !a.is_empty()) else {
        return GUEST_NAME.to_string();
    };
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() < 10 {
        return addr.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// Download filename for the map.
pub fn svg_filename(name: &str) -> String {
    format!("solciv_{name}.svg")
}

/// Escape text content for inclusion in SVG/XML.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// `{:.N}` that spells infinities `Infinity` / `-Infinity`. NaN stays `NaN`.
fn fixed(v: f64, places: usize) -> String {
    if v.is_infinite() {
        let sign = if v < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else {
        format!("{v:.places$}")
    }
}

fn shape_element(s: &Shape) -> String {
    format!(
        r##"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="white" fill-opacity="{:.2}" stroke="#111" stroke-width="0.4" />"##,
        s.x, s.y, s.r, s.opacity
    )
}

/// The full SVG document (1100×620, viewBox 110×62).
pub fn render_svg(
    profile: &WalletProfile,
    name: &str,
    shapes: &[Shape],
    density: f64,
    credit: &str,
) -> String {
    let subtitle = escape_xml(&format!("{} • {}", name, profile.tier));
    let meta1 = format!(
        "Estate: {} • SOL: {} • Token Accts: {}",
        profile.estate.name,
        fixed(profile.balance, 4),
        profile.token_account_count
    );
    let meta2 = format!("$SOLCIV: {} • Boost: x{:.2}", profile.derived_currency, profile.boost);

    let circles: Vec<String> = shapes.iter().map(shape_element).collect();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="1100" height="620" viewBox="0 0 110 62">
  <rect width="110" height="62" fill="#0b0f14"/>

  <g transform="translate(4,10)">
    <text x="0" y="0" fill="#ecf0f1" font-size="4" font-weight="700">{title}</text>
    <text x="0" y="5" fill="#bdc3c7" font-size="3.2">{subtitle}</text>
    <text x="0" y="9" fill="#7f8c8d" font-size="2.6">{meta1}</text>
    <text x="0" y="12.5" fill="#7f8c8d" font-size="2.6">{meta2}</text>
  </g>

  <g transform="translate(6,18)">
    <circle cx="49" cy="23" r="23" fill="none" stroke="#2ecc71" stroke-opacity="0.45" stroke-width="{outer:.2}"/>
    <circle cx="49" cy="23" r="16" fill="none" stroke="#34495e" stroke-opacity="0.55" stroke-width="{inner:.2}"/>

    {circles}
    <text x="49" y="23" text-anchor="middle" dominant-baseline="middle" font-size="{star:.2}" fill="#ecf0f1">✶</text>
  </g>

  <text x="108" y="60.5" text-anchor="end" fill="#7f8c8d" font-size="2.2">{credit}</text>
</svg>"##,
        title = MAP_TITLE,
        subtitle = subtitle,
        meta1 = escape_xml(&meta1),
        meta2 = escape_xml(&meta2),
        outer = 1.8 + density,
        inner = 1.0 + density,
        circles = circles.join("\n"),
        star = 10.0 + 6.0 * density,
        credit = escape_xml(credit),
    )
}

/// Plain-text share blurb.
pub fn share_text(profile: &WalletProfile, share_credit: &str) -> String {
    format!(
        "My SolCiv empire is {} • SOL {} • Estate {} • $SOLCIV {}.\n{}",
        profile.tier,
        fixed(profile.balance, 4),
        profile.estate.name,
        profile.derived_currency,
        share_credit
    )
}
