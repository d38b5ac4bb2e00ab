//! Fallback palette for series keys without a configured color.
//!
//! Lookup is a pure function of the key so the same key always maps to the
//! same slot, across calls and across processes.

use super::config::ThemeMode;

/// Light-mode palette slots, matching the stock `--chart-1..5` tokens.
const LIGHT_SLOTS: [&str; 5] = [
    "hsl(12 76% 61%)",
    "hsl(173 58% 39%)",
    "hsl(197 37% 24%)",
    "hsl(43 74% 66%)",
    "hsl(27 87% 67%)",
];

/// Dark-mode palette slots.
const DARK_SLOTS: [&str; 5] = [
    "hsl(220 70% 50%)",
    "hsl(160 60% 45%)",
    "hsl(30 80% 55%)",
    "hsl(280 65% 60%)",
    "hsl(340 75% 55%)",
];

/// Returns the deterministic fallback color for a series key.
///
/// The slot index is derived from an FNV-1a hash of the key bytes. The
/// standard library hasher is seeded per process, which would break the
/// stability contract, so the hash is computed inline.
#[must_use]
pub fn fallback_color(key: &str, mode: ThemeMode) -> &'static str {
    let slots = match mode {
        ThemeMode::Light => &LIGHT_SLOTS,
        ThemeMode::Dark => &DARK_SLOTS,
    };
    slots[(fnv1a_64(key.as_bytes()) % slots.len() as u64) as usize]
}

/// Emits the root `--chart-1..5` token definitions for both theme modes.
///
/// Page shells include this once so configs written against the stock
/// tokens resolve in either mode.
#[must_use]
pub fn root_palette_css() -> String {
    let mut out = String::from(":root {\n");
    for (index, color) in LIGHT_SLOTS.iter().enumerate() {
        out.push_str(&format!("  --chart-{}: {color};\n", index + 1));
    }
    out.push_str("}\n.dark {\n");
    for (index, color) in DARK_SLOTS.iter().enumerate() {
        out.push_str(&format!("  --chart-{}: {color};\n", index + 1));
    }
    out.push_str("}\n");
    out
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
