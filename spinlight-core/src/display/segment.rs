//! Seven-segment glyph encoding
//!
//! Segment bits follow the usual `a`-`g` order (bit 0 = `a`, bit 6 = `g`).
//! Bit 7 is not a segment; the digit select travels beside the mask in a
//! [`DigitFrame`].

use crate::mode::SelectorState;

/// 7-bit segment mask for one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentMask(u8);

impl SegmentMask {
    /// Segment `a` only (top bar)
    pub const BAR_TOP: Self = Self(0x01);
    /// Segment `g` only (middle bar)
    pub const BAR_MIDDLE: Self = Self(0x40);
    /// Segment `d` only (bottom bar)
    pub const BAR_BOTTOM: Self = Self(0x08);
    /// Letter `E`
    pub const LETTER_E: Self = Self(0x79);
    /// Letter `n`
    pub const LETTER_N: Self = Self(0x54);
    /// Outer ring (`a`-`f`), shown when a cycle has finished
    pub const RING: Self = Self(0x3F);
    /// All segments off
    pub const BLANK: Self = Self(0);

    /// Create a mask from raw bits (bit 7 is dropped)
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0x7F)
    }

    /// Raw 7-bit value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if segment `n` (0 = `a` ... 6 = `g`) is lit
    pub const fn is_lit(self, segment: u8) -> bool {
        segment < 7 && self.0 & (1 << segment) != 0
    }
}

/// Which of the two multiplexed digits is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitSelect {
    /// Right digit: water level
    #[default]
    Right,
    /// Left digit: cycle mode
    Left,
}

impl DigitSelect {
    /// The other digit
    pub const fn toggled(self) -> Self {
        match self {
            DigitSelect::Right => DigitSelect::Left,
            DigitSelect::Left => DigitSelect::Right,
        }
    }

    /// Level of the digit select line (high = left digit)
    pub const fn is_high(self) -> bool {
        matches!(self, DigitSelect::Left)
    }
}

/// One complete display write: segments plus digit select
///
/// Frames are always written whole so a digit never shows the other
/// digit's segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitFrame {
    pub segments: SegmentMask,
    pub digit: DigitSelect,
}

impl DigitFrame {
    pub const fn new(segments: SegmentMask, digit: DigitSelect) -> Self {
        Self { segments, digit }
    }
}

/// Glyph table indexed by display content
///
/// Indices 0-2 are water levels, 3 doubles as the level error and the
/// extended-mode symbol, 4 is the normal-mode symbol.
const GLYPHS: [SegmentMask; 5] = [
    SegmentMask::BAR_BOTTOM,
    SegmentMask::BAR_TOP,
    SegmentMask::BAR_MIDDLE,
    SegmentMask::LETTER_E,
    SegmentMask::LETTER_N,
];

/// Glyph index for the extended-mode symbol
pub const EXTENDED_GLYPH: u8 = 3;
/// Glyph index for the normal-mode symbol
pub const NORMAL_GLYPH: u8 = 4;

/// Encode a glyph index for display
///
/// Once a cycle has finished both digits show the ring regardless of the
/// index. Out-of-range indices render blank.
pub const fn encode(index: u8, finished: bool) -> SegmentMask {
    if finished {
        return SegmentMask::RING;
    }
    if (index as usize) < GLYPHS.len() {
        SegmentMask::new(GLYPHS[index as usize].bits())
    } else {
        SegmentMask::BLANK
    }
}

/// Glyph index shown on a digit for the given selector state
pub const fn glyph_index(digit: DigitSelect, selector: SelectorState) -> u8 {
    match digit {
        DigitSelect::Right => selector.water_level.value(),
        DigitSelect::Left => {
            if selector.extended_selected {
                EXTENDED_GLYPH
            } else {
                NORMAL_GLYPH
            }
        }
    }
}
