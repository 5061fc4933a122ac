//! Seven-segment digit bus
//!
//! Seven segment lines shared by both digits plus one digit select line.
//! The lines are not written atomically, so a frame is applied as blank,
//! select, segments. A digit never lights with the other digit's glyph.

use embedded_hal::digital::{OutputPin, PinState};
use spinlight_core::display::{DigitFrame, DigitSelect, SegmentMask};
use spinlight_core::traits::DigitOutput;

/// Digit bus on eight GPIO outputs
pub struct SegmentPins<P> {
    /// Segments `a` to `g`
    segments: [P; 7],
    select: P,
    current: Option<DigitFrame>,
}

impl<P: OutputPin> SegmentPins<P> {
    /// Take ownership of the pins and blank the display
    pub fn new(segments: [P; 7], select: P) -> Result<Self, P::Error> {
        let mut bus = Self {
            segments,
            select,
            current: None,
        };
        bus.write_segments(SegmentMask::BLANK)?;
        bus.select.set_low()?;
        Ok(bus)
    }

    /// Frame last written
    pub fn current(&self) -> Option<DigitFrame> {
        self.current
    }

    fn write_segments(&mut self, mask: SegmentMask) -> Result<(), P::Error> {
        for (segment, pin) in self.segments.iter_mut().enumerate() {
            pin.set_state(PinState::from(mask.is_lit(segment as u8)))?;
        }
        Ok(())
    }

    fn write_select(&mut self, digit: DigitSelect) -> Result<(), P::Error> {
        self.select.set_state(PinState::from(digit.is_high()))
    }
}

impl<P: OutputPin> DigitOutput for SegmentPins<P> {
    type Error = P::Error;

    fn write_frame(&mut self, frame: DigitFrame) -> Result<(), Self::Error> {
        let switching = self.current.map_or(true, |f| f.digit != frame.digit);
        // Unknown bus state until the write completes
        self.current = None;
        if switching {
            self.write_segments(SegmentMask::BLANK)?;
            self.write_select(frame.digit)?;
        }
        self.write_segments(frame.segments)?;
        self.current = Some(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;

    fn bus() -> SegmentPins<MockPin> {
        SegmentPins::new(Default::default(), MockPin::default()).unwrap()
    }

    fn lit(bus: &SegmentPins<MockPin>) -> u8 {
        bus.segments
            .iter()
            .enumerate()
            .fold(0, |acc, (i, pin)| acc | ((pin.high as u8) << i))
    }

    #[test]
    fn test_starts_blank() {
        let bus = bus();
        assert_eq!(lit(&bus), 0);
        assert!(!bus.select.high);
        assert_eq!(bus.current(), None);
    }

    #[test]
    fn test_frame_sets_select_and_segments() {
        let mut bus = bus();

        bus.write_frame(DigitFrame::new(SegmentMask::LETTER_E, DigitSelect::Left))
            .unwrap();
        assert!(bus.select.high);
        assert_eq!(lit(&bus), SegmentMask::LETTER_E.bits());

        bus.write_frame(DigitFrame::new(SegmentMask::BAR_MIDDLE, DigitSelect::Right))
            .unwrap();
        assert!(!bus.select.high);
        assert_eq!(lit(&bus), SegmentMask::BAR_MIDDLE.bits());
    }

    #[test]
    fn test_blanks_before_switching_digit() {
        let mut bus = bus();
        bus.write_frame(DigitFrame::new(SegmentMask::RING, DigitSelect::Right))
            .unwrap();
        let select_writes = bus.select.writes;
        let segment_writes = bus.segments[0].writes;

        // Segment `a` is lit in both glyphs; it still goes dark across the switch
        bus.write_frame(DigitFrame::new(SegmentMask::LETTER_E, DigitSelect::Left))
            .unwrap();
        assert_eq!(bus.select.writes, select_writes + 1);
        assert_eq!(bus.segments[0].writes, segment_writes + 2);
        assert!(bus.segments[0].high);
    }
}
