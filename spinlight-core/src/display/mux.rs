//! Two-digit display multiplexer
//!
//! Only one digit is lit at a time. Each refresh writes the active digit's
//! frame and then hands over to the other digit, so at a few hundred
//! refreshes per second both digits appear steady.

use super::segment::{encode, glyph_index, DigitFrame, DigitSelect};
use crate::mode::SelectorState;
use crate::traits::DigitOutput;

/// Multiplexer state: which digit the next refresh drives
#[derive(Debug, Clone, Default)]
pub struct DisplayMultiplexer {
    active: DigitSelect,
}

impl DisplayMultiplexer {
    /// Create a multiplexer starting on the right digit
    pub const fn new() -> Self {
        Self {
            active: DigitSelect::Right,
        }
    }

    /// Digit driven by the next refresh
    pub fn active_digit(&self) -> DigitSelect {
        self.active
    }

    /// Frame for the active digit
    pub fn frame(&self, selector: SelectorState, finished: bool) -> DigitFrame {
        let index = glyph_index(self.active, selector);
        DigitFrame::new(encode(index, finished), self.active)
    }

    /// Compute the active digit's frame and advance to the other digit
    pub fn next_frame(&mut self, selector: SelectorState, finished: bool) -> DigitFrame {
        let frame = self.frame(selector, finished);
        self.active = self.active.toggled();
        frame
    }

    /// Write one frame to the display bus
    ///
    /// The active digit toggles even if the write fails, so a flaky bus
    /// cannot freeze the display on one digit.
    pub fn refresh<B: DigitOutput>(
        &mut self,
        selector: SelectorState,
        finished: bool,
        bus: &mut B,
    ) -> Result<DigitFrame, B::Error> {
        let frame = self.next_frame(selector, finished);
        bus.write_frame(frame)?;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::segment::SegmentMask;
    use core::convert::Infallible;

    #[derive(Default)]
    struct MockBus {
        frames: [Option<DigitFrame>; 4],
        writes: usize,
    }

    impl DigitOutput for MockBus {
        type Error = Infallible;

        fn write_frame(&mut self, frame: DigitFrame) -> Result<(), Infallible> {
            self.frames[self.writes % 4] = Some(frame);
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_alternates_digits() {
        let mut mux = DisplayMultiplexer::new();
        let selector = SelectorState::new(1, false);

        let first = mux.next_frame(selector, false);
        let second = mux.next_frame(selector, false);
        let third = mux.next_frame(selector, false);

        assert_eq!(first.digit, DigitSelect::Right);
        assert_eq!(second.digit, DigitSelect::Left);
        assert_eq!(third.digit, DigitSelect::Right);
    }

    #[test]
    fn test_digit_contents() {
        let mut mux = DisplayMultiplexer::new();

        let right = mux.next_frame(SelectorState::new(2, true), false);
        let left = mux.next_frame(SelectorState::new(2, true), false);
        assert_eq!(right.segments, SegmentMask::BAR_MIDDLE);
        assert_eq!(left.segments, SegmentMask::LETTER_E);

        let right = mux.next_frame(SelectorState::new(0, false), false);
        let left = mux.next_frame(SelectorState::new(0, false), false);
        assert_eq!(right.segments, SegmentMask::BAR_BOTTOM);
        assert_eq!(left.segments, SegmentMask::LETTER_N);
    }

    #[test]
    fn test_error_level_shows_e() {
        let mux = DisplayMultiplexer::new();
        let frame = mux.frame(SelectorState::new(3, false), false);
        assert_eq!(frame.segments, SegmentMask::LETTER_E);
    }

    #[test]
    fn test_finished_on_both_digits() {
        let mut mux = DisplayMultiplexer::new();
        let selector = SelectorState::new(1, true);

        let right = mux.next_frame(selector, true);
        let left = mux.next_frame(selector, true);
        assert_eq!(right.segments, SegmentMask::RING);
        assert_eq!(left.segments, SegmentMask::RING);
    }

    #[test]
    fn test_refresh_writes_bus() {
        let mut mux = DisplayMultiplexer::new();
        let mut bus = MockBus::default();
        let selector = SelectorState::new(1, false);

        let frame = mux.refresh(selector, false, &mut bus).unwrap();
        assert_eq!(bus.writes, 1);
        assert_eq!(bus.frames[0], Some(frame));
        assert_eq!(frame.segments, SegmentMask::BAR_TOP);
        assert_eq!(frame.digit, DigitSelect::Right);

        let frame = mux.refresh(selector, false, &mut bus).unwrap();
        assert_eq!(bus.frames[1], Some(frame));
        assert_eq!(frame.segments, SegmentMask::LETTER_N);
        assert_eq!(frame.digit, DigitSelect::Left);
        assert_eq!(mux.active_digit(), DigitSelect::Right);
    }
}
