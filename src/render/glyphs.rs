//! Vector-stroke digit glyphs for on-screen numeric readouts.
//!
//! Each digit is a fixed set of straight segments on a 10×20 grid, in the
//! style of a seven-segment display. Readouts are always stroked in white;
//! there is no color parameter.

use super::framebuffer::FrameBuffer;
use super::rasterizer::draw_line;
use crate::colors;
use crate::math::vec2::Vec2;

/// Horizontal advance between digit cells.
pub const DIGIT_ADVANCE: f32 = 14.0;

/// A stroke on the digit grid: start and end offsets from the cell origin.
type Segment = ((f32, f32), (f32, f32));

#[rustfmt::skip]
const DIGIT_SEGMENTS: [&[Segment]; 10] = [
    // 0
    &[
        ((0.0, 0.0), (10.0, 0.0)),
        ((10.0, 20.0), (10.0, 0.0)),
        ((0.0, 0.0), (0.0, 20.0)),
        ((10.0, 20.0), (0.0, 20.0)),
    ],
    // 1
    &[
        ((10.0, 0.0), (10.0, 20.0)),
    ],
    // 2
    &[
        ((0.0, 0.0), (10.0, 0.0)),
        ((10.0, 0.0), (10.0, 10.0)),
        ((10.0, 10.0), (0.0, 10.0)),
        ((0.0, 10.0), (0.0, 20.0)),
        ((0.0, 20.0), (10.0, 20.0)),
    ],
    // 3
    &[
        ((0.0, 0.0), (10.0, 0.0)),
        ((10.0, 0.0), (10.0, 20.0)),
        ((0.0, 10.0), (10.0, 10.0)),
        ((0.0, 20.0), (10.0, 20.0)),
    ],
    // 4
    &[
        ((0.0, 0.0), (0.0, 10.0)),
        ((0.0, 10.0), (10.0, 10.0)),
        ((10.0, 0.0), (10.0, 20.0)),
    ],
    // 5
    &[
        ((0.0, 0.0), (10.0, 0.0)),
        ((0.0, 0.0), (0.0, 10.0)),
        ((10.0, 10.0), (0.0, 10.0)),
        ((10.0, 10.0), (10.0, 20.0)),
        ((0.0, 20.0), (10.0, 20.0)),
    ],
    // 6
    &[
        ((0.0, 0.0), (10.0, 0.0)),
        ((0.0, 0.0), (0.0, 20.0)),
        ((0.0, 10.0), (10.0, 10.0)),
        ((0.0, 20.0), (10.0, 20.0)),
        ((10.0, 10.0), (10.0, 20.0)),
    ],
    // 7
    &[
        ((0.0, 0.0), (10.0, 0.0)),
        ((10.0, 0.0), (10.0, 20.0)),
    ],
    // 8
    &[
        ((0.0, 0.0), (10.0, 0.0)),
        ((0.0, 0.0), (0.0, 20.0)),
        ((0.0, 10.0), (10.0, 10.0)),
        ((0.0, 20.0), (10.0, 20.0)),
        ((10.0, 0.0), (10.0, 20.0)),
    ],
    // 9
    &[
        ((0.0, 0.0), (10.0, 0.0)),
        ((0.0, 0.0), (0.0, 10.0)),
        ((0.0, 10.0), (10.0, 10.0)),
        ((10.0, 0.0), (10.0, 20.0)),
    ],
];

/// Renders `count` decimal digits of `number`, most significant first,
/// starting at `offset` and advancing [`DIGIT_ADVANCE`] pixels per digit.
pub fn draw_number(fb: &mut FrameBuffer, number: u64, offset: Vec2, count: u32) {
    let mut origin = offset;
    for i in 0..count {
        // Cells whose decimal place exceeds u64 range draw nothing but
        // still advance, keeping the remaining digits aligned.
        let Some(place) = 10u64.checked_pow(count - (i + 1)) else {
            origin.x += DIGIT_ADVANCE;
            continue;
        };
        let digit = (number / place) % 10;
        if let Some(segments) = DIGIT_SEGMENTS.get(digit as usize) {
            for &((x0, y0), (x1, y1)) in segments.iter() {
                draw_line(
                    fb,
                    origin.offset(x0, y0),
                    origin.offset(x1, y1),
                    colors::WHITE,
                );
            }
        }
        origin.x += DIGIT_ADVANCE;
    }
}
