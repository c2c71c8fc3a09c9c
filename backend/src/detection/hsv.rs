//! 8-bit RGB to HSV conversion.
//!
//! Hue is stored in half-degree units (`0..=179`), saturation and value in `0..=255`.
//! The arithmetic is the fixed-point scheme used by OpenCV's `COLOR_BGR2HSV` on 8-bit
//! images, so thresholds written against that convention land on the same pixels.

use lazy_static::lazy_static;

const HSV_SHIFT: u32 = 12;
const HALF: i32 = 1 << (HSV_SHIFT - 1);
const HUE_RANGE: i32 = 180;

lazy_static! {
    static ref SATURATION_DIV: [i32; 256] = division_table(|i| (255 << HSV_SHIFT) as f64 / i);
    static ref HUE_DIV: [i32; 256] =
        division_table(|i| (HUE_RANGE << HSV_SHIFT) as f64 / (6.0 * i));
}

fn division_table(f: impl Fn(f64) -> f64) -> [i32; 256] {
    let mut table = [0; 256];
    for (i, slot) in table.iter_mut().enumerate().skip(1) {
        *slot = f(i as f64).round() as i32;
    }
    table
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let v = r.max(g).max(b);
    let diff = v - r.min(g).min(b);

    let s = (diff * SATURATION_DIV[v as usize] + HALF) >> HSV_SHIFT;

    let h = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    let mut h = (h * HUE_DIV[diff as usize] + HALF) >> HSV_SHIFT;
    if h < 0 {
        h += HUE_RANGE;
    }

    Hsv::new(h as u8, s as u8, v as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_has_zero_value() {
        assert_eq!(rgb_to_hsv(0, 0, 0), Hsv::new(0, 0, 0));
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv(255, 255, 255), Hsv::new(0, 0, 255));
        assert_eq!(rgb_to_hsv(128, 128, 128), Hsv::new(0, 0, 128));
    }

    #[test]
    fn primaries_use_half_degree_hue() {
        assert_eq!(rgb_to_hsv(255, 0, 0), Hsv::new(0, 255, 255));
        assert_eq!(rgb_to_hsv(0, 255, 0), Hsv::new(60, 255, 255));
        assert_eq!(rgb_to_hsv(0, 0, 255), Hsv::new(120, 255, 255));
        assert_eq!(rgb_to_hsv(255, 255, 0), Hsv::new(30, 255, 255));
    }

    #[test]
    fn browns_and_oranges() {
        assert_eq!(rgb_to_hsv(255, 128, 0), Hsv::new(15, 255, 255));
        // saddle brown
        assert_eq!(rgb_to_hsv(139, 69, 19), Hsv::new(13, 220, 139));
    }

    #[test]
    fn hues_just_below_red_wrap_to_top_of_range() {
        // magenta-red: raw hue is negative before wrapping
        let hsv = rgb_to_hsv(255, 0, 64);
        assert!(hsv.h > 160 && hsv.h < 180, "hue {}", hsv.h);
        assert_eq!(hsv.v, 255);
    }

    #[test]
    fn hue_never_reaches_180() {
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(5) {
                for b in (0..=255).step_by(5) {
                    let hsv = rgb_to_hsv(r as u8, g as u8, b as u8);
                    assert!(hsv.h < 180, "rgb({}, {}, {}) -> {:?}", r, g, b, hsv);
                }
            }
        }
    }
}
