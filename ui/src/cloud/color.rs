//! Sequential color ramp over word values.

use super::scale::ValueExtent;

/// Turbo ramp (polynomial approximation) at `t` in `[0, 1]`, as `(r, g, b)`.
pub fn turbo(t: f64) -> (u8, u8, u8) {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let r = 34.61 + t * (1172.33 - t * (10793.56 - t * (33300.12 - t * (38394.49 - t * 14825.05))));
    let g = 23.31 + t * (557.33 + t * (1225.33 - t * (3574.96 - t * (1073.77 + t * 707.56))));
    let b = 27.2 + t * (3211.1 - t * (15327.97 - t * (27814.0 - t * (22569.18 - t * 6838.66))));
    (channel(r), channel(g), channel(b))
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Maps values in the current word set onto the turbo ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    extent: ValueExtent,
}

impl ColorScale {
    pub fn new(extent: ValueExtent) -> Self {
        Self { extent }
    }

    /// Position of `value` on the ramp; a flat set sits in the middle.
    pub fn position(&self, value: f64) -> f64 {
        let span = self.extent.max - self.extent.min;
        if span == 0.0 {
            0.5
        } else {
            (value - self.extent.min) / span
        }
    }

    /// CSS color for `value`.
    pub fn color(&self, value: f64) -> String {
        let (r, g, b) = turbo(self.position(value));
        format!("rgb({r}, {g}, {b})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints() {
        assert_eq!(turbo(0.0), (35, 23, 27));
        assert_eq!(turbo(1.0), (144, 12, 0));
    }

    #[test]
    fn ramp_clamps_outside_unit_interval() {
        assert_eq!(turbo(-3.0), turbo(0.0));
        assert_eq!(turbo(7.0), turbo(1.0));
        assert_eq!(turbo(f64::NAN), turbo(0.0));
    }

    #[test]
    fn scale_spans_extent() {
        let scale = ColorScale::new(ValueExtent { min: 2.0, max: 12.0 });
        assert_eq!(scale.position(2.0), 0.0);
        assert_eq!(scale.position(7.0), 0.5);
        assert_eq!(scale.position(12.0), 1.0);
        assert_eq!(scale.color(2.0), "rgb(35, 23, 27)");
    }

    #[test]
    fn flat_extent_uses_midpoint() {
        let scale = ColorScale::new(ValueExtent { min: 4.0, max: 4.0 });
        assert_eq!(scale.position(4.0), 0.5);
        let (r, g, b) = turbo(0.5);
        assert_eq!(scale.color(4.0), format!("rgb({r}, {g}, {b})"));
    }
}
