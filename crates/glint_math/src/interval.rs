/// A closed range of `f32` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    ///
    /// NaN clamps to `min` so a corrupted channel degrades to black rather than
    /// propagating.
    pub fn clamp(&self, x: f32) -> f32 {
        if x.is_nan() {
            return self.min;
        }
        x.clamp(self.min, self.max)
    }

    /// The unit interval, used for color channels.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Parameters strictly in front of a ray origin.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };
}
