use super::easing::Easing;

/// Interpolates a scalar from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    /// Accumulated time; may run past `duration` so the overshoot can be
    /// handed to whatever follows.
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Step the tween by `dt` seconds, returning `(value, is_complete)`.
    ///
    /// Once complete the value is exactly `to`.
    pub fn advance(&mut self, dt: f32) -> (f32, bool) {
        self.elapsed += dt.max(0.0);
        (self.value(), self.is_complete())
    }

    /// Normalized time in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }

    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Time advanced beyond `duration`.
    pub fn overshoot(&self) -> f32 {
        (self.elapsed - self.duration).max(0.0)
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}
