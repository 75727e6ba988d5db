use crate::models::Vec2;

/// Timed correction animation that moves the content group from a rejected
/// position to the nearest allowed one. Advanced by the caller's frame clock
/// via [`BounceBack::advance`]; linear interpolation over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct BounceBack {
    from: Vec2,
    to: Vec2,
    duration: f64,
    elapsed: f64,
}

impl BounceBack {
    pub fn new(from: Vec2, to: Vec2, duration: f64) -> Self {
        BounceBack {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the interpolated position. Once
    /// the duration is reached the returned position is exactly `to`.
    pub fn advance(&mut self, dt: f64) -> Vec2 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.sample()
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }

    fn sample(&self) -> Vec2 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        Vec2::new(
            self.from.x + (self.to.x - self.from.x) * t,
            self.from.y + (self.to.y - self.from.y) * t,
        )
    }
}
