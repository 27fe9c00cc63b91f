//! Frame-rate independent damping for the scroll position and the track.

/// Exponential approach of `current` towards `target` at rate `lambda`
/// per second.
pub fn damp(current: f64, target: f64, lambda: f64, dt: f64) -> f64 {
    let t = 1.0 - (-lambda * dt.max(0.0)).exp();
    current + (target - current) * t
}

/// Smooths the native scroll position. `lerp` is the per-frame blend at
/// 60 fps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSmoother {
    lerp: f64,
    current: Option<f64>,
}

impl ScrollSmoother {
    pub fn new(lerp: f64) -> Self {
        Self { lerp, current: None }
    }

    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let next = match self.current {
            Some(current) if self.lerp < 1.0 => damp(current, target, self.lerp * 60.0, dt),
            _ => target,
        };
        self.current = Some(next);
        next
    }
}

/// Scrub lag: chasing value that settles within roughly `lag` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrub {
    lag: f64,
    current: Option<f64>,
}

const SCRUB_SETTLE: f64 = 5.0;
const SCRUB_SNAP: f64 = 0.01;

impl Scrub {
    pub fn new(lag: f64) -> Self {
        Self { lag, current: None }
    }

    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let next = match self.current {
            Some(current) if self.lag > 0.0 => {
                let next = damp(current, target, SCRUB_SETTLE / self.lag, dt);
                if (target - next).abs() < SCRUB_SNAP {
                    target
                } else {
                    next
                }
            }
            _ => target,
        };
        self.current = Some(next);
        next
    }

    /// Last value handed out, if any.
    pub fn current(&self) -> Option<f64> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_scroll_sample_snaps() {
        let mut smoother = ScrollSmoother::new(0.05);
        assert_eq!(smoother.step(640.0, 0.016), 640.0);
    }

    #[test]
    fn smoother_moves_partway_and_never_overshoots() {
        let mut smoother = ScrollSmoother::new(0.05);
        smoother.step(0.0, 0.0);
        let mut last = 0.0;
        for _ in 0..120 {
            let y = smoother.step(1000.0, 1.0 / 60.0);
            assert!(y > last && y <= 1000.0);
            last = y;
        }
        // one lerp step at 60 fps blends ~5%
        let mut fresh = ScrollSmoother::new(0.05);
        fresh.step(0.0, 0.0);
        let one = fresh.step(1000.0, 1.0 / 60.0);
        assert!((one - 48.77).abs() < 0.1, "{one}");
    }

    #[test]
    fn scrub_settles_within_its_lag() {
        let mut scrub = Scrub::new(1.0);
        scrub.step(0.0, 0.0);
        let mut x = 0.0;
        for _ in 0..60 {
            x = scrub.step(-2880.0, 1.0 / 60.0);
        }
        assert!((x + 2880.0).abs() < 2880.0 * 0.01, "{x}");
        for _ in 0..120 {
            x = scrub.step(-2880.0, 1.0 / 60.0);
        }
        assert_eq!(x, -2880.0);
    }

    #[test]
    fn zero_lag_scrub_is_immediate() {
        let mut scrub = Scrub::new(0.0);
        scrub.step(0.0, 0.0);
        assert_eq!(scrub.step(-100.0, 0.016), -100.0);
        assert_eq!(scrub.current(), Some(-100.0));
    }
}
