/// Abstraction over time sources.
/// Implementations: SystemTimeSource (production), MockTimeSource (testing).
pub trait TimeSource {
    /// Current time in microseconds from an arbitrary epoch.
    fn now_us(&self) -> i64;
}

/// System time source using std::time::Instant.
pub struct SystemTimeSource {
    start: std::time::Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now_us(&self) -> i64 {
        self.start.elapsed().as_micros() as i64
    }
}

/// Mock time source for deterministic testing.
pub struct MockTimeSource {
    current_us: std::cell::Cell<i64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_us: std::cell::Cell::new(0),
        }
    }

    pub fn advance(&self, delta_us: i64) {
        self.current_us.set(self.current_us.get() + delta_us);
    }
}

impl Default for MockTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MockTimeSource {
    fn now_us(&self) -> i64 {
        self.current_us.get()
    }
}

/// Restart-style frame timer: each `tick` returns the seconds elapsed
/// since the previous `tick` and re-arms. The first tick returns 0.0.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_us: Option<i64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, time: &dyn TimeSource) -> f32 {
        let now = time.now_us();
        let elapsed = match self.last_us {
            Some(last) => (now - last).max(0) as f32 / 1_000_000.0,
            None => 0.0,
        };
        self.last_us = Some(now);
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let time = MockTimeSource::new();
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(&time), 0.0);
    }

    #[test]
    fn tick_returns_elapsed_seconds_and_rearms() {
        let time = MockTimeSource::new();
        let mut clock = FrameClock::new();
        clock.tick(&time);

        time.advance(100_000);
        assert!((clock.tick(&time) - 0.1).abs() < 1e-6);

        time.advance(16_667);
        assert!((clock.tick(&time) - 0.016_667).abs() < 1e-6);
    }

    #[test]
    fn backwards_time_clamps_to_zero() {
        let time = MockTimeSource::new();
        let mut clock = FrameClock::new();
        time.advance(50_000);
        clock.tick(&time);
        time.advance(-20_000);
        assert_eq!(clock.tick(&time), 0.0);
    }

    #[test]
    fn system_time_source_monotonic() {
        let time = SystemTimeSource::new();
        let t1 = time.now_us();
        let t2 = time.now_us();
        assert!(t2 >= t1);
    }
}
