//! Time-based animation helpers.
//!
//! Everything here is a pure function of a start instant and "now", so the
//! reducer stays pure and tests can drive time explicitly.

use std::time::{Duration, Instant};

/// Post counter tween length.
pub const POST_COUNT_DURATION: Duration = Duration::from_millis(3000);
/// Pause before the heart starts rising.
pub const HEART_DELAY: Duration = Duration::from_millis(500);
/// Time the heart takes to reach [`HEART_MAX_OFFSET`].
pub const HEART_RISE: Duration = Duration::from_millis(2700);
/// Heart is hidden again once this much time has passed since following.
pub const HEART_VISIBLE_FOR: Duration = Duration::from_millis(3200);
pub const HEART_MAX_OFFSET: u16 = 130;
/// Half period of the follow button colour pulse.
pub const BUTTON_PULSE_PERIOD: Duration = Duration::from_millis(1200);

/// Standard fast-out-slow-in easing, cubic-bezier(0.4, 0, 0.2, 1).
pub fn fast_out_slow_in(fraction: f64) -> f64 {
    cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let curve = |a: f64, b: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    // x(s) is monotonic for these control points, so bisection converges.
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..40 {
        let mid = (lo + hi) / 2.0;
        if curve(x1, x2, mid) < fraction {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    curve(y1, y2, (lo + hi) / 2.0)
}

fn progress(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() || elapsed >= total {
        return 1.0;
    }
    elapsed.as_secs_f64() / total.as_secs_f64()
}

/// Integer counter easing toward a target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountAnimation {
    from: u32,
    to: u32,
    started: Option<Instant>,
}

impl CountAnimation {
    /// Start easing toward `target` from wherever the counter is at `now`.
    pub fn retarget(self, target: u32, now: Instant) -> Self {
        if target == self.to {
            return self;
        }
        Self {
            from: self.value_at(now),
            to: target,
            started: Some(now),
        }
    }

    pub fn value_at(&self, now: Instant) -> u32 {
        let Some(started) = self.started else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= POST_COUNT_DURATION {
            return self.to;
        }

        let eased = fast_out_slow_in(progress(elapsed, POST_COUNT_DURATION));
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        let value = from + (to - from) * eased;
        value.round().clamp(0.0, f64::from(u32::MAX)) as u32
    }
}

/// Decorative heart that rises after the user starts following.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartAnimation {
    started: Instant,
}

impl HeartAnimation {
    pub fn start(now: Instant) -> Self {
        Self { started: now }
    }

    /// Vertical lift in `0..=HEART_MAX_OFFSET`.
    pub fn offset_at(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.started);
        let Some(rising) = elapsed.checked_sub(HEART_DELAY) else {
            return 0;
        };
        let eased = fast_out_slow_in(progress(rising, HEART_RISE));
        (f64::from(HEART_MAX_OFFSET) * eased).round() as u16
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= HEART_VISIBLE_FOR
    }
}

/// Position in a reverse-repeating pulse, `0.0..=1.0`.
pub fn pulse_fraction(elapsed: Duration) -> f64 {
    let period = BUTTON_PULSE_PERIOD.as_millis();
    let phase = elapsed.as_millis() % (period * 2);
    let linear = if phase < period {
        phase as f64 / period as f64
    } else {
        2.0 - phase as f64 / period as f64
    };
    fast_out_slow_in(linear)
}

/// Linear blend between two RGB triples.
pub fn lerp_rgb(from: [u8; 3], to: [u8; 3], fraction: f64) -> [u8; 3] {
    let fraction = fraction.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| {
        let value = f64::from(a) + (f64::from(b) - f64::from(a)) * fraction;
        value.round() as u8
    };
    [
        mix(from[0], to[0]),
        mix(from[1], to[1]),
        mix(from[2], to[2]),
    ]
}
