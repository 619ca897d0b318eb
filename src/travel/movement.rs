//! Turning accelerometer samples into encounter triggers.

use log::debug;

/// One accelerometer reading in milli-g.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AccelSample {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// A motion source that can be switched on for the duration of travel.
pub trait MotionSensor {
    fn subscribe(&mut self);

    fn unsubscribe(&mut self);

    /// Latest reading.
    fn peek(&mut self) -> AccelSample;
}

/// Accumulates motion since the last encounter and reports when enough has
/// built up.
#[derive(Debug, Clone)]
pub struct MovementTrigger {
    threshold: i64,
    total: i64,
    previous: AccelSample,
}

impl MovementTrigger {
    pub fn new(threshold: i64, baseline: AccelSample) -> Self {
        Self {
            threshold,
            total: 0,
            previous: baseline,
        }
    }

    /// Absolute value of the signed sum of per-axis deltas. Opposite motion
    /// on two axes cancels out.
    pub fn motion_delta(previous: AccelSample, current: AccelSample) -> i64 {
        let sum = (current.x as i64 - previous.x as i64)
            + (current.y as i64 - previous.y as i64)
            + (current.z as i64 - previous.z as i64);
        sum.abs()
    }

    /// Folds one sample into the running total. Returns true exactly once per
    /// crossing and starts counting again from zero.
    pub fn record(&mut self, sample: AccelSample) -> bool {
        let delta = Self::motion_delta(self.previous, sample);
        self.previous = sample;
        self.total += delta;
        debug!("movement +{} -> {}/{}", delta, self.total, self.threshold);

        if self.total > self.threshold {
            self.total = 0;
            return true;
        }
        false
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }
}
