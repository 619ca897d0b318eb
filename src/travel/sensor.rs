//! Stand-in motion sources for platforms without an accelerometer.

use super::movement::{AccelSample, MotionSensor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Resting reading: gravity straight down.
const REST: AccelSample = AccelSample {
    x: 0,
    y: 0,
    z: -1000,
};
const IDLE_JITTER: i16 = 40;
const SHAKE_MAGNITUDE: i16 = 4000;

/// Noisy accelerometer driven from the keyboard. Each `shake` queues one
/// strong reading for the next peek.
#[derive(Debug)]
pub struct SimulatedAccelerometer {
    rng: StdRng,
    subscribed: bool,
    pending_shakes: u32,
    flip: bool,
}

impl SimulatedAccelerometer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            subscribed: false,
            pending_shakes: 0,
            flip: false,
        }
    }

    pub fn shake(&mut self) {
        if self.subscribed {
            self.pending_shakes += 1;
        }
    }
}

impl MotionSensor for SimulatedAccelerometer {
    fn subscribe(&mut self) {
        self.subscribed = true;
    }

    fn unsubscribe(&mut self) {
        self.subscribed = false;
        self.pending_shakes = 0;
    }

    fn peek(&mut self) -> AccelSample {
        let mut jitter = || self.rng.gen_range(-IDLE_JITTER..=IDLE_JITTER);
        let mut sample = AccelSample::new(REST.x + jitter(), REST.y + jitter(), REST.z + jitter());

        if self.pending_shakes > 0 {
            self.pending_shakes -= 1;
            // Alternate direction so consecutive shakes keep producing deltas.
            self.flip = !self.flip;
            let swing = if self.flip {
                SHAKE_MAGNITUDE
            } else {
                -SHAKE_MAGNITUDE
            };
            sample.x = sample.x.saturating_add(swing);
            sample.y = sample.y.saturating_add(swing);
        }
        sample
    }
}

/// Sensor that swings between two extremes on every read. Used by the
/// simulator to walk at a constant pace.
#[derive(Debug, Clone, Default)]
pub struct PacedSensor {
    step: i16,
    flip: bool,
}

impl PacedSensor {
    pub fn new(step: i16) -> Self {
        Self { step, flip: false }
    }
}

impl MotionSensor for PacedSensor {
    fn subscribe(&mut self) {}

    fn unsubscribe(&mut self) {}

    fn peek(&mut self) -> AccelSample {
        self.flip = !self.flip;
        let v = if self.flip { self.step } else { -self.step };
        AccelSample::new(v, v, v)
    }
}
