use crate::{
    quantity::{
        energy::Kilocalories,
        length::{Kilometers, Meters},
        speed::KilometersPerHour,
    },
    training::{Training, Workout},
};

#[must_use]
pub struct Swimming {
    workout: Workout,
    pool_length: Meters,

    /// How many times the pool has been swum across.
    pool_count: f64,
}

impl Swimming {
    const STROKE_LENGTH: Meters = Meters(1.38);
    const SPEED_SHIFT: f64 = 1.1;
    const SPEED_MULTIPLIER: f64 = 2.0;

    pub const fn new(workout: Workout, pool_length: Meters, pool_count: f64) -> Self {
        Self { workout, pool_length, pool_count }
    }
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn step_length(&self) -> Meters {
        Self::STROKE_LENGTH
    }

    /// Speed is derived from the pool geometry rather than from the stroke count.
    fn mean_speed(&self) -> KilometersPerHour {
        Kilometers::from(self.pool_length * self.pool_count) / self.workout.duration
    }

    fn spent_calories(&self) -> Kilocalories {
        Kilocalories(
            (self.mean_speed().0 + Self::SPEED_SHIFT) * Self::SPEED_MULTIPLIER * self.workout.weight.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{mass::Kilograms, time::Hours};

    fn swimming(action: u32) -> Swimming {
        Swimming::new(
            Workout::builder().action(action).duration(Hours(1.0)).weight(Kilograms(80.0)).build(),
            Meters(25.0),
            40.0,
        )
    }

    #[test]
    fn test_swimming() {
        let swimming = swimming(720);
        assert_abs_diff_eq!(swimming.distance().0, 0.9936, epsilon = 1e-12);
        assert_abs_diff_eq!(swimming.mean_speed().0, 1.0);
        assert_abs_diff_eq!(swimming.spent_calories().0, 336.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mean_speed_ignores_strokes() {
        assert_eq!(swimming(0).mean_speed(), swimming(720).mean_speed());
        assert_eq!(swimming(100_000).mean_speed(), swimming(720).mean_speed());
    }

    #[test]
    fn test_partial_pool_length() {
        let swimming = Swimming::new(
            Workout::builder().action(720).duration(Hours(0.5)).weight(Kilograms(80.0)).build(),
            Meters(50.0),
            20.5,
        );
        assert_abs_diff_eq!(swimming.mean_speed().0, 2.05, epsilon = 1e-12);
    }
}
