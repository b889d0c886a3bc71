use crate::{
    quantity::{energy::Kilocalories, length::Centimeters, time::Hours},
    training::{Training, Workout},
};

#[must_use]
pub struct SportsWalking {
    workout: Workout,
    height: Centimeters,
}

impl SportsWalking {
    const WEIGHT_MULTIPLIER: f64 = 0.035;
    const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub const fn new(workout: Workout, height: Centimeters) -> Self {
        Self { workout, height }
    }
}

impl Training for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> Kilocalories {
        let Workout { duration, weight, .. } = self.workout;
        let speed_term = floor_div(self.mean_speed().0.powi(2), self.height.0);
        Kilocalories(
            (Self::WEIGHT_MULTIPLIER * weight.0
                + speed_term * Self::SPEED_HEIGHT_MULTIPLIER * weight.0)
                * duration.0
                * Hours::MINUTES_PER_HOUR,
        )
    }
}

/// Floored division of floats, rounding toward negative infinity.
///
/// The quotient is derived from the `fmod` remainder, so it matches `divmod` semantics
/// exactly, including the cases where `(lhs / rhs).floor()` is off by one ulp.
/// Division by zero yields `NaN`.
fn floor_div(lhs: f64, rhs: f64) -> f64 {
    if rhs == 0.0 {
        return f64::NAN;
    }
    let remainder = lhs % rhs;
    let mut quotient = (lhs - remainder) / rhs;
    if remainder != 0.0 && ((rhs < 0.0) != (remainder < 0.0)) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return 0.0_f64.copysign(lhs / rhs);
    }
    let floor = quotient.floor();
    if quotient - floor > 0.5 { floor + 1.0 } else { floor }
}
