use crate::{
    quantity::{energy::Kilocalories, time::Hours},
    training::{Training, Workout},
};

#[must_use]
pub struct Running(Workout);

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;

    pub const fn new(workout: Workout) -> Self {
        Self(workout)
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn workout(&self) -> &Workout {
        &self.0
    }

    fn spent_calories(&self) -> Kilocalories {
        let Workout { duration, weight, .. } = self.0;
        Kilocalories(
            (Self::SPEED_MULTIPLIER * self.mean_speed().0 - Self::SPEED_SHIFT) * weight.0 / 1000.0
                * duration.0
                * Hours::MINUTES_PER_HOUR,
        )
    }
}
