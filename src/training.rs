mod running;
mod swimming;
mod walking;

use bon::Builder;

pub use self::{running::Running, swimming::Swimming, walking::SportsWalking};
use crate::{
    message::InfoMessage,
    prelude::*,
    quantity::{
        energy::Kilocalories,
        length::{Kilometers, Meters},
        mass::Kilograms,
        speed::KilometersPerHour,
        time::Hours,
    },
};

/// Raw sensor readings shared by all the trainings.
#[must_use]
#[derive(Copy, Clone, Debug, Builder)]
pub struct Workout {
    /// Number of steps or strokes.
    pub action: u32,

    pub duration: Hours,
    pub weight: Kilograms,
}

impl Workout {
    /// Distance covered by a single step.
    pub const STEP_LENGTH: Meters = Meters(0.65);
}

pub trait Training {
    /// Training type as it appears in the summary.
    fn label(&self) -> &'static str;

    fn workout(&self) -> &Workout;

    /// Distance covered by a single action.
    fn step_length(&self) -> Meters {
        Workout::STEP_LENGTH
    }

    fn distance(&self) -> Kilometers {
        Kilometers::from(self.step_length() * f64::from(self.workout().action))
    }

    fn mean_speed(&self) -> KilometersPerHour {
        self.distance() / self.workout().duration
    }

    fn spent_calories(&self) -> Kilocalories;

    /// Summarize the training.
    ///
    /// Fails when a degenerate input (for example, zero duration) leads to non-finite metrics.
    #[instrument(skip_all, fields(training_type = self.label()))]
    fn show_training_info(&self) -> Result<InfoMessage> {
        let message = InfoMessage::builder()
            .training_type(self.label())
            .duration(self.workout().duration)
            .distance(self.distance())
            .speed(self.mean_speed())
            .calories(self.spent_calories())
            .build();
        ensure!(message.is_finite(), "non-finite metrics: {message:?}");
        debug!(calories = %message.calories, "summarized");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::length::Centimeters;

    #[test]
    fn test_distance_is_non_negative() {
        for action in [0, 1, 720, 15_000, u32::MAX] {
            let workout =
                Workout::builder().action(action).duration(Hours(1.0)).weight(Kilograms(75.0)).build();
            assert!(Running::new(workout).distance() >= Kilometers::ZERO);
            assert!(SportsWalking::new(workout, Centimeters(180.0)).distance() >= Kilometers::ZERO);
            assert!(Swimming::new(workout, Meters(25.0), 40.0).distance() >= Kilometers::ZERO);
        }
    }

    #[test]
    fn test_zero_duration_fails() {
        let workout =
            Workout::builder().action(15_000).duration(Hours::ZERO).weight(Kilograms(75.0)).build();
        assert!(Running::new(workout).show_training_info().is_err());
    }
}
