use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::Serialize;

use crate::quantity::{
    energy::Kilocalories,
    length::Kilometers,
    speed::KilometersPerHour,
    time::Hours,
};

/// Summary of a completed training.
#[must_use]
#[derive(Clone, Debug, Builder, Serialize)]
pub struct InfoMessage {
    pub training_type: &'static str,
    pub duration: Hours,
    pub distance: Kilometers,
    pub speed: KilometersPerHour,
    pub calories: Kilocalories,
}

impl InfoMessage {
    pub const fn is_finite(&self) -> bool {
        self.duration.is_finite()
            && self.distance.is_finite()
            && self.speed.is_finite()
            && self.calories.is_finite()
    }
}

impl Display for InfoMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration.0, self.distance.0, self.speed.0, self.calories.0,
        )
    }
}
