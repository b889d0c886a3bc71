use std::ops::Div;

use crate::quantity::{length::Kilometers, time::Hours};

quantity!(KilometersPerHour, via: f64, suffix: "км/ч", precision: 3);

impl Div<Hours> for Kilometers {
    type Output = KilometersPerHour;

    fn div(self, hours: Hours) -> Self::Output {
        KilometersPerHour(self.0 / hours.0)
    }
}
