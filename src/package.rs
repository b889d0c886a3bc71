use std::str::FromStr;

use crate::{
    prelude::*,
    quantity::{
        length::{Centimeters, Meters},
        mass::Kilograms,
        time::Hours,
    },
    training::{Running, SportsWalking, Swimming, Training, Workout},
};

/// Readings sent by the sensors for a single training.
#[derive(Copy, Clone, Debug)]
pub struct Package {
    pub code: &'static str,
    pub values: &'static [f64],
}

impl Package {
    pub const SAMPLES: [Self; 3] = [
        Self { code: "SWM", values: &[720.0, 1.0, 80.0, 25.0, 40.0] },
        Self { code: "RUN", values: &[15000.0, 1.0, 75.0] },
        Self { code: "WLK", values: &[9000.0, 1.0, 75.0, 180.0] },
    ];

    pub fn read(self) -> Result<Box<dyn Training>, PackageError> {
        read_package(self.code, self.values)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActivityCode {
    Swimming,
    Running,
    Walking,
}

impl ActivityCode {
    /// Training type the code stands for.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
        }
    }

    /// Number of raw values the training is built from.
    pub const fn arity(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::Walking => 4,
        }
    }
}

impl FromStr for ActivityCode {
    type Err = PackageError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "SWM" => Ok(Self::Swimming),
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::Walking),
            _ => Err(PackageError::UnknownCode { code: code.to_owned() }),
        }
    }
}

#[derive(Debug, PartialEq, derive_more::Display, derive_more::Error)]
pub enum PackageError {
    #[display("unknown activity code `{code}`, expected one of: SWM, RUN, WLK")]
    UnknownCode { code: String },

    #[display("`{training}` takes {expected} values, got {actual}")]
    Arity { training: &'static str, expected: usize, actual: usize },

    #[display("action count of `{training}` must be a non-negative integer, got {value}")]
    Type { training: &'static str, value: f64 },
}

/// Build the training from the raw values, in the order the sensors send them.
///
/// - `SWM`: action, duration, weight, pool length, pool count
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
pub fn read_package(code: &str, values: &[f64]) -> Result<Box<dyn Training>, PackageError> {
    let code = ActivityCode::from_str(code)?;
    debug!(training = code.label(), n_values = values.len(), "reading package…");
    if values.len() != code.arity() {
        return Err(PackageError::Arity {
            training: code.label(),
            expected: code.arity(),
            actual: values.len(),
        });
    }
    let workout = Workout::builder()
        .action(action(code, values[0])?)
        .duration(Hours(values[1]))
        .weight(Kilograms(values[2]))
        .build();
    let training: Box<dyn Training> = match code {
        ActivityCode::Swimming => Box::new(Swimming::new(workout, Meters(values[3]), values[4])),
        ActivityCode::Running => Box::new(Running::new(workout)),
        ActivityCode::Walking => Box::new(SportsWalking::new(workout, Centimeters(values[3]))),
    };
    Ok(training)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn action(code: ActivityCode, value: f64) -> Result<u32, PackageError> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(PackageError::Type { training: code.label(), value })
    }
}
