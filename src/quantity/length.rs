quantity!(Kilometers, via: f64, suffix: "км", precision: 3);
quantity!(Meters, via: f64, suffix: "м", precision: 2);
quantity!(Centimeters, via: f64, suffix: "см", precision: 0);

impl Meters {
    pub const PER_KILOMETER: f64 = 1000.0;
}

impl From<Meters> for Kilometers {
    fn from(meters: Meters) -> Self {
        Self(meters.0 / Meters::PER_KILOMETER)
    }
}
