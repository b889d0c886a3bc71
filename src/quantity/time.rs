quantity!(Hours, via: f64, suffix: "ч", precision: 3);

impl Hours {
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}
