quantity!(Kilocalories, via: f64, suffix: "ккал", precision: 3);
