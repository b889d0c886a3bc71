quantity!(Kilograms, via: f64, suffix: "кг", precision: 1);
