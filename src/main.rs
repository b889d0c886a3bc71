#![doc = include_str!("../README.md")]

mod cli;
mod message;
mod package;
mod prelude;
mod quantity;
mod tables;
mod training;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Format},
    message::InfoMessage,
    package::Package,
    prelude::*,
    tables::build_summary_table,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    match args.format {
        Format::Message => {
            for package in Package::SAMPLES {
                println!("{}", summarize(package)?);
            }
        }
        Format::Json => {
            for package in Package::SAMPLES {
                println!("{}", serde_json::to_string(&summarize(package)?)?);
            }
        }
        Format::Table => {
            let messages = Package::SAMPLES.into_iter().map(summarize).collect::<Result<Vec<_>>>()?;
            println!("{}", build_summary_table(&messages));
        }
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all, fields(code = package.code))]
fn summarize(package: Package) -> Result<InfoMessage> {
    package
        .read()
        .with_context(|| format!("failed to read the `{}` package", package.code))?
        .show_training_info()
        .with_context(|| format!("failed to summarize the `{}` package", package.code))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_samples() {
        let lines = Package::SAMPLES
            .into_iter()
            .map(|package| summarize(package).map(|message| message.to_string()))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(
            lines,
            [
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
            ],
        );
    }

    #[test]
    fn test_json_line() {
        let line = serde_json::to_string(&summarize(Package::SAMPLES[1]).unwrap()).unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["training_type"], "Running");
        assert_abs_diff_eq!(value["calories"].as_f64().unwrap(), 699.75, epsilon = 1e-9);
        assert_abs_diff_eq!(value["distance"].as_f64().unwrap(), 9.75, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_code_aborts() {
        let error = summarize(Package { code: "XYZ", values: &[1.0, 1.0, 1.0] }).unwrap_err();
        assert_eq!(error.to_string(), "failed to read the `XYZ` package");
        assert!(matches!(
            error.downcast_ref::<package::PackageError>(),
            Some(package::PackageError::UnknownCode { .. }),
        ));
    }
}
