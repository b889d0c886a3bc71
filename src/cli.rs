use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// How to render the training summaries.
    #[clap(long, env = "OUTPUT_FORMAT", value_enum, default_value_t = Format::Message)]
    pub format: Format,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// One line per training.
    Message,

    /// Single table for all the trainings.
    Table,

    /// One JSON object per line.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_format() {
        assert_eq!(Args::try_parse_from(["fitness-tracker"]).unwrap().format, Format::Message);
    }

    #[test]
    fn test_table_format() {
        let args = Args::try_parse_from(["fitness-tracker", "--format", "table"]).unwrap();
        assert_eq!(args.format, Format::Table);
    }
}
