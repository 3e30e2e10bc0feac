use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "Quant Data Config")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base directory; data directories are created one level above it [default: working directory]
    #[arg(short, long)]
    pub base_dir: Option<PathBuf>,

    /// What to print once the configuration is set up
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Only the readiness line
    Text,
    /// The readiness line, plus the resolved configuration as JSON on standard error
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_working_directory_and_text() {
        let args = Args::try_parse_from(["quant-data-config"]).unwrap();

        assert_eq!(args.base_dir, None);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn parses_base_dir_and_json() {
        let args =
            Args::try_parse_from(["quant-data-config", "-b", "/tmp/scripts", "--format", "json"])
                .unwrap();

        assert_eq!(args.base_dir, Some(PathBuf::from("/tmp/scripts")));
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Args::try_parse_from(["quant-data-config", "--format", "yaml"]).is_err());
    }
}
