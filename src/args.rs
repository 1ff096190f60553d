use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::image_search::{DEFAULT_MATCH_PERCENT, DEFAULT_TOLERANCE, SearchConfig, SearchMode};

#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("Expected at least 3 arguments (main, search, output), got {found}")]
    MissingArguments { found: usize },

    #[error("Invalid {name} value: '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Unknown flag: {0}")]
    UnknownFlag(String),

    #[error("Unexpected extra argument: {0}")]
    UnexpectedArgument(String),
}

#[derive(Debug, PartialEq)]
pub struct Args {
    pub main_image: PathBuf,
    pub search_image: PathBuf,
    pub output_image: PathBuf,
    pub config: SearchConfig,
    pub report: Option<PathBuf>,
    pub debug_mode: bool,
}

impl Args {
    /// Parse the process arguments. `Ok(None)` means help or version was printed.
    pub fn parse() -> Result<Option<Self>, ArgsError> {
        Self::parse_from(env::args().skip(1))
    }

    pub fn parse_from<I>(args: I) -> Result<Option<Self>, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional: Vec<String> = Vec::new();
        let mut parallel = false;
        let mut debug_mode = false;
        let mut report: Option<PathBuf> = None;

        for arg in args {
            if arg == "--help" || arg == "-h" {
                print_help();
                return Ok(None);
            } else if arg == "--version" || arg == "-v" {
                println!(
                    "Mask Search v{} ({})",
                    env!("APP_VERSION_DISPLAY"),
                    env!("APP_BUILD_YEAR")
                );
                return Ok(None);
            } else if arg == "--debug" {
                debug_mode = true;
            } else if arg == "--parallel" {
                parallel = true;
            } else if let Some(path) = arg.strip_prefix("--report=") {
                report = Some(PathBuf::from(path));
            } else if arg.starts_with("--") {
                return Err(ArgsError::UnknownFlag(arg));
            } else {
                positional.push(arg);
            }
        }

        if positional.len() < 3 {
            return Err(ArgsError::MissingArguments {
                found: positional.len(),
            });
        }
        if positional.len() > 6 {
            return Err(ArgsError::UnexpectedArgument(positional.swap_remove(6)));
        }

        let mode = match positional.get(3) {
            Some(flag) if flag != "true" => SearchMode::Image,
            _ => SearchMode::Mask,
        };
        let match_percent = parse_number(positional.get(4), "match-percentage", DEFAULT_MATCH_PERCENT)?;
        let tolerance = parse_number(positional.get(5), "tolerance", DEFAULT_TOLERANCE)?;

        let mut positional = positional.into_iter().map(PathBuf::from);
        Ok(Some(Args {
            main_image: positional.next().unwrap_or_default(),
            search_image: positional.next().unwrap_or_default(),
            output_image: positional.next().unwrap_or_default(),
            config: SearchConfig {
                match_percent,
                tolerance,
                mode,
                parallel,
            },
            report,
            debug_mode,
        }))
    }
}

fn parse_number(value: Option<&String>, name: &'static str, default: u32) -> Result<u32, ArgsError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<u32>().map_err(|_| ArgsError::InvalidNumber {
            name,
            value: raw.clone(),
        }),
    }
}

pub fn print_help() {
    println!("🔎 Mask Search");
    println!();
    println!("USAGE:");
    println!(
        "    mask-search <MainPNGfile> <SearchPNGfile> <OutputPNGfile> [isMaskFlag] [match-percentage] [tolerance] [FLAGS]"
    );
    println!();
    println!("ARGUMENTS:");
    println!("    isMaskFlag          'true' treats the search image as a mask (default: true)");
    println!("    match-percentage    Net percentage of pixels that must match (default: {DEFAULT_MATCH_PERCENT})");
    println!("    tolerance           Per-channel colour tolerance, exclusive (default: {DEFAULT_TOLERANCE})");
    println!();
    println!("FLAGS:");
    println!("    --parallel          Scan rows in parallel");
    println!("    --report=FILE       Also write the matches as JSON");
    println!("    --debug             Enable debug logging");
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    mask-search flag.png star_mask.png out.png");
    println!("    mask-search flag.png star.png out.png false 80 24 --parallel");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Args>, ArgsError> {
        Args::parse_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults_with_three_paths() {
        let args = parse(&["main.png", "mask.png", "out.png"]).unwrap().unwrap();

        assert_eq!(args.main_image, PathBuf::from("main.png"));
        assert_eq!(args.search_image, PathBuf::from("mask.png"));
        assert_eq!(args.output_image, PathBuf::from("out.png"));
        assert_eq!(args.config, SearchConfig::default());
        assert_eq!(args.report, None);
        assert!(!args.debug_mode);
    }

    #[test]
    fn test_too_few_arguments() {
        assert_eq!(
            parse(&["main.png", "mask.png"]).unwrap_err(),
            ArgsError::MissingArguments { found: 2 }
        );
    }

    #[test]
    fn test_optional_positionals() {
        let args = parse(&["a.png", "b.png", "c.png", "false", "60", "10"])
            .unwrap()
            .unwrap();

        assert_eq!(args.config.mode, SearchMode::Image);
        assert_eq!(args.config.match_percent, 60);
        assert_eq!(args.config.tolerance, 10);
    }

    #[test]
    fn test_mask_flag_only_true_is_mask() {
        let args = parse(&["a.png", "b.png", "c.png", "true"]).unwrap().unwrap();
        assert_eq!(args.config.mode, SearchMode::Mask);

        let args = parse(&["a.png", "b.png", "c.png", "TRUE"]).unwrap().unwrap();
        assert_eq!(args.config.mode, SearchMode::Image);
    }

    #[test]
    fn test_flags_mixed_with_positionals() {
        let args = parse(&["--parallel", "a.png", "b.png", "--report=r.json", "c.png", "--debug"])
            .unwrap()
            .unwrap();

        assert!(args.config.parallel);
        assert!(args.debug_mode);
        assert_eq!(args.report, Some(PathBuf::from("r.json")));
        assert_eq!(args.output_image, PathBuf::from("c.png"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(
            parse(&["a.png", "b.png", "c.png", "true", "lots"]).unwrap_err(),
            ArgsError::InvalidNumber {
                name: "match-percentage",
                value: "lots".to_string()
            }
        );
        assert!(matches!(
            parse(&["a.png", "b.png", "c.png", "true", "75", "-3"]),
            Err(ArgsError::InvalidNumber { name: "tolerance", .. })
        ));
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            parse(&["a.png", "b.png", "c.png", "--fast"]).unwrap_err(),
            ArgsError::UnknownFlag("--fast".to_string())
        );
    }

    #[test]
    fn test_seventh_positional_rejected() {
        assert_eq!(
            parse(&["a.png", "b.png", "c.png", "true", "75", "32", "extra"]).unwrap_err(),
            ArgsError::UnexpectedArgument("extra".to_string())
        );
    }
}
