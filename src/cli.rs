use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Command-line surface. Parsing stays pure (`try_parse`); the driver decides
/// whether a usage error terminates. `-h` is taken by the hingleton toggle,
/// so the built-in help short flag is disabled and help lives on `--help`.
#[derive(Debug, Clone, Parser)]
#[command(name = "gsd", version, disable_help_flag = true)]
#[command(about = "Scan compiled Java classes and render singleton relationships as a graph")]
pub struct Cli {
    /// Echo discovered class names and phase progress
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Print statistics upon completion
    #[arg(short = 'S')]
    pub show_stats: bool,

    /// Add a stats banner to the graph
    #[arg(short = 'b')]
    pub show_banner: bool,

    /// Hide singletons
    #[arg(short = 's')]
    pub ignore_singletons: bool,

    /// Hide hingletons
    #[arg(short = 'h')]
    pub ignore_hingletons: bool,

    /// Hide mingletons
    #[arg(short = 'm')]
    pub ignore_mingletons: bool,

    /// Hide fingletons
    #[arg(short = 'f')]
    pub ignore_fingletons: bool,

    /// Hide other classes
    #[arg(short = 'o')]
    pub ignore_others: bool,

    /// Minimum edges required to draw a node
    #[arg(short = 't', value_name = "THRESHOLD")]
    pub threshold: Option<i32>,

    #[arg(long, action = ArgAction::HelpLong, help = "Print help")]
    pub help: Option<bool>,

    /// Directory or jar containing the compiled classes
    #[arg(value_name = "CLASSES")]
    pub input: PathBuf,

    /// Output graph file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Package to analyze, in dotted form (defaults to the root package)
    #[arg(value_name = "PACKAGE")]
    pub package: Option<String>,
}

/// Configuration record handed to the detection engine. Populated once from
/// the parsed arguments, read-only afterward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub verbose: bool,
    pub show_stats: bool,
    pub show_banner: bool,
    pub ignore_singletons: bool,
    pub ignore_hingletons: bool,
    pub ignore_mingletons: bool,
    pub ignore_fingletons: bool,
    pub ignore_others: bool,
    pub threshold: i32,
}

impl Cli {
    pub fn flags(&self) -> Flags {
        Flags {
            verbose: self.verbose,
            show_stats: self.show_stats,
            show_banner: self.show_banner,
            ignore_singletons: self.ignore_singletons,
            ignore_hingletons: self.ignore_hingletons,
            ignore_mingletons: self.ignore_mingletons,
            ignore_fingletons: self.ignore_fingletons,
            ignore_others: self.ignore_others,
            threshold: self.threshold.unwrap_or(0),
        }
    }

    /// The package prefix in slash-terminated traversal form.
    pub fn prefix(&self) -> String {
        normalize_prefix(self.package.as_deref().unwrap_or(""))
    }
}

/// Converts a dotted package name into the slash-terminated prefix used for
/// traversal: `com.example` becomes `com/example/`. Empty stays empty (root
/// package).
pub fn normalize_prefix(package: &str) -> String {
    if package.is_empty() {
        return String::new();
    }
    let mut prefix = package.replace('.', "/");
    if !prefix.ends_with('/') {
        prefix.push('/');
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("gsd").chain(args.iter().copied()))
    }

    #[test]
    fn parses_combined_short_flags_and_threshold() {
        let cli = parse(&["-vS", "-t", "5", "in.jar", "out.graphml", "com.example"]).unwrap();
        let flags = cli.flags();

        assert!(flags.verbose);
        assert!(flags.show_stats);
        assert_eq!(flags.threshold, 5);
        assert!(!flags.ignore_singletons);
        assert_eq!(cli.input, PathBuf::from("in.jar"));
        assert_eq!(cli.output, PathBuf::from("out.graphml"));
        assert_eq!(cli.prefix(), "com/example/");
    }

    #[test]
    fn defaults_package_to_root_with_two_positionals() {
        let cli = parse(&["classes", "out.graphml"]).unwrap();
        assert_eq!(cli.prefix(), "");
        assert_eq!(cli.flags().threshold, 0);
    }

    #[test]
    fn ignore_toggles_map_to_flags() {
        let cli = parse(&["-shmfo", "classes", "out.graphml"]).unwrap();
        let flags = cli.flags();
        assert!(flags.ignore_singletons);
        assert!(flags.ignore_hingletons);
        assert!(flags.ignore_mingletons);
        assert!(flags.ignore_fingletons);
        assert!(flags.ignore_others);
    }

    #[test]
    fn threshold_without_value_is_a_usage_error() {
        assert!(parse(&["in.jar", "out.graphml", "-t"]).is_err());
    }

    #[test]
    fn non_integer_threshold_is_a_usage_error() {
        assert!(parse(&["-t", "lots", "in.jar", "out.graphml"]).is_err());
    }

    #[test]
    fn unrecognized_flag_is_a_usage_error() {
        assert!(parse(&["-z", "in.jar", "out.graphml"]).is_err());
    }

    #[test]
    fn missing_positionals_are_a_usage_error() {
        assert!(parse(&["only-one"]).is_err());
        assert!(parse(&["a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn version_request_short_circuits_parsing() {
        let err = parse(&["-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn normalize_prefix_handles_dots_and_trailing_slash() {
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("com.example"), "com/example/");
        assert_eq!(normalize_prefix("com/example/"), "com/example/");
        assert_eq!(normalize_prefix("single"), "single/");
    }
}
