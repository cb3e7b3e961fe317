use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "twmedia")]
#[command(about = "Inspect media attachments in Twitter API JSON", version)]
#[command(after_help = "EXAMPLES:
    twmedia list tweet.json           Show media attachments as a table
    twmedia urls --field both < t.json  Print media and link URLs
    twmedia check timeline.ndjson     Report malformed URLs
    twmedia normalize tweet.json      Re-serialize the attachments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress informational messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and show error causes
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List media attachments
    #[command(after_help = "EXAMPLES:
    twmedia list tweet.json
    twmedia list --json < timeline.json")]
    List(InputArgs),
    /// Print attachment URLs, one per line
    #[command(after_help = "EXAMPLES:
    twmedia urls tweet.json
    twmedia urls --field url tweet.json
    twmedia urls --field both --json tweet.json")]
    Urls(UrlsArgs),
    /// Check that every present URL is an http(s) URL
    #[command(after_help = "EXAMPLES:
    twmedia check timeline.ndjson")]
    Check(InputArgs),
    /// Re-serialize attachments as a JSON array
    #[command(after_help = "EXAMPLES:
    twmedia normalize tweet.json
    twmedia normalize --compact - < tweet.json")]
    Normalize(NormalizeArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    twmedia completions bash > ~/.bash_completion.d/twmedia
    twmedia completions zsh > ~/.zfunc/_twmedia
    twmedia completions fish > ~/.config/fish/completions/twmedia.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    twmedia init")]
    Init,
}

#[derive(Args, Clone)]
pub struct InputArgs {
    /// JSON or NDJSON file to read (stdin when omitted or "-")
    pub input: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct UrlsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Which URL to print
    #[arg(long, value_enum, default_value_t = UrlField::Media)]
    pub field: UrlField,
}

#[derive(Args, Clone)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Attachment fields selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UrlField {
    /// The media resource URL (`media_url`)
    Media,
    /// The display URL (`url`)
    Url,
    /// Both, media URL first
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_combined_short_flags_enable_verbose() {
        let cli = Cli::try_parse_from(["twmedia", "list", "-qv"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_urls_defaults() {
        let cli = Cli::try_parse_from(["twmedia", "urls"]).unwrap();
        match cli.command {
            Commands::Urls(args) => {
                assert_eq!(args.field, UrlField::Media);
                assert!(args.input.input.is_none());
            }
            _ => panic!("expected urls command"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["twmedia", "urls", "t.json", "--field", "both", "--json", "-q"])
                .unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        match cli.command {
            Commands::Urls(args) => {
                assert_eq!(args.field, UrlField::Both);
                assert_eq!(args.input.input, Some(PathBuf::from("t.json")));
            }
            _ => panic!("expected urls command"),
        }
    }
}
