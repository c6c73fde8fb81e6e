//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::Parser;

const LONG_ABOUT: &str = "\
Install every font found in a synchronized folder into the system font
directory and register it in the font ledger, then optionally uninstall
the same set.

The source folder is located by probing each mounted drive for the
configured relative path. Fonts already present in the ledger are left
alone, so repeated runs are cheap.

The font ledger and font directory are shared machine state and are not
locked. Do not run two fontsync processes at the same time.";

/// fontsync - keep installed fonts in step with a synchronized folder
#[derive(Parser, Debug)]
#[command(name = "fontsync")]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Do not offer to uninstall after installing
    #[arg(short, long)]
    pub silent: bool,

    /// Path to fontsync.yaml config file
    #[arg(short, long)]
    pub config: Option<Utf8PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on the console
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fontsync"]).unwrap();
        assert!(!cli.silent);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags() {
        let cli =
            Cli::try_parse_from(["fontsync", "--silent", "-vv", "--config", "fonts.yaml"]).unwrap();
        assert!(cli.silent);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some(camino::Utf8Path::new("fonts.yaml")));
    }

    #[test]
    fn test_help_warns_about_concurrent_runs() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("Do not run two fontsync processes"));
    }
}
