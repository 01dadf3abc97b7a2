use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "steamshot")]
#[command(version, about = "Import screenshots from any folder into Steam", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to the per-user config location).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy a folder of screenshots into a game's Steam screenshot folder.
    Import(ImportArgs),

    /// List the Steam users found on this machine.
    Users {
        /// Print JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Steam game ID (e.g. 11111111).
    #[arg(short, long, value_name = "ID")]
    pub game_id: String,

    /// Folder holding the screenshots to import.
    #[arg(short, long, value_name = "DIR")]
    pub source: PathBuf,

    /// Steam userdata folder of the account (e.g. .../Steam/userdata/1111111).
    #[arg(short, long, value_name = "DIR", conflicts_with = "user")]
    pub userdata: Option<PathBuf>,

    /// Steam account ID inside the detected Steam installation.
    #[arg(long, value_name = "ID")]
    pub user: Option<String>,

    /// JPEG quality, 1-100.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Name files after UTC instead of local time.
    #[arg(long)]
    pub utc: bool,

    /// Copy JPEG sources as-is instead of re-encoding them.
    #[arg(long)]
    pub copy_jpeg: bool,

    /// Fail instead of replacing screenshots from an earlier import.
    #[arg(long)]
    pub no_overwrite: bool,

    /// Show what would be imported without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_import() {
        let cli = Cli::try_parse_from([
            "steamshot",
            "import",
            "--game-id",
            "730",
            "--source",
            "/shots",
            "--userdata",
            "/steam/userdata/1",
            "-q",
            "80",
            "--utc",
        ])
        .unwrap();

        let Command::Import(args) = cli.command else {
            panic!("expected import");
        };
        assert_eq!(args.game_id, "730");
        assert_eq!(args.source, PathBuf::from("/shots"));
        assert_eq!(args.userdata, Some(PathBuf::from("/steam/userdata/1")));
        assert_eq!(args.quality, Some(80));
        assert!(args.utc);
        assert!(!args.dry_run);
    }

    #[test]
    fn rejects_quality_out_of_range() {
        let result = Cli::try_parse_from([
            "steamshot", "import", "-g", "730", "-s", "/shots", "-q", "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn userdata_conflicts_with_user() {
        let result = Cli::try_parse_from([
            "steamshot", "import", "-g", "730", "-s", "/shots", "-u", "/x", "--user", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_config_flag() {
        let cli =
            Cli::try_parse_from(["steamshot", "users", "--json", "--config", "/c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/c.toml")));
        assert!(matches!(cli.command, Command::Users { json: true }));
    }
}
