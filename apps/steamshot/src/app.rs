//! Command orchestration: validates input, resolves the Steam folder and
//! runs the importer.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use steamshot_importer::{
    ImportOptions, ImportPlan, ImportReport, JpegPolicy, JpegQuality, SourceFormat,
    TimeZonePolicy,
};
use steamshot_steam::{GameId, Paths, ScreenshotDir, SteamError, User, validate_dir};

use crate::cli::ImportArgs;
use crate::config::Config;

/// Shown after a successful import; Steam only picks up new files on start.
pub const SUCCESS_NOTICE: &str =
    "Screenshots imported to Steam folder. Please restart Steam to apply changes!";

/// A validated import request.
#[derive(Debug)]
pub struct ImportRequest {
    pub game_id: GameId,
    pub source: PathBuf,
    pub screenshots: ScreenshotDir,
}

/// Result of an import command.
#[derive(Debug)]
pub enum Outcome {
    Imported(ImportReport),
    Planned {
        destination: PathBuf,
        plan: ImportPlan,
    },
}

/// Validates the arguments and derives the destination folder.
///
/// Nothing is created on disk here.
pub fn prepare(args: &ImportArgs, config: &Config) -> anyhow::Result<ImportRequest> {
    prepare_with(args, config, Paths::new)
}

/// Like [`prepare`], with Steam detection supplied by the caller.
fn prepare_with(
    args: &ImportArgs,
    config: &Config,
    detect: impl Fn() -> Result<Paths, SteamError>,
) -> anyhow::Result<ImportRequest> {
    let game_id: GameId = args.game_id.parse()?;
    let screenshots = resolve_screenshots(args, config, game_id, detect)?;
    let source = validate_dir(&args.source).context("invalid source screenshots path")?;

    Ok(ImportRequest {
        game_id,
        source,
        screenshots,
    })
}

/// Picks the userdata folder: explicit path, explicit account, config, then
/// the only account of the detected Steam installation.
fn resolve_screenshots(
    args: &ImportArgs,
    config: &Config,
    game_id: GameId,
    detect: impl Fn() -> Result<Paths, SteamError>,
) -> anyhow::Result<ScreenshotDir> {
    let userdata_dir = match (&args.userdata, &args.user) {
        (Some(path), _) => Some(path),
        (None, None) => config.userdata.as_ref(),
        (None, Some(_)) => None,
    };
    if let Some(path) = userdata_dir {
        let userdata = validate_dir(path).context("invalid steam userdata path")?;
        return Ok(ScreenshotDir::for_user_dir(userdata, game_id));
    }

    let paths = detect()?;
    let user = match &args.user {
        Some(user) => user.clone(),
        None => {
            let user = steamshot_steam::sole_user(&paths)
                .context("no --userdata given and no single steam user to fall back on")?;
            tracing::info!(user = %user.id, "using the only steam user on this machine");
            user.id
        }
    };
    validate_dir(&paths.user_dir(&user)).context("invalid steam userdata path")?;
    Ok(paths.screenshot_dir(&user, game_id))
}

/// Applies command-line overrides on top of the configured defaults.
pub fn effective_options(args: &ImportArgs, config: &Config) -> anyhow::Result<ImportOptions> {
    let mut options = config.import.clone();
    if let Some(quality) = args.quality {
        options.quality = JpegQuality::new(quality)?;
    }
    if args.utc {
        options.time_zone = TimeZonePolicy::Utc;
    }
    if args.copy_jpeg {
        options.jpeg_policy = JpegPolicy::Copy;
    }
    if args.no_overwrite {
        options.overwrite = false;
    }
    Ok(options)
}

/// Runs a prepared import, or only plans it when `dry_run` is set.
pub fn execute(
    request: &ImportRequest,
    options: &ImportOptions,
    dry_run: bool,
) -> anyhow::Result<Outcome> {
    let destination = request.screenshots.root().to_path_buf();
    tracing::info!(
        game_id = request.game_id.get(),
        source = %request.source.display(),
        destination = %destination.display(),
        quality = options.quality.get(),
        dry_run,
        "starting import"
    );

    if dry_run {
        let plan = steamshot_importer::plan(&request.source, options)?;
        return Ok(Outcome::Planned { destination, plan });
    }

    request.screenshots.ensure()?;
    let report = steamshot_importer::import(&request.source, &destination, options)?;
    Ok(Outcome::Imported(report))
}

/// Handles the `import` command end to end.
pub fn run_import(args: &ImportArgs, config: &Config) -> anyhow::Result<()> {
    let request = prepare(args, config)?;
    let options = effective_options(args, config)?;
    let outcome = execute(&request, &options, args.dry_run)?;
    print_outcome(&outcome, args.json)
}

/// Handles the `users` command.
pub fn run_users(json: bool) -> anyhow::Result<()> {
    let users = steamshot_steam::get_users()?;
    println!("{}", render_users(&users, json)?);
    Ok(())
}

fn print_outcome(outcome: &Outcome, json: bool) -> anyhow::Result<()> {
    match outcome {
        Outcome::Imported(report) if json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        Outcome::Imported(report) => {
            println!("{SUCCESS_NOTICE}");
            println!(
                "{} screenshot(s) written to {}",
                report.imported.len(),
                report.destination_dir.display()
            );
        }
        Outcome::Planned { destination, plan } => {
            let preview = DryRunReport::new(destination, plan);
            if json {
                println!("{}", serde_json::to_string_pretty(&preview)?);
            } else {
                for file in &preview.planned {
                    println!("{} -> {}", file.source.display(), file.destination.display());
                }
                println!(
                    "{} screenshot(s) would be imported, {} entries skipped",
                    preview.planned.len(),
                    preview.skipped
                );
            }
        }
    }
    Ok(())
}

/// Dry-run output, shaped like [`ImportReport`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DryRunReport<'a> {
    destination_dir: &'a Path,
    planned: Vec<PlannedFile<'a>>,
    skipped: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlannedFile<'a> {
    source: &'a Path,
    destination: PathBuf,
    format: SourceFormat,
}

impl<'a> DryRunReport<'a> {
    fn new(destination_dir: &'a Path, plan: &'a ImportPlan) -> Self {
        let planned = plan
            .items
            .iter()
            .map(|item| PlannedFile {
                source: &item.source.path,
                destination: destination_dir.join(&item.file_name),
                format: item.source.format,
            })
            .collect();
        Self {
            destination_dir,
            planned,
            skipped: plan.skipped,
        }
    }
}

fn render_users(users: &[User], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(users)?);
    }
    if users.is_empty() {
        return Ok("no steam users found".into());
    }
    Ok(users
        .iter()
        .map(|u| {
            if u.has_screenshots {
                format!("{} (has screenshots)", u.id)
            } else {
                u.id.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
