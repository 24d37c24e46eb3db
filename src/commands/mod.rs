//! Subcommand handlers and the setup they share.
pub mod completions;
pub mod create;
pub mod lang;
pub mod preview;
pub mod status;
pub mod types;
pub mod version;

use anyhow::{Context as _, Result, bail};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command, GlobalOpts, LinkArgs};
use crate::config::{Config, prefs};
use crate::error::{RequestError, WinMklinkError};
use crate::i18n::Language;
use crate::link::{LinkRequest, LinkType, suggest_link_path};
use crate::logging::Logger;

/// Shared state produced by the common command setup sequence.
///
/// Encapsulates config loading and language resolution so that each command
/// does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    /// Loaded configuration (defaults when no file exists).
    pub config: Config,
    /// Config file that was consulted, if any.
    pub config_path: Option<PathBuf>,
    /// Display language for this run.
    pub language: Language,
    /// Location of the preferences file, if a home directory is known.
    pub prefs_path: Option<PathBuf>,
}

impl CommandSetup {
    /// Load configuration and resolve the display language.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given config file does not exist,
    /// or if the config file cannot be read or parsed.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        if let Some(path) = &global.config
            && !path.exists()
        {
            bail!("config file not found: {}", path.display());
        }
        let config_path = global.config.clone().or_else(Config::default_path);
        let config = match &config_path {
            Some(path) => {
                log.debug(&format!("config: {}", path.display()));
                Config::load(path)
                    .map_err(WinMklinkError::from)
                    .with_context(|| format!("loading {}", path.display()))?
            }
            None => Config::default(),
        };

        let prefs_path = prefs::default_path();
        let language = global.lang.unwrap_or_else(|| {
            prefs_path
                .as_deref()
                .map(prefs::load_language)
                .unwrap_or_default()
        });
        log.debug(&format!("language: {language}"));

        Ok(Self {
            config,
            config_path,
            language,
            prefs_path,
        })
    }

    /// Turn command-line link arguments into a [`LinkRequest`], relative to
    /// the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or a
    /// path is rejected by [`LinkRequest::new`].
    pub fn request(&self, args: &LinkArgs) -> Result<LinkRequest> {
        let cwd = std::env::current_dir().context("resolve current directory")?;
        link_request(args, self.config.defaults.link_type, &cwd)
            .map_err(|e| WinMklinkError::from(e).into())
    }
}

/// Build a [`LinkRequest`] from command-line arguments.
///
/// Relative paths are resolved against `cwd` and verbatim (`\\?\`)
/// prefixes are dropped, so `mklink` never sees a target it would resolve
/// from the link's folder. The link path is suggested from the target's
/// name when needed, and the configured type fills in for a missing
/// `--type`. A target without a file name, or a suggestion that lands on the
/// target itself, leaves the link path empty, i.e. an incomplete request.
///
/// # Errors
///
/// Returns an error if a path is not UTF-8 or contains characters that
/// cannot be quoted.
pub fn link_request(
    args: &LinkArgs,
    default_type: LinkType,
    cwd: &Path,
) -> Result<LinkRequest, RequestError> {
    let target = absolute(&args.target, cwd);
    let link = args.link.as_deref().map(|link| absolute(link, cwd));
    let link = suggest_link_path(&target, link.as_deref(), cwd).unwrap_or_default();
    LinkRequest::new(
        path_text(&target)?,
        path_text(&link)?,
        args.link_type.unwrap_or(default_type),
    )
}

/// `path` joined onto `cwd` with `.` components removed. Empty stays empty.
fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return PathBuf::new();
    }
    let joined: PathBuf = cwd.join(path).components().collect();
    dunce::simplified(&joined).to_path_buf()
}

/// Warn when an existing target is a file but the type expects a directory,
/// or the other way round. `mklink` itself would still run.
pub fn warn_on_target_kind(request: &LinkRequest, log: &Logger) {
    let target = Path::new(request.target_path());
    if !target.exists() {
        log.warn(&format!("target does not exist: {}", target.display()));
        return;
    }
    let wants_dir = request.link_type().targets_directory();
    if target.is_dir() != wants_dir {
        let expected = if wants_dir { "directory" } else { "file" };
        log.warn(&format!(
            "{} expects a {expected} target: {}",
            request.link_type(),
            target.display()
        ));
    }
}

fn path_text(path: &Path) -> Result<String, RequestError> {
    path.to_str()
        .map(String::from)
        .ok_or_else(|| RequestError::NonUtf8Path(path.to_path_buf()))
}

/// Dispatch the parsed command line.
///
/// # Errors
///
/// Returns an error if setup fails or the subcommand fails.
pub fn run(cli: &Cli, log: &Logger) -> Result<()> {
    match &cli.command {
        Command::Version => {
            version::run();
            Ok(())
        }
        Command::Completions(opts) => completions::run(opts),
        Command::Preview(args) => {
            let setup = CommandSetup::init(&cli.global, log)?;
            preview::run(&setup, args, log)
        }
        Command::Create(opts) => {
            let setup = CommandSetup::init(&cli.global, log)?;
            create::run(&setup, opts, cli.global.dry_run, log)
        }
        Command::Types => {
            let setup = CommandSetup::init(&cli.global, log)?;
            types::run(&setup, log);
            Ok(())
        }
        Command::Lang(opts) => {
            let setup = CommandSetup::init(&cli.global, log)?;
            lang::run(&setup, opts, log);
            Ok(())
        }
        Command::Status => {
            let setup = CommandSetup::init(&cli.global, log)?;
            status::run(&setup, log)
        }
    }
}

/// Report the outcome of [`run`] and return the process exit status
/// (`0` on success, `1` on error).
///
/// Errors go through [`Logger::error`] so they reach the log file as well as
/// the console.
#[must_use]
pub fn report(outcome: Result<()>, log: &Logger) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(e) => {
            log.error(&format!("{e:#}"));
            1
        }
    }
}

/// Setup with default config and the given language, for command tests.
#[cfg(test)]
pub(crate) fn test_setup(language: Language, prefs_path: Option<PathBuf>) -> CommandSetup {
    CommandSetup {
        config: Config::default(),
        config_path: None,
        language,
        prefs_path,
    }
}
