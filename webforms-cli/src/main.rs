use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use webforms_cli::{Answers, ConsoleView, DryRunSubmitter, config_summary, replay};
use webforms_core::{
    ContactFormController, FormEvent, FormKind, FormRouter, QuoteFormController, SiteConfig,
    SubmitOutcome, Submitter,
};
use webforms_http::HttpSubmitter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Contact and quote-request forms for the business website.
///
/// Replays a visitor's answers through the same controllers the page uses,
/// prints what the page would show, and optionally submits.
#[derive(Debug, Parser)]
#[command(name = "webforms", version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct ConfigArg {
    /// Site configuration file.
    #[arg(long, default_value = "config/site.toml")]
    config: PathBuf,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and validate the site configuration.
    CheckConfig {
        #[command(flatten)]
        config: ConfigArg,
    },

    /// Price a quote request; with `--submit`, send it.
    Quote {
        #[command(flatten)]
        config: ConfigArg,

        /// Answers file to replay into the form.
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Validate and submit the request.
        #[arg(long, default_value_t = false)]
        submit: bool,
    },

    /// Fill in and submit the contact form.
    Contact {
        #[command(flatten)]
        config: ConfigArg,

        /// Answers file to replay into the form.
        #[arg(long)]
        answers: PathBuf,

        /// Log the payload instead of sending it.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info`, or `debug` with `--verbose`.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── commands ────────────────────────────────────────────────────────────────

fn load_config(arg: &ConfigArg) -> Result<SiteConfig> {
    SiteConfig::from_file(&arg.config)
        .with_context(|| format!("Failed to load config: {}", arg.config.display()))
}

async fn run_quote(
    config: &SiteConfig,
    answers: Option<&Path>,
    submit: bool,
) -> Result<()> {
    let answers = match answers {
        Some(path) => Answers::from_file(path)?,
        None => Answers::default(),
    };

    let mut view = ConsoleView::stdout();
    let controller = QuoteFormController::new(config, Arc::new(HttpSubmitter::new()));
    controller.render_initial(&mut view);

    let mut router = FormRouter::new();
    router.register(Box::new(controller));

    replay(&mut router, FormKind::Quote, &answers, false, &mut view).await?;
    debug!(fields = answers.fields.len(), actions = answers.actions.len(), "answers replayed");
    view.write_quote()?;

    if !submit {
        return Ok(());
    }
    let outcome = router
        .dispatch(FormKind::Quote, FormEvent::Submit, &mut view)
        .await?;
    check_outcome(FormKind::Quote, outcome)
}

async fn run_contact(
    config: &SiteConfig,
    answers: &Path,
    dry_run: bool,
) -> Result<()> {
    let answers = Answers::from_file(answers)?;
    let submitter: Arc<dyn Submitter> = if dry_run {
        Arc::new(DryRunSubmitter)
    } else {
        Arc::new(HttpSubmitter::new())
    };

    let mut view = ConsoleView::stdout();
    let mut router = FormRouter::new();
    router.register(Box::new(ContactFormController::new(config, submitter)));

    let outcome = replay(&mut router, FormKind::Contact, &answers, true, &mut view).await?;
    check_outcome(FormKind::Contact, outcome)
}

fn check_outcome(
    form: FormKind,
    outcome: Option<SubmitOutcome>,
) -> Result<()> {
    match outcome {
        Some(SubmitOutcome::Sent) => {
            info!(%form, "submission sent");
            Ok(())
        }
        Some(SubmitOutcome::Invalid(errors)) => {
            bail!("{form} form has {} invalid field(s)", errors.len())
        }
        Some(SubmitOutcome::Failed(reason)) => bail!("{form} submission failed: {reason}"),
        Some(SubmitOutcome::Busy) | None => bail!("{form} form did not submit"),
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::CheckConfig { config } => {
            let site = load_config(&config)?;
            println!("{} is valid.", config.config.display());
            print!("{}", config_summary(&site));
        }
        Command::Quote {
            config,
            answers,
            submit,
        } => {
            let site = load_config(&config)?;
            run_quote(&site, answers.as_deref(), submit).await?;
        }
        Command::Contact {
            config,
            answers,
            dry_run,
        } => {
            let site = load_config(&config)?;
            run_contact(&site, &answers, dry_run).await?;
        }
    }

    Ok(())
}
