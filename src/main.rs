//! `SiteFeedback` command-line driver
//!
//! Runs a scripted interaction against the site core and prints what the
//! notification surface, form and analytics saw. Uses simulated time unless
//! `--realtime` is given.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sitefeedback::{
    analytics::{Analytics, MemoryAnalytics},
    config::{ConfigManager, SiteConfig},
    error::{SiteError, get_user_friendly_error},
    notifications::Severity,
    signup::SubmitOutcome,
    site::Site,
    timing::{RealtimeScheduler, Scheduler, SharedScheduler, SimulatedScheduler},
    utils::{self, LogTarget},
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Drive the site's notification, signup and search behavior from the terminal
#[derive(Parser, Debug)]
#[command(name = "sitefeedback", version)]
struct Args {
    /// Configuration file (defaults to $SITEFEEDBACK_HOME/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wait on the wall clock instead of simulating time
    #[arg(long)]
    realtime: bool,

    /// Write logs to this directory instead of stderr
    #[arg(long, value_name = "DIR")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit the newsletter form with EMAIL
    Subscribe {
        /// Text typed into the email field
        email: String,
    },
    /// Type QUERY into the search box
    Search {
        /// Search text
        query: String,
    },
    /// Show a notification and let it run its course
    Notify {
        /// Message text
        message: String,
        /// Notification severity
        #[arg(short, long, value_enum, default_value_t = SeverityArg::Info)]
        severity: SeverityArg,
    },
    /// Write the default configuration to the config path
    InitConfig,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeverityArg {
    Info,
    Success,
    Error,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Info => Severity::Info,
            SeverityArg::Success => Severity::Success,
            SeverityArg::Error => Severity::Error,
        }
    }
}

/// Clock driving a run: simulated or wall time
enum Clock {
    Simulated(Arc<SimulatedScheduler>),
    Realtime(Arc<RealtimeScheduler>),
}

impl Clock {
    fn scheduler(&self) -> SharedScheduler {
        match self {
            Clock::Simulated(s) => s.clone(),
            Clock::Realtime(s) => s.clone(),
        }
    }

    fn now(&self) -> Duration {
        self.scheduler().now()
    }

    fn run_for(&self, window: Duration) {
        match self {
            Clock::Simulated(s) => {
                s.advance(window);
            }
            Clock::Realtime(s) => {
                s.run_for(window);
            }
        }
    }

    fn run_until_idle(&self) {
        match self {
            Clock::Simulated(s) => {
                s.run_until_idle();
            }
            Clock::Realtime(s) => {
                s.run_until_idle();
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("sitefeedback failed: {e:#}");
        eprintln!("sitefeedback failed:\n\n{}", describe_error(&e));
        return Err(e);
    }
    Ok(())
}

/// Text shown to the user for a failed run
///
/// Crate errors get their friendly message; anything else shows the context chain.
fn describe_error(e: &anyhow::Error) -> String {
    e.downcast_ref::<SiteError>()
        .map_or_else(|| format!("{e:#}"), get_user_friendly_error)
}

fn run(args: Args) -> Result<()> {
    let log_target = args
        .log_file
        .clone()
        .map_or(LogTarget::Stderr, LogTarget::File);
    utils::init_logging(&log_target).context("Failed to initialize logging system")?;

    let config_path = args.config.clone().unwrap_or_else(ConfigManager::get_config_path);

    if let Command::InitConfig = args.command {
        ConfigManager::save_to(&config_path, &SiteConfig::default())
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    let config =
        ConfigManager::load_from(&config_path).context("Failed to load site configuration")?;

    let clock = if args.realtime {
        Clock::Realtime(RealtimeScheduler::shared())
    } else {
        Clock::Simulated(SimulatedScheduler::shared())
    };
    let events = Arc::new(MemoryAnalytics::new());
    let site = Site::new(&config, clock.scheduler(), Analytics::new(events.clone()));

    match args.command {
        Command::Subscribe { email } => run_subscribe(&site, &clock, &email),
        Command::Search { query } => run_search(&site, &clock, &query),
        Command::Notify { message, severity } => {
            site.presenter.present(message, severity.into());
            print_surface(&site, &clock);
            clock.run_until_idle();
            print_surface(&site, &clock);
        }
        Command::InitConfig => {}
    }

    for event in events.events() {
        println!(
            "analytics: {}",
            serde_json::to_string(&event).context("Failed to encode analytics event")?
        );
    }

    info!("Done");
    Ok(())
}

fn run_subscribe(site: &Site, clock: &Clock, email: &str) {
    site.signup.type_email(email);
    match site.signup.submit() {
        SubmitOutcome::Rejected => {
            print_surface(site, clock);
            print_form(site, clock);
        }
        SubmitOutcome::Started(request_id) => {
            println!("[{:?}] signup {} pending", clock.now(), request_id);
            print_form(site, clock);
            // Settle the request but stop before the notification expires
            clock.run_for(site.presenter.timings().auto_dismiss);
            print_surface(site, clock);
            print_form(site, clock);
        }
        SubmitOutcome::Ignored => println!("submission ignored"),
    }
    clock.run_until_idle();
}

fn run_search(site: &Site, clock: &Clock, query: &str) {
    site.search.on_input(query);
    clock.run_until_idle();

    let panel = site.search.panel();
    if !panel.is_visible() {
        println!("[{:?}] search hidden (query too short)", clock.now());
        return;
    }
    if let Some(message) = panel.message() {
        println!("[{:?}] {}", clock.now(), message);
    }
    for result in panel.results() {
        println!(
            "[{:?}] {} <{}> ({:?})",
            clock.now(),
            result.title,
            result.url,
            result.kind
        );
    }
}

fn print_surface(site: &Site, clock: &Clock) {
    let surface = site.presenter.surface().lock();
    match surface.current() {
        Some(rendered) => println!(
            "[{:?}] notification <{}> {:?}: {}",
            clock.now(),
            rendered.notification().severity().class_name(),
            rendered.phase(),
            rendered.notification().message()
        ),
        None => println!("[{:?}] notification surface empty", clock.now()),
    }
}

fn print_form(site: &Site, clock: &Clock) {
    let form = site.signup.form();
    println!(
        "[{:?}] form input={:?} button={:?} enabled={}",
        clock.now(),
        form.input.value(),
        form.trigger.label(),
        form.trigger.is_enabled()
    );
}
