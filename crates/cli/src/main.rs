use anyhow::Context;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use stockdesk_core::client::{HttpStockAdminClient, StockAdminClient};
use stockdesk_core::domain::draft::DraftField;
use stockdesk_core::domain::stock::{Sector, StockEntry};
use stockdesk_core::panel::{ActionOutcome, PanelAction, PriceCommit, Prompter, Refresh, StockPanel};
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod owner;
mod prompt;
mod render;

#[derive(Debug, Parser)]
#[command(name = "stockdesk", about = "Manage the stock list behind the admin API")]
struct Args {
    /// Admin API base URL. Overrides STOCKDESK_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the summary counters and the stock table.
    List,

    /// Show every field of one entry.
    Show { id: String },

    /// Add a new stock. Symbol is upper-cased.
    Add {
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        name: String,
        /// One of: Technology, Healthcare, Finance, Energy, Consumer, Industrial, Real Estate.
        #[arg(long, default_value = "")]
        sector: String,
        #[arg(long, default_value = "")]
        price: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        change_percent: String,
    },

    /// Remove a stock after confirmation.
    Delete {
        id: String,
        /// Acknowledge the confirmation up front.
        #[arg(long)]
        yes: bool,
    },

    /// Set a new price for a stock.
    SetPrice { id: String, price: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let mut settings = stockdesk_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    if let Some(base_url) = args.base_url {
        settings.base_url = Some(base_url);
    }

    let assume_yes = matches!(args.command, Command::Delete { yes: true, .. });

    let result = run(&settings, args.command, assume_yes).await;
    if let Err(err) = &result {
        sentry_anyhow::capture_anyhow(err);
        tracing::error!(error = %err, "stockdesk command failed");
    }
    result
}

async fn run(
    settings: &stockdesk_core::config::Settings,
    command: Command,
    assume_yes: bool,
) -> anyhow::Result<ExitCode> {
    let client = HttpStockAdminClient::from_settings(settings)?;
    let initial = client
        .list_stocks()
        .await
        .context("failed to load the stock list")?;

    let (refresher, snapshots) = owner::SnapshotRefresher::new(client.clone());
    let mut panel = StockPanel::new(client, prompt::TerminalPrompter::new(assume_yes), refresher);
    panel.set_snapshot(initial);

    execute(&mut panel, snapshots, command).await
}

async fn execute<C, P, R>(
    panel: &mut StockPanel<C, P, R>,
    mut snapshots: watch::Receiver<Vec<StockEntry>>,
    command: Command,
) -> anyhow::Result<ExitCode>
where
    C: StockAdminClient,
    P: Prompter,
    R: Refresh,
{
    let outcome = match command {
        Command::List => {
            print!("{}", render::render_panel(panel.summary(), panel.entries()));
            return Ok(ExitCode::SUCCESS);
        }
        Command::Show { id } => {
            panel.dispatch(PanelAction::Select(id.clone()));
            return match panel.selected() {
                Some(entry) => {
                    print!("{}", render::render_detail(entry));
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("stock {id} not found");
                    Ok(ExitCode::FAILURE)
                }
            };
        }
        Command::Add {
            symbol,
            name,
            sector,
            price,
            change_percent,
        } => {
            let sector = canonical_sector(&sector)?;
            panel.dispatch(PanelAction::OpenAddDialog);
            for (field, value) in [
                (DraftField::Symbol, symbol),
                (DraftField::Name, name),
                (DraftField::Sector, sector),
                (DraftField::Price, price),
                (DraftField::ChangePercent, change_percent),
            ] {
                panel.dispatch(PanelAction::EditDraft(field, value));
            }
            if !panel.state().can_submit_draft() {
                eprintln!("symbol and name are required");
                return Ok(ExitCode::FAILURE);
            }
            panel.submit_draft().await
        }
        Command::Delete { id, .. } => panel.delete_entry(&id).await,
        Command::SetPrice { id, price } => {
            panel.dispatch(PanelAction::EditPrice {
                id: id.clone(),
                value: price,
            });
            let outcome = panel.commit_price(&id, PriceCommit::Blur).await;
            if outcome == ActionOutcome::Skipped {
                eprintln!("price for stock {id} unchanged or stock not listed; nothing sent");
            }
            outcome
        }
    };

    if snapshots.has_changed().unwrap_or(false) {
        let entries = snapshots.borrow_and_update().clone();
        panel.set_snapshot(entries);
        print!("{}", render::render_panel(panel.summary(), panel.entries()));
    }

    Ok(match outcome {
        ActionOutcome::Completed | ActionOutcome::Cancelled | ActionOutcome::Skipped => {
            ExitCode::SUCCESS
        }
        ActionOutcome::Failed => ExitCode::FAILURE,
    })
}

/// Empty means "no sector selected"; anything else must be one of the listed sectors.
fn canonical_sector(input: &str) -> anyhow::Result<String> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }

    let sector = Sector::from_label(input);
    anyhow::ensure!(
        sector.is_listed(),
        "unknown sector {input:?}; expected one of: {}",
        Sector::LISTED.map(|s| s.label().to_string()).join(", ")
    );
    Ok(sector.label().to_string())
}

fn init_sentry(settings: &stockdesk_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
