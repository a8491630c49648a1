use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use edulearn_core::catalog::PRODUCT_NAME;
use services::{AppServices, DashboardService, SessionService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod cli;

use cli::{Cli, Command, SessionCommand, StorageArgs, sqlite_file_path};

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn sessions(&self) -> Arc<SessionService> {
        self.services.sessions()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

async fn open_services(args: &StorageArgs) -> anyhow::Result<AppServices> {
    let Some(db_url) = args.database_url() else {
        tracing::info!("using in-memory session storage");
        return Ok(AppServices::in_memory());
    };

    ensure_database_dir(&db_url)?;
    let services = AppServices::new_sqlite(&db_url)
        .await
        .with_context(|| format!("opening {db_url}"))?;
    Ok(services)
}

fn launch_ui(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(PRODUCT_NAME)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn show_session(services: &AppServices, json: bool) -> anyhow::Result<()> {
    let record = services.sessions().get_session().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    if record.is_logged_in() {
        println!("signed in: yes");
        println!("name:      {}", record.display_name());
        println!("email:     {}", record.display_email());
    } else {
        println!("signed in: no");
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let services = open_services(&cli.storage).await?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            launch_ui(services);
            Ok(())
        }
        Command::Session(SessionCommand::Show { json }) => show_session(&services, json).await,
        Command::Session(SessionCommand::Clear) => {
            services.sessions().logout().await?;
            println!("session cleared");
            Ok(())
        }
    }
}

/// The database file itself is created on connect; its directory must exist first.
fn ensure_database_dir(db_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(db_url) else {
        return Ok(());
    };
    anyhow::ensure!(
        !path.as_os_str().is_empty(),
        "invalid --db value: {db_url}"
    );
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::error!("{err:#}");
        std::process::exit(2);
    }
}
