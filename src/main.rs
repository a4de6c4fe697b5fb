use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use em_app::DeleteOutcome;
use em_core::form::FormMode;
use em_core::ids::EmployeeId;
use em_core::listing::{PageRequest, PAGE_SIZE_OPTIONS};
use em_terminal::bootstrap::{self, WiredApp};
use em_terminal::{views, Console, FormDriver};

#[derive(Parser)]
#[command(name = "employee-manager")]
#[command(about = "Manage employee records over the employee REST API", long_about = None)]
struct Cli {
    /// TOML config file; defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List employees, newest identifier first
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Rows per page (5, 10, 15 or 20); defaults to the configured size
        #[arg(short = 's', long)]
        page_size: Option<usize>,
    },
    /// Add an employee interactively
    Add,
    /// Edit an employee interactively
    Edit {
        /// Employee identifier
        id: String,
    },
    /// Delete an employee after confirmation
    Delete {
        /// Employee identifier
        id: String,
    },
    /// Export every employee as CSV
    Export {
        /// Output file; defaults to the configured export file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    bootstrap::tracing::init_tracing_subscriber()
        .context("Failed to initialize tracing")?;

    let config = bootstrap::resolve_config(cli.config.as_deref())?;
    tracing::info!(base_url = %config.api.base_url, "configuration resolved");

    let wired = bootstrap::wire_app(config, Arc::new(Console::stdio()))?;

    match cli.command {
        Commands::List { page, page_size } => run_list(&wired, page, page_size).await,
        Commands::Add => {
            run_form(&wired, FormMode::Create).await;
            Ok(())
        }
        Commands::Edit { id } => {
            run_form(
                &wired,
                FormMode::Edit {
                    id: EmployeeId::new(id),
                },
            )
            .await;
            Ok(())
        }
        Commands::Delete { id } => run_delete(&wired, EmployeeId::new(id)).await,
        Commands::Export { output } => run_export(&wired, output).await,
    }
}

async fn run_list(wired: &WiredApp, page: usize, page_size: Option<usize>) -> Result<()> {
    if page == 0 {
        bail!("page numbers start at 1");
    }
    let page_size = page_size.unwrap_or(wired.app.config().listing.page_size);
    if !PAGE_SIZE_OPTIONS.contains(&page_size) {
        bail!("page size must be one of {PAGE_SIZE_OPTIONS:?}");
    }

    let page = wired
        .app
        .list_employees()
        .execute(PageRequest {
            page: page - 1,
            page_size,
        })
        .await
        .context("Failed to fetch employees")?;
    wired.console.println(views::render_page(&page).trim_end());
    Ok(())
}

async fn run_form(wired: &WiredApp, mode: FormMode) {
    let form = wired.app.employee_form(mode);
    FormDriver::new(wired.console.clone(), wired.navigator.clone())
        .run(&form)
        .await;
    if let Some(route) = wired.navigator.current() {
        tracing::debug!(route = %route, "form finished");
    }
}

async fn run_delete(wired: &WiredApp, id: EmployeeId) -> Result<()> {
    match wired.app.delete_employee().execute(&id).await {
        DeleteOutcome::Deleted | DeleteOutcome::Declined => Ok(()),
        DeleteOutcome::Failed(err) => Err(err).with_context(|| format!("Failed to delete {id}")),
    }
}

async fn run_export(wired: &WiredApp, output: Option<PathBuf>) -> Result<()> {
    let export = wired.app.export_employees();
    let path = output.unwrap_or_else(|| PathBuf::from(export.file_name()));
    let text = export.execute().await.context("Failed to fetch employees")?;
    std::fs::write(&path, text)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    wired
        .console
        .println(&format!("Exported to {}", path.display()));
    Ok(())
}
