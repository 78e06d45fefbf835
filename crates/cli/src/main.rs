use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use plantnxt_nav::{CatalogFile, NavigationEntry, NavigationMenu, Role, build_menu, default_catalog, load_catalog};
use plantnxt_util::{UserPreferences, expand_tilde};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// PlantNxt navigation panel: inspect the role-filtered menu or run the
/// terminal host.
#[derive(Debug, Parser)]
#[command(name = "plantnxt", version, about)]
struct Cli {
    /// Navigation catalog (JSON or YAML). Defaults to the built-in catalog.
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the grouped menu a role would see.
    Menu {
        /// Viewer role, e.g. "CFO" or "plant-head". Omit for an anonymous viewer.
        #[arg(long)]
        role: Option<Role>,
        /// Emit the menu as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Load and validate the catalog, then report what it contains.
    Validate,
    /// Write the catalog in file form, as a starting point for a custom one.
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Yaml)]
        format: ExportFormat,
    },
    /// Run the interactive terminal panel.
    Tui {
        #[arg(long)]
        role: Option<Role>,
        /// Write logs here; the terminal host never logs to the screen.
        #[arg(long, value_name = "FILE")]
        log_file: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = cli.catalog.as_deref();

    match cli.command {
        Command::Tui { role, log_file } => run_tui(catalog, role, log_file.as_deref()),
        Command::Menu { role, json } => {
            init_tracing();
            let menu = build_menu(&catalog_entries(catalog)?, role);
            let output = if json { serde_json::to_string_pretty(&menu)? } else { render_menu(&menu) };
            println!("{output}");
            Ok(())
        }
        Command::Validate => {
            init_tracing();
            println!("{}", summarize(&catalog_entries(catalog)?));
            Ok(())
        }
        Command::Export { format } => {
            init_tracing();
            println!("{}", export(&catalog_entries(catalog)?, format)?);
            Ok(())
        }
    }
}

fn run_tui(catalog: Option<&str>, role: Option<Role>, log_file: Option<&str>) -> Result<()> {
    if let Some(path) = log_file {
        init_file_tracing(&expand_tilde(path))?;
    }
    let entries = catalog_entries(catalog)?;
    let preferences = Arc::new(open_preferences());
    plantnxt_tui::run(plantnxt_tui::RunOptions {
        entries,
        role,
        preferences,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// The alternate screen owns the terminal, so the TUI logs only to a file.
fn init_file_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn catalog_entries(catalog: Option<&str>) -> Result<Vec<NavigationEntry>> {
    match catalog {
        Some(path) => {
            let path = expand_tilde(path);
            load_catalog(&path).with_context(|| format!("failed to load catalog {}", path.display()))
        }
        None => Ok(default_catalog()),
    }
}

fn open_preferences() -> UserPreferences {
    match UserPreferences::new() {
        Ok(preferences) => {
            info!(path = %preferences.path().display(), "loaded preferences");
            preferences
        }
        Err(error) => {
            warn!(error = %error, "preferences unavailable; pin state will not be remembered");
            UserPreferences::ephemeral()
        }
    }
}

fn render_menu(menu: &NavigationMenu) -> String {
    if menu.is_empty() {
        return "(no entries visible)".to_string();
    }
    let label_width = menu.entries().map(|entry| entry.label.chars().count()).max().unwrap_or(0);
    let destination_width = menu.entries().map(|entry| entry.destination.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::new();
    for group in &menu.groups {
        lines.push(group.name.clone());
        for entry in &group.entries {
            let line = format!(
                "  {:<2}  {:<label_width$}  {:<destination_width$}  {}",
                entry.icon,
                entry.label,
                entry.destination,
                entry.phase.as_deref().unwrap_or_default(),
            );
            lines.push(line.trim_end().to_string());
        }
    }
    lines.join("\n")
}

fn summarize(entries: &[NavigationEntry]) -> String {
    let menu = build_menu(entries, None);
    let restricted = entries.iter().filter(|entry| entry.required_roles.is_some()).count();
    let groups = {
        let mut names: Vec<&str> = Vec::new();
        for entry in entries {
            if !names.contains(&entry.group.as_str()) {
                names.push(&entry.group);
            }
        }
        names.len()
    };
    let per_role = Role::ALL
        .iter()
        .map(|role| format!("{role}={}", build_menu(entries, Some(*role)).entry_count()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "catalog ok: {} entries in {groups} groups ({restricted} role-restricted, {} visible without a role)\nper role: {per_role}",
        entries.len(),
        menu.entry_count(),
    )
}

fn export(entries: &[NavigationEntry], format: ExportFormat) -> Result<String> {
    let file = CatalogFile::from_entries(entries);
    Ok(match format {
        ExportFormat::Json => serde_json::to_string_pretty(&file)?,
        ExportFormat::Yaml => serde_yaml::to_string(&file)?,
    })
}
