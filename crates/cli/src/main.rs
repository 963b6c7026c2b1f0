use clap::{Parser, Subcommand};
use oos_core::components::general::Platform;
use oos_core::config::{
    date_bracket_rule_from_env_value, history_count_style_from_env_value, resolve_output_dir,
    resolve_state_file, resolve_template_dir,
};
use oos_core::form::{self, set_field, FIELDS};
use oos_core::{facility, personnel, CoreConfig, ReportService};
use oos_store::FormState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "oos")]
#[command(about = "OOS investigation wizard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the saved session
    Show {
        /// Include fields for every platform, not just the selected one
        #[arg(long)]
        all: bool,
    },
    /// Set one field of the saved session
    Set {
        /// Field key, e.g. sample_id
        key: String,
        /// New value (empty string clears the field)
        value: String,
    },
    /// Discard the saved session
    Reset,
    /// Look up where a biosafety cabinet is located
    Equipment {
        /// Equipment id, e.g. 1310
        id: String,
    },
    /// Look up a staff member's name from their initials
    Name {
        /// Initials, e.g. DL
        initials: String,
    },
    /// Print the render context for the saved session
    Preview {
        /// Print only this placeholder's value
        #[arg(long)]
        key: Option<String>,
    },
    /// Generate the report document for the saved session
    Generate {
        /// Platform to generate for (ScanRDI, Celsis, USP 71); saved to the session
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("oos=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let cfg = Arc::new(CoreConfig::new(
        resolve_state_file(std::env::var("OOS_STATE_FILE").ok()),
        resolve_template_dir(std::env::var("OOS_TEMPLATE_DIR").ok().map(PathBuf::from))?,
        resolve_output_dir(std::env::var("OOS_OUTPUT_DIR").ok()),
        date_bracket_rule_from_env_value(std::env::var("OOS_DATE_RULE").ok())?,
        history_count_style_from_env_value(std::env::var("OOS_HISTORY_COUNT_STYLE").ok())?,
    )?);
    tracing::debug!(
        "state file {}, templates in {}",
        cfg.state_file().display(),
        cfg.template_dir().display()
    );
    let service = ReportService::new(cfg);

    match cli.command {
        Some(Commands::Show { all }) => show(&service.load(), all),
        Some(Commands::Set { key, value }) => {
            let mut state = service.load();
            match set_field(&mut state, &key, &value).and_then(|()| service.save(&state)) {
                Ok(()) => println!("{} = {}", key, state.text(&key)),
                Err(e) => eprintln!("Error setting {}: {}", key, e),
            }
        }
        Some(Commands::Reset) => match service.reset() {
            Ok(_) => println!("Session reset."),
            Err(e) => eprintln!("Error resetting session: {}", e),
        },
        Some(Commands::Equipment { id }) => {
            let record = facility::resolve(&id);
            println!("Tag:   {}", record.tag());
            println!("Suite: {}", record.suite);
            println!("Room:  {}", record.room_id);
            println!(
                "Zone:  {} ({})",
                record.suffix(),
                record.zone_description()
            );
        }
        Some(Commands::Name { initials }) => match personnel::lookup_name(&initials).as_str() {
            "" => println!("No staff member with initials '{}'", initials.trim()),
            name => println!("{}", name),
        },
        Some(Commands::Preview { key }) => {
            let context = service.preview(&service.load());
            match key {
                Some(key) => match context.get(&key) {
                    Some(value) => println!("{}", value),
                    None => eprintln!("Unknown placeholder '{}'", key),
                },
                None => match context.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("Error rendering preview: {}", e),
                },
            }
        }
        Some(Commands::Generate { platform }) => {
            let mut state = service.load();
            if let Some(platform) = platform {
                match Platform::parse(&platform) {
                    Some(p) => state.set_text(form::PLATFORM, p.label()),
                    None => {
                        eprintln!(
                            "Unknown platform '{}' (expected ScanRDI, Celsis or USP 71)",
                            platform
                        );
                        return Ok(());
                    }
                }
            }
            match service.generate_with_placeholders(&state) {
                Ok(outcome) => {
                    if let Some(warning) = outcome.save_warning {
                        eprintln!("Warning: session not saved: {}", warning);
                    }
                    println!("Report written to {}", outcome.output_path.display());
                }
                Err(e) => eprintln!("Error generating report: {}", e),
            }
        }
        None => {
            println!("Use 'oos --help' for commands");
        }
    }

    Ok(())
}

fn show(state: &FormState, all: bool) {
    let platform = Platform::parse(state.text(form::PLATFORM)).unwrap_or_default();
    let mut section = None;
    for spec in FIELDS.iter().filter(|f| all || f.applies_to(platform)) {
        if section != Some(spec.section) {
            section = Some(spec.section);
            println!("\n[{}]", spec.section.title());
        }
        let value = state.get(spec.key).map(|v| v.to_string()).unwrap_or_default();
        println!("  {:<24} {:<48} {}", spec.key, spec.label, value);
    }
}
