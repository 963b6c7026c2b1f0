use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oos_core::components::general::Platform;
use oos_core::config::{
    date_bracket_rule_from_env_value, history_count_style_from_env_value, resolve_output_dir,
    resolve_state_file, resolve_template_dir,
};
use oos_core::form::{self, FIELDS, FieldSpec, set_field};
use oos_core::personnel::lookup_name;
use oos_core::{CoreConfig, ReportService};
use oos_store::FormState;

/// Entered at a prompt to clear the field.
const CLEAR: &str = "-";

/// Main entry point for the interactive OOS wizard
///
/// Walks through every form field that applies to the selected platform, starting from the
/// saved session, then saves the session and generates the report.
///
/// At each prompt an empty answer keeps the shown value and `-` clears it. End of input stops
/// prompting and moves straight to generation.
///
/// # Environment Variables
/// - `OOS_STATE_FILE`: saved session file (default: "oos_wizard_history.json")
/// - `OOS_TEMPLATE_DIR`: directory holding the platform templates
///   (default: "templates" if present, else ".")
/// - `OOS_OUTPUT_DIR`: directory reports are written to (default: ".")
/// - `OOS_DATE_RULE`: `calendar` or `business-days` (default: "calendar")
/// - `OOS_HISTORY_COUNT_STYLE`: `words` or `digits` (default: "words")
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("oos=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cfg = Arc::new(CoreConfig::new(
        resolve_state_file(std::env::var("OOS_STATE_FILE").ok()),
        resolve_template_dir(std::env::var("OOS_TEMPLATE_DIR").ok().map(PathBuf::from))?,
        resolve_output_dir(std::env::var("OOS_OUTPUT_DIR").ok()),
        date_bracket_rule_from_env_value(std::env::var("OOS_DATE_RULE").ok())?,
        history_count_style_from_env_value(std::env::var("OOS_HISTORY_COUNT_STYLE").ok())?,
    )?);

    tracing::info!("++ Starting OOS wizard (session {})", cfg.state_file().display());

    let service = ReportService::new(cfg);
    let mut state = service.load();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("OOS Investigation Wizard");
    println!("Press Enter to keep a value, '{CLEAR}' to clear it.");

    let completed = prompt_fields(&mut input, &mut state)?;
    if let Err(e) = service.save(&state) {
        eprintln!("Warning: session not saved: {e}");
    }

    if completed && !confirm(&mut input, "Generate report now? [Y/n] ")? {
        println!("Session saved. Run again to generate.");
        return Ok(());
    }

    match service.generate_with_placeholders(&state) {
        Ok(outcome) => {
            if let Some(warning) = outcome.save_warning {
                eprintln!("Warning: session not saved: {warning}");
            }
            println!("Report written to {}", outcome.output_path.display());
        }
        Err(e) => eprintln!("Error generating report: {e}"),
    }

    Ok(())
}

/// Prompts for each applicable field. Returns `false` if input ended early.
fn prompt_fields(input: &mut impl BufRead, state: &mut FormState) -> io::Result<bool> {
    let mut section = None;

    for spec in FIELDS {
        let platform = Platform::parse(state.text(form::PLATFORM)).unwrap_or_default();
        if !spec.applies_to(platform) {
            continue;
        }
        if section != Some(spec.section) {
            section = Some(spec.section);
            println!("\n== {} ==", spec.section.title());
        }

        loop {
            let current = shown_value(spec, state);
            let Some(answer) = ask(input, &format!("{} [{}]: ", spec.label, current))? else {
                return Ok(false);
            };

            let value = match answer.as_str() {
                "" => current,
                CLEAR => String::new(),
                entered => entered.to_string(),
            };
            match set_field(state, spec.key, &value) {
                Ok(()) => break,
                Err(e) => println!("  {e}"),
            }
        }
    }

    Ok(true)
}

/// Value offered at a prompt: the saved value, or for a blank name the directory name
/// matching the initials already entered.
fn shown_value(spec: &FieldSpec, state: &FormState) -> String {
    let saved = state.get(spec.key).map(|v| v.to_string()).unwrap_or_default();
    if !saved.trim().is_empty() {
        return saved;
    }
    match spec.key.strip_suffix("_name") {
        Some(role) => lookup_name(state.text(&format!("{role}_initial"))),
        None => saved,
    }
}

fn confirm(input: &mut impl BufRead, prompt: &str) -> io::Result<bool> {
    Ok(match ask(input, prompt)? {
        Some(answer) => !answer.eq_ignore_ascii_case("n") && !answer.eq_ignore_ascii_case("no"),
        None => true,
    })
}

/// Prints `prompt` and reads one trimmed line; `None` at end of input.
fn ask(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
