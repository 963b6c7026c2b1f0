//! Flattening a form into the placeholder map handed to the renderer.
//!
//! Placeholder names are the contract with the document templates. Every name listed here is
//! always present in the context, with an empty string standing in for a missing value.

use crate::components::general::{GeneralInfo, Platform};
use crate::config::CoreConfig;
use crate::constants::OUTPUT_EXTENSION;
use crate::dates::bracket_test_date;
use crate::form::InvestigationForm;
use crate::narrative::Narratives;
use crate::validation::sanitize_file_name;
use oos_template::RenderContext;

/// Builds the complete render context for a form.
pub fn build_render_context(form: &InvestigationForm, cfg: &CoreConfig) -> RenderContext {
    let mut ctx = RenderContext::new();

    let general = &form.general;
    ctx.insert("platform", general.platform.label());
    ctx.insert("oos_id", &general.oos_id);
    ctx.insert("client_name", &general.client_name);
    ctx.insert("sample_id", &general.sample_id);
    ctx.insert("sample_name", &general.sample_name);
    ctx.insert("lot_number", &general.lot_number);
    ctx.insert("test_date", &general.test_date);
    ctx.insert("dosage_form", &general.dosage_form);
    ctx.insert("monthly_cleaning_date", &general.monthly_cleaning_date);

    let staff = [
        ("prepper", &form.personnel.prepper),
        ("analyst", &form.personnel.analyst),
        ("changeover", &form.personnel.changeover),
        ("reader", &form.personnel.reader),
    ];
    for (role, member) in staff {
        ctx.insert(format!("{role}_name"), &member.name);
        ctx.insert(format!("{role}_initial"), &member.initials);
    }

    let processing = &form.equipment.processing;
    let changeover = &form.equipment.changeover;
    let changeover_tag = changeover.tag();
    ctx.insert("bsc_id", processing.tag());
    ctx.insert("cr_id", &processing.room_id);
    ctx.insert("cr_suit", &processing.suite);
    ctx.insert("chgbsc_id", changeover_tag.as_str());
    ctx.insert("changeover_id", changeover_tag);
    ctx.insert("changeover_suit", &changeover.suite);

    let controls = &form.controls;
    ctx.insert("control_positive", &controls.control_positive);
    ctx.insert("control_lot", &controls.control_lot);
    ctx.insert("control_data", &controls.control_data);
    ctx.insert("organism_morphology", &controls.organism_morphology);

    for entry in &form.observations.entries {
        ctx.insert(entry.category.observation_key(), &entry.observation);
        ctx.insert(entry.category.reference_key(), &entry.reference);
        ctx.insert(entry.category.organism_key(), &entry.organism);
    }
    ctx.insert("weekly_initial", &form.observations.weekly_initial);
    ctx.insert("date_of_weekly", &form.observations.date_of_weekly);

    let bracket = bracket_test_date(&general.test_date, cfg.date_bracket_rule());
    ctx.insert("date_before_test", bracket.before);
    ctx.insert("date_after_test", bracket.after);

    let details = &form.platform_details;
    ctx.insert("scan_id", &details.scan_id);
    ctx.insert("luminometer_id", &details.luminometer_id);
    ctx.insert("reagent_kit_lot", &details.reagent_kit_lot);
    ctx.insert("ftm_lot", &details.ftm_lot);
    ctx.insert("tsb_lot", &details.tsb_lot);
    ctx.insert("subculture", details.subculture.label());

    let narratives = Narratives::assemble(form, cfg.history_count_style());
    ctx.insert("equipment_summary", narratives.equipment_summary);
    ctx.insert("narrative_summary", narratives.narrative_summary);
    ctx.insert("em_details", narratives.em_details);
    ctx.insert("sample_history_paragraph", narratives.sample_history_paragraph);
    ctx.insert(
        "cross_contamination_summary",
        narratives.cross_contamination_summary,
    );

    tracing::debug!("built render context with {} placeholders", ctx.len());
    ctx
}

/// File name of the generated report: `{oos_id} {client_name} ({sample_id}) - {platform}.docx`.
pub fn output_file_name(general: &GeneralInfo, platform: Platform) -> String {
    sanitize_file_name(&format!(
        "{} {} ({}) - {}.{}",
        general.oos_id,
        general.client_name,
        general.sample_id,
        platform.label(),
        OUTPUT_EXTENSION
    ))
}
