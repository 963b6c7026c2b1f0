//! Report generation service.
//!
//! [`ReportService`] ties the session store, the narrative assembler and a
//! [`TemplateRenderer`] together. Generation is all-or-nothing for the output document: the
//! rendered bytes are written to a temporary sibling file which is then renamed into place, so
//! a failed render or write never leaves a partial report behind.

use crate::components::general::Platform;
use crate::config::CoreConfig;
use crate::constants::{OUTPUT_EXTENSION, TEMPLATE_EXTENSIONS};
use crate::context::{build_render_context, output_file_name};
use crate::form::{default_state, InvestigationForm};
use crate::{OosError, OosResult};
use chrono::{Local, NaiveDate};
use oos_store::{FormState, FormStore};
use oos_template::{PlaceholderRenderer, RenderContext, TemplateRenderer};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of a successful [`ReportService::generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Where the report was written.
    pub output_path: PathBuf,
    /// Template the report was rendered from.
    pub template_path: PathBuf,
    /// Set when the session could not be saved before rendering.
    pub save_warning: Option<String>,
}

// ============================================================================
// REPORT SERVICE
// ============================================================================

/// Session persistence, preview and document generation.
#[derive(Clone, Debug)]
pub struct ReportService {
    cfg: Arc<CoreConfig>,
}

impl ReportService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    /// Store for the configured state file, with defaults dated today.
    pub fn store(&self) -> FormStore {
        self.store_on(Local::now().date_naive())
    }

    /// Store whose default test date is `today`.
    pub fn store_on(&self, today: NaiveDate) -> FormStore {
        FormStore::new(self.cfg.state_file(), default_state(today))
    }

    /// Loads the saved session, or a fresh one. Never fails.
    pub fn load(&self) -> FormState {
        self.store().load()
    }

    pub fn save(&self, state: &FormState) -> OosResult<()> {
        Ok(self.store().save(state)?)
    }

    /// Deletes the saved session and returns a fresh one.
    pub fn reset(&self) -> OosResult<FormState> {
        let store = self.store();
        store.clear()?;
        tracing::info!("cleared saved session at {}", store.path().display());
        Ok(store.defaults().clone())
    }

    /// The render context a generate call would use. No I/O.
    pub fn preview(&self, state: &FormState) -> RenderContext {
        let form = InvestigationForm::from_state(state);
        build_render_context(&form, &self.cfg)
    }

    /// Finds the template file for `platform` in the template directory.
    ///
    /// Tries each of [`TEMPLATE_EXTENSIONS`] in order.
    ///
    /// # Errors
    ///
    /// Returns [`OosError::TemplateNotFound`] naming the `.docx` path when none exists.
    pub fn locate_template(&self, platform: Platform) -> OosResult<PathBuf> {
        let dir = self.cfg.template_dir();
        TEMPLATE_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", platform.template_stem(), ext)))
            .find(|path| path.is_file())
            .ok_or_else(|| {
                OosError::TemplateNotFound(
                    dir.join(format!("{}.{}", platform.template_stem(), OUTPUT_EXTENSION)),
                )
            })
    }

    /// Generates the report for `state` with the bundled placeholder renderer.
    ///
    /// Escaping follows the template's extension.
    pub fn generate_with_placeholders(&self, state: &FormState) -> OosResult<GenerateOutcome> {
        let platform = InvestigationForm::from_state(state).general.platform;
        let template_path = self.locate_template(platform)?;
        let renderer = PlaceholderRenderer::for_extension(extension_of(&template_path));
        self.generate(state, &renderer)
    }

    /// Saves the session, renders the platform template and writes the report.
    ///
    /// A failed save does not stop generation; it is logged and returned in
    /// [`GenerateOutcome::save_warning`].
    ///
    /// # Errors
    ///
    /// Returns `OosError` if:
    /// - the platform template is missing or unreadable
    /// - the renderer rejects the template
    /// - the output directory cannot be created or the report cannot be written
    ///
    /// No output file exists after an error.
    pub fn generate(
        &self,
        state: &FormState,
        renderer: &dyn TemplateRenderer,
    ) -> OosResult<GenerateOutcome> {
        let save_warning = match self.save(state) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!("could not save session before generating: {}", e);
                Some(e.to_string())
            }
        };

        let form = InvestigationForm::from_state(state);
        let platform = form.general.platform;
        let template_path = self.locate_template(platform)?;
        let template = fs::read(&template_path).map_err(OosError::TemplateRead)?;

        let context = build_render_context(&form, &self.cfg);
        let rendered = renderer.render(&template, &context)?;

        let mut file_name = PathBuf::from(output_file_name(&form.general, platform));
        let template_ext = extension_of(&template_path);
        if !template_ext.eq_ignore_ascii_case(OUTPUT_EXTENSION) {
            file_name.set_extension(template_ext);
        }

        let output_dir = self.cfg.output_dir();
        fs::create_dir_all(output_dir).map_err(OosError::OutputDirCreation)?;
        let output_path = output_dir.join(file_name);
        write_atomically(&output_path, &rendered)?;

        tracing::info!(
            "generated {} report {} from {}",
            platform,
            output_path.display(),
            template_path.display()
        );

        Ok(GenerateOutcome {
            output_path,
            template_path,
            save_warning,
        })
    }
}

fn extension_of(path: &Path) -> &str {
    path.extension().and_then(|ext| ext.to_str()).unwrap_or("")
}

fn write_atomically(path: &Path, bytes: &[u8]) -> OosResult<()> {
    let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, bytes).map_err(OosError::FileWrite)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(OosError::FileWrite(e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{PLATFORM, SAMPLE_ID};
    use tempfile::TempDir;

    fn service(dir: &Path) -> ReportService {
        ReportService::new(Arc::new(CoreConfig::in_dir(dir)))
    }

    #[test]
    fn locate_template_prefers_docx_then_falls_back() {
        let temp = TempDir::new().unwrap();
        let svc = service(temp.path());

        let md = temp.path().join("Celsis OOS template.md");
        fs::write(&md, "{{ oos_id }}").unwrap();
        assert_eq!(svc.locate_template(Platform::Celsis).unwrap(), md);

        let docx = temp.path().join("Celsis OOS template.docx");
        fs::write(&docx, "{{ oos_id }}").unwrap();
        assert_eq!(svc.locate_template(Platform::Celsis).unwrap(), docx);
    }

    #[test]
    fn missing_template_names_expected_docx() {
        let temp = TempDir::new().unwrap();
        let err = service(temp.path())
            .locate_template(Platform::Usp71)
            .unwrap_err();
        assert!(matches!(
            err,
            OosError::TemplateNotFound(path) if path.ends_with("USP71 OOS template.docx")
        ));
    }

    #[test]
    fn reset_removes_saved_session() {
        let temp = TempDir::new().unwrap();
        let svc = service(temp.path());

        let mut state = svc.load();
        state.set_text(SAMPLE_ID, "E1");
        svc.save(&state).unwrap();
        assert_eq!(svc.load().text(SAMPLE_ID), "E1");

        let fresh = svc.reset().unwrap();
        assert_eq!(fresh.text(SAMPLE_ID), "");
        assert!(!svc.config().state_file().exists());
    }

    #[test]
    fn text_template_keeps_its_extension() {
        let temp = TempDir::new().unwrap();
        let svc = service(temp.path());
        fs::write(temp.path().join("ScanRDI OOS template.txt"), "Sample {{sample_id}}").unwrap();

        let mut state = svc.load();
        state.set_text(PLATFORM, "ScanRDI");
        state.set_text(SAMPLE_ID, "E42");
        let outcome = svc.generate_with_placeholders(&state).unwrap();

        assert_eq!(
            outcome.output_path.file_name().unwrap(),
            "OOS-250000 Pharmacy Name (E42) - ScanRDI.txt"
        );
        assert_eq!(fs::read_to_string(&outcome.output_path).unwrap(), "Sample E42");
        assert_eq!(outcome.save_warning, None);
    }
}
