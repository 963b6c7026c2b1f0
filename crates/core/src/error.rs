#[derive(Debug, thiserror::Error)]
pub enum OosError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown form field '{0}'")]
    UnknownField(String),
    #[error("template not found: {path} (place it in the template directory)", path = .0.display())]
    TemplateNotFound(std::path::PathBuf),
    #[error("failed to read template file: {0}")]
    TemplateRead(std::io::Error),
    #[error("failed to create output directory: {0}")]
    OutputDirCreation(std::io::Error),
    #[error("failed to write output file: {0}")]
    FileWrite(std::io::Error),

    #[error("template error: {0}")]
    Template(#[from] oos_template::TemplateError),
    #[error("state store error: {0}")]
    Store(#[from] oos_store::StoreError),
    #[error("invalid value: {0}")]
    Text(#[from] oos_types::TextError),
}

pub type OosResult<T> = std::result::Result<T, OosError>;
