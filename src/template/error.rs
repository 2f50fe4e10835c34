use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Can't open template file [path: {path:?}]")]
    CantOpenTemplateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Can't read template file [path: {path:?}]")]
    CantReadTemplateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("The {template} template can't be compiled")]
    CompilationFailed {
        template: &'static str,
        source: tera::Error,
    },
    #[error("The {template} template can't be rendered")]
    RenderFailed {
        template: &'static str,
        source: tera::Error,
    },
}
