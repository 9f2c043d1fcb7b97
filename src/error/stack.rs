use thiserror::Error;

#[derive(Debug, Error)]
pub enum StackError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Environment file '{path}' does not exist.")]
    MissingEnvFile { path: String },
}
