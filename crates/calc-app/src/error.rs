use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("invalid emitter config: {0}")]
    Config(#[from] ConfigError),
    #[error("write status line: {0}")]
    Write(#[from] std::io::Error),
}
