#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown location: {input}. {hint}")]
    InvalidLocation { input: String, hint: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Query(String),
}
