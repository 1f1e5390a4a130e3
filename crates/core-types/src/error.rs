use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid property class: {0}")]
    InvalidPropertyClass(String),
}
