#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid number for {field}: '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("invalid material type: '{0}' (expected L or P)")]
    InvalidMaterialType(String),
}
