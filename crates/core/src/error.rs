#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("unknown {field} value: {value:?}")]
    UnknownValue { field: &'static str, value: String },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
