use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlError {
    /// Dispatch of a name the registry does not know. This is the gate that
    /// keeps `column.Buffer(2)` from silently becoming malformed SQL.
    #[error("no such spatial function: {0}")]
    UnknownFunction(String),

    #[error("{name} takes {min}..={max} arguments, got {got}")]
    WrongArgumentCount {
        name: &'static str,
        min: u8,
        max: u8,
        got: usize,
    },

    #[error("{function} has no field named {field}")]
    UnknownField { function: String, field: String },

    #[error("field access on a non-composite expression")]
    NotComposite,

    #[error("no such column: {0}")]
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, SqlError>;
