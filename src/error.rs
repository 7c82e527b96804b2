use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlumniFinderError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("roster file not found: {0}")]
    FileNotFound(String),

    #[error("required column missing from roster: {0}")]
    MissingColumn(String),

    #[error("no records found in roster: {0}")]
    NoRecords(String),

    #[error("page element could not be located: {0}")]
    ElementNotFound(String),

    #[error("could not login with any stored credential")]
    LoginExhausted,

    #[error("snapshot file is invalid: {0}")]
    InvalidSnapshot(String),

    #[error("excel read error: {0}")]
    ExcelRead(#[from] calamine::Error),

    #[error("excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AlumniFinderError>;
