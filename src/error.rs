use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No record at all belongs to the requested category
    #[error("There are no records for the category '{0}'")]
    NoSuchCategory(String),
}

impl Error {
    /// Category that the failed query was about
    pub fn category(&self) -> &str {
        match self {
            Error::NoSuchCategory(cat) => cat,
        }
    }
}
