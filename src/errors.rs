use std::fmt;

/// Main error type for the Pokemon Skirmish battle engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEngineError {
    /// Error while deriving battle stats from a catalog record
    CreatureData(CreatureDataError),
    /// Error while decoding the external catalog payload
    Catalog(CatalogError),
}

/// Errors raised when a catalog record cannot be turned into a battler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatureDataError {
    /// The weight string has no parseable numeric value, e.g. "heavy kg"
    MalformedWeight { name: String, value: String },
    /// The height string has no parseable numeric value
    MalformedHeight { name: String, value: String },
}

/// Errors raised while decoding catalog JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The payload is not a valid catalog document
    Decode(String),
}

impl fmt::Display for BattleEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEngineError::CreatureData(err) => write!(f, "Creature data error: {}", err),
            BattleEngineError::Catalog(err) => write!(f, "Catalog error: {}", err),
        }
    }
}

impl fmt::Display for CreatureDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatureDataError::MalformedWeight { name, value } => {
                write!(f, "Malformed weight for {}: {:?}", name, value)
            }
            CreatureDataError::MalformedHeight { name, value } => {
                write!(f, "Malformed height for {}: {:?}", name, value)
            }
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Decode(details) => write!(f, "Malformed catalog payload: {}", details),
        }
    }
}

impl std::error::Error for BattleEngineError {}
impl std::error::Error for CreatureDataError {}
impl std::error::Error for CatalogError {}

impl From<CreatureDataError> for BattleEngineError {
    fn from(err: CreatureDataError) -> Self {
        BattleEngineError::CreatureData(err)
    }
}

impl From<CatalogError> for BattleEngineError {
    fn from(err: CatalogError) -> Self {
        BattleEngineError::Catalog(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using CreatureDataError
pub type CreatureDataResult<T> = Result<T, CreatureDataError>;
