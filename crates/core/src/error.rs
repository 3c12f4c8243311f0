use referral_types::{IdError, ReferralId};

#[derive(Debug, thiserror::Error)]
pub enum ReferralError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid patient ID format")]
    InvalidPatientId(#[source] IdError),
    #[error("invalid doctor ID format")]
    InvalidDoctorId(#[source] IdError),
    #[error("invalid department name")]
    InvalidDepartment(#[source] IdError),
    #[error("invalid referral ID format")]
    InvalidReferralId(#[source] IdError),

    #[error("referral store is empty")]
    StoreEmpty,
    #[error("referral not found: {0}")]
    NotFound(ReferralId),
    #[error("referral file header does not match the expected columns (found: {found:?})")]
    InvalidStructure { found: Vec<String> },

    #[error("stored referral ID '{value}' cannot be parsed: {source}")]
    InvalidStoredReferralId {
        value: String,
        #[source]
        source: IdError,
    },
    #[error("cannot allocate referral ID: {0}")]
    IdAllocation(#[source] IdError),

    #[error("failed to create referral file directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write referral file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read referral file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write referral row: {0}")]
    CsvWrite(csv::Error),
    #[error("failed to read referral row: {0}")]
    CsvRead(csv::Error),
}

pub type ReferralResult<T> = std::result::Result<T, ReferralError>;
