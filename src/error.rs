use thiserror::Error;

pub type Result<T> = std::result::Result<T, NamingError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error(
        "Passed an empty short name but that's not supported. The short name is required to be non-empty."
    )]
    EmptyShortName,

    #[error(
        "Region {region} is not supported. Please create a new issue if it's a region that is supported by AWS."
    )]
    UnsupportedRegion { region: String },
}
