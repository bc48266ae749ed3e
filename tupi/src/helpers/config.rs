use crate::models::config::Config;
use tupi_error::{Error, ErrorType, IoError};

/// Reads `config.yaml` from the working directory.
pub fn read() -> Result<Config, Error> {
    let file = std::fs::File::open("config.yaml").map_err(|error| {
        Error::new(
            ErrorType::InputOutput(IoError::ReadingError),
            Some(Box::new(error)),
            Some("could not find config.yaml".to_string()),
        )
    })?;

    serde_yaml::from_reader(file).map_err(|error| {
        Error::new(
            ErrorType::InputOutput(IoError::DeserializationError),
            Some(Box::new(error)),
            Some("could not read values of config.yaml".to_string()),
        )
    })
}
