use serde::Deserialize;
use std::path::Path;
use validator::{Validate, ValidationError};

pub const DEFAULT_ACCOUNT_ID: &str = "847850007406";
pub const DEFAULT_REGION: &str = "eu-west-1";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Environment parsing error: {0}")]
    ParsingError(String),

    #[error("Validation errors: {0}")]
    ValidationError(String),
}

/// Raw view of the process environment. `envy` maps the field names onto the
/// `AWS_ACCOUNT_ID` and `AWS_REGION` variables.
#[derive(Debug, Deserialize)]
struct RawEnv {
    aws_account_id: Option<String>,
    aws_region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ResolvedConfig {
    #[validate(custom = "validate_account_id")]
    pub account_id: String,

    #[validate(custom = "validate_region")]
    pub region: String,
}

/// Populates the process environment from a `.env`-style file. A missing file
/// is not an error. Variables already present in the environment always win
/// over values from the file.
pub fn load_env_file(path: &Path) {
    dotenv::from_path(path).ok();
}

pub fn resolve() -> Result<ResolvedConfig, Error> {
    let raw_env = match envy::from_env::<RawEnv>() {
        Ok(data) => Ok(data),
        Err(error) => Err(Error::ParsingError(error.to_string())),
    }?;

    let resolved_config = ResolvedConfig {
        account_id: value_or_default(raw_env.aws_account_id, DEFAULT_ACCOUNT_ID),
        region: value_or_default(raw_env.aws_region, DEFAULT_REGION),
    };

    match resolved_config.validate() {
        Ok(_) => (),
        Err(error) => return Err(Error::ValidationError(error.to_string())),
    }

    return Ok(resolved_config);
}

// Unset and empty both fall back, so `FOO=` in a `.env` file behaves like no
// `FOO` at all.
fn value_or_default(value: Option<String>, default: &str) -> String {
    return match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => String::from(default),
    };
}

fn validate_account_id(account_id: &str) -> Result<(), ValidationError> {
    let is_account_number = account_id.len() == 12
        && account_id
            .chars()
            .all(|character| character.is_ascii_digit());

    if !is_account_number {
        return Err(ValidationError::new(
            "The account id has to be a 12 digit AWS account number",
        ));
    }

    return Ok(());
}

fn validate_region(region: &str) -> Result<(), ValidationError> {
    let is_region_code = !region.is_empty()
        && region.chars().all(|character| {
            character.is_ascii_lowercase() || character.is_ascii_digit() || character == '-'
        });

    if !is_region_code {
        return Err(ValidationError::new(
            "The region has to be a lowercase AWS region code, for example `eu-west-1`",
        ));
    }

    return Ok(());
}
