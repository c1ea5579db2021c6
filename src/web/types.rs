use serde::Deserialize;

// ###################################
// ->   STRUCTS
// ###################################
/// Query parameters accepted by the signup and unregister routes.
///
/// `email` deserializes as an `Option` so a missing parameter reaches the
/// handler instead of tripping the extractor's default rejection; the
/// handler owns the 422 contract.
#[derive(Deserialize, Debug)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// A participant email that is known to be non-empty.
#[derive(Debug, derive_more::Display)]
pub struct ParticipantEmail(String);

// ###################################
// ->   IMPLS
// ###################################
impl AsRef<str> for ParticipantEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ParticipantEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();

        if value.trim().is_empty() {
            return Err(DataParsingError::EmailEmpty);
        }

        Ok(ParticipantEmail(value.to_owned()))
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("participant email is empty")]
    EmailEmpty,
}
