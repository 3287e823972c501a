use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response for endpoints that create a row addressed by a generated id.
#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedDto {
    pub message: String,
    pub id: Uuid,
}

/// Response wrapping a payload under `data`.
#[derive(Serialize, Deserialize, Debug)]
pub struct DataDto<T> {
    pub message: String,
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}
