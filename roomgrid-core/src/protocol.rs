//! Recognizer protocol types.
//!
//! Defines the JSON protocol used for communication between roomgrid and
//! recognizer provider binaries over stdin/stdout.

use serde::{Deserialize, Serialize};

/// Commands that recognizer providers must implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Recognize,
}

/// Request sent from roomgrid to a provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Parameters for the `recognize` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecognizeParams {
    pub image_path: String,
    pub language: String,
}

/// Response sent from a provider back to roomgrid.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_round_trip() {
        let raw = Response::success("recognized text".to_string());
        let parsed: Response<String> = serde_json::from_str(&raw).unwrap();
        assert!(matches!(parsed, Response::Success { data } if data == "recognized text"));

        let raw = Response::error("no such file");
        let parsed: Response<String> = serde_json::from_str(&raw).unwrap();
        assert!(matches!(parsed, Response::Error { error } if error == "no such file"));
    }
}
