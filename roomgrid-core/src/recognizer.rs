//! Recognizer subprocess boundary.
//!
//! Text recognition is an external collaborator: any executable named
//! `roomgrid-provider-<name>` that speaks the JSON protocol can serve as
//! the recognition engine. Roomgrid only consumes one capability from it,
//! `recognize(image, language) -> text`, and treats everything behind
//! that as opaque.

use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

use crate::error::{RoomGridError, RoomGridResult};
use crate::protocol::{Command as ProviderCommand, RecognizeParams, Request, Response};

/// OCR on a phone photo can take a while, but not this long.
const RECOGNIZER_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct Recognizer(String);

impl Recognizer {
    pub fn from_name(name: &str) -> Self {
        Recognizer(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn binary_path(&self) -> RoomGridResult<std::path::PathBuf> {
        let binary_name = format!("roomgrid-provider-{}", self.0);
        let binary_path = which::which(&binary_name).map_err(|_| {
            RoomGridError::RecognizerNotInstalled(format!(
                "Recognizer '{}' not found. Install it with:\n  cargo install {}",
                self.0, binary_name
            ))
        })?;
        Ok(binary_path)
    }

    /// Run recognition on an image file, returning the raw recognized text.
    pub async fn recognize(&self, image: &Path, language: &str) -> RoomGridResult<String> {
        let params = serde_json::to_value(RecognizeParams {
            image_path: image.to_string_lossy().into_owned(),
            language: language.to_string(),
        })
        .map_err(|e| RoomGridError::Serialization(e.to_string()))?;

        timeout(
            RECOGNIZER_TIMEOUT,
            self.call(ProviderCommand::Recognize, params),
        )
        .await
        .map_err(|_| RoomGridError::RecognizerTimeout(RECOGNIZER_TIMEOUT.as_secs()))?
    }

    async fn call<R: DeserializeOwned>(
        &self,
        command: ProviderCommand,
        params: serde_json::Value,
    ) -> RoomGridResult<R> {
        let request = Request { command, params };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| RoomGridError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;

        let mut child = Command::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|e| {
                RoomGridError::Recognition(format!(
                    "Failed to spawn {}: {}",
                    binary_path.display(),
                    e
                ))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(RoomGridError::Recognition(format!(
                "Recognizer exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.is_empty() {
            return Err(RoomGridError::Recognition(
                "Recognizer returned no response".into(),
            ));
        }

        let response: Response<R> = serde_json::from_str(&response_str)
            .map_err(|e| RoomGridError::Recognition(format!("Failed to parse response: {}", e)))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(RoomGridError::Recognition(error)),
        }
    }
}
