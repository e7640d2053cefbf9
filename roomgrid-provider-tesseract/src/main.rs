//! roomgrid-provider-tesseract - Tesseract OCR recognizer for roomgrid
//!
//! This binary implements the roomgrid recognizer protocol, communicating
//! with roomgrid via JSON over stdin/stdout. Recognition itself is
//! delegated to the system `tesseract` executable.

mod tesseract;

use std::io::{self, BufRead, Write};

use roomgrid_core::protocol::{Command, RecognizeParams, Request, Response};

#[tokio::main]
async fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Failed to read stdin: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let response = Response::error(&format!("Failed to parse request: {}", e));
                writeln!(stdout, "{}", response).unwrap();
                stdout.flush().unwrap();
                continue;
            }
        };

        let response = handle_request(request).await;

        writeln!(stdout, "{}", response).unwrap();
        stdout.flush().unwrap();
    }
}

async fn handle_request(request: Request) -> String {
    match request.command {
        Command::Recognize => handle_recognize(&request.params).await,
    }
}

async fn handle_recognize(params: &serde_json::Value) -> String {
    let params: RecognizeParams = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => return Response::error(&format!("Invalid params: {}", e)),
    };

    match tesseract::recognize(&params.image_path, &params.language).await {
        Ok(text) => Response::success(text),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}
