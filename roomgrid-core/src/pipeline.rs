//! The photo import pipeline.
//!
//! Importing a confirmation photo is a two-stage asynchronous chain:
//! attach the photo (and flush, so the photo survives a failed
//! recognition), then recognize, then parse and place. Each stage has its
//! own failure channel: recognition failures are logged and stop this
//! import only, while unusable booking fields surface to the user without
//! mutating the grid. Concurrent imports are not coordinated; the last
//! flush wins.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::booking::{parse_booking_text, BookingInfo};
use crate::error::{RoomGridError, RoomGridResult};
use crate::planner::Planner;
use crate::recognizer::Recognizer;

/// What a finished import amounts to.
#[derive(Debug)]
pub enum ImportOutcome {
    /// A booking was parsed and painted onto the grid.
    Placed(BookingInfo),
    /// The recognizer failed; the photo is attached but nothing was placed.
    RecognitionFailed,
    /// Recognition produced text, but no usable booking was in it.
    InvalidBooking(RoomGridError),
}

/// Run the full import chain for one image against one week.
pub async fn import_photo(
    planner: &mut Planner,
    week_number: u32,
    image: &Path,
    recognizer: &Recognizer,
) -> RoomGridResult<ImportOutcome> {
    // Stage 1: attach. The photo reference is saved before recognition
    // starts, matching the flush ordering users rely on.
    let photo = photo_data_url(image)?;
    planner.week_mut(week_number)?.photos.push(photo);
    planner.flush()?;

    // Stage 2: recognize (the only suspension point).
    let text = match recognizer
        .recognize(image, &planner.config().language)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(image = %image.display(), error = %e, "recognition failed");
            return Ok(ImportOutcome::RecognitionFailed);
        }
    };

    // Stage 3: parse and place.
    let info = parse_booking_text(&text);
    match planner.place(week_number, &info) {
        Ok(()) => {
            planner.flush()?;
            Ok(ImportOutcome::Placed(info))
        }
        Err(e @ (RoomGridError::InvalidDay | RoomGridError::InvalidTimeSlot)) => {
            Ok(ImportOutcome::InvalidBooking(e))
        }
        Err(e) => Err(e),
    }
}

/// Read an image file into a data-URL photo reference.
///
/// The MIME type comes from the file extension; there is no deeper format
/// validation, mirroring the file-picker behavior this replaces.
pub fn photo_data_url(image: &Path) -> RoomGridResult<String> {
    let bytes = std::fs::read(image)?;
    let mime = match image
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "image/png",
    };

    Ok(format!("data:{};base64,{}", mime, BASE64.encode(bytes)))
}
