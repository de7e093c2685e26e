// Error taxonomy for the reservation core.
// The transport layer maps these kinds to status codes; the core returns
// typed kinds only and never produces transport codes itself.

use thiserror::Error;

use crate::model::{BookingId, HotelId, RoomId};
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("invalid date format, expected YYYY-MM-DD: '{0}'")]
    InvalidDateFormat(String),

    #[error("check-out date must be after check-in date")]
    InvalidDateRange,

    #[error("check-in date cannot be in the past")]
    PastCheckIn,

    #[error("hotel {0} not found")]
    HotelNotFound(HotelId),

    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    #[error("booking {0} not found")]
    BookingNotFound(BookingId),

    #[error("room {0} is not available")]
    RoomUnavailable(RoomId),

    #[error("room is already booked for the selected dates")]
    DateConflict,

    #[error("persistence failure")]
    Persistence(#[source] StoreError),
}

impl BookingError {
    // Validation and conflict errors are caller input errors; only a storage
    // failure is worth a bounded retry by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BookingError::Persistence(_))
    }
}
