// Domain entities. Wire shapes for the transport layer live in `dto`; these
// structs are internal and carry validated types (a `Booking` holds a
// `StayRange`, so its dates are always a valid half-open stay).

use chrono::{DateTime, Utc};

use crate::dates::StayRange;

pub type HotelId = u32;
pub type RoomId = u32;
pub type BookingId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub hotel_id: HotelId,
    // Unique within a hotel by convention, not enforced globally.
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub max_guests: u32,
    // Administrative on/off switch, independent of booking-derived
    // availability.
    pub is_available: bool,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    // Reserved for post-stay processing; never produced by this core.
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub guest_name: String,
    pub guest_email: String,
    pub stay: StayRange,
    // Computed once at creation from the room's rate at that moment; never
    // recomputed if the rate changes later.
    pub total_price: f64,
    pub status: BookingStatus,
    pub confirmation_code: String,
    pub created_at: DateTime<Utc>,
}

// Insert shapes; ids and timestamps are assigned by the store.

#[derive(Debug, Clone)]
pub struct NewHotel {
    pub name: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewRoom {
    pub hotel_id: HotelId,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub max_guests: u32,
    pub is_available: bool,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub room_id: RoomId,
    pub guest_name: String,
    pub guest_email: String,
    pub stay: StayRange,
    pub total_price: f64,
    pub confirmation_code: String,
}
