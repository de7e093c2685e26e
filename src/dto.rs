// Transfer shapes handed to the transport layer for serialization. Built
// field by field so the wire contract is deliberate and versioned rather
// than a reflection dump of the domain structs. Dates go out as YYYY-MM-DD
// strings, the creation timestamp as RFC 3339.

use serde::Serialize;

use crate::dates::DATE_FORMAT;
use crate::model::{Booking, BookingId, Hotel, HotelId, Room, RoomId};

// Bump when any view's field set or encoding changes.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelView {
    pub id: HotelId,
    pub name: String,
    pub location: String,
    pub description: String,
}

impl HotelView {
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name.clone(),
            location: hotel.location.clone(),
            description: hotel.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomView {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub max_guests: u32,
    pub is_available: bool,
    pub description: String,
}

impl RoomView {
    pub fn from_room(room: &Room) -> Self {
        Self {
            id: room.id,
            hotel_id: room.hotel_id,
            room_number: room.room_number.clone(),
            room_type: room.room_type.clone(),
            price_per_night: room.price_per_night,
            max_guests: room.max_guests,
            is_available: room.is_available,
            description: room.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingView {
    pub id: BookingId,
    pub room_id: RoomId,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: String,
    pub check_out: String,
    pub total_price: f64,
    pub status: String,
    pub confirmation_code: String,
    pub created_at: String,
}

impl BookingView {
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            room_id: booking.room_id,
            guest_name: booking.guest_name.clone(),
            guest_email: booking.guest_email.clone(),
            check_in: booking.stay.check_in().format(DATE_FORMAT).to_string(),
            check_out: booking.stay.check_out().format(DATE_FORMAT).to_string(),
            total_price: booking.total_price,
            status: booking.status.as_str().to_string(),
            confirmation_code: booking.confirmation_code.clone(),
            created_at: booking.created_at.to_rfc3339(),
        }
    }
}
