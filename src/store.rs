// Persistence collaborator. The engine and catalog receive a store handle
// explicitly at construction; there is no global session object. The trait
// is synchronous: every operation is a point read or a single-row write, and
// the booking engine provides its own serialization around the
// check-then-insert sequence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use dashmap::DashMap;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{
    Booking, BookingId, BookingStatus, Hotel, HotelId, NewBooking, NewHotel, NewRoom, Room, RoomId,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("referenced hotel {0} does not exist")]
    UnknownHotel(HotelId),

    #[error("referenced room {0} does not exist")]
    UnknownRoom(RoomId),

    #[error("row not found")]
    NotFound,

    #[error("storage rejected the write")]
    WriteRejected,
}

// Write/delete counters, kept as atomics on the live store.
#[derive(Debug, Default)]
pub struct StoreStats {
    pub bookings_created: AtomicUsize,
    pub bookings_cancelled: AtomicUsize,
    pub bookings_deleted: AtomicUsize,
    pub rooms_deleted: AtomicUsize,
}

// Point-in-time snapshot handed out by `stats()`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StoreStatsReport {
    pub hotel_count: usize,
    pub room_count: usize,
    pub booking_count: usize,
    pub bookings_created: usize,
    pub bookings_cancelled: usize,
    pub bookings_deleted: usize,
    pub rooms_deleted: usize,
}

pub trait ReservationStore: Send + Sync + 'static {
    // Seeding surface: hotels and rooms enter the system only through
    // setup, never through the booking API.
    fn insert_hotel(&self, new: NewHotel) -> Hotel;
    fn insert_room(&self, new: NewRoom) -> Result<Room, StoreError>;

    fn insert_booking(&self, new: NewBooking) -> Result<Booking, StoreError>;
    fn set_booking_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, StoreError>;

    fn hotels(&self) -> Vec<Hotel>;
    fn hotel(&self, id: HotelId) -> Option<Hotel>;
    fn rooms_for_hotel(&self, hotel_id: HotelId) -> Vec<Room>;
    fn room(&self, id: RoomId) -> Option<Room>;
    fn bookings(&self) -> Vec<Booking>;
    fn booking(&self, id: BookingId) -> Option<Booking>;
    fn bookings_for_room(&self, room_id: RoomId) -> Vec<Booking>;
    fn bookings_by_email(&self, email: &str) -> Vec<Booking>;

    // Explicit cascades: deleting a room removes its bookings, deleting a
    // hotel removes its rooms first. Returns false when the row is absent.
    fn delete_room(&self, id: RoomId) -> bool;
    fn delete_hotel(&self, id: HotelId) -> bool;

    fn stats(&self) -> StoreStatsReport;
}

// Sharded in-memory implementation. Reads are lock-free snapshots off the
// dashmaps; the only extra lock is the room -> bookings index used by the
// availability queries and the delete cascade.
pub struct InMemoryStore {
    hotels: DashMap<HotelId, Hotel>,
    rooms: DashMap<RoomId, Room>,
    bookings: DashMap<BookingId, Booking>,
    room_bookings: RwLock<HashMap<RoomId, Vec<BookingId>>>,
    next_hotel_id: AtomicU32,
    next_room_id: AtomicU32,
    next_booking_id: AtomicU32,
    stats: StoreStats,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            hotels: DashMap::new(),
            rooms: DashMap::new(),
            bookings: DashMap::new(),
            room_bookings: RwLock::new(HashMap::new()),
            next_hotel_id: AtomicU32::new(1),
            next_room_id: AtomicU32::new(1),
            next_booking_id: AtomicU32::new(1),
            stats: StoreStats::default(),
        }
    }

    fn remove_booking_row(&self, id: BookingId) {
        if self.bookings.remove(&id).is_some() {
            self.stats.bookings_deleted.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationStore for InMemoryStore {
    fn insert_hotel(&self, new: NewHotel) -> Hotel {
        let id = self.next_hotel_id.fetch_add(1, Ordering::SeqCst);
        let hotel = Hotel {
            id,
            name: new.name,
            location: new.location,
            description: new.description,
        };
        self.hotels.insert(id, hotel.clone());
        hotel
    }

    fn insert_room(&self, new: NewRoom) -> Result<Room, StoreError> {
        if !self.hotels.contains_key(&new.hotel_id) {
            warn!(hotel_id = new.hotel_id, "room insert for unknown hotel");
            return Err(StoreError::UnknownHotel(new.hotel_id));
        }
        let id = self.next_room_id.fetch_add(1, Ordering::SeqCst);
        let room = Room {
            id,
            hotel_id: new.hotel_id,
            room_number: new.room_number,
            room_type: new.room_type,
            price_per_night: new.price_per_night,
            max_guests: new.max_guests,
            is_available: new.is_available,
            description: new.description,
        };
        self.rooms.insert(id, room.clone());
        Ok(room)
    }

    fn insert_booking(&self, new: NewBooking) -> Result<Booking, StoreError> {
        if !self.rooms.contains_key(&new.room_id) {
            warn!(room_id = new.room_id, "booking insert for unknown room");
            return Err(StoreError::UnknownRoom(new.room_id));
        }
        let id = self.next_booking_id.fetch_add(1, Ordering::SeqCst);
        let booking = Booking {
            id,
            room_id: new.room_id,
            guest_name: new.guest_name,
            guest_email: new.guest_email,
            stay: new.stay,
            total_price: new.total_price,
            status: BookingStatus::Confirmed,
            confirmation_code: new.confirmation_code,
            created_at: chrono::Utc::now(),
        };
        // Row first, index second: an id visible through the index always
        // resolves in the row map.
        self.bookings.insert(id, booking.clone());
        self.room_bookings
            .write()
            .entry(new.room_id)
            .or_default()
            .push(id);
        self.stats.bookings_created.fetch_add(1, Ordering::SeqCst);
        Ok(booking)
    }

    fn set_booking_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, StoreError> {
        let mut entry = self.bookings.get_mut(&id).ok_or(StoreError::NotFound)?;
        let previous = entry.status;
        entry.status = status;
        if status == BookingStatus::Cancelled && previous != BookingStatus::Cancelled {
            self.stats.bookings_cancelled.fetch_add(1, Ordering::SeqCst);
        }
        Ok(entry.value().clone())
    }

    fn hotels(&self) -> Vec<Hotel> {
        self.hotels.iter().map(|h| h.value().clone()).collect()
    }

    fn hotel(&self, id: HotelId) -> Option<Hotel> {
        self.hotels.get(&id).map(|h| h.value().clone())
    }

    fn rooms_for_hotel(&self, hotel_id: HotelId) -> Vec<Room> {
        self.rooms
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .map(|r| r.value().clone())
            .collect()
    }

    fn room(&self, id: RoomId) -> Option<Room> {
        self.rooms.get(&id).map(|r| r.value().clone())
    }

    fn bookings(&self) -> Vec<Booking> {
        self.bookings.iter().map(|b| b.value().clone()).collect()
    }

    fn booking(&self, id: BookingId) -> Option<Booking> {
        self.bookings.get(&id).map(|b| b.value().clone())
    }

    fn bookings_for_room(&self, room_id: RoomId) -> Vec<Booking> {
        let ids = self
            .room_bookings
            .read()
            .get(&room_id)
            .cloned()
            .unwrap_or_default();
        ids.into_iter()
            .filter_map(|id| self.bookings.get(&id).map(|b| b.value().clone()))
            .collect()
    }

    fn bookings_by_email(&self, email: &str) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.guest_email == email)
            .map(|b| b.value().clone())
            .collect()
    }

    fn delete_room(&self, id: RoomId) -> bool {
        let booking_ids = self.room_bookings.write().remove(&id).unwrap_or_default();
        for booking_id in &booking_ids {
            self.remove_booking_row(*booking_id);
        }
        let existed = self.rooms.remove(&id).is_some();
        if existed {
            self.stats.rooms_deleted.fetch_add(1, Ordering::SeqCst);
            debug!(
                room_id = id,
                cascaded_bookings = booking_ids.len(),
                "room deleted"
            );
        }
        existed
    }

    fn delete_hotel(&self, id: HotelId) -> bool {
        let room_ids: Vec<RoomId> = self
            .rooms
            .iter()
            .filter(|r| r.hotel_id == id)
            .map(|r| r.id)
            .collect();
        for room_id in &room_ids {
            self.delete_room(*room_id);
        }
        let existed = self.hotels.remove(&id).is_some();
        if existed {
            debug!(hotel_id = id, cascaded_rooms = room_ids.len(), "hotel deleted");
        }
        existed
    }

    fn stats(&self) -> StoreStatsReport {
        StoreStatsReport {
            hotel_count: self.hotels.len(),
            room_count: self.rooms.len(),
            booking_count: self.bookings.len(),
            bookings_created: self.stats.bookings_created.load(Ordering::SeqCst),
            bookings_cancelled: self.stats.bookings_cancelled.load(Ordering::SeqCst),
            bookings_deleted: self.stats.bookings_deleted.load(Ordering::SeqCst),
            rooms_deleted: self.stats.rooms_deleted.load(Ordering::SeqCst),
        }
    }
}
