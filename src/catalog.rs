// Catalog query layer: the read paths the transport layer and the booking
// engine consult. Pure reads over the store snapshot, no mutation; absence
// comes back as None or an empty vec and the caller turns it into its own
// not-found signal.

use std::sync::Arc;

use tracing::debug;

use crate::availability::AvailabilityChecker;
use crate::dates::StayRange;
use crate::error::BookingError;
use crate::model::{Booking, BookingId, Hotel, HotelId, Room, RoomId};
use crate::pricing;
use crate::store::ReservationStore;

pub struct Catalog<S> {
    store: Arc<S>,
    checker: AvailabilityChecker<S>,
}

impl<S: ReservationStore> Catalog<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            checker: AvailabilityChecker::new(Arc::clone(&store)),
            store,
        }
    }

    pub fn hotels(&self) -> Vec<Hotel> {
        self.store.hotels()
    }

    pub fn hotel(&self, id: HotelId) -> Option<Hotel> {
        self.store.hotel(id)
    }

    pub fn rooms_for_hotel(&self, hotel_id: HotelId) -> Vec<Room> {
        self.store.rooms_for_hotel(hotel_id)
    }

    pub fn room(&self, id: RoomId) -> Option<Room> {
        self.store.room(id)
    }

    // Rooms in a hotel that are administratively open, can sleep the party,
    // and have no confirmed booking overlapping the stay. An unknown hotel
    // id is an error; a hotel with no vacancies is an empty list.
    pub fn available_rooms(
        &self,
        hotel_id: HotelId,
        check_in: &str,
        check_out: &str,
        guests: u32,
    ) -> Result<Vec<Room>, BookingError> {
        let stay = StayRange::parse(check_in, check_out)?;
        if self.store.hotel(hotel_id).is_none() {
            return Err(BookingError::HotelNotFound(hotel_id));
        }

        let rooms: Vec<Room> = self
            .store
            .rooms_for_hotel(hotel_id)
            .into_iter()
            .filter(|room| room.is_available && room.max_guests >= guests)
            .filter(|room| self.checker.is_room_available(room.id, &stay))
            .collect();

        debug!(hotel_id, guests, matches = rooms.len(), "availability search");
        Ok(rooms)
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.store.bookings()
    }

    pub fn booking(&self, id: BookingId) -> Option<Booking> {
        self.store.booking(id)
    }

    // Exact-match lookup on the guest email.
    pub fn bookings_by_email(&self, email: &str) -> Vec<Booking> {
        self.store.bookings_by_email(email)
    }

    // Quote for a prospective stay. Does not look at availability at all;
    // a caller can price dates that are already taken.
    pub fn price_quote(
        &self,
        room_id: RoomId,
        check_in: &str,
        check_out: &str,
    ) -> Result<f64, BookingError> {
        let stay = StayRange::parse(check_in, check_out)?;
        let room = self
            .store
            .room(room_id)
            .ok_or(BookingError::RoomNotFound(room_id))?;
        Ok(pricing::quote(&room, &stay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewBooking, NewHotel, NewRoom};
    use crate::store::InMemoryStore;

    struct Fixture {
        store: Arc<InMemoryStore>,
        catalog: Catalog<InMemoryStore>,
        hotel: Hotel,
        small_room: Room,
        family_room: Room,
        closed_room: Room,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryStore::new());
        let hotel = store.insert_hotel(NewHotel {
            name: "Harbour View".to_string(),
            location: "Lisbon".to_string(),
            description: "Small hotel by the water".to_string(),
        });
        let small_room = store
            .insert_room(NewRoom {
                hotel_id: hotel.id,
                room_number: "101".to_string(),
                room_type: "double".to_string(),
                price_per_night: 100.0,
                max_guests: 2,
                is_available: true,
                description: String::new(),
            })
            .unwrap();
        let family_room = store
            .insert_room(NewRoom {
                hotel_id: hotel.id,
                room_number: "102".to_string(),
                room_type: "family".to_string(),
                price_per_night: 180.0,
                max_guests: 4,
                is_available: true,
                description: String::new(),
            })
            .unwrap();
        let closed_room = store
            .insert_room(NewRoom {
                hotel_id: hotel.id,
                room_number: "103".to_string(),
                room_type: "double".to_string(),
                price_per_night: 90.0,
                max_guests: 2,
                is_available: false,
                description: String::new(),
            })
            .unwrap();
        let catalog = Catalog::new(Arc::clone(&store));
        Fixture {
            store,
            catalog,
            hotel,
            small_room,
            family_room,
            closed_room,
        }
    }

    fn book(fx: &Fixture, room_id: RoomId, check_in: &str, check_out: &str, email: &str) -> Booking {
        fx.store
            .insert_booking(NewBooking {
                room_id,
                guest_name: "Ana Martins".to_string(),
                guest_email: email.to_string(),
                stay: StayRange::parse(check_in, check_out).unwrap(),
                total_price: 100.0,
                confirmation_code: "BK000001".to_string(),
            })
            .unwrap()
    }

    #[test]
    fn lists_and_gets_catalog_entities() {
        let fx = fixture();

        assert_eq!(fx.catalog.hotels(), vec![fx.hotel.clone()]);
        assert_eq!(fx.catalog.hotel(fx.hotel.id), Some(fx.hotel.clone()));
        assert_eq!(fx.catalog.hotel(999), None);
        assert_eq!(fx.catalog.rooms_for_hotel(fx.hotel.id).len(), 3);
        assert!(fx.catalog.rooms_for_hotel(999).is_empty());
        assert_eq!(fx.catalog.room(fx.small_room.id), Some(fx.small_room.clone()));
        assert_eq!(fx.catalog.room(999), None);
    }

    #[test]
    fn available_rooms_excludes_closed_and_small_rooms() {
        let fx = fixture();

        // Three guests fit only the family room; the closed room is out
        // regardless of dates.
        let rooms = fx
            .catalog
            .available_rooms(fx.hotel.id, "2025-06-01", "2025-06-04", 3)
            .unwrap();
        assert_eq!(rooms, vec![fx.family_room.clone()]);

        let rooms = fx
            .catalog
            .available_rooms(fx.hotel.id, "2025-06-01", "2025-06-04", 2)
            .unwrap();
        assert_eq!(rooms.len(), 2);
        assert!(rooms.iter().all(|r| r.id != fx.closed_room.id));
    }

    #[test]
    fn available_rooms_excludes_date_conflicts() {
        let fx = fixture();
        book(&fx, fx.small_room.id, "2025-06-01", "2025-06-04", "ana@example.com");

        let rooms = fx
            .catalog
            .available_rooms(fx.hotel.id, "2025-06-03", "2025-06-05", 1)
            .unwrap();
        assert_eq!(rooms, vec![fx.family_room.clone()]);

        // Back-to-back with the existing stay: the small room is free again.
        let rooms = fx
            .catalog
            .available_rooms(fx.hotel.id, "2025-06-04", "2025-06-06", 1)
            .unwrap();
        assert_eq!(rooms.len(), 2);
    }

    #[test]
    fn available_rooms_reports_bad_input() {
        let fx = fixture();

        assert!(matches!(
            fx.catalog.available_rooms(fx.hotel.id, "bad", "2025-06-04", 1),
            Err(BookingError::InvalidDateFormat(_))
        ));
        assert!(matches!(
            fx.catalog
                .available_rooms(fx.hotel.id, "2025-06-04", "2025-06-01", 1),
            Err(BookingError::InvalidDateRange)
        ));
        assert!(matches!(
            fx.catalog.available_rooms(999, "2025-06-01", "2025-06-04", 1),
            Err(BookingError::HotelNotFound(999))
        ));
    }

    #[test]
    fn empty_availability_is_not_an_error() {
        let fx = fixture();

        // Nobody sleeps six to a room here.
        let rooms = fx
            .catalog
            .available_rooms(fx.hotel.id, "2025-06-01", "2025-06-04", 6)
            .unwrap();
        assert!(rooms.is_empty());
    }

    #[test]
    fn booking_lookups() {
        let fx = fixture();
        let booking = book(&fx, fx.small_room.id, "2025-06-01", "2025-06-04", "ana@example.com");
        book(&fx, fx.family_room.id, "2025-06-01", "2025-06-04", "bruno@example.com");

        assert_eq!(fx.catalog.bookings().len(), 2);
        assert_eq!(fx.catalog.booking(booking.id), Some(booking.clone()));
        assert_eq!(fx.catalog.booking(999), None);

        let by_email = fx.catalog.bookings_by_email("ana@example.com");
        assert_eq!(by_email, vec![booking]);
        assert!(fx.catalog.bookings_by_email("nobody@example.com").is_empty());
    }

    #[test]
    fn price_quote_matches_rate_times_nights() {
        let fx = fixture();

        let total = fx
            .catalog
            .price_quote(fx.small_room.id, "2025-06-01", "2025-06-04")
            .unwrap();
        assert_eq!(total, 300.0);

        assert!(matches!(
            fx.catalog.price_quote(999, "2025-06-01", "2025-06-04"),
            Err(BookingError::RoomNotFound(999))
        ));
        assert!(matches!(
            fx.catalog.price_quote(fx.small_room.id, "2025-06-04", "2025-06-01"),
            Err(BookingError::InvalidDateRange)
        ));
    }

    #[test]
    fn quotes_ignore_existing_bookings() {
        let fx = fixture();
        book(&fx, fx.small_room.id, "2025-06-01", "2025-06-04", "ana@example.com");

        // Pricing is independent of availability.
        let total = fx
            .catalog
            .price_quote(fx.small_room.id, "2025-06-01", "2025-06-04")
            .unwrap();
        assert_eq!(total, 300.0);
    }
}
