// Hotel reservation core: availability, pricing and booking-conflict logic.
// HTTP routing and real persistence engines are external collaborators; the
// store trait and the DTO module are the seams they plug into.

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod dates;
pub mod dto;
pub mod error;
pub mod model;
pub mod pricing;
pub mod store;

// Re-export key types for convenience
pub use availability::AvailabilityChecker;
pub use booking::{BookingEngine, BookingRequest, BookingService};
pub use catalog::Catalog;
pub use dates::{Clock, StayRange, SystemClock};
pub use dto::{BookingView, HotelView, RoomView, SCHEMA_VERSION};
pub use error::BookingError;
pub use model::{Booking, BookingStatus, Hotel, NewBooking, NewHotel, NewRoom, Room};
pub use store::{InMemoryStore, ReservationStore, StoreError, StoreStatsReport};
