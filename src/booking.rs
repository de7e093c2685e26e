// Booking engine: orchestrates validation, conflict checking, pricing and
// the commit of a new booking. The conflict check and the insert form one
// critical section per room; two overlapping requests for the same room can
// never both succeed, while bookings on different rooms proceed without
// blocking each other.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::availability::AvailabilityChecker;
use crate::dates::{Clock, StayRange, SystemClock};
use crate::error::BookingError;
use crate::model::{Booking, BookingId, BookingStatus, NewBooking, RoomId};
use crate::pricing;
use crate::store::{ReservationStore, StoreError};

// Request shape handed over by the transport layer; dates arrive as
// YYYY-MM-DD strings per the API contract and are parsed here, not there.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub room_id: RoomId,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: String,
    pub check_out: String,
}

// Write surface of the reservation core, as a trait so the transport layer
// can be exercised against a stand-in.
#[async_trait]
pub trait BookingService: Send + Sync + 'static {
    async fn create_booking(&self, request: BookingRequest) -> Result<Booking, BookingError>;
    async fn cancel_booking(&self, booking_id: BookingId) -> Result<Booking, BookingError>;
}

pub struct BookingEngine<S> {
    store: Arc<S>,
    checker: AvailabilityChecker<S>,
    clock: Arc<dyn Clock>,
    room_locks: DashMap<RoomId, Arc<Mutex<()>>>,
}

impl<S: ReservationStore> BookingEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    // The clock is injectable so past-check-in validation is testable.
    pub fn with_clock(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            checker: AvailabilityChecker::new(Arc::clone(&store)),
            store,
            clock,
            room_locks: DashMap::new(),
        }
    }

    // One mutex per room, created on first use. Distinct rooms never share
    // a lock.
    fn room_lock(&self, room_id: RoomId) -> Arc<Mutex<()>> {
        self.room_locks
            .entry(room_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    fn confirmation_code() -> String {
        format!("BK{:06}", rand::random::<u32>() % 1_000_000)
    }
}

#[async_trait]
impl<S: ReservationStore> BookingService for BookingEngine<S> {
    // Fail-fast pipeline: date parse, range check, past check-in, room
    // lookup, administrative flag, conflict test, price, insert. The first
    // failing step reports and nothing later runs.
    async fn create_booking(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        let stay = StayRange::parse(&request.check_in, &request.check_out)?;

        // A past check-out is fine as long as the check-in is not past;
        // the range check above already forces check_out > check_in.
        if stay.check_in() < self.clock.today() {
            return Err(BookingError::PastCheckIn);
        }

        let room = self
            .store
            .room(request.room_id)
            .ok_or(BookingError::RoomNotFound(request.room_id))?;

        if !room.is_available {
            return Err(BookingError::RoomUnavailable(room.id));
        }

        let lock = self.room_lock(room.id);
        let _guard = lock.lock().await;

        if !self.checker.is_room_available(room.id, &stay) {
            debug!(room_id = room.id, "booking rejected: date conflict");
            return Err(BookingError::DateConflict);
        }

        let total_price = pricing::quote(&room, &stay);

        let booking = self
            .store
            .insert_booking(NewBooking {
                room_id: room.id,
                guest_name: request.guest_name,
                guest_email: request.guest_email,
                stay,
                total_price,
                confirmation_code: Self::confirmation_code(),
            })
            .map_err(BookingError::Persistence)?;

        info!(
            booking_id = booking.id,
            room_id = room.id,
            total_price,
            "booking confirmed"
        );
        Ok(booking)
    }

    // Idempotent: cancelling an already-cancelled booking succeeds and
    // leaves the status at cancelled.
    async fn cancel_booking(&self, booking_id: BookingId) -> Result<Booking, BookingError> {
        match self
            .store
            .set_booking_status(booking_id, BookingStatus::Cancelled)
        {
            Ok(booking) => {
                info!(booking_id, "booking cancelled");
                Ok(booking)
            }
            Err(StoreError::NotFound) => Err(BookingError::BookingNotFound(booking_id)),
            Err(err) => Err(BookingError::Persistence(err)),
        }
    }
}
