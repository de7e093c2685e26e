// Date-overlap availability. This is purely about confirmed bookings and
// their stay ranges; the administrative room flag is filtered upstream by
// the catalog so the checker stays reusable on its own.

use std::sync::Arc;

use crate::dates::StayRange;
use crate::model::{BookingStatus, RoomId};
use crate::store::ReservationStore;

pub struct AvailabilityChecker<S> {
    store: Arc<S>,
}

impl<S: ReservationStore> AvailabilityChecker<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    // A room is free for the requested stay iff no confirmed booking on it
    // overlaps the half-open range. Cancelled bookings never count and are
    // not re-validated. Read-only.
    pub fn is_room_available(&self, room_id: RoomId, stay: &StayRange) -> bool {
        !self
            .store
            .bookings_for_room(room_id)
            .iter()
            .filter(|booking| booking.status == BookingStatus::Confirmed)
            .any(|booking| booking.stay.overlaps(stay))
    }
}
