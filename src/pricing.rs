// Price quoting. Pure arithmetic over the room's nightly rate; never
// consults bookings or availability. Range validity is enforced by
// `StayRange` construction, so a quote always covers at least one night.

use crate::dates::StayRange;
use crate::model::Room;

pub fn quote(room: &Room, stay: &StayRange) -> f64 {
    room.price_per_night * stay.nights() as f64
}
