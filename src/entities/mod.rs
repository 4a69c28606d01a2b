// ABOUTME: SeaORM entities module for the cinema booking schema
// ABOUTME: Exports entity definitions for movies, rooms, seats, shows, and bookings

pub mod movie;
pub mod show_room;
pub mod seat_type;
pub mod show_room_seat;
pub mod shows_display;
pub mod booking;

pub use movie::Entity as Movie;
pub use show_room::Entity as ShowRoom;
pub use seat_type::Entity as SeatType;
pub use show_room_seat::Entity as ShowRoomSeat;
pub use shows_display::Entity as ShowsDisplay;
pub use booking::Entity as Booking;
