//! Page components for Volt.

mod bookings;
mod chat;
mod dashboard;
mod landing;
mod login;
mod new_booking;
mod not_found;
mod settings;
mod signup;

pub use bookings::Bookings;
pub use chat::Chat;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use login::Login;
pub use new_booking::NewBooking;
pub use not_found::NotFound;
pub use settings::Settings;
pub use signup::Signup;
