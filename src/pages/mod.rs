pub mod home;
pub mod preferences;
pub mod sessions;
