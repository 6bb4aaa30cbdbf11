pub mod users;

pub use users::UserProfileDto;
