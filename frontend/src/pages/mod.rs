pub mod coming_soon;
pub mod home;
