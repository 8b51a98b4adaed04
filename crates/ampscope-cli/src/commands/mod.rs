pub mod profile;
pub mod titrate;
