pub mod camera;
pub mod config;
pub mod convert;
pub mod inspect;
