pub mod config;

pub mod desk;

pub mod desk_error;
