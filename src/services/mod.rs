pub mod resolver;
pub mod trip_api;
