pub mod envelope;
pub mod speech;
pub mod trip;
