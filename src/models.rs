pub mod property;
pub mod projection;
pub mod scenario;
pub mod lease;
pub mod dashboard;
