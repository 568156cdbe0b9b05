pub mod point;
pub mod projection;
