pub mod assessment;
pub mod chat;
pub mod plan;
pub mod wound;
