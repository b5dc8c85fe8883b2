//! Answer records produced by the routing pipeline

mod record;

pub use record::{AnswerRecord, RouteDecision};
