//! Business logic services
//!
//! Services wrap the shared calculation core and the external systems
//! (the animation host) for the route handlers.

pub mod animation;
pub mod export;
pub mod planner;

pub use animation::AnimationClient;
pub use export::ExportService;
pub use planner::PlannerService;
