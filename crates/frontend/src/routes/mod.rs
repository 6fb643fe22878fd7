pub mod decision;
pub mod routes;

pub use decision::{decide, parse_path, Page, RouteDecision};
pub use routes::{use_navigator, AppRoutes, Navigator};
