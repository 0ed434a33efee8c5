//! School portal: domain services over mock repositories, the client stores
//! that mirror them, the route gate, and the view helpers dashboards render
//! from.

mod app;

pub mod gate;
pub mod logger;
pub mod roles;
pub mod seed;
pub mod services;
pub mod stores;
pub mod view;

pub use app::Portal;
pub use gate::{GateDecision, RouteGate};
pub use roles::Role;
pub use seed::Seed;
