//! A declarative HTTP route matcher and URL generator built on a radix
//! tree, with a bounded request-recognition cache and a Rails-style build
//! DSL (`resources`, `namespace`, `scope`). Routes are recorded through a
//! [`dsl::Builder`] and compiled into an immutable, thread-safe
//! [`router::Router`] by [`router::Router::build`].
//!
//! ```ignore
//! use pathwright::{Router, RouterOptions, HttpMethod};
//! use pathwright::dsl::RouteDslOptions;
//!
//! let router = Router::build(RouterOptions::default(), |r| {
//!     r.get("/users/:id", RouteDslOptions::default().to("users#show").as_name("user")).unwrap();
//! }).unwrap();
//!
//! let matched = router.match_route(&HttpMethod::Get, "/users/42").unwrap();
//! assert_eq!(matched.controller, "users");
//! ```

pub mod cache;
pub mod dsl;
pub mod enums;
pub mod errors;
pub mod inflector;
pub mod interner;
pub mod path;
pub mod pattern;
pub mod radix;
pub mod route;
pub mod route_set;
pub mod router;
mod strategy;
pub mod types;

pub use enums::HttpMethod;
pub use errors::{RouterError, RouterErrorCode, RouterResult};
pub use route::{Route, RouteOptions};
pub use route_set::RouteSet;
pub use router::{Router, RouterOptions, StrategyKind};
pub use types::{MatchedRoute, RouteKey, RouteParams};
