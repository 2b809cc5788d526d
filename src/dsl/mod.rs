mod builder;
mod resource;
mod scope;

pub use builder::{
    Builder, ResourcesOptions, RouteDslOptions, RouteSpec, ScopeDslOptions, DSL_METHOD_WHITELIST,
};
