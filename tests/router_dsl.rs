use std::collections::HashMap;

use pathwright::dsl::{Builder, ResourcesOptions, RouteDslOptions, ScopeDslOptions};
use pathwright::pattern::Constraint;
use pathwright::{HttpMethod, Router, RouterOptions};

#[test]
fn router_when_scope_nested_then_path_and_defaults_merge() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.scope(
            ScopeDslOptions {
                path: Some("api".to_string()),
                defaults: HashMap::from([("format".to_string(), "json".to_string())]),
                ..Default::default()
            },
            |b| {
                b.get("/ping", RouteDslOptions::default().to("ping#index"))
                    .unwrap();
            },
        );
    })
    .unwrap();

    let matched = router.match_route(&HttpMethod::Get, "/api/ping").unwrap();
    assert_eq!(matched.params.get("format").map(String::as_str), Some("json"));
}

#[test]
fn router_when_constraints_block_applied_then_constraint_enforced() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.constraints(
            HashMap::from([("id".to_string(), Constraint::integer())]),
            |b| {
                b.get("/items/:id", RouteDslOptions::default().to("items#show"))
                    .unwrap();
            },
        );
    })
    .unwrap();

    assert!(router.match_route(&HttpMethod::Get, "/items/42").is_some());
    assert!(router.match_route(&HttpMethod::Get, "/items/abc").is_none());
}

#[test]
fn router_when_resource_singular_then_member_routes_without_id_segment() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.resource(
            "profile",
            ResourcesOptions::default(),
            None::<fn(&mut Builder)>,
        )
        .unwrap();
    })
    .unwrap();

    let shown = router.match_route(&HttpMethod::Get, "/profile").unwrap();
    assert_eq!(shown.action, "show");

    let edited = router.match_route(&HttpMethod::Get, "/profile/edit").unwrap();
    assert_eq!(edited.action, "edit");

    assert!(router.match_route(&HttpMethod::Get, "/profile/1").is_none());
}

#[test]
fn router_when_resources_only_filter_then_unselected_actions_absent() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.resources(
            "post",
            ResourcesOptions {
                only: Some(vec!["index", "show"]),
                ..Default::default()
            },
            None::<fn(&mut Builder)>,
        )
        .unwrap();
    })
    .unwrap();

    assert!(router.match_route(&HttpMethod::Get, "/posts").is_some());
    assert!(router.match_route(&HttpMethod::Get, "/posts/1").is_some());
    assert!(router.match_route(&HttpMethod::Post, "/posts").is_none());
    assert!(router.match_route(&HttpMethod::Delete, "/posts/1").is_none());
}

#[test]
fn router_when_concern_declared_and_invoked_then_routes_recorded() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.concern("commentable", |b| {
            b.get("/comments", RouteDslOptions::default().to("comments#index"))
                .unwrap();
        });
        r.namespace("posts", |b| {
            b.concerns(&["commentable"]).unwrap();
        });
    })
    .unwrap();

    let matched = router
        .match_route(&HttpMethod::Get, "/posts/comments")
        .unwrap();
    assert_eq!(matched.action, "index");
}

#[test]
fn router_when_mount_declared_then_forwards_to_target_controller() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.mount("/admin", "admin_app").unwrap();
    })
    .unwrap();

    let matched = router
        .match_route(&HttpMethod::Get, "/admin/dashboard/stats")
        .unwrap();
    assert_eq!(matched.controller, "admin_app");
    assert_eq!(matched.action, "mount");
    assert_eq!(
        matched.params.get("rest").map(String::as_str),
        Some("dashboard/stats")
    );
}
