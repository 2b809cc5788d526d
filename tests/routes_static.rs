use pathwright::dsl::RouteDslOptions;
use pathwright::{HttpMethod, Router, RouterOptions};

#[test]
fn router_when_root_route_then_only_matches_slash() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.root(RouteDslOptions::default().to("home#index")).unwrap();
    })
    .unwrap();

    let matched = router.match_route(&HttpMethod::Get, "/").unwrap();
    assert_eq!(matched.action, "index");
    assert!(router.match_route(&HttpMethod::Get, "/anything").is_none());
}

#[test]
fn router_when_trailing_slash_then_equivalent_to_without() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get("/users", RouteDslOptions::default().to("users#index"))
            .unwrap();
    })
    .unwrap();

    let without = router.match_route(&HttpMethod::Get, "/users").unwrap();
    let with = router.match_route(&HttpMethod::Get, "/users/").unwrap();
    assert_eq!(without.route, with.route);
}

#[test]
fn router_when_query_or_fragment_suffix_then_split_identically() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get("/search", RouteDslOptions::default().to("search#index"))
            .unwrap();
    })
    .unwrap();

    let plain = router.match_route(&HttpMethod::Get, "/search").unwrap();
    let query = router
        .match_route(&HttpMethod::Get, "/search?q=rust")
        .unwrap();
    let fragment = router
        .match_route(&HttpMethod::Get, "/search#top")
        .unwrap();
    assert_eq!(plain.route, query.route);
    assert_eq!(plain.route, fragment.route);
}

#[test]
fn router_when_static_and_dynamic_routes_coexist_then_static_takes_precedence() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get("/a/:x", RouteDslOptions::default().to("x#dynamic"))
            .unwrap();
        r.get("/a/b", RouteDslOptions::default().to("x#static"))
            .unwrap();
    })
    .unwrap();

    let static_match = router.match_route(&HttpMethod::Get, "/a/b").unwrap();
    assert_eq!(static_match.action, "static");

    let dynamic_match = router.match_route(&HttpMethod::Get, "/a/c").unwrap();
    assert_eq!(dynamic_match.action, "dynamic");
    assert_eq!(dynamic_match.params.get("x").map(String::as_str), Some("c"));
}

#[test]
fn router_when_duplicate_route_inserted_then_no_op() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get("/dup", RouteDslOptions::default().to("dup#first"))
            .unwrap();
        r.get("/dup", RouteDslOptions::default().to("dup#second"))
            .unwrap();
    })
    .unwrap();

    let matched = router.match_route(&HttpMethod::Get, "/dup").unwrap();
    assert_eq!(matched.action, "first");
}

#[test]
fn router_when_head_requested_then_not_aliased_to_get_route() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get("/ping", RouteDslOptions::default().to("ping#index"))
            .unwrap();
    })
    .unwrap();

    assert!(router.match_route(&HttpMethod::Head, "/ping").is_none());
}
