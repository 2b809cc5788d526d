use pathwright::dsl::RouteDslOptions;
use pathwright::{HttpMethod, Router, RouterOptions};

#[test]
fn router_when_parameter_route_registered_then_extracts_values() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get(
            "/users/:id/profile",
            RouteDslOptions::default().to("users#profile"),
        )
        .unwrap();
    })
    .unwrap();

    let matched = router
        .match_route(&HttpMethod::Get, "/users/123/profile")
        .expect("parameter route should match");

    assert_eq!(matched.params.len(), 1);
    assert_eq!(matched.params.get("id").map(String::as_str), Some("123"));
}

#[test]
fn router_when_param_name_starts_with_digit_then_build_fails() {
    let err = Router::build(RouterOptions::default(), |r| {
        let _ = r.get("/users/:1id", RouteDslOptions::default().to("users#show"));
    });
    match err {
        Ok(_) => panic!("expected invalid pattern error"),
        Err(error) => assert_eq!(error.code, pathwright::RouterErrorCode::InvalidPattern),
    }
}

#[test]
fn router_when_constraint_satisfied_then_matches() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get(
            "/items/:id",
            RouteDslOptions::default()
                .to("items#show")
                .constraint("id", pathwright::pattern::Constraint::integer()),
        )
        .unwrap();
    })
    .unwrap();

    let matched = router.match_route(&HttpMethod::Get, "/items/42").unwrap();
    assert_eq!(matched.action, "show");
}

#[test]
fn router_when_constraint_violated_then_no_match() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get(
            "/items/:id",
            RouteDslOptions::default()
                .to("items#show")
                .constraint("id", pathwright::pattern::Constraint::integer()),
        )
        .unwrap();
    })
    .unwrap();

    assert!(router.match_route(&HttpMethod::Get, "/items/abc").is_none());
}

#[test]
fn router_when_defaults_declared_then_merged_into_params() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get(
            "/posts/:id",
            RouteDslOptions::default()
                .to("posts#show")
                .default_value("format", "json"),
        )
        .unwrap();
    })
    .unwrap();

    let matched = router.match_route(&HttpMethod::Get, "/posts/1").unwrap();
    assert_eq!(matched.params.get("format").map(String::as_str), Some("json"));
}
