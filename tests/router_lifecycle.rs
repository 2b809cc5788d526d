use pathwright::dsl::RouteDslOptions;
use pathwright::{Router, RouterErrorCode, RouterOptions};

#[test]
fn router_when_built_then_size_and_named_index_reflect_registered_routes() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get(
            "/users/:id",
            RouteDslOptions::default().to("users#show").as_name("user"),
        )
        .unwrap();
        r.get("/ping", RouteDslOptions::default().to("ping#index"))
            .unwrap();
    })
    .unwrap();

    assert_eq!(router.size(), 2);
    assert!(!router.is_empty());
    assert!(router.includes_named("user"));
    assert!(!router.includes_named("ping"));
}

#[test]
fn router_when_no_routes_declared_then_empty() {
    let router = Router::build(RouterOptions::default(), |_| {}).unwrap();
    assert!(router.is_empty());
    assert_eq!(router.size(), 0);
}

#[test]
fn router_when_any_verb_invoked_on_finalized_router_then_router_finalized_error() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get("/x", RouteDslOptions::default().to("x#index")).unwrap();
    })
    .unwrap();

    let get_err = router.get("/y", RouteDslOptions::default()).unwrap_err();
    let post_err = router.post("/y", RouteDslOptions::default()).unwrap_err();
    let resources_err = router.resources("widgets").unwrap_err();

    for err in [get_err, post_err, resources_err] {
        assert_eq!(err.code, RouterErrorCode::RouterFinalized);
    }
}

#[test]
fn router_when_build_dsl_errors_then_build_itself_fails() {
    let err = Router::build(RouterOptions::default(), |r| {
        let _ = r.get("/users", RouteDslOptions::default());
    });
    match err {
        Ok(_) => panic!("expected build to fail on a route missing 'to:'"),
        Err(error) => assert_eq!(error.code, RouterErrorCode::InvalidRoute),
    }
}
