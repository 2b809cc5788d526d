use pathwright::dsl::RouteDslOptions;
use pathwright::{HttpMethod, Router, RouterOptions};

#[test]
fn router_when_same_request_matched_repeatedly_then_subsequent_calls_are_cache_hits() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get("/users/:id", RouteDslOptions::default().to("users#show"))
            .unwrap();
    })
    .unwrap();

    for _ in 0..5 {
        let matched = router.match_route(&HttpMethod::Get, "/users/9").unwrap();
        assert_eq!(matched.params.get("id").map(String::as_str), Some("9"));
    }

    let stats = router.cache_stats();
    assert_eq!(stats.hits, 4);
    assert_eq!(stats.misses, 1);
}

#[test]
fn router_when_distinct_paths_matched_then_each_is_its_own_miss() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get("/users/:id", RouteDslOptions::default().to("users#show"))
            .unwrap();
    })
    .unwrap();

    router.match_route(&HttpMethod::Get, "/users/1");
    router.match_route(&HttpMethod::Get, "/users/2");
    router.match_route(&HttpMethod::Get, "/users/3");

    let stats = router.cache_stats();
    assert_eq!(stats.misses, 3);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.size, 3);
}

#[test]
fn router_when_no_route_matches_then_miss_but_nothing_cached_as_hit() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get("/known", RouteDslOptions::default().to("x#known"))
            .unwrap();
    })
    .unwrap();

    assert!(router.match_route(&HttpMethod::Get, "/unknown").is_none());
    assert!(router.match_route(&HttpMethod::Get, "/unknown").is_none());
    assert_eq!(router.cache_stats().hits, 0);
}

#[test]
fn router_when_same_path_different_methods_then_cached_independently() {
    let router = Router::build(RouterOptions::default(), |r| {
        r.get("/widgets", RouteDslOptions::default().to("widgets#index"))
            .unwrap();
        r.post("/widgets", RouteDslOptions::default().to("widgets#create"))
            .unwrap();
    })
    .unwrap();

    let get_match = router.match_route(&HttpMethod::Get, "/widgets").unwrap();
    let post_match = router.match_route(&HttpMethod::Post, "/widgets").unwrap();
    assert_eq!(get_match.action, "index");
    assert_eq!(post_match.action, "create");

    let get_again = router.match_route(&HttpMethod::Get, "/widgets").unwrap();
    assert_eq!(get_again.action, "index");
    assert_eq!(router.cache_stats().hits, 1);
}
