use std::sync::Arc;
use std::thread;

use pathwright::dsl::RouteDslOptions;
use pathwright::{HttpMethod, Router, RouterOptions};

/// spec.md §8 invariant 9: concurrent `match` calls against a shared,
/// finalized `Router` are consistent with what a single serial caller would
/// observe — no data race, no torn read, no cross-thread param bleed.
#[test]
fn router_when_matched_concurrently_then_consistent_with_serial_execution() {
    let router = Arc::new(
        Router::build(RouterOptions::default(), |r| {
            r.get(
                "/users/:id",
                RouteDslOptions::default().to("users#show"),
            )
            .unwrap();
            r.get("/posts/:id/comments/:comment_id", RouteDslOptions::default().to("comments#show"))
                .unwrap();
            r.get("/about", RouteDslOptions::default().to("pages#about"))
                .unwrap();
        })
        .unwrap(),
    );

    let requests: Vec<(HttpMethod, String, Option<(&'static str, String)>)> = vec![
        (HttpMethod::Get, "/users/1".to_string(), Some(("id", "1".to_string()))),
        (HttpMethod::Get, "/users/2".to_string(), Some(("id", "2".to_string()))),
        (
            HttpMethod::Get,
            "/posts/9/comments/4".to_string(),
            Some(("comment_id", "4".to_string())),
        ),
        (HttpMethod::Get, "/about".to_string(), None),
    ];

    let mut handles = Vec::new();
    for thread_idx in 0..8 {
        let router = Arc::clone(&router);
        let requests = requests.clone();
        handles.push(thread::spawn(move || {
            let mut results = Vec::new();
            for _ in 0..50 {
                let (method, path, expected_param) = &requests[thread_idx % requests.len()];
                let matched = router.match_route(method, path);
                results.push((matched, expected_param.clone()));
            }
            results
        }));
    }

    for handle in handles {
        let results = handle.join().expect("worker thread should not panic");
        for (matched, expected_param) in results {
            let matched = matched.expect("every request in the fixture set has a registered route");
            if let Some((name, value)) = expected_param {
                assert_eq!(matched.params.get(name).map(String::as_str), Some(value.as_str()));
            }
        }
    }
}

#[test]
fn router_when_generated_concurrently_then_each_thread_gets_correct_path() {
    let router = Arc::new(
        Router::build(RouterOptions::default(), |r| {
            r.get(
                "/users/:id",
                RouteDslOptions::default().to("users#show").as_name("user"),
            )
            .unwrap();
        })
        .unwrap(),
    );

    let mut handles = Vec::new();
    for id in 0..8 {
        let router = Arc::clone(&router);
        handles.push(thread::spawn(move || {
            let mut params = std::collections::HashMap::new();
            params.insert("id".to_string(), id.to_string());
            router.generate_path("user", &params).unwrap().to_string()
        }));
    }

    for (id, handle) in handles.into_iter().enumerate() {
        let path = handle.join().expect("worker thread should not panic");
        assert_eq!(path, format!("/users/{id}"));
    }
}
