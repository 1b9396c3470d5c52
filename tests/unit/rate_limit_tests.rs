// ==============================
// tests/unit/rate_limit_tests.rs
// ==============================
//! This test suite is designed to validate the functionality of the `RateLimiter`
use passgate_lib::middleware::RateLimiter;
use std::time::Duration;

#[test]
fn test_rate_limiter_allows_initial_requests() {
    let rate_limiter = RateLimiter::new(Duration::from_secs(900), 100);

    // First request should be allowed
    assert!(rate_limiter.check("127.0.0.1"));
    assert_eq!(rate_limiter.remaining("127.0.0.1"), 99);
}

#[test]
fn test_rate_limiter_blocks_after_max_requests() {
    let rate_limiter = RateLimiter::new(Duration::from_secs(900), 100);

    for _ in 0..100 {
        assert!(rate_limiter.check("127.0.0.2"));
    }

    // The 101st request in the window is refused
    assert!(!rate_limiter.check("127.0.0.2"));
    assert!(!rate_limiter.check("127.0.0.2"));
}

#[test]
fn test_different_clients_tracked_separately() {
    let rate_limiter = RateLimiter::new(Duration::from_secs(900), 5);

    for _ in 0..5 {
        rate_limiter.check("192.168.0.1");
    }

    assert!(!rate_limiter.check("192.168.0.1"));
    assert!(rate_limiter.check("192.168.0.2"));
}

#[test]
fn test_rate_limiter_concurrent_clients() {
    let rate_limiter = std::sync::Arc::new(RateLimiter::new(Duration::from_secs(900), 50));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let limiter = rate_limiter.clone();
            std::thread::spawn(move || (0..25).filter(|_| limiter.check("10.1.1.1")).count())
        })
        .collect();

    let allowed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(allowed, 50);
}
