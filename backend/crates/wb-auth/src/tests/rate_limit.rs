use crate::{AuthError, ConnectionRateLimiter, RateLimitConfig, RateLimiterFactory};

#[test]
fn given_rate_limiter_when_under_limit_then_allows_requests() {
    let limiter = ConnectionRateLimiter::new(RateLimitConfig {
        max_requests: 10,
        window_secs: 60,
    });

    for _ in 0..10 {
        assert!(limiter.check().is_ok());
    }
}

#[test]
fn given_rate_limiter_when_burst_exceeds_limit_then_rejects() {
    let limiter = ConnectionRateLimiter::new(RateLimitConfig {
        max_requests: 3,
        window_secs: 60,
    });

    for _ in 0..3 {
        limiter.check().unwrap();
    }

    assert!(matches!(
        limiter.check(),
        Err(AuthError::RateLimitExceeded { limit: 3, .. })
    ));
}

#[test]
fn given_zero_budget_when_created_then_allows_a_single_request() {
    let limiter = ConnectionRateLimiter::new(RateLimitConfig {
        max_requests: 0,
        window_secs: 0,
    });

    assert!(limiter.check().is_ok());
    assert!(limiter.check().is_err());
}

#[test]
fn given_factory_when_creating_limiters_then_each_has_its_own_budget() {
    let factory = RateLimiterFactory::new(RateLimitConfig {
        max_requests: 1,
        window_secs: 60,
    });
    let first = factory.create();
    let second = factory.create();

    assert!(first.check().is_ok());
    assert!(first.check().is_err());
    assert!(second.check().is_ok());
}
