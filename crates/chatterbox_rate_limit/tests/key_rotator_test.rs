//! Behavioural tests for the key rotator.

use chatterbox_rate_limit::KeyRotator;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn never_returns_a_used_key_while_others_remain() {
    let rotator = KeyRotator::new(["a", "b", "c", "d"], Duration::from_secs(60)).unwrap();
    rotator.mark_used("b");
    rotator.mark_used("d");

    for _ in 0..200 {
        let key = rotator.try_acquire().unwrap();
        assert!(!rotator.is_used(&key), "drew parked key {key}");
    }
}

#[test]
fn never_repeats_consecutively_when_an_alternative_exists() {
    let rotator = KeyRotator::new(["a", "b", "c"], Duration::from_secs(60)).unwrap();

    let mut previous = rotator.try_acquire().unwrap();
    for _ in 0..200 {
        let next = rotator.try_acquire().unwrap();
        assert_ne!(next, previous);
        previous = next;
    }
}

#[test]
fn falls_back_to_last_key_when_it_is_the_only_one_left() {
    let rotator = KeyRotator::new(["a", "b"], Duration::from_secs(60)).unwrap();
    let first = rotator.try_acquire().unwrap();
    let other = if first == "a" { "b" } else { "a" };
    rotator.mark_used(other);

    assert_eq!(rotator.try_acquire().unwrap(), first);
}

#[tokio::test(start_paused = true)]
async fn acquire_waits_out_cooldown_then_clears_used_set() {
    let cooldown = Duration::from_secs(86_400);
    let rotator = Arc::new(KeyRotator::new(["a", "b"], cooldown).unwrap());
    rotator.mark_used("a");
    rotator.mark_used("b");

    let started = tokio::time::Instant::now();
    let key = rotator.acquire_key().await;

    assert!(started.elapsed() >= cooldown);
    assert!(key == "a" || key == "b");
    assert!(rotator.used_keys().is_empty());
}

#[tokio::test(start_paused = true)]
async fn acquire_returns_immediately_when_a_key_is_free() {
    let rotator = KeyRotator::new(["a", "b"], Duration::from_secs(86_400)).unwrap();
    rotator.mark_used("a");

    let started = tokio::time::Instant::now();
    assert_eq!(rotator.acquire_key().await, "b");
    assert_eq!(started.elapsed(), Duration::ZERO);
}
