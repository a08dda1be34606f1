//! Selection policy tests: caching, priority override, latency ranking,
//! and total-outage fallback.

use std::time::Duration;

use rpc_failover::FailoverExecutor;

mod common;
use common::*;

#[tokio::test]
async fn test_fastest_endpoint_wins() {
    let slow = start_chain_id_endpoint(56, Duration::from_millis(120)).await;
    let fast = start_chain_id_endpoint(56, Duration::from_millis(40)).await;
    let slower = start_chain_id_endpoint(56, Duration::from_millis(200)).await;

    let config = test_config(vec![
        slow.url().to_string(),
        fast.url().to_string(),
        slower.url().to_string(),
    ]);
    let executor = FailoverExecutor::new(config).unwrap();

    let best = executor.selector().best_endpoint(false).await;
    assert_eq!(best, fast.url());
}

#[tokio::test]
async fn test_cached_selection_issues_no_probes() {
    let a = start_chain_id_endpoint(56, Duration::ZERO).await;
    let b = start_chain_id_endpoint(56, Duration::from_millis(80)).await;

    let config = test_config(vec![a.url().to_string(), b.url().to_string()]);
    let executor = FailoverExecutor::new(config).unwrap();

    let first = executor.selector().best_endpoint(false).await;
    assert_eq!(first, a.url());
    let probes_after_first = a.hit_count() + b.hit_count();

    let second = executor.selector().best_endpoint(false).await;
    assert_eq!(second, first);
    assert_eq!(
        a.hit_count() + b.hit_count(),
        probes_after_first,
        "cached path must not touch the network"
    );
}

#[tokio::test]
async fn test_force_refresh_reprobes() {
    let a = start_chain_id_endpoint(56, Duration::ZERO).await;

    let config = test_config(vec![a.url().to_string()]);
    let executor = FailoverExecutor::new(config).unwrap();

    executor.selector().best_endpoint(false).await;
    let probes_after_first = a.hit_count();

    executor.selector().best_endpoint(true).await;
    assert!(a.hit_count() > probes_after_first);
}

#[tokio::test]
async fn test_priority_endpoint_wins_over_latency() {
    let fast = start_chain_id_endpoint(56, Duration::from_millis(50)).await;
    let priority = start_chain_id_endpoint(56, Duration::from_millis(300)).await;
    let failing = start_chain_id_endpoint(1, Duration::ZERO).await;

    let mut config = test_config(vec![
        priority.url().to_string(),
        fast.url().to_string(),
        failing.url().to_string(),
    ]);
    config.priority_endpoint = Some(priority.url().to_string());
    let executor = FailoverExecutor::new(config).unwrap();

    let best = executor.selector().best_endpoint(false).await;
    assert_eq!(best, priority.url(), "priority wins by policy, not latency");
}

#[tokio::test]
async fn test_unhealthy_priority_falls_back_to_latency() {
    let fast = start_chain_id_endpoint(56, Duration::ZERO).await;
    let priority = start_status_endpoint(503).await;

    let mut config = test_config(vec![priority.url().to_string(), fast.url().to_string()]);
    config.priority_endpoint = Some(priority.url().to_string());
    let executor = FailoverExecutor::new(config).unwrap();

    let best = executor.selector().best_endpoint(false).await;
    assert_eq!(best, fast.url());
}

#[tokio::test]
async fn test_total_outage_falls_back_to_first_candidate() {
    let wrong_chain = start_chain_id_endpoint(1, Duration::ZERO).await;
    let erroring = start_status_endpoint(503).await;

    let config = test_config(vec![
        wrong_chain.url().to_string(),
        erroring.url().to_string(),
        "http://127.0.0.1:9/".to_string(), // unreachable
    ]);
    let executor = FailoverExecutor::new(config).unwrap();

    // never throws, degrades to the first candidate
    let best = executor.selector().best_endpoint(false).await;
    assert_eq!(best, wrong_chain.url());
}
