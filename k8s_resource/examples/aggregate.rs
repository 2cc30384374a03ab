//! Sums memory requests and prints the result both as bytes and as a
//! Kubernetes string.
//!
//! `cargo run --example aggregate -- 512Mi 512Mi`
use anyhow::{Context, Result};
use k8s_resource::Memory;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut requests: Vec<String> = std::env::args().skip(1).collect();
    if requests.is_empty() {
        requests = vec!["512Mi".to_string(), "512Mi".to_string()];
    }

    let total = requests.iter().try_fold(Memory::new(), |total, request| {
        total
            .add(request)
            .with_context(|| format!("only Mi and Gi are supported: {request}"))
    })?;

    tracing::info!(?requests, %total, "summed memory requests");
    println!("As Float: {:.6}", total.to_bytes());
    println!("As String: {}", total);
    Ok(())
}
