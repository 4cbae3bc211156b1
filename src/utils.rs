use std::future::Future;
use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Awaits `task` and prints how long it took, whatever it returned.
pub(crate) async fn timed<F: Future>(label: &str, task: F) -> F::Output {
    let (output, elapsed) = measure(task).await;
    println!("⏱  {} finished in {:.3}s", label, elapsed.as_secs_f64());
    output
}

async fn measure<F: Future>(task: F) -> (F::Output, Duration) {
    let started = Instant::now();
    let output = task.await;
    (output, started.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn measures_at_least_the_time_spent() {
        let (value, elapsed) = measure(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            7
        })
        .await;

        assert_eq!(value, 7);
        assert!(elapsed >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn timed_passes_errors_through() {
        let result: Result<(), &str> = timed("failing", async { Err("nope") }).await;
        assert_eq!(result, Err("nope"));
    }
}
