// region:    --- Imports
use auction_bench::config::BenchConfig;
use auction_bench::runner;
use clap::Parser;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .without_time()
        .with_target(false)
        .init();

    let config = BenchConfig::parse();
    info!("{:<12} --> 벤치마크 설정: {:?}", "Main", config);

    match runner::run(&config).await {
        Ok(report) => {
            info!(
                "{:<12} --> 벤치마크 완료: {}개 구성 측정",
                "Main",
                report.runs.len()
            );
            Ok(())
        }
        Err(e) => {
            error!("{:<12} --> 벤치마크 실패: {}", "Main", e);
            Err(e.into())
        }
    }
}
// endregion: --- Main
