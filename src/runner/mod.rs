// region:    --- Imports
use crate::chart;
use crate::client::HttpAuctionClient;
use crate::config::BenchConfig;
use crate::error::Result;
use crate::network::NetworkLauncher;
use crate::report::Report;
use crate::workload::Workload;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

// endregion: --- Imports

pub const STATS_FILE: &str = "stats.json";
pub const CHART_FILE: &str = "latency.svg";

// region:    --- Runner
/// 선택한 네트워크 구성마다 기동 -> 측정을 반복하고 결과를 저장
pub async fn run(config: &BenchConfig) -> Result<Report> {
    config.validate()?;

    let client = HttpAuctionClient::new(&config.base_url);
    let launcher = NetworkLauncher::new(config, client.clone());
    let workload = Workload::new(config.resources, config.bids).with_progress(!config.no_progress);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut report = Report::new(config.resources, config.bids);
    for variant in config.variants() {
        if config.skip_network {
            info!(
                "{:<12} --> 네트워크 재시작 생략: {}",
                "Runner",
                variant.label()
            );
        } else {
            info!("{:<12} --> {} 네트워크 실행", "Runner", variant.label());
            launcher.launch(variant).await?;
        }

        info!("{:<12} --> {} 네트워크 평가", "Runner", variant.label());
        let stats = workload.evaluate(&client, &mut rng).await?;
        report.push(variant, stats);
    }

    report.log_summary();

    let output_dir = config.output_dir();
    report.write_json(&output_dir.join(STATS_FILE))?;
    chart::plot_comparison(&report, &output_dir.join(CHART_FILE))?;

    Ok(report)
}
// endregion: --- Runner
