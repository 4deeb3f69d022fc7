// region:    --- Imports
use crate::error::{BenchError, Result};
use crate::network::NetworkVariant;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

// endregion: --- Imports

// region:    --- Variant Selection
/// 평가할 네트워크 구성 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantSelection {
    NonOptimized,
    Optimized,
    Both,
}
// endregion: --- Variant Selection

// region:    --- Bench Config
/// 경매 네트워크 벤치마크 설정
///
/// 테스트 네트워크를 (재)시작하고 애플리케이션을 띄운 뒤
/// 자원 생성, 입찰, 경매 종료 요청의 평균 지연 시간을 측정한다.
#[derive(Debug, Clone, Parser)]
#[command(name = "auction-bench", about = "Benchmark the auction network configurations")]
pub struct BenchConfig {
    /// 애플리케이션 주소
    #[arg(long, env = "BENCH_BASE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// 프로젝트 루트 (test-network, express-application, logs 포함)
    #[arg(long, env = "BENCH_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// 네트워크 스크립트 디렉터리 (기본값: <root>/test-network)
    #[arg(long)]
    pub network_dir: Option<PathBuf>,

    /// 애플리케이션 디렉터리 (기본값: <root>/express-application)
    #[arg(long)]
    pub app_dir: Option<PathBuf>,

    /// 애플리케이션 로그 파일 (기본값: <root>/logs/app.txt)
    #[arg(long)]
    pub app_log: Option<PathBuf>,

    /// 애플리케이션 실행 프로그램
    #[arg(long, default_value = "node")]
    pub app_program: String,

    /// 애플리케이션 실행 인자
    #[arg(long = "app-arg", default_value = "./app.js", allow_hyphen_values = true)]
    pub app_args: Vec<String>,

    /// 네트워크 시작 후 실행할 초기화 스크립트 (예: req.sh)
    #[arg(long)]
    pub init_script: Option<String>,

    /// 애플리케이션 기동 대기 시간(ms)
    #[arg(long, default_value_t = 1000)]
    pub startup_delay_ms: u64,

    /// 생성할 자원 수
    #[arg(long, env = "BENCH_RESOURCES", default_value_t = 100)]
    pub resources: usize,

    /// 자원당 입찰 수
    #[arg(long, env = "BENCH_BIDS", default_value_t = 10)]
    pub bids: usize,

    /// 평가할 네트워크 구성
    #[arg(long, value_enum, default_value_t = VariantSelection::Both)]
    pub variant: VariantSelection,

    /// 네트워크 재시작 없이 실행 중인 애플리케이션 사용
    #[arg(long)]
    pub skip_network: bool,

    /// 페이로드 난수 시드
    #[arg(long)]
    pub seed: Option<u64>,

    /// 결과(stats.json, latency.svg) 저장 디렉터리 (기본값: <root>/logs)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// 진행률 표시 끄기
    #[arg(long)]
    pub no_progress: bool,
}

impl BenchConfig {
    pub fn network_dir(&self) -> PathBuf {
        self.network_dir
            .clone()
            .unwrap_or_else(|| self.root.join("test-network"))
    }

    pub fn app_dir(&self) -> PathBuf {
        self.app_dir
            .clone()
            .unwrap_or_else(|| self.root.join("express-application"))
    }

    pub fn app_log(&self) -> PathBuf {
        self.app_log
            .clone()
            .unwrap_or_else(|| self.root.join("logs").join("app.txt"))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.root.join("logs"))
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    /// 네트워크를 재시작하지 않으면 실행 중인 한 구성만 측정할 수 있다
    pub fn validate(&self) -> Result<()> {
        if self.skip_network && self.variant == VariantSelection::Both {
            return Err(BenchError::Config(
                "--skip-network 는 --variant non-optimized 또는 optimized 와 함께 사용해야 합니다"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// 실행 순서: 비최적화 -> 최적화
    pub fn variants(&self) -> Vec<NetworkVariant> {
        match self.variant {
            VariantSelection::NonOptimized => vec![NetworkVariant::NonOptimized],
            VariantSelection::Optimized => vec![NetworkVariant::Optimized],
            VariantSelection::Both => vec![NetworkVariant::NonOptimized, NetworkVariant::Optimized],
        }
    }
}
// endregion: --- Bench Config

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_match_original_driver() {
        let config = BenchConfig::try_parse_from(["auction-bench"]).unwrap();

        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.resources, 100);
        assert_eq!(config.bids, 10);
        assert_eq!(config.app_program, "node");
        assert_eq!(config.app_args, vec!["./app.js".to_string()]);
        assert_eq!(config.startup_delay(), Duration::from_secs(1));
        assert_eq!(
            config.variants(),
            vec![NetworkVariant::NonOptimized, NetworkVariant::Optimized]
        );
        assert!(config.init_script.is_none());
    }

    #[test]
    fn paths_resolve_under_root() {
        let config =
            BenchConfig::try_parse_from(["auction-bench", "--root", "/srv/auction"]).unwrap();

        assert_eq!(config.network_dir(), Path::new("/srv/auction/test-network"));
        assert_eq!(config.app_dir(), Path::new("/srv/auction/express-application"));
        assert_eq!(config.app_log(), Path::new("/srv/auction/logs/app.txt"));
        assert_eq!(config.output_dir(), Path::new("/srv/auction/logs"));
    }

    #[test]
    fn explicit_paths_override_root() {
        let config = BenchConfig::try_parse_from([
            "auction-bench",
            "--root",
            "/srv/auction",
            "--network-dir",
            "/opt/fabric",
            "--app-log",
            "/tmp/app.log",
        ])
        .unwrap();

        assert_eq!(config.network_dir(), Path::new("/opt/fabric"));
        assert_eq!(config.app_log(), Path::new("/tmp/app.log"));
        assert_eq!(config.app_dir(), Path::new("/srv/auction/express-application"));
    }

    #[test]
    fn skip_network_requires_single_variant() {
        let config = BenchConfig::try_parse_from(["auction-bench", "--skip-network"]).unwrap();
        assert!(matches!(config.validate(), Err(BenchError::Config(_))));

        let config = BenchConfig::try_parse_from([
            "auction-bench",
            "--skip-network",
            "--variant",
            "optimized",
        ])
        .unwrap();
        assert!(config.validate().is_ok());

        let config = BenchConfig::try_parse_from(["auction-bench"]).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn single_variant_selection() {
        let config =
            BenchConfig::try_parse_from(["auction-bench", "--variant", "optimized"]).unwrap();
        assert_eq!(config.variants(), vec![NetworkVariant::Optimized]);

        let config =
            BenchConfig::try_parse_from(["auction-bench", "--variant", "non-optimized"]).unwrap();
        assert_eq!(config.variants(), vec![NetworkVariant::NonOptimized]);
    }
}
// endregion: --- Tests
