/// 테스트 네트워크 및 애플리케이션 기동
/// 1. 실행 중인 애플리케이션 종료
/// 2. 네트워크 시작 스크립트 실행 (필요 시 초기화 스크립트)
/// 3. 애플리케이션을 백그라운드로 실행하고 로그 파일로 출력 연결
/// 4. 기동 대기
// region:    --- Imports
use crate::client::HttpAuctionClient;
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Network Variant
/// 네트워크 구성
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkVariant {
    NonOptimized,
    Optimized,
}

impl NetworkVariant {
    pub fn label(&self) -> &'static str {
        match self {
            NetworkVariant::NonOptimized => "non-optimized",
            NetworkVariant::Optimized => "optimized",
        }
    }

    /// 네트워크 시작 스크립트 이름
    pub fn start_script(&self) -> &'static str {
        match self {
            NetworkVariant::NonOptimized => "start.sh",
            NetworkVariant::Optimized => "start-opt.sh",
        }
    }
}
// endregion: --- Network Variant

// region:    --- Network Launcher
pub struct NetworkLauncher {
    client: HttpAuctionClient,
    network_dir: PathBuf,
    init_script: Option<String>,
    app_dir: PathBuf,
    app_program: String,
    app_args: Vec<String>,
    app_log: PathBuf,
    startup_delay: Duration,
}

impl NetworkLauncher {
    pub fn new(config: &BenchConfig, client: HttpAuctionClient) -> Self {
        Self {
            client,
            network_dir: config.network_dir(),
            init_script: config.init_script.clone(),
            app_dir: config.app_dir(),
            app_program: config.app_program.clone(),
            app_args: config.app_args.clone(),
            app_log: config.app_log(),
            startup_delay: config.startup_delay(),
        }
    }

    /// 네트워크 (재)시작 후 애플리케이션 기동
    pub async fn launch(&self, variant: NetworkVariant) -> Result<u32> {
        info!(
            "{:<12} --> 네트워크 기동 시작: {}",
            "Network",
            variant.label()
        );

        // 이전 애플리케이션 종료 (실패 무시)
        if !self.client.shutdown_app().await {
            info!("{:<12} --> 애플리케이션 종료됨", "Network");
        }

        run_script(&self.network_dir, variant.start_script()).await?;
        if let Some(script) = &self.init_script {
            run_script(&self.network_dir, script).await?;
        }

        let pid = self.spawn_app()?;

        // 준비 상태 확인 없이 고정 시간 대기
        tokio::time::sleep(self.startup_delay).await;
        info!(
            "{:<12} --> 네트워크 기동 완료: {} (pid={})",
            "Network",
            variant.label(),
            pid
        );
        Ok(pid)
    }

    /// 애플리케이션을 별도 프로세스 그룹으로 실행
    /// stdout/stderr 는 모두 로그 파일로 연결한다.
    pub fn spawn_app(&self) -> Result<u32> {
        if let Some(parent) = self.app_log.parent() {
            fs::create_dir_all(parent)?;
        }
        let log = File::create(&self.app_log)?;
        let log_err = log.try_clone()?;

        let mut cmd = std::process::Command::new(&self.app_program);
        cmd.args(&self.app_args)
            .current_dir(&self.app_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::from(log))
            .stderr(Stdio::from(log_err));
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let child = Command::from(cmd).spawn()?;
        let pid = child.id().unwrap_or_default();
        info!(
            "{:<12} --> 애플리케이션 실행: {} {:?} (log={})",
            "Network",
            self.app_program,
            self.app_args,
            self.app_log.display()
        );
        // 드라이버 종료 후에도 계속 실행되도록 대기하지 않는다
        drop(child);
        Ok(pid)
    }
}

/// `sh ./<script>` 실행, 비정상 종료 시 오류
pub async fn run_script(dir: &Path, script: &str) -> Result<()> {
    info!(
        "{:<12} --> 스크립트 실행: {} (dir={})",
        "Network",
        script,
        dir.display()
    );
    let status = Command::new("sh")
        .arg(format!("./{}", script))
        .current_dir(dir)
        .status()
        .await?;

    if !status.success() {
        warn!("{:<12} --> 스크립트 실패: {} {}", "Network", script, status);
        return Err(BenchError::Script {
            script: script.to_string(),
            status,
        });
    }
    Ok(())
}
// endregion: --- Network Launcher

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_scripts() {
        assert_eq!(NetworkVariant::NonOptimized.start_script(), "start.sh");
        assert_eq!(NetworkVariant::Optimized.start_script(), "start-opt.sh");
        assert_eq!(NetworkVariant::Optimized.label(), "optimized");
    }

    #[test]
    fn variant_serializes_as_label() {
        let value = serde_json::to_value(NetworkVariant::NonOptimized).unwrap();
        assert_eq!(value, serde_json::json!("non-optimized"));
    }
}
// endregion: --- Tests
