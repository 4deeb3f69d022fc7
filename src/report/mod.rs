// region:    --- Imports
use crate::error::Result;
use crate::network::NetworkVariant;
use crate::stats::{Operation, Stats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

// endregion: --- Imports

// region:    --- Report
/// 네트워크 구성별 측정 결과
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VariantRun {
    pub variant: NetworkVariant,
    pub stats: Stats,
}

/// 벤치마크 전체 결과
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Report {
    pub started_at: DateTime<Utc>,
    pub resources: usize,
    pub bids: usize,
    pub runs: Vec<VariantRun>,
}

impl Report {
    pub fn new(resources: usize, bids: usize) -> Self {
        Self {
            started_at: Utc::now(),
            resources,
            bids,
            runs: Vec::new(),
        }
    }

    pub fn push(&mut self, variant: NetworkVariant, stats: Stats) {
        self.runs.push(VariantRun { variant, stats });
    }

    pub fn stats(&self, variant: NetworkVariant) -> Option<&Stats> {
        self.runs
            .iter()
            .find(|run| run.variant == variant)
            .map(|run| &run.stats)
    }

    /// 비최적화 평균 / 최적화 평균
    pub fn speedup(&self, op: Operation) -> Option<f64> {
        let base = self.stats(NetworkVariant::NonOptimized)?.get(op);
        let opt = self.stats(NetworkVariant::Optimized)?.get(op);
        if opt > 0.0 {
            Some(base / opt)
        } else {
            None
        }
    }

    pub fn log_summary(&self) {
        for run in &self.runs {
            info!(
                "{:<12} --> {}: {}",
                "Report",
                run.variant.label(),
                run.stats
            );
        }
        for op in Operation::ALL {
            if let Some(ratio) = self.speedup(op) {
                info!("{:<12} --> {} 개선 비율: {:.2}x", "Report", op, ratio);
            }
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("{:<12} --> 결과 저장: {}", "Report", path.display());
        Ok(())
    }
}
// endregion: --- Report

// endregion: --- Tests
