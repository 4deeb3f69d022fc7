// region:    --- Imports
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

// endregion: --- Imports

// region:    --- Operation
/// 측정 대상 연산
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    CreateResource,
    CreateBid,
    EndEnglishAuction,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::CreateResource,
        Operation::CreateBid,
        Operation::EndEnglishAuction,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateResource => "CreateResource",
            Operation::CreateBid => "CreateBid",
            Operation::EndEnglishAuction => "EndEnglishAuction",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
// endregion: --- Operation

// region:    --- Stats
/// 연산별 평균 소요 시간(초)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct Stats(BTreeMap<Operation, f64>);

impl Default for Stats {
    fn default() -> Self {
        Self(Operation::ALL.iter().map(|op| (*op, 0.0)).collect())
    }
}

impl Stats {
    pub fn record(&mut self, op: Operation, elapsed: Duration, count: u64) {
        self.0.insert(op, average_secs(elapsed, count));
    }

    pub fn get(&self, op: Operation) -> f64 {
        self.0.get(&op).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Operation, f64)> + '_ {
        self.0.iter().map(|(op, secs)| (*op, *secs))
    }

    /// 가장 큰 평균값 (차트 y축 범위용)
    pub fn max(&self) -> f64 {
        self.0.values().copied().fold(0.0, f64::max)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(op, secs)| format!("{}: {:.6}s", op, secs))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// 경과 시간을 연산 횟수로 나눈 평균(초). 연산이 없으면 0.
pub fn average_secs(elapsed: Duration, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    elapsed.as_secs_f64() / count as f64
}
// endregion: --- Stats

// endregion: --- Tests
