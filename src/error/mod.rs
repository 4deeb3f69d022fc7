// region:    --- Imports
use std::process::ExitStatus;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Error
/// 벤치마크 실행 중 발생하는 오류
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("HTTP 요청 실패: {0}")]
    Http(#[from] reqwest::Error),

    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("스크립트 실행 실패: {script} ({status})")]
    Script { script: String, status: ExitStatus },

    #[error("JSON 직렬화 실패: {0}")]
    Json(#[from] serde_json::Error),

    #[error("잘못된 설정: {0}")]
    Config(String),

    #[error("차트 생성 실패: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
// endregion: --- Error
