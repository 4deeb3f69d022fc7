// region:    --- Imports
use crate::error::Result;
use crate::model::{AuctionClose, Bid, Resource};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, info, warn};

// endregion: --- Imports

// region:    --- Endpoints
pub const EXIT_PATH: &str = "/exit/";
pub const RESOURCE_PATH: &str = "/api/resource/";
pub const BID_PATH: &str = "/api/bid/";
pub const ENGLISH_AUCTION_PATH: &str = "/api/auction/english/";
// endregion: --- Endpoints

// region:    --- Auction Api Trait
/// 경매 애플리케이션 REST API
#[async_trait]
pub trait AuctionApi {
    async fn create_resource(&self, resource: &Resource) -> Result<()>;
    async fn create_bid(&self, bid: &Bid) -> Result<()>;
    async fn end_english_auction(&self, close: &AuctionClose) -> Result<()>;
}
// endregion: --- Auction Api Trait

// region:    --- Http Client
/// reqwest 기반 API 클라이언트
#[derive(Clone)]
pub struct HttpAuctionClient {
    client: Client,
    base_url: String,
}

impl HttpAuctionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 실행 중인 애플리케이션 종료 요청
    /// 연결 실패는 무시하고 응답 여부만 반환한다.
    pub async fn shutdown_app(&self) -> bool {
        match self.client.get(self.url(EXIT_PATH)).send().await {
            Ok(response) => {
                info!(
                    "{:<12} --> 애플리케이션 종료 요청 응답: {}",
                    "Client",
                    response.status()
                );
                true
            }
            Err(e) => {
                info!("{:<12} --> 애플리케이션이 실행 중이 아님: {}", "Client", e);
                false
            }
        }
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<()> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        check_status(path, &response);
        // 응답 본문까지 읽어야 요청 하나가 끝난 것으로 측정
        response.bytes().await?;
        Ok(())
    }
}

/// 실패 응답은 경고만 남기고 계속 진행
fn check_status(path: &str, response: &Response) {
    let status = response.status();
    if status.is_success() {
        debug!("{:<12} --> POST {} {}", "Client", path, status);
    } else {
        warn!("{:<12} --> POST {} 실패 응답: {}", "Client", path, status);
    }
}

#[async_trait]
impl AuctionApi for HttpAuctionClient {
    async fn create_resource(&self, resource: &Resource) -> Result<()> {
        self.post(RESOURCE_PATH, resource).await
    }

    async fn create_bid(&self, bid: &Bid) -> Result<()> {
        self.post(BID_PATH, bid).await
    }

    async fn end_english_auction(&self, close: &AuctionClose) -> Result<()> {
        self.post(ENGLISH_AUCTION_PATH, close).await
    }
}
// endregion: --- Http Client

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = HttpAuctionClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url(BID_PATH), "http://localhost:3000/api/bid/");
    }
}
// endregion: --- Tests
