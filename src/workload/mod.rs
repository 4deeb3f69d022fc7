/// 부하 생성
/// 1. 자원 생성
/// 2. 자원별 입찰 생성
/// 3. 영국식 경매 종료
// region:    --- Imports
use crate::client::AuctionApi;
use crate::error::Result;
use crate::model::{AuctionClose, Bid, Resource};
use crate::stats::{Operation, Stats};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::Instant;
use tracing::info;

// endregion: --- Imports

// region:    --- Workload
/// 자원 수와 자원당 입찰 수
#[derive(Debug, Clone, Copy)]
pub struct Workload {
    pub resources: usize,
    pub bids: usize,
    pub progress: bool,
}

impl Workload {
    pub fn new(resources: usize, bids: usize) -> Self {
        Self {
            resources,
            bids,
            progress: true,
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn bid_count(&self) -> usize {
        self.resources * self.bids
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "{bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}<{eta_precise}, {per_sec}]",
        ) {
            bar.set_style(style);
        }
        bar
    }

    /// 1. 자원 생성
    pub async fn create_resources(
        &self,
        api: &(impl AuctionApi + Sync),
        rng: &mut impl Rng,
    ) -> Result<()> {
        let bar = self.progress_bar(self.resources);
        for i in 0..self.resources {
            let resource = Resource::random(i, rng);
            api.create_resource(&resource).await?;
            bar.inc(1);
        }
        bar.finish();
        Ok(())
    }

    /// 2. 자원별 입찰 생성
    pub async fn create_bids(
        &self,
        api: &(impl AuctionApi + Sync),
        rng: &mut impl Rng,
    ) -> Result<()> {
        let bar = self.progress_bar(self.resources);
        for i in 0..self.resources {
            for j in 0..self.bids {
                let bid = Bid::random(j, i, rng);
                api.create_bid(&bid).await?;
            }
            bar.inc(1);
        }
        bar.finish();
        Ok(())
    }

    /// 3. 영국식 경매 종료
    pub async fn end_english_auctions(&self, api: &(impl AuctionApi + Sync)) -> Result<()> {
        let bar = self.progress_bar(self.resources);
        for i in 0..self.resources {
            api.end_english_auction(&AuctionClose::for_resource(i))
                .await?;
            bar.inc(1);
        }
        bar.finish();
        Ok(())
    }

    /// 세 단계를 순서대로 실행하며 연산당 평균 시간 측정
    pub async fn evaluate(
        &self,
        api: &(impl AuctionApi + Sync),
        rng: &mut impl Rng,
    ) -> Result<Stats> {
        let mut stats = Stats::default();

        info!("{:<12} --> 자원 생성 중... ({}건)", "Workload", self.resources);
        let start = Instant::now();
        self.create_resources(api, rng).await?;
        stats.record(
            Operation::CreateResource,
            start.elapsed(),
            self.resources as u64,
        );

        info!("{:<12} --> 입찰 생성 중... ({}건)", "Workload", self.bid_count());
        let start = Instant::now();
        self.create_bids(api, rng).await?;
        stats.record(Operation::CreateBid, start.elapsed(), self.bid_count() as u64);

        info!(
            "{:<12} --> 영국식 경매 종료 중... ({}건)",
            "Workload", self.resources
        );
        let start = Instant::now();
        self.end_english_auctions(api).await?;
        stats.record(
            Operation::EndEnglishAuction,
            start.elapsed(),
            self.resources as u64,
        );

        info!("{:<12} --> 측정 완료: {}", "Workload", stats);
        Ok(stats)
    }
}
// endregion: --- Workload

// endregion: --- Tests
