// region:    --- Imports
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// 무작위 페이로드 범위
pub const VOLUME_RANGE: std::ops::RangeInclusive<i64> = 10..=100;
pub const PRICE_RANGE: std::ops::RangeInclusive<i64> = 100..=500;

// region:    --- Models
/// 자원 종류
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Generation,
    Storage,
}

impl ResourceType {
    pub const ALL: [ResourceType; 2] = [ResourceType::Generation, ResourceType::Storage];
}

/// 자원 생성 요청
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    pub volume: i64,
    pub price: i64,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

/// 입찰 생성 요청
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Bid {
    pub id: String,
    pub resource_id: String,
    pub price: i64,
}

/// 경매 종료 요청 (자원 id)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuctionClose {
    pub id: String,
}
// endregion: --- Models

// region:    --- Payload Generation
pub fn resource_id(index: usize) -> String {
    format!("resource_{}", index)
}

pub fn bid_id(index: usize) -> String {
    format!("bid_{}", index)
}

impl Resource {
    /// 무작위 수량, 가격, 종류로 자원 생성
    pub fn random(index: usize, rng: &mut impl Rng) -> Self {
        Self {
            id: resource_id(index),
            volume: rng.gen_range(VOLUME_RANGE),
            price: rng.gen_range(PRICE_RANGE),
            resource_type: *ResourceType::ALL
                .choose(rng)
                .unwrap_or(&ResourceType::Generation),
        }
    }
}

impl Bid {
    /// 무작위 가격으로 입찰 생성
    pub fn random(index: usize, resource_index: usize, rng: &mut impl Rng) -> Self {
        Self {
            id: bid_id(index),
            resource_id: resource_id(resource_index),
            price: rng.gen_range(PRICE_RANGE),
        }
    }
}

impl AuctionClose {
    pub fn for_resource(resource_index: usize) -> Self {
        Self {
            id: resource_id(resource_index),
        }
    }
}
// endregion: --- Payload Generation

// endregion: --- Tests
