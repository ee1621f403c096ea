//! Team Corner 초기화
//!
//! 리스트 선언을 읽어 Schema Registry를 만들고, 설정과 함께 묶어
//! 변경되지 않는 앱 값으로 돌려줍니다. 전역 상태는 없습니다.

use std::sync::Arc;

use crate::access::AccessEvaluator;
use crate::config::AppConfig;
use crate::error::Result;
use crate::initial_data::{self, SeededAdmin};
use crate::schema::{SchemaParser, SchemaRegistry};
use crate::store::ListStore;

/// Team Corner 리스트 선언
pub const LISTS_YAML: &str = include_str!("../config/lists.yaml");

/// Team Corner 리스트 선언을 Registry로 로드
pub fn load_schema() -> Result<SchemaRegistry> {
    SchemaParser::parse_multiple(&[LISTS_YAML])
}

/// 초기화된 Team Corner 앱
#[derive(Debug, Clone)]
pub struct TeamCorner {
    config: AppConfig,
    schema: Arc<SchemaRegistry>,
}

impl TeamCorner {
    /// 설정으로 초기화
    pub fn init(config: AppConfig) -> Result<Self> {
        let schema = Arc::new(load_schema()?);

        tracing::info!(
            name = %config.name,
            production = config.production,
            lists = schema.lists.len(),
            "team corner initialised"
        );

        Ok(Self { config, schema })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    pub fn evaluator(&self) -> AccessEvaluator<'_> {
        AccessEvaluator::new(&self.schema)
    }

    /// 스토어 열기 (연결 시 초기 데이터 적용)
    pub fn open_store(&self) -> Result<(ListStore, Option<SeededAdmin>)> {
        let mut store = ListStore::new(Arc::clone(&self.schema), self.config.id_strategy);
        let seeded = initial_data::initialise_data(&mut store, &self.config.admin_email)?;
        Ok((store, seeded))
    }
}
