//! UseCase: 空室 Room の回収
//!
//! 最後の参加者が抜けてから TTL 以上経過した Room を削除する。
//! TTL が設定されていない場合、Room はプロセスが終了するまで残る。

use std::{sync::Arc, time::Duration};

use codepair_shared::time::{Clock, timestamp_to_rfc3339};

use crate::domain::{RoomId, RoomRepository, Timestamp};

pub struct ReclaimVacantRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl ReclaimVacantRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            repository,
            clock,
            ttl,
        }
    }

    /// 回収対象の Room を削除し、削除した Room の ID を返す
    pub async fn execute(&self) -> Vec<RoomId> {
        let now = Timestamp::new(self.clock.now_millis());
        let ttl_millis = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        let removed = self.repository.remove_vacant_rooms(now, ttl_millis).await;

        removed
            .into_iter()
            .map(|room| {
                let vacant_since = room
                    .vacant_since
                    .and_then(|at| timestamp_to_rfc3339(at.value()))
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::info!(
                    "Room '{}' reclaimed (vacant since {})",
                    room.id,
                    vacant_since
                );
                room.id
            })
            .collect()
    }
}
