//! UseCase: 面接タイマーの操作
//!
//! サーバーはカウントダウンを行わず、クライアントが報告した最新の
//! スナップショットだけを保存する。遷移は送信者を含む全参加者に配信され、
//! 各クライアントはそれを元にローカルのカウントダウンを進める。

use std::sync::Arc;

use crate::domain::{
    ConnectionId, DeliveryMode, Notification, RoomId, RoomRepository, TimerState, TimerTransition,
};

use super::{BroadcastRouter, error::SessionError};

/// タイマー操作のユースケース
pub struct ControlTimerUseCase {
    repository: Arc<dyn RoomRepository>,
    router: Arc<BroadcastRouter>,
}

impl ControlTimerUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, router: Arc<BroadcastRouter>) -> Self {
        Self { repository, router }
    }

    /// タイマーを遷移させ、遷移に対応する通知を全参加者に配信
    ///
    /// resume も残り時間を保存するため、pause → resume の後に参加した
    /// クライアントは resume 時点の残り時間から再開できる。
    pub async fn execute(
        &self,
        room_id: &RoomId,
        transition: TimerTransition,
    ) -> Result<Vec<ConnectionId>, SessionError> {
        let (timer, members) = self.repository.set_timer(room_id, transition).await?;
        tracing::debug!("Room '{}' timer is now {:?}", room_id, timer);

        Ok(self
            .router
            .deliver(
                &members,
                DeliveryMode::AllIncludingSender,
                &notification_for(transition, timer),
            )
            .await)
    }
}

fn notification_for(transition: TimerTransition, timer: TimerState) -> Notification {
    match transition {
        TimerTransition::Start { duration } => Notification::TimerStarted {
            duration,
            remaining_time: timer.remaining_time().unwrap_or(duration),
        },
        TimerTransition::Pause { remaining_time } => Notification::TimerPaused { remaining_time },
        TimerTransition::Resume { remaining_time } => {
            Notification::TimerResumed { remaining_time }
        }
        TimerTransition::Reset { duration } => Notification::TimerReset { duration },
    }
}
