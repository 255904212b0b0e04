//! Session protocol dispatch: one branch per inbound event kind.

use crate::{
    domain::{ConnectionId, SessionCommand, SignalEnvelope},
    ui::state::AppState,
    usecase::SessionError,
};

/// Run the use case for `command` sent by `connection_id`.
///
/// Commands against unknown rooms and signals to unreachable peers are
/// dropped without notifying the sender; only `join-room` reports failure
/// back to the client.
pub async fn handle_command(
    state: &AppState,
    connection_id: &ConnectionId,
    command: SessionCommand,
) {
    let _guard = state.dispatch_lock.lock().await;

    let event = command.event_name();
    let room_id = command.room_id().clone();

    let result: Result<(), SessionError> = match command {
        SessionCommand::JoinRoom { room_id } => {
            match state
                .join_room_usecase
                .execute(connection_id.clone(), room_id.clone())
                .await
            {
                Ok(outcome) => {
                    tracing::info!(
                        "Connection '{}' joined room '{}' ({} member(s))",
                        connection_id,
                        room_id,
                        outcome.members.len()
                    );
                }
                Err(e) => {
                    tracing::info!("Connection '{}' failed to join: {}", connection_id, e);
                }
            }
            return;
        }
        SessionCommand::ChangeCode { room_id, code } => state
            .sync_editor_usecase
            .change_code(connection_id.clone(), &room_id, code)
            .await
            .map(drop),
        SessionCommand::ChangeLanguage { room_id, language } => state
            .sync_editor_usecase
            .change_language(connection_id.clone(), &room_id, language)
            .await
            .map(drop),
        SessionCommand::ShareOutput { room_id, output } => state
            .share_output_usecase
            .share(&room_id, output)
            .await
            .map(drop),
        SessionCommand::ClearOutput { room_id } => {
            state.share_output_usecase.clear(&room_id).await.map(drop)
        }
        SessionCommand::ControlTimer {
            room_id,
            transition,
        } => state
            .control_timer_usecase
            .execute(&room_id, transition)
            .await
            .map(drop),
        SessionCommand::Draw { room_id, segment } => state
            .relay_whiteboard_usecase
            .draw(connection_id.clone(), &room_id, segment)
            .await
            .map(drop),
        SessionCommand::ClearWhiteboard { room_id } => state
            .relay_whiteboard_usecase
            .clear(connection_id.clone(), &room_id)
            .await
            .map(drop),
        SessionCommand::Signal {
            kind,
            target,
            payload,
            ..
        } => {
            state
                .relay_signal_usecase
                .relay(SignalEnvelope {
                    kind,
                    sender: connection_id.clone(),
                    target,
                    payload,
                })
                .await
        }
        SessionCommand::RequestPeers { room_id } => state
            .relay_signal_usecase
            .list_peers(connection_id.clone(), &room_id)
            .await
            .map(drop),
    };

    if let Err(e) = result {
        tracing::debug!(
            "Dropped '{}' from '{}' for room '{}': {}",
            event,
            connection_id,
            room_id,
            e
        );
    }
}
