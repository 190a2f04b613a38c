//! 参加者へ送る通知（サーバー → クライアント）
//!
//! ワイヤ形式への変換は Infrastructure 層の DTO が担う。

use super::value_object::{
    MessageContent, ParticipantId, SessionToken, SignalingPayload, Timestamp,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// 接続直後に自分の ID を知らせる
    Connected { participant_id: ParticipantId },
    WaitingForPartner,
    PartnerFound {
        partner_id: ParticipantId,
        session_token: SessionToken,
    },
    PartnerDisconnected,
    ReceiveMessage {
        content: MessageContent,
        timestamp: Timestamp,
        sender_id: ParticipantId,
    },
    PartnerTypingStart,
    PartnerTypingStop,
    IncomingVideoCall { caller_id: ParticipantId },
    VideoCallAccepted { accepter_id: ParticipantId },
    VideoCallRejected,
    WebRtcOffer {
        sender_id: ParticipantId,
        payload: SignalingPayload,
    },
    WebRtcAnswer {
        sender_id: ParticipantId,
        payload: SignalingPayload,
    },
    WebRtcIceCandidate {
        sender_id: ParticipantId,
        payload: SignalingPayload,
    },
    Pong,
}

impl Notification {
    /// ログ出力用のイベント名
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connected",
            Self::WaitingForPartner => "waiting-for-partner",
            Self::PartnerFound { .. } => "partner-found",
            Self::PartnerDisconnected => "partner-disconnected",
            Self::ReceiveMessage { .. } => "receive-message",
            Self::PartnerTypingStart => "partner-typing-start",
            Self::PartnerTypingStop => "partner-typing-stop",
            Self::IncomingVideoCall { .. } => "incoming-video-call",
            Self::VideoCallAccepted { .. } => "video-call-accepted",
            Self::VideoCallRejected => "video-call-rejected",
            Self::WebRtcOffer { .. } => "webrtc-offer",
            Self::WebRtcAnswer { .. } => "webrtc-answer",
            Self::WebRtcIceCandidate { .. } => "webrtc-ice-candidate",
            Self::Pong => "pong",
        }
    }
}
