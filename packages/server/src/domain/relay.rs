//! Session Relay で転送されるイベント
//!
//! どの種類も「送信者の現在のパートナーにだけ届ける」という同じ仕組みで扱われる。

use super::{
    notification::Notification,
    value_object::{MessageContent, ParticipantId, SignalingPayload, Timestamp},
};

#[derive(Debug, Clone, PartialEq)]
pub enum RelayEvent {
    Message(MessageContent),
    TypingStart,
    TypingStop,
    CallInvite,
    CallAccept,
    CallReject,
    Offer(SignalingPayload),
    Answer(SignalingPayload),
    IceCandidate(SignalingPayload),
}

impl RelayEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::TypingStart => "typing-start",
            Self::TypingStop => "typing-stop",
            Self::CallInvite => "call-invite",
            Self::CallAccept => "call-accept",
            Self::CallReject => "call-reject",
            Self::Offer(_) => "webrtc-offer",
            Self::Answer(_) => "webrtc-answer",
            Self::IceCandidate(_) => "webrtc-ice-candidate",
        }
    }

    /// パートナーに届ける通知に変換する
    ///
    /// `relayed_at` はサーバー側で付与した時刻。クライアントの時刻は使わない。
    pub fn into_notification(self, sender: ParticipantId, relayed_at: Timestamp) -> Notification {
        match self {
            Self::Message(content) => Notification::ReceiveMessage {
                content,
                timestamp: relayed_at,
                sender_id: sender,
            },
            Self::TypingStart => Notification::PartnerTypingStart,
            Self::TypingStop => Notification::PartnerTypingStop,
            Self::CallInvite => Notification::IncomingVideoCall { caller_id: sender },
            Self::CallAccept => Notification::VideoCallAccepted {
                accepter_id: sender,
            },
            Self::CallReject => Notification::VideoCallRejected,
            Self::Offer(payload) => Notification::WebRtcOffer {
                sender_id: sender,
                payload,
            },
            Self::Answer(payload) => Notification::WebRtcAnswer {
                sender_id: sender,
                payload,
            },
            Self::IceCandidate(payload) => Notification::WebRtcIceCandidate {
                sender_id: sender,
                payload,
            },
        }
    }
}
