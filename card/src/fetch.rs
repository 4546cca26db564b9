//! Packet fetch state.

use drip_types::AirdropPacket;

/// The state of the asynchronous packet fetch.
///
/// Replaced wholesale on every update; the fetch itself lives with
/// whoever drives the view model. Errors are never auto-retried — the
/// user triggers a refetch through the card's retry action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PacketFetch {
    /// Fetch in flight.
    Loading,
    /// Fetch failed; `message` is surfaced verbatim with a retry action.
    Failed { message: String },
    /// Packet loaded.
    Ready(AirdropPacket),
}

impl PacketFetch {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn packet(&self) -> Option<&AirdropPacket> {
        match self {
            Self::Ready(packet) => Some(packet),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_the_tag() {
        assert!(PacketFetch::Loading.is_loading());
        assert_eq!(PacketFetch::Loading.packet(), None);

        let failed = PacketFetch::Failed { message: "relay down".into() };
        assert_eq!(failed.error_message(), Some("relay down"));
        assert!(!failed.is_loading());

        let ready = PacketFetch::Ready(AirdropPacket::new("100"));
        assert_eq!(ready.packet().map(|p| p.amount.as_str()), Some("100"));
        assert_eq!(ready.error_message(), None);
    }
}
