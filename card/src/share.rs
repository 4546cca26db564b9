//! Share-text composition.

use drip_types::{format_balance, AirdropPacket, Token};

/// The social network the post link points into. Only Twitter gets a
/// cashtag-prefixed symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialNetwork {
    Twitter,
    Facebook,
    Other,
}

/// Build the fixed-template share message for a claim.
///
/// Pure function; always succeeds. Falls back to a zero amount when no
/// packet is loaded.
pub fn compose_share_text(
    network: SocialNetwork,
    token: &Token,
    packet: Option<&AirdropPacket>,
    post_link: &str,
) -> String {
    let cashtag = if network == SocialNetwork::Twitter { "$" } else { "" };
    let amount = packet
        .and_then(|p| p.amount_raw().ok())
        .map(|raw| format_balance(raw, token.decimals, 6))
        .unwrap_or_else(|| "0".to_string());

    [
        format!(
            "I just claimed {cashtag}{} with {amount}. Follow @dripprotocol (drip.fi) to claim your airdrop.",
            token.symbol
        ),
        "#drip".to_string(),
        post_link.to_string(),
    ]
    .join("\n")
}
