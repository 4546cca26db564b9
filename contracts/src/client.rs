//! JSON-RPC client for the airdrop relay.

use std::time::Duration;

use drip_claim::CheckState;
use drip_types::{Account, AirdropPacket, Ratio};
use serde::Deserialize;
use tracing::debug;

use crate::error::ContractError;

/// HTTP client for the airdrop relay's JSON-RPC surface.
///
/// Wraps `reqwest::Client` with the relay's base URL and provides typed
/// methods for each action the claim flow needs. Completions are
/// delivered to the view model as discrete updates by the caller.
#[derive(Clone)]
pub struct DripClient {
    http: reqwest::Client,
    relay_url: String,
}

impl DripClient {
    /// Create a client targeting the given base URL (e.g. `https://relay.drip.fi`).
    pub fn new(relay_url: impl Into<String>) -> Result<Self, ContractError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ContractError::Node(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            relay_url: relay_url.into(),
        })
    }

    /// The configured relay URL.
    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    /// Send a JSON-RPC request and return the `result` field.
    async fn rpc_call(
        &self,
        action: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ContractError> {
        let mut body = params;
        body.as_object_mut()
            .ok_or_else(|| ContractError::Node("params must be a JSON object".into()))?
            .insert("action".to_string(), serde_json::json!(action));

        debug!(action, "relay rpc call");
        let response = self
            .http
            .post(&self.relay_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ContractError::Node(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ContractError::Node(format!(
                "relay returned HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ContractError::Node(format!("invalid JSON response: {e}")))?;

        if let Some(err) = json.get("error").and_then(|e| e.as_str()) {
            return Err(ContractError::Node(err.to_string()));
        }

        Ok(json.get("result").cloned().unwrap_or(json))
    }

    /// Fetch the airdrop packet for an account. A missing allocation is a
    /// relay-side error carrying the relay's message; the card surfaces it
    /// verbatim with a retry action.
    pub async fn fetch_packet(&self, account: &Account) -> Result<AirdropPacket, ContractError> {
        let result = self
            .rpc_call(
                "airdrop_packet",
                serde_json::json!({ "account": account.as_str() }),
            )
            .await?;

        serde_json::from_value(result)
            .map_err(|e| ContractError::InvalidResponse(format!("packet: {e}")))
    }

    /// Query eligibility for an account.
    pub async fn check_eligibility(&self, account: &Account) -> Result<CheckState, ContractError> {
        let result = self
            .rpc_call(
                "airdrop_check",
                serde_json::json!({ "account": account.as_str() }),
            )
            .await?;

        let outcome: CheckOutcome = serde_json::from_value(result)
            .map_err(|e| ContractError::InvalidResponse(format!("check: {e}")))?;
        outcome.into_check_state()
    }

    /// Submit a claim for a fetched packet; returns the transaction hash.
    pub async fn submit_claim(
        &self,
        account: &Account,
        packet: &AirdropPacket,
    ) -> Result<SubmitResult, ContractError> {
        let result = self
            .rpc_call(
                "airdrop_claim",
                serde_json::json!({
                    "account": account.as_str(),
                    "amount": packet.amount,
                }),
            )
            .await?;

        serde_json::from_value(result)
            .map_err(|e| ContractError::InvalidResponse(format!("claim: {e}")))
    }

    /// ERC-20 `balanceOf` through the relay.
    pub async fn balance_of(
        &self,
        token: &Account,
        account: &Account,
    ) -> Result<u128, ContractError> {
        let result = self
            .rpc_call(
                "balance_of",
                serde_json::json!({
                    "token": token.as_str(),
                    "account": account.as_str(),
                }),
            )
            .await?;

        let resp: BalanceResult = serde_json::from_value(result)
            .map_err(|e| ContractError::InvalidResponse(format!("balance: {e}")))?;
        resp.balance
            .parse::<u128>()
            .map_err(|e| ContractError::InvalidResponse(format!("invalid balance value: {e}")))
    }
}

/// Eligibility response from the relay.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckOutcome {
    pub eligible: bool,
    #[serde(default)]
    pub claimable: Option<String>,
    #[serde(default)]
    pub ratio_numer: Option<u64>,
    #[serde(default)]
    pub ratio_denom: Option<u64>,
}

impl CheckOutcome {
    /// Map the wire shape into the flow's tagged union. An eligible
    /// outcome must carry the claimable amount and both ratio halves.
    pub fn into_check_state(self) -> Result<CheckState, ContractError> {
        if !self.eligible {
            return Ok(CheckState::Nope);
        }
        let claimable = self
            .claimable
            .ok_or_else(|| ContractError::InvalidResponse("eligible without claimable".into()))?;
        let (numer, denom) = self
            .ratio_numer
            .zip(self.ratio_denom)
            .ok_or_else(|| ContractError::InvalidResponse("eligible without ratio".into()))?;
        let ratio = Ratio::new(numer, denom)
            .map_err(|e| ContractError::InvalidResponse(e.to_string()))?;
        Ok(CheckState::Yep { claimable, ratio })
    }
}

/// Claim submission response.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResult {
    pub tx_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
struct BalanceResult {
    balance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        drip_utils::try_init_tracing();
        let client = DripClient::new("https://relay.drip.fi").unwrap();
        assert_eq!(client.relay_url(), "https://relay.drip.fi");
    }

    #[test]
    fn ineligible_outcome_maps_to_nope() {
        let outcome: CheckOutcome = serde_json::from_str(r#"{"eligible":false}"#).unwrap();
        assert_eq!(outcome.into_check_state().unwrap(), CheckState::Nope);
    }

    #[test]
    fn eligible_outcome_maps_to_yep() {
        let outcome: CheckOutcome = serde_json::from_str(
            r#"{"eligible":true,"claimable":"5","ratio_numer":3,"ratio_denom":4}"#,
        )
        .unwrap();
        let state = outcome.into_check_state().unwrap();
        assert_eq!(state.claimable(), Some("5"));
        assert_eq!(state.ratio(), Some(Ratio::new(3, 4).unwrap()));
    }

    #[test]
    fn eligible_outcome_missing_fields_is_invalid() {
        let outcome: CheckOutcome = serde_json::from_str(r#"{"eligible":true}"#).unwrap();
        assert!(matches!(
            outcome.into_check_state(),
            Err(ContractError::InvalidResponse(_))
        ));

        let outcome: CheckOutcome =
            serde_json::from_str(r#"{"eligible":true,"claimable":"5"}"#).unwrap();
        assert!(outcome.into_check_state().is_err());
    }

    #[test]
    fn zero_denominator_ratio_is_rejected() {
        let outcome: CheckOutcome = serde_json::from_str(
            r#"{"eligible":true,"claimable":"5","ratio_numer":1,"ratio_denom":0}"#,
        )
        .unwrap();
        assert!(outcome.into_check_state().is_err());
    }
}
