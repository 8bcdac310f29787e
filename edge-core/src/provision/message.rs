use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json::{self, Value};
use rst_common::with_logging::log::debug;

use rstdev_domain::entity::ToJSON;
use rstdev_domain::BaseError;

use crate::protocol::{BaseMessage, ProtocolMeta};

use super::types::{ProvisionError, MSG_AGENT_PROVISIONED, MSG_CREATE_EDGE_AGENT, MSG_PROBLEM_REPORT};
use super::{Context, ProvisionToken};

/// `CreateEdgeAgent` is the control message asking the agency to create a new agent
///
/// Wire mapping:
///
/// | field             | wire key         |
/// |-------------------|------------------|
/// | `base.typ`        | `@type`          |
/// | `base.id`         | `@id`            |
/// | `base.thread`     | `~thread`        |
/// | `requester_vk`    | `requesterVk`    |
/// | `provision_token` | `provisionToken` |
///
/// The `provisionToken` key is omitted when no token is given
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "self::serde")]
pub struct CreateEdgeAgent {
    #[serde(flatten)]
    base: BaseMessage,

    #[serde(rename = "requesterVk")]
    requester_vk: String,

    #[serde(rename = "provisionToken", skip_serializing_if = "Option::is_none", default)]
    provision_token: Option<ProvisionToken>,
}

impl CreateEdgeAgent {
    pub fn build(meta: &ProtocolMeta, context: &Context, token: Option<&ProvisionToken>) -> Self {
        Self {
            base: meta.base_message(MSG_CREATE_EDGE_AGENT),
            requester_vk: context.get_sdk_verkey().to_owned(),
            provision_token: token.cloned(),
        }
    }

    pub fn get_base(&self) -> &BaseMessage {
        &self.base
    }

    pub fn get_requester_vk(&self) -> &String {
        &self.requester_vk
    }

    pub fn get_provision_token(&self) -> Option<&ProvisionToken> {
        self.provision_token.as_ref()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ProvisionError> {
        serde_json::to_vec(&self).map_err(|err| ProvisionError::JSONError(err.to_string()))
    }
}

impl ToJSON for CreateEdgeAgent {
    fn to_json(&self) -> Result<String, BaseError> {
        let json_str =
            serde_json::to_string(&self).map_err(|err| BaseError::ToJSONError(err.to_string()))?;

        Ok(json_str)
    }
}

/// `ProvisionedResponse` contains the identifiers of the agent created by the agency
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "self::serde")]
pub struct ProvisionedResponse {
    #[serde(rename = "selfDID")]
    self_did: String,

    #[serde(rename = "agentVerKey")]
    agent_verkey: String,
}

impl ProvisionedResponse {
    pub fn new(self_did: String, agent_verkey: String) -> Self {
        Self {
            self_did,
            agent_verkey,
        }
    }

    pub fn get_self_did(&self) -> &String {
        &self.self_did
    }

    pub fn get_agent_verkey(&self) -> &String {
        &self.agent_verkey
    }

    /// `decode` reads an unpacked agency message
    ///
    /// A `problem-report` of the provisioning family is turned into [`ProvisionError::ProblemReport`].
    /// Any other message is accepted as long as it carries both identifiers
    pub fn decode(meta: &ProtocolMeta, message: &str) -> Result<Self, ProvisionError> {
        let value: Value = serde_json::from_str(message)
            .map_err(|err| ProvisionError::MalformedResponse(err.to_string()))?;

        if let Some(typ) = value.get("@type").and_then(Value::as_str) {
            if meta.is_message(typ, MSG_PROBLEM_REPORT) {
                return Err(ProvisionError::ProblemReport(problem_report_reason(&value)));
            }

            if !meta.is_message(typ, MSG_AGENT_PROVISIONED) {
                debug!("[provision:decode] unexpected message type: {}", typ);
            }
        }

        serde_json::from_value(value).map_err(|err| ProvisionError::MalformedResponse(err.to_string()))
    }
}

fn problem_report_reason(value: &Value) -> String {
    value
        .get("msg")
        .or_else(|| value.get("comment"))
        .or_else(|| value.get("description").and_then(|desc| desc.get("en")))
        .and_then(Value::as_str)
        .map(|reason| reason.to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rst_common::standard::serde_json::json;

    use crate::protocol::types::EVERNYM_MSG_QUALIFIER;
    use crate::provision::types::{MSG_FAMILY, MSG_FAMILY_VERSION};

    fn generate_meta() -> ProtocolMeta {
        ProtocolMeta::new(
            MSG_FAMILY,
            MSG_FAMILY_VERSION,
            EVERNYM_MSG_QUALIFIER,
            Some("thread-1".to_string()),
        )
    }

    fn generate_context() -> Context {
        Context::builder()
            .with_verity_url("http://localhost:9000")
            .with_verity_public_did("verity-did")
            .with_verity_public_verkey("verity-verkey")
            .with_sdk_verkey("sdk-verkey")
            .build()
            .unwrap()
    }

    fn generate_token() -> ProvisionToken {
        ProvisionToken::new(
            "n1".to_string(),
            "t1".to_string(),
            "s1".to_string(),
            "p1".to_string(),
            "c2lnbmF0dXJl".to_string(),
            "K".to_string(),
        )
    }

    #[test]
    fn test_wire_format_without_token() {
        let msg = CreateEdgeAgent::build(&generate_meta(), &generate_context(), None);
        let value: Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();

        assert_eq!(
            value["@type"],
            "did:sov:123456789abcdefghi1234;spec/agent-provisioning/0.7/create-edge-agent"
        );
        assert_eq!(value["~thread"]["thid"], "thread-1");
        assert_eq!(value["requesterVk"], "sdk-verkey");
        assert!(value["@id"].is_string());
        assert!(value.get("provisionToken").is_none());
    }

    #[test]
    fn test_wire_format_with_token() {
        let token = generate_token();
        let msg = CreateEdgeAgent::build(&generate_meta(), &generate_context(), Some(&token));
        let value: Value = serde_json::from_slice(&msg.to_bytes().unwrap()).unwrap();

        assert_eq!(
            value["provisionToken"],
            json!({
                "nonce": "n1",
                "timestamp": "t1",
                "sponseeId": "s1",
                "sponsorId": "p1",
                "sig": "c2lnbmF0dXJl",
                "sponsorVerKey": "K"
            })
        );

        let decoded: CreateEdgeAgent = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_decode_provisioned() {
        let meta = generate_meta();
        let message = json!({
            "@type": meta.message_type(MSG_AGENT_PROVISIONED),
            "@id": "msg-1",
            "selfDID": "D1",
            "agentVerKey": "V1"
        });

        let response = ProvisionedResponse::decode(&meta, &message.to_string()).unwrap();
        assert_eq!(response.get_self_did(), "D1");
        assert_eq!(response.get_agent_verkey(), "V1");
    }

    #[test]
    fn test_decode_without_type() {
        let message = json!({"selfDID": "D1", "agentVerKey": "V1"});
        let response = ProvisionedResponse::decode(&generate_meta(), &message.to_string());
        assert_eq!(
            response.unwrap(),
            ProvisionedResponse::new("D1".to_string(), "V1".to_string())
        );
    }

    #[test]
    fn test_decode_problem_report() {
        let meta = generate_meta();
        let message = json!({
            "@type": meta.message_type(MSG_PROBLEM_REPORT),
            "msg": "invalid token"
        });

        let response = ProvisionedResponse::decode(&meta, &message.to_string());
        assert_eq!(
            response.unwrap_err(),
            ProvisionError::ProblemReport("invalid token".to_string())
        );
    }

    #[test]
    fn test_decode_malformed() {
        let meta = generate_meta();

        let missing = json!({"selfDID": "D1"});
        let response = ProvisionedResponse::decode(&meta, &missing.to_string());
        assert!(matches!(response.unwrap_err(), ProvisionError::MalformedResponse(_)));

        let response = ProvisionedResponse::decode(&meta, "not json");
        assert!(matches!(response.unwrap_err(), ProvisionError::MalformedResponse(_)));

        let unexpected = json!({
            "@type": meta.message_type("something-else"),
            "selfDID": "D1"
        });
        let response = ProvisionedResponse::decode(&meta, &unexpected.to_string());
        assert!(matches!(response.unwrap_err(), ProvisionError::MalformedResponse(_)))
    }

    #[test]
    fn test_decode_other_qualifier() {
        let message = json!({
            "@type": "https://didcomm.evernym.com/agent-provisioning/0.7/AGENT_PROVISIONED",
            "selfDID": "D1",
            "agentVerKey": "V1"
        });

        let response = ProvisionedResponse::decode(&generate_meta(), &message.to_string());
        assert_eq!(
            response.unwrap(),
            ProvisionedResponse::new("D1".to_string(), "V1".to_string())
        );
    }

    #[test]
    fn test_decode_problem_report_other_qualifier() {
        let message = json!({
            "@type": "https://didcomm.evernym.com/agent-provisioning/0.7/problem-report",
            "description": {"en": "token expired", "code": "expired"}
        });

        let response = ProvisionedResponse::decode(&generate_meta(), &message.to_string());
        assert_eq!(
            response.unwrap_err(),
            ProvisionError::ProblemReport("token expired".to_string())
        );
    }
}
