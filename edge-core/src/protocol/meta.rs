use rst_common::standard::uuid::Uuid;

use super::types::{BaseMessage, Thread};

/// `ProtocolMeta` identifies a message family and the conversation thread
/// a protocol instance belongs to
///
/// Message types are rendered as:
///
/// ```text
/// <qualifier>;spec/<family>/<version>/<message name>
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolMeta {
    family: String,
    version: String,
    qualifier: String,
    thread_id: String,
}

impl ProtocolMeta {
    /// When the `thread_id` is not given, a new one will be generated
    pub fn new(family: &str, version: &str, qualifier: &str, thread_id: Option<String>) -> Self {
        Self {
            family: family.to_string(),
            version: version.to_string(),
            qualifier: qualifier.to_string(),
            thread_id: thread_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        }
    }

    pub fn get_family(&self) -> &String {
        &self.family
    }

    pub fn get_version(&self) -> &String {
        &self.version
    }

    pub fn get_qualifier(&self) -> &String {
        &self.qualifier
    }

    pub fn get_thread_id(&self) -> &String {
        &self.thread_id
    }

    pub fn message_type(&self, msg_name: &str) -> String {
        format!(
            "{};spec/{}/{}/{}",
            self.qualifier, self.family, self.version, msg_name
        )
    }

    /// `base_message` builds the shared message fields. Each call generates a new
    /// message id while keeping the thread id of this protocol instance
    pub fn base_message(&self, msg_name: &str) -> BaseMessage {
        BaseMessage {
            typ: self.message_type(msg_name),
            id: Uuid::new_v4().to_string(),
            thread: Thread {
                thid: self.thread_id.to_owned(),
            },
        }
    }

    /// `is_message` checks the given message type belongs to this family with the given name.
    /// The qualifier is ignored, agencies may answer with any of its spellings
    pub fn is_message(&self, typ: &str, msg_name: &str) -> bool {
        typ.ends_with(&format!("/{}/{}/{}", self.family, self.version, msg_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::types::{COMMUNITY_MSG_QUALIFIER, EVERNYM_MSG_QUALIFIER};

    #[test]
    fn test_message_type() {
        let meta = ProtocolMeta::new(
            "agent-provisioning",
            "0.7",
            EVERNYM_MSG_QUALIFIER,
            Some("thread-1".to_string()),
        );

        assert_eq!(
            meta.message_type("create-edge-agent"),
            "did:sov:123456789abcdefghi1234;spec/agent-provisioning/0.7/create-edge-agent"
        );
        assert_eq!(meta.get_thread_id(), "thread-1");
    }

    #[test]
    fn test_generate_thread_id() {
        let meta = ProtocolMeta::new("trust_ping", "1.0", COMMUNITY_MSG_QUALIFIER, None);
        assert!(!meta.get_thread_id().is_empty());

        let other = ProtocolMeta::new("trust_ping", "1.0", COMMUNITY_MSG_QUALIFIER, None);
        assert_ne!(meta.get_thread_id(), other.get_thread_id())
    }

    #[test]
    fn test_base_message() {
        let meta = ProtocolMeta::new(
            "agent-provisioning",
            "0.7",
            EVERNYM_MSG_QUALIFIER,
            Some("thread-1".to_string()),
        );

        let first = meta.base_message("create-edge-agent");
        let second = meta.base_message("create-edge-agent");

        assert_eq!(first.get_type(), second.get_type());
        assert_eq!(first.get_thread_id(), "thread-1");
        assert_eq!(second.get_thread_id(), "thread-1");
        assert_ne!(first.get_id(), second.get_id());
        assert!(meta.is_message(first.get_type(), "create-edge-agent"));
        assert!(!meta.is_message(first.get_type(), "problem-report"))
    }

    #[test]
    fn test_is_message_any_qualifier() {
        let meta = ProtocolMeta::new("agent-provisioning", "0.7", EVERNYM_MSG_QUALIFIER, None);

        assert!(meta.is_message(
            "https://didcomm.evernym.com/agent-provisioning/0.7/AGENT_PROVISIONED",
            "AGENT_PROVISIONED"
        ));
        assert!(meta.is_message(
            "did:sov:BzCbsNYhMrjHiqZDTUASHg;spec/agent-provisioning/0.7/problem-report",
            "problem-report"
        ));
        assert!(!meta.is_message(
            "https://didcomm.evernym.com/agent-provisioning/0.6/AGENT_PROVISIONED",
            "AGENT_PROVISIONED"
        ));
        assert!(!meta.is_message(
            "https://didcomm.evernym.com/other-agent-provisioning/0.7/AGENT_PROVISIONED",
            "AGENT_PROVISIONED"
        ))
    }
}
