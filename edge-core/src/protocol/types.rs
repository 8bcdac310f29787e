use rst_common::standard::serde::{self, Deserialize, Serialize};

/// Message qualifier used by Evernym defined message families
pub const EVERNYM_MSG_QUALIFIER: &str = "did:sov:123456789abcdefghi1234";

/// Message qualifier used by community defined message families
pub const COMMUNITY_MSG_QUALIFIER: &str = "https://didcomm.org";

/// `Thread` is the `~thread` decorator attached to every control message
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "self::serde")]
pub struct Thread {
    pub thid: String,
}

/// `BaseMessage` contains the fields shared by all control messages
///
/// The protocol specific messages embed this object and flatten it into
/// their own wire representation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(crate = "self::serde")]
pub struct BaseMessage {
    #[serde(rename = "@type")]
    pub(crate) typ: String,

    #[serde(rename = "@id")]
    pub(crate) id: String,

    #[serde(rename = "~thread")]
    pub(crate) thread: Thread,
}

impl BaseMessage {
    pub fn get_type(&self) -> &String {
        &self.typ
    }

    pub fn get_id(&self) -> &String {
        &self.id
    }

    pub fn get_thread_id(&self) -> &String {
        &self.thread.thid
    }
}
