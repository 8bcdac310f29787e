use rst_common::standard::serde::{self, Deserialize, Serialize};
use rst_common::standard::serde_json::{self, Map, Value};

use rstdev_domain::entity::ToJSON;
use rstdev_domain::BaseError;

use super::types::{ProvisionError, WalletHandle};

pub const CONTEXT_VERSION: &str = "0.2";

fn default_version() -> String {
    CONTEXT_VERSION.to_string()
}

/// `Context` holds everything an edge device knows about its relationship with a `Verity` agency
///
/// Before provisioning it knows the agency's public identity and its own verkey. A provisioned
/// context additionally carries the `domain_did` and `verity_agent_verkey` of the created agent.
///
/// The JSON layout follows the configuration file used by the Verity SDKs. Keys this crate does
/// not use, like `walletKey` or `walletPath`, are kept and written back. The wallet handle
/// only lives at runtime and is never serialized
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(crate = "self::serde")]
#[serde(rename_all = "camelCase")]
pub struct Context {
    verity_url: String,

    #[serde(rename = "verityPublicDID")]
    verity_public_did: String,

    verity_public_ver_key: String,

    sdk_ver_key: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    sdk_ver_key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    endpoint_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    wallet_name: Option<String>,

    #[serde(rename = "domainDID", skip_serializing_if = "Option::is_none", default)]
    domain_did: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    verity_agent_ver_key: Option<String>,

    #[serde(default = "default_version")]
    version: String,

    #[serde(flatten)]
    extra: Map<String, Value>,

    #[serde(skip)]
    wallet_handle: WalletHandle,
}

impl Context {
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    pub fn get_verity_url(&self) -> &String {
        &self.verity_url
    }

    pub fn get_verity_public_did(&self) -> &String {
        &self.verity_public_did
    }

    pub fn get_verity_public_verkey(&self) -> &String {
        &self.verity_public_ver_key
    }

    pub fn get_sdk_verkey(&self) -> &String {
        &self.sdk_ver_key
    }

    pub fn get_sdk_verkey_id(&self) -> Option<&String> {
        self.sdk_ver_key_id.as_ref()
    }

    pub fn get_endpoint_url(&self) -> Option<&String> {
        self.endpoint_url.as_ref()
    }

    pub fn get_wallet_name(&self) -> Option<&String> {
        self.wallet_name.as_ref()
    }

    pub fn get_domain_did(&self) -> Option<&String> {
        self.domain_did.as_ref()
    }

    pub fn get_verity_agent_verkey(&self) -> Option<&String> {
        self.verity_agent_ver_key.as_ref()
    }

    pub fn get_wallet_handle(&self) -> WalletHandle {
        self.wallet_handle
    }

    /// `set_wallet_handle` attaches the handle of an opened wallet, used after loading a
    /// context from its JSON representation
    pub fn set_wallet_handle(&mut self, handle: WalletHandle) -> &mut Self {
        self.wallet_handle = handle;
        self
    }

    pub fn is_provisioned(&self) -> bool {
        self.domain_did.is_some() && self.verity_agent_ver_key.is_some()
    }

    /// `provisioned` returns a copy of this context with both agent identifiers set
    pub fn provisioned(&self, domain_did: String, verity_agent_verkey: String) -> Context {
        let mut ctx = self.clone();
        ctx.domain_did = Some(domain_did);
        ctx.verity_agent_ver_key = Some(verity_agent_verkey);
        ctx
    }
}

impl ToJSON for Context {
    fn to_json(&self) -> Result<String, BaseError> {
        let json_str =
            serde_json::to_string(&self).map_err(|err| BaseError::ToJSONError(err.to_string()))?;

        Ok(json_str)
    }
}

impl TryInto<Vec<u8>> for Context {
    type Error = ProvisionError;

    fn try_into(self) -> Result<Vec<u8>, Self::Error> {
        let json =
            serde_json::to_vec(&self).map_err(|err| ProvisionError::JSONError(err.to_string()))?;
        Ok(json)
    }
}

impl TryFrom<Vec<u8>> for Context {
    type Error = ProvisionError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        let ctx: Context = serde_json::from_slice(&value)
            .map_err(|err| ProvisionError::MalformedInput(err.to_string()))?;
        Ok(ctx)
    }
}

/// `ContextBuilder` used to build a not yet provisioned [`Context`]
///
/// The agency url, its public DID and verkey and the sdk verkey are required
#[derive(Debug, Default)]
pub struct ContextBuilder {
    verity_url: Option<String>,
    verity_public_did: Option<String>,
    verity_public_verkey: Option<String>,
    sdk_verkey: Option<String>,
    sdk_verkey_id: Option<String>,
    endpoint_url: Option<String>,
    wallet_name: Option<String>,
    wallet_handle: WalletHandle,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verity_url<T: Into<String>>(mut self, url: T) -> Self {
        self.verity_url = Some(url.into());
        self
    }

    pub fn with_verity_public_did<T: Into<String>>(mut self, did: T) -> Self {
        self.verity_public_did = Some(did.into());
        self
    }

    pub fn with_verity_public_verkey<T: Into<String>>(mut self, verkey: T) -> Self {
        self.verity_public_verkey = Some(verkey.into());
        self
    }

    pub fn with_sdk_verkey<T: Into<String>>(mut self, verkey: T) -> Self {
        self.sdk_verkey = Some(verkey.into());
        self
    }

    pub fn with_sdk_verkey_id<T: Into<String>>(mut self, verkey_id: T) -> Self {
        self.sdk_verkey_id = Some(verkey_id.into());
        self
    }

    pub fn with_endpoint_url<T: Into<String>>(mut self, url: T) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn with_wallet_name<T: Into<String>>(mut self, name: T) -> Self {
        self.wallet_name = Some(name.into());
        self
    }

    pub fn with_wallet_handle(mut self, handle: WalletHandle) -> Self {
        self.wallet_handle = handle;
        self
    }

    pub fn build(self) -> Result<Context, ProvisionError> {
        let required = |value: Option<String>, field: &str| {
            value
                .filter(|val| !val.trim().is_empty())
                .ok_or_else(|| ProvisionError::MalformedInput(format!("{} is required", field)))
        };

        Ok(Context {
            verity_url: required(self.verity_url, "verity_url")?,
            verity_public_did: required(self.verity_public_did, "verity_public_did")?,
            verity_public_ver_key: required(self.verity_public_verkey, "verity_public_verkey")?,
            sdk_ver_key: required(self.sdk_verkey, "sdk_verkey")?,
            sdk_ver_key_id: self.sdk_verkey_id,
            endpoint_url: self.endpoint_url,
            wallet_name: self.wallet_name,
            domain_did: None,
            verity_agent_ver_key: None,
            version: default_version(),
            extra: Map::new(),
            wallet_handle: self.wallet_handle,
        })
    }
}
