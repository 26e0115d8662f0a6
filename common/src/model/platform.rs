use serde::{Deserialize, Serialize};

use crate::model::AccountChild;
use crate::patch::{merge_nullable, merge_required, Merge};

/// Onboarding record of an account on one data platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub id: Option<i64>,
    pub account_uid: String,
    pub platform_name: Option<String>,
    pub onboarding_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_uid: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub onboarding_status: Option<Option<String>>,
}

impl Merge for Platform {
    type Patch = PlatformPatch;

    fn merge(&mut self, patch: PlatformPatch) {
        merge_required(&mut self.account_uid, patch.account_uid);
        merge_nullable(&mut self.platform_name, patch.platform_name);
        merge_nullable(&mut self.onboarding_status, patch.onboarding_status);
    }
}

impl AccountChild for Platform {
    const COLLECTION: &'static str = "platforms";
    const LABEL: &'static str = "Platform";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn account_uid(&self) -> &str {
        &self.account_uid
    }
}

/// Platforms offered in the select boxes of the account and intake forms.
pub const KNOWN_PLATFORMS: &[&str] = &["Databricks", "Snowflake", "Power Platform", "Fabric"];
