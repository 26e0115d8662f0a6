use serde::{Deserialize, Serialize};

use crate::model::AccountChild;
use crate::patch::{merge_nullable, merge_required, Merge};

/// A problem/solution pairing owned by an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UseCase {
    pub id: Option<i64>,
    pub account_uid: String,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub value: Option<String>,
    pub leader: Option<String>,
    pub status: Option<String>,
    pub enablement_tier: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UseCasePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_uid: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub problem: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub solution: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub value: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub leader: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub status: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub enablement_tier: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub platform: Option<Option<String>>,
}

impl Merge for UseCase {
    type Patch = UseCasePatch;

    fn merge(&mut self, patch: UseCasePatch) {
        merge_required(&mut self.account_uid, patch.account_uid);
        merge_nullable(&mut self.problem, patch.problem);
        merge_nullable(&mut self.solution, patch.solution);
        merge_nullable(&mut self.value, patch.value);
        merge_nullable(&mut self.leader, patch.leader);
        merge_nullable(&mut self.status, patch.status);
        merge_nullable(&mut self.enablement_tier, patch.enablement_tier);
        merge_nullable(&mut self.platform, patch.platform);
    }
}

impl AccountChild for UseCase {
    const COLLECTION: &'static str = "use-cases";
    const LABEL: &'static str = "Use case";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn account_uid(&self) -> &str {
        &self.account_uid
    }
}
