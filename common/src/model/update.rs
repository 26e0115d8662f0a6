use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::AccountChild;
use crate::patch::{merge_nullable, merge_required, Merge};

/// A dated status note on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Update {
    pub id: Option<i64>,
    pub account_uid: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub platform: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_uid: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub author: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub platform: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub date: Option<Option<NaiveDate>>,
}

impl Merge for Update {
    type Patch = UpdatePatch;

    fn merge(&mut self, patch: UpdatePatch) {
        merge_required(&mut self.account_uid, patch.account_uid);
        merge_nullable(&mut self.description, patch.description);
        merge_nullable(&mut self.author, patch.author);
        merge_nullable(&mut self.platform, patch.platform);
        merge_nullable(&mut self.date, patch.date);
    }
}

impl AccountChild for Update {
    const COLLECTION: &'static str = "updates";
    const LABEL: &'static str = "Update";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn account_uid(&self) -> &str {
        &self.account_uid
    }
}
