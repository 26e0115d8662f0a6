use serde::{Deserialize, Serialize};

use crate::model::AccountChild;
use crate::patch::{merge_nullable, merge_required, Merge};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryItPartner {
    pub id: Option<i64>,
    pub account_uid: String,
    pub primary_it_partner: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryItPartnerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_uid: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub primary_it_partner: Option<Option<String>>,
}

impl Merge for PrimaryItPartner {
    type Patch = PrimaryItPartnerPatch;

    fn merge(&mut self, patch: PrimaryItPartnerPatch) {
        merge_required(&mut self.account_uid, patch.account_uid);
        merge_nullable(&mut self.primary_it_partner, patch.primary_it_partner);
    }
}

impl AccountChild for PrimaryItPartner {
    const COLLECTION: &'static str = "primary-it-partners";
    const LABEL: &'static str = "Primary IT Partner";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn account_uid(&self) -> &str {
        &self.account_uid
    }
}
