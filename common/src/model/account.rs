use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::patch::{merge_nullable, Merge};

/// A tracked team or business unit and its onboarding metadata.
///
/// Only `uid` is mandatory. Every other field reads back as `null` when it was
/// never supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub uid: String,
    pub team: Option<String>,
    pub business_it_area: Option<String>,
    pub vp: Option<String>,
    pub team_admin: Option<String>,
    pub use_case: Option<String>,
    pub use_case_status: Option<String>,
    pub databricks: Option<String>,
    pub month_onboarded_db: Option<NaiveDate>,
    pub snowflake: Option<String>,
    pub month_onboarded_sf: Option<NaiveDate>,
    pub north_star_domain: Option<String>,
    pub business_or_it: Option<String>,
    pub centerwell_or_insurance: Option<String>,
    pub git_repo: Option<String>,
    pub unique_identifier: Option<String>,
    pub associated_ado_items: Option<String>,
    pub team_artifacts: Option<String>,
    pub current_tech_stack: Option<String>,
    pub ad_groups: Option<String>,
    pub notes: Option<String>,
    pub csm: Option<String>,
    pub health: Option<String>,
    pub health_reason: Option<String>,
}

/// Partial update for an [`Account`]. The `uid` is the key and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountPatch {
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub team: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub business_it_area: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub vp: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub team_admin: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub use_case: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub use_case_status: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub databricks: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub month_onboarded_db: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub snowflake: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub month_onboarded_sf: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub north_star_domain: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub business_or_it: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub centerwell_or_insurance: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub git_repo: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub unique_identifier: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub associated_ado_items: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub team_artifacts: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub current_tech_stack: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub ad_groups: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub csm: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub health: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option", skip_serializing_if = "Option::is_none")]
    pub health_reason: Option<Option<String>>,
}

impl Merge for Account {
    type Patch = AccountPatch;

    fn merge(&mut self, patch: AccountPatch) {
        merge_nullable(&mut self.team, patch.team);
        merge_nullable(&mut self.business_it_area, patch.business_it_area);
        merge_nullable(&mut self.vp, patch.vp);
        merge_nullable(&mut self.team_admin, patch.team_admin);
        merge_nullable(&mut self.use_case, patch.use_case);
        merge_nullable(&mut self.use_case_status, patch.use_case_status);
        merge_nullable(&mut self.databricks, patch.databricks);
        merge_nullable(&mut self.month_onboarded_db, patch.month_onboarded_db);
        merge_nullable(&mut self.snowflake, patch.snowflake);
        merge_nullable(&mut self.month_onboarded_sf, patch.month_onboarded_sf);
        merge_nullable(&mut self.north_star_domain, patch.north_star_domain);
        merge_nullable(&mut self.business_or_it, patch.business_or_it);
        merge_nullable(&mut self.centerwell_or_insurance, patch.centerwell_or_insurance);
        merge_nullable(&mut self.git_repo, patch.git_repo);
        merge_nullable(&mut self.unique_identifier, patch.unique_identifier);
        merge_nullable(&mut self.associated_ado_items, patch.associated_ado_items);
        merge_nullable(&mut self.team_artifacts, patch.team_artifacts);
        merge_nullable(&mut self.current_tech_stack, patch.current_tech_stack);
        merge_nullable(&mut self.ad_groups, patch.ad_groups);
        merge_nullable(&mut self.notes, patch.notes);
        merge_nullable(&mut self.csm, patch.csm);
        merge_nullable(&mut self.health, patch.health);
        merge_nullable(&mut self.health_reason, patch.health_reason);
    }
}

/// A patch that overwrites every field with the account's values. Used by the
/// edit form, which always submits the whole record.
impl From<Account> for AccountPatch {
    fn from(account: Account) -> Self {
        Self {
            team: Some(account.team),
            business_it_area: Some(account.business_it_area),
            vp: Some(account.vp),
            team_admin: Some(account.team_admin),
            use_case: Some(account.use_case),
            use_case_status: Some(account.use_case_status),
            databricks: Some(account.databricks),
            month_onboarded_db: Some(account.month_onboarded_db),
            snowflake: Some(account.snowflake),
            month_onboarded_sf: Some(account.month_onboarded_sf),
            north_star_domain: Some(account.north_star_domain),
            business_or_it: Some(account.business_or_it),
            centerwell_or_insurance: Some(account.centerwell_or_insurance),
            git_repo: Some(account.git_repo),
            unique_identifier: Some(account.unique_identifier),
            associated_ado_items: Some(account.associated_ado_items),
            team_artifacts: Some(account.team_artifacts),
            current_tech_stack: Some(account.current_tech_stack),
            ad_groups: Some(account.ad_groups),
            notes: Some(account.notes),
            csm: Some(account.csm),
            health: Some(account.health),
            health_reason: Some(account.health_reason),
        }
    }
}

/// Select options offered for `health`. Stored as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Green,
    Yellow,
    Red,
}

impl Health {
    pub const ALL: [Health; 3] = [Health::Green, Health::Yellow, Health::Red];

    pub fn as_str(&self) -> &'static str {
        match self {
            Health::Green => "Green",
            Health::Yellow => "Yellow",
            Health::Red => "Red",
        }
    }
}

/// Select options offered for `business_or_it`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessOrIt {
    Business,
    It,
}

impl BusinessOrIt {
    pub const ALL: [BusinessOrIt; 2] = [BusinessOrIt::Business, BusinessOrIt::It];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessOrIt::Business => "Business",
            BusinessOrIt::It => "IT",
        }
    }
}

/// Select options offered for `centerwell_or_insurance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterwellOrInsurance {
    Centerwell,
    Insurance,
}

impl CenterwellOrInsurance {
    pub const ALL: [CenterwellOrInsurance; 2] =
        [CenterwellOrInsurance::Centerwell, CenterwellOrInsurance::Insurance];

    pub fn as_str(&self) -> &'static str {
        match self {
            CenterwellOrInsurance::Centerwell => "Centerwell",
            CenterwellOrInsurance::Insurance => "Insurance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_only_touches_named_fields() {
        let mut account = Account {
            uid: "ACC001".into(),
            team: Some("Data Analytics Team".into()),
            vp: Some("Sarah Johnson".into()),
            health: Some("Green".into()),
            ..Default::default()
        };
        let before = account.clone();

        let patch: AccountPatch = serde_json::from_str(r#"{"health":"Yellow"}"#).unwrap();
        account.merge(patch);

        assert_eq!(account.health.as_deref(), Some("Yellow"));
        assert_eq!(account.team, before.team);
        assert_eq!(account.vp, before.vp);
        assert_eq!(account.uid, before.uid);
    }

    #[test]
    fn explicit_null_clears_field() {
        let mut account = Account {
            uid: "ACC002".into(),
            notes: Some("stale".into()),
            ..Default::default()
        };
        let patch: AccountPatch = serde_json::from_str(r#"{"notes":null}"#).unwrap();
        account.merge(patch);
        assert_eq!(account.notes, None);
    }

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let account: Account = serde_json::from_str(r#"{"uid":"ACC003","team":"Finance"}"#).unwrap();
        assert_eq!(account.team.as_deref(), Some("Finance"));
        assert_eq!(account.month_onboarded_db, None);
        assert_eq!(account.csm, None);
    }

    #[test]
    fn patch_serialization_skips_untouched_fields() {
        let patch = AccountPatch {
            vp: Some(Some("Robert Davis".into())),
            notes: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"vp": "Robert Davis", "notes": null}));
    }
}
