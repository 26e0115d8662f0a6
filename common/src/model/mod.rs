pub mod account;
pub mod additional_details;
pub mod functional_area;
pub mod help_type;
pub mod intake_request;
pub mod platform;
pub mod primary_it_partner;
pub mod request_state;
pub mod update;
pub mod use_case;

pub use account::{Account, AccountPatch};
pub use intake_request::{IntakeRequest, NewIntakeRequest};
pub use platform::{Platform, PlatformPatch};
pub use primary_it_partner::{PrimaryItPartner, PrimaryItPartnerPatch};
pub use request_state::{RequestState, RequestStatePatch};
pub use update::{Update, UpdatePatch};
pub use use_case::{UseCase, UseCasePatch};

/// A record owned by exactly one [`Account`] through `account_uid`.
///
/// `COLLECTION` is the path segment under `/api/` that the record's create,
/// update and delete endpoints live at.
pub trait AccountChild {
    const COLLECTION: &'static str;
    const LABEL: &'static str;

    fn id(&self) -> Option<i64>;

    fn account_uid(&self) -> &str;
}
