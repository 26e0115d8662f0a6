//! Partial-update support.
//!
//! A patch body distinguishes three cases per field: absent (keep the stored
//! value), `null` (clear it) and a value (replace it). Optional record fields
//! are therefore patched through `Option<Option<T>>`, deserialized with
//! `serde_with::rust::double_option`.

/// Applies a patch onto a stored record, leaving fields the patch omits untouched.
pub trait Merge {
    type Patch;

    fn merge(&mut self, patch: Self::Patch);
}

/// Merges a nullable field.
pub fn merge_nullable<T>(slot: &mut Option<T>, patch: Option<Option<T>>) {
    if let Some(value) = patch {
        *slot = value;
    }
}

/// Merges a required field. `None` means the patch did not mention it.
pub fn merge_required<T>(slot: &mut T, patch: Option<T>) {
    if let Some(value) = patch {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_field_keeps_value() {
        let mut slot = Some("kept".to_string());
        merge_nullable(&mut slot, None);
        assert_eq!(slot.as_deref(), Some("kept"));
    }

    #[test]
    fn null_field_clears_value() {
        let mut slot = Some("gone".to_string());
        merge_nullable(&mut slot, Some(None));
        assert_eq!(slot, None);
    }

    #[test]
    fn required_field_replaced_only_when_present() {
        let mut name = "New".to_string();
        merge_required(&mut name, None);
        assert_eq!(name, "New");
        merge_required(&mut name, Some("In Review".to_string()));
        assert_eq!(name, "In Review");
    }
}
