use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, Entity, SupplierId, require_text};

/// Supplier referenced by inventory items through [`SupplierId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    contact: String,
}

impl Supplier {
    pub fn from_draft(id: SupplierId, draft: SupplierDraft) -> Self {
        Self {
            id,
            name: draft.name,
            contact: draft.contact,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form contact text (usually an email address; not validated).
    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn to_draft(&self) -> SupplierDraft {
        SupplierDraft {
            name: self.name.clone(),
            contact: self.contact.clone(),
        }
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> SupplierId {
        self.id
    }

    fn id_from_raw(raw: u64) -> SupplierId {
        SupplierId::new(raw)
    }

    fn raw_id(id: SupplierId) -> u64 {
        id.get()
    }
}

/// Submitted supplier fields (add or edit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub name: String,
    pub contact: String,
}

impl SupplierDraft {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Required-field check for the input form. The store does not call this.
    pub fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)?;
        require_text("contact", &self.contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::DomainError;

    #[test]
    fn draft_validation_requires_name_and_contact() {
        assert!(SupplierDraft::new("Tech Supplier Inc.", "tech@example.com").validate().is_ok());

        let err = SupplierDraft::new("", "tech@example.com").validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("name")));

        let err = SupplierDraft::new("Furniture World", "  ").validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("contact")));
    }

    #[test]
    fn contact_is_not_checked_for_email_shape() {
        assert!(SupplierDraft::new("Acme", "call reception").validate().is_ok());
    }
}
