use serde::Deserialize;

use crate::domain::customer::{CustomerUpdate, NewCustomer};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Deserialize)]
/// JSON body accepted when creating a customer. Every key is required.
///
/// Field constraints are enforced by the domain value objects on conversion.
pub struct CreateCustomerForm {
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Mailing address.
    pub address: String,
}

#[derive(Debug, Default, Deserialize)]
/// JSON body accepted when updating a customer.
///
/// Any key may be missing, `null` or empty; such fields are left unchanged.
pub struct UpdateCustomerForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl TryFrom<CreateCustomerForm> for NewCustomer {
    type Error = TypeConstraintError;

    fn try_from(form: CreateCustomerForm) -> Result<Self, Self::Error> {
        NewCustomer::try_new(form.name, form.email, form.phone, form.address)
    }
}

impl TryFrom<UpdateCustomerForm> for CustomerUpdate {
    type Error = TypeConstraintError;

    fn try_from(form: UpdateCustomerForm) -> Result<Self, Self::Error> {
        CustomerUpdate::try_new(form.name, form.email, form.phone, form.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_form(name: &str, email: &str) -> CreateCustomerForm {
        CreateCustomerForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: "555".to_string(),
            address: "1 Main St".to_string(),
        }
    }

    #[test]
    fn valid_create_form_converts_to_new_customer() {
        let new_customer = NewCustomer::try_from(create_form("Ann", "a@x.com")).unwrap();
        assert_eq!(new_customer.name.as_str(), "Ann");
        assert_eq!(new_customer.email.as_str(), "a@x.com");
        assert_eq!(new_customer.phone, "555");
        assert_eq!(new_customer.address, "1 Main St");
    }

    #[test]
    fn create_form_normalizes_padded_email() {
        let new_customer = NewCustomer::try_from(create_form("Ann", " A@x.com ")).unwrap();
        assert_eq!(new_customer.email.as_str(), "a@x.com");
    }

    #[test]
    fn create_form_with_bad_email_is_rejected() {
        let result = NewCustomer::try_from(create_form("Ann", "not-an-email"));
        assert_eq!(result, Err(TypeConstraintError::InvalidEmail));
    }

    #[test]
    fn create_form_with_blank_name_is_rejected() {
        let result = NewCustomer::try_from(create_form("   ", "a@x.com"));
        assert_eq!(result, Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn create_form_requires_every_key() {
        let result = serde_json::from_str::<CreateCustomerForm>(
            r#"{"name":"Ann","email":"a@x.com","phone":"555"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_form_accepts_missing_and_null_keys() {
        let form: UpdateCustomerForm =
            serde_json::from_str(r#"{"email":"b@x.com","phone":null}"#).unwrap();
        let updates = CustomerUpdate::try_from(form).unwrap();
        assert_eq!(updates.email.map(|e| e.into_inner()), Some("b@x.com".to_string()));
        assert!(updates.name.is_none());
        assert!(updates.phone.is_none());
        assert!(updates.address.is_none());
    }

    #[test]
    fn update_form_with_bad_email_is_rejected() {
        let form = UpdateCustomerForm {
            email: Some("nope".to_string()),
            ..UpdateCustomerForm::default()
        };
        assert_eq!(
            CustomerUpdate::try_from(form),
            Err(TypeConstraintError::InvalidEmail)
        );
    }
}
