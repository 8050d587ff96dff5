use chrono::{DateTime, FixedOffset};
use models::service::{self, Model};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Body of `POST /api/services`. Every field is optional on the wire so a
/// missing one surfaces as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateServiceInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub provider_id: Option<Uuid>,
}

/// Body of `PUT /api/services?id=..`; absent or null fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServiceInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl CreateServiceInput {
    pub fn into_model(self, now: DateTime<FixedOffset>) -> Result<Model, ServiceError> {
        let m = Model {
            service_id: Uuid::new_v4(),
            provider_id: self.provider_id.ok_or_else(|| ServiceError::required("provider_id"))?,
            name: self.name.ok_or_else(|| ServiceError::required("name"))?,
            description: self.description,
            price: self.price.ok_or_else(|| ServiceError::required("price"))?,
            created_at: now,
            updated_at: now,
        };
        service::validate(&m)?;
        Ok(m)
    }
}

impl UpdateServiceInput {
    pub fn apply(self, m: &mut Model, now: DateTime<FixedOffset>) -> Result<(), ServiceError> {
        if let Some(name) = self.name { m.name = name; }
        if let Some(description) = self.description { m.description = Some(description); }
        if let Some(price) = self.price { m.price = price; }
        m.updated_at = now;
        service::validate(m)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn input() -> CreateServiceInput {
        CreateServiceInput {
            name: Some("Haircut".into()),
            description: Some("Classic cut".into()),
            price: Some(25.0),
            provider_id: Some(Uuid::new_v4()),
        }
    }

    #[test]
    fn create_stamps_both_timestamps() {
        let now = crate::now();
        let m = input().into_model(now).unwrap();
        assert_eq!(m.created_at, now);
        assert_eq!(m.updated_at, now);
        assert_eq!(m.name, "Haircut");
    }

    #[test]
    fn create_requires_name_price_and_provider() {
        let mut i = input();
        i.name = None;
        assert!(matches!(i.into_model(crate::now()), Err(ServiceError::Validation(msg)) if msg.contains("name")));

        let mut i = input();
        i.price = None;
        assert!(i.into_model(crate::now()).is_err());

        let mut i = input();
        i.provider_id = None;
        assert!(i.into_model(crate::now()).is_err());
    }

    #[test]
    fn create_rejects_negative_price() {
        let mut i = input();
        i.price = Some(-5.0);
        assert!(matches!(i.into_model(crate::now()), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn update_only_overwrites_provided_fields() {
        let created = crate::now();
        let mut m = input().into_model(created).unwrap();
        let later = created + Duration::seconds(5);

        UpdateServiceInput { price: Some(40.0), ..Default::default() }.apply(&mut m, later).unwrap();

        assert_eq!(m.price, 40.0);
        assert_eq!(m.name, "Haircut");
        assert_eq!(m.description.as_deref(), Some("Classic cut"));
        assert_eq!(m.created_at, created);
        assert_eq!(m.updated_at, later);
    }

    #[test]
    fn null_fields_in_update_body_are_ignored() {
        let upd: UpdateServiceInput = serde_json::from_str(r#"{"name": null, "description": "New"}"#).unwrap();
        let mut m = input().into_model(crate::now()).unwrap();
        upd.apply(&mut m, crate::now()).unwrap();
        assert_eq!(m.name, "Haircut");
        assert_eq!(m.description.as_deref(), Some("New"));
    }
}
