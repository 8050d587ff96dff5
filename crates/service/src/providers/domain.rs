use chrono::{DateTime, FixedOffset};
use models::service_provider::Model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProviderInput {
    /// Owning user; defaults to the caller when omitted.
    pub user_id: Option<Uuid>,
    pub certification: Option<bool>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProviderInput {
    pub certification: Option<bool>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
}

impl CreateProviderInput {
    pub fn into_model(self, caller: Option<Uuid>, now: DateTime<FixedOffset>) -> Result<Model, ServiceError> {
        let user_id = self.user_id.or(caller).ok_or_else(|| ServiceError::required("user_id"))?;
        Ok(Model {
            provider_id: Uuid::new_v4(),
            user_id,
            certification: self.certification.unwrap_or(false),
            bio: self.bio,
            location: self.location,
            profile_picture: self.profile_picture,
            created_at: now,
            updated_at: now,
        })
    }
}

impl UpdateProviderInput {
    pub fn apply(self, m: &mut Model, now: DateTime<FixedOffset>) {
        if let Some(c) = self.certification { m.certification = c; }
        if let Some(bio) = self.bio { m.bio = Some(bio); }
        if let Some(loc) = self.location { m.location = Some(loc); }
        if let Some(pic) = self.profile_picture { m.profile_picture = Some(pic); }
        m.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_user_wins_over_caller() {
        let explicit = Uuid::new_v4();
        let caller = Uuid::new_v4();
        let m = CreateProviderInput { user_id: Some(explicit), ..Default::default() }
            .into_model(Some(caller), crate::now())
            .unwrap();
        assert_eq!(m.user_id, explicit);
        assert!(!m.certification);
    }

    #[test]
    fn caller_is_used_when_user_omitted() {
        let caller = Uuid::new_v4();
        let m = CreateProviderInput::default().into_model(Some(caller), crate::now()).unwrap();
        assert_eq!(m.user_id, caller);
    }

    #[test]
    fn no_user_at_all_is_a_validation_error() {
        let res = CreateProviderInput::default().into_model(None, crate::now());
        assert!(matches!(res, Err(ServiceError::Validation(_))));
    }
}
