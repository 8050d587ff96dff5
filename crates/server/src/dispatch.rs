//! Verb × id-presence dispatch shared by every resource route.

use axum::http::Method;
use uuid::Uuid;

use crate::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn from_method(method: &Method) -> Option<Self> {
        match *method {
            Method::GET => Some(Verb::Get),
            Method::POST => Some(Verb::Post),
            Method::PUT => Some(Verb::Put),
            Method::DELETE => Some(Verb::Delete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Get,
    Update,
    Delete,
    List,
    Create,
}

const ITEM: &[(Verb, Action)] = &[(Verb::Get, Action::Get), (Verb::Put, Action::Update), (Verb::Delete, Action::Delete)];
const COLLECTION: &[(Verb, Action)] = &[(Verb::Get, Action::List), (Verb::Post, Action::Create)];

pub const ITEM_ALLOW: &str = "GET, PUT, DELETE";
pub const COLLECTION_ALLOW: &str = "GET, POST";

/// Pick the action for `method`; 405 carries the verbs the table does accept.
pub fn route(method: &Method, has_id: bool) -> Result<Action, ApiError> {
    let (table, allow) = if has_id { (ITEM, ITEM_ALLOW) } else { (COLLECTION, COLLECTION_ALLOW) };
    Verb::from_method(method)
        .and_then(|verb| table.iter().find(|(v, _)| *v == verb).map(|(_, action)| *action))
        .ok_or_else(|| ApiError::MethodNotAllowed { method: method.to_string(), allow })
}

/// The `id` query parameter, ignoring an empty value.
pub fn id_param(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}

/// Resolve the record id; a value that is not a UUID cannot name a record.
pub fn target(raw: Option<&str>, not_found: impl FnOnce() -> ApiError) -> Result<Uuid, ApiError> {
    raw.and_then(|s| Uuid::parse_str(s.trim()).ok()).ok_or_else(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_table() {
        assert_eq!(route(&Method::GET, true).unwrap(), Action::Get);
        assert_eq!(route(&Method::PUT, true).unwrap(), Action::Update);
        assert_eq!(route(&Method::DELETE, true).unwrap(), Action::Delete);
    }

    #[test]
    fn collection_table() {
        assert_eq!(route(&Method::GET, false).unwrap(), Action::List);
        assert_eq!(route(&Method::POST, false).unwrap(), Action::Create);
    }

    #[test]
    fn everything_else_is_405_with_allow() {
        for (method, has_id, allow) in [
            (Method::POST, true, ITEM_ALLOW),
            (Method::PATCH, true, ITEM_ALLOW),
            (Method::PUT, false, COLLECTION_ALLOW),
            (Method::DELETE, false, COLLECTION_ALLOW),
            (Method::HEAD, false, COLLECTION_ALLOW),
        ] {
            match route(&method, has_id) {
                Err(ApiError::MethodNotAllowed { method: m, allow: a }) => {
                    assert_eq!(m, method.as_str());
                    assert_eq!(a, allow);
                }
                other => panic!("{method} (id: {has_id}) dispatched to {other:?}"),
            }
        }
    }

    #[test]
    fn empty_id_counts_as_absent() {
        assert_eq!(id_param(Some("")), None);
        assert_eq!(id_param(Some("  ")), None);
        assert_eq!(id_param(Some("abc")), Some("abc"));
    }

    #[test]
    fn non_uuid_target_is_not_found() {
        let err = target(Some("42"), || ApiError::NotFound("Service not found".into())).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        let id = Uuid::new_v4();
        assert_eq!(target(Some(id.to_string().as_str()), || unreachable!()).unwrap(), id);
    }
}
