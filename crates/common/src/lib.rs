//! Shared building blocks for the marketplace crates: logging setup and
//! small wire types that more than one crate serializes.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_serializes_as_message_field() {
        let m = types::Message::new("Service deleted successfully");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Service deleted successfully"}));
    }
}
