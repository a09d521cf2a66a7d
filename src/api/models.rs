// ABOUTME: Response payloads returned by the stack and service endpoints.
// ABOUTME: Only the fields needed for load balancer resolution are decoded.

use serde::{Deserialize, Deserializer};

/// Body of `GET /api/app/v1/stack/`.
#[derive(Debug, Clone, Deserialize)]
pub struct StackList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub objects: Vec<Stack>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stack {
    pub name: String,
    /// Resource paths of the stack's services, e.g. `/api/app/v1/service/<uuid>/`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub linked_to_service: Vec<LinkedService>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkedService {
    pub name: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_without_links_decodes_empty() {
        let service: Service = serde_json::from_str(r#"{"name":"lb1"}"#).unwrap();
        assert!(service.linked_to_service.is_empty());

        let service: Service =
            serde_json::from_str(r#"{"name":"lb1","linked_to_service":null}"#).unwrap();
        assert!(service.linked_to_service.is_empty());
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{
            "meta": {"limit": 25, "next": null},
            "objects": [
                {"name": "stk", "state": "Running", "services": ["/api/app/v1/service/1/"]}
            ]
        }"#;
        let list: StackList = serde_json::from_str(json).unwrap();
        assert_eq!(list.objects.len(), 1);
        assert_eq!(list.objects[0].services, vec!["/api/app/v1/service/1/"]);
    }
}
