use serde::{Deserialize, Serialize};

/// Availability push event (camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityChanged {
    #[serde(alias = "menu_item_id")]
    pub menu_item_id: String,
    pub available: bool,
}

impl AvailabilityChanged {
    pub fn new(menu_item_id: impl Into<String>, available: bool) -> Self {
        Self {
            menu_item_id: menu_item_id.into(),
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let event: AvailabilityChanged =
            serde_json::from_str(r#"{"menuItemId":"rice","available":false}"#).unwrap();
        assert_eq!(event, AvailabilityChanged::new("rice", false));

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["menuItemId"], "rice");
    }
}
