use serde::{Deserialize, Serialize};

/// One CT-e entry as the dashboard ships it.
///
/// Field names follow the frontend's JSON payload (`cteNumber`,
/// `deliveryUnit`, ...), so a batch deserializes straight out of the
/// dashboard without a mapping layer. Records are read-only input here:
/// supplied fresh on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CteRecord {
    /// CT-e document number.
    pub cte_number: String,
    /// Current status label (e.g. "Em Trânsito", "Entregue", "Atrasado").
    pub status: String,
    /// Declared freight value in BRL.
    pub value: f64,
    /// Delivery unit responsible for the shipment.
    pub delivery_unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_frontend_field_names() {
        let record: CteRecord = serde_json::from_str(
            r#"{"cteNumber":"35230","status":"Em Trânsito","value":2450.9,"deliveryUnit":"SP-Capital"}"#,
        )
        .unwrap();

        assert_eq!(record.cte_number, "35230");
        assert_eq!(record.status, "Em Trânsito");
        assert_eq!(record.value, 2450.9);
        assert_eq!(record.delivery_unit, "SP-Capital");
    }
}
