use serde::{Deserialize, Serialize};

/// Contact and delivery details entered at checkout.
///
/// Every field deserializes to empty when absent so that a sparse submission reaches
/// validation instead of failing as malformed JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CustomerInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Names of the fields the order endpoint refuses to accept empty. Whitespace
    /// counts as a value.
    pub fn missing_contact_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Contact fields plus the delivery address, all of which the checkout form marks
    /// as required.
    pub fn missing_checkout_fields(&self) -> Vec<&'static str> {
        let mut missing = self.missing_contact_fields();
        missing.extend(
            [("address", &self.address), ("city", &self.city)]
                .into_iter()
                .filter(|(_, value)| value.is_empty())
                .map(|(name, _)| name),
        );
        missing
    }
}

/// How the customer intends to pay. Tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PaymentMethod {
    #[serde(rename = "efectivo")]
    Cash {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    #[serde(rename = "tarjeta")]
    Card {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    #[serde(rename = "transferencia")]
    BankTransfer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash { details: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_empty_fields_are_missing() {
        let customer = CustomerInfo {
            first_name: "Lucía".into(),
            last_name: "   ".into(),
            email: "lucia@example.com".into(),
            city: " ".into(),
            ..Default::default()
        };
        assert_eq!(customer.missing_contact_fields(), vec!["phone"]);
        assert_eq!(customer.missing_checkout_fields(), vec!["phone", "address"]);
    }

    #[test]
    fn test_sparse_customer_deserializes_empty() {
        let customer: CustomerInfo =
            serde_json::from_value(json!({ "firstName": "Ana", "postalCode": "3000" })).unwrap();
        assert_eq!(customer.first_name, "Ana");
        assert!(customer.email.is_empty());
        assert_eq!(customer.postal_code.as_deref(), Some("3000"));
    }

    #[test]
    fn test_payment_method_tags() {
        let card: PaymentMethod =
            serde_json::from_value(json!({ "type": "tarjeta", "details": "Visa" })).unwrap();
        assert_eq!(
            card,
            PaymentMethod::Card {
                details: Some("Visa".into())
            }
        );
        assert_eq!(
            serde_json::to_value(PaymentMethod::default()).unwrap(),
            json!({ "type": "efectivo" })
        );
        assert!(serde_json::from_value::<PaymentMethod>(json!({ "type": "cheque" })).is_err());
    }
}
