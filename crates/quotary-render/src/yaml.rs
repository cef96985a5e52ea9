//! YAML renderer.

use crate::RenderError;
use serde::Serialize;

/// Render any serializable value as block-style YAML.
///
/// The structure mirrors the JSON renderer: a sequence of mappings for
/// lists, a single mapping for one record.
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotary_core::Quotation;

    #[test]
    fn test_single_record_is_a_mapping() {
        let q = Quotation {
            id: 1,
            text: "a".to_string(),
            author: "A".to_string(),
        };

        let yaml = to_yaml(&q).unwrap();
        assert_eq!(yaml, "id: 1\ntext: a\nauthor: A\n");
    }

    #[test]
    fn test_sequence_is_a_list_of_mappings() {
        let records = vec![
            Quotation {
                id: 1,
                text: "a".to_string(),
                author: "A".to_string(),
            },
            Quotation {
                id: 2,
                text: "b".to_string(),
                author: "B".to_string(),
            },
        ];

        let yaml = to_yaml(&records).unwrap();
        assert!(yaml.starts_with("- id: 1\n"));
        assert!(yaml.contains("- id: 2\n"));
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let original = vec![Quotation {
            id: 5,
            text: "I have a dream.".to_string(),
            author: "Martin Luther King Jr.".to_string(),
        }];

        let yaml = to_yaml(&original).unwrap();
        let parsed: Vec<Quotation> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, original);
    }
}
