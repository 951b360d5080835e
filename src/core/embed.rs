use crate::domain::model::CarouselItem;
use crate::utils::error::Result;

/// Encode the carousel as a JSON array literal for the page script.
pub fn embed_carousel(items: &[CarouselItem]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_carousel_is_empty_array() {
        assert_eq!(embed_carousel(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_carousel_round_trips() {
        let items = vec![
            CarouselItem {
                image_url: "https://img.test/a.jpg".to_string(),
                caption: "Solar install, \"Kenya\"".to_string(),
            },
            CarouselItem {
                image_url: "https://img.test/b.jpg".to_string(),
                caption: "4x5 darkroom".to_string(),
            },
        ];

        let literal = embed_carousel(&items).unwrap();
        assert!(literal.starts_with(r#"[{"image_url":"https://img.test/a.jpg","caption":"#));

        let decoded: Vec<CarouselItem> = serde_json::from_str(&literal).unwrap();
        assert_eq!(decoded, items);
    }
}
