use crate::types::special::SpecialItems;

const SPECIAL_ITEMS: &str = r##"{
    "success": 1,
    "current_time": 1610213794,
    "items": [
        {
            "name": "Random Craft Hat",
            "item_name": "Random Craft Hat",
            "defindex": -2,
            "item_class": "tf_wearable",
            "item_type_name": "#TF_T",
            "item_description": "Traded as a random craftable hat.",
            "item_quality": 6,
            "min_ilevel": 1,
            "max_ilevel": 1,
            "image_url": "https://backpack.tf/images/440/random-craft-hat.png",
            "image_url_large": "https://backpack.tf/images/440/random-craft-hat-large.png",
            "appid": 440
        },
        {
            "name": "Legacy Placeholder"
        }
    ]
}"##;

#[test]
fn parses_the_catalog() {
    let special: SpecialItems = serde_json::from_str(SPECIAL_ITEMS).unwrap();

    assert!(special.success);
    assert_eq!(special.current_time.unwrap().timestamp(), 1610213794);
    assert_eq!(special.items.len(), 2);

    let hat = &special.items[0];
    assert_eq!(hat.name, "Random Craft Hat");
    assert_eq!(hat.defindex, Some(-2));
    assert_eq!(hat.item_class.as_deref(), Some("tf_wearable"));
    assert_eq!(hat.item_quality, Some(6));
    assert_eq!(hat.appid, Some(440));
}

#[test]
fn bare_entries_leave_every_optional_field_unset() {
    let special: SpecialItems = serde_json::from_str(SPECIAL_ITEMS).unwrap();
    let placeholder = &special.items[1];

    assert_eq!(placeholder.name, "Legacy Placeholder");
    assert_eq!(placeholder.defindex, None);
    assert_eq!(placeholder.item_quality, None);
    assert_eq!(placeholder.image_url, None);
}
