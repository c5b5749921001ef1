use crate::types::classifieds::ClassifiedsSearch;

const SEARCH: &str = r#"{
    "total": 64,
    "skip": 0,
    "page_size": 10,
    "buy": {
        "total": 24,
        "listings": [
            {
                "id": "440_76561198047873973_8668f833d9bca2eb24e2e5a4b4b0ae00",
                "steamid": 76561198047873973,
                "item": {
                    "id": 4624793918,
                    "original_id": 376442762,
                    "defindex": 378,
                    "level": 82,
                    "quality": 6,
                    "inventory": 2217908303,
                    "quantity": 1,
                    "origin": 2,
                    "attributes": [
                        {"defindex": 195, "value": "4294967295", "float_value": 0.2}
                    ],
                    "name": "The Team Captain"
                },
                "appid": 440,
                "currencies": {"metal": 17.66},
                "offers": 1,
                "buyout": 1,
                "details": "17.66 or unusual offers",
                "created": 1510232919,
                "bump": 1510232919,
                "intent": 0,
                "count": 2,
                "promoted": 1
            }
        ]
    },
    "sell": {
        "total": 40,
        "listings": []
    }
}"#;

#[test]
fn parses_a_search_page() {
    let search: ClassifiedsSearch = serde_json::from_str(SEARCH).unwrap();

    assert_eq!(search.total, 64);
    assert_eq!(search.skip, 0);
    assert_eq!(search.page_size, 10);

    let buy = search.buy.as_ref().unwrap();
    assert_eq!(buy.total, 24);
    assert_eq!(buy.listings.len(), 1);

    let sell = search.sell.as_ref().unwrap();
    assert_eq!(sell.total, 40);
    assert!(sell.listings.is_empty());
}

#[test]
fn parses_listing_fields() {
    let search: ClassifiedsSearch = serde_json::from_str(SEARCH).unwrap();
    let buy = search.buy.unwrap();
    let listing = &buy.listings[0];

    assert_eq!(listing.steamid, 76561198047873973);
    assert_eq!(listing.appid, 440);
    assert_eq!(listing.currencies["metal"], 17.66);
    assert_eq!(listing.details.as_deref(), Some("17.66 or unusual offers"));
    assert_eq!(listing.created.timestamp(), 1510232919);
    assert_eq!(listing.bump.timestamp(), 1510232919);
    assert_eq!(listing.intent, 0);
    assert_eq!(listing.count, Some(2));

    // 0/1 flags come out as booleans.
    assert!(listing.offers);
    assert!(listing.buyout);
    assert_eq!(listing.promoted, Some(true));

    let item = &listing.item;
    assert_eq!(item.defindex, Some(378));
    assert_eq!(item.level, Some(82));
    assert_eq!(item.name.as_deref(), Some("The Team Captain"));

    let attribute = &item.attributes[0];
    assert_eq!(attribute.defindex, 195);
    assert_eq!(attribute.value.as_ref().unwrap().as_str(), Some("4294967295"));
    assert_eq!(attribute.float_value, Some(0.2));
}

#[test]
fn bucket_wrapped_in_an_array_falls_back_to_its_first_element() {
    let search: ClassifiedsSearch = serde_json::from_str(
        r#"{"total": 3, "skip": 0, "page_size": 10, "buy": [{"total": 3, "listings": []}]}"#,
    )
    .unwrap();

    assert_eq!(search.buy.unwrap().total, 3);
    assert!(search.sell.is_none());
}

#[test]
fn junk_buckets_read_as_absent_without_failing_the_page() {
    let search: ClassifiedsSearch = serde_json::from_str(
        r#"{"total": 1, "skip": 0, "page_size": 10, "buy": "junk", "sell": null}"#,
    )
    .unwrap();

    assert!(search.buy.is_none());
    assert!(search.sell.is_none());
}

#[test]
fn numeric_attribute_values_are_kept_as_sent() {
    let search: ClassifiedsSearch = serde_json::from_str(
        r#"{
            "total": 1, "skip": 0, "page_size": 10,
            "sell": {
                "total": 1,
                "listings": [{
                    "id": "x",
                    "steamid": 76561198047873973,
                    "item": {"defindex": 378, "attributes": [{"defindex": 143, "value": 1510232919}]},
                    "appid": 440,
                    "currencies": {"keys": 2},
                    "offers": 0,
                    "buyout": 0,
                    "created": 1510232919,
                    "bump": 1510233000,
                    "intent": 1
                }]
            }
        }"#,
    )
    .unwrap();

    let sell = search.sell.unwrap();
    let listing = &sell.listings[0];
    assert!(!listing.offers);
    assert_eq!(listing.count, None);
    assert_eq!(listing.promoted, None);

    let attribute = &listing.item.attributes[0];
    assert_eq!(attribute.value.as_ref().unwrap().as_i64(), Some(1510232919));
    assert_eq!(attribute.float_value, None);
}
