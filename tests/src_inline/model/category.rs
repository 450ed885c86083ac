use super::*;

#[test]
fn test_category_keys_round_trip() {
    for &category in category_order() {
        assert_eq!(Category::from_key(category.key()), Some(category));
    }
    assert_eq!(Category::from_key("mobile"), None);
}

#[test]
fn test_component_sources() {
    assert_eq!(Component::Seo.source(), Some(Category::SeoMarketing));
    assert_eq!(Component::DomainAuthority.source(), Some(Category::Ranking));
    assert_eq!(Component::Mobile.source(), None);
}

#[test]
fn test_serde_names_match_keys() {
    let json = serde_json::to_string(&Category::SeoMarketing).unwrap();
    assert_eq!(json, "\"seo_marketing\"");
    let json = serde_json::to_string(&Component::DomainAuthority).unwrap();
    assert_eq!(json, "\"domain_authority\"");
}
