use percent_encoding::percent_decode_str;

use super::*;
use crate::index::build_index;
use crate::offer::BrandOffer;

fn offer(name: &str, preview_url: &str, tracking_link: &str) -> BrandOffer {
    BrandOffer {
        name: name.to_owned(),
        preview_url: Some(preview_url.to_owned()),
        tracking_link: Some(tracking_link.to_owned()),
    }
}

fn sample_index() -> BrandIndex {
    build_index(&[
        offer("Nike", "https://www.nike.com/tw/", "https://aff.example/nike?x=1"),
        offer("momo", "https://www.momoshop.com.tw/", "https://aff.example/momo?x=2"),
    ])
}

/// Returns the decoded value of the trailing `t=` parameter.
fn decoded_target(tracking_url: &str) -> String {
    let (_, encoded) = tracking_url
        .rsplit_once("&t=")
        .expect("tracking URL should carry a t= parameter");
    percent_decode_str(encoded)
        .decode_utf8()
        .expect("t= value should decode as UTF-8")
        .into_owned()
}

// -----------------------------------------------------------------------
// convert
// -----------------------------------------------------------------------

#[test]
fn converts_known_brand_url() {
    let result = convert("https://www.nike.com/tw/shoe", &sample_index());
    assert_eq!(
        result.as_deref(),
        Ok("https://aff.example/nike?x=1&t=https%3A%2F%2Fwww.nike.com%2Ftw%2Fshoe")
    );
}

#[test]
fn empty_input_is_rejected_regardless_of_index() {
    assert_eq!(convert("", &sample_index()), Err(ConvertError::EmptyInput));
    assert_eq!(convert("   \t", &sample_index()), Err(ConvertError::EmptyInput));
    assert_eq!(convert("", &BrandIndex::empty()), Err(ConvertError::EmptyInput));
}

#[test]
fn unparseable_input_is_invalid_format() {
    assert_eq!(
        convert("not a url", &sample_index()),
        Err(ConvertError::InvalidUrlFormat)
    );
    assert_eq!(
        convert("www.nike.com/tw", &sample_index()),
        Err(ConvertError::InvalidUrlFormat)
    );
    assert_eq!(
        convert("http://www./x", &sample_index()),
        Err(ConvertError::InvalidUrlFormat)
    );
}

#[test]
fn unknown_domain_is_brand_not_found() {
    let result = convert("https://unknownshop.example", &sample_index());
    assert_eq!(
        result,
        Err(ConvertError::BrandNotFound {
            domain: "unknownshop.example".to_owned(),
            near_misses: vec![],
        })
    );
}

#[test]
fn empty_index_never_converts() {
    let result = convert("https://www.nike.com/tw/shoe", &BrandIndex::empty());
    assert!(matches!(result, Err(ConvertError::BrandNotFound { .. })));
}

#[test]
fn subdomain_is_not_resolved_to_parent_brand() {
    let result = convert("https://store.nike.com/tw", &sample_index());
    match result {
        Err(ConvertError::BrandNotFound {
            domain,
            near_misses,
        }) => {
            assert_eq!(domain, "store.nike.com");
            assert_eq!(near_misses, vec!["nike.com".to_owned()]);
        }
        other => panic!("expected BrandNotFound, got: {other:?}"),
    }
}

#[test]
fn lookalike_domain_does_not_match() {
    let result = convert("https://nikecompany.fake/shoe", &sample_index());
    assert!(matches!(result, Err(ConvertError::BrandNotFound { .. })));
}

#[test]
fn appends_separator_even_without_existing_query() {
    let index = build_index(&[offer("Bare", "https://bare.example", "https://aff.example/bare")]);
    let url = convert("https://bare.example/", &index).unwrap();
    assert_eq!(url, "https://aff.example/bare&t=https%3A%2F%2Fbare.example%2F");
}

#[test]
fn target_parameter_round_trips_to_original_input() {
    let index = sample_index();
    let inputs = [
        "https://www.nike.com/tw/shoe",
        "https://www.momoshop.com.tw/goods/GoodsDetail.jsp?i_code=123&str_category_code=456",
        "https://www.nike.com/tw/搜尋?q=air max#reviews",
        "https://www.nike.com/tw/t/air-force-1-'07-(white)~*!",
    ];
    for input in inputs {
        let url = convert(input, &index).unwrap();
        assert_eq!(decoded_target(&url), input, "round trip failed for {input}");
    }
}

// -----------------------------------------------------------------------
// encode_uri_component
// -----------------------------------------------------------------------

#[test]
fn encode_leaves_unreserved_marks_alone() {
    assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
}

#[test]
fn encode_escapes_reserved_characters() {
    assert_eq!(
        encode_uri_component("https://a.b/c?d=e&f=g h#i"),
        "https%3A%2F%2Fa.b%2Fc%3Fd%3De%26f%3Dg%20h%23i"
    );
}

#[test]
fn encode_escapes_non_ascii_as_utf8() {
    assert_eq!(encode_uri_component("鞋"), "%E9%9E%8B");
}

// -----------------------------------------------------------------------
// near_misses
// -----------------------------------------------------------------------

#[test]
fn near_misses_finds_containing_and_contained_domains() {
    let index = build_index(&[
        offer("Shop", "https://shop.example", "https://aff.example/1"),
        offer("EU Shop", "https://eu.shop.example", "https://aff.example/2"),
        offer("Other", "https://other.example", "https://aff.example/3"),
    ]);
    assert_eq!(
        near_misses("www2.shop.example", &index),
        vec!["shop.example".to_owned()]
    );
    assert_eq!(
        near_misses("shop.example", &index),
        vec!["eu.shop.example".to_owned(), "shop.example".to_owned()]
    );
}

#[test]
fn near_misses_empty_when_nothing_overlaps() {
    assert!(near_misses("unknownshop.example", &sample_index()).is_empty());
    assert!(near_misses("", &sample_index()).is_empty());
}
