//! XML conversion integration tests: documents flowing into nested values
//! and onward through dot-path access.

use dotnest::{value::Value, xml};

#[test]
fn converted_document_supports_dot_path_access() {
    let value = xml::from_str(
        r#"<order id="17">
             <customer>
               <name>Ada</name>
               <city>London</city>
             </customer>
             <item>Desk</item>
             <item>Chair</item>
           </order>"#,
    );

    assert_eq!(value.at("@attributes.id").unwrap(), "17");
    assert_eq!(value.at("customer.name").unwrap(), "Ada");
    assert_eq!(value.at("item.0").unwrap(), "Desk");
    assert_eq!(value.at("item.1").unwrap(), "Chair");
}

#[test]
fn attributed_scalar_wraps_as_content() {
    let value = xml::from_str(
        r#"<root><PackageDimensions><Weight Units="hundredths-pounds">57</Weight></PackageDimensions></root>"#,
    );
    assert_eq!(
        value.to_json_string(),
        r#"{"PackageDimensions":{"Weight":{"@content":"57","@attributes":{"Units":"hundredths-pounds"}}}}"#
    );
}

#[test]
fn malformed_documents_convert_to_empty_results() {
    assert_eq!(xml::from_str("<a><b></a>"), Value::Map(dotnest::Map::new()));
    assert_eq!(xml::from_str("plain text"), Value::Map(dotnest::Map::new()));
    assert!(xml::collect("<a><b></a>", "b", None).is_empty());
}

#[test]
fn collect_walks_the_whole_document() {
    let xml = r#"<feed>
                   <entry><title>first</title></entry>
                   <group>
                     <entry><title>second</title></entry>
                   </group>
                   <entry><title>third</title></entry>
                 </feed>"#;

    let entries = xml::collect(xml, "entry", None);
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].at("title").unwrap(), "second");

    let capped = xml::collect(xml, "entry", Some(1));
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].at("title").unwrap(), "first");
}

#[test]
fn namespaced_tags_group_under_local_names() {
    let value = xml::from_str(
        "<rss><media:content>a</media:content><media:content>b</media:content></rss>",
    );
    assert_eq!(
        value.at("content"),
        Some(&Value::List(vec!["a".into(), "b".into()]))
    );
}

#[test]
fn text_only_root_becomes_scalar() {
    assert_eq!(xml::from_str("<note>0</note>"), Value::Text("0".into()));
    assert_eq!(
        xml::from_str("<note>  padded  </note>"),
        Value::Text("padded".into())
    );
}
