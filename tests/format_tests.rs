mod common;

use axmlfmt::{ErrorCategory, FormatError, Formatter};
use common::fixtures::*;
use common::{TestResult, assert_same_text};

fn format(doc: &str) -> Result<String, FormatError> {
    Formatter::default().format_str(doc)
}

#[test]
fn test_layout_is_formatted() -> TestResult {
    assert_same_text(&format(LAYOUT)?, LAYOUT_FORMATTED);
    Ok(())
}

#[test]
fn test_string_resources_are_formatted() -> TestResult {
    assert_same_text(&format(STRINGS)?, STRINGS_FORMATTED);
    Ok(())
}

#[test]
fn test_prefixes_are_normalized() -> TestResult {
    assert_same_text(&format(SELECTOR)?, SELECTOR_FORMATTED);
    Ok(())
}

#[test]
fn test_formatted_output_is_a_fixed_point() -> TestResult {
    for formatted in [LAYOUT_FORMATTED, STRINGS_FORMATTED, SELECTOR_FORMATTED] {
        assert_same_text(&format(formatted)?, formatted);
    }
    Ok(())
}

#[test]
fn test_comment_only_element_keeps_end_tag() -> TestResult {
    let doc = r#"<shape xmlns:android="http://schemas.android.com/apk/res/android" android:shape="rectangle"><!-- no children --></shape>"#;
    let expected = r#"<shape
    xmlns:android="http://schemas.android.com/apk/res/android"
    android:shape="rectangle">

    <!-- no children -->
</shape>
"#;
    assert_same_text(&format(doc)?, expected);
    Ok(())
}

#[test]
fn test_cdata_round_trips_as_escaped_text() -> TestResult {
    assert_eq!(format("<string><![CDATA[<i>]]></string>")?, "<string>&lt;i&gt;</string>\n");
    Ok(())
}

#[test]
fn test_whitespace_only_document_is_empty() -> TestResult {
    assert_eq!(format("")?, "");
    assert_eq!(format("\n\n   \t\n")?, "");
    Ok(())
}

#[test]
fn test_attribute_values_are_escaped() -> TestResult {
    let doc = r#"<string name="quote" format="&quot;a&amp;b&quot;">x</string>"#;
    assert_eq!(
        format(doc)?,
        "<string format=\"&quot;a&amp;b&quot;\" name=\"quote\">x</string>\n"
    );
    Ok(())
}

#[test]
fn test_multi_line_attribute_value_is_normalized() -> TestResult {
    let doc = "<TextView xmlns:android=\"http://schemas.android.com/apk/res/android\"\n    android:text=\"first line\n    second line\"/>";
    let out = format(doc)?;
    assert!(out.contains("android:text=\"first line     second line\" />"), "{}", out);
    assert_same_text(&format(&out)?, &out);
    Ok(())
}

#[test]
fn test_character_reference_line_break_is_kept() -> TestResult {
    let out = format(r#"<TextView text="first&#10;second"/>"#)?;
    assert_eq!(out, "<TextView text=\"first&#10;second\" />\n");
    Ok(())
}

#[test]
fn test_tab_indentation() -> TestResult {
    let out = Formatter::new("\t").format_str("<menu><item/><group><item/></group></menu>")?;
    assert_eq!(out, "<menu>\n\n\t<item />\n\n\t<group>\n\n\t\t<item />\n\t</group>\n</menu>\n");
    Ok(())
}

#[test]
fn test_malformed_input_is_rejected() {
    for doc in [
        "<LinearLayout>",
        "<LinearLayout></FrameLayout>",
        "<string>&nbsp;</string>",
        "<a b=\"1\" b=\"2\"/>",
        "<a>&#0;</a>",
        "<a>&#+65;</a>",
    ] {
        let err = format(doc).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Malformed, "{}: {}", doc, err);
    }
}

#[test]
fn test_unbound_prefix_is_kept() -> TestResult {
    assert_eq!(format(r#"<View android:id="@+id/a"/>"#)?, "<View android:id=\"@+id/a\" />\n");
    Ok(())
}

#[test]
fn test_text_outside_root_is_rejected() {
    let err = format("<resources/>\nleftover").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::SemanticViolation);
}

#[test]
fn test_failed_format_leaves_output_empty() {
    let mut out = Vec::new();
    let result = Formatter::default().format("<a><b></a>".as_bytes(), &mut out);
    assert!(result.is_err());
    assert!(out.is_empty());
}
