use super::*;

#[test]
fn escape_html_replaces_markup_characters() {
    assert_eq!(escape_html(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
}

#[test]
fn escape_html_leaves_plain_text_alone() {
    assert_eq!(escape_html("olá, tudo bem? 🚓"), "olá, tudo bem? 🚓");
}

#[test]
fn element_to_html_nests_children() {
    let node: Node = Node::div("msg")
        .child(Node::span("a").text("x"))
        .child(Node::span("b"))
        .into();
    assert_eq!(node.to_html(), r#"<div class="msg"><span class="a">x</span><span class="b"></span></div>"#);
}

#[test]
fn element_escapes_text_children() {
    let el = Node::span("msg-text").text("<script>alert(1)</script>");
    assert_eq!(el.to_html(), r#"<span class="msg-text">&lt;script&gt;alert(1)&lt;/script&gt;</span>"#);
}

#[test]
fn element_escapes_style_attribute() {
    let el = Node::span("msg-name").style(r#"color:red" onclick="x()"#);
    let html = el.to_html();
    assert!(html.contains(r#"style="color:red&quot; onclick=&quot;x()""#));
    assert!(!html.contains(r#"" onclick=""#));
}

#[test]
fn trusted_markup_is_emitted_verbatim() {
    let el = Node::span("msg-icon").child(Node::trusted("<svg></svg>"));
    assert_eq!(el.to_html(), r#"<span class="msg-icon"><svg></svg></span>"#);
}

#[test]
fn inner_html_omits_outer_element() {
    let el = Node::div("msg").child(Node::span("a").text("1")).child(Node::text("&"));
    assert_eq!(el.inner_html(), r#"<span class="a">1</span>&amp;"#);
}

#[test]
fn text_content_skips_trusted_markup() {
    let node: Node = Node::div("msg")
        .child(Node::trusted("<svg></svg>"))
        .child(Node::span("t").text("hi"))
        .child(Node::text(" there"))
        .into();
    assert_eq!(node.text_content(), "hi there");
}

#[test]
fn node_serializes_with_kind_tag() {
    let node: Node = Node::span("msg-text").text("hi").into();
    let json = serde_json::to_value(&node).expect("serialize");
    assert_eq!(json["kind"], "element");
    assert_eq!(json["tag"], "span");
    assert_eq!(json["children"][0]["kind"], "text");
    assert_eq!(json["children"][0]["text"], "hi");
    assert!(json.get("style").is_none());
}

#[test]
fn element_text_content_matches_node() {
    let el = Node::div("msg")
        .child(Node::trusted("<svg></svg>"))
        .child(Node::span("msg-text").text("a<b"))
        .child(Node::span("msg-time").text("12:04"));
    assert_eq!(el.text_content(), "a<b12:04");
    assert_eq!(Node::from(el.clone()).text_content(), el.text_content());
}
