// ABOUTME: Integration tests for chained traversal over parsed documents.
// ABOUTME: Covers selection counts, index bounds, sibling skipping, map ordering, and end-to-end extraction.

use domquery::{CssEngine, Document, DomQuery, LoadOptions, Node, QueryEngine, Result};
use pretty_assertions::assert_eq;
use scraper::Selector;

const ALBUM_HTML: &str = r#"
    <!DOCTYPE html>
    <html>
    <head><title>Album</title></head>
    <body>
        <div class="info">
            <a href="/artist/1">Artist</a>
            <h1>Title</h1>
        </div>
        <ul class="tracklist">
            <li id="t1"><span class="name">Intro</span> <a href="/dl/1.mp3">get</a></li>
            <li id="t2"><span class="name">Song</span> <a href="/dl/2.mp3">get</a></li>
            <li id="t3"><span class="name">Outro</span> <a href="/dl/3.mp3">get</a></li>
        </ul>
    </body>
    </html>
"#;

fn keep_blanks(markup: &str) -> Document {
    let opts = LoadOptions::builder().strip_blank_text(false).build();
    Document::parse_with(markup, &opts).unwrap()
}

#[test]
fn end_to_end_info_block() {
    let doc = Document::parse(r#"<div class="info"><a>Artist</a><h1>Title</h1></div>"#).unwrap();
    let info = DomQuery::load(&doc).find_by_class("info");

    assert_eq!(info.find_by_tag("a").text().as_deref(), Some("Artist"));
    assert_eq!(info.find_by_tag("h1").text().as_deref(), Some("Title"));
}

#[test]
fn find_count_matches_scraper_select() {
    let doc = Document::parse(ALBUM_HTML).unwrap();
    let root = doc.root_element().and_then(|n| n.as_element()).unwrap();
    let q = DomQuery::load(&doc);

    for css in ["li", "a", "span.name", "ul > li > a", "h1", "table", "[href]", ":scope > body"] {
        let selector = Selector::parse(css).unwrap();
        assert_eq!(q.find(css).len(), root.select(&selector).count(), "selector {css}");
    }

    for css in ["li", "a", "title", "[id]"] {
        let selector = Selector::parse(css).unwrap();
        assert_eq!(
            q.parent().find(css).len(),
            doc.as_html().select(&selector).count(),
            "selector {css}"
        );
    }
}

#[test]
fn scoped_find_binds_scope_to_current_element() {
    let doc = Document::parse(r#"<div id="d"><b>1</b><p><b>2</b></p></div>"#).unwrap();
    let d = DomQuery::load(&doc).find_by_id("d");

    let direct = d.find(":scope > b");
    assert_eq!(direct.len(), 1);
    assert_eq!(direct.text().as_deref(), Some("1"));
    assert_eq!(d.find("b").len(), 2);
}

#[test]
fn text_keeps_spaces_between_inline_elements() {
    let doc = Document::parse(ALBUM_HTML).unwrap();
    let q = DomQuery::load(&doc);

    assert_eq!(q.find_by_id("t1").text().as_deref(), Some("Intro get"));
    let p = Document::parse("<p><b>Hello</b> <i>world</i></p>").unwrap();
    assert_eq!(DomQuery::load(&p).find_by_tag("p").text().as_deref(), Some("Hello world"));
    // Navigation still lands on elements.
    assert_eq!(q.find_by_id("t1").first().next().tag_name(), Some("a"));
}

#[test]
fn eq_out_of_range_is_empty() {
    let doc = Document::parse(ALBUM_HTML).unwrap();
    let items = DomQuery::load(&doc).find_by_tag("li");
    assert_eq!(items.len(), 3);

    assert_eq!(items.eq(2).attr("id"), Some("t3"));
    assert_eq!(items.eq(3).len(), 0);
    assert_eq!(items.eq(100).len(), 0);
    assert_eq!(items.eq(-1).len(), 0);
    assert_eq!(items.eq(3).find_by_tag("a").attr("href"), None);
}

#[test]
fn first_and_last_skip_whitespace_text() {
    let doc = keep_blanks("<div id=\"p\"> <a>x</a> </div>");
    let parent = DomQuery::load(&doc).find_by_id("p");

    assert_eq!(parent.first().tag_name(), Some("a"));
    assert_eq!(parent.last().tag_name(), Some("a"));
}

#[test]
fn next_and_prev_walk_past_text_runs() {
    let doc = keep_blanks("<div><a>A</a>one<!-- two -->three<b>B</b></div>");
    let a = DomQuery::load(&doc).find_by_tag("a");

    assert_eq!(a.next().tag_name(), Some("b"));
    assert_eq!(a.next().text().as_deref(), Some("B"));
    assert_eq!(a.next().prev().text().as_deref(), Some("A"));
}

#[test]
fn map_preserves_document_order() {
    let doc = Document::parse(ALBUM_HTML).unwrap();
    let q = DomQuery::load(&doc);

    let names = q
        .find_by_class("tracklist")
        .find_by_tag("li")
        .map(|li| li.find_by_class("name").text().unwrap_or_default());
    assert_eq!(names, vec!["Intro", "Song", "Outro"]);

    let nothing: Vec<String> = q.find_by_tag("table").map(|t| t.html().unwrap_or_default());
    assert!(nothing.is_empty());
}

#[test]
fn find_by_id_round_trips_attribute() {
    let doc = Document::parse(ALBUM_HTML).unwrap();
    let q = DomQuery::load(&doc);

    for id in ["t1", "t2", "t3"] {
        assert_eq!(q.find_by_id(id).attr("id"), Some(id));
    }
    // Unscoped: searching from a sibling subtree still finds the element.
    let info = q.find_by_class("info");
    assert_eq!(info.find_by_id("t2").find_by_class("name").text().as_deref(), Some("Song"));
    assert!(q.find_by_id("missing").is_empty());
}

#[test]
fn scraping_chain_extracts_records() {
    let doc = Document::parse(ALBUM_HTML).unwrap();
    let q = DomQuery::load(&doc);
    let info = q.find_by_class("info");

    let artist = info.find_by_tag("a").text().unwrap_or_default();
    let title = info.find_by_tag("h1").text().unwrap_or_default();
    let tracks = q.find_by_tag("li").map(|li| {
        (
            li.find_by_class("name").text().unwrap_or_default(),
            li.find_by_tag("a").attr("href").map(str::to_string),
        )
    });

    assert_eq!(artist, "Artist");
    assert_eq!(title, "Title");
    assert_eq!(
        tracks,
        vec![
            ("Intro".to_string(), Some("/dl/1.mp3".to_string())),
            ("Song".to_string(), Some("/dl/2.mp3".to_string())),
            ("Outro".to_string(), Some("/dl/3.mp3".to_string())),
        ]
    );
}

#[test]
fn long_chain_on_missing_step_stays_empty() {
    let doc = Document::parse(ALBUM_HTML).unwrap();
    let missing = DomQuery::load(&doc)
        .find_by_class("sidebar")
        .first()
        .next()
        .parent()
        .find_by_tag("a")
        .eq(0);

    assert!(missing.is_empty());
    assert_eq!(missing.text(), None);
    assert_eq!(missing.html(), None);
    assert_eq!(missing.tag_name(), None);
    assert!(!missing.has_attr("href"));
}

#[test]
fn html_serializes_element_and_document() {
    let doc = Document::parse(ALBUM_HTML).unwrap();
    let q = DomQuery::load(&doc);

    assert_eq!(q.find_by_tag("h1").html().as_deref(), Some("<h1>Title</h1>"));
    let whole = q.parent().html().unwrap();
    assert!(whole.starts_with("<!DOCTYPE html>"));
    assert!(whole.contains("<title>Album</title>"));
}

/// Engine that only understands bare tag names, to exercise the engine seam.
#[derive(Debug)]
struct TagOnlyEngine;

impl QueryEngine for TagOnlyEngine {
    fn query<'a>(&self, expr: &str, scope: Node<'a>) -> Result<Vec<Node<'a>>> {
        Ok(scope
            .node_ref()
            .descendants()
            .skip(1)
            .map(Node::new)
            .filter(|n| n.tag_name() == Some(expr))
            .collect())
    }

    fn class_contains(&self, _class: &str) -> String {
        String::new()
    }

    fn id_equals(&self, _id: &str) -> String {
        String::new()
    }

    fn descendant_tag(&self, tag: &str) -> String {
        tag.to_string()
    }
}

#[test]
fn custom_engine_answers_find() {
    let doc = Document::parse(ALBUM_HTML).unwrap();
    let engine = TagOnlyEngine;
    let q = DomQuery::load_with(&doc, &engine);

    assert_eq!(q.find_by_tag("li").len(), 3);
    assert!(q.find_by_class("info").is_empty());
    // Derived wrappers keep the engine.
    assert_eq!(q.find_by_tag("ul").find("span").len(), 3);

    let css = CssEngine;
    assert_eq!(DomQuery::load_with(&doc, &css).find("span.name").len(), 3);
}

#[test]
fn load_rejects_empty_markup() {
    assert!(Document::parse("").unwrap_err().is_parse());
}
