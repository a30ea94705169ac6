//! Markdown rendering for assistant replies.
//!
//! TRUST BOUNDARY
//! ==============
//! Backend-returned text is untrusted and ends up injected via `inner_html`,
//! so rendering is a fixed two-stage pipeline: (1) Markdown to HTML with raw
//! HTML events dropped from the parser stream, soft breaks promoted to hard
//! breaks, and bare URLs autolinked; (2) an `ammonia` sanitization pass that
//! only lets a vetted tag/attribute profile through. Stage 2 always runs on
//! the output of stage 1, never the reverse.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use std::collections::{HashMap, HashSet};

use linkify::{LinkFinder, LinkKind};
use pulldown_cmark::{Event, LinkType, Options, Parser, Tag, TagEnd, html};

/// Render untrusted Markdown into sanitized HTML.
///
/// Deterministic: identical input yields byte-identical output.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let finder = url_finder();
    let mut events = Vec::new();
    // Text inside code blocks, links, and image alt text must stay literal.
    let mut literal_depth = 0usize;

    for event in Parser::new_ext(markdown, options) {
        match event {
            // Raw HTML input is disabled: drop it before rendering.
            Event::Html(_) | Event::InlineHtml(_) => {}
            // Single newlines become visible line breaks.
            Event::SoftBreak => events.push(Event::HardBreak),
            Event::Start(tag) => {
                if matches!(tag, Tag::CodeBlock(_) | Tag::Link { .. } | Tag::Image { .. }) {
                    literal_depth += 1;
                }
                events.push(Event::Start(tag));
            }
            Event::End(tag) => {
                if matches!(tag, TagEnd::CodeBlock | TagEnd::Link | TagEnd::Image) {
                    literal_depth = literal_depth.saturating_sub(1);
                }
                events.push(Event::End(tag));
            }
            Event::Text(text) if literal_depth == 0 => autolink_into(&text, &mut events, &finder),
            other => events.push(other),
        }
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    sanitize_html(&out)
}

fn url_finder() -> LinkFinder {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder
}

/// Split a text event around any bare URLs it contains, emitting link
/// events for each match.
fn autolink_into<'a>(text: &str, events: &mut Vec<Event<'a>>, finder: &LinkFinder) {
    let mut cursor = 0;
    for link in finder.links(text) {
        if link.start() > cursor {
            events.push(Event::Text(text[cursor..link.start()].to_owned().into()));
        }
        let url = link.as_str().to_owned();
        events.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: url.clone().into(),
            title: "".into(),
            id: "".into(),
        }));
        events.push(Event::Text(url.into()));
        events.push(Event::End(TagEnd::Link));
        cursor = link.end();
    }
    if cursor < text.len() {
        events.push(Event::Text(text[cursor..].to_owned().into()));
    }
}

/// Strip everything outside the vetted profile: the tags the renderer can
/// emit, `a[href]` on http/https/mailto, and task-list checkboxes.
fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "a", "blockquote", "br", "code", "del", "em", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "input", "li",
        "ol", "p", "pre", "strong", "table", "tbody", "td", "th", "thead", "tr", "ul",
    ]
    .into_iter()
    .collect();

    let tag_attributes: HashMap<&str, HashSet<&str>> = [
        ("a", ["href"].into_iter().collect()),
        ("input", ["type", "checked", "disabled"].into_iter().collect()),
        ("ol", ["start"].into_iter().collect()),
    ]
    .into_iter()
    .collect();

    ammonia::Builder::default()
        .tags(tags)
        .tag_attributes(tag_attributes)
        .generic_attributes(HashSet::new())
        .url_schemes(["http", "https", "mailto"].into_iter().collect())
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}
