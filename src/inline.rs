use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::block::Span;
use crate::latex;

/// Render one line of content into inline spans.
///
/// LaTeX notation is transliterated first, then bold, italic, inline code and
/// links are interpreted. Anything outside that inline grammar makes the whole
/// line fall back to a single unstyled text span.
pub fn render_inline(text: &str) -> Vec<Span> {
    let text = latex::transliterate(text);
    if text.trim().is_empty() {
        return Vec::new();
    }
    match parse_inline(&text) {
        Ok(spans) => spans,
        Err(Unsupported(what)) => {
            tracing::trace!(what, "inline markdown fallback to raw text");
            vec![Span::Text(text.into_owned())]
        }
    }
}

/// A construct outside the inline grammar.
#[derive(Debug)]
struct Unsupported(&'static str);

#[derive(Default)]
struct InlineState {
    // Current inline content being built
    spans: Vec<Span>,
    // Parent buffers for open bold/italic/link spans
    span_stack: Vec<Vec<Span>>,
    open: Vec<OpenKind>,
    link_urls: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OpenKind {
    Bold,
    Italic,
    Link,
}

fn parse_inline(text: &str) -> Result<Vec<Span>, Unsupported> {
    // The parser would drop whitespace around a paragraph, so parse the core
    // and put the surrounding whitespace back as literal text.
    let core = text.trim();
    let leading = &text[..text.len() - text.trim_start().len()];
    let trailing = &text[text.trim_end().len()..];

    let mut state = InlineState::default();
    for event in Parser::new_ext(core, Options::empty()) {
        process_event(event, &mut state)?;
    }
    if !state.span_stack.is_empty() {
        return Err(Unsupported("unbalanced emphasis"));
    }
    // Reference definitions such as `[1]: https://x.y` produce no events.
    if state.spans.is_empty() {
        return Err(Unsupported("reference definition"));
    }

    let mut spans = state.spans;
    if !leading.is_empty() {
        spans.insert(0, Span::Text(leading.to_string()));
    }
    if !trailing.is_empty() {
        spans.push(Span::Text(trailing.to_string()));
    }
    Ok(merge_text(spans))
}

fn process_event(event: Event, state: &mut InlineState) -> Result<(), Unsupported> {
    match event {
        Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph) => {}

        Event::Text(text) | Event::InlineHtml(text) => {
            state.spans.push(Span::Text(text.into_string()));
        }
        Event::Code(code) => {
            state.spans.push(Span::Code(code.into_string()));
        }

        Event::Start(Tag::Strong) => open(state, OpenKind::Bold),
        Event::End(TagEnd::Strong) => close(state, OpenKind::Bold, Span::Bold)?,

        Event::Start(Tag::Emphasis) => open(state, OpenKind::Italic),
        Event::End(TagEnd::Emphasis) => close(state, OpenKind::Italic, Span::Italic)?,

        Event::Start(Tag::Link { dest_url, .. }) => {
            state.link_urls.push(dest_url.into_string());
            open(state, OpenKind::Link);
        }
        Event::End(TagEnd::Link) => {
            let url = state.link_urls.pop().ok_or(Unsupported("unbalanced link"))?;
            close(state, OpenKind::Link, |content| Span::Link { url, content })?;
        }

        Event::Start(Tag::Heading { .. }) => return Err(Unsupported("heading")),
        Event::Start(Tag::List(_)) | Event::Start(Tag::Item) => return Err(Unsupported("list")),
        Event::Start(Tag::BlockQuote(_)) => return Err(Unsupported("block quote")),
        Event::Start(Tag::CodeBlock(_)) => return Err(Unsupported("code block")),
        Event::Start(Tag::Image { .. }) => return Err(Unsupported("image")),
        Event::Rule => return Err(Unsupported("rule")),
        Event::Html(_) | Event::Start(Tag::HtmlBlock) => return Err(Unsupported("html block")),
        Event::Start(_) => return Err(Unsupported("block element")),

        // Ends of rejected starts never arrive; anything else carries no text.
        _ => {}
    }
    Ok(())
}

fn open(state: &mut InlineState, kind: OpenKind) {
    state.open.push(kind);
    state.span_stack.push(std::mem::take(&mut state.spans));
}

fn close(
    state: &mut InlineState,
    kind: OpenKind,
    wrap: impl FnOnce(Vec<Span>) -> Span,
) -> Result<(), Unsupported> {
    if state.open.pop() != Some(kind) {
        return Err(Unsupported("mismatched emphasis"));
    }
    let inner = std::mem::take(&mut state.spans);
    let mut parent = state
        .span_stack
        .pop()
        .ok_or(Unsupported("mismatched emphasis"))?;
    parent.push(wrap(inner));
    state.spans = parent;
    Ok(())
}

/// Join adjacent plain text spans.
fn merge_text(spans: Vec<Span>) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        if let (Span::Text(next), Some(Span::Text(prev))) = (&span, merged.last_mut()) {
            prev.push_str(next);
            continue;
        }
        merged.push(span);
    }
    merged
}
