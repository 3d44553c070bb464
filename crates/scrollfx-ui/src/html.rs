use std::fmt::Write;

use crate::{View, ViewKind};

/// Renders a view tree as HTML markup.
pub fn render_html(view: &View) -> String {
    let mut out = String::new();
    write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &View) {
    let tag = match &view.kind {
        ViewKind::Text { text } => {
            escape_into(out, text);
            return;
        }
        ViewKind::LineBreak => {
            out.push_str("<br>");
            return;
        }
        ViewKind::Section => "section",
        ViewKind::Box => "div",
        ViewKind::Heading { level } => match level {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        },
        ViewKind::Paragraph => "p",
        ViewKind::Span => "span",
        ViewKind::Button { .. } => "button",
    };

    out.push('<');
    out.push_str(tag);

    let mut classes = view.modifier.class_attr();
    if let ViewKind::Button { variant, size, .. } = &view.kind {
        let base = format!("btn btn-{} btn-{}", variant.as_str(), size.as_str());
        classes = if classes.is_empty() {
            base
        } else {
            format!("{base} {classes}")
        };
    }
    if !classes.is_empty() {
        out.push_str(" class=\"");
        escape_into(out, &classes);
        out.push('"');
    }
    let style = view.modifier.style.to_css();
    if !style.is_empty() {
        out.push_str(" style=\"");
        escape_into(out, &style);
        out.push('"');
    }
    if let Some(key) = view.modifier.key {
        let _ = write!(out, " data-key=\"{key}\"");
    }
    out.push('>');

    if let ViewKind::Button { text, .. } = &view.kind {
        escape_into(out, text);
    }
    for child in &view.children {
        write_view(out, child);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}
