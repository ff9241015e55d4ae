//! Markdown subset for assistant replies.
//!
//! A line-oriented pass, not a grammar: headings, bullet and numbered
//! list runs, blank-line breaks, and paragraphs, with `**bold**` /
//! `__bold__` spans inside each line. No nesting, no links, no code
//! spans, no escaping — everything else passes through literally.

use std::sync::OnceLock;

use regex::Regex;

/// An inline run of text within one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
}

/// One block-level node of a rendered reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    List { ordered: bool, items: Vec<Vec<Span>> },
    Break,
}

fn bold_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").unwrap())
}

fn numbered_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap())
}

/// Parse a reply into block nodes.
pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut run: Vec<Vec<Span>> = Vec::new();
    let mut run_ordered = false;

    let flush = |blocks: &mut Vec<Block>, run: &mut Vec<Vec<Span>>, ordered: bool| {
        if !run.is_empty() {
            blocks.push(Block::List {
                ordered,
                items: std::mem::take(run),
            });
        }
    };

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush(&mut blocks, &mut run, run_ordered);
            blocks.push(Block::Break);
            continue;
        }

        if let Some(rest) = heading(trimmed, "###") {
            flush(&mut blocks, &mut run, run_ordered);
            blocks.push(Block::Heading {
                level: 3,
                spans: inline(rest),
            });
            continue;
        }
        if let Some(rest) = heading(trimmed, "##") {
            flush(&mut blocks, &mut run, run_ordered);
            blocks.push(Block::Heading {
                level: 2,
                spans: inline(rest),
            });
            continue;
        }
        if let Some(rest) = heading(trimmed, "#") {
            flush(&mut blocks, &mut run, run_ordered);
            blocks.push(Block::Heading {
                level: 1,
                spans: inline(rest),
            });
            continue;
        }

        if let Some(captures) = numbered_pattern().captures(trimmed) {
            if !run_ordered {
                flush(&mut blocks, &mut run, run_ordered);
                run_ordered = true;
            }
            run.push(inline(&captures[1]));
            continue;
        }

        if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            if run_ordered {
                flush(&mut blocks, &mut run, run_ordered);
                run_ordered = false;
            }
            run.push(inline(item));
            continue;
        }

        flush(&mut blocks, &mut run, run_ordered);
        blocks.push(Block::Paragraph(inline(trimmed)));
    }

    flush(&mut blocks, &mut run, run_ordered);
    blocks
}

fn heading<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker).map(str::trim_start)
}

/// Split one line into text and bold spans. Empty text runs between
/// adjacent bold spans are dropped.
pub fn inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for captures in bold_pattern().captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        if whole.start() > cursor {
            spans.push(Span::Text(text[cursor..whole.start()].to_string()));
        }
        let content = captures
            .get(1)
            .or_else(|| captures.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        spans.push(Span::Bold(content.to_string()));
        cursor = whole.end();
    }

    if cursor < text.len() {
        spans.push(Span::Text(text[cursor..].to_string()));
    }
    spans
}

/// Flatten blocks to plain terminal text, for one-shot CLI output.
pub fn flatten(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading { spans, .. } => {
                out.push_str(&flatten_spans(spans));
                out.push('\n');
            }
            Block::Paragraph(spans) => {
                out.push_str(&flatten_spans(spans));
                out.push('\n');
            }
            Block::List { ordered, items } => {
                for (i, item) in items.iter().enumerate() {
                    if *ordered {
                        out.push_str(&format!("{}. ", i + 1));
                    } else {
                        out.push_str("- ");
                    }
                    out.push_str(&flatten_spans(item));
                    out.push('\n');
                }
            }
            Block::Break => out.push('\n'),
        }
    }
    out
}

fn flatten_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(t) | Span::Bold(t) => t.as_str(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    fn bold(s: &str) -> Span {
        Span::Bold(s.to_string())
    }

    #[test]
    fn bullet_run_becomes_one_list() {
        let blocks = parse("- a\n- b");
        assert_eq!(
            blocks,
            vec![Block::List {
                ordered: false,
                items: vec![vec![text("a")], vec![text("b")]],
            }]
        );
    }

    #[test]
    fn bare_bold_has_no_surrounding_text_spans() {
        assert_eq!(inline("**x**"), vec![bold("x")]);
    }

    #[test]
    fn both_bold_markers_are_recognised() {
        assert_eq!(
            inline("a **b** and __c__."),
            vec![text("a "), bold("b"), text(" and "), bold("c"), text(".")]
        );
    }

    #[test]
    fn plain_text_is_a_single_span() {
        assert_eq!(inline("no emphasis here"), vec![text("no emphasis here")]);
    }

    #[test]
    fn heading_levels() {
        let blocks = parse("# one\n## two\n### three");
        let levels: Vec<u8> = blocks
            .iter()
            .map(|b| match b {
                Block::Heading { level, .. } => *level,
                _ => panic!("expected heading"),
            })
            .collect();
        assert_eq!(levels, vec![1, 2, 3]);
    }

    #[test]
    fn numbered_run_is_ordered() {
        let blocks = parse("1. first\n2. second");
        assert_eq!(
            blocks,
            vec![Block::List {
                ordered: true,
                items: vec![vec![text("first")], vec![text("second")]],
            }]
        );
    }

    #[test]
    fn switching_list_kind_splits_the_run() {
        let blocks = parse("- a\n1. b");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], Block::List { ordered: false, .. }));
        assert!(matches!(&blocks[1], Block::List { ordered: true, .. }));
    }

    #[test]
    fn blank_line_flushes_and_breaks() {
        let blocks = parse("- a\n\ntail");
        assert_eq!(
            blocks,
            vec![
                Block::List {
                    ordered: false,
                    items: vec![vec![text("a")]],
                },
                Block::Break,
                Block::Paragraph(vec![text("tail")]),
            ]
        );
    }

    #[test]
    fn asterisk_bullets_are_bullets_too() {
        let blocks = parse("* item");
        assert!(matches!(&blocks[0], Block::List { ordered: false, .. }));
    }

    #[test]
    fn flatten_numbers_ordered_items() {
        let out = flatten(&parse("1. a\n2. b"));
        assert_eq!(out, "1. a\n2. b\n");
    }

    #[test]
    fn flatten_drops_bold_markers() {
        let out = flatten(&parse("**x** marks"));
        assert_eq!(out, "x marks\n");
    }
}
