//! The assistant panel: transcript, input line, and pending indicator.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::chat::ChatLog;
use crate::chat::client::{self, ChatRequest, Provider};
use crate::markdown::{self, Block as MdBlock, Span as MdSpan};
use crate::model::Sender;

/// The floating chat window. The transcript persists while the panel is
/// closed; only visibility is toggled by the app.
pub struct ChatPanel {
    log: ChatLog,
    input: String,
    scroll: u16,
}

impl ChatPanel {
    pub fn new(provider: Provider) -> Self {
        Self {
            log: ChatLog::new(provider),
            input: String::new(),
            scroll: 0,
        }
    }

    pub fn on_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the input line. Returns the request to issue, or `None`
    /// when the send was gated off (blank input or one already pending).
    pub fn on_enter(&mut self) -> Option<ChatRequest> {
        let request = self.log.begin_send(&self.input)?;
        self.input.clear();
        self.scroll = 0;
        Some(request)
    }

    pub fn resolve(&mut self, outcome: client::Result<String>) {
        self.log.resolve(outcome);
        self.scroll = 0;
    }

    pub fn is_pending(&self) -> bool {
        self.log.is_pending()
    }

    pub fn on_scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn on_scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let width = area.width.min(48);
        let panel = Layout::horizontal([Constraint::Min(0), Constraint::Length(width)])
            .split(area)[1];
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::new(1, 1, 1, 0))
            .title(" Ghost ")
            .title_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let chunks = Layout::vertical([
            Constraint::Min(0),    // transcript
            Constraint::Length(1), // input
            Constraint::Length(1), // help
        ])
        .split(inner);

        let muted = Style::default().fg(Color::DarkGray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut lines = transcript_lines(&self.log);
        if self.log.is_pending() {
            lines.push(Line::from(Span::styled("Ghost is thinking…", muted)));
        }

        // Bottom-anchored: the newest turn stays visible, ↑ scrolls back.
        let height = chunks[0].height;
        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let anchored = total.saturating_sub(height);
        // Clamp here, where the viewport height is known, so presses past
        // the top don't pile up and eat the next scrolls back down.
        self.scroll = self.scroll.min(anchored);
        let offset = anchored - self.scroll;

        let transcript = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0));
        frame.render_widget(transcript, chunks[0]);

        let prompt = Paragraph::new(Line::from(vec![
            Span::styled("› ", highlight),
            Span::styled(&*self.input, Style::default().fg(Color::White)),
            Span::styled("█", muted),
        ]));
        frame.render_widget(prompt, chunks[1]);

        let help = Paragraph::new(Line::from(Span::styled(
            "⏎ send  ↑↓ scroll  esc close",
            muted,
        )));
        frame.render_widget(help, chunks[2]);
    }

}

fn transcript_lines(log: &ChatLog) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for message in log.messages() {
        match message.sender {
            Sender::User => {
                lines.push(Line::from(vec![
                    Span::styled("You › ", Style::default().fg(Color::Cyan)),
                    Span::styled(&*message.text, Style::default().fg(Color::White)),
                ]));
            }
            Sender::Bot => {
                lines.extend(blocks_to_lines(&markdown::parse(&message.text)));
            }
        }
        lines.push(Line::default());
    }
    lines
}

/// Lay parsed markdown out as terminal lines.
fn blocks_to_lines(blocks: &[MdBlock]) -> Vec<Line<'static>> {
    let normal = Style::default().fg(Color::Gray);
    let bold = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let heading = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);

    let spans_to_ratatui = |spans: &[MdSpan], base: Style| -> Vec<Span<'static>> {
        spans
            .iter()
            .map(|span| match span {
                MdSpan::Text(t) => Span::styled(t.clone(), base),
                MdSpan::Bold(t) => Span::styled(t.clone(), bold),
            })
            .collect()
    };

    let mut lines = Vec::new();
    for block in blocks {
        match block {
            MdBlock::Heading { spans, .. } => {
                lines.push(Line::from(spans_to_ratatui(spans, heading)));
            }
            MdBlock::Paragraph(spans) => {
                lines.push(Line::from(spans_to_ratatui(spans, normal)));
            }
            MdBlock::List { ordered, items } => {
                for (i, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}. ", i + 1)
                    } else {
                        "• ".to_string()
                    };
                    let mut spans = vec![Span::styled(marker, normal)];
                    spans.extend(spans_to_ratatui(item, normal));
                    lines.push(Line::from(spans));
                }
            }
            MdBlock::Break => lines.push(Line::default()),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ChatPanel {
        ChatPanel::new(Provider::Groq)
    }

    fn type_str(panel: &mut ChatPanel, s: &str) {
        for c in s.chars() {
            panel.on_char(c);
        }
    }

    #[test]
    fn enter_submits_and_clears_the_input() {
        let mut panel = panel();
        type_str(&mut panel, "what is etcd?");
        let request = panel.on_enter().unwrap();
        assert_eq!(request.message, "what is etcd?");
        assert!(panel.input.is_empty());
        assert!(panel.is_pending());
    }

    #[test]
    fn blank_enter_is_a_no_op() {
        let mut panel = panel();
        type_str(&mut panel, "   ");
        assert!(panel.on_enter().is_none());
        assert!(!panel.is_pending());
    }

    #[test]
    fn backspace_edits_the_input() {
        let mut panel = panel();
        type_str(&mut panel, "podz");
        panel.on_backspace();
        type_str(&mut panel, "s");
        let request = panel.on_enter().unwrap();
        assert_eq!(request.message, "pods");
    }

    #[test]
    fn bot_markdown_becomes_styled_lines() {
        let lines = blocks_to_lines(&markdown::parse("# Pods\n- a\n- b"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].content, "Pods");
        assert_eq!(lines[1].spans[0].content, "• ");
        assert_eq!(lines[2].spans[1].content, "b");
    }

    #[test]
    fn scroll_back_stops_at_the_top_of_the_transcript() {
        let mut panel = panel();
        for _ in 0..40 {
            panel.on_scroll_up();
        }
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|frame| panel.render(frame)).unwrap();
        // The greeting fits on screen, so there is nothing to scroll back
        // to and one ↓ must not have 39 dead presses to chew through.
        assert_eq!(panel.scroll, 0);
    }

    #[test]
    fn numbered_items_keep_their_numbers() {
        let lines = blocks_to_lines(&markdown::parse("1. one\n2. two"));
        assert_eq!(lines[0].spans[0].content, "1. ");
        assert_eq!(lines[1].spans[0].content, "2. ");
    }
}
