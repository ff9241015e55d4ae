//! Single-screen lesson: title, sections, and one optional interaction.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::content::LessonContent;
use crate::model::LessonId;

/// A lesson rendered as one scrollable page.
pub struct LessonScreen {
    id: LessonId,
    content: &'static LessonContent,
    /// How many times an action key has been used. The Pods manifest
    /// gate needs one use; Services and ReplicaSets cycle on it.
    acted: usize,
    /// The action key used most recently, for lessons where the keys
    /// mean different things (Ingress routes, Nodes fail/recover).
    last_key: Option<char>,
    scroll: u16,
}

impl LessonScreen {
    pub fn new(id: LessonId, content: &'static LessonContent) -> Self {
        Self {
            id,
            content,
            acted: 0,
            last_key: None,
            scroll: 0,
        }
    }

    /// Handle a lesson action key. Other characters are ignored.
    pub fn on_char(&mut self, c: char) {
        if self
            .content
            .action
            .is_some_and(|a| a.keys.iter().any(|(key, _)| *key == c))
        {
            self.acted += 1;
            self.last_key = Some(c);
        }
    }

    /// Whether the continue action is available yet.
    pub fn can_continue(&self) -> bool {
        match self.content.action {
            Some(action) if action.gates_continue => self.acted > 0,
            _ => true,
        }
    }

    pub fn on_scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn on_scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(4), // header
            Constraint::Min(0),    // content
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let accent = Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(self.content.title, highlight)),
            Line::from(Span::styled(self.content.tagline, muted)),
        ])
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(header, chunks[0]);

        let mut lines: Vec<Line> = Vec::new();
        for section in self.content.sections {
            if let Some(heading) = section.heading {
                lines.push(Line::from(Span::styled(heading, accent)));
            }
            for paragraph in section.body {
                lines.push(Line::from(Span::styled(*paragraph, normal)));
            }
            for bullet in section.bullets {
                lines.push(Line::from(vec![
                    Span::styled("  • ", muted),
                    Span::styled(*bullet, normal),
                ]));
            }
            for snippet in section.snippet {
                lines.push(Line::from(Span::styled(
                    format!("    {snippet}"),
                    Style::default().fg(Color::Cyan),
                )));
            }
            lines.push(Line::default());
        }
        if let Some(status) = self.status_line() {
            lines.push(Line::from(Span::styled(status, accent)));
        }

        let content = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(Block::default().padding(Padding::new(2, 2, 0, 0)));
        frame.render_widget(content, chunks[1]);

        let help = Paragraph::new(Line::from(Span::styled(self.help_line(), muted)));
        frame.render_widget(help, chunks[2]);
    }

    /// Feedback line reflecting the lesson's interaction so far.
    fn status_line(&self) -> Option<String> {
        self.content.action?;
        if self.acted == 0 {
            return None;
        }
        let status = match self.id {
            LessonId::Pods => "Pod Created".to_string(),
            LessonId::Nodes => {
                // Rescheduling creates new Pods; the old ones are gone.
                if self.acted % 2 == 1 {
                    "node-1 down — pods rescheduled to node-2 as pod-5, pod-6".to_string()
                } else {
                    "node-1 recovered — fleet back to full strength".to_string()
                }
            }
            LessonId::ReplicaSets => {
                let killed = (self.acted - 1) % 3 + 1;
                let replacement = self.acted + 3;
                format!("pod-{killed} terminated — controller started pod-{replacement} (3/3 Healthy)")
            }
            LessonId::Services => {
                // The service spreads successive requests over its pods.
                format!("Request delivered → pod-{}", (self.acted - 1) % 3 + 1)
            }
            LessonId::Ingress => {
                if self.last_key == Some('a') {
                    "Routed /api → API Service".to_string()
                } else {
                    "Routed /web → Web Service".to_string()
                }
            }
            _ => return None,
        };
        Some(status)
    }

    fn help_line(&self) -> String {
        let mut help = String::from(" ");
        if let Some(action) = self.content.action {
            for (key, label) in action.keys {
                help.push_str(&format!("{key} {label}  "));
            }
        }
        if self.can_continue() {
            help.push_str(&format!("⏎ {}  ", self.content.continue_label));
        }
        help.push_str("↑↓ scroll  tab menu  c chat  q quit");
        help
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::content;

    fn screen(id: LessonId) -> LessonScreen {
        LessonScreen::new(id, content::lesson(id).unwrap())
    }

    #[test]
    fn ungated_lesson_can_always_continue() {
        assert!(screen(LessonId::Intro).can_continue());
        assert!(screen(LessonId::Services).can_continue());
    }

    #[test]
    fn pods_gate_opens_after_applying_the_manifest() {
        let mut pods = screen(LessonId::Pods);
        assert!(!pods.can_continue());
        pods.on_char('x');
        assert!(!pods.can_continue());
        pods.on_char('a');
        assert!(pods.can_continue());
    }

    #[test]
    fn service_requests_rotate_over_pods() {
        let mut services = screen(LessonId::Services);
        services.on_char('s');
        assert_eq!(services.status_line().unwrap(), "Request delivered → pod-1");
        services.on_char('s');
        services.on_char('s');
        assert_eq!(services.status_line().unwrap(), "Request delivered → pod-3");
        services.on_char('s');
        assert_eq!(services.status_line().unwrap(), "Request delivered → pod-1");
    }

    #[test]
    fn ingress_routes_the_chosen_path() {
        let mut ingress = screen(LessonId::Ingress);
        assert!(ingress.status_line().is_none());
        ingress.on_char('a');
        assert_eq!(ingress.status_line().unwrap(), "Routed /api → API Service");
        ingress.on_char('a');
        assert_eq!(ingress.status_line().unwrap(), "Routed /api → API Service");
        ingress.on_char('w');
        assert_eq!(ingress.status_line().unwrap(), "Routed /web → Web Service");
    }

    #[test]
    fn node_failure_toggles_with_recovery() {
        let mut nodes = screen(LessonId::Nodes);
        assert!(nodes.status_line().is_none());
        nodes.on_char('f');
        assert_eq!(
            nodes.status_line().unwrap(),
            "node-1 down — pods rescheduled to node-2 as pod-5, pod-6"
        );
        nodes.on_char('f');
        assert_eq!(
            nodes.status_line().unwrap(),
            "node-1 recovered — fleet back to full strength"
        );
        assert!(nodes.can_continue());
    }

    #[test]
    fn killed_pods_are_replaced_with_fresh_names() {
        let mut replicasets = screen(LessonId::ReplicaSets);
        replicasets.on_char('x');
        assert_eq!(
            replicasets.status_line().unwrap(),
            "pod-1 terminated — controller started pod-4 (3/3 Healthy)"
        );
        replicasets.on_char('x');
        assert_eq!(
            replicasets.status_line().unwrap(),
            "pod-2 terminated — controller started pod-5 (3/3 Healthy)"
        );
    }
}
