//! Navigation drawer: jump to any section of the course.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
};

use crate::course::{Course, NAV_ENTRIES};

/// The drawer overlay, open on the left edge.
pub struct NavDrawer {
    selected: usize,
}

impl NavDrawer {
    /// Opens with the active section preselected.
    pub fn new(selected: usize) -> Self {
        Self {
            selected: selected.min(NAV_ENTRIES.len() - 1),
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < NAV_ENTRIES.len() {
            self.selected += 1;
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn render(&self, frame: &mut Frame, course: &Course) {
        let area = frame.area();
        let drawer = Layout::horizontal([Constraint::Length(32), Constraint::Min(0)]).split(area)[0];
        frame.render_widget(Clear, drawer);

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::new(1, 1, 1, 0))
            .title(" Navigation ")
            .title_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(drawer);
        frame.render_widget(block, drawer);

        let chunks =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);

        let muted = Style::default().fg(Color::DarkGray);
        let normal = Style::default().fg(Color::Gray);
        let highlight = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let done = Style::default().fg(Color::Green);

        let active = course.nav_index();
        let items: Vec<ListItem> = NAV_ENTRIES
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == self.selected { highlight } else { normal };
                let pointer = if i == self.selected { "› " } else { "  " };

                let marker = if i == active {
                    Span::styled(" ●", highlight)
                } else if course.is_completed(entry.lesson) {
                    Span::styled(" ✓", done)
                } else {
                    Span::styled("", muted)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(entry.label, style),
                    marker,
                ]))
            })
            .collect();

        frame.render_widget(List::new(items), chunks[0]);

        let help = Paragraph::new(Line::from(Span::styled(
            "↑↓ navigate  ⏎ jump  esc close",
            muted,
        )));
        frame.render_widget(help, chunks[1]);
    }
}
