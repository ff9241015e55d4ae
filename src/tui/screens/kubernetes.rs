//! The multi-step Kubernetes-concepts lesson.
//!
//! An outer step router walks the story (step 9 retired, see
//! [`crate::steps`]). Two steps host scripted demos — the Grand Fleet
//! deployment flow and the etcd storage walk — each driven by its own
//! inner router with no redirect; that asymmetry is deliberate
//! per-lesson configuration.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::content::{self, ETCD_PHASES, FLEET_PHASES, K8S_LAST_STEP, Phase};
use crate::steps::{StepRouter, kubernetes_router};

/// Outer steps that host an inner scripted demo.
const FLEET_STEP: usize = 10;
const ETCD_STEP: usize = 12;

/// What the lesson wants the course to do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum StepAction {
    None,
    /// The last step's continue was chosen.
    Complete,
}

pub struct KubernetesScreen {
    router: StepRouter,
    fleet: StepRouter,
    etcd: StepRouter,
}

impl KubernetesScreen {
    pub fn new(initial_step: usize) -> Self {
        Self {
            router: kubernetes_router(initial_step),
            fleet: StepRouter::new(FLEET_PHASES.len() - 1, None),
            etcd: StepRouter::new(ETCD_PHASES.len() - 1, None),
        }
    }

    pub fn step(&self) -> usize {
        self.router.cursor()
    }

    /// Advance. On a demo step the inner router runs first; once its
    /// phases are exhausted the outer router moves on. On the last step
    /// this surfaces the lesson's completion instead.
    pub fn on_next(&mut self) -> StepAction {
        match self.router.cursor() {
            FLEET_STEP if !self.fleet.is_last() => {
                self.fleet.next();
                StepAction::None
            }
            ETCD_STEP if !self.etcd.is_last() => {
                self.etcd.next();
                StepAction::None
            }
            _ if self.router.is_last() => StepAction::Complete,
            _ => {
                self.router.next();
                self.reset_demos();
                StepAction::None
            }
        }
    }

    /// Step back. A demo rewinds phase by phase before the outer router
    /// moves; `prev` at the very start stays put.
    pub fn on_prev(&mut self) {
        match self.router.cursor() {
            FLEET_STEP if self.fleet.cursor() > 0 => self.fleet.prev(),
            ETCD_STEP if self.etcd.cursor() > 0 => self.etcd.prev(),
            _ => {
                self.router.prev();
                self.reset_demos();
            }
        }
    }

    fn reset_demos(&mut self) {
        self.fleet.jump(0);
        self.etcd.jump(0);
    }

    fn demo(&self) -> Option<(&'static Phase, usize, usize)> {
        match self.router.cursor() {
            FLEET_STEP => Some((
                &FLEET_PHASES[self.fleet.cursor()],
                self.fleet.cursor(),
                FLEET_PHASES.len() - 1,
            )),
            ETCD_STEP => Some((
                &ETCD_PHASES[self.etcd.cursor()],
                self.etcd.cursor(),
                ETCD_PHASES.len() - 1,
            )),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let Some(step) = content::k8s_step(self.router.cursor()) else {
            // The retired slot is unreachable through the router.
            return;
        };

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
            Line::from(Span::styled(step.title, highlight)),
            Line::from(Span::styled(
                format!("Kubernetes Intro — step {}/{K8S_LAST_STEP}", self.router.cursor()),
                muted,
            )),
        ])
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(header, chunks[0]);

        let mut lines: Vec<Line> = Vec::new();
        for paragraph in step.body {
            lines.push(Line::from(Span::styled(*paragraph, normal)));
        }
        for bullet in step.bullets {
            lines.push(Line::from(vec![
                Span::styled("  • ", muted),
                Span::styled(*bullet, normal),
            ]));
        }
        if let Some((phase, at, last)) = self.demo() {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(phase.title, accent),
                Span::styled(format!("  ({at}/{last})"), muted),
            ]));
            lines.push(Line::from(Span::styled(phase.description, normal)));
        }

        let content = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(content, chunks[1]);

        let advance = if self.demo().is_some_and(|(_, at, last)| at < last) {
            "⏎ next phase"
        } else {
            step.continue_label
        };
        let help = Paragraph::new(Line::from(Span::styled(
            format!(" ⏎ {advance}  ← back  tab menu  c chat  q quit"),
            muted,
        )));
        frame.render_widget(help, chunks[2]);
    }
}
