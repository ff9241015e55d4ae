//! Application loop and screen routing.
//!
//! One synchronous event loop owns all state. The only asynchronous work
//! is the chat request, which runs on a background thread and reports
//! back over a channel polled between input events; closing the panel or
//! navigating away does not cancel it.

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

use crate::chat::client::{self, ChatRequest};
use crate::config::Config;
use crate::content;
use crate::course::Course;
use crate::model::LessonId;

use super::screens::{ChatPanel, KubernetesScreen, LessonScreen, NavDrawer, StepAction};

/// The active lesson's screen.
enum Screen {
    Simple(LessonScreen),
    Kubernetes(KubernetesScreen),
}

fn screen_for(course: &Course) -> Screen {
    match content::lesson(course.current()) {
        Some(content) => Screen::Simple(LessonScreen::new(course.current(), content)),
        None => Screen::Kubernetes(KubernetesScreen::new(course.k8s_initial_step())),
    }
}

/// What a key press asks the event loop to do.
enum Action {
    None,
    Quit,
    Send(ChatRequest),
}

struct App {
    course: Course,
    screen: Screen,
    chat: ChatPanel,
    chat_open: bool,
    nav: Option<NavDrawer>,
}

impl App {
    fn new(config: &Config, start: LessonId) -> Self {
        let course = Course::starting_at(start);
        let screen = screen_for(&course);
        Self {
            course,
            screen,
            chat: ChatPanel::new(config.provider),
            chat_open: false,
            nav: None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        match &self.screen {
            Screen::Simple(s) => s.render(frame),
            Screen::Kubernetes(s) => s.render(frame),
        }
        if let Some(nav) = &self.nav {
            nav.render(frame, &self.course);
        }
        if self.chat_open {
            self.chat.render(frame);
        }
    }

    fn handle_key(&mut self, key: KeyCode) -> Action {
        if self.chat_open {
            return self.handle_chat_key(key);
        }
        if self.nav.is_some() {
            self.handle_nav_key(key);
            return Action::None;
        }
        self.handle_lesson_key(key)
    }

    fn handle_chat_key(&mut self, key: KeyCode) -> Action {
        match key {
            // Closing hides the panel; an in-flight request keeps going.
            KeyCode::Esc => self.chat_open = false,
            KeyCode::Enter => {
                if let Some(request) = self.chat.on_enter() {
                    return Action::Send(request);
                }
            }
            KeyCode::Backspace => self.chat.on_backspace(),
            KeyCode::Up => self.chat.on_scroll_up(),
            KeyCode::Down => self.chat.on_scroll_down(),
            KeyCode::Char(c) => self.chat.on_char(c),
            _ => {}
        }
        Action::None
    }

    fn handle_nav_key(&mut self, key: KeyCode) {
        let Some(nav) = &mut self.nav else { return };
        match key {
            KeyCode::Esc | KeyCode::Tab => self.nav = None,
            KeyCode::Up | KeyCode::Char('k') => nav.move_up(),
            KeyCode::Down | KeyCode::Char('j') => nav.move_down(),
            KeyCode::Enter => {
                self.course.jump_to(nav.selected());
                self.screen = screen_for(&self.course);
                self.nav = None;
            }
            _ => {}
        }
    }

    fn handle_lesson_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('c') => self.chat_open = true,
            KeyCode::Tab => self.nav = Some(NavDrawer::new(self.course.nav_index())),
            KeyCode::Enter | KeyCode::Right => self.advance(),
            KeyCode::Left => {
                if let Screen::Kubernetes(s) = &mut self.screen {
                    s.on_prev();
                }
            }
            KeyCode::Up => {
                if let Screen::Simple(s) = &mut self.screen {
                    s.on_scroll_up();
                }
            }
            KeyCode::Down => {
                if let Screen::Simple(s) = &mut self.screen {
                    s.on_scroll_down();
                }
            }
            KeyCode::Char(c) => {
                if let Screen::Simple(s) = &mut self.screen {
                    s.on_char(c);
                }
            }
            _ => {}
        }
        Action::None
    }

    /// The continue action of whatever is on screen.
    fn advance(&mut self) {
        let completed = match &mut self.screen {
            Screen::Simple(s) => s.can_continue(),
            Screen::Kubernetes(s) => s.on_next() == StepAction::Complete,
        };
        if completed {
            self.course.advance();
            self.screen = screen_for(&self.course);
        }
    }
}

/// Runs the TUI event loop until the user quits.
pub fn run(config: &Config, start: LessonId) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, config, start);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, config: &Config, start: LessonId) -> io::Result<()> {
    let mut app = App::new(config, start);
    let mut in_flight: Option<mpsc::Receiver<client::Result<String>>> = None;

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Some(rx) = &in_flight
            && let Ok(outcome) = rx.try_recv()
        {
            app.chat.resolve(outcome);
            in_flight = None;
        }

        // Short poll so a chat reply shows up without a key press.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match app.handle_key(key.code) {
                Action::Quit => return Ok(()),
                Action::Send(request) => {
                    in_flight = Some(client::post_in_background(
                        config.chat_url.clone(),
                        request,
                    ));
                }
                Action::None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default(), LessonId::Intro)
    }

    #[test]
    fn enter_advances_an_ungated_lesson() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.course.current(), LessonId::Containers);
        assert!(app.course.is_completed(LessonId::Intro));
    }

    #[test]
    fn gated_lesson_holds_until_the_action_runs() {
        let mut app = App::new(&Config::default(), LessonId::Pods);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.course.current(), LessonId::Pods);
        app.handle_key(KeyCode::Char('a'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.course.current(), LessonId::Nodes);
    }

    #[test]
    fn nav_drawer_jumps_to_the_grand_fleet() {
        let mut app = app();
        app.handle_key(KeyCode::Tab);
        for _ in 0..3 {
            app.handle_key(KeyCode::Down);
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.course.current(), LessonId::KubernetesIntro);
        match &app.screen {
            Screen::Kubernetes(s) => assert_eq!(s.step(), 8),
            Screen::Simple(_) => panic!("expected the Kubernetes screen"),
        }
        assert!(app.nav.is_none());
    }

    #[test]
    fn chat_consumes_keys_while_open() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'));
        assert!(app.chat_open);
        // 'q' is input text now, not quit.
        assert!(matches!(app.handle_key(KeyCode::Char('q')), Action::None));
        app.handle_key(KeyCode::Esc);
        assert!(!app.chat_open);
        assert!(matches!(app.handle_key(KeyCode::Char('q')), Action::Quit));
    }

    #[test]
    fn chat_enter_yields_a_request() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'));
        for c in "hi".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        assert!(matches!(app.handle_key(KeyCode::Enter), Action::Send(_)));
        // A second send while pending is gated off.
        for c in "again".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        assert!(matches!(app.handle_key(KeyCode::Enter), Action::None));
    }

    #[test]
    fn finishing_the_course_wraps_to_the_start() {
        let mut app = App::new(&Config::default(), LessonId::Ingress);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.course.current(), LessonId::Intro);
        assert!(!app.course.is_completed(LessonId::Ingress));
    }
}
