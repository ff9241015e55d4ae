//! Course sequencing: which lesson is on screen and which are done.
//!
//! The course is a fixed eight-lesson order with one wrinkle: the
//! navigation drawer exposes nine entries, because the Kubernetes lesson's
//! "Grand Fleet" step gets its own jump target. The flat drawer index maps
//! to a `(lesson, initial step)` pair through one lookup table.

use crate::model::LessonId;

/// One entry in the navigation drawer.
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub label: &'static str,
    pub lesson: LessonId,
    /// Initial step for the Kubernetes lesson; `None` leaves it untouched.
    pub step: Option<usize>,
}

/// Flat index → lesson mapping for the drawer. Index 2 opens the
/// Kubernetes lesson at its first step, index 3 deep-links to step 8.
pub const NAV_ENTRIES: [NavEntry; 9] = [
    NavEntry {
        label: "Introduction",
        lesson: LessonId::Intro,
        step: None,
    },
    NavEntry {
        label: "Containers (Docker)",
        lesson: LessonId::Containers,
        step: None,
    },
    NavEntry {
        label: "Kubernetes Intro",
        lesson: LessonId::KubernetesIntro,
        step: Some(0),
    },
    NavEntry {
        label: "Grand Fleet Arch",
        lesson: LessonId::KubernetesIntro,
        step: Some(8),
    },
    NavEntry {
        label: "Pods",
        lesson: LessonId::Pods,
        step: None,
    },
    NavEntry {
        label: "Nodes",
        lesson: LessonId::Nodes,
        step: None,
    },
    NavEntry {
        label: "ReplicaSets",
        lesson: LessonId::ReplicaSets,
        step: None,
    },
    NavEntry {
        label: "Services",
        lesson: LessonId::Services,
        step: None,
    },
    NavEntry {
        label: "Ingress",
        lesson: LessonId::Ingress,
        step: None,
    },
];

/// Tracks the active lesson and the lessons already passed through.
#[derive(Debug, Clone)]
pub struct Course {
    current: LessonId,
    completed: Vec<LessonId>,
    k8s_initial_step: usize,
}

impl Course {
    pub fn new() -> Self {
        Self::starting_at(LessonId::Intro)
    }

    pub fn starting_at(lesson: LessonId) -> Self {
        Self {
            current: lesson,
            completed: Vec::new(),
            k8s_initial_step: 0,
        }
    }

    pub fn current(&self) -> LessonId {
        self.current
    }

    /// Lessons the user has advanced past, in the order they were passed.
    pub fn completed(&self) -> &[LessonId] {
        &self.completed
    }

    pub fn is_completed(&self, lesson: LessonId) -> bool {
        self.completed.contains(&lesson)
    }

    /// Step the Kubernetes lesson should open at.
    pub fn k8s_initial_step(&self) -> usize {
        self.k8s_initial_step
    }

    /// Record the active lesson as completed and make `next` active.
    /// Completion is recorded at most once per lesson.
    pub fn complete_and_advance(&mut self, next: LessonId) {
        if !self.completed.contains(&self.current) {
            self.completed.push(self.current);
        }
        self.current = next;
        self.k8s_initial_step = 0;
    }

    /// The "continue" action of the active lesson: advance in course
    /// order. The last lesson wraps back to the start without being
    /// marked complete.
    pub fn advance(&mut self) {
        match self.current.successor() {
            Some(next) => self.complete_and_advance(next),
            None => {
                self.current = LessonId::Intro;
                self.k8s_initial_step = 0;
            }
        }
    }

    /// Jump to a navigation drawer entry. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        let Some(entry) = NAV_ENTRIES.get(index) else {
            return;
        };
        self.current = entry.lesson;
        if let Some(step) = entry.step {
            self.k8s_initial_step = step;
        }
    }

    /// The drawer index to highlight for the active lesson. The Kubernetes
    /// lesson reports the Grand Fleet entry when deep-linked to step 8.
    pub fn nav_index(&self) -> usize {
        match self.current {
            LessonId::Intro => 0,
            LessonId::Containers => 1,
            LessonId::KubernetesIntro => {
                if self.k8s_initial_step == 8 {
                    3
                } else {
                    2
                }
            }
            LessonId::Pods => 4,
            LessonId::Nodes => 5,
            LessonId::ReplicaSets => 6,
            LessonId::Services => 7,
            LessonId::Ingress => 8,
        }
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::new()
    }
}
