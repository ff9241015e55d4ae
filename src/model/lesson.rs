//! Lesson identity: the fixed eight-stop course.

/// One top-level teaching screen. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonId {
    Intro,
    Containers,
    KubernetesIntro,
    Pods,
    Nodes,
    ReplicaSets,
    Services,
    Ingress,
}

impl LessonId {
    /// Every lesson, in course order.
    pub const ALL: [LessonId; 8] = [
        LessonId::Intro,
        LessonId::Containers,
        LessonId::KubernetesIntro,
        LessonId::Pods,
        LessonId::Nodes,
        LessonId::ReplicaSets,
        LessonId::Services,
        LessonId::Ingress,
    ];

    /// Stable identifier, used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            LessonId::Intro => "intro",
            LessonId::Containers => "containers",
            LessonId::KubernetesIntro => "kubernetes-intro",
            LessonId::Pods => "pods",
            LessonId::Nodes => "nodes",
            LessonId::ReplicaSets => "replicasets",
            LessonId::Services => "services",
            LessonId::Ingress => "ingress",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.slug() == slug)
    }

    /// The lesson that follows this one, or `None` for the last stop.
    pub fn successor(self) -> Option<Self> {
        match self {
            LessonId::Intro => Some(LessonId::Containers),
            LessonId::Containers => Some(LessonId::KubernetesIntro),
            LessonId::KubernetesIntro => Some(LessonId::Pods),
            LessonId::Pods => Some(LessonId::Nodes),
            LessonId::Nodes => Some(LessonId::ReplicaSets),
            LessonId::ReplicaSets => Some(LessonId::Services),
            LessonId::Services => Some(LessonId::Ingress),
            LessonId::Ingress => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for lesson in LessonId::ALL {
            assert_eq!(LessonId::from_slug(lesson.slug()), Some(lesson));
        }
        assert_eq!(LessonId::from_slug("helmsman"), None);
    }

    #[test]
    fn successors_walk_the_whole_course() {
        let mut seen = vec![LessonId::Intro];
        while let Some(next) = seen.last().unwrap().successor() {
            seen.push(next);
        }
        assert_eq!(seen, LessonId::ALL);
    }
}
