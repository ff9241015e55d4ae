//! Lesson narrative content.
//!
//! The course text, re-set for a terminal: each simple lesson is one
//! data-driven descriptor; the Kubernetes lesson carries per-step content
//! with slot 9 retired (its numeric position is preserved for deep links,
//! see [`crate::steps`]).

use crate::model::LessonId;

/// A titled chunk of a lesson: prose, bullets, and an optional mono block.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: Option<&'static str>,
    pub body: &'static [&'static str],
    pub bullets: &'static [&'static str],
    /// Monospace block: a manifest, commands, or routing rules.
    pub snippet: &'static [&'static str],
}

/// An in-lesson interaction: the keys the lesson responds to, with the
/// help-line label for each.
#[derive(Debug, Clone, Copy)]
pub struct ActionPrompt {
    pub keys: &'static [(char, &'static str)],
    /// Whether the lesson's continue action is hidden until the first use.
    pub gates_continue: bool,
}

/// Everything a single-screen lesson needs to render.
#[derive(Debug, Clone, Copy)]
pub struct LessonContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub sections: &'static [Section],
    pub action: Option<ActionPrompt>,
    pub continue_label: &'static str,
}

const fn section(
    heading: Option<&'static str>,
    body: &'static [&'static str],
    bullets: &'static [&'static str],
    snippet: &'static [&'static str],
) -> Section {
    Section {
        heading,
        body,
        bullets,
        snippet,
    }
}

static INTRO: LessonContent = LessonContent {
    title: "Welcome Aboard, Captain",
    tagline: "Before the fleet, there was the old world. This is why it sank.",
    sections: &[
        section(
            Some("The Problem with Giants"),
            &[
                "One monolithic application: one codebase, one database, one \
                 deployment. When a single module fails, the whole ship goes \
                 down with it.",
            ],
            &[
                "A tiny bug anywhere takes down everything",
                "Scaling means duplicating the entire application",
                "One release train for every team",
            ],
            &[],
        ),
        section(
            Some("Chapter 2: Microservices"),
            &[
                "Split the giant into small, independent services. Each one \
                 ships, scales, and fails on its own. But now you have dozens \
                 of processes to run somewhere.",
            ],
            &[],
            &[],
        ),
        section(
            Some("The \"Works on My Machine\" Curse"),
            &[
                "Every service drags its own runtime, libraries, and system \
                 packages behind it. What runs on a laptop breaks in \
                 production. Something has to package the environment with \
                 the code.",
            ],
            &[],
            &[],
        ),
    ],
    action: None,
    continue_label: "Set Sail (Containers)",
};

static CONTAINERS: LessonContent = LessonContent {
    title: "The Standard Shipping Container",
    tagline: "Docker packs the code and its world into one sealed box.",
    sections: &[
        section(
            Some("Step 1: The Dockerfile"),
            &[
                "A recipe: base image, dependencies, code, start command. \
                 Build it once and the image is identical everywhere.",
            ],
            &[],
            &["FROM node:20-alpine", "COPY . /app", "RUN npm install", "CMD [\"npm\", \"start\"]"],
        ),
        section(
            Some("Step 2: docker run"),
            &[
                "An image becomes a running container: isolated filesystem, \
                 own network namespace, shared kernel. Start it in \
                 milliseconds, throw it away without a trace.",
            ],
            &[],
            &["docker build -t my-app:v1 .", "docker run -d -p 8080:80 my-app:v1"],
        ),
        section(
            Some("Step 3: The Lifecycle"),
            &["Created, running, stopped, removed. Containers are cattle, not pets."],
            &[],
            &[],
        ),
        section(
            Some("Step 4: Orchestration with Compose"),
            &[
                "docker compose wires a few containers together on one \
                 machine. Fine for a laptop. But production needs many \
                 machines.",
            ],
            &[],
            &[],
        ),
        section(
            Some("The Reality Check"),
            &[
                "Who restarts a crashed container at 3am? Who spreads two \
                 hundred containers over fifty machines? Who moves them when \
                 a machine dies? You need a captain.",
            ],
            &[],
            &[],
        ),
    ],
    action: None,
    continue_label: "Meet the Captain (Kubernetes)",
};

static PODS: LessonContent = LessonContent {
    title: "The Atomic Unit: The Pod",
    tagline: "In Kubernetes, we don't run containers directly. We wrap them in a Pod.",
    sections: &[
        section(
            Some("Why a Pod?"),
            &[
                "Think of a Pod as a wrapper, a logical host. Usually it's \
                 1 Pod = 1 Container. But sometimes a helper container (a \
                 sidecar) sits right next to the main one, sharing the same \
                 network and storage.",
            ],
            &[],
            &[],
        ),
        section(
            Some("YAML Manifest"),
            &[],
            &[],
            &[
                "apiVersion: v1",
                "kind: Pod",
                "metadata:",
                "  name: my-app",
                "spec:",
                "  containers:",
                "  - name: web",
                "    image: my-app:v1",
            ],
        ),
    ],
    action: Some(ActionPrompt {
        keys: &[('a', "Apply Manifest")],
        gates_continue: true,
    }),
    continue_label: "Where do Pods live? (Nodes)",
};

static NODES: LessonContent = LessonContent {
    title: "The Fleet: Worker Nodes",
    tagline: "Pods have to run somewhere. Nodes are the ships that carry them.",
    sections: &[
        section(
            Some("What Runs on Every Node"),
            &[],
            &[
                "kubelet — the deck officer, starts and watches Pods",
                "container runtime — actually runs the containers",
                "kube-proxy — wires Service traffic to the right Pods",
            ],
            &[],
        ),
        section(
            Some("Node Failure"),
            &[
                "When a ship sinks, the Scheduler doesn't move its Pods. It \
                 reschedules them: brand-new copies, new names, started on a \
                 healthy node. The cargo survives the ship.",
            ],
            &[],
            &[],
        ),
    ],
    action: Some(ActionPrompt {
        keys: &[('f', "Simulate Node Failure")],
        gates_continue: false,
    }),
    continue_label: "Who keeps count? (ReplicaSets)",
};

static REPLICASETS: LessonContent = LessonContent {
    title: "The Clone Army: ReplicaSets",
    tagline: "One Pod is a single point of failure. A ReplicaSet keeps N of them alive.",
    sections: &[
        section(
            Some("Desired State"),
            &[
                "You declare replicas: 3. The ReplicaSet controller counts \
                 running Pods, and whenever reality disagrees with the \
                 declaration it creates or deletes Pods until they match.",
            ],
            &[],
            &["spec:", "  replicas: 3", "  selector:", "    matchLabels:", "      app: web"],
        ),
        section(
            None,
            &[
                "Kill a Pod and a replacement appears. Scale to 10 and seven \
                 more start. You never manage Pods one by one again.",
            ],
            &[],
            &[],
        ),
    ],
    action: Some(ActionPrompt {
        keys: &[('x', "Kill a Pod")],
        gates_continue: false,
    }),
    continue_label: "How do we reach them? (Services)",
};

static SERVICES: LessonContent = LessonContent {
    title: "The Radio: Services",
    tagline: "Pods are ephemeral. Their IPs change. A Service is the stable address.",
    sections: &[
        section(
            Some("Stable Address"),
            &[
                "A Service gives you a single, stable IP and DNS name \
                 (my-app.svc). It doesn't matter if the Pods behind it \
                 change. It acts as an internal load balancer, spreading \
                 traffic across all matching Pods.",
            ],
            &[],
            &[],
        ),
        section(
            Some("Selector Magic"),
            &[
                "The Service finds Pods using labels. It says: send traffic \
                 to anything with app=web.",
            ],
            &[],
            &[],
        ),
    ],
    action: Some(ActionPrompt {
        keys: &[('s', "Send Request")],
        gates_continue: false,
    }),
    continue_label: "Open the gates (Ingress)",
};

static INGRESS: LessonContent = LessonContent {
    title: "The Gateway: Ingress",
    tagline: "Services are internal. To let the outside world in, we need an Ingress.",
    sections: &[
        section(
            Some("Routing Rules"),
            &[
                "Ingress acts like a smart router or receptionist: it looks \
                 at the URL and decides where the request goes.",
            ],
            &[],
            &["/web  ->  Web Service", "/api  ->  API Service"],
        ),
        section(
            Some("Journey Complete!"),
            &[
                "Containers in Pods, Pods on Nodes, ReplicaSets keeping \
                 count, Services giving them a voice, Ingress opening the \
                 port. That's the whole fleet.",
            ],
            &[],
            &[],
        ),
    ],
    action: Some(ActionPrompt {
        keys: &[('w', "Visit /web"), ('a', "Visit /api")],
        gates_continue: false,
    }),
    continue_label: "Start Over",
};

/// Content for a single-screen lesson. The Kubernetes lesson is the
/// multi-step exception and is served by [`k8s_step`] instead.
pub fn lesson(id: LessonId) -> Option<&'static LessonContent> {
    match id {
        LessonId::Intro => Some(&INTRO),
        LessonId::Containers => Some(&CONTAINERS),
        LessonId::Pods => Some(&PODS),
        LessonId::Nodes => Some(&NODES),
        LessonId::ReplicaSets => Some(&REPLICASETS),
        LessonId::Services => Some(&SERVICES),
        LessonId::Ingress => Some(&INGRESS),
        LessonId::KubernetesIntro => None,
    }
}

// ── Kubernetes lesson steps ──

/// One step of the Kubernetes-concepts lesson.
#[derive(Debug, Clone, Copy)]
pub struct StepContent {
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub bullets: &'static [&'static str],
    pub continue_label: &'static str,
}

/// Highest step number in the Kubernetes lesson.
pub const K8S_LAST_STEP: usize = 14;

/// The retired slot. Kept as a named constant so the redirect
/// configuration and the content table can't drift apart silently.
pub const K8S_RETIRED_STEP: usize = 9;

const fn step(
    title: &'static str,
    body: &'static [&'static str],
    bullets: &'static [&'static str],
    continue_label: &'static str,
) -> StepContent {
    StepContent {
        title,
        body,
        bullets,
        continue_label,
    }
}

static K8S_STEPS: [Option<StepContent>; K8S_LAST_STEP + 1] = [
    Some(step(
        "The Era of Chaos",
        &[
            "Before Kubernetes, managing containers was like the Great \
             Ninja War: uncoordinated, chaotic, and destructive.",
        ],
        &["Manual deployments", "Server burnout", "System critical"],
        "Continue",
    )),
    Some(step(
        "The Foundation of Order",
        &[
            "The first leader brings etcd: like the founder's scrolls, it \
             stores the entire cluster history and state consistently. The \
             central management point for all cluster operations.",
        ],
        &["etcd — the consistent key-value store", "Node controller — manages worker lifecycle"],
        "Continue",
    )),
    Some(step(
        "The Era of Innovation",
        &[
            "The Controller Manager constantly watches current state versus \
             desired state and takes corrective action when a Pod crashes \
             or a node vanishes.",
        ],
        &["Watches current vs desired state", "Manages ReplicaSets, Endpoints, Namespaces"],
        "Continue",
    )),
    Some(step(
        "The Legendary Sannin",
        &[
            "The sage of monitoring: scrape metrics from endpoints, \
             visualize the health of the village, send summons when a \
             metric spikes.",
        ],
        &[],
        "Continue",
    )),
    Some(step(
        "The Uchiha: Advanced Operations",
        &[
            "Kubernetes Operators: replace human ops manuals with code. \
             Backups, upgrades, and scaling handled automatically by \
             controllers that know the application.",
        ],
        &[],
        "Continue",
    )),
    Some(step(
        "The Modern Architecture",
        &[
            "Multi-cluster management and service mesh: mTLS security, \
             observability, and traffic control without code changes; \
             resources synced across clusters for disaster recovery.",
        ],
        &[],
        "Continue",
    )),
    Some(step(
        "The Hero Who United All",
        &[
            "The CNCF ecosystem: Kubernetes, Prometheus, Envoy, Helm, \
             Fluentd — community governance over the whole alliance.",
        ],
        &[],
        "Continue",
    )),
    Some(step(
        "The Path Forward",
        &[],
        &[
            "Managing nodes (squads) and namespaces (districts)",
            "RBAC and network policies as the guard",
            "Comprehensive monitoring, village-wide",
        ],
        "Continue",
    )),
    Some(step(
        "The Grand Fleet: Architecture Overview",
        &[
            "The flagship carries the control plane; the barges do the \
             lifting.",
        ],
        &[
            "API Server (port 6443) — the cluster's front desk",
            "etcd — the single source of truth",
            "Scheduler — the cranes, placing cargo by capacity and policy",
            "Controller Manager — the tireless first mate",
        ],
        "Enter the Command Center",
    )),
    // Slot 9: detailed architecture diagram, removed from the course.
    None,
    Some(step(
        "The Grand Fleet Command",
        &[
            "Watch the ship's crew (control plane) coordinate the \
             deployment of a new container to the worker barges, one order \
             at a time.",
        ],
        &[],
        "Continue",
    )),
    Some(step(
        "The Engine Room: Container Runtimes",
        &[
            "Below deck: kubelet speaks CRI to the runtime. Docker's \
             dockershim sailed until v1.23; containerd and CRI-O carry the \
             load now.",
        ],
        &[],
        "Continue",
    )),
    Some(step(
        "ETCD in Action",
        &[
            "Follow one kubectl command all the way into the vault, step by \
             step.",
        ],
        &[],
        "Continue",
    )),
    Some(step(
        "Why Kubernetes Chose etcd",
        &[],
        &[
            "Watch — notify components the instant a key changes",
            "Consistency — every reader sees the same cluster state",
            "Availability — a raft quorum survives member loss",
        ],
        "Continue",
    )),
    Some(step(
        "ETCD in Action: Kubernetes' Brain",
        &[
            "Everything the cluster knows lives under a key prefix: \
             deployments, services, secrets. Only the API Server writes; \
             everyone else watches.",
        ],
        &[
            "kubeadm: static Pod in kube-system",
            "Manual install: binary plus a systemd service",
        ],
        "Start Your Mission (Pods)",
    )),
];

/// Content for one Kubernetes lesson step. `None` for the retired slot.
pub fn k8s_step(index: usize) -> Option<&'static StepContent> {
    K8S_STEPS.get(index).and_then(Option::as_ref)
}

// ── Scripted demo phases ──
//
// These are time-keyed visual sequences in the original, not real control
// loops. Here each phase is one manual step.

/// One phase of a scripted demo.
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub title: &'static str,
    pub description: &'static str,
}

/// The deployment flow acted out on the Grand Fleet Command step.
pub static FLEET_PHASES: [Phase; 9] = [
    Phase {
        title: "Waiting for deployment...",
        description: "Ready to deploy. Advance to begin the Kubernetes flow.",
    },
    Phase {
        title: "1. The Request",
        description: "Captain (dev) sends the manifest to the bridge via kubectl.",
    },
    Phase {
        title: "2. Validation",
        description: "API Server validates the manifest orders.",
    },
    Phase {
        title: "3. Store in Vault",
        description: "API Server stores the Pod's desired state in the etcd vault.",
    },
    Phase {
        title: "4. Controller Manager",
        description: "Controller Manager watches etcd, sees the new Pod spec, creates the Pod object.",
    },
    Phase {
        title: "5. Scheduler",
        description: "Scheduler watches for unscheduled Pods, selects the best worker node, binds the Pod.",
    },
    Phase {
        title: "6. Kubelet Watches",
        description: "Kubelet on the worker node sees a Pod assigned to its node.",
    },
    Phase {
        title: "7. Pod Placement",
        description: "Kubelet uses CRI to pull the image and create the container.",
    },
    Phase {
        title: "8. Status Reporting",
        description: "Pod is Running! Kubelet reports status back, API Server updates etcd.",
    },
];

/// The storage walk acted out on the ETCD in Action step.
pub static ETCD_PHASES: [Phase; 4] = [
    Phase {
        title: "Step 1: kubectl Command",
        description: "You run kubectl create pod — kubectl sends a REST request to the API Server.",
    },
    Phase {
        title: "Step 2: API Server Processing",
        description: "The API Server authenticates you, validates the request, and processes the spec.",
    },
    Phase {
        title: "Step 3: Storing in etcd",
        description: "The API Server writes the desired state to etcd as a key-value entry. This becomes the single source of truth.",
    },
    Phase {
        title: "Step 4: Persistent Storage",
        description: "The data is safe in etcd. Every component can read this state, but only the API Server writes.",
    },
];
