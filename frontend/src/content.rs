// Hand-authored site content. Everything the sections render comes from
// these arrays; there is no CMS behind them.

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⌨️",
        title: "Full-Stack Development",
        description: "Comfortable on both sides of the wire, from WASM front-ends \
                      to API services, building end-to-end features that hold together.",
    },
    Feature {
        icon: "🚀",
        title: "Systems Mindset",
        description: "I care about what the code compiles to: predictable latency, \
                      small binaries and honest error handling.",
    },
    Feature {
        icon: "📚",
        title: "Continuous Learning",
        description: "Always reading, always prototyping. The ecosystem moves fast \
                      and I enjoy keeping up with it.",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "6+", label: "Years Experience" },
    Stat { value: "40+", label: "Projects Shipped" },
    Stat { value: "12", label: "Open Source Crates" },
    Stat { value: "3", label: "Production Services" },
];

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &[
            Skill { name: "Rust", icon: "🦀" },
            Skill { name: "TypeScript", icon: "🔷" },
            Skill { name: "Python", icon: "🐍" },
            Skill { name: "SQL", icon: "🗄️" },
            Skill { name: "HTML5", icon: "🌐" },
            Skill { name: "CSS3", icon: "🎯" },
        ],
    },
    SkillGroup {
        title: "Frontend",
        skills: &[
            Skill { name: "Yew", icon: "🌳" },
            Skill { name: "WebAssembly", icon: "🕸️" },
            Skill { name: "React", icon: "⚛️" },
            Skill { name: "Canvas", icon: "🎨" },
            Skill { name: "Trunk", icon: "📦" },
            Skill { name: "Responsive UI", icon: "📱" },
        ],
    },
    SkillGroup {
        title: "Backend",
        skills: &[
            Skill { name: "Axum", icon: "🛤️" },
            Skill { name: "Tokio", icon: "⚡" },
            Skill { name: "Diesel", icon: "⛽" },
            Skill { name: "REST APIs", icon: "🔗" },
            Skill { name: "SQLite", icon: "💾" },
            Skill { name: "PostgreSQL", icon: "🐘" },
        ],
    },
    SkillGroup {
        title: "Tools & Others",
        skills: &[
            Skill { name: "Git", icon: "📝" },
            Skill { name: "Docker", icon: "🐳" },
            Skill { name: "Linux", icon: "🐧" },
            Skill { name: "CI/CD", icon: "🔄" },
            Skill { name: "Nginx", icon: "🟩" },
            Skill { name: "Grafana", icon: "📈" },
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub demo_url: &'static str,
    pub source_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Telemetry Pipeline",
        description: "Ingestion service for device telemetry with backpressure-aware \
                      batching, a compact wire format and a Grafana-backed dashboard.",
        tech: &["Rust", "Axum", "Tokio", "PostgreSQL"],
        demo_url: "#",
        source_url: "#",
        featured: true,
    },
    Project {
        title: "Recipe Planner",
        description: "Full-stack meal planning app: Yew front-end, REST API, weekly \
                      shopping list generation and offline-first storage.",
        tech: &["Yew", "WebAssembly", "Axum", "SQLite"],
        demo_url: "#",
        source_url: "#",
        featured: true,
    },
    Project {
        title: "Log Sifter",
        description: "Terminal tool that tails structured logs, filters with a small \
                      query language and renders live histograms.",
        tech: &["Rust", "CLI", "Serde"],
        demo_url: "#",
        source_url: "#",
        featured: false,
    },
    Project {
        title: "Weather Station",
        description: "Self-hosted weather dashboard fed by a balcony sensor, with \
                      hourly aggregation and a year of history.",
        tech: &["Rust", "Embedded", "SQLite", "Canvas"],
        demo_url: "#",
        source_url: "#",
        featured: false,
    },
    Project {
        title: "Portfolio Website",
        description: "This site: a Yew single-page app with an animated star field, \
                      backed by a small contact-form API.",
        tech: &["Yew", "Axum", "Diesel", "Trunk"],
        demo_url: "#",
        source_url: "#",
        featured: false,
    },
    Project {
        title: "Chess Clock",
        description: "Mobile-friendly chess clock with increment modes, haptics and \
                      a tournament preset library.",
        tech: &["Yew", "WebAssembly", "CSS3"],
        demo_url: "#",
        source_url: "#",
        featured: false,
    },
];
