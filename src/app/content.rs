//! Static portfolio content rendered into the page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    Concept,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Language,
        SkillCategory::Framework,
        SkillCategory::Database,
        SkillCategory::Concept,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Language => "Programming Language",
            SkillCategory::Framework => "Framework & Technology",
            SkillCategory::Database => "Database",
            SkillCategory::Concept => "Concept",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static str,
    pub link: Option<&'static str>,
}

impl Project {
    pub fn technology_tags(&self) -> impl Iterator<Item = &'static str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: u16,
    pub link: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub objective: &'static str,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
}

impl Profile {
    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.category == category)
    }
}

/// Suggested questions offered in the chat window.
pub const QUICK_QUERIES: &[&str] = &[
    "What projects have you built?",
    "Which databases do you work with?",
    "How can I get in touch?",
];

pub fn profile() -> Profile {
    Profile {
        name: "Alex Morgan",
        headline: "SQL & Python Developer",
        email: "hello@example.com",
        phone: "+1 555 0100",
        github: "https://github.com/example",
        linkedin: "https://linkedin.com/in/example",
        objective: "Detail-oriented developer specializing in database management and SQL. \
            Experienced in designing relational schemas for full-stack applications with \
            MySQL and Python, and eager to apply data querying, schema design and \
            problem-solving skills in an SQL or Python developer role.",
        projects: vec![
            Project {
                title: "Library Management System",
                description: "Normalized MySQL schema with stored procedures for loans, \
                    fines and reservations, fronted by a small Python web app.",
                technologies: "Python, MySQL, SQL",
                link: Some("https://github.com/example/library-db"),
            },
            Project {
                title: "Sales Analytics Dashboard",
                description: "Window-function heavy reporting queries feeding charts \
                    of monthly revenue, cohort retention and top products.",
                technologies: "SQL, Python, Pandas",
                link: Some("https://github.com/example/sales-dashboard"),
            },
            Project {
                title: "Portfolio Chat Assistant",
                description: "Streaming assistant that answers questions about this \
                    portfolio, rendered token by token in the browser.",
                technologies: "Rust, Dioxus, WebAssembly",
                link: None,
            },
            Project {
                title: "Hospital Appointment Scheduler",
                description: "Booking system with conflict detection implemented as \
                    database constraints and triggers.",
                technologies: "PostgreSQL, Django",
                link: Some("https://github.com/example/scheduler"),
            },
            Project {
                title: "Inventory Tracker",
                description: "Stock movement ledger with low-stock alerts and an \
                    audit trail built from append-only tables.",
                technologies: "Python, SQLite",
                link: None,
            },
        ],
        skills: vec![
            Skill { name: "Python", category: SkillCategory::Language },
            Skill { name: "SQL", category: SkillCategory::Language },
            Skill { name: "Rust", category: SkillCategory::Language },
            Skill { name: "Django", category: SkillCategory::Framework },
            Skill { name: "Tailwind CSS", category: SkillCategory::Framework },
            Skill { name: "MySQL", category: SkillCategory::Database },
            Skill { name: "PostgreSQL", category: SkillCategory::Database },
            Skill { name: "Normalization", category: SkillCategory::Concept },
            Skill { name: "Query Optimization", category: SkillCategory::Concept },
        ],
        certificates: vec![
            Certificate {
                title: "Database Foundations",
                issuer: "Oracle Academy",
                year: 2023,
                link: None,
            },
            Certificate {
                title: "Python for Data Science",
                issuer: "IBM",
                year: 2023,
                link: None,
            },
            Certificate {
                title: "SQL (Advanced)",
                issuer: "HackerRank",
                year: 2024,
                link: None,
            },
            Certificate {
                title: "Web Development Bootcamp",
                issuer: "Udemy",
                year: 2024,
                link: None,
            },
        ],
    }
}
