//! Page content.
//!
//! Everything the page displays is literal data in this module: roles for
//! the typewriter, timeline entries, skill categories with proficiency
//! percentages, project cards, certifications, and contact rows. The
//! sections in `view` render these arrays declaratively and carry no data
//! of their own.

/// Role titles cycled by the header typewriter.
pub const ROLES: [&str; 4] = [
    "Designing Intelligent Interfaces",
    "Crafting Human-Centered Code",
    "Elevating Experiences Through Engineering",
    "Solving Real-World Problems with Tech",
];

pub const NAME: &str = "Sam Winters";

pub const SUMMARY: &str = "Full-stack developer with hands-on experience in web \
applications and machine learning. Proven track record of building scalable \
services and shipping maintainable code, with a strong interest in \
human-centered design and emerging technologies.";

// =============================================================================
// Contact
// =============================================================================

pub struct ContactRow {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT: [ContactRow; 4] = [
    ContactRow {
        label: "Email",
        value: "sam.winters@example.com",
    },
    ContactRow {
        label: "Phone",
        value: "+1 555 010 7478",
    },
    ContactRow {
        label: "Location",
        value: "Portland, OR",
    },
    ContactRow {
        label: "Status",
        value: "Open to Opportunities",
    },
];

// =============================================================================
// Timeline
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Experience,
    Education,
}

pub struct TimelineEntry {
    pub kind: EntryKind,
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub bullets: &'static [&'static str],
    pub tags: &'static [&'static str],
}

pub const TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        kind: EntryKind::Experience,
        title: "Machine Learning Intern",
        organization: "Northlight Labs",
        period: "2025",
        location: "Remote",
        bullets: &[
            "Developed and shipped machine learning models for business applications",
            "Built data pipelines and integrated model serving into production APIs",
            "Collaborated with cross-functional teams to deliver data-driven features",
        ],
        tags: &["Python", "Machine Learning", "Data Analysis"],
    },
    TimelineEntry {
        kind: EntryKind::Education,
        title: "B.S. in Computer Science",
        organization: "Cascade State University",
        period: "2022 - present",
        location: "Portland, OR",
        bullets: &[
            "Comprehensive study of computer science fundamentals",
            "Focus on software development and distributed systems",
            "Active participation in coding competitions and tech events",
        ],
        tags: &["Data Structures", "Algorithms", "System Design"],
    },
    TimelineEntry {
        kind: EntryKind::Education,
        title: "Math & Physics Track",
        organization: "Riverside Junior College",
        period: "2020 - 2022",
        location: "Salem, OR",
        bullets: &[
            "Focused on mathematics, physics, and chemistry",
            "Built a strong foundation in analytical problem solving",
        ],
        tags: &["Mathematics", "Physics", "Chemistry"],
    },
    TimelineEntry {
        kind: EntryKind::Education,
        title: "Secondary School",
        organization: "Creekview High School",
        period: "2016 - 2020",
        location: "Salem, OR",
        bullets: &[
            "Completed foundational academic education",
            "Strong focus on science and mathematics",
        ],
        tags: &["English", "Science", "Mathematics"],
    },
];

// =============================================================================
// Skills
// =============================================================================

pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0-100.
    pub proficiency: u8,
}

pub struct SkillCategory {
    pub name: &'static str,
    pub items: &'static [Skill],
}

pub const SKILLS: [SkillCategory; 6] = [
    SkillCategory {
        name: "Frontend",
        items: &[
            Skill { name: "HTML", proficiency: 95 },
            Skill { name: "CSS", proficiency: 90 },
            Skill { name: "JavaScript", proficiency: 85 },
            Skill { name: "React", proficiency: 88 },
        ],
    },
    SkillCategory {
        name: "Backend",
        items: &[Skill { name: "Node.js", proficiency: 80 }],
    },
    SkillCategory {
        name: "Database",
        items: &[Skill { name: "SQLite", proficiency: 75 }],
    },
    SkillCategory {
        name: "Programming",
        items: &[Skill { name: "Python", proficiency: 85 }],
    },
    SkillCategory {
        name: "Tools",
        items: &[
            Skill { name: "Git", proficiency: 90 },
            Skill { name: "CI/CD", proficiency: 70 },
        ],
    },
    SkillCategory {
        name: "Others",
        items: &[
            Skill { name: "ML Basics", proficiency: 70 },
            Skill { name: "OpenCV", proficiency: 65 },
        ],
    },
];

// =============================================================================
// Projects
// =============================================================================

pub struct Project {
    pub title: &'static str,
    pub tech: &'static str,
    pub bullets: &'static [&'static str],
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "E-commerce Platform",
        tech: "React, Node.js, SQLite",
        bullets: &[
            "Full-stack storefront with cart, checkout, and order history",
            "Role-based auth and an admin dashboard for inventory",
        ],
    },
    Project {
        title: "Sign Language Detection",
        tech: "Python, OpenCV, MediaPipe",
        bullets: &[
            "Real-time hand landmark tracking from a webcam feed",
            "Classified gestures into letters with a lightweight model",
        ],
    },
    Project {
        title: "Store Rating System",
        tech: "React, Node.js, MongoDB",
        bullets: &[
            "Crowd-sourced ratings with per-store aggregation",
            "Moderation queue and spam filtering for submissions",
        ],
    },
    Project {
        title: "Ticket Booking Clone",
        tech: "React, Node.js, MongoDB",
        bullets: &[
            "Seat selection with live availability updates",
            "Mock payment flow and booking confirmation emails",
        ],
    },
];

// =============================================================================
// Certifications
// =============================================================================

pub struct Certification {
    pub name: &'static str,
    pub provider: &'static str,
}

pub const CERTIFICATIONS: [Certification; 7] = [
    Certification { name: "HTML & CSS", provider: "CCBP" },
    Certification { name: "SQL Database", provider: "CCBP" },
    Certification { name: "Python", provider: "CCBP" },
    Certification { name: "Git & CI/CD", provider: "CCBP" },
    Certification { name: "JavaScript", provider: "CCBP" },
    Certification { name: "Node.js", provider: "CCBP" },
    Certification { name: "React", provider: "CCBP" },
];

// =============================================================================
// Footer links
// =============================================================================

pub struct FooterLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const LINKS: [FooterLink; 2] = [
    FooterLink {
        label: "GitHub",
        url: "https://github.com/samwinters",
    },
    FooterLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/sam-winters",
    },
];
