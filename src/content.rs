//! Everything the page says, embedded at build time.
//!
//! Entries that render as lists carry a `key`, unique within their table.

use std::collections::HashSet;

use chrono::{DateTime, Datelike};

pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub motto: &'static str,
    /// Used when the build timestamp can't be read.
    pub copyright_year: i32,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    first_name: "Vincent Lee",
    last_name: "Marvin",
    headline: "Senior QA Automation Engineer",
    tagline: "Building robust test automation solutions with 4+ years of experience across multiple domains",
    email: "vincentleemarvin@gmail.com",
    motto: "Never ending learning.",
    copyright_year: 2025,
};

pub static ABOUT: [&str; 2] = [
    "I'm a QA Automation Engineer with over 4 years of experience in both manual and automated testing across multiple domains. I specialize in Java, Playwright, Katalon, Postman, and Excel VBA. I'm known for being adaptable, a fast learner, and someone who can bridge technical and business needs.",
    "I enjoy breaking complex tasks into small actionable items, and I'm always curious to learn more, whether it's exploring new tools, watching educational YouTube videos, or reading books.",
];

/// Named icons; the UI layer maps each to its artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Award,
    Briefcase,
    Calendar,
    Close,
    Code,
    Linkedin,
    Mail,
    MessageSquare,
    Moon,
    Sun,
    User,
}

/// Accent colour family shared by badges, dots and headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Purple,
    Pink,
    Blue,
    Green,
    Yellow,
}

impl Tone {
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Purple => "bg-purple-600/20 text-purple-300 border-purple-600/30",
            Self::Pink => "bg-pink-600/20 text-pink-300 border-pink-600/30",
            Self::Blue => "bg-blue-600/20 text-blue-300 border-blue-600/30",
            Self::Green => "bg-green-600/20 text-green-300 border-green-600/30",
            Self::Yellow => "bg-yellow-600/20 text-yellow-300 border-yellow-600/30",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Purple => "text-purple-400",
            Self::Pink => "text-pink-400",
            Self::Blue => "text-blue-400",
            Self::Green => "text-green-400",
            Self::Yellow => "text-yellow-400",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Purple => "bg-purple-400",
            Self::Pink => "bg-pink-400",
            Self::Blue => "bg-blue-400",
            Self::Green => "bg-green-400",
            Self::Yellow => "bg-yellow-400",
        }
    }
}

pub struct Strength {
    pub key: &'static str,
    pub label: &'static str,
}

pub static CORE_STRENGTHS: [Strength; 4] = [
    Strength {
        key: "adaptable",
        label: "Adaptable & Fast Learner",
    },
    Strength {
        key: "bridge",
        label: "Technical & Business Bridge",
    },
    Strength {
        key: "decomposition",
        label: "Complex Task Decomposition",
    },
    Strength {
        key: "learning",
        label: "Continuous Learning Mindset",
    },
];

pub struct SkillGroup {
    pub key: &'static str,
    pub title: &'static str,
    pub glyph: Glyph,
    pub tone: Tone,
    pub skills: &'static [&'static str],
}

pub static SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        key: "programming",
        title: "Programming",
        glyph: Glyph::Code,
        tone: Tone::Purple,
        skills: &["Java", "JavaScript", "Excel VBA"],
    },
    SkillGroup {
        key: "testing",
        title: "Testing Tools",
        glyph: Glyph::Award,
        tone: Tone::Pink,
        skills: &["Playwright", "Katalon", "Cucumber", "Postman"],
    },
    SkillGroup {
        key: "platforms",
        title: "Tools & Platforms",
        glyph: Glyph::Briefcase,
        tone: Tone::Blue,
        skills: &["Git", "Jira", "BrowserStack", "Bitbucket"],
    },
];

pub struct Project {
    pub key: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub summary: &'static str,
    pub tone: Tone,
    pub tags: &'static [&'static str],
}

pub static PROJECTS: [Project; 4] = [
    Project {
        key: "manulife-d2c",
        title: "Manulife D2C Automation",
        organization: "QualityKiosk",
        summary: "Built end-to-end automation for policy data update flows. Managed 150+ test cases within 2 weeks in a small team, significantly improving regression testing efficiency.",
        tone: Tone::Green,
        tags: &["Java", "Playwright", "Cucumber"],
    },
    Project {
        key: "brilife-myaccess",
        title: "BRILife MyAccess & Digiform",
        organization: "QualityKiosk",
        summary: "Designed mobile test automation framework for insurance applications, handling location permissions, notifications, and full regression cycles. Work was presented to the client.",
        tone: Tone::Blue,
        tags: &["Katalon", "BrowserStack", "Mobile Testing"],
    },
    Project {
        key: "jira-aging-macro",
        title: "Jira Aging Macro Tool",
        organization: "QualityKiosk (Freelance Initiative)",
        summary: "Developed a macro to calculate ticket aging from exported Jira CSVs. Included pivot dashboards, export functionality, and a single-button run system, helping reduce manual effort.",
        tone: Tone::Yellow,
        tags: &["Excel VBA", "Automation", "Dashboard"],
    },
    Project {
        key: "manulife-mips",
        title: "Manulife MIPS Automation",
        organization: "QualityKiosk",
        summary: "Led a small team to automate over 150 forms and pages. Improved regression workflows across enterprise insurance applications.",
        tone: Tone::Purple,
        tags: &["Java", "Playwright", "Team Leadership"],
    },
];

pub struct TimelineEntry {
    pub key: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub company: &'static str,
    pub tone: Tone,
    pub highlights: &'static [&'static str],
}

pub static TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        key: "qualitykiosk",
        role: "Senior QA Automation Engineer",
        period: "Sept 2024 – Present",
        company: "QualityKiosk Technologies",
        tone: Tone::Purple,
        highlights: &[
            "Rotated across multiple enterprise insurance projects with high-impact automation results",
            "Designed and maintained end-to-end automation frameworks (web and mobile)",
            "Delivered over 150 automated test cases per project cycle",
            "Collaborated directly with clients and internal teams for execution and delivery",
        ],
    },
    TimelineEntry {
        key: "briix",
        role: "Solo QA Engineer",
        period: "Oct 2022 – Sept 2024",
        company: "BRIix Financial Technology",
        tone: Tone::Pink,
        highlights: &[
            "Sole QA in a fast-paced fintech startup focused on high-end property and villa investments",
            "Ensured stable releases despite rapid feature rollouts",
            "Built regression testing processes and acted as both QA and product quality advocate",
        ],
    },
    TimelineEntry {
        key: "sera",
        role: "QA Tester",
        period: "Nov 2021 – Oct 2022",
        company: "SERA – PT Serasi Autoraya (Astra Group)",
        tone: Tone::Blue,
        highlights: &[
            "Worked in a digital auction platform for vehicles and gadgets",
            "Performed manual testing while learning automation independently",
            "Contributed to QA documentation and helped improve bug-reporting standards",
        ],
    },
];

pub const CTA_HEADING: &str = "Ready to Work Together?";
pub const CTA_BODY: &str = "I'm currently open to new opportunities and freelance projects. Let's discuss how I can help improve your testing processes and automation workflows.";

pub const LINKEDIN_STATUS: &str = "Under maintenance";

/// Year shown in the footer, taken from the build timestamp.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(PROFILE.copyright_year)
}

/// First key that appears more than once, if any.
pub fn duplicate_key<'a, I>(keys: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    keys.into_iter().find(|k| !seen.insert(*k))
}
