//! Static copy for the hero, about and contact sections.

pub const OWNER_FIRST_NAME: &str = "Alex";
pub const OWNER_LAST_NAME: &str = "Johnson";
pub const TAGLINE: &str = "Creative Developer & Digital Artist";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0..=100
    pub level: u8,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    /// Single glyph shown inside the round badge
    pub glyph: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub static SKILLS: &[Skill] = &[
    Skill { name: "React/Next.js", level: 95, gradient: "from-blue-500 to-cyan-500" },
    Skill { name: "TypeScript", level: 90, gradient: "from-blue-600 to-blue-400" },
    Skill { name: "Node.js", level: 85, gradient: "from-green-500 to-emerald-500" },
    Skill { name: "Python", level: 80, gradient: "from-yellow-500 to-orange-500" },
    Skill { name: "UI/UX Design", level: 88, gradient: "from-purple-500 to-pink-500" },
    Skill { name: "Database Design", level: 82, gradient: "from-indigo-500 to-purple-500" },
];

pub static STATS: &[Stat] = &[
    Stat { value: "50+", label: "Projects" },
    Stat { value: "5+", label: "Years Exp" },
    Stat { value: "30+", label: "Happy Clients" },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", url: "#", glyph: "G", gradient: "from-gray-600 to-gray-800" },
    SocialLink { name: "LinkedIn", url: "#", glyph: "L", gradient: "from-blue-600 to-blue-800" },
    SocialLink { name: "Twitter", url: "#", glyph: "T", gradient: "from-sky-400 to-sky-600" },
    SocialLink { name: "Instagram", url: "#", glyph: "I", gradient: "from-pink-500 to-rose-500" },
];

pub static CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { label: "Email", value: "alex.johnson@example.com", href: Some("mailto:alex.johnson@example.com") },
    ContactDetail { label: "Phone", value: "+1 (555) 123-4567", href: Some("tel:+15551234567") },
    ContactDetail { label: "Location", value: "San Francisco, CA", href: None },
];

/// Width style for a skill bar.
pub fn skill_width(level: u8) -> String {
    format!("width: {}%", level.min(100))
}
