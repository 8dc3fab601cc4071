use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// A portfolio entry shown on a project card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    pub demo_url: &'static str,
    pub source_url: &'static str,
    pub featured: bool,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with real-time inventory, payment processing, and advanced analytics. Built with Next.js, Node.js, and PostgreSQL.",
        tags: &["Next.js", "TypeScript", "Node.js", "PostgreSQL", "Stripe"],
        image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
        demo_url: "#",
        source_url: "#",
        featured: true,
    },
    Project {
        id: 2,
        title: "AI-Powered Dashboard",
        description: "An intelligent dashboard with machine learning insights, predictive analytics, and real-time data visualization. Features custom charts and interactive reports.",
        tags: &["React", "Python", "TensorFlow", "D3.js", "FastAPI"],
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        demo_url: "#",
        source_url: "#",
        featured: true,
    },
    Project {
        id: 3,
        title: "Social Media App",
        description: "A modern social media platform with real-time messaging, story features, and advanced privacy controls. Includes mobile and web applications.",
        tags: &["React Native", "GraphQL", "Node.js", "MongoDB", "Socket.io"],
        image_url: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=600&h=400&fit=crop",
        demo_url: "#",
        source_url: "#",
        featured: false,
    },
    Project {
        id: 4,
        title: "Blockchain Voting System",
        description: "A secure and transparent voting system built on blockchain technology. Features smart contracts, voter verification, and real-time result tracking.",
        tags: &["Solidity", "React", "Web3.js", "IPFS", "Ethereum"],
        image_url: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=600&h=400&fit=crop",
        demo_url: "#",
        source_url: "#",
        featured: false,
    },
    Project {
        id: 5,
        title: "VR Learning Platform",
        description: "An immersive virtual reality educational platform with interactive 3D environments, collaborative spaces, and progress tracking.",
        tags: &["Unity", "C#", "WebGL", "Three.js", "WebXR"],
        image_url: "https://images.unsplash.com/photo-1592478411213-6153e4ebc696?w=600&h=400&fit=crop",
        demo_url: "#",
        source_url: "#",
        featured: true,
    },
    Project {
        id: 6,
        title: "IoT Smart Home Hub",
        description: "A comprehensive smart home management system with device automation, energy monitoring, and AI-powered optimization suggestions.",
        tags: &["IoT", "Python", "MQTT", "React", "Docker"],
        image_url: "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=600&h=400&fit=crop",
        demo_url: "#",
        source_url: "#",
        featured: false,
    },
    Project {
        id: 7,
        title: "E-Commerce MERN App",
        description: "A storefront with cart, checkout and order history on the MERN stack. Payments run through Stripe with webhook-driven order fulfilment.",
        tags: &["MongoDB", "Express.js", "React", "Node.js", "Stripe"],
        image_url: "https://images.unsplash.com/photo-1472851294608-062f824d29cc?w=600&h=400&fit=crop",
        demo_url: "#",
        source_url: "#",
        featured: false,
    },
];

/// Inline SVG placeholder used when a project image fails to load.
pub fn placeholder_image(title: &str) -> String {
    let svg = format!(
        "<svg width='600' height='400' xmlns='http://www.w3.org/2000/svg'>\
         <defs><linearGradient id='g' x1='0%' y1='0%' x2='100%' y2='100%'>\
         <stop offset='0%' stop-color='#8b5cf6'/><stop offset='100%' stop-color='#3b82f6'/>\
         </linearGradient></defs>\
         <rect width='100%' height='100%' fill='url(#g)'/>\
         <text x='50%' y='50%' font-family='Arial' font-size='24' fill='white' text-anchor='middle' dy='.3em'>{}</text>\
         </svg>",
        escape_xml(title)
    );
    format!(
        "data:image/svg+xml;utf8,{}",
        utf8_percent_encode(&svg, NON_ALPHANUMERIC)
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn has_tag_ignores_case_but_not_partial_matches() {
        let social = &PROJECTS[2];
        assert!(social.has_tag("mongodb"));
        assert!(!social.has_tag("React"));
    }

    #[test]
    fn placeholder_escapes_title() {
        let url = placeholder_image("A <b> & 'c'");
        assert!(url.starts_with("data:image/svg+xml;utf8,"));
        assert!(!url.contains('<'));
        assert!(!url.contains('#'));
        assert!(url.contains("%26amp%3B"));
    }

    #[test]
    fn placeholder_is_a_single_url_token() {
        let url = placeholder_image("Ünïcode title");
        let body = url.trim_start_matches("data:image/svg+xml;utf8,");
        assert!(body.is_ascii());
        assert!(!body.contains(' '));
        assert!(!body.contains('\''));
        assert!(body.contains("%C3%9Cn%C3%AFcode%20title"));
    }
}
