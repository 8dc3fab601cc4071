use super::project::Project;

const FRONTEND_TECH: &[&str] = &["React", "Next.js", "Vue"];
const MOBILE_TECH: &[&str] = &["React Native", "Flutter"];
const BLOCKCHAIN_TECH: &[&str] = &["Solidity", "Web3.js", "Ethereum"];
const AI_TECH: &[&str] = &["TensorFlow", "PyTorch", "AI"];
const MERN_STACK: &[&str] = &["MongoDB", "Express.js", "React", "Node.js"];
const BACKEND_TECH: &[&str] = &[
    "Node.js",
    "Express.js",
    "FastAPI",
    "PostgreSQL",
    "MongoDB",
    "GraphQL",
    "Django",
];

/// Project filter keys offered above the project grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Frontend,
    Fullstack,
    Mobile,
    Blockchain,
    Ai,
    Mern,
    Ecommerce,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Frontend => "frontend",
            Category::Fullstack => "fullstack",
            Category::Mobile => "mobile",
            Category::Blockchain => "blockchain",
            Category::Ai => "ai",
            Category::Mern => "mern",
            Category::Ecommerce => "ecommerce",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Category::All),
            "frontend" => Some(Category::Frontend),
            "fullstack" => Some(Category::Fullstack),
            "mobile" => Some(Category::Mobile),
            "blockchain" => Some(Category::Blockchain),
            "ai" => Some(Category::Ai),
            "mern" => Some(Category::Mern),
            "ecommerce" => Some(Category::Ecommerce),
            _ => None,
        }
    }

    pub fn all() -> Vec<Category> {
        vec![
            Category::All,
            Category::Frontend,
            Category::Fullstack,
            Category::Mobile,
            Category::Blockchain,
            Category::Ai,
            Category::Mern,
            Category::Ecommerce,
        ]
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Frontend => "Frontend",
            Category::Fullstack => "Fullstack",
            Category::Mobile => "Mobile",
            Category::Blockchain => "Blockchain",
            Category::Ai => "AI",
            Category::Mern => "MERN",
            Category::Ecommerce => "E-Commerce",
        }
    }

    /// Whether `project` belongs under this category.
    ///
    /// Every category other than `All` accepts a project whose tags contain
    /// the category key, then ORs in its own composite rule.
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Category::All => true,
            Category::Frontend => keyword_match(project, self.as_str()) || any_tag_contains(project, FRONTEND_TECH),
            Category::Mobile => keyword_match(project, self.as_str()) || any_tag_contains(project, MOBILE_TECH),
            Category::Blockchain => keyword_match(project, self.as_str()) || any_tag_contains(project, BLOCKCHAIN_TECH),
            Category::Ai => keyword_match(project, self.as_str()) || any_tag_contains(project, AI_TECH),
            Category::Mern => {
                keyword_match(project, self.as_str())
                    || MERN_STACK.iter().all(|tech| project.has_tag(tech))
            }
            Category::Fullstack => {
                keyword_match(project, self.as_str())
                    || BACKEND_TECH.iter().any(|tech| project.has_tag(tech))
            }
            Category::Ecommerce => {
                let title = project.title.to_lowercase();
                keyword_match(project, self.as_str())
                    || title.contains("e-commerce")
                    || title.contains("ecommerce")
            }
        }
    }
}

/// Any tag, lowercased, contains `key` (expected lowercase).
pub fn keyword_match(project: &Project, key: &str) -> bool {
    project.tags.iter().any(|tag| tag.to_lowercase().contains(key))
}

fn any_tag_contains(project: &Project, techs: &[&str]) -> bool {
    project
        .tags
        .iter()
        .any(|tag| techs.iter().any(|tech| tag.contains(tech)))
}

/// Projects under `category`, in input order.
pub fn filter_projects<'a, I>(projects: I, category: Category) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    projects
        .into_iter()
        .filter(|project| category.matches(project))
        .collect()
}

/// Filter by a raw key. Unknown keys fall through to the tag keyword rule,
/// which yields nothing when no tag contains the key.
pub fn filter_by_key<'a, I>(projects: I, key: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    match Category::from_str(key) {
        Some(category) => filter_projects(projects, category),
        None => {
            let key = key.to_lowercase();
            projects
                .into_iter()
                .filter(|project| keyword_match(project, &key))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::PROJECTS;

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn all_returns_everything_in_order() {
        let filtered = filter_projects(PROJECTS, Category::All);
        assert_eq!(filtered.len(), PROJECTS.len());
        assert!(filtered.iter().zip(PROJECTS).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn mern_requires_the_whole_stack() {
        let filtered = filter_projects(PROJECTS, Category::Mern);
        assert_eq!(titles(&filtered), vec!["E-Commerce MERN App"]);

        // Node.js and MongoDB but no Express.js
        assert!(!Category::Mern.matches(&PROJECTS[2]));
    }

    #[test]
    fn frontend_matches_react_family_tags() {
        let filtered = filter_projects(PROJECTS, Category::Frontend);
        assert_eq!(
            titles(&filtered),
            vec![
                "E-Commerce Platform",
                "AI-Powered Dashboard",
                "Social Media App",
                "Blockchain Voting System",
                "IoT Smart Home Hub",
                "E-Commerce MERN App",
            ]
        );
    }

    #[test]
    fn fullstack_uses_backend_tags() {
        let filtered = filter_projects(PROJECTS, Category::Fullstack);
        assert_eq!(
            titles(&filtered),
            vec![
                "E-Commerce Platform",
                "AI-Powered Dashboard",
                "Social Media App",
                "E-Commerce MERN App",
            ]
        );
    }

    #[test]
    fn ecommerce_checks_titles() {
        let filtered = filter_projects(PROJECTS, Category::Ecommerce);
        assert_eq!(
            titles(&filtered),
            vec!["E-Commerce Platform", "E-Commerce MERN App"]
        );
    }

    #[test]
    fn narrow_categories() {
        assert_eq!(
            titles(&filter_projects(PROJECTS, Category::Mobile)),
            vec!["Social Media App"]
        );
        assert_eq!(
            titles(&filter_projects(PROJECTS, Category::Blockchain)),
            vec!["Blockchain Voting System"]
        );
        assert_eq!(
            titles(&filter_projects(PROJECTS, Category::Ai)),
            vec!["AI-Powered Dashboard"]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        for category in Category::all() {
            let once = filter_projects(PROJECTS, category);
            let twice = filter_projects(once.iter().copied(), category);
            assert_eq!(once, twice, "{}", category.as_str());
        }
    }

    #[test]
    fn output_is_a_duplicate_free_subset() {
        for category in Category::all() {
            let filtered = filter_projects(PROJECTS, category);
            for (i, project) in filtered.iter().enumerate() {
                assert!(PROJECTS.iter().any(|p| std::ptr::eq(p, *project)));
                assert!(filtered[i + 1..].iter().all(|other| other.id != project.id));
            }
        }
    }

    #[test]
    fn unknown_keys_fall_through_to_tag_keywords() {
        assert!(filter_by_key(PROJECTS, "cobol").is_empty());
        assert_eq!(
            titles(&filter_by_key(PROJECTS, "Python")),
            vec!["AI-Powered Dashboard", "IoT Smart Home Hub"]
        );
        assert_eq!(filter_by_key(PROJECTS, "MERN").len(), 1);
    }

    #[test]
    fn category_keys_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("desktop"), None);
        assert_eq!(Category::default(), Category::All);
    }
}
