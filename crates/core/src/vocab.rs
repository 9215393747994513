//! Static choice vocabularies for the onboarding forms.
//!
//! These are configuration data, not validation logic: the wizard only ever
//! checks that a choice was made, while front ends use these lists to render
//! the pickers. Skill tags may additionally be extended with free text via
//! [`SkillSet::add_custom`](crate::skills::SkillSet::add_custom).

/// Suggested skill tags for the student flow.
pub const SKILL_TAGS: &[&str] = &[
    "Web Development",
    "Mobile Development",
    "Data Science",
    "Machine Learning",
    "UI/UX Design",
    "Graphic Design",
    "Product Management",
    "Marketing",
    "Social Media",
    "Content Writing",
    "Business Development",
    "Finance",
    "Sales",
    "Operations",
    "Research",
];

/// Graduation years offered in the student flow.
pub const GRADUATION_YEARS: &[&str] = &["2026", "2027", "2028", "2029", "2030"];

/// Weekly availability options for the student flow.
pub const AVAILABILITY_OPTIONS: &[&str] = &[
    "0-5 hours/week",
    "5-10 hours/week",
    "10-15 hours/week",
    "15-20 hours/week",
    "20+ hours/week",
];

/// Industry choices for the startup flow. Picking [`INDUSTRY_OTHER`]
/// requires a free-text industry description.
pub const INDUSTRY_OPTIONS: &[&str] = &[
    "Software & SaaS",
    "Fintech",
    "Healthtech",
    "Edtech",
    "E-commerce",
    "Climate & Energy",
    "Consumer",
    "Deep Tech",
    "Media & Entertainment",
    INDUSTRY_OTHER,
];

/// Sentinel industry choice that unlocks the free-text industry field.
pub const INDUSTRY_OTHER: &str = "Other";

/// Company size brackets for the startup flow.
pub const COMPANY_SIZE_OPTIONS: &[&str] = &["1-10", "11-50", "51-200", "201-500", "500+"];
