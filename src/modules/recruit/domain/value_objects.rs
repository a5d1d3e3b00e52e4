/// Value objects for the recruit domain
///
/// The enumerated metadata a posting carries. Each enum is exposed to
/// clients as a {value, label, name} triple for select options; the ones
/// stored in dedicated Postgres enum columns also derive DbEnum.
use serde::{Deserialize, Serialize};

/// One selectable option of an enumerated field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumOption {
    pub value: String,
    pub label: String,
    pub name: String,
}

fn option_of(value: &str, label: &str, name: &str) -> EnumOption {
    EnumOption {
        value: value.to_string(),
        label: label.to_string(),
        name: name.to_string(),
    }
}

#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::RecruitPosition"]
#[serde(rename_all = "snake_case")]
pub enum RecruitPosition {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    Ai,
    Designer,
    Pm,
}

impl RecruitPosition {
    pub const ALL: [RecruitPosition; 7] = [
        RecruitPosition::Frontend,
        RecruitPosition::Backend,
        RecruitPosition::Fullstack,
        RecruitPosition::Mobile,
        RecruitPosition::Ai,
        RecruitPosition::Designer,
        RecruitPosition::Pm,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            RecruitPosition::Frontend => "frontend",
            RecruitPosition::Backend => "backend",
            RecruitPosition::Fullstack => "fullstack",
            RecruitPosition::Mobile => "mobile",
            RecruitPosition::Ai => "ai",
            RecruitPosition::Designer => "designer",
            RecruitPosition::Pm => "pm",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecruitPosition::Frontend => "Frontend Developer",
            RecruitPosition::Backend => "Backend Developer",
            RecruitPosition::Fullstack => "Fullstack Developer",
            RecruitPosition::Mobile => "Mobile Developer",
            RecruitPosition::Ai => "AI Engineer",
            RecruitPosition::Designer => "Designer",
            RecruitPosition::Pm => "Product Manager",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecruitPosition::Frontend => "Frontend",
            RecruitPosition::Backend => "Backend",
            RecruitPosition::Fullstack => "Fullstack",
            RecruitPosition::Mobile => "Mobile",
            RecruitPosition::Ai => "Ai",
            RecruitPosition::Designer => "Designer",
            RecruitPosition::Pm => "Pm",
        }
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|p| option_of(p.value(), p.label(), p.name()))
            .collect()
    }
}

#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::RecruitType"]
#[serde(rename_all = "snake_case")]
pub enum RecruitType {
    Project,
    Study,
}

impl RecruitType {
    pub const ALL: [RecruitType; 2] = [RecruitType::Project, RecruitType::Study];

    pub fn value(&self) -> &'static str {
        match self {
            RecruitType::Project => "project",
            RecruitType::Study => "study",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecruitType::Project => "Project",
            RecruitType::Study => "Study Group",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecruitType::Project => "Project",
            RecruitType::Study => "Study",
        }
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|t| option_of(t.value(), t.label(), t.name()))
            .collect()
    }
}

#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::RecruitProgress"]
#[serde(rename_all = "snake_case")]
pub enum RecruitProgress {
    Online,
    Offline,
    Hybrid,
}

impl RecruitProgress {
    pub const ALL: [RecruitProgress; 3] = [
        RecruitProgress::Online,
        RecruitProgress::Offline,
        RecruitProgress::Hybrid,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            RecruitProgress::Online => "online",
            RecruitProgress::Offline => "offline",
            RecruitProgress::Hybrid => "hybrid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecruitProgress::Online => "Online",
            RecruitProgress::Offline => "In Person",
            RecruitProgress::Hybrid => "Hybrid",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecruitProgress::Online => "Online",
            RecruitProgress::Offline => "Offline",
            RecruitProgress::Hybrid => "Hybrid",
        }
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|p| option_of(p.value(), p.label(), p.name()))
            .collect()
    }
}

#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::RecruitContact"]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    OpenChat,
    Email,
    GoogleForm,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::OpenChat,
        ContactMethod::Email,
        ContactMethod::GoogleForm,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ContactMethod::OpenChat => "open_chat",
            ContactMethod::Email => "email",
            ContactMethod::GoogleForm => "google_form",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::OpenChat => "Open Chat",
            ContactMethod::Email => "E-mail",
            ContactMethod::GoogleForm => "Google Form",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContactMethod::OpenChat => "OpenChat",
            ContactMethod::Email => "Email",
            ContactMethod::GoogleForm => "GoogleForm",
        }
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|c| option_of(c.value(), c.label(), c.name()))
            .collect()
    }
}

#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::RecruitDuration"]
#[serde(rename_all = "snake_case")]
pub enum RecruitDuration {
    OneMonth,
    TwoMonths,
    ThreeMonths,
    SixMonths,
    LongTerm,
}

impl RecruitDuration {
    pub const ALL: [RecruitDuration; 5] = [
        RecruitDuration::OneMonth,
        RecruitDuration::TwoMonths,
        RecruitDuration::ThreeMonths,
        RecruitDuration::SixMonths,
        RecruitDuration::LongTerm,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            RecruitDuration::OneMonth => "one_month",
            RecruitDuration::TwoMonths => "two_months",
            RecruitDuration::ThreeMonths => "three_months",
            RecruitDuration::SixMonths => "six_months",
            RecruitDuration::LongTerm => "long_term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecruitDuration::OneMonth => "1 month",
            RecruitDuration::TwoMonths => "2 months",
            RecruitDuration::ThreeMonths => "3 months",
            RecruitDuration::SixMonths => "6 months",
            RecruitDuration::LongTerm => "Long term",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecruitDuration::OneMonth => "OneMonth",
            RecruitDuration::TwoMonths => "TwoMonths",
            RecruitDuration::ThreeMonths => "ThreeMonths",
            RecruitDuration::SixMonths => "SixMonths",
            RecruitDuration::LongTerm => "LongTerm",
        }
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|d| option_of(d.value(), d.label(), d.name()))
            .collect()
    }
}

#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::RecruitHeadcount"]
#[serde(rename_all = "snake_case")]
pub enum RecruitHeadcount {
    One,
    Two,
    Three,
    Four,
    FivePlus,
}

impl RecruitHeadcount {
    pub const ALL: [RecruitHeadcount; 5] = [
        RecruitHeadcount::One,
        RecruitHeadcount::Two,
        RecruitHeadcount::Three,
        RecruitHeadcount::Four,
        RecruitHeadcount::FivePlus,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            RecruitHeadcount::One => "one",
            RecruitHeadcount::Two => "two",
            RecruitHeadcount::Three => "three",
            RecruitHeadcount::Four => "four",
            RecruitHeadcount::FivePlus => "five_plus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecruitHeadcount::One => "1 member",
            RecruitHeadcount::Two => "2 members",
            RecruitHeadcount::Three => "3 members",
            RecruitHeadcount::Four => "4 members",
            RecruitHeadcount::FivePlus => "5+ members",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecruitHeadcount::One => "One",
            RecruitHeadcount::Two => "Two",
            RecruitHeadcount::Three => "Three",
            RecruitHeadcount::Four => "Four",
            RecruitHeadcount::FivePlus => "FivePlus",
        }
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|h| option_of(h.value(), h.label(), h.name()))
            .collect()
    }
}

#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::RecruitStatus"]
#[serde(rename_all = "snake_case")]
pub enum RecruitStatus {
    Open,
    Closed,
}

impl RecruitStatus {
    pub fn toggled(&self) -> RecruitStatus {
        match self {
            RecruitStatus::Open => RecruitStatus::Closed,
            RecruitStatus::Closed => RecruitStatus::Open,
        }
    }
}

impl std::fmt::Display for RecruitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecruitStatus::Open => write!(f, "open"),
            RecruitStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Tech stacks are stored as plain text on the row (new frameworks appear
/// faster than schema migrations); the enum backs the select options and
/// validates incoming drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechStack {
    React,
    Vue,
    Svelte,
    TypeScript,
    JavaScript,
    NodeJs,
    Spring,
    Django,
    Rails,
    Go,
    Rust,
    Kotlin,
    Swift,
    Flutter,
    ReactNative,
    Postgresql,
    Mysql,
    Mongodb,
    Redis,
    Docker,
    Kubernetes,
    Aws,
}

impl TechStack {
    pub const ALL: [TechStack; 22] = [
        TechStack::React,
        TechStack::Vue,
        TechStack::Svelte,
        TechStack::TypeScript,
        TechStack::JavaScript,
        TechStack::NodeJs,
        TechStack::Spring,
        TechStack::Django,
        TechStack::Rails,
        TechStack::Go,
        TechStack::Rust,
        TechStack::Kotlin,
        TechStack::Swift,
        TechStack::Flutter,
        TechStack::ReactNative,
        TechStack::Postgresql,
        TechStack::Mysql,
        TechStack::Mongodb,
        TechStack::Redis,
        TechStack::Docker,
        TechStack::Kubernetes,
        TechStack::Aws,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            TechStack::React => "react",
            TechStack::Vue => "vue",
            TechStack::Svelte => "svelte",
            TechStack::TypeScript => "typescript",
            TechStack::JavaScript => "javascript",
            TechStack::NodeJs => "nodejs",
            TechStack::Spring => "spring",
            TechStack::Django => "django",
            TechStack::Rails => "rails",
            TechStack::Go => "go",
            TechStack::Rust => "rust",
            TechStack::Kotlin => "kotlin",
            TechStack::Swift => "swift",
            TechStack::Flutter => "flutter",
            TechStack::ReactNative => "react_native",
            TechStack::Postgresql => "postgresql",
            TechStack::Mysql => "mysql",
            TechStack::Mongodb => "mongodb",
            TechStack::Redis => "redis",
            TechStack::Docker => "docker",
            TechStack::Kubernetes => "kubernetes",
            TechStack::Aws => "aws",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TechStack::React => "React",
            TechStack::Vue => "Vue",
            TechStack::Svelte => "Svelte",
            TechStack::TypeScript => "TypeScript",
            TechStack::JavaScript => "JavaScript",
            TechStack::NodeJs => "Node.js",
            TechStack::Spring => "Spring",
            TechStack::Django => "Django",
            TechStack::Rails => "Ruby on Rails",
            TechStack::Go => "Go",
            TechStack::Rust => "Rust",
            TechStack::Kotlin => "Kotlin",
            TechStack::Swift => "Swift",
            TechStack::Flutter => "Flutter",
            TechStack::ReactNative => "React Native",
            TechStack::Postgresql => "PostgreSQL",
            TechStack::Mysql => "MySQL",
            TechStack::Mongodb => "MongoDB",
            TechStack::Redis => "Redis",
            TechStack::Docker => "Docker",
            TechStack::Kubernetes => "Kubernetes",
            TechStack::Aws => "AWS",
        }
    }

    pub fn options() -> Vec<EnumOption> {
        Self::ALL
            .iter()
            .map(|s| {
                let name = format!("{:?}", s);
                option_of(s.value(), s.label(), &name)
            })
            .collect()
    }

    pub fn is_known(value: &str) -> bool {
        Self::ALL.iter().any(|s| s.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_options_expose_value_label_name() {
        let options = RecruitPosition::options();
        assert_eq!(options.len(), RecruitPosition::ALL.len());

        let backend = options.iter().find(|o| o.value == "backend").unwrap();
        assert_eq!(backend.label, "Backend Developer");
        assert_eq!(backend.name, "Backend");
    }

    #[test]
    fn status_toggles_both_ways() {
        assert_eq!(RecruitStatus::Open.toggled(), RecruitStatus::Closed);
        assert_eq!(RecruitStatus::Closed.toggled(), RecruitStatus::Open);
    }

    #[test]
    fn tech_stack_membership() {
        assert!(TechStack::is_known("rust"));
        assert!(TechStack::is_known("react_native"));
        assert!(!TechStack::is_known("cobol"));
    }

    #[test]
    fn every_enum_listing_is_nonempty() {
        assert!(!RecruitType::options().is_empty());
        assert!(!RecruitProgress::options().is_empty());
        assert!(!ContactMethod::options().is_empty());
        assert!(!RecruitDuration::options().is_empty());
        assert!(!RecruitHeadcount::options().is_empty());
        assert!(!TechStack::options().is_empty());
    }
}
