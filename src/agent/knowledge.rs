//! Knowledge Base
//!
//! Static, read-only reference data the tools consult: career facts,
//! curricula, cost tables, scholarships and salary uplift figures. Lookups
//! are keyed by exact career name; a miss is reported as `LookupMiss` and the
//! calling tool substitutes the matching `default_*` record.

use crate::error::{AdvisorError, AdvisorResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================
// CAREERS
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerCategory {
    Technology,
    Business,
}

impl CareerCategory {
    /// Keyword routing over free-text interests; `None` means "everything"
    pub fn from_interests(interests: &str) -> Option<Self> {
        let interests = interests.to_lowercase();
        if interests.contains("tech") || interests.contains("programming") {
            Some(CareerCategory::Technology)
        } else if interests.contains("business") || interests.contains("marketing") {
            Some(CareerCategory::Business)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerInfo {
    pub name: String,
    pub category: CareerCategory,
    pub avg_salary: String,
    pub job_growth: String,
    pub required_skills: Vec<String>,
    pub time_to_proficiency: String,
}

impl CareerInfo {
    fn new(
        name: &str,
        category: CareerCategory,
        avg_salary: &str,
        job_growth: &str,
        required_skills: &[&str],
        time_to_proficiency: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            avg_salary: avg_salary.to_string(),
            job_growth: job_growth.to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            time_to_proficiency: time_to_proficiency.to_string(),
        }
    }
}

// ============================================================
// CURRICULA
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub platform: String,
    pub url: String,
    pub rating: String,
    pub price: String,
    pub duration: String,
}

impl Course {
    fn new(
        name: &str,
        platform: &str,
        url: &str,
        rating: &str,
        price: &str,
        duration: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            platform: platform.to_string(),
            url: url.to_string(),
            rating: rating.to_string(),
            price: price.to_string(),
            duration: duration.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub provider: String,
    pub url: String,
    pub price: String,
    pub duration: String,
    pub recognition: String,
}

impl Certification {
    fn new(
        name: &str,
        provider: &str,
        url: &str,
        price: &str,
        duration: &str,
        recognition: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            provider: provider.to_string(),
            url: url.to_string(),
            price: price.to_string(),
            duration: duration.to_string(),
            recognition: recognition.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobBoard {
    pub platform: String,
    pub url: String,
    pub description: String,
}

impl JobBoard {
    fn new(platform: &str, url: &str, description: &str) -> Self {
        Self {
            platform: platform.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        }
    }
}

/// A study resource inside a curriculum phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// "course", "practice", "project"
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl Resource {
    fn linked(kind: &str, name: &str, platform: &str, url: &str) -> Self {
        Self {
            kind: kind.to_string(),
            name: name.to_string(),
            platform: Some(platform.to_string()),
            url: Some(url.to_string()),
            difficulty: None,
        }
    }

    fn project(name: &str, difficulty: &str) -> Self {
        Self {
            kind: "project".to_string(),
            name: name.to_string(),
            platform: None,
            url: None,
            difficulty: Some(difficulty.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub phase: u32,
    pub title: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub resources: Vec<Resource>,
}

impl Phase {
    fn new(
        phase: u32,
        title: &str,
        duration: &str,
        skills: &[&str],
        resources: Vec<Resource>,
    ) -> Self {
        Self {
            phase,
            title: title.to_string(),
            duration: duration.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            resources,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    pub duration: String,
    pub top_courses: Vec<Course>,
    pub top_certifications: Vec<Certification>,
    pub job_search_links: Vec<JobBoard>,
    pub phases: Vec<Phase>,
}

impl Curriculum {
    /// Every skill taught across all phases, in phase order
    pub fn skills(&self) -> Vec<String> {
        self.phases.iter().flat_map(|p| p.skills.iter().cloned()).collect()
    }
}

// ============================================================
// COSTS
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
    pub avg: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostItem {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly: Option<u32>,
}

impl CostItem {
    fn one_time(name: &str, amount: u32, description: &str) -> Self {
        Self::priced(name, description, Some(amount), None, None)
    }

    fn recurring(name: &str, monthly: Option<u32>, yearly: Option<u32>, description: &str) -> Self {
        Self::priced(name, description, None, monthly, yearly)
    }

    fn priced(
        name: &str,
        description: &str,
        one_time: Option<u32>,
        monthly: Option<u32>,
        yearly: Option<u32>,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            one_time,
            monthly,
            yearly,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CostProfile {
    pub total_cost: Option<CostRange>,
    pub duration_months: u32,
    pub subscription_costs: Vec<CostItem>,
    pub certification_costs: Vec<CostItem>,
    pub tool_costs: Vec<CostItem>,
    pub additional_costs: Vec<CostItem>,
    pub payment_plans: Vec<CostItem>,
    pub included_services: Vec<String>,
}

/// Range used when a cost profile carries no total
pub const DEFAULT_TOTAL_COST: CostRange = CostRange {
    min: 100,
    max: 500,
    avg: 250,
};

impl CostProfile {
    pub fn total(&self) -> CostRange {
        self.total_cost.unwrap_or(DEFAULT_TOTAL_COST)
    }

    pub fn duration(&self) -> u32 {
        if self.duration_months == 0 {
            6
        } else {
            self.duration_months
        }
    }
}

// ============================================================
// SCHOLARSHIPS & SALARY UPLIFT
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scholarship {
    pub name: String,
    pub amount: String,
    pub eligibility: String,
    pub deadline: String,
    pub application_link: String,
}

impl Scholarship {
    fn new(
        name: &str,
        amount: &str,
        eligibility: &str,
        deadline: &str,
        application_link: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            amount: amount.to_string(),
            eligibility: eligibility.to_string(),
            deadline: deadline.to_string(),
            application_link: application_link.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryUplift {
    pub range: String,
    pub annual_average: u32,
}

// ============================================================
// KNOWLEDGE BASE
// ============================================================

pub struct KnowledgeBase {
    careers: Vec<CareerInfo>,
    curricula: HashMap<String, Curriculum>,
    costs: HashMap<(String, String), CostProfile>,
    scholarships: HashMap<String, Vec<Scholarship>>,
    uplifts: HashMap<String, SalaryUplift>,
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        let mut costs = HashMap::new();
        for (career, resource, profile) in builtin_costs() {
            costs.insert((career.to_string(), resource.to_string()), profile);
        }

        Self {
            careers: builtin_careers(),
            curricula: builtin_curricula(),
            costs,
            scholarships: builtin_scholarships(),
            uplifts: builtin_uplifts(),
        }
    }

    pub fn careers(&self) -> &[CareerInfo] {
        &self.careers
    }

    pub fn careers_for_interests(&self, interests: &str) -> Vec<&CareerInfo> {
        match CareerCategory::from_interests(interests) {
            Some(category) => self.careers.iter().filter(|c| c.category == category).collect(),
            None => self.careers.iter().collect(),
        }
    }

    pub fn career(&self, name: &str) -> AdvisorResult<&CareerInfo> {
        self.careers
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AdvisorError::lookup_miss("career", name))
    }

    pub fn curriculum(&self, career: &str) -> AdvisorResult<&Curriculum> {
        self.curricula
            .get(career)
            .ok_or_else(|| AdvisorError::lookup_miss("curriculum", career))
    }

    pub fn default_curriculum() -> Curriculum {
        Curriculum {
            duration: "6 months".to_string(),
            top_courses: Vec::new(),
            top_certifications: Vec::new(),
            job_search_links: Vec::new(),
            phases: vec![Phase::new(
                1,
                "Foundation Skills",
                "4 weeks",
                &["Research", "Planning"],
                Vec::new(),
            )],
        }
    }

    pub fn cost_profile(&self, career: &str, resource: &str) -> AdvisorResult<&CostProfile> {
        self.costs
            .get(&(career.to_string(), resource.to_string()))
            .ok_or_else(|| AdvisorError::lookup_miss("cost", &format!("{} / {}", career, resource)))
    }

    pub fn default_cost_profile() -> CostProfile {
        CostProfile {
            total_cost: Some(DEFAULT_TOTAL_COST),
            duration_months: 6,
            ..Default::default()
        }
    }

    pub fn scholarships(&self, career: &str) -> AdvisorResult<&[Scholarship]> {
        self.scholarships
            .get(career)
            .map(|list| list.as_slice())
            .ok_or_else(|| AdvisorError::lookup_miss("scholarship", career))
    }

    pub fn default_scholarships() -> Vec<Scholarship> {
        vec![Scholarship::new(
            "General Career Development Grant",
            "$500 - $2,000",
            "Career changers",
            "Various",
            "Contact local workforce development",
        )]
    }

    pub fn salary_uplift(&self, career: &str) -> AdvisorResult<&SalaryUplift> {
        self.uplifts
            .get(career)
            .ok_or_else(|| AdvisorError::lookup_miss("salary", career))
    }

    pub fn default_salary_uplift() -> SalaryUplift {
        SalaryUplift {
            range: "$15,000 - $35,000".to_string(),
            annual_average: 25_000,
        }
    }
}

fn builtin_careers() -> Vec<CareerInfo> {
    use CareerCategory::{Business, Technology};
    vec![
        CareerInfo::new(
            "Software Developer",
            Technology,
            "$75,000 - $120,000",
            "22% (Much faster than average)",
            &["Programming", "Problem Solving", "Logic"],
            "6-12 months",
        ),
        CareerInfo::new(
            "Data Scientist",
            Technology,
            "$95,000 - $140,000",
            "35% (Much faster than average)",
            &["Statistics", "Python", "Data Analysis"],
            "8-18 months",
        ),
        CareerInfo::new(
            "UX Designer",
            Technology,
            "$65,000 - $110,000",
            "13% (Faster than average)",
            &["Design Thinking", "User Research", "Prototyping"],
            "4-8 months",
        ),
        CareerInfo::new(
            "Digital Marketing",
            Business,
            "$50,000 - $85,000",
            "10% (Faster than average)",
            &["Analytics", "Content Creation", "Strategy"],
            "3-6 months",
        ),
        CareerInfo::new(
            "Product Manager",
            Business,
            "$85,000 - $130,000",
            "15% (Much faster than average)",
            &["Strategy", "Communication", "Analytics"],
            "6-12 months",
        ),
    ]
}

fn builtin_curricula() -> HashMap<String, Curriculum> {
    let mut curricula = HashMap::new();

    curricula.insert(
        "Software Developer".to_string(),
        Curriculum {
            duration: "6-9 months".to_string(),
            top_courses: vec![
                Course::new(
                    "The Complete Web Developer Bootcamp",
                    "Udemy",
                    "https://www.udemy.com/course/the-complete-web-development-bootcamp/",
                    "4.7/5",
                    "$89.99",
                    "65 hours",
                ),
                Course::new(
                    "CS50's Introduction to Computer Science",
                    "Harvard/edX",
                    "https://www.edx.org/course/introduction-computer-science-harvardx-cs50x",
                    "4.8/5",
                    "Free (Certificate: $199)",
                    "10-20 hours/week",
                ),
                Course::new(
                    "Full Stack Open",
                    "University of Helsinki",
                    "https://fullstackopen.com/en/",
                    "4.9/5",
                    "Free",
                    "5-20 hours/week",
                ),
            ],
            top_certifications: vec![
                Certification::new(
                    "AWS Certified Developer Associate",
                    "Amazon Web Services",
                    "https://aws.amazon.com/certification/certified-developer-associate/",
                    "$150 exam fee",
                    "2-3 months prep",
                    "High-demand cloud certification",
                ),
                Certification::new(
                    "freeCodeCamp Full Stack Developer",
                    "freeCodeCamp",
                    "https://www.freecodecamp.org/learn/",
                    "Free",
                    "300+ hours",
                    "Portfolio-based certification",
                ),
            ],
            job_search_links: vec![
                JobBoard::new(
                    "LinkedIn Jobs",
                    "https://www.linkedin.com/jobs/search/?keywords=software%20developer",
                    "Professional network with a large tech job board",
                ),
                JobBoard::new(
                    "AngelList (Wellfound)",
                    "https://wellfound.com/role/r/software-engineer",
                    "Startup jobs with equity opportunities",
                ),
            ],
            phases: vec![
                Phase::new(
                    1,
                    "Programming Fundamentals",
                    "6-8 weeks",
                    &["Variables & Data Types", "Control Structures", "Functions"],
                    vec![
                        Resource::linked(
                            "practice",
                            "HackerRank Python Track",
                            "HackerRank",
                            "https://www.hackerrank.com/domains/python",
                        ),
                        Resource::project("Build a Calculator App", "Beginner"),
                    ],
                ),
                Phase::new(
                    2,
                    "Web Development Basics",
                    "8-10 weeks",
                    &["HTML/CSS", "JavaScript", "Responsive Design"],
                    vec![
                        Resource::linked(
                            "practice",
                            "FreeCodeCamp",
                            "FreeCodeCamp",
                            "https://www.freecodecamp.org/",
                        ),
                        Resource::project("Portfolio Website", "Intermediate"),
                    ],
                ),
                Phase::new(
                    3,
                    "Advanced Development",
                    "10-12 weeks",
                    &["React/Framework", "Databases", "APIs"],
                    vec![
                        Resource::linked(
                            "practice",
                            "LeetCode",
                            "LeetCode",
                            "https://leetcode.com/",
                        ),
                        Resource::project("Full-Stack Web App", "Advanced"),
                    ],
                ),
            ],
        },
    );

    curricula.insert(
        "Data Scientist".to_string(),
        Curriculum {
            duration: "8-12 months".to_string(),
            top_courses: vec![
                Course::new(
                    "IBM Data Science Professional Certificate",
                    "Coursera",
                    "https://www.coursera.org/professional-certificates/ibm-data-science",
                    "4.6/5",
                    "$49/month",
                    "11 courses",
                ),
                Course::new(
                    "Machine Learning Course by Andrew Ng",
                    "Coursera",
                    "https://www.coursera.org/learn/machine-learning",
                    "4.9/5",
                    "$49/month",
                    "11 weeks",
                ),
            ],
            top_certifications: vec![Certification::new(
                "Google Data Analytics Professional Certificate",
                "Google/Coursera",
                "https://www.coursera.org/professional-certificates/google-data-analytics",
                "$49/month",
                "3-6 months",
                "Accepted by many employers as degree equivalent",
            )],
            job_search_links: vec![JobBoard::new(
                "Kaggle Jobs",
                "https://www.kaggle.com/jobs",
                "Data science community job board",
            )],
            phases: vec![Phase::new(
                1,
                "Statistics & Math Foundations",
                "8-10 weeks",
                &["Statistics", "Probability", "Linear Algebra"],
                vec![
                    Resource::linked(
                        "practice",
                        "Khan Academy Statistics",
                        "Khan Academy",
                        "https://www.khanacademy.org/math/statistics-probability",
                    ),
                    Resource::project("Statistical Analysis Report", "Beginner"),
                ],
            )],
        },
    );

    curricula.insert(
        "UX Designer".to_string(),
        Curriculum {
            duration: "4-6 months".to_string(),
            top_courses: vec![Course::new(
                "Google UX Design Professional Certificate",
                "Coursera",
                "https://www.coursera.org/professional-certificates/google-ux-design",
                "4.8/5",
                "$49/month",
                "3-6 months",
            )],
            top_certifications: vec![Certification::new(
                "Nielsen Norman Group UX Certificate",
                "NN/g",
                "https://www.nngroup.com/training/",
                "$6,400 for full program",
                "5 courses",
                "Prestigious UX research certification",
            )],
            job_search_links: vec![JobBoard::new(
                "Dribbble Jobs",
                "https://dribbble.com/jobs",
                "Creative community job board",
            )],
            phases: vec![Phase::new(
                1,
                "Design Fundamentals",
                "4-6 weeks",
                &["Design Thinking", "User Research", "Wireframing"],
                vec![Resource::project("User Research Study", "Beginner")],
            )],
        },
    );

    curricula
}

fn builtin_costs() -> Vec<(&'static str, &'static str, CostProfile)> {
    vec![
        (
            "Software Developer",
            "online courses",
            CostProfile {
                total_cost: Some(CostRange { min: 200, max: 800, avg: 400 }),
                duration_months: 6,
                subscription_costs: vec![
                    CostItem::recurring(
                        "coursera_plus",
                        Some(49),
                        Some(399),
                        "Unlimited access to 7,000+ courses",
                    ),
                    CostItem::recurring(
                        "pluralsight",
                        Some(45),
                        Some(449),
                        "Tech-focused learning platform",
                    ),
                ],
                certification_costs: vec![
                    CostItem::one_time("aws_developer", 150, "AWS Developer Associate exam"),
                    CostItem::one_time("comptia_aplus", 370, "CompTIA A+ certification"),
                ],
                additional_costs: vec![
                    CostItem::one_time("books_resources", 100, "Programming books and resources"),
                    CostItem::recurring(
                        "practice_platforms",
                        Some(35),
                        None,
                        "LeetCode Premium, HackerRank",
                    ),
                ],
                ..Default::default()
            },
        ),
        (
            "Software Developer",
            "bootcamp",
            CostProfile {
                total_cost: Some(CostRange { min: 8000, max: 20000, avg: 12000 }),
                duration_months: 4,
                payment_plans: vec![
                    CostItem::one_time(
                        "upfront",
                        1000,
                        "Discount for paying the full amount upfront",
                    ),
                    CostItem::recurring(
                        "monthly",
                        Some(1000),
                        None,
                        "12-month extended payment plan",
                    ),
                ],
                included_services: vec![
                    "Career coaching and job placement assistance".to_string(),
                    "1-on-1 mentoring sessions".to_string(),
                    "Interview preparation".to_string(),
                ],
                ..Default::default()
            },
        ),
        (
            "Software Developer",
            "university",
            CostProfile {
                total_cost: Some(CostRange { min: 40000, max: 120000, avg: 80000 }),
                duration_months: 48,
                additional_costs: vec![
                    CostItem::recurring(
                        "books_supplies",
                        None,
                        Some(1200),
                        "Textbooks and supplies",
                    ),
                    CostItem::recurring(
                        "living_expenses",
                        Some(1500),
                        None,
                        "Housing, food, transportation",
                    ),
                ],
                ..Default::default()
            },
        ),
        (
            "Data Scientist",
            "online courses",
            CostProfile {
                total_cost: Some(CostRange { min: 300, max: 1200, avg: 600 }),
                duration_months: 8,
                subscription_costs: vec![
                    CostItem::recurring(
                        "coursera_plus",
                        Some(49),
                        Some(399),
                        "IBM & Google Data Science programs",
                    ),
                    CostItem::recurring(
                        "datacamp",
                        Some(35),
                        Some(300),
                        "Data science focused platform",
                    ),
                ],
                certification_costs: vec![CostItem::one_time(
                    "microsoft_azure_data",
                    165,
                    "Azure Data Scientist Associate",
                )],
                tool_costs: vec![CostItem::recurring(
                    "tableau_creator",
                    Some(70),
                    None,
                    "Tableau data visualization tool",
                )],
                ..Default::default()
            },
        ),
        (
            "Data Scientist",
            "bootcamp",
            CostProfile {
                total_cost: Some(CostRange { min: 10000, max: 25000, avg: 15000 }),
                duration_months: 6,
                payment_plans: vec![
                    CostItem::one_time("upfront", 2000, "Early payment discount"),
                    CostItem::recurring("monthly", Some(850), None, "18-month extended payment"),
                ],
                ..Default::default()
            },
        ),
        (
            "UX Designer",
            "online courses",
            CostProfile {
                total_cost: Some(CostRange { min: 150, max: 600, avg: 300 }),
                duration_months: 4,
                subscription_costs: vec![CostItem::recurring(
                    "ixdf_membership",
                    Some(16),
                    Some(144),
                    "Interaction Design Foundation",
                )],
                tool_costs: vec![
                    CostItem::recurring(
                        "figma_pro",
                        Some(12),
                        Some(144),
                        "Design and prototyping tool",
                    ),
                    CostItem::recurring(
                        "adobe_creative_cloud",
                        Some(53),
                        Some(599),
                        "Design software suite",
                    ),
                ],
                certification_costs: vec![CostItem::one_time(
                    "adobe_ace",
                    150,
                    "Adobe Certified Expert",
                )],
                ..Default::default()
            },
        ),
    ]
}

fn builtin_scholarships() -> HashMap<String, Vec<Scholarship>> {
    let mut scholarships = HashMap::new();
    scholarships.insert(
        "Software Developer".to_string(),
        vec![
            Scholarship::new(
                "Google Developer Scholarship",
                "$1,000 - $5,000",
                "Underrepresented groups in tech",
                "Rolling applications",
                "developers.google.com/scholarships",
            ),
            Scholarship::new(
                "Coursera Financial Aid",
                "Up to 100% course cost",
                "Financial need demonstrated",
                "Available year-round",
                "coursera.org/financial-aid",
            ),
        ],
    );
    scholarships.insert(
        "Data Scientist".to_string(),
        vec![Scholarship::new(
            "Kaggle Learn Scholarship",
            "Free courses + $500 credits",
            "Active Kaggle community members",
            "Quarterly",
            "kaggle.com/learn",
        )],
    );
    scholarships
}

fn builtin_uplifts() -> HashMap<String, SalaryUplift> {
    [
        ("Software Developer", "$25,000 - $50,000", 37_500),
        ("Data Scientist", "$30,000 - $60,000", 45_000),
        ("UX Designer", "$20,000 - $40,000", 30_000),
    ]
    .into_iter()
    .map(|(career, range, annual_average)| {
        (
            career.to_string(),
            SalaryUplift {
                range: range.to_string(),
                annual_average,
            },
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_routing() {
        let kb = KnowledgeBase::builtin();
        let tech: Vec<&str> = kb
            .careers_for_interests("Technology")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(tech, vec!["Software Developer", "Data Scientist", "UX Designer"]);

        let business = kb.careers_for_interests("marketing and sales");
        assert!(business.iter().all(|c| c.category == CareerCategory::Business));
        assert_eq!(business.len(), 2);

        assert_eq!(kb.careers_for_interests("cooking").len(), kb.careers().len());
    }

    #[test]
    fn test_lookup_miss_is_reported() {
        let kb = KnowledgeBase::builtin();
        assert!(matches!(
            kb.curriculum("Astronaut"),
            Err(AdvisorError::LookupMiss { kind: "curriculum", .. })
        ));
        assert!(kb.cost_profile("Data Scientist", "university").is_err());
        assert!(kb.scholarships("UX Designer").is_err());
    }

    #[test]
    fn test_lookups_are_exact() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.career("Data Scientist").is_ok());
        assert!(kb.career("data scientist").is_err());
    }

    #[test]
    fn test_defaults() {
        let curriculum = KnowledgeBase::default_curriculum();
        assert_eq!(curriculum.skills(), vec!["Research", "Planning"]);
        assert_eq!(KnowledgeBase::default_cost_profile().total(), DEFAULT_TOTAL_COST);
        assert_eq!(KnowledgeBase::default_scholarships().len(), 1);
        assert_eq!(KnowledgeBase::default_salary_uplift().annual_average, 25_000);
    }

    #[test]
    fn test_curriculum_skills_follow_phase_order() {
        let kb = KnowledgeBase::builtin();
        let skills = kb.curriculum("Software Developer").unwrap().skills();
        assert_eq!(skills.first().map(String::as_str), Some("Variables & Data Types"));
        assert_eq!(skills.last().map(String::as_str), Some("APIs"));
        assert_eq!(skills.len(), 9);
    }
}
