//! Curated word tables: stop words, domain vocabulary, section headers, action verbs,
//! industry and role-context term lists.
//!
//! Everything here is static data. `Lexicon` bundles the tables so the extractor and
//! the calculator can be pointed at smaller fixtures in tests.

use serde::Serialize;

/// A named group of terms (a vocabulary category, an industry, a job context).
#[derive(Debug, Clone, Copy)]
pub struct TermGroup<L: 'static> {
    pub label: L,
    pub terms: &'static [&'static str],
}

/// Industries used for relevance scoring. Serialized as snake_case labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Marketing,
    Education,
    Engineering,
    HumanResources,
    Sales,
}

/// Role archetypes used by the interview-probability context adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobContext {
    Management,
    Technical,
    Creative,
    Analytical,
}

/// The full set of tables consumed by the analysis pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub stop_words: &'static [&'static str],
    pub vocabulary: &'static [TermGroup<&'static str>],
    pub section_headers: &'static [&'static str],
    pub action_verbs: &'static [&'static str],
    pub industries: &'static [TermGroup<Industry>],
    pub contexts: &'static [TermGroup<JobContext>],
    pub seniority_terms: &'static [&'static str],
}

impl Lexicon {
    pub const fn builtin() -> Self {
        Self {
            stop_words: STOP_WORDS,
            vocabulary: VOCABULARY,
            section_headers: SECTION_HEADERS,
            action_verbs: ACTION_VERBS,
            industries: INDUSTRIES,
            contexts: CONTEXTS,
            seniority_terms: SENIORITY_TERMS,
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word)
    }

    /// Vocabulary flattened in category order, first occurrence wins.
    pub fn vocabulary_terms(&self) -> Vec<&'static str> {
        let mut terms: Vec<&'static str> = Vec::new();
        for group in self.vocabulary {
            for &term in group.terms {
                if !terms.contains(&term) {
                    terms.push(term);
                }
            }
        }
        terms
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Common English function words plus job-posting boilerplate.
pub const STOP_WORDS: &[&str] = &[
    // function words
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
    "during", "each", "either", "etc", "every", "few", "for", "from", "further", "had",
    "has", "have", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "like",
    "may", "me", "might", "more", "most", "must", "my", "myself", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "per", "same", "shall", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "upon", "us", "very", "via", "was", "we", "well", "were", "what", "when", "where",
    "whether", "which", "while", "who", "whom", "why", "will", "with", "within",
    "without", "would", "you", "your", "yours", "yourself", "yourselves", "youll",
    "youre", "youve", "weve", "dont",
    // posting boilerplate
    "ability", "able", "across", "apply", "applicant", "applicants", "based", "benefits",
    "candidate", "candidates", "company", "day", "days", "description", "desired",
    "duties", "environment", "equal", "excellent", "experience", "experienced", "good",
    "great", "ideal", "including", "job", "join", "knowledge", "looking", "new",
    "opportunity", "plus", "position", "preferred", "qualifications", "qualified",
    "related", "required", "requirements", "responsibilities", "responsible", "role",
    "salary", "seeking", "skills", "strong", "team", "teams", "using", "want", "work",
    "working", "year", "years",
];

/// Domain vocabulary by category. Terms are stored already normalized (lowercase,
/// no punctuation). Ambiguous abbreviations are spelled out ("human resources", not
/// "hr"); product names such as "rust" or "vue" stay as-is even though they can
/// occur inside longer words.
pub const VOCABULARY: &[TermGroup<&'static str>] = &[
    TermGroup {
        label: "technology",
        terms: &[
            "javascript", "typescript", "python", "java", "golang", "rust", "kotlin",
            "swift", "ruby", "react", "angular", "vue", "nodejs", "django",
            "flask", "spring boot", "graphql", "rest api", "microservices", "docker",
            "kubernetes", "terraform", "aws", "azure", "google cloud", "linux", "sql",
            "postgresql", "mysql", "mongodb", "redis", "kafka", "github", "gitlab",
            "continuous integration", "continuous delivery", "devops", "html", "css",
            "distributed systems", "cloud computing", "software development",
            "unit testing", "version control",
        ],
    },
    TermGroup {
        label: "data_science",
        terms: &[
            "machine learning", "deep learning", "data science", "data analysis",
            "data visualization", "statistics", "tensorflow", "pytorch", "pandas",
            "numpy", "tableau", "power bi", "big data", "spark", "hadoop", "etl",
            "data engineering", "data warehouse", "natural language processing",
            "computer vision", "predictive modeling",
        ],
    },
    TermGroup {
        label: "business",
        terms: &[
            "project management", "product management", "stakeholder management",
            "business analysis", "strategic planning", "operations", "agile", "scrum",
            "kanban", "jira", "budgeting", "forecasting", "process improvement",
            "change management", "vendor management", "business development",
        ],
    },
    TermGroup {
        label: "marketing",
        terms: &[
            "digital marketing", "content marketing", "social media", "seo",
            "search engine optimization", "email marketing", "google analytics",
            "brand management", "market research", "campaign management", "copywriting",
            "lead generation", "marketing automation", "hubspot",
        ],
    },
    TermGroup {
        label: "finance",
        terms: &[
            "financial analysis", "financial modeling", "accounting", "gaap", "auditing",
            "risk management", "investment", "portfolio management", "valuation",
            "accounts payable", "accounts receivable", "financial reporting",
            "return on investment", "compliance", "quickbooks",
        ],
    },
    TermGroup {
        label: "healthcare",
        terms: &[
            "patient care", "clinical", "hipaa", "electronic health records", "nursing",
            "medical terminology", "pharmacy", "healthcare", "diagnosis", "telemedicine",
            "patient safety",
        ],
    },
    TermGroup {
        label: "human_resources",
        terms: &[
            "recruiting", "talent acquisition", "onboarding", "employee relations",
            "performance management", "compensation", "payroll", "workforce planning",
            "human resources", "employee engagement",
        ],
    },
    TermGroup {
        label: "professional",
        terms: &[
            "leadership", "communication", "collaboration", "problem solving",
            "critical thinking", "time management", "customer service", "negotiation",
            "presentation", "mentoring", "cross functional", "attention to detail",
        ],
    },
    TermGroup {
        label: "certifications",
        terms: &[
            "pmp", "cissp", "comptia", "aws certified", "certified scrum master",
            "six sigma", "itil", "cpa", "shrm",
        ],
    },
    TermGroup {
        label: "emerging",
        terms: &[
            "artificial intelligence", "large language models", "generative ai",
            "blockchain", "internet of things", "cybersecurity", "edge computing",
            "robotics", "augmented reality", "quantum computing",
        ],
    },
];

/// Résumé section headers and their common variants.
pub const SECTION_HEADERS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "employment history",
    "work history",
    "education",
    "academic background",
    "skills",
    "technical skills",
    "core competencies",
    "summary",
    "professional summary",
    "profile",
    "objective",
    "projects",
    "certifications",
    "licenses",
    "awards",
    "achievements",
    "publications",
    "volunteer",
];

pub const ACTION_VERBS: &[&str] = &[
    "achieved", "administered", "analyzed", "architected", "automated", "built",
    "collaborated", "coordinated", "created", "decreased", "delivered", "designed",
    "developed", "directed", "drove", "enhanced", "established", "executed",
    "generated", "grew", "implemented", "improved", "increased", "initiated",
    "launched", "led", "managed", "mentored", "negotiated", "optimized", "organized",
    "oversaw", "planned", "produced", "reduced", "resolved", "spearheaded",
    "streamlined", "supervised", "trained",
];

pub const INDUSTRIES: &[TermGroup<Industry>] = &[
    TermGroup {
        label: Industry::Technology,
        terms: &[
            "software", "developer", "engineer", "cloud", "microservices", "database", "frontend",
            "backend", "devops", "programming", "code", "infrastructure", "deployment",
            "architecture", "saas",
        ],
    },
    TermGroup {
        label: Industry::Healthcare,
        terms: &[
            "patient", "clinical", "medical", "health", "hospital", "nurse", "physician",
            "nursing", "treatment", "diagnosis", "pharmacy", "therapy", "hipaa", "clinic",
            "wellness",
        ],
    },
    TermGroup {
        label: Industry::Finance,
        terms: &[
            "financial", "accounting", "investment", "banking", "audit", "taxation", "budget",
            "revenue", "portfolio", "risk", "compliance", "capital", "equity", "trading",
            "ledger",
        ],
    },
    TermGroup {
        label: Industry::Marketing,
        terms: &[
            "marketing", "brand", "campaign", "seo", "content", "social media",
            "advertising", "audience", "engagement", "digital", "analytics",
            "promotion", "market research", "copywriting", "growth",
        ],
    },
    TermGroup {
        label: Industry::Education,
        terms: &[
            "teaching", "curriculum", "student", "classroom", "instruction", "learning",
            "education", "teacher", "lesson", "assessment", "academic", "tutoring",
            "pedagogy", "school", "training",
        ],
    },
    TermGroup {
        label: Industry::Engineering,
        terms: &[
            "mechanical", "electrical", "civil", "design", "autocad", "manufacturing",
            "prototype", "quality", "safety", "testing", "specifications", "materials",
            "systems", "maintenance", "production",
        ],
    },
    TermGroup {
        label: Industry::HumanResources,
        terms: &[
            "recruiting", "hiring", "onboarding", "employee", "benefits", "payroll",
            "talent", "compensation", "human resources", "workforce", "retention", "interview",
            "policy", "relations", "training",
        ],
    },
    TermGroup {
        label: Industry::Sales,
        terms: &[
            "sales", "quota", "pipeline", "prospecting", "client", "customer", "account",
            "revenue", "negotiation", "closing", "crm", "territory", "leads", "upsell",
            "relationship",
        ],
    },
];

pub const CONTEXTS: &[TermGroup<JobContext>] = &[
    TermGroup {
        label: JobContext::Management,
        terms: &[
            "manage", "manager", "lead", "leadership", "team", "strategy", "director",
            "oversee", "budget", "stakeholder",
        ],
    },
    TermGroup {
        label: JobContext::Technical,
        terms: &[
            "develop", "engineer", "code", "software", "technical", "system", "programming",
            "architecture", "debug", "implement",
        ],
    },
    TermGroup {
        label: JobContext::Creative,
        terms: &[
            "design", "creative", "content", "visual", "brand", "storytelling", "writing",
            "illustration", "media", "concept",
        ],
    },
    TermGroup {
        label: JobContext::Analytical,
        terms: &[
            "analyze", "analysis", "data", "research", "metrics", "insights", "report",
            "statistics", "model", "forecast",
        ],
    },
];

/// Seniority and qualification terms compared between job text and résumé.
pub const SENIORITY_TERMS: &[&str] = &[
    "senior",
    "lead",
    "architect",
    "manager",
    "principal",
    "years of experience",
    "bachelor",
    "master",
    "phd",
    "degree",
    "certified",
    "expert",
    "proficient",
    "advanced",
];
