//! Fixed answer choices of the follow-up questions.

pub const CONSULTATION_HELP_WITH: [&str; 3] = [
    "Understanding general UDAP functionality",
    "Understanding my UDAP environment",
    "Something else",
];

pub const PLATFORM_CHOICES: [&str; 4] = ["ASA", "Databricks", "Prefect", "Snowflake"];

pub const LANGUAGES: [&str; 2] = ["SQL", "Python"];

pub const PRIMARY_FUNCTIONS: [&str; 4] = [
    "Analytics/Reporting",
    "Machine Learning",
    "ETL/ELT",
    "Workflow Orchestration",
];

pub const POOL_ACTIONS: [&str; 2] = ["Create", "Delete"];

pub const SHIR_ACTIONS: [&str; 3] = ["Create", "Delete", "Scale"];

pub const MANAGE_ACCESS: [&str; 3] = ["Dedicated SQL Pool Schema", "Pipeline", "Dataflow"];
