//! Fixed catalog of analysis prompts
//!
//! Two-level mapping from (scenario, target) to the natural-language
//! instruction handed to the external CLI. Unknown scenarios and targets
//! degrade to generated generic prompts; lookup never fails.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

type Catalog = BTreeMap<&'static str, BTreeMap<&'static str, &'static str>>;

static ANALYSIS_PROMPTS: Lazy<Catalog> = Lazy::new(|| {
    let table: &[(&'static str, &[(&'static str, &'static str)])] = &[
        (
            "patterns",
            &[
                ("authentication", "Analyze this codebase and identify all authentication and authorization patterns. Focus on login flows, session management, token handling, access control mechanisms, and security policies."),
                ("data-flow", "Analyze data flow and state management patterns throughout the codebase. Identify how data is stored, updated, shared, and propagated across components or modules."),
                ("api-usage", "Catalog all API usage patterns in this application. Include API design, integration patterns, error handling, and how different parts of the system communicate."),
                ("component-structure", "Examine component and module organization patterns. Identify component hierarchies, module boundaries, reusable patterns, and code organization strategies."),
            ],
        ),
        (
            "architecture",
            &[
                ("overview", "Analyze the overall system architecture. Identify the main components, data flow, service boundaries, integration patterns, and key architectural decisions."),
                ("data-architecture", "Examine the data architecture including data models, data access patterns, database schemas, and data transformation processes."),
                ("integration", "Analyze integration patterns with external services, message systems, and communication protocols used throughout the application."),
            ],
        ),
        (
            "quality",
            &[
                ("performance", "Analyze this codebase for potential performance issues. Look for bottlenecks, optimization opportunities, resource usage patterns, and scalability considerations."),
                ("security", "Scan this codebase for potential security vulnerabilities. Look for authentication issues, input validation problems, data protection gaps, and security best practices violations."),
                ("maintainability", "Assess code maintainability by examining code complexity, coupling, cohesion, readability, and adherence to coding standards."),
            ],
        ),
        (
            "review",
            &[
                ("systematic", "Perform a systematic code review. Identify code smells, anti-patterns, technical debt, improvement areas, and adherence to best practices."),
                ("security", "Conduct a security-focused code review. Look for potential security vulnerabilities, data handling issues, and access control weaknesses."),
                ("performance", "Perform a performance-focused code review. Identify performance bottlenecks, optimization opportunities, and resource usage patterns."),
                ("architecture", "Conduct an architecture review. Evaluate architectural decisions, design patterns, service boundaries, and technology choices."),
            ],
        ),
        (
            "audit",
            &[
                ("dependencies", "Analyze all third-party dependencies and libraries. Assess usage patterns, security vulnerabilities, version management, and maintenance considerations."),
                ("testing", "Examine the testing strategy and test coverage. Identify testing patterns, quality gates, and areas that might need more comprehensive testing."),
                ("migration", "Assess migration readiness by evaluating the current technology stack, dependency compatibility, and code health for potential upgrades."),
            ],
        ),
        (
            "features",
            &[
                ("trace", "Trace the implementation of a specific feature throughout the codebase. Show all files involved, data flow, API endpoints, UI components, and how the feature integrates with the rest of the system."),
                ("api-endpoints", "Catalog all API endpoints in this application. Include REST routes, GraphQL resolvers, tRPC procedures, their request/response patterns, authentication requirements, and how they're consumed by the frontend."),
                ("react-hooks", "Analyze this codebase and identify all React hooks usage patterns. Show how useState, useEffect, useContext, and custom hooks are being used. Include examples of best practices and potential issues."),
                ("database-queries", "Find all database query patterns in this codebase. Include SQL queries, ORM usage, connection handling, and any database-related utilities. Show the different approaches used."),
            ],
        ),
        (
            "documentation",
            &[
                ("onboarding", "Analyze this codebase to help create onboarding documentation. Identify key concepts developers need to understand, important files and directories, setup requirements, and the most critical patterns to learn first."),
                ("architecture", "Generate comprehensive architecture documentation. Identify the main components, data flow, service boundaries, key design decisions, and how different parts of the system interact."),
                ("api-reference", "Generate API reference documentation. Document all endpoints, their parameters, responses, authentication requirements, and usage examples."),
            ],
        ),
    ];

    table
        .iter()
        .map(|(scenario, targets)| (*scenario, targets.iter().copied().collect()))
        .collect()
});

/// Resolve the prompt for a (scenario, target) pair.
///
/// Known pairs return the literal catalog string. A known scenario with a
/// missing or unknown target, and an unknown scenario, both fall back to a
/// generated generic prompt naming the scenario. An optional context string
/// is appended verbatim as a trailing clause.
pub fn resolve_prompt(scenario: &str, target: Option<&str>, context: Option<&str>) -> String {
    let mut prompt = match ANALYSIS_PROMPTS.get(scenario) {
        Some(targets) => match target.and_then(|t| targets.get(t)) {
            Some(literal) => (*literal).to_string(),
            None => format!(
                "Perform {scenario} analysis on this codebase. Provide comprehensive insights and identify key patterns."
            ),
        },
        None => format!(
            "Analyze this codebase focusing on {scenario}. Provide comprehensive insights and identify key patterns."
        ),
    };

    if let Some(context) = context {
        prompt = format!("{prompt} Context: {context}");
    }

    prompt
}

/// All scenario names in the catalog, sorted.
pub fn scenarios() -> Vec<&'static str> {
    ANALYSIS_PROMPTS.keys().copied().collect()
}

/// Target names under a scenario, sorted; `None` for unknown scenarios.
pub fn targets(scenario: &str) -> Option<Vec<&'static str>> {
    ANALYSIS_PROMPTS.get(scenario).map(|targets| targets.keys().copied().collect())
}
