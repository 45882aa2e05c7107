//! Inert request-flow diagrams for the database design section.
//!
//! These describe the (external, unimplemented) backend: purely illustrative
//! content, rendered from static stage tables. Each diagram is a column of
//! accent panels joined by bouncing arrows whose delays ramp down the column.

use dioxus::prelude::*;

use super::accent::Accent;

/// One panel in a flow column.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FlowStage {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub accent: Accent,
    /// Short descriptive lines under the title
    pub lines: &'static [&'static str],
    /// Pill-shaped tags under the lines
    pub chips: &'static [&'static str],
    /// Monospace block (request/response/SQL samples)
    pub code: Option<&'static str>,
}

impl FlowStage {
    const fn new(title: &'static str, accent: Accent) -> Self {
        Self {
            title,
            subtitle: None,
            accent,
            lines: &[],
            chips: &[],
            code: None,
        }
    }

    const fn subtitle(mut self, subtitle: &'static str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    const fn lines(mut self, lines: &'static [&'static str]) -> Self {
        self.lines = lines;
        self
    }

    const fn chips(mut self, chips: &'static [&'static str]) -> Self {
        self.chips = chips;
        self
    }

    const fn code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }
}

#[component]
fn FlowStagePanel(stage: FlowStage) -> Element {
    rsx! {
        div { class: "flow-stage {stage.accent.class()}",
            h4 { class: "flow-stage-title", "{stage.title}" }
            if let Some(subtitle) = stage.subtitle {
                p { class: "flow-stage-subtitle", "{subtitle}" }
            }
            if !stage.lines.is_empty() {
                div { class: "flow-lines",
                    for line in stage.lines {
                        p { "{line}" }
                    }
                }
            }
            if !stage.chips.is_empty() {
                div { class: "flow-chips",
                    for chip in stage.chips {
                        span { class: "flow-chip", "{chip}" }
                    }
                }
            }
            if let Some(code) = stage.code {
                div { class: "flow-code",
                    pre { "{code}" }
                }
            }
        }
    }
}

/// A column of stages joined by arrows with ramped bounce delays.
#[component]
fn FlowColumn(stages: Vec<FlowStage>) -> Element {
    let last = stages.len().saturating_sub(1);
    rsx! {
        div { class: "flow-diagram",
            for (i, stage) in stages.into_iter().enumerate() {
                FlowStagePanel { stage: stage }
                if i < last {
                    div {
                        class: "flow-arrow",
                        style: "--arrow-delay: {i as f64 * 0.1}s;",
                        "\u{2193}"
                    }
                }
            }
        }
    }
}

// === Frontend request flow ===

const FRONTEND_FLOW: &[FlowStage] = &[
    FlowStage::new("Frontend Request", Accent::Purple).subtitle("(with JWT Token)"),
    FlowStage::new("Security Filter", Accent::Yellow)
        .lines(&["\u{2713} Validate JWT Token", "\u{2713} Check User Role"]),
    FlowStage::new("REST Controller", Accent::Blue).chips(&[
        "AuthController",
        "JobController",
        "ApplicationController",
        "UserController",
    ]),
    FlowStage::new("Service Layer", Accent::Purple)
        .lines(&["\u{2022} Business Logic", "\u{2022} Data Validation"]),
    FlowStage::new("Repository Layer", Accent::Pink)
        .lines(&["\u{2022} JPA Queries", "\u{2022} Database Operations"]),
    FlowStage::new("MySQL Database", Accent::Green)
        .lines(&["Tables:"])
        .chips(&["users", "jobs", "applications", "resumes", "messages"]),
];

/// Request flow from frontend to database with JWT authentication.
#[component]
pub fn FrontendFlowDiagram() -> Element {
    rsx! {
        FlowColumn { stages: FRONTEND_FLOW.to_vec() }
    }
}

// === Backend request lifecycle ===

const BACKEND_FLOW_TOP: &[FlowStage] = &[
    FlowStage::new("Frontend Request", Accent::Purple).code(
        "POST /api/applications\n\
         Headers: Authorization: Bearer <token>\n\
         Body: { jobId: 5, resumeUrl: \"...\", coverLetter: \"...\" }",
    ),
    FlowStage::new("Tomcat Server", Accent::Cyan).lines(&["Port 8080"]),
    FlowStage::new("Security Filter Chain", Accent::Yellow).lines(&[
        "\u{2713} Step 1: CORS Filter - check origin allowed",
        "\u{2713} Step 2: JWT Filter - extract & validate token, load user",
        "\u{2713} Step 3: Authorization - check user role/permissions",
    ]),
];

const BACKEND_FLOW_BOTTOM: &[FlowStage] = &[
    FlowStage::new("Controller Layer", Accent::Blue)
        .lines(&["ApplicationController", "@PostMapping createApplication()"])
        .chips(&["Validate input", "Get user from JWT", "Call service"]),
    FlowStage::new("Service Layer", Accent::Purple)
        .lines(&["ApplicationService - Business Logic"])
        .chips(&[
            "1. Check if already applied",
            "2. Verify job exists",
            "3. Verify job is still open",
            "4. Create application",
        ]),
    FlowStage::new("Repository Layer", Accent::Pink)
        .lines(&["ApplicationRepository"])
        .chips(&["save()", "findById()", "findByStudentId()"]),
    FlowStage::new("JPA/Hibernate", Accent::Orange).lines(&[
        "\u{2022} Convert entity to SQL statement",
        "\u{2022} Manage transaction",
        "\u{2022} Map result back to entity",
    ]),
    FlowStage::new("MySQL Database (Port 3306)", Accent::Green).code(
        "INSERT INTO applications (\n\
         \u{20}\u{20}student_id, job_id, resume_url,\n\
         \u{20}\u{20}cover_letter, status, applied_date\n\
         ) VALUES (\n\
         \u{20}\u{20}3, 5, '...pdf', 'I am...',\n\
         \u{20}\u{20}'PENDING', NOW()\n\
         );\n\n\
         \u{2713} Record inserted\n\
         \u{2713} ID generated: 42",
    ),
];

const BACKEND_RESPONSE: FlowStage = FlowStage::new("HTTP Response to Frontend", Accent::Green)
    .code(
        "Status: 201 Created\n\
         Body: {\n\
         \u{20}\u{20}\"id\": 42,\n\
         \u{20}\u{20}\"studentId\": 3,\n\
         \u{20}\u{20}\"jobId\": 5,\n\
         \u{20}\u{20}\"status\": \"PENDING\",\n\
         \u{20}\u{20}\"appliedDate\": \"2025-11-18...\"\n\
         }",
    );

/// Complete backend request lifecycle, including the token decision split.
#[component]
pub fn BackendFlowDiagram() -> Element {
    rsx! {
        FlowColumn { stages: BACKEND_FLOW_TOP.to_vec() }
        div { class: "flow-diagram",
            div { class: "flow-arrow", "\u{2193}" }
            div { class: "decision-grid",
                div { class: "flow-stage accent-red",
                    h4 { class: "flow-stage-title", "\u{2717} Token Invalid" }
                    p { class: "flow-stage-subtitle", "Return 401 Unauthorized" }
                }
                div { class: "flow-stage accent-green",
                    h4 { class: "flow-stage-title", "\u{2713} Token Valid" }
                    p { class: "flow-stage-subtitle", "Continue to Controller" }
                }
            }
            div { class: "flow-arrow", style: "--arrow-delay: 0.3s;", "\u{2193}" }
        }
        FlowColumn { stages: BACKEND_FLOW_BOTTOM.to_vec() }
        div { class: "flow-note-wrap",
            span { class: "flow-note",
                "\u{2191} Response flows back up through all layers \u{2191}"
            }
        }
        FlowColumn { stages: vec![BACKEND_RESPONSE] }
    }
}

// === Authentication and data retrieval flows ===

const AUTH_LOGIN_FLOW: &[FlowStage] = &[
    FlowStage::new("Login Request", Accent::Purple).code(
        "POST /api/auth/login\n\
         {\n\
         \u{20}\u{20}email: \"john@email.com\",\n\
         \u{20}\u{20}password: \"pass123\"\n\
         }",
    ),
    FlowStage::new("AuthController", Accent::Blue).lines(&["login()"]),
    FlowStage::new("AuthService", Accent::Cyan).lines(&[
        "1. Find user by email",
        "2. Check password with BCrypt",
        "3. If valid, generate JWT",
    ]),
    FlowStage::new("JwtService", Accent::Yellow).lines(&[
        "\u{2022} Create claims",
        "\u{2022} Set expiration (24hrs)",
        "\u{2022} Sign with secret key",
        "\u{2022} Return token string",
    ]),
    FlowStage::new("Auth Response", Accent::Green).code(
        "{\n\
         \u{20}\u{20}\"token\": \"eyJhbGc...\",\n\
         \u{20}\u{20}\"user\": {\n\
         \u{20}\u{20}\u{20}\u{20}\"id\": 3,\n\
         \u{20}\u{20}\u{20}\u{20}\"name\": \"John Doe\",\n\
         \u{20}\u{20}\u{20}\u{20}\"role\": \"STUDENT\"\n\
         \u{20}\u{20}}\n\
         }",
    ),
];

const AUTH_DATA_FLOW: &[FlowStage] = &[
    FlowStage::new("GET Request", Accent::Purple).code(
        "GET /api/jobs?\n\
         \u{20}\u{20}location=NewYork&\n\
         \u{20}\u{20}type=FULL_TIME\n\n\
         Headers: {\n\
         \u{20}\u{20}Authorization: Bearer <TOKEN>\n\
         }",
    ),
    FlowStage::new("Security Filters", Accent::Yellow).lines(&["\u{2713} JWT validated"]),
    FlowStage::new("JobController", Accent::Blue).lines(&[
        "getAllJobs()",
        "\u{2022} Extract query params",
        "\u{2022} Call service",
    ]),
    FlowStage::new("JobService", Accent::Cyan).lines(&[
        "searchJobs()",
        "\u{2022} Build filter criteria",
        "\u{2022} Call repository",
    ]),
    FlowStage::new("JobRepository", Accent::Pink).lines(&["findByLocationAndJobType()"]),
    FlowStage::new("Hibernate/JPA", Accent::Orange).code(
        "SELECT * FROM jobs\n\
         WHERE location = 'NewYork'\n\
         AND job_type = 'FULL_TIME'\n\
         AND status = 'OPEN'",
    ),
    FlowStage::new("MySQL Database", Accent::Green)
        .lines(&["\u{2022} Executes query", "\u{2022} Returns 15 rows"]),
];

/// Side-by-side login and filtered-fetch request flows.
#[component]
pub fn AuthFlowDiagram() -> Element {
    rsx! {
        div { class: "diagram-pair",
            div {
                h4 { class: "diagram-pair-title text-gradient-purple-cyan", "Authentication Flow" }
                p { class: "diagram-pair-subtitle", "User Login Process" }
                FlowColumn { stages: AUTH_LOGIN_FLOW.to_vec() }
            }
            div {
                h4 { class: "diagram-pair-title text-gradient-purple-cyan", "Data Retrieval Flow" }
                p { class: "diagram-pair-subtitle", "Fetching Jobs with Filters" }
                FlowColumn { stages: AUTH_DATA_FLOW.to_vec() }
            }
        }
    }
}

// === Layered request lifecycle ===

const DATABASE_FLOW: &[FlowStage] = &[
    FlowStage::new("Frontend Request", Accent::Purple).subtitle("(with JWT Token)"),
    FlowStage::new("Security Filter", Accent::Cyan)
        .lines(&["\u{2022} Validate JWT Token", "\u{2022} Check User Role"]),
    FlowStage::new("REST Controller", Accent::Pink).lines(&[
        "\u{2022} AuthController",
        "\u{2022} JobController",
        "\u{2022} ApplicationController",
        "\u{2022} UserController",
    ]),
    FlowStage::new("Service Layer", Accent::Purple)
        .lines(&["\u{2022} Business Logic", "\u{2022} Data Validation"]),
    FlowStage::new("Repository Layer", Accent::Cyan)
        .lines(&["\u{2022} JPA Queries", "\u{2022} Database Operations"]),
    FlowStage::new("MySQL Database", Accent::Green)
        .lines(&["Tables:"])
        .chips(&["users", "jobs", "applications", "resumes", "messages"]),
];

/// Complete request lifecycle from frontend to database.
#[component]
pub fn DatabaseFlowDiagram() -> Element {
    rsx! {
        FlowColumn { stages: DATABASE_FLOW.to_vec() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_tables_are_well_formed() {
        for flow in [FRONTEND_FLOW, BACKEND_FLOW_TOP, BACKEND_FLOW_BOTTOM, AUTH_LOGIN_FLOW, AUTH_DATA_FLOW, DATABASE_FLOW] {
            assert!(!flow.is_empty());
            for stage in flow {
                assert!(!stage.title.is_empty());
            }
        }
    }

    #[test]
    fn frontend_and_database_flows_end_at_mysql() {
        assert!(FRONTEND_FLOW.last().unwrap().title.contains("MySQL"));
        assert!(DATABASE_FLOW.last().unwrap().title.contains("MySQL"));
    }
}
