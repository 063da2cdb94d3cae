//! Solidarity Tech endpoint catalog.
//!
//! One `const` [`EndpointDescriptor`] per vendor operation, plus the
//! canonical [`ENDPOINTS`] table that profiles filter. Descriptor ids are
//! the vendor operation names.
//!
//! ## Examples
//!
//! ```rust
//! use solidarity_tech::catalog;
//!
//! let endpoint = catalog::find("putUsersId").unwrap();
//! assert_eq!(endpoint.path, "/users/{id}");
//! assert_eq!(catalog::ENDPOINTS.len(), 67);
//! ```

use fetch_core::{EndpointDescriptor, RestMethod, SecurityScheme, ServerDefinition};

/// Production server.
pub const BASE_URL: &str = "https://api.solidarity.tech/v1";

/// Servers published for the API.
pub const SERVERS: &[ServerDefinition] = &[ServerDefinition::new(BASE_URL)];

/// The API authenticates with `Authorization: Bearer <api key>`.
pub const SECURITY: SecurityScheme = SecurityScheme::Bearer { header: None };

pub const GET_ACTIVITIES: EndpointDescriptor =
    EndpointDescriptor::new("getActivities", RestMethod::Get, "/activities")
        .summary("Retrieves all activities")
        .returns("ActivityList");

pub const GET_AGENT_ASSIGNMENTS: EndpointDescriptor =
    EndpointDescriptor::new("getAgentAssignments", RestMethod::Get, "/agent_assignments")
        .summary("Lists agent assignments");

pub const POST_AGENT_ASSIGNMENTS: EndpointDescriptor =
    EndpointDescriptor::new("postAgentAssignments", RestMethod::Post, "/agent_assignments")
        .summary("Creates an agent assignment")
        .description("Creates an agent assignment with the specified details.")
        .json_body();

pub const GET_AGENT_ASSIGNMENTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getAgentAssignmentsId", RestMethod::Get, "/agent_assignments/{id}")
        .summary("Shows a single agent assignment");

pub const PUT_AGENT_ASSIGNMENTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("putAgentAssignmentsId", RestMethod::Put, "/agent_assignments/{id}")
        .summary("Updates an agent assignment")
        .description("Updates an agent assignment with the specified details.")
        .json_body();

pub const DELETE_AGENT_ASSIGNMENTS_ID: EndpointDescriptor = EndpointDescriptor::new(
    "deleteAgentAssignmentsId",
    RestMethod::Delete,
    "/agent_assignments/{id}",
)
.summary("Deletes an agent assignment")
.description("Deletes an agent assignment with the specified ID.");

pub const GET_CALLS: EndpointDescriptor =
    EndpointDescriptor::new("getCalls", RestMethod::Get, "/calls")
        .summary("Retrieves all calls")
        .returns("CallList");

pub const GET_CHAPTER_PHONE_NUMBERS: EndpointDescriptor =
    EndpointDescriptor::new("getChapterPhoneNumbers", RestMethod::Get, "/chapter_phone_numbers")
        .summary("Lists chapter phone numbers");

pub const GET_CHAPTERS: EndpointDescriptor =
    EndpointDescriptor::new("getChapters", RestMethod::Get, "/chapters")
        .summary("Retrieves all chapters")
        .returns("ChapterList");

pub const GET_CUSTOM_USER_PROPERTIES: EndpointDescriptor =
    EndpointDescriptor::new("getCustomUserProperties", RestMethod::Get, "/custom_user_properties")
        .summary("Retrieves all custom user properties")
        .returns("CustomUserPropertyList");

pub const GET_EMAIL_BLASTS: EndpointDescriptor =
    EndpointDescriptor::new("getEmailBlasts", RestMethod::Get, "/email_blasts")
        .summary("Lists email blasts");

pub const GET_EMAIL_BLASTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getEmailBlastsId", RestMethod::Get, "/email_blasts/{id}")
        .summary("Shows a single email blast");

pub const GET_EVENT_ATTENDANCES: EndpointDescriptor =
    EndpointDescriptor::new("getEventAttendances", RestMethod::Get, "/event_attendances")
        .summary("Lists event attendances");

pub const POST_EVENT_ATTENDANCES: EndpointDescriptor =
    EndpointDescriptor::new("postEventAttendances", RestMethod::Post, "/event_attendances")
        .summary("Creates an event attendance")
        .description("Creates an event attendance with the specified details.")
        .json_body();

pub const GET_EVENT_RSVPS: EndpointDescriptor =
    EndpointDescriptor::new("getEventRsvps", RestMethod::Get, "/event_rsvps")
        .summary("Lists event RSVPs");

pub const POST_EVENT_RSVPS: EndpointDescriptor =
    EndpointDescriptor::new("postEventRsvps", RestMethod::Post, "/event_rsvps")
        .summary("Creates an event RSVP")
        .description("Creates an event RSVP with the specified details.")
        .json_body();

pub const GET_EVENT_RSVPS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getEventRsvpsId", RestMethod::Get, "/event_rsvps/{id}")
        .summary("Shows a single event RSVP");

pub const PUT_EVENT_RSVPS_ID: EndpointDescriptor =
    EndpointDescriptor::new("putEventRsvpsId", RestMethod::Put, "/event_rsvps/{id}")
        .summary("Updates an event RSVP")
        .description("Updates an event RSVP with the specified details.")
        .json_body();

pub const DELETE_EVENT_RSVPS_ID: EndpointDescriptor =
    EndpointDescriptor::new("deleteEventRsvpsId", RestMethod::Delete, "/event_rsvps/{id}")
        .summary("Deletes an event RSVP")
        .description("Deletes an event RSVP with the specified ID.");

pub const GET_EVENT_SESSIONS: EndpointDescriptor =
    EndpointDescriptor::new("getEventSessions", RestMethod::Get, "/event_sessions")
        .summary("Lists event sessions");

pub const POST_EVENT_SESSIONS: EndpointDescriptor =
    EndpointDescriptor::new("postEventSessions", RestMethod::Post, "/event_sessions")
        .summary("Creates an event session")
        .description("Creates an event session with the specified details.")
        .json_body();

pub const GET_EVENT_SESSIONS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getEventSessionsId", RestMethod::Get, "/event_sessions/{id}")
        .summary("Shows a single event session");

pub const PUT_EVENT_SESSIONS_ID: EndpointDescriptor =
    EndpointDescriptor::new("putEventSessionsId", RestMethod::Put, "/event_sessions/{id}")
        .summary("Updates an event session")
        .description("Updates an event session with the specified details.")
        .json_body();

pub const DELETE_EVENT_SESSIONS_ID: EndpointDescriptor =
    EndpointDescriptor::new("deleteEventSessionsId", RestMethod::Delete, "/event_sessions/{id}")
        .summary("Deletes an event session")
        .description("Deletes an event session with the specified ID.");

pub const GET_EVENTS: EndpointDescriptor =
    EndpointDescriptor::new("getEvents", RestMethod::Get, "/events")
        .summary("Lists events");

pub const GET_EVENTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getEventsId", RestMethod::Get, "/events/{id}")
        .summary("Shows a single event");

pub const GET_ORGANIZATIONS: EndpointDescriptor =
    EndpointDescriptor::new("getOrganizations", RestMethod::Get, "/organizations")
        .summary("Lists organizations");

pub const GET_ORGANIZATIONS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getOrganizationsId", RestMethod::Get, "/organizations/{id}")
        .summary("Shows a single organization");

pub const GET_PAGES: EndpointDescriptor =
    EndpointDescriptor::new("getPages", RestMethod::Get, "/pages")
        .summary("Lists pages");

pub const GET_PAGES_ID: EndpointDescriptor =
    EndpointDescriptor::new("getPagesId", RestMethod::Get, "/pages/{id}")
        .summary("Shows a single page");

pub const GET_PHONEBANKS: EndpointDescriptor =
    EndpointDescriptor::new("getPhonebanks", RestMethod::Get, "/phonebanks")
        .summary("Lists phonebanks");

pub const GET_PHONEBANKS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getPhonebanksId", RestMethod::Get, "/phonebanks/{id}")
        .summary("Shows a single phonebank");

pub const GET_SCHEDULED_CALLS: EndpointDescriptor =
    EndpointDescriptor::new("getScheduledCalls", RestMethod::Get, "/scheduled_calls")
        .summary("Lists scheduled calls");

pub const GET_SCHEDULED_CALLS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getScheduledCallsId", RestMethod::Get, "/scheduled_calls/{id}")
        .summary("Shows a single scheduled call");

pub const GET_SCHEDULED_TASKS: EndpointDescriptor =
    EndpointDescriptor::new("getScheduledTasks", RestMethod::Get, "/scheduled_tasks")
        .summary("Lists scheduled tasks");

pub const POST_SCHEDULED_TASKS: EndpointDescriptor =
    EndpointDescriptor::new("postScheduledTasks", RestMethod::Post, "/scheduled_tasks")
        .summary("Creates a scheduled task")
        .description("Creates a scheduled task with the specified details.")
        .json_body();

pub const GET_SCHEDULED_TASKS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getScheduledTasksId", RestMethod::Get, "/scheduled_tasks/{id}")
        .summary("Shows a single scheduled task");

pub const PUT_SCHEDULED_TASKS_ID: EndpointDescriptor =
    EndpointDescriptor::new("putScheduledTasksId", RestMethod::Put, "/scheduled_tasks/{id}")
        .summary("Updates a scheduled task")
        .description("Updates a scheduled task with the specified details.")
        .json_body();

pub const DELETE_SCHEDULED_TASKS_ID: EndpointDescriptor =
    EndpointDescriptor::new("deleteScheduledTasksId", RestMethod::Delete, "/scheduled_tasks/{id}")
        .summary("Deletes a scheduled task")
        .description("Deletes a scheduled task with the specified ID.");

pub const GET_TASK_AGENTS: EndpointDescriptor =
    EndpointDescriptor::new("getTaskAgents", RestMethod::Get, "/task_agents")
        .summary("Lists task agents");

pub const POST_TASK_AGENTS: EndpointDescriptor =
    EndpointDescriptor::new("postTaskAgents", RestMethod::Post, "/task_agents")
        .summary("Creates a task agent")
        .description("Creates a task agent with the specified details.")
        .json_body();

pub const GET_TASK_AGENTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getTaskAgentsId", RestMethod::Get, "/task_agents/{id}")
        .summary("Shows a single task agent");

pub const DELETE_TASK_AGENTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("deleteTaskAgentsId", RestMethod::Delete, "/task_agents/{id}")
        .summary("Deletes a task agent")
        .description("Deletes a task agent with the specified ID.");

pub const GET_TASK_ASSIGNMENTS: EndpointDescriptor =
    EndpointDescriptor::new("getTaskAssignments", RestMethod::Get, "/task_assignments")
        .summary("Lists task assignments");

pub const POST_TASK_ASSIGNMENTS: EndpointDescriptor =
    EndpointDescriptor::new("postTaskAssignments", RestMethod::Post, "/task_assignments")
        .summary("Creates a task assignment")
        .description("Creates a task assignment with the specified details.")
        .json_body();

pub const GET_TASK_ASSIGNMENTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getTaskAssignmentsId", RestMethod::Get, "/task_assignments/{id}")
        .summary("Shows a single task assignment");

pub const PUT_TASK_ASSIGNMENTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("putTaskAssignmentsId", RestMethod::Put, "/task_assignments/{id}")
        .summary("Updates a task assignment")
        .description("Updates a task assignment with the specified details.")
        .json_body();

pub const DELETE_TASK_ASSIGNMENTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("deleteTaskAssignmentsId", RestMethod::Delete, "/task_assignments/{id}")
        .summary("Deletes a task assignment")
        .description("Deletes a task assignment with the specified ID.");

pub const GET_TEAM_MEMBERS: EndpointDescriptor =
    EndpointDescriptor::new("getTeamMembers", RestMethod::Get, "/team_members")
        .summary("Lists team members");

pub const GET_TEXT_BLASTS: EndpointDescriptor =
    EndpointDescriptor::new("getTextBlasts", RestMethod::Get, "/text_blasts")
        .summary("Lists text blasts");

pub const GET_TEXT_BLASTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getTextBlastsId", RestMethod::Get, "/text_blasts/{id}")
        .summary("Shows a single text blast");

pub const GET_TEXT_TEMPLATES: EndpointDescriptor =
    EndpointDescriptor::new("getTextTemplates", RestMethod::Get, "/text_templates")
        .summary("Lists text templates");

pub const POST_TEXT_TEMPLATES: EndpointDescriptor =
    EndpointDescriptor::new("postTextTemplates", RestMethod::Post, "/text_templates")
        .summary("Creates a text template")
        .description("Creates a text template with the specified details.")
        .json_body();

pub const GET_TEXT_TEMPLATES_ID: EndpointDescriptor =
    EndpointDescriptor::new("getTextTemplatesId", RestMethod::Get, "/text_templates/{id}")
        .summary("Shows a single text template");

pub const PUT_TEXT_TEMPLATES_ID: EndpointDescriptor =
    EndpointDescriptor::new("putTextTemplatesId", RestMethod::Put, "/text_templates/{id}")
        .summary("Updates a text template")
        .description("Updates a text template with the specified details.")
        .json_body();

pub const DELETE_TEXT_TEMPLATES_ID: EndpointDescriptor =
    EndpointDescriptor::new("deleteTextTemplatesId", RestMethod::Delete, "/text_templates/{id}")
        .summary("Deletes a text template")
        .description("Deletes a text template with the specified ID.");

pub const GET_TEXTBANKS: EndpointDescriptor =
    EndpointDescriptor::new("getTextbanks", RestMethod::Get, "/textbanks")
        .summary("Lists textbanks");

pub const GET_TEXTBANKS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getTextbanksId", RestMethod::Get, "/textbanks/{id}")
        .summary("Shows a single textbank");

pub const POST_TEXTS: EndpointDescriptor =
    EndpointDescriptor::new("postTexts", RestMethod::Post, "/texts")
        .summary("Sends a text message");

pub const GET_TEXTS: EndpointDescriptor =
    EndpointDescriptor::new("getTexts", RestMethod::Get, "/texts")
        .summary("Retrieves a list of texts")
        .returns("TextList");

pub const POST_USER_ACTIONS: EndpointDescriptor =
    EndpointDescriptor::new("postUserActions", RestMethod::Post, "/user_actions")
        .summary("Creates a user action")
        .description(
            "Creates a user action for a user. Note: This endpoint cannot be used for creating actions related to donation pages or scheduled call pages.",
        )
        .json_body();

pub const GET_USER_LISTS: EndpointDescriptor =
    EndpointDescriptor::new("getUserLists", RestMethod::Get, "/user_lists")
        .summary("Lists user lists");

pub const GET_USER_LISTS_ID: EndpointDescriptor =
    EndpointDescriptor::new("getUserListsId", RestMethod::Get, "/user_lists/{id}")
        .summary("Shows a single user list");

pub const POST_USER_NOTES: EndpointDescriptor =
    EndpointDescriptor::new("postUserNotes", RestMethod::Post, "/user_notes")
        .summary("Creates a user note");

pub const POST_USERS: EndpointDescriptor =
    EndpointDescriptor::new("postUsers", RestMethod::Post, "/users")
        .summary("Creates or updates a user")
        .json_body();

pub const GET_USERS: EndpointDescriptor =
    EndpointDescriptor::new("getUsers", RestMethod::Get, "/users")
        .summary("Retrieves a list of users")
        .returns("UserList");

pub const PUT_USERS_ID: EndpointDescriptor =
    EndpointDescriptor::new("putUsersId", RestMethod::Put, "/users/{id}")
        .summary("Updates a user")
        .json_body();

/// Every operation of the API, in vendor order.
pub const ENDPOINTS: &[EndpointDescriptor] = &[
    GET_ACTIVITIES,
    GET_AGENT_ASSIGNMENTS,
    POST_AGENT_ASSIGNMENTS,
    GET_AGENT_ASSIGNMENTS_ID,
    PUT_AGENT_ASSIGNMENTS_ID,
    DELETE_AGENT_ASSIGNMENTS_ID,
    GET_CALLS,
    GET_CHAPTER_PHONE_NUMBERS,
    GET_CHAPTERS,
    GET_CUSTOM_USER_PROPERTIES,
    GET_EMAIL_BLASTS,
    GET_EMAIL_BLASTS_ID,
    GET_EVENT_ATTENDANCES,
    POST_EVENT_ATTENDANCES,
    GET_EVENT_RSVPS,
    POST_EVENT_RSVPS,
    GET_EVENT_RSVPS_ID,
    PUT_EVENT_RSVPS_ID,
    DELETE_EVENT_RSVPS_ID,
    GET_EVENT_SESSIONS,
    POST_EVENT_SESSIONS,
    GET_EVENT_SESSIONS_ID,
    PUT_EVENT_SESSIONS_ID,
    DELETE_EVENT_SESSIONS_ID,
    GET_EVENTS,
    GET_EVENTS_ID,
    GET_ORGANIZATIONS,
    GET_ORGANIZATIONS_ID,
    GET_PAGES,
    GET_PAGES_ID,
    GET_PHONEBANKS,
    GET_PHONEBANKS_ID,
    GET_SCHEDULED_CALLS,
    GET_SCHEDULED_CALLS_ID,
    GET_SCHEDULED_TASKS,
    POST_SCHEDULED_TASKS,
    GET_SCHEDULED_TASKS_ID,
    PUT_SCHEDULED_TASKS_ID,
    DELETE_SCHEDULED_TASKS_ID,
    GET_TASK_AGENTS,
    POST_TASK_AGENTS,
    GET_TASK_AGENTS_ID,
    DELETE_TASK_AGENTS_ID,
    GET_TASK_ASSIGNMENTS,
    POST_TASK_ASSIGNMENTS,
    GET_TASK_ASSIGNMENTS_ID,
    PUT_TASK_ASSIGNMENTS_ID,
    DELETE_TASK_ASSIGNMENTS_ID,
    GET_TEAM_MEMBERS,
    GET_TEXT_BLASTS,
    GET_TEXT_BLASTS_ID,
    GET_TEXT_TEMPLATES,
    POST_TEXT_TEMPLATES,
    GET_TEXT_TEMPLATES_ID,
    PUT_TEXT_TEMPLATES_ID,
    DELETE_TEXT_TEMPLATES_ID,
    GET_TEXTBANKS,
    GET_TEXTBANKS_ID,
    POST_TEXTS,
    GET_TEXTS,
    POST_USER_ACTIONS,
    GET_USER_LISTS,
    GET_USER_LISTS_ID,
    POST_USER_NOTES,
    POST_USERS,
    GET_USERS,
    PUT_USERS_ID,
];

/// Looks up a descriptor by operation id.
pub fn find(id: &str) -> Option<&'static EndpointDescriptor> {
    ENDPOINTS.iter().find(|endpoint| endpoint.id == id)
}
