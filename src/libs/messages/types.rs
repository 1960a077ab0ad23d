/// Every piece of user-facing text agenda prints.
///
/// Rendering lives in [`super::display`]; output goes through the `msg_*` macros.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskRegistered(i64),
    TaskStatusUpdated(i64, String), // id, status
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TaskDeleteRefusedDone(i64),
    TasksHeader,
    TasksWithStatusHeader(String),
    NoTasksFound,
    NoTasksWithStatus(String),
    NoTasksMatchingName(String),
    SearchResults(String),
    ConfirmDeleteTask(i64, String), // id, name
    TaskDetailsHeader(i64),

    // === PROMPTS ===
    PromptTaskName,
    PromptTaskType,
    PromptTaskStart,
    PromptTaskEnd,
    PromptTaskDescription,
    PromptTaskStatus,
    PromptNewStatus,
    PromptSearchTerm,
    PromptDbPath,
    SelectTask,
    SelectStatusFilter,
    SelectAction,

    // === MENU ENTRIES ===
    MenuRegister,
    MenuListAll,
    MenuFilterByStatus,
    MenuSearch,
    MenuChangeStatus,
    MenuDelete,
    MenuQuit,
    FilterAll,

    // === VALIDATION / ERRORS ===
    ValidationFailed(String),
    InvalidDate(String),
    StorageFailed(String),
    OperationCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    DatabaseLocation(String),

    // === MIGRATION MESSAGES ===
    DatabaseUpToDate,
    RunningMigration(u32, String), // version, name
    MigrationFailed(u32, String),  // version, error
}
