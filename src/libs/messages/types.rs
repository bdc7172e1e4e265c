#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    AppTitle,
    TaskCreated(String),  // title
    TaskUpdated(i64),     // id
    TaskDeleted(i64),     // id
    TaskCompleted(i64),   // id
    TaskReopened(i64),    // id
    TaskNotFoundWithId(i64),
    TaskEmpty,
    TasksNotFound,
    TasksLoadFailed,
    TasksSaveFailed(String), // error
    TaskStats {
        total: usize,
        completed: usize,
        pending: usize,
    },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleStorage,
    ConfigModuleRemote,
    ConfigReadFailed(String), // error

    // === REMOTE API MESSAGES ===
    RemoteTasksHeader(String), // api url
    RemoteNoTasks,
    RemoteTaskCreated(String),
    RemoteTaskUpdated(i64),
    RemoteTaskDeleted(i64),
    RemoteRequestFailed(String), // error

    // === PROMPTS ===
    PromptSelectModules,
    PromptStorageKey,
    PromptStorageDbFile,
    PromptRemoteApiUrl,
    PromptRemoteLimit,
}
