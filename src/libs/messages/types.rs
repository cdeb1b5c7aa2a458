/// Central catalogue of user-facing messages.
///
/// Keeping every message in one enum keeps wording consistent across
/// commands and gives the display layer a single place to format
/// parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === TIMER MESSAGES ===
    TimerStarted(String),
    TimerAlreadyRunning,
    TimerNotRunning,
    TimerStopped { project: String, minutes: i64 },

    // === VALIDATION MESSAGES ===
    ProjectNameRequired,
    NonPositiveDuration,
    MissingDuration,
    InvalidClockTime(String),
    InvalidDate(String),

    // === ENTRY MESSAGES ===
    EntryAdded { project: String, minutes: i64 },
    EntryUpdated(String),
    EntryDeleted(String),
    EntryNotFound(String),
    AmbiguousEntryId(String),
    NoEntriesForView,
    LedgerHeader(String),
    DailyTotalsHeader,
    TotalTime(String),
    NoChangesRequested,

    // === PROJECT MESSAGES ===
    ProjectRegistered(String),
    ProjectAlreadyKnown(String),
    NoProjectsYet,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NoEntriesToExport,

    // === IMPORT MESSAGES ===
    ImportedRows(usize),
    NoValidRows,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptSelectModules,
    ConfigModuleRemote,
    PromptRemoteApiUrl,
    PromptRemoteApiKey,

    // === ACCOUNT MESSAGES ===
    PromptEmail,
    PromptOtpCode,
    OtpRequested(String),
    SignedIn(String),
    SignedOut,
    NotSignedIn,
    RemoteNotConfigured,

    // === SYNC MESSAGES ===
    PulledEntries(usize),
    PushedEntries(usize),
    RemoteUpToDate,
    RemoteMirrorFailed(String),

    // === WATCH MESSAGES ===
    WatchStarted(u64),
    WatchRefreshed(usize),

    // === ADMIN MESSAGES ===
    AdminHeader,
    NoRemoteRows,

    // === DESTRUCTIVE OPERATION MESSAGES ===
    ConfirmDeleteEntry(String),
    ConfirmClearAll,
    LocalDataCleared,
    OperationCancelled,
}
