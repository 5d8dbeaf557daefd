#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskCompleted,
    TaskReopened,
    TaskNotFound,
    TaskTitleRequired,
    TasksHeader,
    NoTasksFound,
    SubtaskNotFound,

    // === HABIT MESSAGES ===
    HabitCreated,
    HabitChecked,
    HabitUnchecked,
    HabitNotFound,
    HabitTitleRequired,
    HabitTemplateUnknown(usize),
    HabitsHeader,
    NoHabitsFound,
    AllHabitsDoneToday,

    // === BUDGET MESSAGES ===
    BudgetCreated,
    BudgetDeleted,
    BudgetNotFound,
    BudgetNameRequired,
    BudgetItemAdded,
    BudgetItemNotFound,
    TransactionAdded,
    BudgetsHeader,
    NoBudgetsFound,
    ConfirmDeleteBudget(String),

    // === NOTE MESSAGES ===
    NoteCreated,
    NoteUpdated,
    NoteNotFound,
    NoteTitleRequired,
    NotesHeader,
    NoNotesFound,

    // === UNDO MESSAGES ===
    Deleted(String),
    PromptUndo,
    UndoApplied(String),
    NothingToUndo,

    // === SETTINGS MESSAGES ===
    SettingsSaved,
    ThemeSet(String),
    LanguageSet(String),
    VisitMilestone(i64),

    // === BACKUP MESSAGES ===
    DataExported(String),
    DataImported,
    ImportFailed(String),
    ConfirmResetToDemo,
    ConfirmClearAllData,
    DemoDataRestored,
    AllDataCleared,
    OperationCancelled,

    // === HOME MESSAGES ===
    HomeHeader(String),
    MitsHeader,
    NoMitsForToday,
    RecentActivityHeader,
    NoRecentActivity,

    // === STORAGE MESSAGES ===
    StoreSaveFailed(String, String),
    StoreLoadFailed(String, String),
}
