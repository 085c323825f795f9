// task-analytics/src/domain/task_status.rs

/// タスクの状態を表すenum（ストアに保存されているラベルと一対一）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// ストアのラベルからTaskStatusに変換（完全一致、未知の値はNone）
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Todo" => Some(Self::Todo),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}
