//! Toast payload types.

/// Visual variant of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Ordering key: higher priorities are shown and popped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ToastPriority {
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub priority: ToastPriority,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    /// A normal-priority toast.
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            priority: ToastPriority::default(),
            title: title.into(),
            description: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, title)
    }

    /// Errors default to high priority.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title).with_priority(ToastPriority::High)
    }

    /// Set the priority (builder pattern).
    pub fn with_priority(mut self, priority: ToastPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the secondary text (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
