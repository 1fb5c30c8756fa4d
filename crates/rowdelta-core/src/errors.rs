use rowdelta_core_types::RequestId;
use thiserror::Error;

/// Result type alias using RowDeltaError
pub type Result<T> = std::result::Result<T, RowDeltaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidFilter,

    // Change set application
    IndexOutOfRange,
    /// Row count after applying a change set disagrees with the updated snapshot
    UnbalancedChangeSet,

    // Repository
    NotFound,
    AlreadyExists,
    Persistence,

    // Integration
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidFilter => "ERR_INVALID_FILTER",
            ExErrorKind::IndexOutOfRange => "ERR_INDEX_OUT_OF_RANGE",
            ExErrorKind::UnbalancedChangeSet => "ERR_UNBALANCED_CHANGE_SET",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// (operation, entity, row index, request id) needed to debug it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    index: Option<usize>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            index: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (e.g. a post identifier)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add row index context
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for rowdelta operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowDeltaError {
    // ===== Change set application =====
    /// A deleted index does not address a row of the initial snapshot
    #[error("Deleted index {index} out of range for {len} initial rows")]
    DeletedIndexOutOfRange { index: usize, len: usize },

    /// An added index does not address a row of the updated snapshot
    #[error("Added index {index} out of range for {len} updated rows")]
    AddedIndexOutOfRange { index: usize, len: usize },

    /// An insert lands past the end of the rows built so far
    #[error("Cannot insert at row {index}: only {row_count} rows present")]
    InsertPositionOutOfRange { index: usize, row_count: usize },

    /// The change set does not account for the net length difference
    #[error("Change set is unbalanced: expected {expected} rows after update, got {actual}")]
    UnbalancedChangeSet { expected: usize, actual: usize },

    // ===== Repository =====
    #[error("Favorite post not found: {identifier}")]
    PostNotFound { identifier: i64 },

    #[error("Favorite post already saved: {identifier}")]
    DuplicatePost { identifier: i64 },

    #[error("Repository unavailable: {message}")]
    RepositoryUnavailable { message: String },

    // ===== Session =====
    #[error("Invalid filter: {reason}")]
    InvalidFilter { reason: String },

    #[error("Row {index} out of range for {row_count} rows")]
    RowOutOfRange { index: usize, row_count: usize },

    // ===== Serialization =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<RowDeltaError> for ExError {
    fn from(err: RowDeltaError) -> Self {
        match err {
            RowDeltaError::DeletedIndexOutOfRange { index, len } => {
                ExError::new(ExErrorKind::IndexOutOfRange)
                    .with_index(index)
                    .with_message(format!("Deleted index outside {} initial rows", len))
            }

            RowDeltaError::AddedIndexOutOfRange { index, len } => {
                ExError::new(ExErrorKind::IndexOutOfRange)
                    .with_index(index)
                    .with_message(format!("Added index outside {} updated rows", len))
            }

            RowDeltaError::InsertPositionOutOfRange { index, row_count } => {
                ExError::new(ExErrorKind::IndexOutOfRange)
                    .with_index(index)
                    .with_message(format!("Insert past end of {} rows", row_count))
            }

            RowDeltaError::UnbalancedChangeSet { expected, actual } => {
                ExError::new(ExErrorKind::UnbalancedChangeSet).with_message(format!(
                    "Expected {} rows after update, got {}",
                    expected, actual
                ))
            }

            RowDeltaError::PostNotFound { identifier } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(identifier.to_string())
                .with_message("Favorite post not found"),

            RowDeltaError::DuplicatePost { identifier } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(identifier.to_string())
                    .with_message("Favorite post already saved")
            }

            RowDeltaError::RepositoryUnavailable { message } => {
                ExError::new(ExErrorKind::Persistence).with_message(message)
            }

            RowDeltaError::InvalidFilter { reason } => ExError::new(ExErrorKind::InvalidFilter)
                .with_message(format!("Invalid filter: {}", reason)),

            RowDeltaError::RowOutOfRange { index, row_count } => {
                ExError::new(ExErrorKind::IndexOutOfRange)
                    .with_index(index)
                    .with_message(format!("Row outside {} visible rows", row_count))
            }

            RowDeltaError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to RowDeltaError
impl From<serde_json::Error> for RowDeltaError {
    fn from(err: serde_json::Error) -> Self {
        RowDeltaError::Serialization {
            message: err.to_string(),
        }
    }
}
