//! Error types and per-operation error mapping for Compass API operations.

use thiserror::Error;

/// Errors that can occur during Compass API operations.
#[derive(Debug, Error)]
pub enum CompassError {
    /// Configuration is missing or incomplete.
    #[error("Compass configuration required: {0}")]
    ConfigMissing(String),

    /// Resource not found. Carries whichever identifier the failing
    /// operation was addressed by.
    #[error("resource not found (rid: {rid:?}, path: {path:?})")]
    ResourceNotFound {
        rid: Option<String>,
        path: Option<String>,
    },

    /// Compass folder not found.
    #[error("compass folder not found (rid: {rid:?})")]
    FolderNotFound { rid: Option<String> },

    /// Marking not found.
    #[error("marking not found")]
    MarkingNotFound,

    /// The rid addressed as a project is not a project.
    #[error("the rid is not a project (rid: {rid:?})")]
    NotProject { rid: Option<String> },

    /// The resource is a service project resource and the provided bearer
    /// token lacks the service-project write operation.
    #[error("forbidden operation on a service project resource")]
    ForbiddenOnServiceProject,

    /// The user lacks the operations required for the request.
    #[error("insufficient permissions for the requested operation")]
    InsufficientPermissions,

    /// The operation is forbidden on autosave resources.
    #[error("the resource is an autosave resource")]
    AutosaveResourceForbidden,

    /// The operation is forbidden on hidden resources.
    #[error("the resource is a hidden resource")]
    ForbiddenOnHiddenResource,

    /// The marking is an organization marking, which can only be applied to
    /// projects, tag categories and collections.
    #[error("marking is an organization marking and cannot be applied to this resource")]
    InvalidMarking,

    /// A caller-supplied string is not a member of its enumerated vocabulary.
    #[error("'{value}' is not a valid option for {field}, valid options are {options:?}")]
    InvalidLiteral {
        value: String,
        field: String,
        options: &'static [&'static str],
    },

    /// A caller-supplied page token is not a decimal offset in the allowed range.
    #[error("invalid page token '{token}': {reason}")]
    InvalidPageToken { token: String, reason: String },

    /// An operation with a single expected success status saw something else.
    #[error("{context} (status {status}, rids: {rids:?})")]
    UnexpectedStatus {
        context: &'static str,
        rids: Vec<String>,
        status: u16,
    },

    /// API request failed without a more specific mapping.
    #[error("Compass API error: {message}")]
    ApiError {
        message: String,
        error_name: Option<String>,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias for Compass operations.
pub type Result<T> = core::result::Result<T, CompassError>;

/// Failure kinds an [`ErrorMap`] can translate a response into.
///
/// Kinds are turned into concrete [`CompassError`] values using the
/// identifier context stored on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ResourceNotFound,
    FolderNotFound,
    MarkingNotFound,
    NotProject,
    ForbiddenOnServiceProject,
    InsufficientPermissions,
    AutosaveResourceForbidden,
    ForbiddenOnHiddenResource,
    InvalidMarking,
}

/// Server error names every operation recognizes, consulted after any
/// operation-specific name mappings.
const DEFAULT_NAME_MAPPING: &[(&str, ErrorKind)] = &[
    (
        "Compass:ForbiddenOperationOnServiceProjectResource",
        ErrorKind::ForbiddenOnServiceProject,
    ),
    (
        "Compass:InsufficientPermissions",
        ErrorKind::InsufficientPermissions,
    ),
    (
        "Compass:AutosaveResourceOperationForbidden",
        ErrorKind::AutosaveResourceForbidden,
    ),
    (
        "Compass:ForbiddenOperationOnHiddenResource",
        ErrorKind::ForbiddenOnHiddenResource,
    ),
    ("Compass:InvalidMarking", ErrorKind::InvalidMarking),
    ("Compass:MarkingNotFound", ErrorKind::MarkingNotFound),
    ("Compass:NotProject", ErrorKind::NotProject),
];

/// Per-operation table from HTTP status codes and server error names to
/// typed failures, plus the identifier context used to build them.
///
/// Status mappings are consulted before the success shortcut, so an
/// operation can declare `204 -> ResourceNotFound` for lookups where the
/// server signals "not found" with an empty success status.
#[derive(Debug, Clone, Default)]
pub struct ErrorMap {
    status: Vec<(u16, ErrorKind)>,
    names: Vec<(&'static str, ErrorKind)>,
    rid: Option<String>,
    path: Option<String>,
    passthrough: bool,
}

impl ErrorMap {
    /// An error map with no operation-specific entries; unrecognized
    /// failures fall back to [`CompassError::ApiError`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable response checking entirely; the caller inspects the raw
    /// status itself (used by the no-content trash endpoints).
    pub fn passthrough() -> Self {
        Self {
            passthrough: true,
            ..Self::default()
        }
    }

    /// Map an HTTP status code to a failure kind.
    #[must_use]
    pub fn status(mut self, code: u16, kind: ErrorKind) -> Self {
        self.status.push((code, kind));
        self
    }

    /// Map a server-reported error name to a failure kind.
    #[must_use]
    pub fn name(mut self, name: &'static str, kind: ErrorKind) -> Self {
        self.names.push((name, kind));
        self
    }

    /// Attach the rid the operation was addressed by, for diagnostics.
    #[must_use]
    pub fn rid(mut self, rid: impl Into<String>) -> Self {
        self.rid = Some(rid.into());
        self
    }

    /// Attach the path the operation was addressed by, for diagnostics.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub(crate) fn is_passthrough(&self) -> bool {
        self.passthrough
    }

    pub(crate) fn kind_for_status(&self, code: u16) -> Option<ErrorKind> {
        self.status
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, k)| *k)
    }

    pub(crate) fn kind_for_name(&self, name: &str) -> Option<ErrorKind> {
        self.names
            .iter()
            .chain(DEFAULT_NAME_MAPPING)
            .find(|(n, _)| *n == name)
            .map(|(_, k)| *k)
    }

    /// Build a concrete error for the kind using the stored context.
    pub(crate) fn build(&self, kind: ErrorKind) -> CompassError {
        match kind {
            ErrorKind::ResourceNotFound => CompassError::ResourceNotFound {
                rid: self.rid.clone(),
                path: self.path.clone(),
            },
            ErrorKind::FolderNotFound => CompassError::FolderNotFound {
                rid: self.rid.clone(),
            },
            ErrorKind::MarkingNotFound => CompassError::MarkingNotFound,
            ErrorKind::NotProject => CompassError::NotProject {
                rid: self.rid.clone(),
            },
            ErrorKind::ForbiddenOnServiceProject => CompassError::ForbiddenOnServiceProject,
            ErrorKind::InsufficientPermissions => CompassError::InsufficientPermissions,
            ErrorKind::AutosaveResourceForbidden => CompassError::AutosaveResourceForbidden,
            ErrorKind::ForbiddenOnHiddenResource => CompassError::ForbiddenOnHiddenResource,
            ErrorKind::InvalidMarking => CompassError::InvalidMarking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_builds_error_with_context() {
        let map = ErrorMap::new()
            .status(204, ErrorKind::ResourceNotFound)
            .rid("ri.compass.main.dataset.abc");

        let kind = map.kind_for_status(204).unwrap();
        let err = map.build(kind);
        assert!(matches!(
            err,
            CompassError::ResourceNotFound { rid: Some(ref r), .. } if r.contains("dataset")
        ));
    }

    #[test]
    fn test_default_name_mapping_available_without_customization() {
        let map = ErrorMap::new();
        assert_eq!(
            map.kind_for_name("Compass:InvalidMarking"),
            Some(ErrorKind::InvalidMarking)
        );
        assert_eq!(map.kind_for_name("Compass:SomethingElse"), None);
    }

    #[test]
    fn test_operation_specific_name_mapping_consulted_first() {
        let map = ErrorMap::new().name("Compass:NotFound", ErrorKind::FolderNotFound);
        assert_eq!(
            map.kind_for_name("Compass:NotFound"),
            Some(ErrorKind::FolderNotFound)
        );
    }
}
