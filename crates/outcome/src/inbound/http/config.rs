//! Projection configuration object and helpers.

use std::fmt;

/// Builder-style configuration for the HTTP projection.
///
/// Register it as `web::Data<ProjectionConfig>` app data; responders fall
/// back to [`ProjectionConfig::default`] when none is registered.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use outcome::inbound::http::ProjectionConfig;
///
/// let config = ProjectionConfig::new().with_location_base("/api/v1/widgets");
/// let _app = App::new().app_data(web::Data::new(config));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionConfig {
    location_base: Option<String>,
    expose_fault_detail: bool,
}

impl ProjectionConfig {
    /// Configuration with relative locations and redacted faults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix joined with the created id to form the `Location` header.
    #[must_use]
    pub fn with_location_base(mut self, base: impl Into<String>) -> Self {
        self.location_base = Some(base.into());
        self
    }

    /// Include the fault text in 500 problem responses.
    ///
    /// Off by default so internal details do not leak to clients.
    #[must_use]
    pub const fn with_fault_detail(mut self, expose: bool) -> Self {
        self.expose_fault_detail = expose;
        self
    }

    /// Configured `Location` prefix, if any.
    #[must_use]
    pub fn location_base(&self) -> Option<&str> {
        self.location_base.as_deref()
    }

    /// Whether 500 responses carry the fault text.
    #[must_use]
    pub const fn exposes_fault_detail(&self) -> bool {
        self.expose_fault_detail
    }

    /// Build the `Location` reference for a created id.
    ///
    /// Without a base the id is used as a relative reference.
    ///
    /// # Examples
    /// ```
    /// use outcome::inbound::http::ProjectionConfig;
    ///
    /// assert_eq!(ProjectionConfig::new().location_for(&"7"), "7");
    /// let config = ProjectionConfig::new().with_location_base("/widgets/");
    /// assert_eq!(config.location_for(&"7"), "/widgets/7");
    /// ```
    #[must_use]
    pub fn location_for(&self, id: &dyn fmt::Display) -> String {
        match self.location_base() {
            Some(base) => format!("{}/{id}", base.trim_end_matches('/')),
            None => id.to_string(),
        }
    }
}
