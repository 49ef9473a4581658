use reqwest::StatusCode;

/// The four catalog resources the importer writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Brand,
    Color,
    Formula,
    Polish,
}

impl Resource {
    /// Path suffix joined onto the configured base URL.
    #[must_use]
    pub fn path_suffix(self) -> &'static str {
        match self {
            Resource::Brand => "brands/new",
            Resource::Color => "colors/new",
            Resource::Formula => "formulas/new",
            Resource::Polish => "polish/new",
        }
    }

    /// Whether the endpoint expects an Authorization header.
    ///
    /// The formulas endpoint is called without one. The upstream service
    /// accepts that, and the importer keeps the asymmetry as a documented
    /// quirk rather than guessing at the intended contract.
    #[must_use]
    pub fn requires_auth(self) -> bool {
        !matches!(self, Resource::Formula)
    }

    /// Status the remote API uses to signal a successful insert: 200 for
    /// brands, colors, and formulas; 201 for polish.
    #[must_use]
    pub fn success_status(self) -> StatusCode {
        match self {
            Resource::Polish => StatusCode::CREATED,
            Resource::Brand | Resource::Color | Resource::Formula => StatusCode::OK,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Brand => write!(f, "brand"),
            Resource::Color => write!(f, "color"),
            Resource::Formula => write!(f, "formula"),
            Resource::Polish => write!(f, "polish"),
        }
    }
}
