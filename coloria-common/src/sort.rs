/// Column the gateway orders the library by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    CreatedAt,
    Prompt,
}

impl SortField {
    /// Backend column name.
    pub fn column(self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::Prompt => "prompt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// User-facing sort choice in the library toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Newest,
        SortOption::Oldest,
        SortOption::NameAsc,
        SortOption::NameDesc,
    ];

    pub fn field_and_direction(self) -> (SortField, SortDirection) {
        match self {
            SortOption::Newest => (SortField::CreatedAt, SortDirection::Desc),
            SortOption::Oldest => (SortField::CreatedAt, SortDirection::Asc),
            SortOption::NameAsc => (SortField::Prompt, SortDirection::Asc),
            SortOption::NameDesc => (SortField::Prompt, SortDirection::Desc),
        }
    }

    /// Stable key used as the `<select>` option value.
    pub fn key(self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::NameAsc => "name_asc",
            SortOption::NameDesc => "name_desc",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOption::Newest => "Newest First",
            SortOption::Oldest => "Oldest First",
            SortOption::NameAsc => "Name (A-Z)",
            SortOption::NameDesc => "Name (Z-A)",
        }
    }
}
