//! Keyword-search and pagination query builders
//!
//! List endpoints accept `page`, `perPage`, `sortField`, `sortOrder`, and
//! `keyword` query parameters. These builders turn them into SQL fragments
//! consumed by the domain repositories:
//!
//! - [`SearchFilter`] produces a disjunctive, case-insensitive substring
//!   predicate over an ordered set of columns (`ILIKE` across each field).
//! - [`PageStage`] produces the `ORDER BY … LIMIT … OFFSET …` tail, with
//!   `offset = (page - 1) * perPage`.
//!
//! The keyword is bound as a parameter, never spliced into SQL text, and
//! `LIKE` metacharacters in it are escaped. Sort columns come from a
//! per-endpoint whitelist since identifiers cannot be bound.

use serde::Deserialize;

/// Default page number for list endpoints
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size for list endpoints
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Maximum page size for list endpoints
pub const MAX_PER_PAGE: i64 = 100;

/// Raw list-endpoint query parameters.
///
/// Numeric fields arrive as strings and parse leniently: anything that is
/// not a positive integer falls back to the default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<String>,
    pub keyword: Option<String>,
}

impl ListParams {
    /// Requested page, defaulting to 1, floored at 1.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE)
            .max(1)
    }

    /// Requested page size, defaulting to 10, clamped to 1..=100.
    pub fn per_page(&self) -> i64 {
        self.per_page
            .as_deref()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }
}

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Map a `sortOrder` value: exactly `"asc"` is ascending, anything
    /// else (including absent) is descending.
    pub fn from_order(order: Option<&str>) -> Self {
        match order {
            Some("asc") => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// Escape `LIKE` metacharacters so the keyword only ever matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// A disjunctive case-insensitive substring predicate over a fixed,
/// ordered set of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pattern: String,
    fields: Vec<&'static str>,
}

impl SearchFilter {
    /// Build a filter for `keyword` over `fields`. An empty or
    /// whitespace-only keyword contributes no restriction, so this
    /// returns `None` (match everything).
    pub fn new(keyword: Option<&str>, fields: &[&'static str]) -> Option<Self> {
        let keyword = keyword?.trim();
        if keyword.is_empty() {
            return None;
        }
        Some(Self {
            pattern: format!("%{}%", escape_like(keyword)),
            fields: fields.to_vec(),
        })
    }

    /// The bind value for the single `$n` placeholder used by every arm
    /// of the disjunction.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render the predicate with the given placeholder index, preserving
    /// field order: `(a ILIKE $1 OR b ILIKE $1)`.
    pub fn to_sql(&self, bind: usize) -> String {
        let arms: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("{} ILIKE ${}", f, bind))
            .collect();
        format!("({})", arms.join(" OR "))
    }
}

/// The pagination tail of a list query: sort, skip, and bound the slice.
///
/// Repositories pair this with `COUNT(*) OVER ()` in the select list so the
/// slice and the pre-pagination total come out of one statement snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStage {
    pub offset: i64,
    pub limit: i64,
    pub sort_column: &'static str,
    pub direction: SortDirection,
}

impl PageStage {
    /// Resolve the stage from request parameters.
    ///
    /// `sortable` maps wire field names to columns; a `sortField` not in
    /// the whitelist falls back to `default_column`.
    pub fn new(
        params: &ListParams,
        sortable: &[(&'static str, &'static str)],
        default_column: &'static str,
    ) -> Self {
        let sort_column = params
            .sort_field
            .as_deref()
            .and_then(|requested| {
                sortable
                    .iter()
                    .find(|(wire, _)| *wire == requested)
                    .map(|(_, column)| *column)
            })
            .unwrap_or(default_column);

        Self {
            offset: (params.page() - 1) * params.per_page(),
            limit: params.per_page(),
            sort_column,
            direction: SortDirection::from_order(params.sort_order.as_deref()),
        }
    }

    pub fn to_sql(&self) -> String {
        format!(
            "ORDER BY {} {} LIMIT {} OFFSET {}",
            self.sort_column,
            self.direction.as_sql(),
            self.limit,
            self.offset
        )
    }
}
