// ScanShelf - core/columns.rs
//
// What the list view can render for a record: the column set, each column's
// display accessor, and the per-row actions. Accessors live in one static
// table; unknown column ids render as an empty string.

use crate::core::format;
use crate::core::model::{ProfileRecord, SortField};

/// A column of the catalog table.
///
/// Discriminants index `COLUMNS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Selection checkbox; its value is the record's filename.
    Checkbox = 0,
    Name = 1,
    Date = 2,
    Count = 3,
    Filesize = 4,
}

/// Static description of one column.
pub struct ColumnDef {
    pub column: Column,
    pub id: &'static str,
    pub label: &'static str,
    pub sort_field: Option<SortField>,
    render: fn(&ProfileRecord) -> String,
}

fn render_checkbox(r: &ProfileRecord) -> String {
    r.filename().to_string()
}

fn render_name(r: &ProfileRecord) -> String {
    r.display_name().to_string()
}

fn render_date(r: &ProfileRecord) -> String {
    format::format_captured_at(r.captured_at())
}

fn render_count(r: &ProfileRecord) -> String {
    format::format_count(r.request_count())
}

fn render_filesize(r: &ProfileRecord) -> String {
    format::readable_size(r.byte_size())
}

/// The column table, in display order.
pub static COLUMNS: [ColumnDef; 5] = [
    ColumnDef {
        column: Column::Checkbox,
        id: "cb",
        label: "",
        sort_field: None,
        render: render_checkbox,
    },
    ColumnDef {
        column: Column::Name,
        id: "name",
        label: "Name",
        sort_field: Some(SortField::Name),
        render: render_name,
    },
    ColumnDef {
        column: Column::Date,
        id: "date",
        label: "Date",
        sort_field: Some(SortField::Date),
        render: render_date,
    },
    ColumnDef {
        column: Column::Count,
        id: "count",
        label: "Visits",
        sort_field: Some(SortField::Count),
        render: render_count,
    },
    ColumnDef {
        column: Column::Filesize,
        id: "filesize",
        label: "Size",
        sort_field: Some(SortField::Filesize),
        render: render_filesize,
    },
];

impl Column {
    /// All columns in display order.
    pub fn all() -> impl Iterator<Item = Column> {
        COLUMNS.iter().map(|def| def.column)
    }

    /// Columns that can be sorted on (everything except the checkbox).
    pub fn sortable() -> impl Iterator<Item = Column> {
        Self::all().filter(|c| c.sort_field().is_some())
    }

    fn def(&self) -> &'static ColumnDef {
        &COLUMNS[*self as usize]
    }

    /// Identifier used by renderers and requests.
    pub fn id(&self) -> &'static str {
        self.def().id
    }

    /// Header label.
    pub fn label(&self) -> &'static str {
        self.def().label
    }

    /// Sort field this column orders by, if it is sortable.
    pub fn sort_field(&self) -> Option<SortField> {
        self.def().sort_field
    }

    /// Display value of this column for `record`.
    pub fn value(&self, record: &ProfileRecord) -> String {
        (self.def().render)(record)
    }

    /// Look a column up by id.
    pub fn from_id(id: &str) -> Option<Column> {
        COLUMNS.iter().find(|def| def.id == id).map(|def| def.column)
    }
}

/// Display value of column `column_id` for `record`.
///
/// Unknown ids yield an empty string.
pub fn column_value(record: &ProfileRecord, column_id: &str) -> String {
    Column::from_id(column_id)
        .map(|c| c.value(record))
        .unwrap_or_default()
}

// =============================================================================
// Row actions
// =============================================================================

/// Action a renderer offers on a single catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    /// Open this scan's results.
    View,
    /// Resume recording into this scan (handled client-side).
    Continue,
    /// Delete this one scan.
    Delete,
}

impl RowAction {
    /// Returns all variants in display order.
    pub fn all() -> &'static [RowAction] {
        &[RowAction::View, RowAction::Continue, RowAction::Delete]
    }

    pub fn id(&self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Continue => "continue",
            RowAction::Delete => "delete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Continue => "Continue",
            RowAction::Delete => "Delete",
        }
    }

    /// Tooltip text.
    pub fn title(&self) -> &'static str {
        match self {
            RowAction::View => "View the results of this scan",
            RowAction::Continue => "Continue this scan",
            RowAction::Delete => "Delete this scan",
        }
    }
}

/// An action bound to a specific artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundAction<'a> {
    pub action: RowAction,
    /// Filename the action targets.
    pub key: &'a str,
}

/// Row actions for `record`, keyed by its filename.
pub fn row_actions(record: &ProfileRecord) -> Vec<BoundAction<'_>> {
    RowAction::all()
        .iter()
        .map(|&action| BoundAction {
            action,
            key: record.filename(),
        })
        .collect()
}

/// Bulk actions offered for a selection of rows.
pub fn bulk_actions() -> &'static [RowAction] {
    &[RowAction::Delete]
}
