use serde::Serialize;
use serde_json::Value;

/// Column order of the destination sheet. The first group defaults to an
/// empty string when a field is absent, the monetary pair defaults to a dash.
const PLAIN_COLUMNS: [&str; 11] = [
    "shop_name",
    "duration",
    "today_available",
    "today_percentage",
    "seven_days_available",
    "seven_days_percentage",
    "one_month_available",
    "one_month_percentage",
    "next_month_available",
    "next_month_percentage",
    "updated_at",
];

const MONETARY_COLUMNS: [&str; 2] = ["cpa", "updated_daily_budget"];

pub const COLUMN_COUNT: usize = PLAIN_COLUMNS.len() + MONETARY_COLUMNS.len();

/// One spreadsheet row: 13 cells in the fixed column order above, carried
/// verbatim from the source record (no type coercion).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row(pub Vec<Value>);

impl Row {
    /// Maps one source record into the fixed column order. Absent and null
    /// fields are substituted with the column's default instead of failing,
    /// so one malformed record never aborts the batch. A record that is not
    /// an object maps to the all-defaults row.
    pub fn from_record(record: &Value) -> Self {
        let mut cells = Vec::with_capacity(COLUMN_COUNT);
        for column in PLAIN_COLUMNS {
            cells.push(cell(record, column, ""));
        }
        for column in MONETARY_COLUMNS {
            cells.push(cell(record, column, "-"));
        }
        Row(cells)
    }
}

fn cell(record: &Value, field: &str, default: &str) -> Value {
    match record.get(field) {
        None | Some(Value::Null) => Value::String(default.to_string()),
        Some(value) => value.clone(),
    }
}

/// Target range plus the ordered row sequence to write there. Produced by
/// the fetcher, consumed exactly once by the updater.
#[derive(Debug, Clone)]
pub struct UpdatePayload {
    pub range: String,
    pub rows: Vec<Row>,
}
