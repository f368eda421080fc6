use crate::core::{FieldPath, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub label: String,
    /// Field path the column reads, sorts and filters on.
    pub accessor: String,
    pub visible: bool,
    pub filterable: bool,
}

impl Column {
    pub fn new(id: &str, label: &str, accessor: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            accessor: accessor.to_string(),
            visible: true,
            filterable: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    pub fn path(&self) -> FieldPath {
        FieldPath::parse(&self.accessor)
    }

    /// Cell text for `record`; empty when the value is absent.
    pub fn cell_text(&self, record: &Record) -> String {
        record.text(&self.path()).unwrap_or_default()
    }
}

pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID", "id"),
        Column::new("name", "Name", "name"),
        Column::new("country", "Country", "country"),
        Column::new("continent", "Continent", "continent"),
        Column::new("province", "Province", "province"),
        Column::new("code", "Code", "code"),
        Column::new("timezone", "Timezone", "timezone"),
        Column::new("latitude", "Latitude", "coordinates.latitude")
            .hidden()
            .not_filterable(),
        Column::new("longitude", "Longitude", "coordinates.longitude")
            .hidden()
            .not_filterable(),
    ]
}
