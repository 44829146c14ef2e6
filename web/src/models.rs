//! Report rows shown by the pages, with their column keys.

use lims_proto::prelude::{Cell, ColumnDescriptor, DetailRecord, RowRecord, Sorter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    Mrn,
    Name,
    Age,
    Ward,
    CollectedAt,
}

impl PatientField {
    /// Field name used by the backend for sorting.
    pub fn wire_name(self) -> &'static str {
        match self {
            PatientField::Mrn => "mrn",
            PatientField::Name => "patientName",
            PatientField::Age => "age",
            PatientField::Ward => "ward",
            PatientField::CollectedAt => "collectedAt",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOrder {
    pub test_name: String,
    pub status: String,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRow {
    pub id: u64,
    pub mrn: String,
    pub patient_name: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub ward: String,
    #[serde(default)]
    pub collected_at: Option<String>,
    #[serde(default)]
    pub tests: Vec<TestOrder>,
}

impl RowRecord for PatientRow {
    type Id = u64;
    type Key = PatientField;

    fn id(&self) -> u64 {
        self.id
    }

    fn cell(&self, key: &PatientField) -> Cell {
        match key {
            PatientField::Mrn => Cell::from(self.mrn.as_str()),
            PatientField::Name => Cell::from(self.patient_name.as_str()),
            PatientField::Age => Cell::from(self.age),
            PatientField::Ward => Cell::from(self.ward.as_str()),
            PatientField::CollectedAt => Cell::from(self.collected_at.clone()),
        }
    }

    fn details(&self) -> Vec<DetailRecord> {
        self.tests
            .iter()
            .map(|test| {
                let mut record = DetailRecord::new(&test.test_name, &test.status);
                if let Some(result) = &test.result {
                    let value = match &test.unit {
                        Some(unit) => format!("{result} {unit}"),
                        None => result.clone(),
                    };
                    record = record.with_field("Result", value);
                }
                record
            })
            .collect()
    }
}

pub fn patient_columns() -> Vec<ColumnDescriptor<PatientField>> {
    vec![
        ColumnDescriptor::new(PatientField::Mrn, "MRN").width(10),
        ColumnDescriptor::new(PatientField::Name, "Patient"),
        ColumnDescriptor::new(PatientField::Age, "Age").width(5),
        ColumnDescriptor::new(PatientField::Ward, "Ward"),
        ColumnDescriptor::new(PatientField::CollectedAt, "Collected"),
    ]
}

/// Translates a typed sorter into the backend's field names.
pub fn patient_sort_param(sorter: &Sorter<PatientField>) -> Sorter {
    Sorter {
        column: sorter.column.wire_name().to_string(),
        direction: sorter.direction,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepartmentField {
    Code,
    Name,
    Head,
    Staff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: u32,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub head_of_department: String,
    #[serde(default)]
    pub staff_count: u32,
}

impl RowRecord for Department {
    type Id = u32;
    type Key = DepartmentField;

    fn id(&self) -> u32 {
        self.id
    }

    fn cell(&self, key: &DepartmentField) -> Cell {
        match key {
            DepartmentField::Code => Cell::from(self.code.as_str()),
            DepartmentField::Name => Cell::from(self.name.as_str()),
            DepartmentField::Head => Cell::from(self.head_of_department.as_str()),
            DepartmentField::Staff => Cell::from(self.staff_count),
        }
    }
}

pub fn department_columns() -> Vec<ColumnDescriptor<DepartmentField>> {
    vec![
        ColumnDescriptor::new(DepartmentField::Code, "Code").width(6),
        ColumnDescriptor::new(DepartmentField::Name, "Department"),
        ColumnDescriptor::new(DepartmentField::Head, "Head"),
        ColumnDescriptor::new(DepartmentField::Staff, "Staff"),
    ]
}
