use lims_proto::prelude::{PageResponse, Sorter};

use super::ApiClient;
use crate::models::{patient_sort_param, Department, PatientField, PatientRow};
use crate::utils::error::Result;

const PATIENT_REPORT_PATH: &str = "/api/reports/patients";
const DEPARTMENTS_PATH: &str = "/api/departments";

impl ApiClient {
    /// One page of the patient sample report.
    pub async fn get_patient_report(
        &self,
        page: usize,
        size: usize,
        sorter: Option<Sorter<PatientField>>,
    ) -> Result<PageResponse<PatientRow>> {
        match sorter {
            Some(sorter) => {
                let sort = patient_sort_param(&sorter);
                self.get_page_sorted(PATIENT_REPORT_PATH, page, size, Some(&sort))
                    .await
            }
            None => self.get_page(PATIENT_REPORT_PATH, page, size).await,
        }
    }

    pub async fn get_departments(&self) -> Result<Vec<Department>> {
        self.get_list(DEPARTMENTS_PATH).await
    }
}
