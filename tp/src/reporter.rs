//! ProgressReporter - fetch an employee and their todos, then summarize

use log::info;

use crate::client::ApiClient;
use crate::config::Config;
use crate::domain::EmployeeId;
use crate::error::ReportError;
use crate::report::ProgressReport;

pub struct ProgressReporter {
    client: ApiClient,
}

impl ProgressReporter {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Build a reporter from configuration
    pub fn from_config(config: &Config) -> Result<Self, ReportError> {
        Ok(Self::new(ApiClient::new(config.base_url.as_str(), config.timeout())?))
    }

    /// Resolve the employee, then their todos, and compute the report.
    ///
    /// The todos request is only issued once the employee lookup has
    /// succeeded; any failure stops the pipeline.
    pub async fn report_progress(&self, employee_id: EmployeeId) -> Result<ProgressReport, ReportError> {
        let employee = self.client.fetch_employee(employee_id).await?;
        info!("Fetched employee {}: {}", employee_id, employee.name);

        let todos = self.client.fetch_todos(employee_id).await?;
        info!("Fetched {} todo(s) for employee {}", todos.len(), employee_id);

        Ok(ProgressReport::new(&employee, &todos))
    }
}
