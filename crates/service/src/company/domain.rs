use models::{company, employee};

use crate::employee::domain::EmployeeInput;

/// A company together with the employees whose `company_id` points at it, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDetails {
    pub company: company::Model,
    pub employees: Vec<employee::Model>,
}

/// Company fields as sent by a caller.
///
/// On creation the nested employees are stored and linked to the new company;
/// as an update patch only `company_name` is considered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyInput {
    pub company_name: Option<String>,
    pub employees: Vec<EmployeeInput>,
}

impl CompanyInput {
    /// Overwrite the stored name when this input carries one.
    pub fn apply_to(self, company: &mut company::Model) {
        if let Some(name) = self.company_name { company.company_name = Some(name); }
    }
}
