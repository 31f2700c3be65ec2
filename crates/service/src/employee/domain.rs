use models::employee::{self, NewEmployee};

/// Employee fields as sent by a caller, used both for creation and as an update patch.
///
/// `None` means "not provided": on creation the column stays null, on update the
/// stored value is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeInput {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub salary: Option<i32>,
    pub company_id: Option<i32>,
}

impl EmployeeInput {
    /// Overwrite each field of `employee` this input carries a value for.
    pub fn apply_to(self, employee: &mut employee::Model) {
        if let Some(name) = self.name { employee.name = Some(name); }
        if let Some(age) = self.age { employee.age = Some(age); }
        if let Some(gender) = self.gender { employee.gender = Some(gender); }
        if let Some(salary) = self.salary { employee.salary = Some(salary); }
        if let Some(company_id) = self.company_id { employee.company_id = Some(company_id); }
    }
}

impl From<EmployeeInput> for NewEmployee {
    fn from(i: EmployeeInput) -> Self {
        Self { name: i.name, age: i.age, gender: i.gender, salary: i.salary, company_id: i.company_id }
    }
}
