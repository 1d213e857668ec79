use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub full_name: String,
    pub avatar: String,
    pub department: String,
    pub birth_date: String,
    pub salary: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `POST /api/employees`. A client may supply its own id;
/// otherwise one is generated on insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    pub id: Option<Uuid>,

    #[validate(length(min = 2, message = "Full name is required"))]
    pub full_name: String,

    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar: String,

    #[validate(length(min = 2, message = "Department is required"))]
    pub department: String,

    #[validate(custom(function = birth_date_format))]
    pub birth_date: String,

    #[validate(range(min = 0.0, message = "Salary must be a positive number"))]
    pub salary: f64,
}

/// Payload for `PATCH /api/employees/:id`. Every field is optional;
/// constraints only apply to fields that are present.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 2, message = "Full name is required"))]
    pub full_name: Option<String>,

    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar: Option<String>,

    #[validate(length(min = 2, message = "Department is required"))]
    pub department: Option<String>,

    #[validate(custom(function = birth_date_format))]
    pub birth_date: Option<String>,

    #[validate(range(min = 0.0, message = "Salary must be a positive number"))]
    pub salary: Option<f64>,
}

impl Employee {
    pub fn from_request(req: CreateEmployeeRequest) -> Self {
        let now = Utc::now();
        Self {
            id: req.id.unwrap_or_else(Uuid::new_v4),
            full_name: req.full_name,
            avatar: req.avatar,
            department: req.department,
            birth_date: req.birth_date,
            salary: req.salary,
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateEmployeeRequest {
    /// Applies the present fields onto an existing record and bumps
    /// `updated_at`.
    pub fn apply(self, employee: &mut Employee) {
        if let Some(full_name) = self.full_name {
            employee.full_name = full_name;
        }
        if let Some(avatar) = self.avatar {
            employee.avatar = avatar;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(birth_date) = self.birth_date {
            employee.birth_date = birth_date;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        employee.updated_at = Utc::now();
    }
}

// Shape check only (digits and dashes in YYYY-MM-DD positions); calendar
// validity is not enforced.
fn birth_date_format(value: &str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if well_formed {
        Ok(())
    } else {
        let mut err = ValidationError::new("birth_date_format");
        err.message = Some("Birth date must be in YYYY-MM-DD format".into());
        Err(err)
    }
}
