//! Contract types for the Mini Jet HR REST API.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employment contract, nested under an employee.
///
/// `contract_type` and `ccnl` are backend-defined vocabularies (e.g.
/// `indeterminato`, `metalmeccanico`) and are passed through as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    /// Database ID
    pub id: u64,
    /// Owning employee ID
    pub employee: u64,
    /// Contract type
    pub contract_type: String,
    /// National collective agreement
    pub ccnl: String,
    /// Gross annual salary, serialized as a decimal string
    pub ral: Decimal,
    /// Contract start date
    pub start_date: NaiveDate,
    /// Contract end date, absent for open-ended contracts
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Stored path of the uploaded PDF, if any
    #[serde(default)]
    pub document: Option<String>,
    /// Absolute download URL for the PDF, if any
    #[serde(default)]
    pub document_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// True when a PDF is attached to this contract.
    pub fn has_document(&self) -> bool {
        self.document_url.is_some()
    }
}
