//! Client-side checks applied before a creation is sent

use chrono::{NaiveDate, Utc};
use travelgate_domain::constants::messages;
use travelgate_domain::{
    Mission, Passport, Project, RequestId, Result, TravelRequest, TravelgateError, VisaRequest,
};

/// Payload accepted by a creation endpoint.
pub trait Submission: Send + Sized + 'static {
    /// Validate and normalize; a new request always starts `PENDING`.
    fn prepare(self) -> Result<Self>;
}

impl Submission for TravelRequest {
    fn prepare(self) -> Result<Self> {
        Ok(self.into_submission())
    }
}

impl Submission for VisaRequest {
    fn prepare(self) -> Result<Self> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(self.into_submission())
        } else {
            let detail: Vec<_> = errors.into_values().collect();
            Err(TravelgateError::InvalidInput(detail.join(", ")))
        }
    }
}

impl Submission for Project {
    fn prepare(self) -> Result<Self> {
        Ok(self)
    }
}

impl Submission for Mission {
    fn prepare(self) -> Result<Self> {
        Ok(self)
    }
}

impl Submission for Passport {
    fn prepare(self) -> Result<Self> {
        check_passport(self, Utc::now().date_naive())
    }
}

/// Trim, then run the form checks as of `today`.
pub fn check_passport(passport: Passport, today: NaiveDate) -> Result<Passport> {
    let passport = passport.trimmed();
    let errors = passport.validation_errors(today);
    if errors.is_empty() {
        Ok(passport)
    } else {
        let detail: Vec<_> = errors.into_values().collect();
        Err(TravelgateError::InvalidInput(detail.join(", ")))
    }
}

/// A visa request together with the passport it is filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisaRequest {
    pub passport_id: Option<RequestId>,
    pub request: VisaRequest,
}

impl NewVisaRequest {
    pub fn new(passport_id: RequestId, request: VisaRequest) -> Self {
        Self { passport_id: Some(passport_id), request }
    }
}

impl Submission for NewVisaRequest {
    fn prepare(self) -> Result<Self> {
        if !self.passport_id.is_some_and(|id| id > 0) {
            return Err(TravelgateError::InvalidInput(messages::PASSPORT_REQUIRED.to_string()));
        }
        Ok(Self { passport_id: self.passport_id, request: self.request.prepare()? })
    }
}
