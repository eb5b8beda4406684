//! Passport entity and its form checks

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::RequestId;

/// Oldest accepted date of birth, in years before today.
const MAX_AGE_YEARS: u32 = 150;
/// Oldest accepted issue date, in years before today.
const MAX_ISSUE_AGE_YEARS: u32 = 20;
/// Passports expiring within this many months are refused.
const EXPIRY_MARGIN_MONTHS: u32 = 6;
const OCCUPATION_MAX_CHARS: usize = 100;

/// A passport owned by the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuing_authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_issue: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_expiry: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<i64>,
    #[serde(default = "primary_by_default")]
    pub primary_passport: bool,
}

fn primary_by_default() -> bool {
    true
}

impl Default for Passport {
    fn default() -> Self {
        Self {
            id: None,
            first_name: None,
            last_name: None,
            address: None,
            nationality: None,
            date_of_birth: None,
            place_of_birth: None,
            sex: None,
            occupation: None,
            issuing_authority: None,
            date_of_issue: None,
            date_of_expiry: None,
            passport_number: None,
            primary_passport: true,
        }
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().map_or("", str::trim)
}

fn is_name_like(value: &str) -> bool {
    value.chars().all(|c| {
        c.is_ascii_alphabetic()
            || ('\u{C0}'..='\u{FF}').contains(&c)
            || c.is_whitespace()
            || c == '\''
            || c == '-'
    })
}

/// Letters-only field of at least two characters.
fn check_name(
    errors: &mut BTreeMap<&'static str, &'static str>,
    field: &'static str,
    value: &str,
    too_short: &'static str,
    not_letters: &'static str,
) {
    if value.chars().count() < 2 {
        errors.insert(field, too_short);
    } else if !is_name_like(value) {
        errors.insert(field, not_letters);
    }
}

impl Passport {
    /// Copy with surrounding whitespace removed from the free-text fields.
    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.nationality,
            &mut self.place_of_birth,
            &mut self.address,
            &mut self.issuing_authority,
        ] {
            if let Some(value) = field {
                *value = value.trim().to_string();
            }
        }
        self
    }

    /// Whether the passport expires between `today` and six months later.
    pub fn expires_within_six_months(&self, today: NaiveDate) -> bool {
        let Some(expiry) = self.date_of_expiry else { return false };
        today
            .checked_add_months(Months::new(EXPIRY_MARGIN_MONTHS))
            .is_some_and(|limit| expiry >= today && expiry <= limit)
    }

    /// Days left before expiry; negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.date_of_expiry.map(|expiry| (expiry - today).num_days())
    }

    /// Field checks run before creation, relative to `today`.
    ///
    /// Returns field name → message; an empty map means the form is valid.
    pub fn validation_errors(&self, today: NaiveDate) -> BTreeMap<&'static str, &'static str> {
        let mut errors = BTreeMap::new();

        check_name(
            &mut errors,
            "firstName",
            text(&self.first_name),
            "Le prénom doit contenir au moins 2 caractères",
            "Le prénom ne doit contenir que des lettres",
        );
        check_name(
            &mut errors,
            "lastName",
            text(&self.last_name),
            "Le nom doit contenir au moins 2 caractères",
            "Le nom ne doit contenir que des lettres",
        );
        check_name(
            &mut errors,
            "nationality",
            text(&self.nationality),
            "La nationalité est obligatoire",
            "La nationalité ne doit contenir que des lettres",
        );

        if text(&self.sex).is_empty() {
            errors.insert("sex", "Le sexe est obligatoire");
        }

        match self.date_of_birth {
            None => {
                errors.insert("dateOfBirth", "La date de naissance est obligatoire");
            }
            Some(birth) if birth > today => {
                errors.insert("dateOfBirth", "La date ne peut pas être dans le futur");
            }
            Some(birth) if years_before(today, MAX_AGE_YEARS).is_some_and(|min| birth < min) => {
                errors.insert("dateOfBirth", "Date trop ancienne (max 150 ans)");
            }
            Some(_) => {}
        }

        if text(&self.place_of_birth).chars().count() < 2 {
            errors.insert("placeOfBirth", "Le lieu de naissance est obligatoire");
        }
        if text(&self.address).chars().count() < 5 {
            errors.insert("address", "L'adresse doit contenir au moins 5 caractères");
        }

        match self.date_of_issue {
            None => {
                errors.insert("dateOfIssue", "La date de délivrance est obligatoire");
            }
            Some(issue) if issue > today => {
                errors.insert("dateOfIssue", "La date ne peut pas être dans le futur");
            }
            Some(issue)
                if years_before(today, MAX_ISSUE_AGE_YEARS).is_some_and(|min| issue < min) =>
            {
                errors.insert("dateOfIssue", "Date trop ancienne (max 20 ans)");
            }
            Some(_) => {}
        }

        if let Some(message) = self.expiry_error(today) {
            errors.insert("dateOfExpiry", message);
        }

        if text(&self.issuing_authority).chars().count() < 3 {
            errors.insert("issuingAuthority", "Autorité obligatoire (min 3 caractères)");
        }
        if !self.passport_number.is_some_and(|n| n > 0) {
            errors.insert(
                "passportNumber",
                "Le numéro de passeport est obligatoire et doit être positif",
            );
        }
        if text(&self.occupation).chars().count() > OCCUPATION_MAX_CHARS {
            errors.insert("occupation", "La profession ne doit pas dépasser 100 caractères");
        }

        errors
    }

    fn expiry_error(&self, today: NaiveDate) -> Option<&'static str> {
        let Some(expiry) = self.date_of_expiry else {
            return Some("La date d'expiration est obligatoire");
        };
        // ordering against the issue date wins over the other checks
        if self.date_of_issue.is_some_and(|issue| expiry <= issue) {
            return Some("Doit être après la date de délivrance");
        }
        if expiry < today {
            Some("Le passeport est déjà expiré")
        } else if self.expires_within_six_months(today) {
            Some("ATTENTION: Ce passeport expire dans moins de 6 mois !")
        } else {
            None
        }
    }
}

fn years_before(today: NaiveDate, years: u32) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(years * 12))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 1)
    }

    fn valid() -> Passport {
        Passport {
            first_name: Some("Amira".into()),
            last_name: Some("Ben Salah".into()),
            address: Some("12 rue de Carthage, Tunis".into()),
            nationality: Some("Tunisienne".into()),
            date_of_birth: Some(date(1990, 4, 12)),
            place_of_birth: Some("Sfax".into()),
            sex: Some("F".into()),
            issuing_authority: Some("Ministère de l'Intérieur".into()),
            date_of_issue: Some(date(2022, 1, 10)),
            date_of_expiry: Some(date(2032, 1, 9)),
            passport_number: Some(1234567),
            ..Passport::default()
        }
    }

    #[test]
    fn complete_passport_is_valid() {
        assert!(valid().validation_errors(today()).is_empty());
    }

    #[test]
    fn names_must_be_letters() {
        let passport = Passport {
            first_name: Some("A".into()),
            last_name: Some("R2D2".into()),
            nationality: Some("Française".into()),
            ..valid()
        };
        let errors = passport.validation_errors(today());
        assert_eq!(errors["firstName"], "Le prénom doit contenir au moins 2 caractères");
        assert_eq!(errors["lastName"], "Le nom ne doit contenir que des lettres");
        assert!(!errors.contains_key("nationality"));
    }

    #[test]
    fn dates_are_bounded() {
        let passport = Passport {
            date_of_birth: Some(date(1850, 1, 1)),
            date_of_issue: Some(date(2025, 7, 1)),
            ..valid()
        };
        let errors = passport.validation_errors(today());
        assert_eq!(errors["dateOfBirth"], "Date trop ancienne (max 150 ans)");
        assert_eq!(errors["dateOfIssue"], "La date ne peut pas être dans le futur");
    }

    #[test]
    fn expiry_rules() {
        let expired = Passport { date_of_expiry: Some(date(2025, 5, 31)), ..valid() };
        assert_eq!(expired.validation_errors(today())["dateOfExpiry"], "Le passeport est déjà expiré");

        let soon = Passport { date_of_expiry: Some(date(2025, 11, 30)), ..valid() };
        assert!(soon.expires_within_six_months(today()));
        assert!(soon.validation_errors(today()).contains_key("dateOfExpiry"));
        assert_eq!(soon.days_until_expiry(today()), Some(182));

        let before_issue = Passport { date_of_expiry: Some(date(2022, 1, 10)), ..valid() };
        assert_eq!(
            before_issue.validation_errors(today())["dateOfExpiry"],
            "Doit être après la date de délivrance"
        );
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = Passport::default().validation_errors(today());
        for field in [
            "firstName",
            "lastName",
            "nationality",
            "sex",
            "dateOfBirth",
            "placeOfBirth",
            "address",
            "dateOfIssue",
            "dateOfExpiry",
            "issuingAuthority",
            "passportNumber",
        ] {
            assert!(errors.contains_key(field), "{field}");
        }
        assert!(!errors.contains_key("occupation"));
    }

    #[test]
    fn trimming_and_primary_default() {
        let passport: Passport =
            serde_json::from_str(r#"{"firstName": "  Amira ", "passportNumber": 42}"#).unwrap();
        assert!(passport.primary_passport);
        assert_eq!(passport.trimmed().first_name.as_deref(), Some("Amira"));
    }
}
