use super::domain::CustomerRecord;

/// Validation failures raised while normalizing a contact record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("last name is required")]
    MissingLastName,
    #[error("first name is required")]
    MissingFirstName,
    #[error("email address '{found}' is malformed")]
    MalformedEmail { found: String },
    #[error("phone number must contain 10 or 11 digits, found {found}")]
    MalformedPhone { found: String },
    #[error("postal code must contain 7 digits, found {found}")]
    MalformedPostalCode { found: String },
}

/// Guard producing clean [`CustomerRecord`] values for the rest of the back
/// office. A record is normalized as a unit: the first violation rejects the
/// whole record and nothing partial is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerIntake;

impl CustomerIntake {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, record: CustomerRecord) -> Result<CustomerRecord, IntakeViolation> {
        let last_name = record.last_name.trim().to_string();
        if last_name.is_empty() {
            return Err(IntakeViolation::MissingLastName);
        }

        let first_name = record.first_name.trim().to_string();
        if first_name.is_empty() {
            return Err(IntakeViolation::MissingFirstName);
        }

        let email = normalize_email(record.email.trim())?;
        let phone = normalize_phone(record.phone.trim())?;
        let postal_code = normalize_postal_code(record.postal_code.trim())?;

        Ok(CustomerRecord {
            last_name,
            first_name,
            email,
            phone,
            postal_code,
            address: record.address.trim().to_string(),
        })
    }
}

fn normalize_email(raw: &str) -> Result<String, IntakeViolation> {
    let lowered = raw.to_ascii_lowercase();
    let malformed = || IntakeViolation::MalformedEmail {
        found: raw.to_string(),
    };

    let (local, domain) = lowered.split_once('@').ok_or_else(malformed)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(malformed());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(malformed());
    }
    if lowered.chars().any(char::is_whitespace) {
        return Err(malformed());
    }

    Ok(lowered)
}

fn normalize_phone(raw: &str) -> Result<String, IntakeViolation> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if !(10..=11).contains(&digits.len()) {
        return Err(IntakeViolation::MalformedPhone {
            found: raw.to_string(),
        });
    }
    Ok(digits)
}

/// Seven-digit postal codes are stored in the `NNN-NNNN` display form.
fn normalize_postal_code(raw: &str) -> Result<String, IntakeViolation> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 7 {
        return Err(IntakeViolation::MalformedPostalCode {
            found: raw.to_string(),
        });
    }
    Ok(format!("{}-{}", &digits[..3], &digits[3..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_record() -> CustomerRecord {
        CustomerRecord {
            last_name: "  Sato ".to_string(),
            first_name: " Yuki".to_string(),
            email: " Yuki.Sato@Example.JP ".to_string(),
            phone: "090-1234-5678".to_string(),
            postal_code: "1500041".to_string(),
            address: "  2-3-1 Jingumae, Shibuya  ".to_string(),
        }
    }

    #[test]
    fn normalizes_every_field_as_a_unit() {
        let record = CustomerIntake::new()
            .normalize(raw_record())
            .expect("record normalizes");

        assert_eq!(record.last_name, "Sato");
        assert_eq!(record.first_name, "Yuki");
        assert_eq!(record.email, "yuki.sato@example.jp");
        assert_eq!(record.phone, "09012345678");
        assert_eq!(record.postal_code, "150-0041");
        assert_eq!(record.address, "2-3-1 Jingumae, Shibuya");
    }

    #[test]
    fn rejects_blank_names() {
        let mut record = raw_record();
        record.last_name = "   ".to_string();
        assert_eq!(
            CustomerIntake::new().normalize(record),
            Err(IntakeViolation::MissingLastName)
        );

        let mut record = raw_record();
        record.first_name = String::new();
        assert_eq!(
            CustomerIntake::new().normalize(record),
            Err(IntakeViolation::MissingFirstName)
        );
    }

    #[test]
    fn rejects_malformed_email_shapes() {
        for bad in ["no-at-sign.example.jp", "@example.jp", "a@b", "a@.jp", "a b@example.jp"] {
            let mut record = raw_record();
            record.email = bad.to_string();
            let result = CustomerIntake::new().normalize(record);
            assert!(
                matches!(result, Err(IntakeViolation::MalformedEmail { .. })),
                "expected rejection for {bad:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn rejects_phone_numbers_with_wrong_digit_counts() {
        let mut record = raw_record();
        record.phone = "03-1234".to_string();
        assert!(matches!(
            CustomerIntake::new().normalize(record),
            Err(IntakeViolation::MalformedPhone { .. })
        ));
    }

    #[test]
    fn accepts_ten_digit_landlines() {
        let mut record = raw_record();
        record.phone = "03 1234 5678".to_string();
        let normalized = CustomerIntake::new()
            .normalize(record)
            .expect("record normalizes");
        assert_eq!(normalized.phone, "0312345678");
    }

    #[test]
    fn formats_postal_codes_with_a_hyphen() {
        let mut record = raw_record();
        record.postal_code = "150-0041".to_string();
        let normalized = CustomerIntake::new()
            .normalize(record)
            .expect("record normalizes");
        assert_eq!(normalized.postal_code, "150-0041");

        let mut record = raw_record();
        record.postal_code = "15041".to_string();
        assert!(matches!(
            CustomerIntake::new().normalize(record),
            Err(IntakeViolation::MalformedPostalCode { .. })
        ));
    }
}
