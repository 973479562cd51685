#[cfg(test)]
mod tests {
    use crate::date::CalendarDate;
    use crate::error::{FormField, ValidationError};
    use crate::validation::{
        is_valid_email, is_valid_phone, validate, BookingFields, BookingForm, BookingValidator,
        ServiceKind,
    };

    fn day() -> CalendarDate {
        CalendarDate::from_ymd(2026, 10, 15).unwrap()
    }

    fn complete_fields() -> BookingFields {
        BookingFields {
            service: "business".to_string(),
            date: Some(day()),
            slot: Some("9:00 AM".to_string()),
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: "5551234567".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_complete_fields_produce_request() {
        let request = validate(&complete_fields()).unwrap();
        assert_eq!(request.service(), ServiceKind::Business);
        assert_eq!(request.date(), day());
        assert_eq!(request.slot(), "9:00 AM");
        assert_eq!(request.name(), "A");
        assert_eq!(request.email(), "a@b.com");
        assert_eq!(request.phone(), "5551234567");
        assert_eq!(request.notes(), None);
    }

    #[test]
    fn test_empty_service_is_missing() {
        let fields = BookingFields {
            service: String::new(),
            ..complete_fields()
        };
        assert_eq!(
            validate(&fields),
            Err(ValidationError::MissingRequiredField(FormField::Service))
        );
    }

    #[test]
    fn test_each_required_field_is_checked() {
        let cases = [
            (
                BookingFields {
                    date: None,
                    ..complete_fields()
                },
                FormField::Date,
            ),
            (
                BookingFields {
                    slot: None,
                    ..complete_fields()
                },
                FormField::Slot,
            ),
            (
                BookingFields {
                    name: "   ".to_string(),
                    ..complete_fields()
                },
                FormField::Name,
            ),
            (
                BookingFields {
                    email: String::new(),
                    ..complete_fields()
                },
                FormField::Email,
            ),
            (
                BookingFields {
                    phone: "\t".to_string(),
                    ..complete_fields()
                },
                FormField::Phone,
            ),
        ];
        for (fields, field) in cases {
            assert_eq!(
                validate(&fields),
                Err(ValidationError::MissingRequiredField(field))
            );
        }
    }

    #[test]
    fn test_missing_field_wins_over_bad_email() {
        let fields = BookingFields {
            name: String::new(),
            email: "not-an-email".to_string(),
            ..complete_fields()
        };
        assert_eq!(
            validate(&fields),
            Err(ValidationError::MissingRequiredField(FormField::Name))
        );
    }

    #[test]
    fn test_invalid_email() {
        let fields = BookingFields {
            email: "not-an-email".to_string(),
            ..complete_fields()
        };
        assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_email_with_surrounding_whitespace_is_invalid() {
        for email in [" a@b.com", "a@b.com ", "\ta@b.com\n"] {
            let fields = BookingFields {
                email: email.to_string(),
                ..complete_fields()
            };
            assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail));
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn test_unknown_service() {
        let fields = BookingFields {
            service: "astrology".to_string(),
            ..complete_fields()
        };
        assert_eq!(
            validate(&fields),
            Err(ValidationError::UnknownService("astrology".to_string()))
        );
    }

    #[test]
    fn test_phone_format_only_checked_when_strict() {
        let fields = BookingFields {
            phone: "call me".to_string(),
            ..complete_fields()
        };
        assert!(validate(&fields).is_ok());
        assert_eq!(
            BookingValidator::new(true).validate(&fields),
            Err(ValidationError::InvalidPhone)
        );
        assert!(is_valid_phone("+41 79 123 45 67"));
        assert!(!is_valid_phone("0123"));
    }

    #[test]
    fn test_values_are_trimmed_and_notes_kept() {
        let fields = BookingFields {
            name: "  Ada Lovelace ".to_string(),
            notes: " Bring the slides ".to_string(),
            ..complete_fields()
        };
        let request = validate(&fields).unwrap();
        assert_eq!(request.name(), "Ada Lovelace");
        assert_eq!(request.notes(), Some("Bring the slides"));
    }

    #[test]
    fn test_from_form_takes_selection() {
        let form = BookingForm {
            service: "career".to_string(),
            name: "B".to_string(),
            email: "b@c.io".to_string(),
            phone: "5550000000".to_string(),
            notes: String::new(),
        };
        let fields = BookingFields::from_form(&form, Some(day()), Some("2:00 PM"));
        assert_eq!(fields.date, Some(day()));
        assert_eq!(fields.slot.as_deref(), Some("2:00 PM"));

        let request = validate(&fields).unwrap();
        assert_eq!(request.service().display_name(), "Career Coaching");
    }

    #[test]
    fn test_service_codes_round_trip() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.code().parse::<ServiceKind>(), Ok(kind));
        }
    }
}
