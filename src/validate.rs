//! Form Validation
//!
//! Trivial pre-submit checks performed before any network call. Messages are
//! the ones shown to the user as error toasts.

/// A group creation form that passed validation
#[derive(Clone, Debug, PartialEq)]
pub struct GroupDraft {
    pub name: String,
    pub member_emails: Vec<String>,
}

/// An expense form that passed validation
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: f64,
    pub paid_by: String,
    pub split_among: Vec<String>,
}

/// Basic `local@domain.tld` check: no whitespace, exactly one `@`, and a
/// dot-separated domain with text on both sides of the last dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    Ok(())
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), String> {
    if name.trim().is_empty() || email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address".to_string());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    Ok(())
}

/// Validate the create-group form. Blank email rows are dropped; the
/// remaining ones must all look like email addresses.
pub fn validate_group(name: &str, member_emails: &[String]) -> Result<GroupDraft, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Please enter a group name".to_string());
    }

    let emails: Vec<String> = member_emails
        .iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect();

    if emails.is_empty() {
        return Err("Please add at least one member email".to_string());
    }
    if emails.iter().any(|e| !is_valid_email(e)) {
        return Err("Please enter valid email addresses".to_string());
    }

    Ok(GroupDraft {
        name: name.to_string(),
        member_emails: emails,
    })
}

/// Validate the add-expense form. The amount arrives as the raw input string
/// and must parse to a positive number.
pub fn validate_expense(
    title: &str,
    amount: &str,
    paid_by: &str,
    split_among: &[String],
) -> Result<ExpenseDraft, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Please enter an expense title".to_string());
    }

    let amount: f64 = match amount.trim().parse() {
        Ok(value) if value > 0.0 => value,
        _ => return Err("Please enter a valid amount".to_string()),
    };

    if paid_by.is_empty() {
        return Err("Please select who paid for this expense".to_string());
    }
    if split_among.is_empty() {
        return Err("Please select at least one person to split the expense with".to_string());
    }

    Ok(ExpenseDraft {
        title: title.to_string(),
        amount,
        paid_by: paid_by.to_string(),
        split_among: split_among.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("friend@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("spaced user@example.com"));
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("a@b.com", "secret").is_ok());
        assert!(validate_login("", "secret").is_err());
        assert!(validate_login("a@b.com", "").is_err());
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration("Alice", "alice@example.com", "secret1").is_ok());
        assert!(validate_registration("", "alice@example.com", "secret1").is_err());
        assert!(validate_registration("Alice", "not-an-email", "secret1").is_err());
        assert_eq!(
            validate_registration("Alice", "alice@example.com", "short"),
            Err("Password must be at least 6 characters".to_string())
        );
    }

    #[test]
    fn test_validate_group_drops_blank_rows() {
        let emails = vec![
            "friend@example.com".to_string(),
            "".to_string(),
            "  ".to_string(),
        ];
        let draft = validate_group("Weekend Trip", &emails).unwrap();
        assert_eq!(draft.member_emails, vec!["friend@example.com"]);
    }

    #[test]
    fn test_validate_group_rejections() {
        let valid = vec!["friend@example.com".to_string()];
        assert_eq!(
            validate_group("  ", &valid),
            Err("Please enter a group name".to_string())
        );
        assert_eq!(
            validate_group("Trip", &["".to_string()]),
            Err("Please add at least one member email".to_string())
        );
        assert_eq!(
            validate_group("Trip", &["bogus".to_string()]),
            Err("Please enter valid email addresses".to_string())
        );
    }

    #[test]
    fn test_validate_expense() {
        let split = vec!["u1".to_string(), "u2".to_string()];
        let draft = validate_expense(" Dinner ", "85.50", "u1", &split).unwrap();
        assert_eq!(draft.title, "Dinner");
        assert_eq!(draft.amount, 85.5);
        assert_eq!(draft.split_among, split);
    }

    #[test]
    fn test_validate_expense_blocks_bad_input() {
        let split = vec!["u1".to_string()];
        assert!(validate_expense("", "10", "u1", &split).is_err());
        assert_eq!(
            validate_expense("Dinner", "0", "u1", &split),
            Err("Please enter a valid amount".to_string())
        );
        assert_eq!(
            validate_expense("Dinner", "-5", "u1", &split),
            Err("Please enter a valid amount".to_string())
        );
        assert_eq!(
            validate_expense("Dinner", "abc", "u1", &split),
            Err("Please enter a valid amount".to_string())
        );
        assert_eq!(
            validate_expense("Dinner", "10", "", &split),
            Err("Please select who paid for this expense".to_string())
        );
        assert_eq!(
            validate_expense("Dinner", "10", "u1", &[]),
            Err("Please select at least one person to split the expense with".to_string())
        );
    }
}
