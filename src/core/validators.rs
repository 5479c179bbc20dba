use regex::Regex;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send>;

pub fn required(message: impl Into<String>) -> Validator {
    let msg = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(msg.clone())
        } else {
            Ok(())
        }
    })
}

/// Minimum character count after trimming surrounding whitespace.
pub fn min_trimmed_length(min: usize, message: impl Into<String>) -> Validator {
    let msg = message.into();
    Box::new(move |value: &str| {
        if value.trim().chars().count() < min {
            Err(msg.clone())
        } else {
            Ok(())
        }
    })
}

pub fn pattern(pattern: &str, message: impl Into<String>) -> Validator {
    let re = Regex::new(pattern).expect("Invalid regex pattern");
    let msg = message.into();
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(msg.clone())
        }
    })
}

pub fn email(message: impl Into<String>) -> Validator {
    pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", message)
}
