use crate::common::*;

#[doc = "이메일 주소의 local@domain 형태를 검사하는 정규식"]
pub static EMAIL_REGEX: once_lazy<Regex> = once_lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL_REGEX must compile")
});

#[doc = ""]
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_REGEX.is_match(address)
}
