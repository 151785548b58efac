//! Global-ID helpers.
//!
//! Several tools accept bare numeric ids while the Admin API wants the
//! URI-style `gid://shopify/<Type>/<id>` form. These are pure string
//! transforms with no validation; callers check the digits-only constraint
//! before converting.

/// `1234` -> `gid://shopify/Customer/1234`
pub fn customer_gid(id: &str) -> String {
    format!("gid://shopify/Customer/{id}")
}

/// `1234` -> `gid://shopify/Order/1234`
pub fn order_gid(id: &str) -> String {
    format!("gid://shopify/Order/{id}")
}

/// True when `id` is non-empty and contains only ASCII digits.
pub fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}
