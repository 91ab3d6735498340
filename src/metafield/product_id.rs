/// Prefix of a Shopify product global identifier.
pub const PRODUCT_GID_PREFIX: &str = "gid://shopify/Product/";

/// Product reference as accepted from callers: either a bare id (`"123"`) or
/// a global id (`"gid://shopify/Product/123"`). The remainder is not checked;
/// malformed values pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductId(String);

impl ProductId {
    pub fn normalize(raw: &str) -> Self {
        let bare = raw.strip_prefix(PRODUCT_GID_PREFIX).unwrap_or(raw);
        Self(bare.to_string())
    }

    pub fn bare(&self) -> &str {
        &self.0
    }

    pub fn gid(&self) -> String {
        format!("{}{}", PRODUCT_GID_PREFIX, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_and_global_ids_agree() {
        let a = ProductId::normalize("gid://shopify/Product/123");
        let b = ProductId::normalize("123");
        assert_eq!(a, b);
        assert_eq!(a.bare(), "123");
        assert_eq!(a.gid(), "gid://shopify/Product/123");
    }

    #[test]
    fn prefix_is_stripped_once() {
        let id = ProductId::normalize("gid://shopify/Product/gid://shopify/Product/9");
        assert_eq!(id.bare(), "gid://shopify/Product/9");
    }

    #[test]
    fn malformed_ids_pass_through() {
        let id = ProductId::normalize("gid://shopify/Variant/77");
        assert_eq!(id.gid(), "gid://shopify/Product/gid://shopify/Variant/77");

        let id = ProductId::normalize("not-a-number");
        assert_eq!(id.bare(), "not-a-number");
    }
}
