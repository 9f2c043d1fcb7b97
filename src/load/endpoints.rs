use crate::error::ValidationError;

/// Paths exercised when neither the command line nor the config names any.
pub const DEFAULT_ENDPOINTS: [&str; 8] = [
    "/",
    "/db",
    "/compute",
    "/error",
    "/order",
    "/pay",
    "/checkout",
    "/buy",
];

/// Ordered, non-empty list of path suffixes appended to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointList(Vec<String>);

impl EndpointList {
    /// Builds a list from explicit paths, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyEndpointList` when `paths` is empty.
    pub fn new(paths: Vec<String>) -> Result<Self, ValidationError> {
        if paths.is_empty() {
            return Err(ValidationError::EmptyEndpointList);
        }
        Ok(Self(paths))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for EndpointList {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINTS.iter().map(|path| (*path).to_owned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_keeps_fixed_order() -> Result<(), String> {
        let list = EndpointList::default();
        let paths: Vec<&str> = list.iter().collect();
        if paths != ["/", "/db", "/compute", "/error", "/order", "/pay", "/checkout", "/buy"] {
            return Err(format!("Unexpected default endpoints: {:?}", paths));
        }
        Ok(())
    }

    #[test]
    fn empty_list_is_rejected() -> Result<(), String> {
        match EndpointList::new(Vec::new()) {
            Err(ValidationError::EmptyEndpointList) => Ok(()),
            Err(err) => Err(format!("Unexpected error: {}", err)),
            Ok(_) => Err("Expected empty list to be rejected".to_owned()),
        }
    }
}
