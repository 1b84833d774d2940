use crate::RetryPolicy;

use saathi_core::ValidationLimits;

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Tunables for the profile services, built from configuration at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSettings {
    pub limits: ValidationLimits,
    /// Page size used when a listing omits `limit`
    pub default_page_size: usize,
    pub max_page_size: usize,
    /// Applied to idempotent store reads
    pub retry: RetryPolicy,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            limits: ValidationLimits::default(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            retry: RetryPolicy::default(),
        }
    }
}
