//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use std::time::Duration;

use folio_core::RetryPolicy;

// =============================================================================
// Application Metadata
// =============================================================================

/// Site owner, shown in the footer and used as image alt text.
pub const OWNER_NAME: &str = "Patrick James Stephen";

/// Year in the footer copyright line.
pub const COPYRIGHT_YEAR: u16 = 2025;

// =============================================================================
// Network Configuration
// =============================================================================

/// Portfolio feed endpoint (XML).
pub const FEED_URL: &str = "https://pjsbackend.onrender.com/api/portfolio";

/// Fetch request timeout in milliseconds.
///
/// The backend idles when unused and can take several seconds to wake up.
pub const FETCH_TIMEOUT_MS: i32 = 15000;

/// Feed retry settings.
pub mod retry {
    /// Total attempts including the first request.
    pub const MAX_ATTEMPTS: u32 = 3;
    /// Delay before the first retry.
    pub const BASE_DELAY_MS: u64 = 500;
    /// Cap for any single backoff delay.
    pub const MAX_DELAY_MS: u64 = 4000;
}

/// Retry policy used for the feed request.
pub fn feed_retry_policy() -> RetryPolicy {
    RetryPolicy::new(
        retry::MAX_ATTEMPTS,
        Duration::from_millis(retry::BASE_DELAY_MS),
        Duration::from_millis(retry::MAX_DELAY_MS),
    )
}

// =============================================================================
// Profile Links
// =============================================================================

/// Contact details shown next to the logo.
pub mod profile {
    pub const INSTAGRAM_HANDLE: &str = "@patrickjstephen";
    pub const INSTAGRAM_URL: &str = "https://www.instagram.com/patrickjstephen";
    pub const EMAIL: &str = "patrickjstephen@gmail.com";
}

// =============================================================================
// Branding Assets
// =============================================================================

/// Logo assets for the masthead and footer.
pub mod branding {
    /// Streaming asset id of the animated masthead logo.
    pub const LOGO_VIDEO_ID: &str = "b00g6b019xIbcDkfxb7ybIBMG6ZBWVCZ1x3W3JkAASbNw";
    /// Still logo shown in the footer.
    pub const FOOTER_LOGO_URL: &str = "https://pjsbackend.onrender.com/static/patrickjstephen.jpg";
    /// Masthead logo aspect ratio (width / height).
    pub const LOGO_ASPECT_RATIO: &str = "6/1";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Placeholder shown while the feed is loading.
pub const LOADING_TEXT: &str = "Loading portfolio...";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
